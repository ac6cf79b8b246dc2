//! Common test utilities for modsync integration tests
//!
//! Every test gets its own home directory, game directory and mirror
//! catalog inside one temp dir, so tests never touch the user's data and
//! never need the network.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A published mod as it appears in the mirror manifest
pub struct ModEntry {
    pub name: String,
    pub version: String,
    pub requires: Vec<String>,
    pub incompatible: Vec<String>,
    pub author: String,
    pub tags: Vec<String>,
}

impl ModEntry {
    pub fn new(name: &str, version: &str, requires: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            requires: requires.iter().map(|r| (*r).to_string()).collect(),
            incompatible: Vec::new(),
            author: "tester".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn incompatible_with(mut self, names: &[&str]) -> Self {
        self.incompatible = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn to_json(&self) -> Value {
        let requires = if self.requires.is_empty() {
            json!([""])
        } else {
            json!(self.requires)
        };
        json!({
            "name": self.name,
            "friendly_name": self.name,
            "description": format!("{} for testing", self.name),
            "author": self.author,
            "version": self.version,
            "requires": requires,
            "incompatible": self.incompatible,
            "tags": self.tags,
        })
    }
}

/// Write a package archive whose `_metadata` entry is `metadata`
pub fn write_package(path: &Path, metadata: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create package directory");
    }
    let file = fs::File::create(path).expect("Failed to create package");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    writer
        .start_file("_metadata", options)
        .expect("Failed to start metadata entry");
    writer
        .write_all(metadata.as_bytes())
        .expect("Failed to write metadata");
    writer
        .start_file("mod.pck", options)
        .expect("Failed to start payload entry");
    writer.write_all(b"payload").expect("Failed to write payload");
    writer.finish().expect("Failed to finish package");
}

/// An isolated modsync environment
pub struct TestEnv {
    pub temp: TempDir,
    pub home: PathBuf,
    pub game: PathBuf,
    pub mirror: PathBuf,
    mods: Vec<ModEntry>,
    bundles: Vec<Value>,
    version: u64,
}

impl TestEnv {
    /// Create the directories and an empty mirror at version 1
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let game = temp.path().join("game");
        let mirror = temp.path().join("mirror");
        fs::create_dir_all(game.join("mods")).expect("Failed to create game directory");
        fs::create_dir_all(mirror.join("mod")).expect("Failed to create mirror");
        let env = Self {
            temp,
            home,
            game,
            mirror,
            mods: Vec::new(),
            bundles: Vec::new(),
            version: 1,
        };
        env.write_mirror();
        env
    }

    /// Add or replace a published mod and bump the manifest version
    pub fn publish(&mut self, entry: ModEntry) -> &mut Self {
        let metadata = entry.to_json().to_string();
        write_package(
            &self.mirror.join("mod").join(format!("{}.zip", entry.name)),
            &metadata,
        );
        self.mods.retain(|m| m.name != entry.name);
        self.mods.push(entry);
        self.version += 1;
        self.write_mirror();
        self
    }

    pub fn publish_bundle(&mut self, name: &str, version: &str, mods: &[&str]) -> &mut Self {
        self.bundles.retain(|b| b["name"] != name);
        self.bundles.push(json!({
            "name": name,
            "friendly_name": name,
            "description": "",
            "author": "tester",
            "version": version,
            "mods": mods,
        }));
        self.version += 1;
        self.write_mirror();
        self
    }

    pub fn set_client_version(&self, version: &str) {
        fs::write(self.mirror.join("client_version"), version)
            .expect("Failed to write client version");
    }

    fn write_mirror(&self) {
        let mods: Vec<Value> = self.mods.iter().map(ModEntry::to_json).collect();
        let manifest = json!({
            "mods": mods,
            "bundles": self.bundles,
            "version": self.version.to_string(),
        });
        fs::write(self.mirror.join("mod_manifest"), manifest.to_string())
            .expect("Failed to write manifest");
        fs::write(self.mirror.join("manifest_version"), self.version.to_string())
            .expect("Failed to write manifest version");
        if !self.mirror.join("client_version").exists() {
            self.set_client_version("");
        }
    }

    /// A `modsync` command pointed at this environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("modsync").expect("Failed to find modsync binary");
        cmd.env("MODSYNC_HOME", &self.home);
        cmd.env("MODSYNC_CATALOG", &self.mirror);
        cmd.env_remove("MODSYNC_PASSPHRASE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Point the install location at the game directory and sync once
    pub fn init(&self) {
        self.cmd()
            .args(["config", "set", "install-location"])
            .arg(&self.game)
            .assert()
            .success();
        self.cmd().arg("sync").assert().success();
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.game.join("mods").join(format!("{name}.zip")).is_file()
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.home.join("mods").join(format!("{name}.zip")).is_file()
    }

    /// Parse one of the JSON documents under the home directory
    pub fn read_document(&self, file: &str) -> Value {
        let text = fs::read_to_string(self.home.join(file)).expect("Failed to read document");
        serde_json::from_str(&text).expect("Failed to parse document")
    }

    /// Names of the installed mods, in installation order
    pub fn installed_names(&self) -> Vec<String> {
        self.read_document("installed_mods.json")
            .as_array()
            .map(|mods| {
                mods.iter()
                    .filter_map(|m| m["name"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.read_document("installed_mods.json")
            .as_array()
            .and_then(|mods| mods.iter().find(|m| m["name"] == name))
            .and_then(|m| m["disabled"].as_bool())
            .unwrap_or(false)
    }
}
