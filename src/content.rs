//! Content roots: where package files live on disk
//!
//! Two directories are involved:
//! - the staging root (`<home>/mods`) keeps every installed package, enabled or not
//! - the active root (`<install_location>/mods`) holds the packages the game loads
//!
//! Enabling a mod copies its staged package into the active root; disabling
//! it deletes the active copy. Packages are always named `<mod name>.zip`,
//! so a mod name must be a single plain path segment; every operation that
//! touches the disk checks that first.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, config, fs as fs_err, package};

/// File extension of package archives
pub const PACKAGE_EXTENSION: &str = "zip";

/// Staging and active package directories
#[derive(Debug, Clone)]
pub struct ContentRoots {
    staging: PathBuf,
    active: Option<PathBuf>,
}

impl ContentRoots {
    /// `install_location` is the game directory; `None` or empty leaves the active root unset
    pub fn new(staging: PathBuf, install_location: Option<&Path>) -> Self {
        let active = install_location
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join("mods"));
        Self { staging, active }
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging
    }

    /// The active root, whether or not it exists
    pub fn active_dir(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// True when the active root is configured and exists
    pub fn is_available(&self) -> bool {
        self.active.as_deref().is_some_and(Path::is_dir)
    }

    fn require_active(&self) -> Result<&Path> {
        match self.active.as_deref() {
            Some(dir) if dir.is_dir() => Ok(dir),
            Some(dir) => Err(config::content_root_unavailable(dir.display().to_string())),
            None => Err(config::content_root_unavailable("<unset>")),
        }
    }

    pub fn staged_path(&self, name: &str) -> PathBuf {
        self.staging.join(package_file_name(name))
    }

    pub fn active_path(&self, name: &str) -> Option<PathBuf> {
        self.active.as_ref().map(|dir| dir.join(package_file_name(name)))
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.staged_path(name).is_file()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_path(name).is_some_and(|p| p.is_file())
    }

    /// Write downloaded package bytes into the staging root
    pub fn stage(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        check_mod_name(name)?;
        fs::create_dir_all(&self.staging)
            .map_err(|e| fs_err::write_failed(self.staging.display().to_string(), e.to_string()))?;
        let path = self.staged_path(name);
        fs::write(&path, bytes)
            .map_err(|e| fs_err::write_failed(path.display().to_string(), e.to_string()))?;
        Ok(path)
    }

    /// Copy the staged package into the active root
    pub fn activate(&self, name: &str) -> Result<()> {
        check_mod_name(name)?;
        let active = self.require_active()?;
        let staged = self.staged_path(name);
        if !staged.is_file() {
            return Err(package::not_staged(name));
        }
        let target = active.join(package_file_name(name));
        fs::copy(&staged, &target)
            .map_err(|e| fs_err::write_failed(target.display().to_string(), e.to_string()))?;
        Ok(())
    }

    /// Delete the active copy if there is one
    pub fn deactivate(&self, name: &str) -> Result<()> {
        check_mod_name(name)?;
        if let Some(path) = self.active_path(name) {
            remove_if_exists(&path)?;
        }
        Ok(())
    }

    /// Delete the staged package if there is one
    pub fn unstage(&self, name: &str) -> Result<()> {
        check_mod_name(name)?;
        remove_if_exists(&self.staged_path(name))
    }

    /// Package archives currently in the active root, sorted by path
    pub fn active_packages(&self) -> Result<Vec<PathBuf>> {
        let active = self.require_active()?;
        let mut packages: Vec<PathBuf> = WalkDir::new(active)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| p.extension().is_some_and(|ext| ext == PACKAGE_EXTENSION))
            .collect();
        packages.sort();
        Ok(packages)
    }

    /// Adopt a sideloaded package: stage a copy and rename the active file to `<name>.zip`
    pub fn adopt(&self, found: &Path, name: &str) -> Result<()> {
        check_mod_name(name)?;
        let active = self.require_active()?;
        fs::create_dir_all(&self.staging)
            .map_err(|e| fs_err::write_failed(self.staging.display().to_string(), e.to_string()))?;

        let staged = self.staged_path(name);
        fs::copy(found, &staged)
            .map_err(|e| fs_err::write_failed(staged.display().to_string(), e.to_string()))?;

        let canonical = active.join(package_file_name(name));
        if found != canonical {
            fs::rename(found, &canonical)
                .map_err(|e| fs_err::write_failed(canonical.display().to_string(), e.to_string()))?;
        }
        Ok(())
    }
}

/// Reject names that would not stay inside a content root as `<name>.zip`
pub fn check_mod_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || name.contains(['/', '\\', '\0']) {
        return Err(package::invalid_name(name));
    }
    Ok(())
}

pub fn package_file_name(name: &str) -> String {
    format!("{name}.{PACKAGE_EXTENSION}")
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(fs_err::write_failed(path.display().to_string(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roots(dir: &TempDir) -> ContentRoots {
        let game = dir.path().join("game");
        fs::create_dir_all(game.join("mods")).unwrap();
        ContentRoots::new(dir.path().join("home").join("mods"), Some(&game))
    }

    #[test]
    fn test_unset_install_location_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let roots = ContentRoots::new(dir.path().join("mods"), None);
        assert!(!roots.is_available());
        assert!(roots.active_path("a").is_none());
        assert!(roots.activate("a").is_err());
    }

    #[test]
    fn test_missing_active_dir_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let roots = ContentRoots::new(dir.path().join("mods"), Some(&dir.path().join("nope")));
        assert!(!roots.is_available());
    }

    #[test]
    fn test_stage_activate_deactivate_unstage() {
        let dir = TempDir::new().unwrap();
        let roots = roots(&dir);
        assert!(roots.is_available());

        roots.stage("speed", b"pkg").unwrap();
        assert!(roots.is_staged("speed"));
        assert!(!roots.is_active("speed"));

        roots.activate("speed").unwrap();
        assert!(roots.is_active("speed"));

        roots.deactivate("speed").unwrap();
        assert!(!roots.is_active("speed"));
        // idempotent
        roots.deactivate("speed").unwrap();

        roots.unstage("speed").unwrap();
        assert!(!roots.is_staged("speed"));
    }

    #[test]
    fn test_activate_without_staged_package() {
        let dir = TempDir::new().unwrap();
        let err = roots(&dir).activate("ghost").unwrap_err();
        assert!(err.to_string().contains("not staged"));
    }

    #[test]
    fn test_check_mod_name() {
        for name in ["speed", "Speed Mod v2", "a.b", "..hidden"] {
            assert!(check_mod_name(name).is_ok(), "{name} should pass");
        }
        for name in ["", ".", "..", "../up", "a/b", "/abs", "a\\b", "nul\0"] {
            assert!(check_mod_name(name).is_err(), "{name:?} should fail");
        }
    }

    #[test]
    fn test_path_like_names_never_touch_outside_roots() {
        let dir = TempDir::new().unwrap();
        let roots = roots(&dir);
        let outside = dir.path().join("home").join("escaped.zip");

        assert!(roots.stage("../escaped", b"pkg").is_err());
        assert!(!outside.exists());

        fs::create_dir_all(outside.parent().unwrap()).unwrap();
        fs::write(&outside, b"keep").unwrap();
        assert!(roots.unstage("../escaped").is_err());
        assert!(roots.deactivate("../../home/escaped").is_err());
        assert!(outside.exists());

        let active = roots.active_dir().unwrap().to_path_buf();
        fs::write(active.join("found.zip"), b"pkg").unwrap();
        assert!(roots.adopt(&active.join("found.zip"), "../found").is_err());
        assert!(active.join("found.zip").exists());
    }

    #[test]
    fn test_active_packages_and_adopt() {
        let dir = TempDir::new().unwrap();
        let roots = roots(&dir);
        let active = roots.active_dir().unwrap().to_path_buf();
        fs::write(active.join("Speed Mod v2.zip"), b"pkg").unwrap();
        fs::write(active.join("readme.txt"), b"text").unwrap();

        let found = roots.active_packages().unwrap();
        assert_eq!(found, vec![active.join("Speed Mod v2.zip")]);

        roots.adopt(&found[0], "speed").unwrap();
        assert!(roots.is_staged("speed"));
        assert!(roots.is_active("speed"));
        assert!(!active.join("Speed Mod v2.zip").exists());
    }
}
