//! Display functions for mods, bundles and profiles

use console::Style;

use crate::catalog::Catalog;
use crate::domain::{Bundle, Mod, Profile};

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        if !$value.is_empty() {
            println!("  {} {}", Style::new().bold().apply_to($label), $value);
        }
    };
}

/// Where a mod stands relative to the catalog and the install location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModStatus {
    Available,
    Enabled,
    Disabled,
    UpdateAvailable,
    Local,
}

impl ModStatus {
    pub fn of(catalog: &Catalog, name: &str) -> Self {
        match catalog.find_installed(name) {
            None => ModStatus::Available,
            Some(_) if catalog.has_update(name) => ModStatus::UpdateAvailable,
            Some(m) if m.is_local || catalog.is_local(name) => ModStatus::Local,
            Some(m) if m.disabled => ModStatus::Disabled,
            Some(_) => ModStatus::Enabled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModStatus::Available => "available",
            ModStatus::Enabled => "enabled",
            ModStatus::Disabled => "disabled",
            ModStatus::UpdateAvailable => "update available",
            ModStatus::Local => "local",
        }
    }

    fn style(self) -> Style {
        match self {
            ModStatus::Available => Style::new().dim(),
            ModStatus::Enabled => Style::new().green(),
            ModStatus::Disabled => Style::new().yellow(),
            ModStatus::UpdateAvailable => Style::new().cyan().bold(),
            ModStatus::Local => Style::new().magenta(),
        }
    }
}

fn bundle_label(catalog: &Catalog, bundle: &Bundle) -> (&'static str, Style) {
    match catalog.find_installed_bundle(&bundle.name) {
        None => ("available", Style::new().dim()),
        Some(_) if catalog.bundle_has_update(&bundle.name) => {
            ("update available", Style::new().cyan().bold())
        }
        Some(b) if b.disabled => ("disabled", Style::new().yellow()),
        Some(_) => ("enabled", Style::new().green()),
    }
}

pub fn print_mods(catalog: &Catalog, mods: &[&Mod], heading: &str) {
    if mods.is_empty() {
        println!("No mods found.");
        return;
    }

    println!("{} ({}):", heading, mods.len());
    println!();
    for m in mods {
        let status = ModStatus::of(catalog, &m.name);
        println!(
            "  {:<28} {:<10} {}",
            Style::new().bold().yellow().apply_to(&m.name),
            m.version,
            status.style().apply_to(status.label())
        );
        if m.display_name() != m.name {
            println!("    {}", Style::new().dim().apply_to(m.display_name()));
        }
    }
}

pub fn print_bundles(catalog: &Catalog, bundles: &[&Bundle], heading: &str) {
    if bundles.is_empty() {
        println!("No bundles found.");
        return;
    }

    println!("{} ({}):", heading, bundles.len());
    println!();
    for b in bundles {
        let (label, style) = bundle_label(catalog, b);
        println!(
            "  {:<28} {:<10} {}",
            Style::new().bold().yellow().apply_to(&b.name),
            b.version,
            style.apply_to(label)
        );
        println!(
            "    {} {}",
            Style::new().dim().apply_to("mods:"),
            b.mods.join(", ")
        );
    }
}

pub fn print_profiles(catalog: &Catalog, profiles: &[&Profile]) {
    if profiles.is_empty() {
        println!("No profiles saved.");
        return;
    }

    println!("Profiles ({}):", profiles.len());
    println!();
    for p in profiles {
        let state = if p.is_active() {
            Style::new().green().apply_to("active")
        } else {
            Style::new().dim().apply_to("inactive")
        };
        let update = if catalog.profile_has_update(&p.name) {
            format!(" {}", Style::new().cyan().apply_to("(update available)"))
        } else {
            String::new()
        };
        println!(
            "  {:<28} {}{}",
            Style::new().bold().yellow().apply_to(&p.name),
            state,
            update
        );
    }
}

pub fn print_mod_detail(catalog: &Catalog, m: &Mod) {
    let status = ModStatus::of(catalog, &m.name);
    println!("{}", Style::new().bold().yellow().apply_to(m.display_name()));
    println!("  {} {}", Style::new().bold().apply_to("Name:"), m.name);
    println!("  {} {}", Style::new().bold().apply_to("Version:"), m.version);
    if let (Some(published), Some(installed)) =
        (catalog.find_in_manifest(&m.name), catalog.find_installed(&m.name))
    {
        if published.version != installed.version {
            println!(
                "  {} {} -> {}",
                Style::new().bold().apply_to("Update:"),
                installed.version,
                Style::new().cyan().apply_to(&published.version)
            );
        }
    }
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Status:"),
        status.style().apply_to(status.label())
    );
    display_field!("Author:", m.author);
    display_field!("Description:", m.description);
    display_field!("Link:", m.link);
    display_list("Requires:", &m.requires);
    display_list("Incompatible:", &m.incompatible);
    display_list("Tags:", &m.tags);
    if m.client_side {
        println!("  {} client side", Style::new().bold().apply_to("Scope:"));
    }

    let required_by: Vec<String> = catalog
        .installed_mods
        .iter()
        .filter(|other| other.requires_mod(&m.name))
        .map(|other| other.name.clone())
        .collect();
    display_list("Required by:", &required_by);
}

pub fn print_bundle_detail(catalog: &Catalog, bundle: &Bundle) {
    let (label, style) = bundle_label(catalog, bundle);
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(bundle.display_name())
    );
    println!("  {} {}", Style::new().bold().apply_to("Name:"), bundle.name);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Version:"),
        bundle.version
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Status:"),
        style.apply_to(label)
    );
    display_field!("Author:", bundle.author);
    display_field!("Description:", bundle.description);
    display_members(catalog, &bundle.mods);
}

pub fn print_profile_detail(catalog: &Catalog, profile: &Profile) {
    println!("{}", Style::new().bold().yellow().apply_to(&profile.name));
    let state = if profile.is_active() {
        Style::new().green().apply_to("active")
    } else {
        Style::new().dim().apply_to("inactive")
    };
    println!("  {} {}", Style::new().bold().apply_to("Status:"), state);
    display_members(catalog, &profile.mods);
    if !profile.bundles.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Bundles:"));
        for name in &profile.bundles {
            let state = match catalog.find_installed_bundle(name) {
                Some(b) if !b.disabled => "enabled",
                Some(_) => "disabled",
                None => "not installed",
            };
            println!(
                "    - {} {}",
                Style::new().cyan().apply_to(name),
                Style::new().dim().apply_to(state)
            );
        }
    }
}

pub fn print_config(entries: &[(&str, String)], catalog_in_use: &str) {
    for (key, value) in entries {
        let shown = if value.is_empty() {
            Style::new().dim().apply_to("(not set)".to_string())
        } else {
            Style::new().apply_to(value.clone())
        };
        println!("{} = {}", Style::new().bold().apply_to(key), shown);
    }
    if entries
        .iter()
        .any(|(key, value)| *key == "catalog-url" && value != catalog_in_use)
    {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("(catalog overridden: {catalog_in_use})"))
        );
    }
}

fn display_list(label: &str, values: &[String]) {
    if !values.is_empty() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to(label),
            values.join(", ")
        );
    }
}

fn display_members(catalog: &Catalog, names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("  {}", Style::new().bold().apply_to("Mods:"));
    for name in names {
        let status = ModStatus::of(catalog, name);
        println!(
            "    - {} {}",
            Style::new().cyan().apply_to(name),
            status.style().apply_to(status.label())
        );
    }
}
