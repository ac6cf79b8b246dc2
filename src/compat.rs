//! Pairwise compatibility checks against the enabled set
//!
//! A conflict exists between a candidate and an enabled installed mod when
//! either side lists the other in `incompatible`. Only enabled mods count:
//! a disabled mod can sit next to anything. Profiles are the exception and
//! are checked against themselves.
//!
//! Turning a mod on also turns on the requirements it pulls in, so the
//! checks run over that whole set, not just the named mod.

use crate::catalog::Catalog;
use crate::domain::{Bundle, Mod, Profile};
use crate::resolver;

/// A conflicting pair: the member being checked and the enabled mod it clashes with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub member: String,
    pub enabled: String,
}

/// First enabled installed mod that conflicts with `candidate`
pub fn first_conflict<'a>(catalog: &'a Catalog, candidate: &Mod) -> Option<&'a Mod> {
    catalog.enabled_mods().find(|m| clash(candidate, m))
}

/// Whether two mods refuse to run together, declared by either side
fn clash(a: &Mod, b: &Mod) -> bool {
    a.name != b.name && (a.declares_incompatible(&b.name) || b.declares_incompatible(&a.name))
}

fn push_unique<'a>(set: &mut Vec<&'a Mod>, m: &'a Mod) {
    if !set.iter().any(|seen| seen.name == m.name) {
        set.push(m);
    }
}

/// Everything enabling the installed mod `root` turns on, `root` included
pub fn enable_set<'a>(catalog: &'a Catalog, root: &'a Mod) -> Vec<&'a Mod> {
    let mut set: Vec<&Mod> = resolver::enable_closure(catalog, root)
        .iter()
        .filter_map(|name| catalog.resolve_mod(name))
        .collect();
    if !root.is_enabled() {
        set.push(root);
    }
    set
}

/// Everything installing the published mod `root` (enabled) turns on, `root` included
pub fn install_set<'a>(catalog: &'a Catalog, root: &'a Mod) -> Vec<&'a Mod> {
    let mut set: Vec<&Mod> = resolver::install_closure(catalog, root)
        .iter()
        .filter_map(|name| catalog.find_in_manifest(name))
        .collect();
    set.push(root);
    set
}

/// First conflict that turning on every mod in `set` would create
///
/// Each mod is compared with the enabled installed mods and with the mods
/// before it in `set`.
pub fn set_conflict(catalog: &Catalog, set: &[&Mod]) -> Option<Conflict> {
    set.iter().enumerate().find_map(|(i, candidate)| {
        first_conflict(catalog, candidate)
            .or_else(|| set[..i].iter().copied().find(|other| clash(candidate, other)))
            .map(|other| Conflict {
                member: candidate.name.clone(),
                enabled: other.name.clone(),
            })
    })
}

/// Every mod a bundle transition turns on: its members and their requirements
///
/// Enabling follows disabled installed requirements; installing only pulls
/// in missing ones, the same way the transitions themselves do.
fn bundle_set<'a>(catalog: &'a Catalog, bundle: &Bundle, installing: bool) -> Vec<&'a Mod> {
    let mut set: Vec<&Mod> = Vec::new();
    for name in &bundle.mods {
        let member = if installing {
            catalog.find_in_manifest(name)
        } else {
            catalog.resolve_bundle_member(name)
        };
        let Some(member) = member else {
            continue;
        };
        let reached = if !installing && catalog.is_installed(&member.name) {
            enable_set(catalog, member)
        } else {
            install_set(catalog, member)
        };
        for m in reached {
            push_unique(&mut set, m);
        }
    }
    set
}

/// First conflict enabling the installed `bundle` would create
pub fn bundle_conflict(catalog: &Catalog, bundle: &Bundle) -> Option<Conflict> {
    set_conflict(catalog, &bundle_set(catalog, bundle, false))
}

/// First conflict installing `bundle` enabled would create
pub fn bundle_install_conflict(catalog: &Catalog, bundle: &Bundle) -> Option<Conflict> {
    set_conflict(catalog, &bundle_set(catalog, bundle, true))
}

/// Every mod a profile would enable, resolved installed-first, without duplicates
///
/// Listed mods, members of listed bundles, and all of their requirements.
fn profile_members<'a>(catalog: &'a Catalog, profile: &Profile) -> Vec<&'a Mod> {
    let bundle_members = profile
        .bundles
        .iter()
        .filter_map(|b| catalog.resolve_bundle(b))
        .flat_map(|b| b.mods.iter());

    let mut members: Vec<&Mod> = Vec::new();
    for name in profile.mods.iter().chain(bundle_members) {
        if let Some(m) = catalog.resolve_mod(name) {
            push_unique(&mut members, m);
        }
    }

    let mut next = 0;
    while next < members.len() {
        let current: &Mod = members[next];
        for dep in &current.requires {
            if let Some(m) = catalog.resolve_mod(dep) {
                push_unique(&mut members, m);
            }
        }
        next += 1;
    }
    members
}

/// First pair of profile members that conflict with each other
///
/// Enabling a profile disables everything outside it first, so only the
/// profile's own mods (listed, members of listed bundles, and what those
/// require) are compared.
pub fn profile_conflict(catalog: &Catalog, profile: &Profile) -> Option<Conflict> {
    let members = profile_members(catalog, profile);
    members.iter().enumerate().find_map(|(i, a)| {
        members[i + 1..]
            .iter()
            .find(|b| clash(a, b))
            .map(|b| Conflict {
                member: a.name.clone(),
                enabled: b.name.clone(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Manifest;

    fn m(name: &str, incompatible: &[&str], disabled: bool) -> Mod {
        let mut m = Mod::new(name, "1");
        m.incompatible = incompatible.iter().map(|r| (*r).to_string()).collect();
        m.disabled = disabled;
        m
    }

    fn catalog(published: Vec<Mod>, installed: Vec<Mod>, bundles: Vec<Bundle>) -> Catalog {
        Catalog::new(
            Manifest {
                mods: published,
                bundles,
                version: "1".into(),
            },
            installed,
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_conflict_declared_by_candidate() {
        let c = catalog(vec![], vec![m("slow", &[], false)], vec![]);
        let fast = m("fast", &["slow"], false);
        assert_eq!(first_conflict(&c, &fast).map(|x| x.name.as_str()), Some("slow"));
    }

    #[test]
    fn test_conflict_declared_by_enabled_mod() {
        let c = catalog(vec![], vec![m("slow", &["fast"], false)], vec![]);
        assert!(first_conflict(&c, &m("fast", &[], false)).is_some());
    }

    #[test]
    fn test_disabled_mods_never_conflict() {
        let c = catalog(vec![], vec![m("slow", &["fast"], true)], vec![]);
        assert!(first_conflict(&c, &m("fast", &["slow"], false)).is_none());
    }

    #[test]
    fn test_candidate_does_not_conflict_with_itself() {
        let c = catalog(vec![], vec![m("fast", &["fast"], false)], vec![]);
        assert!(first_conflict(&c, &m("fast", &["fast"], false)).is_none());
    }

    #[test]
    fn test_bundle_conflict_reports_member() {
        let c = catalog(
            vec![m("a", &[], false), m("b", &["slow"], false)],
            vec![m("slow", &[], false)],
            vec![Bundle::new("pack", "1", &["a", "b"])],
        );
        let bundle = c.find_bundle_in_manifest("pack").unwrap();
        assert_eq!(
            bundle_conflict(&c, bundle),
            Some(Conflict {
                member: "b".into(),
                enabled: "slow".into()
            })
        );
    }

    #[test]
    fn test_profile_conflict_is_internal() {
        let c = catalog(
            vec![m("a", &[], false), m("b", &["a"], false), m("c", &[], false)],
            vec![m("slow", &["a", "c"], false)],
            vec![Bundle::new("pack", "1", &["b"])],
        );
        // conflicts with enabled mods outside the profile do not count
        let clean = Profile::new("p", vec!["c".into()], vec![]);
        assert!(profile_conflict(&c, &clean).is_none());

        let dirty = Profile::new("p", vec!["a".into()], vec!["pack".into()]);
        assert_eq!(
            profile_conflict(&c, &dirty),
            Some(Conflict {
                member: "a".into(),
                enabled: "b".into()
            })
        );
    }

    fn requiring(name: &str, requires: &[&str], disabled: bool) -> Mod {
        let mut r = m(name, &[], disabled);
        r.requires = requires.iter().map(|r| (*r).to_string()).collect();
        r
    }

    #[test]
    fn test_enable_set_reports_requirement_conflict() {
        let c = catalog(
            vec![],
            vec![
                requiring("top", &["dep"], true),
                m("dep", &["slow"], true),
                m("slow", &[], false),
            ],
            vec![],
        );
        let top = c.find_installed("top").unwrap();
        let set = enable_set(&c, top);
        assert_eq!(
            set.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["dep", "top"]
        );
        assert_eq!(
            set_conflict(&c, &set),
            Some(Conflict {
                member: "dep".into(),
                enabled: "slow".into()
            })
        );
    }

    #[test]
    fn test_set_conflict_between_new_mods() {
        let c = catalog(
            vec![
                requiring("top", &["left", "right"], false),
                m("left", &[], false),
                m("right", &["left"], false),
            ],
            vec![],
            vec![],
        );
        let top = c.find_in_manifest("top").unwrap();
        assert_eq!(
            set_conflict(&c, &install_set(&c, top)),
            Some(Conflict {
                member: "right".into(),
                enabled: "left".into()
            })
        );
    }

    #[test]
    fn test_bundle_conflict_through_member_requirement() {
        let c = catalog(
            vec![requiring("a", &["lib"], false), m("lib", &["slow"], false)],
            vec![m("slow", &[], false)],
            vec![Bundle::new("pack", "1", &["a"])],
        );
        let bundle = c.find_bundle_in_manifest("pack").unwrap();
        let expected = Some(Conflict {
            member: "lib".into(),
            enabled: "slow".into(),
        });
        assert_eq!(bundle_install_conflict(&c, bundle), expected);
        assert_eq!(bundle_conflict(&c, bundle), expected);
    }

    #[test]
    fn test_profile_conflict_includes_requirements() {
        let c = catalog(
            vec![
                requiring("a", &["lib"], false),
                m("lib", &[], false),
                m("b", &["lib"], false),
            ],
            vec![],
            vec![],
        );
        let p = Profile::new("p", vec!["a".into(), "b".into()], vec![]);
        assert_eq!(
            profile_conflict(&c, &p),
            Some(Conflict {
                member: "b".into(),
                enabled: "lib".into()
            })
        );
    }
}
