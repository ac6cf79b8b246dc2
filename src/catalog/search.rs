//! Text and tag filtering for listings

use super::Catalog;
use crate::domain::{Bundle, Mod, Profile};

/// Minimum filter length before substring matching kicks in
const SUBSTRING_MIN_LEN: usize = 3;

/// Listing filter: a name query plus an optional tag set
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub query: String,
    pub tags: Vec<String>,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            query: query.into(),
            tags,
        }
    }

    /// Case-insensitive prefix match, or substring match for longer queries
    pub fn matches_text(&self, text: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let text = text.to_lowercase();
        let query = self.query.to_lowercase();
        text.starts_with(&query)
            || (query.chars().count() >= SUBSTRING_MIN_LEN && text.contains(&query))
    }

    fn matches_tags(&self, tags: &[String]) -> bool {
        self.tags.is_empty() || tags.iter().any(|t| self.tags.contains(t))
    }

    pub fn matches_mod(&self, m: &Mod) -> bool {
        self.matches_text(m.display_name()) && self.matches_tags(&m.tags)
    }
}

impl Catalog {
    /// Filter a mod list (manifest or installed) for display
    pub fn search_mods<'a>(&self, mods: &'a [Mod], filter: &SearchFilter) -> Vec<&'a Mod> {
        mods.iter().filter(|m| filter.matches_mod(m)).collect()
    }

    /// Filter a bundle list; tags match when any member mod carries one
    pub fn search_bundles<'a>(
        &self,
        bundles: &'a [Bundle],
        filter: &SearchFilter,
    ) -> Vec<&'a Bundle> {
        bundles
            .iter()
            .filter(|b| filter.matches_text(b.display_name()))
            .filter(|b| {
                filter.tags.is_empty()
                    || b.mods.iter().any(|name| {
                        self.find_in_manifest(name)
                            .or_else(|| self.find_installed(name))
                            .is_some_and(|m| filter.matches_tags(&m.tags))
                    })
            })
            .collect()
    }

    pub fn search_profiles(&self, filter: &SearchFilter) -> Vec<&Profile> {
        self.profiles
            .iter()
            .filter(|p| filter.matches_text(&p.name))
            .collect()
    }
}
