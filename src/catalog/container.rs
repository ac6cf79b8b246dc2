//! Name-keyed access to the entity lists of the catalog

use crate::domain::{Bundle, Mod, Profile};

/// An entity identified by a unique name within its list
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Mod {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Bundle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Profile {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Lookups over a list whose entries are unique by name
pub trait NamedList<T: Named> {
    fn entries(&self) -> &[T];

    fn entries_mut(&mut self) -> &mut Vec<T>;

    fn find_named(&self, name: &str) -> Option<&T> {
        self.entries().iter().find(|e| e.name() == name)
    }

    fn find_named_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries_mut().iter_mut().find(|e| e.name() == name)
    }

    fn contains_named(&self, name: &str) -> bool {
        self.find_named(name).is_some()
    }

    fn remove_named(&mut self, name: &str) -> Option<T> {
        let pos = self.entries().iter().position(|e| e.name() == name)?;
        Some(self.entries_mut().remove(pos))
    }

    /// Replace an entry with the same name, moving it to the end of the list
    fn replace_or_push(&mut self, entry: T) {
        let _ = self.remove_named(entry.name());
        self.entries_mut().push(entry);
    }

    fn names(&self) -> Vec<String> {
        self.entries().iter().map(|e| e.name().to_string()).collect()
    }
}

impl<T: Named> NamedList<T> for Vec<T> {
    fn entries(&self) -> &[T] {
        self
    }

    fn entries_mut(&mut self) -> &mut Vec<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_or_push_keeps_names_unique() {
        let mut mods = vec![Mod::new("a", "1"), Mod::new("b", "1")];
        mods.replace_or_push(Mod::new("a", "2"));
        assert_eq!(mods.names(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(mods.find_named("a").map(|m| m.version.as_str()), Some("2"));
    }

    #[test]
    fn test_remove_named() {
        let mut mods = vec![Mod::new("a", "1")];
        assert!(mods.remove_named("missing").is_none());
        assert!(mods.remove_named("a").is_some());
        assert!(!mods.contains_named("a"));
    }
}
