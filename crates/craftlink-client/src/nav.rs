//! Navigation pointer.
//!
//! A plain value cell holding the current path string.  Setting the path is
//! the only navigation primitive; there is no history stack, no guards and
//! no redirection middleware.  The host shell mirrors the pointer to the
//! location fragment and feeds external fragment changes (back/forward)
//! back in through [`Nav::apply_fragment`].

use craftlink_shared::constants::ROUTE_ROOT;

/// The current-path cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    current: String,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            current: ROUTE_ROOT.to_string(),
        }
    }

    /// The current path, always non-empty.
    pub fn path(&self) -> &str {
        &self.current
    }

    /// Set the current path.
    pub fn set(&mut self, path: &str) {
        self.current = if path.is_empty() {
            ROUTE_ROOT.to_string()
        } else {
            path.to_string()
        };
    }

    /// Re-apply an externally observed location fragment.
    ///
    /// Accepts the raw fragment with or without its leading `#`; an empty
    /// fragment means the root view.
    pub fn apply_fragment(&mut self, raw: &str) {
        let path = raw.strip_prefix('#').unwrap_or(raw);
        self.set(path);
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        assert_eq!(Nav::new().path(), "/");
    }

    #[test]
    fn empty_fragment_means_root() {
        let mut nav = Nav::new();
        nav.set("/jobs");
        nav.apply_fragment("");
        assert_eq!(nav.path(), "/");
    }

    #[test]
    fn fragment_hash_prefix_is_stripped() {
        let mut nav = Nav::new();
        nav.apply_fragment("#/admin");
        assert_eq!(nav.path(), "/admin");
        nav.apply_fragment("/dashboard");
        assert_eq!(nav.path(), "/dashboard");
    }
}
