//! Region Selection Guard
//!
//! While a region is isolated on the map, other regions are invisible and
//! must not be selectable until the view is reset. Names are compared
//! the way boundaries are matched, so aliases count as the same region.

use crate::region::same_region;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionGuard {
    isolated: Option<String>,
}

impl SelectionGuard {
    pub fn isolated(&self) -> Option<&str> {
        self.isolated.as_deref()
    }

    pub fn is_isolated(&self) -> bool {
        self.isolated.is_some()
    }

    /// Whether `region` may be selected now. Reselecting the isolated region is allowed.
    pub fn can_select(&self, region: &str) -> bool {
        match &self.isolated {
            Some(current) => same_region(current, region),
            None => true,
        }
    }

    /// Isolate `region`; returns false and changes nothing when the guard refuses.
    pub fn try_isolate(&mut self, region: &str) -> bool {
        if !self.can_select(region) {
            return false;
        }
        self.isolated = Some(region.to_string());
        true
    }

    /// Still isolating `region`, used to drop async results of an old selection
    pub fn is_current(&self, region: &str) -> bool {
        self.isolated.as_deref().is_some_and(|current| same_region(current, region))
    }

    pub fn reset(&mut self) {
        self.isolated = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_region_blocked_while_isolated() {
        let mut guard = SelectionGuard::default();
        assert!(guard.try_isolate("Kerala"));
        assert!(!guard.try_isolate("Goa"));
        assert_eq!(guard.isolated(), Some("Kerala"));
        assert!(guard.try_isolate("Kerala"));
    }

    #[test]
    fn test_reset_allows_new_selection() {
        let mut guard = SelectionGuard::default();
        guard.try_isolate("Kerala");
        guard.reset();
        assert!(!guard.is_isolated());
        assert!(!guard.is_current("Kerala"));
        assert!(guard.try_isolate("Goa"));
        assert!(guard.is_current("Goa"));
    }

    #[test]
    fn test_alias_of_isolated_region_is_reselectable() {
        let mut guard = SelectionGuard::default();
        assert!(guard.try_isolate("Odisha"));
        assert!(guard.can_select("Orissa"));
        assert!(guard.is_current("ORISSA"));
        assert!(!guard.can_select("Goa"));
    }
}
