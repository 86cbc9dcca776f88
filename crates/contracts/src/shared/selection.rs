//! Single-row selection state for list pages.
//!
//! Selection is select-only: choosing the same record twice keeps it
//! selected. Deselection happens only through an explicit `clear`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    active: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `id` the active record. Idempotent.
    pub fn select(&mut self, id: &str) {
        if self.active.as_deref() != Some(id) {
            self.active = Some(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        assert_eq!(Selection::new().active(), None);
    }

    #[test]
    fn select_is_idempotent() {
        let mut sel = Selection::new();
        sel.select("ORD-1234");
        let once = sel.clone();
        sel.select("ORD-1234");
        assert_eq!(sel, once);
        assert!(sel.is_selected("ORD-1234"));
    }

    #[test]
    fn at_most_one_record_is_selected() {
        let mut sel = Selection::new();
        sel.select("ORD-1234");
        sel.select("ORD-1235");
        assert!(sel.is_selected("ORD-1235"));
        assert!(!sel.is_selected("ORD-1234"));
    }

    #[test]
    fn clear_resets_to_none() {
        let mut sel = Selection::new();
        sel.select("ORD-1234");
        sel.clear();
        assert_eq!(sel.active(), None);
    }
}
