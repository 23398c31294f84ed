//! Navigation Model
//!
//! This sub-model contains all state related to moving through the
//! timeline: selection and scroll position.

/// Navigation state (selection, scroll)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Selected post index in the timeline (0 = head)
    pub selected: Option<usize>,

    /// First card drawn in the timeline viewport
    pub scroll_offset: usize,

    /// Cards that fit on the last rendered frame (page size for PgUp/PgDn)
    pub visible_cards: usize,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_cards: 1,
        }
    }

    /// Jump back to the newest post
    pub fn scroll_to_head(&mut self, feed_len: usize) {
        self.selected = crate::logic::navigation::first_selection(feed_len);
        self.scroll_offset = 0;
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert!(model.selected.is_none());
        assert_eq!(model.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_to_head() {
        let mut model = NavigationModel::new();
        model.selected = Some(7);
        model.scroll_offset = 5;
        model.scroll_to_head(26);
        assert_eq!(model.selected, Some(0));
        assert_eq!(model.scroll_offset, 0);

        model.scroll_to_head(0);
        assert_eq!(model.selected, None);
    }
}
