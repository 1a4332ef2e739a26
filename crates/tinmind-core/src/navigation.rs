//! Keyboard navigation over the rendered result list.
//!
//! The cursor is `None` or a valid index into the current list. Arrow keys
//! move it cyclically, Enter activates it, and Escape dismisses the panel.

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "Enter" => Some(NavKey::Enter),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// What a key press did to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Nothing to do
    None,
    /// Cursor moved; `to` should be scrolled into view
    Moved { from: Option<usize>, to: usize },
    /// The item at this index was activated
    Activate(usize),
    /// The panel should close
    Dismiss,
}

/// Result of handling one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub action: NavAction,
    /// Whether the browser default (scrolling, form submit) should be suppressed
    pub prevent_default: bool,
}

impl NavOutcome {
    fn ignored() -> Self {
        Self {
            action: NavAction::None,
            prevent_default: false,
        }
    }

    fn handled(action: NavAction) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }
}

/// Active-result cursor for a list of `item_count` results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultNavigator {
    active: Option<usize>,
    item_count: usize,
}

impl ResultNavigator {
    /// Points the navigator at a freshly rendered list, clearing the cursor.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.active = None;
    }

    /// Clears the cursor without forgetting the list.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Handles a key press while the panel is `panel_visible`.
    ///
    /// With the panel hidden or no items rendered, every key is a no-op that
    /// leaves the cursor at `None`.
    pub fn handle_key(&mut self, key: NavKey, panel_visible: bool) -> NavOutcome {
        if !panel_visible || self.item_count == 0 {
            self.active = None;
            return NavOutcome::ignored();
        }

        let n = self.item_count;
        match key {
            NavKey::ArrowDown => {
                let to = self.active.map_or(0, |i| (i + 1) % n);
                self.move_to(to)
            }
            NavKey::ArrowUp => {
                let to = self.active.map_or(n - 1, |i| (i + n - 1) % n);
                self.move_to(to)
            }
            NavKey::Enter => match self.active {
                Some(i) => NavOutcome::handled(NavAction::Activate(i)),
                None => NavOutcome::ignored(),
            },
            NavKey::Escape => {
                self.active = None;
                NavOutcome::handled(NavAction::Dismiss)
            }
        }
    }

    fn move_to(&mut self, to: usize) -> NavOutcome {
        let from = self.active.replace(to);
        NavOutcome::handled(NavAction::Moved { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(n: usize) -> ResultNavigator {
        let mut nav = ResultNavigator::default();
        nav.reset(n);
        nav
    }

    #[test]
    fn test_arrow_down_wraps_to_first() {
        let mut nav = navigator(3);
        for expected in [0, 1, 2, 0] {
            nav.handle_key(NavKey::ArrowDown, true);
            assert_eq!(nav.active(), Some(expected));
        }
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        let mut nav = navigator(3);
        nav.handle_key(NavKey::ArrowDown, true);
        assert_eq!(nav.active(), Some(0));

        nav.handle_key(NavKey::ArrowUp, true);
        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn test_arrow_up_from_none_selects_last() {
        let mut nav = navigator(4);
        let outcome = nav.handle_key(NavKey::ArrowUp, true);
        assert_eq!(
            outcome.action,
            NavAction::Moved {
                from: None,
                to: 3
            }
        );
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut nav = navigator(0);
        for key in [NavKey::ArrowDown, NavKey::ArrowUp, NavKey::Enter, NavKey::Escape] {
            let outcome = nav.handle_key(key, true);
            assert_eq!(outcome, NavOutcome::ignored());
            assert_eq!(nav.active(), None);
        }
    }

    #[test]
    fn test_hidden_panel_is_noop_and_clears_cursor() {
        let mut nav = navigator(2);
        nav.handle_key(NavKey::ArrowDown, true);

        let outcome = nav.handle_key(NavKey::ArrowDown, false);
        assert!(!outcome.prevent_default);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_enter_activates_only_with_cursor() {
        let mut nav = navigator(2);
        assert_eq!(nav.handle_key(NavKey::Enter, true), NavOutcome::ignored());

        nav.handle_key(NavKey::ArrowDown, true);
        nav.handle_key(NavKey::ArrowDown, true);
        let outcome = nav.handle_key(NavKey::Enter, true);
        assert_eq!(outcome.action, NavAction::Activate(1));
        assert!(outcome.prevent_default);
    }

    #[test]
    fn test_escape_dismisses_and_clears() {
        let mut nav = navigator(2);
        nav.handle_key(NavKey::ArrowDown, true);

        let outcome = nav.handle_key(NavKey::Escape, true);
        assert_eq!(outcome.action, NavAction::Dismiss);
        assert!(outcome.prevent_default);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_reset_clears_cursor() {
        let mut nav = navigator(5);
        nav.handle_key(NavKey::ArrowDown, true);
        nav.reset(1);
        assert_eq!(nav.active(), None);
        assert_eq!(nav.item_count(), 1);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_key_name("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key_name("a"), None);
        assert_eq!(NavKey::from_key_name("Tab"), None);
    }
}
