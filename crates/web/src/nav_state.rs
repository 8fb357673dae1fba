// =============================================================================
// GS-IT Web - Navigation State
// =============================================================================
// Flags behind the navigation bar: active route, mobile menu, search overlay
// and the scrolled style. Kept free of DOM types so it can be unit tested.
// =============================================================================

use crate::routes::Route;

/// Vertical offset (px) past which the bar switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Debounce window for the scroll listener.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

/// Navigation bar state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub search_open: bool,
    pub search_query: String,
    pub active_route: Route,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            search_open: false,
            search_query: String::new(),
            active_route: Route::from_path(initial_path),
        }
    }

    /// Router location changed.
    pub fn set_location(&mut self, path: &str) {
        self.active_route = Route::from_path(path);
    }

    /// Whether a menu entry for `route` should be highlighted.
    pub fn is_active(&self, route: Route) -> bool {
        self.active_route == route
    }

    /// Feed a (debounced) scroll offset. Returns `true` if the style flipped.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was clicked. Closes the mobile menu.
    pub fn navigate(&mut self, path: &str) {
        self.active_route = Route::from_path(path);
        self.menu_open = false;
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Escape key or close button.
    pub fn close_search(&mut self) {
        self.search_open = false;
        self.search_query.clear();
    }

    /// Submit the overlay. Closes and clears it, returning the trimmed query
    /// when there was one.
    pub fn submit_search(&mut self) -> Option<String> {
        let query = self.search_query.trim().to_string();
        self.close_search();
        (!query.is_empty()).then_some(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavState::new("/Service");
        assert_eq!(nav.active_route, Route::Service);
        assert!(!nav.menu_open);
        assert!(!nav.scrolled);
        assert!(!nav.search_open);
        assert!(nav.search_query.is_empty());
    }

    #[test]
    fn test_location_drives_active_route() {
        let mut nav = NavState::default();
        assert!(nav.is_active(Route::Home));

        nav.set_location("/contact");
        assert!(nav.is_active(Route::Contact));
        assert!(!nav.is_active(Route::Home));

        nav.set_location("/nowhere");
        assert_eq!(nav.active_route, Route::NotFound);
    }

    #[test]
    fn test_scroll_threshold_flips_once_per_crossing() {
        let mut nav = NavState::default();

        assert!(!nav.observe_scroll(10.0));
        assert!(!nav.observe_scroll(50.0));
        assert!(nav.observe_scroll(51.0));
        assert!(nav.scrolled);
        assert!(!nav.observe_scroll(400.0));
        assert!(!nav.observe_scroll(60.0));

        assert!(nav.observe_scroll(49.0));
        assert!(!nav.scrolled);
        assert!(!nav.observe_scroll(0.0));
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.navigate("/About");
        assert!(!nav.menu_open);
        assert_eq!(nav.active_route, Route::About);

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_search_submit_closes_and_clears() {
        let mut nav = NavState::default();
        nav.open_search();
        nav.set_search_query("  ip cameras ");

        assert_eq!(nav.submit_search().as_deref(), Some("ip cameras"));
        assert!(!nav.search_open);
        assert!(nav.search_query.is_empty());
    }

    #[test]
    fn test_search_blank_submit_yields_nothing() {
        let mut nav = NavState::default();
        nav.open_search();
        nav.set_search_query("   ");

        assert_eq!(nav.submit_search(), None);
        assert!(!nav.search_open);
    }

    #[test]
    fn test_escape_closes_search() {
        let mut nav = NavState::default();
        nav.open_search();
        nav.set_search_query("dahua");
        nav.close_search();

        assert!(!nav.search_open);
        assert!(nav.search_query.is_empty());
    }
}
