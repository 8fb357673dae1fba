// =============================================================================
// GS-IT Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Shell
// 4. Scroll Tracking
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::{Footer, LazyPage, NavBar};
use crate::debounce::{DebounceOptions, Debounced};
use crate::nav_state::SCROLL_DEBOUNCE_MS;
use crate::routes::Route;
use crate::state::{AppState, NavContext};
use crate::utils;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    if app_state.config.is_development() {
        log::info!("Development build, contact API at {:?}", app_state.config.api_base);
    }
    provide_context(app_state);

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

// -----------------------------------------------------------------------------
// 3. Shell
// -----------------------------------------------------------------------------

/// Navigation, the routed page and the footer.
///
/// Paths are matched by `Route::from_path` rather than a `<Routes>` table
/// so that `/about` and `/About/` land on the same page.
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let pathname: Signal<String> = location.pathname.into();
    let route = Signal::derive(move || Route::from_path(&pathname.get()));

    Effect::new(move |_| {
        log::debug!("Route: {}", route.get().name());
    });

    let ctx = NavContext {
        pathname,
        scroll_y: track_scroll(),
    };

    view! {
        <div class="site">
            <NavBar ctx=ctx />
            <main class="site-main">
                <LazyPage route=route />
            </main>
            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Scroll Tracking
// -----------------------------------------------------------------------------

/// Window scroll offset, updated at most once per quiet period.
fn track_scroll() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(utils::scroll_y());

    let debounced = StoredValue::new_local(Debounced::new(
        DebounceOptions::default().wait_ms(SCROLL_DEBOUNCE_MS),
        move || set_scroll_y.set(utils::scroll_y()),
    ));

    let handle = window_event_listener(ev::scroll, move |_| {
        debounced.with_value(Debounced::call);
    });

    on_cleanup(move || {
        debounced.try_with_value(Debounced::cancel);
        handle.remove();
    });

    scroll_y
}
