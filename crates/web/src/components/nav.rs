// =============================================================================
// GS-IT Web - Navigation Bar Component
// =============================================================================
// Fixed top bar with desktop links, a mobile menu panel and a full-screen
// search overlay. Route and scroll position arrive through `NavContext`.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;

use crate::content::{MenuItem, MENU_ITEMS};
use crate::nav_state::NavState;
use crate::routes::Route;
use crate::state::NavContext;
use crate::utils::scroll_to_top;

/// Site navigation bar.
///
/// # Arguments
/// * `ctx` - Current pathname and debounced scroll offset
#[component]
pub fn NavBar(ctx: NavContext) -> impl IntoView {
    let nav = RwSignal::new(NavState::new(&ctx.pathname.get_untracked()));

    // Follow the router location.
    Effect::new(move |_| {
        let path = ctx.pathname.get();
        nav.update(|n| n.set_location(&path));
    });

    // Only notify subscribers when the style actually flips.
    Effect::new(move |_| {
        let y = ctx.scroll_y.get();
        nav.maybe_update(|n| n.observe_scroll(y));
    });

    let navigate = Callback::new(move |route: Route| {
        nav.update(|n| n.navigate(route.path()));
        scroll_to_top();
    });

    let bar_class = move || {
        if nav.with(|n| n.scrolled) {
            "site-nav scrolled"
        } else {
            "site-nav"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="nav-inner">
                // Logo
                <a href={Route::Home.path()} class="nav-logo" on:click=move |_| navigate.run(Route::Home)>
                    <img src="/assets/img/logo.png" alt="GS-IT" class="nav-logo-img" />
                </a>

                // Desktop menu
                <div class="nav-links desktop-only">
                    {MENU_ITEMS
                        .into_iter()
                        .map(|item| view! { <MenuLink item=item nav=nav navigate=navigate mobile=false /> })
                        .collect_view()}
                </div>

                // Right side actions
                <div class="nav-actions">
                    <button
                        class="nav-icon-btn"
                        aria-label="Open search"
                        on:click=move |_| nav.update(NavState::open_search)
                    >
                        <SearchIcon />
                    </button>
                    <button
                        class="nav-icon-btn mobile-only"
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|n| n.menu_open) {
                            view! { <CloseIcon /> }.into_any()
                        } else {
                            view! { <MenuIcon /> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu panel
            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="mobile-menu mobile-only">
                    {MENU_ITEMS
                        .into_iter()
                        .map(|item| view! { <MenuLink item=item nav=nav navigate=navigate mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>

        <Show when=move || nav.with(|n| n.search_open)>
            <SearchOverlay nav=nav />
        </Show>
    }
}

/// One menu entry, highlighted when its route is active.
#[component]
fn MenuLink(
    item: MenuItem,
    nav: RwSignal<NavState>,
    navigate: Callback<Route>,
    mobile: bool,
) -> impl IntoView {
    let base = if mobile { "mobile-nav-link" } else { "nav-link" };
    let class = move || {
        if nav.with(|n| n.is_active(item.route)) {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <a href={item.route.path()} class=class on:click=move |_| navigate.run(item.route)>
            {item.title}
        </a>
    }
}

/// Full-screen search input. Escape or the close button dismisses it.
#[component]
fn SearchOverlay(nav: RwSignal<NavState>) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            nav.update(NavState::close_search);
        }
    });
    on_cleanup(move || escape.remove());

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        // No search backend; the query is only logged.
        if let Some(query) = nav.try_update(NavState::submit_search).flatten() {
            log::info!("Searching for: {}", query);
        }
    };

    view! {
        <div class="search-overlay" role="dialog" aria-label="Search">
            <div class="search-panel">
                <form class="search-form" on:submit=on_submit>
                    <span class="search-icon"><SearchIcon /></span>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Type to search..."
                        autofocus=true
                        prop:value=move || nav.with(|n| n.search_query.clone())
                        on:input=move |e| nav.update(|n| n.set_search_query(event_target_value(&e)))
                    />
                    <button
                        type="button"
                        class="search-close"
                        aria-label="Close search"
                        on:click=move |_| nav.update(NavState::close_search)
                    >
                        <CloseIcon />
                    </button>
                </form>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// Icons
// -----------------------------------------------------------------------------

#[component]
fn SearchIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="11" cy="11" r="8"></circle>
            <path d="m21 21-4.3-4.3"></path>
        </svg>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="4" x2="20" y1="6" y2="6"></line>
            <line x1="4" x2="20" y1="12" y2="12"></line>
            <line x1="4" x2="20" y1="18" y2="18"></line>
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M18 6 6 18"></path>
            <path d="m6 6 12 12"></path>
        </svg>
    }
}
