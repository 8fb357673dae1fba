// =============================================================================
// GS-IT Web - Lazy Page Component
// =============================================================================
// Resolves a route's page module on first visit and caches it in `AppState`.
// A loading view is shown until the module is ready; a failed load stays
// failed for the rest of the session.
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadErrorView, LoadingView};
use crate::loader::LoadState;
use crate::pages::load_page;
use crate::routes::Route;
use crate::state::AppState;

#[component]
pub fn LazyPage(#[prop(into)] route: Signal<Route>) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let modules = app_state.modules;

    // Start a load whenever the route changes to one not yet requested.
    // Revisits leave the cache untouched, so subscribers are not notified
    // and the mounted page is not rebuilt.
    Effect::new(move |_| {
        let route = route.get();
        let claimed = modules
            .try_maybe_update(|cache| {
                let claimed = cache.begin(route);
                (claimed, claimed)
            })
            .unwrap_or(false);
        if !claimed {
            return;
        }

        log::debug!("Loading page module: {}", route.name());
        spawn_local(async move {
            let result = load_page(route).await;
            if let Err(e) = &result {
                log::warn!("Page load failed: {}", e);
            }
            modules.update(|cache| cache.complete(route, result));
        });
    });

    move || {
        let route = route.get();
        let state = modules.with(|cache| cache.state(&route).cloned());
        match state {
            Some(LoadState::Ready(page)) => page(),
            Some(LoadState::Failed(err)) => view! { <LoadErrorView message=err.to_string() /> }.into_any(),
            _ => view! { <LoadingView /> }.into_any(),
        }
    }
}
