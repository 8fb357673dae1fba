// =============================================================================
// GS-IT Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::PageMeta;
use crate::routes::Route;

/// Catch-all page for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageMeta title="Page Not Found" description="The page you are looking for does not exist." />

        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <a href={Route::Home.path()} class="btn btn-primary">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
