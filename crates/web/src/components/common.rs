// =============================================================================
// GS-IT Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading View
// 2. Error Display
// 3. Status Banner
// 4. Page Hero
// 5. Section Header
// 6. Page Meta
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::contact::SubmitStatus;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Loading View
// -----------------------------------------------------------------------------

/// Full-page placeholder while a page module loads.
#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <div class="loading-container" role="status" aria-live="polite" aria-label="Loading content">
            <div class="spinner"></div>
            <h2 class="loading-message">{message}</h2>
        </div>
    }
}

/// Shown when a page module failed to load.
#[component]
pub fn LoadErrorView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <h1>"This page could not be loaded"</h1>
            <ErrorDisplay message=message />
            <a href="/" class="btn btn-primary">"Go Home"</a>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Error Display
// -----------------------------------------------------------------------------

/// Error message display.
#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-display">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Status Banner
// -----------------------------------------------------------------------------

/// Success/failure banner after a form submission.
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<Option<SubmitStatus>>) -> impl IntoView {
    move || {
        status.get().map(|status| {
            let class = match status {
                SubmitStatus::Success => "status-banner success",
                SubmitStatus::Failed => "status-banner error",
            };
            view! {
                <div class=class role="status">{status.message()}</div>
            }
        })
    }
}

// -----------------------------------------------------------------------------
// 4. Page Hero
// -----------------------------------------------------------------------------

/// Title block at the top of inner pages.
#[component]
pub fn PageHero(
    #[prop(into)] tag: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] image: Option<String>,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="page-hero-text">
                <span class="section-tag">{tag}</span>
                <h1 class="page-hero-title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-hero-subtitle">{s}</p> })}
            </div>
            {image.map(|src| view! {
                <div class="page-hero-visual">
                    <img src=src alt="" loading="eager" />
                </div>
            })}
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Section Header
// -----------------------------------------------------------------------------

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-desc">{s}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 6. Page Meta
// -----------------------------------------------------------------------------

/// Document title and description for the current page.
#[component]
pub fn PageMeta(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    let config = expect_context::<AppState>().config;

    view! {
        <Title text=config.page_title(&title) />
        <Meta name="description" content=description />
    }
}
