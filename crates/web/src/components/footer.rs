// =============================================================================
// GS-IT Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{BRANDS, MENU_ITEMS};
use crate::routes::Route;

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Site footer with quick links, brand partners and contact details.
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <a href={Route::Home.path()} class="footer-logo-link">
                        <img src="/assets/img/logo.png" alt="GS-IT" class="footer-logo-img" />
                    </a>
                    <p class="footer-tagline">
                        "Security, networking and audio-video systems for businesses across the UAE."
                    </p>
                </div>

                // Links Columns
                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Quick Links"</h5>
                        {MENU_ITEMS
                            .into_iter()
                            .map(|item| view! { <a href={item.route.path()} class="footer-link">{item.title}</a> })
                            .collect_view()}
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Partners"</h5>
                        {BRANDS
                            .into_iter()
                            .map(|brand| view! { <a href={brand.route.path()} class="footer-link">{brand.name}</a> })
                            .collect_view()}
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Contact"</h5>
                        <span class="footer-text">"Dubai, United Arab Emirates"</span>
                        <a href={Route::Contact.path()} class="footer-link">"Send us a message"</a>
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">{format!("© {} GS-IT. All rights reserved.", year)}</p>
                <a href={Route::Privacy.path()} class="footer-link">"Privacy Policy"</a>
            </div>
        </footer>
    }
}
