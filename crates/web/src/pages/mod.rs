// =============================================================================
// GS-IT Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Page Modules
// 2. Page Registry
// 3. Loader
// =============================================================================

pub mod about;
pub mod audio_video;
pub mod brand;
pub mod clients;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod privacy;
pub mod service;

pub use about::AboutPage;
pub use audio_video::AudioVideoPage;
pub use brand::{BrandPage, DahuaPage, HikvisionPage, UnvPage};
pub use clients::ClientsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
pub use service::ServicePage;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::loader::LoadError;
use crate::routes::Route;
use crate::state::PageModule;

// -----------------------------------------------------------------------------
// 2. Page Registry
// -----------------------------------------------------------------------------

fn home() -> AnyView {
    view! { <HomePage /> }.into_any()
}

fn about() -> AnyView {
    view! { <AboutPage /> }.into_any()
}

fn service() -> AnyView {
    view! { <ServicePage /> }.into_any()
}

fn contact() -> AnyView {
    view! { <ContactPage /> }.into_any()
}

fn clients() -> AnyView {
    view! { <ClientsPage /> }.into_any()
}

fn audio_video() -> AnyView {
    view! { <AudioVideoPage /> }.into_any()
}

fn hikvision() -> AnyView {
    view! { <HikvisionPage /> }.into_any()
}

fn dahua() -> AnyView {
    view! { <DahuaPage /> }.into_any()
}

fn unv() -> AnyView {
    view! { <UnvPage /> }.into_any()
}

fn privacy() -> AnyView {
    view! { <PrivacyPage /> }.into_any()
}

fn not_found() -> AnyView {
    view! { <NotFoundPage /> }.into_any()
}

/// Route to page constructor table.
const PAGES: &[(Route, PageModule)] = &[
    (Route::Home, home),
    (Route::About, about),
    (Route::Service, service),
    (Route::Contact, contact),
    (Route::Clients, clients),
    (Route::AudioVideo, audio_video),
    (Route::Hikvision, hikvision),
    (Route::Dahua, dahua),
    (Route::Unv, unv),
    (Route::Privacy, privacy),
    (Route::NotFound, not_found),
];

/// Look up the page constructor for a route.
pub fn resolve_page(route: Route) -> Result<PageModule, LoadError> {
    PAGES
        .iter()
        .find(|(r, _)| *r == route)
        .map(|(_, page)| *page)
        .ok_or_else(|| LoadError::new(route.name(), "no page registered"))
}

// -----------------------------------------------------------------------------
// 3. Loader
// -----------------------------------------------------------------------------

/// Resolve a page module asynchronously.
///
/// Yields to the browser once first so the loading view gets a frame.
pub async fn load_page(route: Route) -> Result<PageModule, LoadError> {
    TimeoutFuture::new(0).await;
    resolve_page(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_page() {
        for route in Route::ALL.into_iter().chain([Route::NotFound]) {
            assert!(resolve_page(route).is_ok(), "missing page for {:?}", route);
        }
    }

    #[test]
    fn test_registry_has_no_duplicates() {
        for (i, (route, _)) in PAGES.iter().enumerate() {
            assert!(PAGES[i + 1..].iter().all(|(other, _)| other != route));
        }
    }
}
