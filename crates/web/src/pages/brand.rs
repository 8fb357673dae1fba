// =============================================================================
// GS-IT Web - Brand Partner Pages
// =============================================================================
// Hikvision, Dahua and Uniview share one layout driven by `BrandProfile`.
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBanner, FeatureCard, PageMeta, SectionHeader};
use crate::content::{BrandProfile, DAHUA, HIKVISION, UNV};

/// Partner page for one manufacturer.
#[component]
pub fn BrandPage(brand: BrandProfile) -> impl IntoView {
    let description = format!(
        "Authorised {} supply, installation and support in Dubai. {}.",
        brand.name, brand.tagline
    );

    view! {
        <PageMeta title=brand.name description=description />

        <div class="page page-brand">
            <section class="brand-hero">
                <div class="brand-hero-text">
                    <span class="section-tag">"AUTHORISED PARTNER"</span>
                    <h1 class="brand-title">{brand.name}</h1>
                    <p class="brand-tagline">{brand.tagline}</p>
                    {brand.about.iter().map(|para| view! { <p class="brand-about">{*para}</p> }).collect_view()}
                </div>
                <div class="brand-hero-visual">
                    <img src=brand.logo alt=brand.name loading="eager" />
                </div>
            </section>

            <section class="brand-products">
                <SectionHeader title=format!("{} Product Range", brand.name) />
                <div class="feature-grid">
                    {brand.products.iter().map(|product| view! { <FeatureCard feature=*product /> }).collect_view()}
                </div>
            </section>

            <CtaBanner
                title=format!("Need a {} quote?", brand.name)
                text="Our certified engineers will size the right system for your site."
            />
        </div>
    }
}

#[component]
pub fn HikvisionPage() -> impl IntoView {
    view! { <BrandPage brand=HIKVISION /> }
}

#[component]
pub fn DahuaPage() -> impl IntoView {
    view! { <BrandPage brand=DAHUA /> }
}

#[component]
pub fn UnvPage() -> impl IntoView {
    view! { <BrandPage brand=UNV /> }
}
