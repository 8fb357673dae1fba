// =============================================================================
// GS-IT Web - Home Page
// =============================================================================
// Hero with headline stats, feature grid, latest articles, partner logos,
// newsletter sign-up and a closing call to action.
// =============================================================================

use leptos::prelude::*;

use crate::components::{BlogCard, CtaBanner, FeatureCard, PageMeta, SectionHeader, StatCard};
use crate::content::{BLOG_POSTS, BRANDS, HERO_STATS, HOME_FEATURES, NEWSLETTER};
use crate::routes::Route;

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta
            title="Audio Visual & Security Solutions in Dubai"
            description="GS-IT designs, installs and supports audio-video, CCTV and networking systems for businesses across the UAE."
        />

        <div class="page page-home">
            // ═══════════════════════════════════════════════════════════════
            // HERO
            // ═══════════════════════════════════════════════════════════════
            <section class="hero">
                <div class="hero-bg">
                    <div class="grid-overlay"></div>
                    <div class="glow-orb glow-1"></div>
                </div>

                <div class="hero-main">
                    <div class="hero-text">
                        <h1 class="hero-headline">
                            "Smart Technology for"<br/>
                            <span class="headline-accent">"Modern Business"</span>
                        </h1>
                        <p class="hero-description">
                            "From the boardroom to the loading dock, we plan, build and look after the systems your people rely on every day."
                        </p>

                        <ul class="stats-bar">
                            {HERO_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                        </ul>

                        <div class="hero-buttons">
                            <a href={Route::Contact.path()} class="btn-primary">
                                "Get Started"
                                <span class="btn-icon">"→"</span>
                            </a>
                            <a href={Route::Service.path()} class="btn-secondary">"Our Services"</a>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <img src="/assets/img/hero.jpg" alt="Control room installed by GS-IT" loading="eager" />
                    </div>
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // FEATURES
            // ═══════════════════════════════════════════════════════════════
            <section class="features-section">
                <SectionHeader
                    title="Why Businesses Choose Us"
                    subtitle="One partner for every system behind the walls and on the screens"
                />
                <div class="feature-grid">
                    {HOME_FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // BLOG
            // ═══════════════════════════════════════════════════════════════
            <section class="blog-section">
                <SectionHeader title="Latest Insights" subtitle="Notes from recent projects" />
                <div class="blog-grid">
                    {BLOG_POSTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! { <BlogCard post=post index=index /> })
                        .collect_view()}
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // PARTNERS
            // ═══════════════════════════════════════════════════════════════
            <section class="partner-strip">
                <h2 class="partner-title">"Authorised Partner"</h2>
                <div class="partner-logos">
                    {BRANDS
                        .into_iter()
                        .map(|brand| view! {
                            <a href={brand.route.path()} class="partner-logo" title=brand.name>
                                <img src=brand.logo alt=brand.name loading="lazy" />
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // NEWSLETTER
            // ═══════════════════════════════════════════════════════════════
            <section class="newsletter-section">
                <div class="newsletter-text">
                    <h2>{NEWSLETTER.title}</h2>
                    <p>{NEWSLETTER.text}</p>
                </div>
                <a href={NEWSLETTER.route.path()} class="btn-primary">
                    {NEWSLETTER.action}
                    <span class="btn-icon">"→"</span>
                </a>
            </section>

            <CtaBanner
                title="Planning a new space?"
                text="Tell us about the site and we will come back with a design and a budget."
            />
        </div>
    }
}
