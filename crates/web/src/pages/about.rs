// =============================================================================
// GS-IT Web - About Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBanner, PageHero, PageMeta, SectionHeader, StatCard};
use crate::content::{BRANDS, SERVICE_STATS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageMeta
            title="About Us"
            description="Learn about GS-IT, a Dubai systems integrator for audio-video, security and networking."
        />

        <div class="page page-about">
            <PageHero
                tag="ABOUT"
                title="Transforming Ideas Into Reality"
                subtitle="A Dubai integrator that has spent more than a decade turning building plans into working systems."
                image="/assets/img/about.jpg"
            />

            <section class="about-story">
                <SectionHeader title="Who We Are" />
                <div class="about-text">
                    <p>
                        "GS-IT started as a small CCTV installation team and grew into a full systems integrator. "
                        "Today we design audio-video, surveillance and network infrastructure for hotels, schools, hospitals and offices."
                    </p>
                    <p>
                        "Every project is handled by our own certified engineers, from the first site survey to the support call years later."
                    </p>
                </div>
            </section>

            <section class="about-stats">
                <ul class="stats-grid">
                    {SERVICE_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </ul>
            </section>

            <section class="about-partners">
                <SectionHeader
                    title="Our Partners"
                    subtitle="Authorised to supply and support the leading surveillance brands"
                />
                <div class="partner-cards">
                    {BRANDS
                        .into_iter()
                        .map(|brand| view! {
                            <a href={brand.route.path()} class="partner-card">
                                <img src=brand.logo alt=brand.name loading="lazy" />
                                <h3>{brand.name}</h3>
                                <p>{brand.tagline}</p>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <CtaBanner
                title="Work with us"
                text="Whether it is one meeting room or a whole campus, we would like to hear about it."
            />
        </div>
    }
}
