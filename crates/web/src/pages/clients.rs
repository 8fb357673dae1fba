// =============================================================================
// GS-IT Web - Clients Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBanner, PageHero, PageMeta, SectionHeader, TestimonialCard};
use crate::content::{CLIENT_SECTORS, TESTIMONIALS};

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Our Clients"
            description="Hotels, schools, hospitals and enterprises across the UAE trust GS-IT with their technology."
        />

        <div class="page page-clients">
            <PageHero
                tag="CLIENTS"
                title="Trusted Across Industries"
                subtitle="The organisations we build for, and what they say about the work."
            />

            <section class="sector-section">
                <SectionHeader title="Sectors We Serve" />
                <ul class="sector-list">
                    {CLIENT_SECTORS
                        .into_iter()
                        .map(|sector| view! { <li class="sector-chip">{sector}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="testimonial-section">
                <SectionHeader title="What Our Clients Say" />
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
            </section>

            <CtaBanner
                title="Join them"
                text="Tell us what you are building and we will show you similar projects."
            />
        </div>
    }
}
