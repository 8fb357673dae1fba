// =============================================================================
// GS-IT Web - Audio Video Page
// =============================================================================
// Table of Contents:
// 1. Hero
// 2. Introduction
// 3. AV Services
// 4. Solutions
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBanner, FeatureCard, PageHero, PageMeta, SectionHeader, SolutionCard};
use crate::content::{AV_SERVICES, AV_SOLUTIONS};

#[component]
pub fn AudioVideoPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Audio Visual Solutions in Dubai"
            description="Transform your space with state-of-the-art audio visual solutions in Dubai. Professional AV consulting, design, installation & maintenance services for businesses."
        />

        <div class="page page-av">
            // 1. Hero
            <PageHero
                tag="AUDIO & VIDEO"
                title="Audio Visual Solutions in Dubai"
                subtitle="Consulting, design, installation and maintenance for every room that needs to be seen and heard."
                image="/assets/img/av-hero.jpg"
            />

            // 2. Introduction
            <section class="av-intro">
                <SectionHeader title="Leading Audio Video Solutions Provider in Dubai" />
                <div class="av-intro-text">
                    <p>
                        "As one of the established audio visual equipment suppliers in Dubai, we help organisations "
                        "communicate better with systems that are simple to use and dependable every day."
                    </p>
                    <p>
                        "Our engineers handle the whole lifecycle, so one team is accountable from the first drawing to the last service visit."
                    </p>
                </div>
            </section>

            // 3. AV Services
            <section class="av-services">
                <SectionHeader title="Our AV Services" />
                <div class="feature-grid">
                    {AV_SERVICES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </section>

            // 4. Solutions
            <section class="av-solutions">
                <SectionHeader
                    title="Solutions for Every Space"
                    subtitle="Proven designs we adapt to each site"
                />
                <div class="solution-grid">
                    {AV_SOLUTIONS.into_iter().map(|solution| view! { <SolutionCard solution=solution /> }).collect_view()}
                </div>
            </section>

            <CtaBanner
                title="Upgrade your meeting rooms"
                text="Get a free consultation with one of our AV designers."
            />
        </div>
    }
}
