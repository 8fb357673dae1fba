// =============================================================================
// GS-IT Web - Service Page
// =============================================================================
// Table of Contents:
// 1. Hero
// 2. Service Grid
// 3. Process
// 4. Stats
// =============================================================================

use leptos::prelude::*;

use crate::components::{
    CtaBanner, PageHero, PageMeta, ProcessStepCard, SectionHeader, ServiceCard, StatCard,
};
use crate::content::{PROCESS_STEPS, SERVICES, SERVICE_STATS};

#[component]
pub fn ServicePage() -> impl IntoView {
    let step_count = PROCESS_STEPS.len();

    view! {
        <PageMeta
            title="Professional Services"
            description="Audio systems, video walls, CCTV and networking designed and installed by certified engineers."
        />

        <div class="page page-service">
            // 1. Hero
            <PageHero
                tag="SERVICES"
                title="Professional Services"
                subtitle="Complete technology solutions, designed and delivered by one team."
                image="/assets/img/service.jpg"
            />

            // 2. Service Grid
            <section class="service-section">
                <SectionHeader
                    title="What We Do"
                    subtitle="Pick one system or let us deliver them all together"
                />
                <div class="service-grid">
                    {SERVICES.into_iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </section>

            // 3. Process
            <section class="process-section">
                <SectionHeader title="How We Work" />
                <div class="process-grid">
                    {PROCESS_STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <ProcessStepCard step=step index=index last={index + 1 == step_count} />
                        })
                        .collect_view()}
                </div>
            </section>

            // 4. Stats
            <section class="service-stats">
                <ul class="stats-grid">
                    {SERVICE_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </ul>
            </section>

            <CtaBanner
                title="Ready to start your project?"
                text="Book a free site survey and we will map out the right solution."
            />
        </div>
    }
}
