// =============================================================================
// GS-IT Web - Section Components
// =============================================================================
// Cards and grids shared by the marketing pages.
// =============================================================================

use leptos::prelude::*;

use crate::content::{
    BlogPost, Feature, ProcessStep, ServiceOffering, Solution, Stat, Testimonial,
};
use crate::routes::Route;
use crate::utils::{format_stat, initials};

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <li class="stat-card">
            <span class="stat-value">{format_stat(stat.value, stat.suffix)}</span>
            <span class="stat-label">{stat.label}</span>
        </li>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

/// Service with its bullet list.
#[component]
pub fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon" aria-hidden="true">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                {service
                    .features
                    .iter()
                    .map(|f| view! { <li><span class="check">"✓"</span>{*f}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Numbered process step; `last` hides the connector line.
#[component]
pub fn ProcessStepCard(step: ProcessStep, index: usize, last: bool) -> impl IntoView {
    view! {
        <div class="process-card" data-step={(index + 1).to_string()}>
            <div class="process-icon" aria-hidden="true">{step.icon}</div>
            <h3 class="process-title">{step.title}</h3>
            <p class="process-description">{step.description}</p>
            {(!last).then(|| view! { <div class="process-connector" aria-hidden="true"></div> })}
        </div>
    }
}

#[component]
pub fn SolutionCard(solution: Solution) -> impl IntoView {
    view! {
        <div class="solution-card">
            <div class="solution-image">
                <img src=solution.image alt=solution.title loading="lazy" />
            </div>
            <div class="solution-content">
                <h3>{solution.title}</h3>
                <p>{solution.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn BlogCard(post: BlogPost, index: usize) -> impl IntoView {
    let loading = if index > 0 { "lazy" } else { "eager" };

    view! {
        <article class="blog-card">
            <div class="blog-image">
                <img src=post.image alt=post.title loading=loading />
                <span class="blog-category">{post.category}</span>
            </div>
            <div class="blog-content">
                <h3>{post.title}</h3>
                <div class="blog-meta">
                    <span>{post.date}</span>
                    <span>{post.author}</span>
                </div>
                <p>{post.summary}</p>
            </div>
        </article>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <blockquote>{testimonial.quote}</blockquote>
            <figcaption>
                <span class="avatar" aria-hidden="true">{initials(testimonial.person)}</span>
                <span class="person">{testimonial.person}</span>
                <span class="client">{testimonial.client}" · "{testimonial.sector}</span>
            </figcaption>
        </figure>
    }
}

/// Closing call-to-action pointing at the contact page.
#[component]
pub fn CtaBanner(#[prop(into)] title: String, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <section class="cta-banner">
            <h2>{title}</h2>
            <p>{text}</p>
            <a href={Route::Contact.path()} class="btn-primary">
                "Get in Touch"
                <span class="btn-icon">"→"</span>
            </a>
        </section>
    }
}
