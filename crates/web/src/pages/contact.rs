// =============================================================================
// GS-IT Web - Contact Page
// =============================================================================
// Validated enquiry form. Field rules and submit bookkeeping live in
// `crate::contact`; this page only binds them to inputs.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{submit_contact, ApiClient};
use crate::components::{ConsentSwitch, PageMeta, StatusBanner, TextArea, TextInput};
use crate::contact::{ContactFormState, Field, SubmitStep, PHONE_DIGITS};
use crate::routes::Route;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// Field Bindings
// -----------------------------------------------------------------------------

fn field_value(state: RwSignal<ContactFormState>, field: Field) -> Signal<String> {
    Signal::derive(move || state.with(|s| s.form.value(field).to_string()))
}

fn field_error(state: RwSignal<ContactFormState>, field: Field) -> Signal<Option<String>> {
    Signal::derive(move || state.with(|s| s.error(field).map(str::to_string)))
}

fn field_input(state: RwSignal<ContactFormState>, field: Field) -> Callback<String> {
    Callback::new(move |value: String| state.update(|s| s.input(field, &value)))
}

// -----------------------------------------------------------------------------
// Contact Page
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let client = ApiClient::new(app_state.config.api_base.clone());
    let state = RwSignal::new(ContactFormState::new());

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();

        match state.try_update(ContactFormState::begin_submit) {
            Some(SubmitStep::Send(request)) => {
                let client = client.clone();
                spawn_local(async move {
                    let result = submit_contact(&client, &request).await;
                    if let Err(e) = &result {
                        log::warn!("Contact submission failed: {}", e);
                    } else {
                        log::info!("Contact submission delivered");
                    }
                    if state.try_update(|s| s.finish_submit(result)).is_none() {
                        log::debug!("Contact page closed before the response arrived");
                    }
                });
            }
            Some(SubmitStep::Invalid) => log::debug!("Contact form has validation errors"),
            Some(SubmitStep::InFlight) | None => {}
        }
    };

    let status = Signal::derive(move || state.with(|s| s.status));
    let submitting = move || state.with(|s| s.submitting);
    let label = move || state.with(|s| s.submit_label());

    view! {
        <PageMeta
            title="Contact Us"
            description="Contact our team for any questions, support, or business inquiries. We're here to help and will respond as soon as possible."
        />

        <div class="page page-contact">
            <div class="contact-container">
                <header class="contact-header">
                    <span class="section-tag">"CONTACT"</span>
                    <h1 class="contact-title">"Contact Us"</h1>
                    <p class="contact-subtitle">
                        "We'd love to hear from you. Send us a message and we'll respond within 24 hours."
                    </p>
                </header>

                <form class="contact-form" aria-label="Contact form" novalidate=true on:submit=on_submit>
                    <div class="form-grid">
                        <TextInput
                            id={Field::FirstName.id()}
                            label="First name"
                            value=field_value(state, Field::FirstName)
                            on_input=field_input(state, Field::FirstName)
                            error=field_error(state, Field::FirstName)
                            autocomplete="given-name"
                            required=true
                        />
                        <TextInput
                            id={Field::LastName.id()}
                            label="Last name"
                            value=field_value(state, Field::LastName)
                            on_input=field_input(state, Field::LastName)
                            error=field_error(state, Field::LastName)
                            autocomplete="family-name"
                            required=true
                        />
                        <TextInput
                            id={Field::Company.id()}
                            label="Company"
                            value=field_value(state, Field::Company)
                            on_input=field_input(state, Field::Company)
                            error=field_error(state, Field::Company)
                            autocomplete="organization"
                        />
                        <TextInput
                            id={Field::Email.id()}
                            label="Email"
                            input_type="email"
                            value=field_value(state, Field::Email)
                            on_input=field_input(state, Field::Email)
                            error=field_error(state, Field::Email)
                            autocomplete="email"
                            required=true
                        />
                        <TextInput
                            id={Field::Phone.id()}
                            label="Phone number"
                            input_type="tel"
                            placeholder="Enter 10-digit number"
                            max_length={PHONE_DIGITS as u32}
                            value=field_value(state, Field::Phone)
                            on_input=field_input(state, Field::Phone)
                            error=field_error(state, Field::Phone)
                            autocomplete="tel"
                        />
                        <TextArea
                            id={Field::Message.id()}
                            label="Message"
                            rows=4
                            value=field_value(state, Field::Message)
                            on_input=field_input(state, Field::Message)
                            error=field_error(state, Field::Message)
                            required=true
                        />
                        <ConsentSwitch
                            checked=Signal::derive(move || state.with(|s| s.form.consent))
                            on_toggle=Callback::new(move |agreed: bool| state.update(|s| s.set_consent(agreed)))
                            error=field_error(state, Field::Consent)
                            policy_href={Route::Privacy.path()}
                        />
                    </div>

                    <StatusBanner status=status />

                    <button type="submit" class="btn-primary btn-block" disabled=submitting>
                        {label}
                    </button>
                </form>
            </div>
        </div>
    }
}
