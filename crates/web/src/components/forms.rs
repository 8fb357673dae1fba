// =============================================================================
// GS-IT Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// 3. ConsentSwitch
// =============================================================================
// Inputs are controlled: the value comes in as a signal and edits go out
// through `on_input`, so the owner can sanitise before storing.
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input field with label and error state.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let label_for = id.clone();

    view! {
        <div class="form-field" class:has-error=move || error.with(Option::is_some)>
            <label class="form-label" for=label_for>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=id
                type=input_type
                class="form-input"
                placeholder=placeholder
                maxlength=max_length.map(|n| n.to_string())
                autocomplete=autocomplete
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    let label_for = id.clone();

    view! {
        <div class="form-field" class:has-error=move || error.with(Option::is_some)>
            <label class="form-label" for=label_for>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=id
                class="form-textarea"
                placeholder=placeholder
                rows=rows.to_string()
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. ConsentSwitch
// -----------------------------------------------------------------------------

/// Toggle switch gating submission, with the policy text as its label.
#[component]
pub fn ConsentSwitch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] policy_href: String,
) -> impl IntoView {
    let policy_href = if policy_href.is_empty() { "/Privacy".to_string() } else { policy_href };

    view! {
        <div class="form-consent" class:has-error=move || error.with(Option::is_some)>
            <button
                type="button"
                role="switch"
                class="consent-switch"
                class:checked=move || checked.get()
                aria-checked=move || checked.get().to_string()
                on:click=move |_| on_toggle.run(!checked.get_untracked())
            >
                <span class="sr-only">"Agree to policies"</span>
                <span class="consent-knob" aria-hidden="true"></span>
            </button>
            <span class="consent-label">
                "By selecting this, you agree to our "
                <a href=policy_href class="consent-link">"privacy policy"</a>
                "."
            </span>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}
