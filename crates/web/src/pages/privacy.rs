// =============================================================================
// GS-IT Web - Privacy Policy Page
// =============================================================================

use leptos::prelude::*;

use crate::components::PageMeta;
use crate::routes::Route;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageMeta
            title="Privacy Policy"
            description="How GS-IT collects, uses and protects the information you send through this website."
        />

        <div class="page page-legal">
            <div class="legal-container">
                <div class="legal-header">
                    <h1>"Privacy Policy"</h1>
                </div>

                <div class="legal-content">
                    <section class="legal-section">
                        <h2>"1. Information We Collect"</h2>
                        <p>"When you use the contact form we receive:"</p>
                        <ul>
                            <li>"Your first and last name"</li>
                            <li>"Company name"</li>
                            <li>"Email address and phone number"</li>
                            <li>"The message you write"</li>
                        </ul>
                        <p>"We do not use tracking cookies and we do not build visitor profiles."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"2. How We Use It"</h2>
                        <p>
                            "Contact details are used only to answer your enquiry and, where you ask for it, "
                            "to prepare a quotation or arrange a site survey."
                        </p>
                    </section>

                    <section class="legal-section">
                        <h2>"3. Sharing"</h2>
                        <p>
                            "We never sell your data. Details may be shared with a manufacturer partner only "
                            "when it is needed to register a project or a warranty on your behalf."
                        </p>
                    </section>

                    <section class="legal-section">
                        <h2>"4. Retention"</h2>
                        <p>"Enquiries are kept for as long as needed to serve you and then deleted."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"5. Your Rights"</h2>
                        <p>
                            "You can ask us to show, correct or delete the information we hold about you. "
                            "Send the request through the "
                            <a href={Route::Contact.path()}>"contact page"</a>
                            "."
                        </p>
                    </section>
                </div>
            </div>
        </div>
    }
}
