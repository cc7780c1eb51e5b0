use log::warn;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::live_region::LiveRegionView;
use crate::context::AppContext;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        warn!("ContactPage rendered without an AppContext provider");
        return html! {};
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Get in touch"}</h1>
                <p>{"Questions, demos or partnerships. Leave us a note and we will reply within one business day."}</p>
            </section>

            <section class="contact-section">
                <ContactForm app={app.clone()} />
            </section>

            <LiveRegionView region={app.live_region.clone()} />

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #1a1a1a;
                }

                .contact-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }

                .contact-hero h1 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .contact-hero p {
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 600px;
                    margin: 0 auto;
                }

                .contact-section {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .contact-form {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.5rem;
                }

                .form-group label {
                    margin-bottom: 0.5rem;
                    color: rgba(255, 255, 255, 0.9);
                }

                .required-mark {
                    color: #ff6b6b;
                }

                .form-group input,
                .form-group textarea {
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    font-size: 1rem;
                }

                .form-group.has-error input,
                .form-group.has-error textarea {
                    border-color: #ff6b6b;
                }

                .field-error {
                    color: #ff6b6b;
                    font-size: 0.85rem;
                    min-height: 1.2em;
                    margin-top: 0.35rem;
                }

                .char-counter {
                    align-self: flex-end;
                    font-size: 0.8rem;
                    color: rgba(255, 255, 255, 0.6);
                    margin-top: 0.25rem;
                }

                .char-counter.warning {
                    color: #ffb86b;
                }

                .password-strength {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 0.5rem;
                    font-size: 0.8rem;
                }

                .strength-bar {
                    flex: 1;
                    height: 6px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 3px;
                    overflow: hidden;
                }

                .strength-fill {
                    height: 100%;
                    transition: width 0.3s ease;
                }

                .password-strength.weak .strength-fill { background: #ff6b6b; }
                .password-strength.medium .strength-fill { background: #ffb86b; }
                .password-strength.strong .strength-fill { background: #4caf50; }

                .form-banner {
                    padding: 1rem 1.25rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                }

                .form-banner.success {
                    background: rgba(76, 175, 80, 0.15);
                    border: 1px solid rgba(76, 175, 80, 0.5);
                    color: #a5d6a7;
                }

                .form-banner.error {
                    background: rgba(255, 107, 107, 0.15);
                    border: 1px solid rgba(255, 107, 107, 0.5);
                    color: #ffb3b3;
                }

                .contact-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    font-size: 1.05rem;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }

                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    padding: 0;
                    margin: -1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                    border: 0;
                }

                @media (max-width: 768px) {
                    .contact-form {
                        padding: 1.5rem;
                    }
                    .contact-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
