use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::components::feature_carousel::{Feature, FeatureCarousel};
use crate::config;
use crate::inquiry::{
    self, InquiryForm, RelayRequest, SubmitError, SubmitStatus, SubmitStrategy, COPIED_RESET_MS,
    STATUS_RESET_MS,
};
use crate::pages::not_found::NotFound;

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Fast Delivery",
        desc: "24-48 hours turnaround",
    },
    Feature {
        icon: "💎",
        title: "Premium Quality",
        desc: "Industry-best standards",
    },
    Feature {
        icon: "🛡️",
        title: "100% Secure",
        desc: "Data protection guaranteed",
    },
];

const INCLUDED_ITEMS: [&str; 6] = [
    "Professional Consultation",
    "Custom Strategy",
    "24/7 Support",
    "Quality Assurance",
    "Regular Updates",
    "Success Reports",
];

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service_id: String,
    pub subservice_id: String,
    pub catalog: Rc<Catalog>,
}

/// The service detail page: resolves the routed (service, subservice) pair,
/// renders it, and runs the inquiry form through the configured submission
/// strategy. Falls back to the not-found view when either id misses.
#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let navigator = use_navigator().unwrap();
    let form = use_state(InquiryForm::default);
    let status = use_state(|| SubmitStatus::Idle);
    let submit_error = use_state(|| None::<SubmitError>);
    let copied = use_state(|| false);
    // Pending one-shot timers. Replacing an entry drops (cancels) the old
    // timeout; the unmount cleanup below drops whatever is left so nothing
    // fires into a disposed view.
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let copied_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        let copied_timer = copied_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    drop(reset_timer.borrow_mut().take());
                    drop(copied_timer.borrow_mut().take());
                }
            },
            (),
        );
    }

    let resolved = props.catalog.resolve(&props.service_id, &props.subservice_id);
    let (service, subservice) = match resolved {
        Some(pair) => pair,
        None => return html! { <NotFound /> },
    };

    let contact = config::contact_config();
    let strategy = config::submit_strategy();

    let schedule_status_reset: Rc<dyn Fn()> = {
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Rc::new(move || {
            let status = status.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(STATUS_RESET_MS, move || {
                status.set(SubmitStatus::Idle);
            }));
        })
    };

    let go_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.back())
    };

    let call_now = {
        let tel = contact.tel_url();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.location().set_href(&tel);
            }
        })
    };

    let open_whatsapp = {
        let url = contact.whatsapp_url(&subservice.name);
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };

    let copy_number = {
        let copied = copied.clone();
        let copied_timer = copied_timer.clone();
        let number = contact.number.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.navigator().clipboard().write_text(&number);
            }
            copied.set(true);
            let copied = copied.clone();
            *copied_timer.borrow_mut() = Some(Timeout::new(COPIED_RESET_MS, move || {
                copied.set(false);
            }));
        })
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let on_phone_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.phone = input.value();
            form.set(next);
        })
    };
    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let submit_error = submit_error.clone();
        let schedule_status_reset = schedule_status_reset.clone();
        let service_name = service.name.clone();
        let subservice_name = subservice.name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !status.accepts_submit() {
                return;
            }
            if !form.is_complete() {
                return;
            }
            status.set(SubmitStatus::Submitting);
            submit_error.set(None);

            match &strategy {
                SubmitStrategy::Relay(relay) => {
                    let payload =
                        RelayRequest::new(relay, &form, &service_name, &subservice_name);
                    let relay = relay.clone();
                    let form = form.clone();
                    let status = status.clone();
                    let submit_error = submit_error.clone();
                    let schedule_status_reset = schedule_status_reset.clone();
                    spawn_local(async move {
                        match inquiry::send_relay(&relay, &payload).await {
                            Ok(()) => {
                                form.set(InquiryForm::default());
                                status.set(SubmitStatus::Success);
                            }
                            Err(err) => {
                                gloo_console::error!(
                                    "Inquiry submission failed:",
                                    format!("{:?}", err)
                                );
                                // keep the form contents so the visitor can retry
                                submit_error.set(Some(err));
                                status.set(SubmitStatus::Error);
                            }
                        }
                        schedule_status_reset();
                    });
                }
                SubmitStrategy::DirectContact(contact) => {
                    let url = contact.whatsapp_url(&subservice_name);
                    let opened = window()
                        .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok())
                        .flatten();
                    if opened.is_some() {
                        form.set(InquiryForm::default());
                        status.set(SubmitStatus::Success);
                    } else {
                        submit_error.set(Some(SubmitError::Transport));
                        status.set(SubmitStatus::Error);
                    }
                    schedule_status_reset();
                }
            }
        })
    };

    let is_submitting = *status == SubmitStatus::Submitting;

    html! {
        <div class="service-detail-page">
            <style>
                {r#".service-detail-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    color: #1f2937;
                }
                .detail-header {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background: #fff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .back-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #4b5563;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .detail-header h1 {
                    font-size: 1.1rem;
                    margin: 0;
                }
                .detail-header .subtitle {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .detail-main {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 1rem 6rem;
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 1024px) {
                    .detail-main {
                        grid-template-columns: 1fr 1fr;
                    }
                    .form-panel {
                        position: sticky;
                        top: 6rem;
                        align-self: start;
                    }
                }
                .service-badge {
                    display: inline-block;
                    padding: 0.35rem 1rem;
                    background: #dbeafe;
                    color: #1d4ed8;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    margin-bottom: 1rem;
                }
                .detail-title {
                    font-size: 2rem;
                    margin: 0 0 1rem;
                }
                .detail-description {
                    color: #4b5563;
                    font-size: 1.1rem;
                    margin-bottom: 1.5rem;
                }
                .detail-image {
                    width: 100%;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                }
                .quick-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .quick-actions button {
                    flex: 1;
                    padding: 0.85rem;
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                }
                .call-button { background: #2563eb; }
                .whatsapp-button { background: #16a34a; }
                .panel {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    margin-bottom: 2rem;
                }
                .panel h2 {
                    font-size: 1.25rem;
                    margin: 0 0 1.25rem;
                }
                .feature-carousel .carousel-track {
                    position: relative;
                    min-height: 5rem;
                }
                .carousel-slide {
                    display: none;
                    align-items: center;
                    gap: 1rem;
                }
                .carousel-slide.active { display: flex; }
                .carousel-icon {
                    width: 3rem;
                    height: 3rem;
                    background: #dbeafe;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.25rem;
                }
                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    padding: 0;
                }
                .carousel-dot.active { background: #2563eb; }
                .included-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 0.75rem;
                }
                .included-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                }
                .included-check {
                    width: 1.5rem;
                    height: 1.5rem;
                    background: #dcfce7;
                    color: #16a34a;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.8rem;
                }
                .whatsapp-card {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 12px;
                    padding: 1rem;
                }
                .whatsapp-card .card-actions {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .whatsapp-card .card-actions button {
                    padding: 0.65rem 1rem;
                    border-radius: 8px;
                    font-weight: 500;
                    cursor: pointer;
                }
                .open-whatsapp {
                    flex: 1;
                    background: #16a34a;
                    color: #fff;
                    border: none;
                }
                .copy-number {
                    background: #fff;
                    border: 1px solid #86efac;
                    color: #15803d;
                }
                .form-panel .panel { margin-bottom: 0; }
                .form-title {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .status-banner {
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.25rem;
                }
                .status-banner.success {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    color: #166534;
                }
                .status-banner.error {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #991b1b;
                }
                .inquiry-form label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 0.4rem;
                }
                .inquiry-form input,
                .inquiry-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    margin-bottom: 1.25rem;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    background: #111827;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-weight: 700;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .mobile-bar {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    background: #fff;
                    border-top: 1px solid #e5e7eb;
                    padding: 0.75rem 1rem;
                    display: flex;
                    gap: 0.75rem;
                }
                @media (min-width: 1024px) {
                    .mobile-bar { display: none; }
                }
                .mobile-bar button {
                    flex: 1;
                    padding: 0.85rem;
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                }"#}
            </style>

            <header class="detail-header">
                <button class="back-button" onclick={go_back}>
                    <span>{"←"}</span>
                    <span>{"Back"}</span>
                </button>
                <div style="text-align: center;">
                    <h1>{&subservice.name}</h1>
                    <p class="subtitle">{"Get instant quote"}</p>
                </div>
                <div style="width: 5rem;"></div>
            </header>

            <main class="detail-main">
                <div>
                    <span class="service-badge">{&service.name}</span>
                    <h1 class="detail-title">{&subservice.name}</h1>
                    <p class="detail-description">{&subservice.description}</p>
                    <img class="detail-image" src={subservice.image.clone()} alt={subservice.name.clone()} />

                    <div class="quick-actions">
                        <button class="call-button" onclick={call_now.clone()}>
                            {"📞 Call Now"}
                        </button>
                        <button class="whatsapp-button" onclick={open_whatsapp.clone()}>
                            {"💬 WhatsApp"}
                        </button>
                    </div>

                    <div class="panel">
                        <h2>{"Why Choose Us"}</h2>
                        <FeatureCarousel features={FEATURES.to_vec()} />
                    </div>

                    <div class="panel">
                        <h2>{"What's Included"}</h2>
                        <div class="included-grid">
                            {
                                INCLUDED_ITEMS.iter().map(|item| {
                                    html! {
                                        <div key={*item} class="included-item">
                                            <span class="included-check">{"✓"}</span>
                                            <span>{*item}</span>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="whatsapp-card">
                        <p style="font-weight: 500; margin: 0;">{"Quick WhatsApp Inquiry"}</p>
                        <p style="font-size: 0.9rem; color: #4b5563; margin: 0.25rem 0 0;">
                            {format!("Send: \"Hello! I need {}\"", subservice.name)}
                        </p>
                        <div class="card-actions">
                            <button class="open-whatsapp" onclick={open_whatsapp.clone()}>
                                {"Open WhatsApp"}
                            </button>
                            <button class="copy-number" onclick={copy_number}>
                                { if *copied { "Copied!" } else { "Copy Number" } }
                            </button>
                        </div>
                    </div>
                </div>

                <div class="form-panel">
                    <div class="panel">
                        <div class="form-title">
                            <h2>{"Get Free Quote"}</h2>
                            <p style="color: #6b7280;">{"Get pricing within 1 hour"}</p>
                        </div>

                        {
                            match *status {
                                SubmitStatus::Success => html! {
                                    <div class="status-banner success">
                                        <p style="font-weight: 500; margin: 0;">{"Thank you!"}</p>
                                        <p style="font-size: 0.9rem; margin: 0.25rem 0 0;">{"We'll contact you shortly."}</p>
                                    </div>
                                },
                                SubmitStatus::Error => html! {
                                    <div class="status-banner error">
                                        <p style="font-weight: 500; margin: 0;">{"Submission failed"}</p>
                                        <p style="font-size: 0.9rem; margin: 0.25rem 0 0;">
                                            {
                                                (*submit_error)
                                                    .as_ref()
                                                    .map(|e| e.user_message())
                                                    .unwrap_or("Something went wrong. Please try again.")
                                            }
                                        </p>
                                    </div>
                                },
                                _ => html! {},
                            }
                        }

                        <form class="inquiry-form" onsubmit={onsubmit}>
                            <label for="inquiry-name">{"Your Name *"}</label>
                            <input
                                id="inquiry-name"
                                type="text"
                                placeholder="Enter your name"
                                required=true
                                value={form.name.clone()}
                                oninput={on_name_input}
                            />

                            <label for="inquiry-phone">{"Phone Number *"}</label>
                            <input
                                id="inquiry-phone"
                                type="tel"
                                placeholder="Enter phone number"
                                required=true
                                value={form.phone.clone()}
                                oninput={on_phone_input}
                            />

                            <label for="inquiry-email">{"Email Address *"}</label>
                            <input
                                id="inquiry-email"
                                type="email"
                                placeholder="Enter email address"
                                required=true
                                value={form.email.clone()}
                                oninput={on_email_input}
                            />

                            <label for="inquiry-message">{"Requirements"}</label>
                            <textarea
                                id="inquiry-message"
                                rows="4"
                                placeholder="Tell us about your project..."
                                value={form.message.clone()}
                                oninput={on_message_input}
                            />

                            <button type="submit" class="submit-button" disabled={is_submitting}>
                                { if is_submitting { "Processing..." } else { "GET FREE QUOTE NOW" } }
                            </button>
                        </form>

                        <p style="text-align: center; font-size: 0.85rem; color: #6b7280; margin-top: 1.5rem;">
                            {"🔒 Your data is 100% secure"}
                        </p>
                    </div>
                </div>
            </main>

            <div class="mobile-bar">
                <button class="call-button" onclick={call_now}>{"📞 Call Now"}</button>
                <button class="whatsapp-button" onclick={open_whatsapp}>{"💬 WhatsApp"}</button>
            </div>
        </div>
    }
}
