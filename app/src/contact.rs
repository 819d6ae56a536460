//! The contact section: a static list of ways to reach out and a form that
//! submits through the `contact` server function.
//!
//! The form tracks a [`SubmissionStatus`]. While a request is in flight the
//! submit button is disabled and further dispatches are refused; success
//! clears the fields, failure keeps them so the visitor can retry by hand.

use icondata::{BsEnvelope, BsGeoAlt, BsGithub, BsLinkedin, Icon};
use leptos::prelude::*;

use crate::api::{ContactRequest, contact};
use crate::components::icons::{self, EMAIL, GITHUB_URL, LINKEDIN_URL, MAILTO, new_tab_attrs};
use crate::i18n::{Lang, Text};

/// Lifecycle of one contact-form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The state to enter when the visitor presses "send", or `None` while a
    /// submission is already in flight.
    #[must_use]
    pub const fn begin(self) -> Option<Self> {
        if self.is_pending() {
            None
        } else {
            Some(Self::Submitting)
        }
    }

    /// Terminal state for a finished request. Every failure looks the same
    /// to the visitor.
    #[must_use]
    pub const fn settle<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::Error,
        }
    }

    /// Feedback line under the form, if any.
    #[must_use]
    pub const fn message(self) -> Option<Text> {
        match self {
            Self::Success => Some(Text::new(
                "Message sent! I'll get back to you soon.",
                "¡Mensaje enviado! Te responderé pronto.",
            )),
            Self::Error => Some(Text::new(
                "Something went wrong. Please try again or email me directly.",
                "Algo salió mal. Inténtalo de nuevo o escríbeme directamente por correo.",
            )),
            Self::Idle | Self::Submitting => None,
        }
    }
}

struct ContactItem {
    icon: Icon,
    label: Text,
    value: &'static str,
    href: Option<&'static str>,
}

static CONTACT_ITEMS: [ContactItem; 4] = [
    ContactItem {
        icon: BsEnvelope,
        label: Text::new("Email", "Correo"),
        value: EMAIL,
        href: Some(MAILTO),
    },
    ContactItem {
        icon: BsGithub,
        label: Text::same("GitHub"),
        value: "@h4xter1612",
        href: Some(GITHUB_URL),
    },
    ContactItem {
        icon: BsLinkedin,
        label: Text::same("LinkedIn"),
        value: "Juan Pablo Solís Ruiz",
        href: Some(LINKEDIN_URL),
    },
    ContactItem {
        icon: BsGeoAlt,
        label: Text::new("Location", "Ubicación"),
        value: "Toluca / CDMX, México",
        href: None,
    },
];

const INPUT_CLASS: &str = "py-2 px-3 w-full text-sm rounded-xl border outline-none focus:border-sky-500 border-slate-700 bg-slate-950 text-slate-100";

fn contact_item(item: &'static ContactItem, lang: Signal<Lang>) -> impl IntoView {
    let value = match item.href {
        Some(href) => {
            let (target, rel) = new_tab_attrs(href);
            view! {
                <a href=href target=target rel=rel class="text-sm hover:text-sky-400 text-slate-100">
                    {item.value}
                </a>
            }
            .into_any()
        }
        None => view! { <span class="text-sm text-slate-100">{item.value}</span> }.into_any(),
    };

    view! {
        <li class="flex gap-3 items-center">
            <div class="flex justify-center items-center w-10 h-10 rounded-2xl bg-slate-800/90 text-sky-300">
                {icons::icon(item.icon, "h-4 w-4")}
            </div>
            <div class="flex flex-col">
                <span class="text-xs font-medium text-slate-300">{move || item.label.get(lang.get())}</span>
                {value}
            </div>
        </li>
    }
}

pub fn component(lang: Signal<Lang>) -> impl IntoView {
    let form = RwSignal::new(ContactRequest::default());
    let status = RwSignal::new(SubmissionStatus::Idle);
    let submit = Action::new(move |data: &ContactRequest| {
        let data = data.clone();

        async move {
            let result = contact(data).await;
            if result.is_ok() {
                form.set(ContactRequest::default());
            }
            status.set(SubmissionStatus::settle(&result));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        if !data.is_complete() {
            return;
        }
        if let Some(next) = status.get_untracked().begin() {
            status.set(next);
            let _ = submit.dispatch(data);
        }
    };

    view! {
        <section id="contact" class="flex flex-col justify-center py-20 min-h-screen scroll-mt-28 motion-safe:animate-fade-up">
            <div class="space-y-10">
                <div class="space-y-3 text-center">
                    <h2 class="text-4xl font-semibold text-sky-400 md:text-5xl">
                        {move || Text::new("Let\u{2019}s Connect", "Pongámonos en Contacto").get(lang.get())}
                    </h2>
                    <p class="text-sm md:text-base text-slate-300">
                        {move || {
                            Text::new(
                                "Interested in collaboration or have questions about my work?",
                                "¿Interesado en colaborar o tienes preguntas sobre mi trabajo?",
                            )
                            .get(lang.get())
                        }}
                    </p>
                </div>

                <div class="grid gap-8 md:grid-cols-2">
                    <div class="p-5 space-y-4 rounded-3xl border border-slate-800 bg-slate-900/85">
                        <h3 class="text-sm font-semibold md:text-base text-slate-50">
                            {move || Text::new("Get in Touch", "Datos de Contacto").get(lang.get())}
                        </h3>
                        <ul class="space-y-3">
                            {CONTACT_ITEMS.iter().map(|item| contact_item(item, lang)).collect_view()}
                        </ul>
                    </div>

                    <form class="p-5 space-y-4 rounded-3xl border border-slate-800 bg-slate-900/85" on:submit=on_submit>
                        <h3 class="text-sm font-semibold md:text-base text-slate-50">
                            {move || Text::new("Send a Message", "Envíame un Mensaje").get(lang.get())}
                        </h3>
                        <div class="space-y-3">
                            <input
                                id="name"
                                name="name"
                                type="text"
                                autocomplete="name"
                                required
                                placeholder=move || Text::new("Your Name", "Tu Nombre").get(lang.get())
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    form.update(|prev| prev.name = name);
                                }
                                class=INPUT_CLASS
                            />
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                placeholder=move || Text::new("Your Email", "Tu Correo").get(lang.get())
                                prop:value=move || form.get().email
                                on:input=move |ev| {
                                    let email = event_target_value(&ev);
                                    form.update(|prev| prev.email = email);
                                }
                                class=INPUT_CLASS
                            />
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                required
                                placeholder=move || Text::new("Your Message", "Tu Mensaje").get(lang.get())
                                prop:value=move || form.get().message
                                on:input=move |ev| {
                                    let message = event_target_value(&ev);
                                    form.update(|prev| prev.message = message);
                                }
                                class=INPUT_CLASS
                            />
                            // Honeypot: hidden from people, filled in by naive bots.
                            <input
                                name="website"
                                type="text"
                                tabindex="-1"
                                autocomplete="off"
                                aria-hidden="true"
                                class="hidden"
                                prop:value=move || form.get().website.unwrap_or_default()
                                on:input=move |ev| {
                                    let website = event_target_value(&ev);
                                    form.update(|prev| prev.website = Some(website));
                                }
                            />
                        </div>
                        <button
                            type="submit"
                            disabled=move || status.get().is_pending()
                            class="py-2.5 px-7 text-sm font-semibold text-white bg-sky-500 rounded-full shadow-lg transition hover:bg-sky-400 hover:-translate-y-0.5 disabled:opacity-60 disabled:cursor-not-allowed disabled:hover:translate-y-0 shadow-sky-500/40"
                        >
                            {move || {
                                let label = if status.get().is_pending() {
                                    Text::new("Sending\u{2026}", "Enviando\u{2026}")
                                } else {
                                    Text::new("Send Message", "Enviar Mensaje")
                                };
                                label.get(lang.get())
                            }}
                        </button>
                        {move || {
                            status
                                .get()
                                .message()
                                .map(|message| {
                                    let tone = if status.get() == SubmissionStatus::Success {
                                        "text-sm text-emerald-400"
                                    } else {
                                        "text-sm text-rose-400"
                                    };
                                    view! {
                                        <p role="status" class=tone>
                                            {move || message.get(lang.get())}
                                        </p>
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(!SubmissionStatus::Idle.is_pending());
    }

    #[test]
    fn test_begin_refuses_second_dispatch() {
        assert_eq!(
            SubmissionStatus::Idle.begin(),
            Some(SubmissionStatus::Submitting)
        );
        assert_eq!(SubmissionStatus::Submitting.begin(), None);
    }

    #[test]
    fn test_finished_submissions_can_be_resent() {
        assert_eq!(
            SubmissionStatus::Success.begin(),
            Some(SubmissionStatus::Submitting)
        );
        assert_eq!(
            SubmissionStatus::Error.begin(),
            Some(SubmissionStatus::Submitting)
        );
    }

    #[test]
    fn test_settle_maps_outcomes() {
        let ok: Result<(), &str> = Ok(());
        let err: Result<(), &str> = Err("timeout");
        assert_eq!(SubmissionStatus::settle(&ok), SubmissionStatus::Success);
        assert_eq!(SubmissionStatus::settle(&err), SubmissionStatus::Error);
    }

    #[test]
    fn test_messages_only_for_terminal_states() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Submitting.message(), None);

        let success = SubmissionStatus::Success.message().unwrap();
        assert_eq!(success.get(Lang::En), "Message sent! I'll get back to you soon.");

        let error = SubmissionStatus::Error.message().unwrap();
        assert!(error.is_complete());
        assert!(error.get(Lang::Es).contains("correo"));
    }

    #[test]
    fn test_blank_message_is_never_dispatched() {
        let request = ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: String::new(),
            website: None,
        };
        // The submit handler bails out before touching the status.
        assert!(!request.is_complete());
    }

    #[test]
    fn test_contact_items_link_where_possible() {
        let linked: Vec<_> = CONTACT_ITEMS.iter().filter_map(|item| item.href).collect();
        assert_eq!(linked, [MAILTO, GITHUB_URL, LINKEDIN_URL]);
    }
}
