//! Contact page: signup for la Veille de la Transcendance.

use dioxus::prelude::*;
use tetravers_core::{subscribe, NewsletterForm};
use tetravers_ui::{Button, ButtonVariant};

use crate::context::use_backend;

const BENEFITS: [(&str, &str); 3] = [
    ("✦", "Récits exclusifs du Tétravers"),
    ("◈", "Révélations sur les créatures légendaires"),
    ("✧", "Actualités des quatre royaumes"),
];

#[component]
pub fn Contact() -> Element {
    let backend = use_backend();
    let mut form = use_signal(NewsletterForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Validation failures set their message inside begin_submit
        let Some(subscription) = form.with_mut(|f| f.begin_submit()) else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = subscribe(backend.as_ref(), &subscription).await;
            form.with_mut(|f| f.finish_submit(result));
        });
    };

    let (email, submitting, label, message) = {
        let f = form.read();
        (
            f.email.clone(),
            f.is_submitting(),
            f.button_label(),
            f.message()
                .map(|m| (format!("form-message {}", m.kind.class()), m.text.clone())),
        )
    };

    rsx! {
        div { class: "contact-page",
            div { class: "contact-header",
                h1 { class: "page-title glow-text", "Rejoignez la Veille" }
                p { class: "page-subtitle",
                    "Inscrivez-vous à la Veille de la Transcendance et recevez les dernières révélations du Tétravers"
                }
            }

            section { class: "newsletter-section",
                div { class: "container",
                    div { class: "newsletter-card",
                        div { class: "newsletter-icon",
                            span { class: "pulse-animation", "✉" }
                        }

                        h2 { class: "newsletter-title", "La Veille de la Transcendance" }
                        p { class: "newsletter-description",
                            "Rejoignez une communauté d'explorateurs du Tétravers. Recevez des révélations sur "
                            "les royaumes, des récits inédits, et soyez informé des événements cosmiques à venir."
                        }

                        form { class: "newsletter-form", onsubmit: on_submit,
                            div { class: "form-group",
                                input {
                                    r#type: "email",
                                    class: "email-input",
                                    placeholder: "votre@email.com",
                                    value: "{email}",
                                    disabled: submitting,
                                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_email(evt.value())),
                                }
                                Button {
                                    variant: ButtonVariant::Submit,
                                    button_type: "submit",
                                    disabled: submitting,
                                    "{label}"
                                }
                            }

                            if let Some((class, text)) = message {
                                div { class: "{class}", "{text}" }
                            }
                        }

                        div { class: "newsletter-benefits",
                            for (icon, text) in BENEFITS {
                                div { key: "{text}", class: "benefit-item",
                                    span { class: "benefit-icon", "{icon}" }
                                    span { "{text}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "contact-info-section",
                div { class: "container",
                    div { class: "contact-info",
                        h2 { class: "section-title", "Connectez-vous au Tétravers" }
                        p { class: "contact-text",
                            "Le Tétravers existe à la fois partout et nulle part. Pour ceux qui cherchent à "
                            "approfondir leur connexion avec cet univers mystérieux, la Veille de la Transcendance "
                            "est votre porte d'entrée vers des connaissances plus profondes."
                        }

                        div { class: "cosmic-divider",
                            span { "✦" }
                            span { "◈" }
                            span { "✧" }
                        }

                        p { class: "contact-quote",
                            "\"Dans l'œil de la Transcendance, tous les chemins convergent vers la compréhension.\""
                        }
                    }
                }
            }
        }
    }
}
