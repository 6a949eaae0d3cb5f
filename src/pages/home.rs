//! Portal page: hero title, the eye, and the way in.

use dioxus::prelude::*;
use tetravers_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::MysticEye;

/// Home feature cards: icon, accent variable, title, text
const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "✦",
        "var(--color-cyan)",
        "Les Royaumes",
        "Explorez quatre dimensions uniques, des Éclats cristallins au Vide infini",
    ),
    (
        "⚡",
        "var(--color-magenta)",
        "La Magie",
        "Découvrez les systèmes magiques complexes et les niveaux de pouvoir",
    ),
    (
        "◈",
        "var(--color-purple)",
        "Les Créatures",
        "Rencontrez dragons, licornes, phénix et entités mystérieuses",
    ),
];

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "home-page",
            div { class: "hero-section",
                div { class: "hero-content",
                    h1 { class: "hero-title glow-text", "LE TÉTRAVERS" }
                    p { class: "hero-subtitle", "La Magie au-delà des Illusions" }
                    p { class: "hero-tagline", "Ouvrez l'Œil et Plongez dans la Réalité des Créations" }
                }

                div { class: "eye-container", MysticEye {} }

                Button {
                    variant: ButtonVariant::Enter,
                    onclick: move |_| {
                        navigator.push(Route::Univers {});
                    },
                    "Accéder au Tétravers"
                }
            }

            section { class: "intro-section",
                div { class: "container",
                    h2 { class: "section-title", "Un Univers de Magie et de Mystère" }
                    p { class: "section-description",
                        "Le Tétravers est un cosmos où la réalité se tisse d'illusions et de vérités entrelacées. "
                        "Quatre royaumes coexistent, chacun portant sa propre essence magique, gardés par des "
                        "créatures légendaires et régis par les lois mystérieuses de la Transcendance."
                    }

                    div { class: "features-grid",
                        for (icon, color, title, text) in FEATURES {
                            div { key: "{title}", class: "feature-card",
                                div { class: "feature-icon", style: "color: {color};", "{icon}" }
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
