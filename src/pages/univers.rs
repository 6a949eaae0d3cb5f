//! Universe page: the magic system, the realm map and the Transcendance.

use dioxus::prelude::*;
use tetravers_core::{
    load_realms, realm_listing, OverlayClick, RealmEntry, RealmListing, Selection,
};
use tetravers_ui::{DetailOverlay, LoadingState};

use crate::context::{use_backend, use_page_session};

#[component]
pub fn Univers() -> Element {
    let backend = use_backend();
    let session = use_page_session();
    let mut listing: Signal<RealmListing> = use_signal(realm_listing);
    let mut selected: Signal<Selection<RealmEntry>> = use_signal(Selection::default);

    use_effect(move || {
        let backend = backend.clone();
        let ticket = session.begin();
        spawn(async move {
            let result = load_realms(backend.as_ref()).await;
            if let Ok(rows) = &result {
                tracing::debug!(count = rows.len(), "Loaded realms");
            }
            listing.with_mut(|l| l.settle(&ticket, result));
        });
    });

    let loading = listing.read().is_loading();
    let nodes: Vec<RealmNode> = listing
        .read()
        .entries()
        .into_iter()
        .enumerate()
        .map(|(i, realm)| RealmNode::new(i, realm))
        .collect();
    let detail = selected.read().current().cloned();

    rsx! {
        div { class: "univers-page",
            div { class: "univers-header",
                h1 { class: "page-title glow-text", "Cartographie du Tétravers" }
                p { class: "page-subtitle",
                    "Explorez les quatre royaumes qui composent cet univers mystérieux"
                }
            }

            MagicSystem {}

            section { class: "royaumes-section",
                div { class: "container",
                    h2 { class: "section-title", "Les Quatre Royaumes" }

                    if loading {
                        LoadingState { text: "Chargement de la carte céleste..." }
                    } else {
                        div { class: "royaumes-map",
                            for node in nodes {
                                div {
                                    key: "{node.key}",
                                    class: "royaume-node",
                                    style: "{node.node_style}",
                                    onclick: move |_| {
                                        let realm = node.realm.clone();
                                        selected.with_mut(|s| s.open(realm));
                                    },
                                    div { class: "royaume-orb", style: "{node.orb_style}" }
                                    h3 { "{node.name}" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(realm) = detail {
                RealmDetail {
                    realm,
                    on_click: move |target| {
                        selected.with_mut(|s| {
                            s.click(target);
                        })
                    },
                }
            }

            section { class: "transcendance-section",
                div { class: "container",
                    div { class: "transcendance-content",
                        h2 { class: "section-title", "La Transcendance" }
                        p { class: "transcendance-text",
                            "Au-delà des royaumes, au-delà de la magie elle-même, existe la Transcendance. "
                            "Cet ordre cosmique maintient l'équilibre entre les dimensions, régit les lois "
                            "de la création et de la destruction. C'est le Système qui orchestre la danse "
                            "éternelle entre l'illusion et la réalité, garantissant que le Tétravers demeure "
                            "en harmonie malgré les forces chaotiques qui le traversent."
                        }
                    }
                }
            }
        }
    }
}

/// One orb on the realm map
struct RealmNode {
    key: String,
    name: String,
    realm: RealmEntry,
    node_style: String,
    orb_style: String,
}

impl RealmNode {
    fn new(index: usize, realm: RealmEntry) -> Self {
        let color = realm.color();
        Self {
            key: realm.key(index),
            name: realm.name().to_string(),
            node_style: format!("border-color: {color}; box-shadow: 0 0 20px {color}50;"),
            orb_style: format!("background-color: {color};"),
            realm,
        }
    }
}

/// Realm detail overlay, colored by the realm.
#[component]
fn RealmDetail(realm: RealmEntry, on_click: EventHandler<OverlayClick>) -> Element {
    let color = realm.color();
    let panel_style = format!("border-color: {color}; box-shadow: 0 0 40px {color}80;");
    let header_style = format!("border-bottom-color: {color};");
    let orb_style = format!("background-color: {color};");
    let title_style = format!("color: {color};");
    let name = realm.name();
    let description = realm.description();

    rsx! {
        DetailOverlay {
            overlay_class: "royaume-modal-overlay",
            panel_class: "royaume-modal",
            panel_style,
            on_click,

            div { class: "modal-header", style: "{header_style}",
                div { class: "modal-orb", style: "{orb_style}" }
                h2 { style: "{title_style}", "{name}" }
            }
            div { class: "modal-content",
                p { "{description}" }
            }
        }
    }
}

/// The two magic levels and the three kinds of magic.
#[component]
fn MagicSystem() -> Element {
    rsx! {
        section { class: "magic-system-section",
            div { class: "container",
                div { class: "magic-info",
                    h2 { class: "section-title", "Le Système Magique" }
                    div { class: "magic-grid",
                        div { class: "magic-card",
                            h3 { "Niveau 1 - Magie Fondamentale" }
                            p {
                                "La base de toute manifestation magique. Accessible aux initiés, elle permet "
                                "de manipuler les énergies élémentaires et de créer des illusions simples."
                            }
                        }
                        div { class: "magic-card",
                            h3 { "Niveau 2 - Magie Avancée" }
                            p {
                                "Réservée aux maîtres, cette magie transcende la réalité. Elle englobe la "
                                "pureté créatrice, les illusions complexes et les forces destructrices."
                            }
                        }
                    }

                    div { class: "magic-types",
                        div { class: "type-badge", style: "border-color: var(--color-cyan);",
                            span { class: "type-icon", "◇" }
                            "Magie d'Illusion"
                        }
                        div { class: "type-badge", style: "border-color: var(--color-gold);",
                            span { class: "type-icon", "✧" }
                            "Magie de Pureté"
                        }
                        div { class: "type-badge", style: "border-color: var(--color-magenta);",
                            span { class: "type-icon", "✦" }
                            "Magie Destructrice"
                        }
                    }
                }
            }
        }
    }
}
