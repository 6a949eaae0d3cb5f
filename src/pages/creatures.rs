//! Creature gallery and the Creators.

use dioxus::prelude::*;
use tetravers_core::{load_creatures, CreaturePage};
use tetravers_ui::LoadingState;

use crate::components::CreatureCard;
use crate::context::{use_backend, use_page_session};

#[component]
pub fn Creatures() -> Element {
    let backend = use_backend();
    let session = use_page_session();
    let mut page: Signal<CreaturePage> = use_signal(CreaturePage::new);

    use_effect(move || {
        let backend = backend.clone();
        let ticket = session.begin();
        spawn(async move {
            let result = load_creatures(backend.as_ref()).await;
            if let Ok((creatures, realms)) = &result {
                tracing::debug!(
                    creatures = creatures.len(),
                    realms = realms.len(),
                    "Loaded creatures"
                );
            }
            page.with_mut(|p| p.settle(&ticket, result));
        });
    });

    let loading = page.read().is_loading();
    let cards: Vec<_> = {
        let page = page.read();
        page.entries()
            .into_iter()
            .enumerate()
            .map(|(i, creature)| {
                let accent = creature.accent(page.realms());
                (creature.key(i), creature, accent)
            })
            .collect()
    };

    rsx! {
        div { class: "creatures-page",
            div { class: "creatures-header",
                h1 { class: "page-title glow-text", "Créatures et Entités" }
                p { class: "page-subtitle", "Découvrez les êtres légendaires qui peuplent le Tétravers" }
            }

            if loading {
                LoadingState { text: "Invocation des créatures..." }
            } else {
                section { class: "creatures-gallery",
                    div { class: "container",
                        div { class: "creatures-grid",
                            for (key, creature, accent) in cards {
                                CreatureCard { key: "{key}", creature, accent }
                            }
                        }
                    }
                }
            }

            section { class: "creators-section",
                div { class: "container",
                    div { class: "creators-content",
                        h2 { class: "section-title", "Les Créateurs" }
                        p { class: "creators-text",
                            "Au commencement du Tétravers, des entités primordiales ont façonné la réalité "
                            "elle-même. Ces Créateurs, dont les noms se perdent dans l'écho du temps, "
                            "ont tissé les fils de la magie et établi les fondations des quatre royaumes. "
                            "Leur héritage perdure dans chaque particule d'énergie, dans chaque battement "
                            "du cosmos. Bien que leur forme physique ait transcendé notre compréhension, "
                            "leur présence imprègne encore le Tétravers, guidant subtilement l'évolution "
                            "de cet univers mystérieux."
                        }
                    }
                }
            }
        }
    }
}
