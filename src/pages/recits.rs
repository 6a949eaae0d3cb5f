//! Story archive with a full-text reader overlay.

use dioxus::prelude::*;
use tetravers_core::{
    load_stories, story_listing, OverlayClick, Selection, StoryEntry, StoryListing,
};
use tetravers_ui::{Button, ButtonVariant, DetailOverlay, LoadingState};

use crate::context::{use_backend, use_page_session};

/// One entry in the archive list
struct StoryRow {
    key: String,
    title: String,
    excerpt: String,
    category: String,
    story: StoryEntry,
}

impl StoryRow {
    fn new(index: usize, story: StoryEntry) -> Self {
        Self {
            key: story.key(index),
            title: story.title().to_string(),
            excerpt: story.excerpt().to_string(),
            category: story.category().to_string(),
            story,
        }
    }
}

#[component]
pub fn Recits() -> Element {
    let backend = use_backend();
    let session = use_page_session();
    let mut listing: Signal<StoryListing> = use_signal(story_listing);
    let mut selected: Signal<Selection<StoryEntry>> = use_signal(Selection::default);

    use_effect(move || {
        let backend = backend.clone();
        let ticket = session.begin();
        spawn(async move {
            let result = load_stories(backend.as_ref()).await;
            if let Ok(rows) = &result {
                tracing::debug!(count = rows.len(), "Loaded stories");
            }
            listing.with_mut(|l| l.settle(&ticket, result));
        });
    });

    let loading = listing.read().is_loading();
    let rows: Vec<StoryRow> = listing
        .read()
        .entries()
        .into_iter()
        .enumerate()
        .map(|(i, story)| StoryRow::new(i, story))
        .collect();
    let reading = selected.read().current().cloned();

    rsx! {
        div { class: "recits-page",
            div { class: "recits-header",
                h1 { class: "page-title glow-text", "Archives du Tétravers" }
                p { class: "page-subtitle", "Les récits et connaissances ancestrales de l'univers" }
            }

            if loading {
                LoadingState { text: "Consultation des archives..." }
            } else {
                section { class: "recits-codex",
                    div { class: "container",
                        div { class: "recits-list",
                            for row in rows {
                                article {
                                    key: "{row.key}",
                                    class: "recit-entry",
                                    onclick: move |_| {
                                        let story = row.story.clone();
                                        selected.with_mut(|s| s.open(story));
                                    },
                                    div { class: "recit-meta",
                                        span { class: "recit-category", "{row.category}" }
                                    }
                                    h2 { class: "recit-title", "{row.title}" }
                                    p { class: "recit-excerpt", "{row.excerpt}" }
                                    Button { variant: ButtonVariant::ReadMore, "Lire le récit complet →" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(story) = reading {
                StoryReader {
                    story,
                    on_click: move |target| {
                        selected.with_mut(|s| {
                            s.click(target);
                        })
                    },
                }
            }
        }
    }
}

/// Full story, one `<p>` per paragraph.
#[component]
fn StoryReader(story: StoryEntry, on_click: EventHandler<OverlayClick>) -> Element {
    let category = story.category();
    let title = story.title();
    let paragraphs: Vec<String> = story.paragraphs().into_iter().map(str::to_string).collect();

    rsx! {
        DetailOverlay {
            overlay_class: "recit-modal-overlay",
            panel_class: "recit-modal",
            on_click,

            div { class: "recit-modal-header",
                span { class: "recit-category", "{category}" }
                h2 { "{title}" }
            }
            div { class: "recit-modal-content",
                for (i, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
        }
    }
}
