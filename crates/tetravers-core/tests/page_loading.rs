//! Page loading tests
//!
//! Each content page against the in-memory backend: backend rows replace
//! the fallback catalog only when there are some, failures keep the
//! fallback, and server order is preserved.

use serde_json::json;
use tetravers_core::{
    load_creatures, load_realms, load_stories, realm_listing, story_listing, CreaturePage,
    MemoryBackend, OverlayClick, PageSession, Selection, StoryEntry,
};

// ============================================================================
// Fixtures
// ============================================================================

fn realm_row(id: &str, name: &str, color: &str, order: i32) -> serde_json::Value {
    json!({
        "id": id,
        "nom": name,
        "description": format!("Description de {name}"),
        "couleur_principale": color,
        "ambiance_audio": null,
        "ordre": order,
        "created_at": "2025-01-01T00:00:00+00:00"
    })
}

fn creature_row(id: &str, name: &str, kind: &str, realm_id: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "nom": name,
        "type": kind,
        "description": format!("{name} veille sur le Tétravers."),
        "royaume_id": realm_id,
        "image_url": null,
        "created_at": "2025-01-01T00:00:00+00:00"
    })
}

fn story_row(id: &str, title: &str, published_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "titre": title,
        "contenu": "Premier paragraphe.\n\nSecond paragraphe.",
        "extrait": "Premier paragraphe...",
        "categorie": "Chroniques",
        "published_at": published_at,
        "created_at": "2025-01-01T00:00:00+00:00"
    })
}

fn four_realms_out_of_order() -> Vec<serde_json::Value> {
    vec![
        realm_row("r2", "Le Royaume des Flammes", "#FF3366", 2),
        realm_row("r1", "Le Royaume des Éclats", "#00D9FF", 1),
        realm_row("r4", "Le Royaume du Vide", "#1A1A2E", 4),
        realm_row("r3", "Le Royaume des Brumes", "#9B7EDE", 3),
    ]
}

// ============================================================================
// Realms page
// ============================================================================

#[tokio::test]
async fn realms_page_shows_backend_rows_in_server_order() {
    let backend = MemoryBackend::new().with_rows("royaumes", &four_realms_out_of_order());
    let session = PageSession::new();
    let mut listing = realm_listing();

    assert!(listing.is_loading());
    let result = load_realms(&backend).await;
    assert!(listing.settle(&session.begin(), result));

    assert!(!listing.is_loading());
    let ids: Vec<String> = listing
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| e.key(i))
        .collect();
    assert_eq!(ids, vec!["r1", "r2", "r3", "r4"]);
    assert!(listing.entries().iter().all(|e| e.is_loaded()));
    assert_eq!(backend.select_count(), 1);
}

#[tokio::test]
async fn realms_page_empty_backend_shows_fallback() {
    let backend = MemoryBackend::new();
    let session = PageSession::new();
    let mut listing = realm_listing();

    let result = load_realms(&backend).await;
    listing.settle(&session.begin(), result);

    assert!(!listing.is_loading());
    let names: Vec<String> = listing.entries().iter().map(|e| e.name().to_string()).collect();
    assert_eq!(
        names,
        vec![
            "Le Royaume des Éclats",
            "Le Royaume des Flammes",
            "Le Royaume des Brumes",
            "Le Royaume du Vide",
        ]
    );
}

#[tokio::test]
async fn realms_page_failure_shows_fallback() {
    let backend = MemoryBackend::new().with_rows("royaumes", &four_realms_out_of_order());
    backend.fail_unreachable("royaumes");
    let session = PageSession::new();
    let mut listing = realm_listing();

    let result = load_realms(&backend).await;
    assert!(result.is_err());
    listing.settle(&session.begin(), result);

    assert!(!listing.is_loading());
    assert!(listing.shows_fallback());
    assert_eq!(listing.entries().len(), 4);
}

#[tokio::test]
async fn realms_page_unmounted_before_load_ignores_result() {
    let backend = MemoryBackend::new().with_rows("royaumes", &four_realms_out_of_order());
    let session = PageSession::new();
    let mut listing = realm_listing();

    let ticket = session.begin();
    session.teardown();
    let result = load_realms(&backend).await;

    assert!(!listing.settle(&ticket, result));
    assert!(listing.is_loading());
    assert!(listing.rows().is_empty());
}

#[tokio::test]
async fn realm_overlay_open_close_reopen() {
    let backend = MemoryBackend::new().with_rows("royaumes", &four_realms_out_of_order());
    let session = PageSession::new();
    let mut listing = realm_listing();
    listing.settle(&session.begin(), load_realms(&backend).await);

    let entries = listing.entries();
    let mut selection = Selection::Closed;

    selection.open(entries[2].clone());
    let first = selection.clone();
    assert_eq!(
        selection.current().map(|e| e.description()),
        Some("Description de Le Royaume des Brumes")
    );

    assert!(!selection.click(OverlayClick::Panel));
    assert!(selection.is_open());

    assert!(selection.click(OverlayClick::Background));
    assert!(!selection.is_open());

    selection.open(entries[2].clone());
    assert_eq!(selection, first);
}

// ============================================================================
// Creatures page
// ============================================================================

#[tokio::test]
async fn creatures_page_resolves_realm_accent() {
    let backend = MemoryBackend::new()
        .with_rows(
            "creatures",
            &[
                creature_row("c2", "Sylphes", "Esprit", None),
                creature_row("c1", "Dragons Célestes", "Dragon", Some("r2")),
            ],
        )
        .with_rows("royaumes", &four_realms_out_of_order());
    let session = PageSession::new();
    let mut page = CreaturePage::new();

    let result = load_creatures(&backend).await;
    assert!(page.settle(&session.begin(), result));
    assert!(!page.is_loading());
    assert_eq!(backend.select_count(), 2);

    let entries = page.entries();
    let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Dragons Célestes", "Sylphes"]);

    let dragon = entries[0].accent(page.realms());
    assert_eq!(dragon.color, "#FF3366");
    assert_eq!(dragon.realm_label, "Le Royaume des Flammes");

    let sylph = entries[1].accent(page.realms());
    assert_eq!(sylph.color, "#00D9FF");
    assert_eq!(sylph.realm_label, "Inconnu");
}

#[tokio::test]
async fn creatures_page_empty_backend_uses_inline_accents() {
    let backend = MemoryBackend::new().with_rows("royaumes", &four_realms_out_of_order());
    let session = PageSession::new();
    let mut page = CreaturePage::new();

    page.settle(&session.begin(), load_creatures(&backend).await);

    let entries = page.entries();
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| !e.is_loaded()));

    let shadows = entries[3].accent(page.realms());
    assert_eq!(shadows.color, "#9B7EDE");
    assert_eq!(shadows.realm_label, "Le Royaume des Brumes");
}

#[tokio::test]
async fn creatures_page_join_is_all_or_nothing() {
    let backend = MemoryBackend::new()
        .with_rows(
            "creatures",
            &[creature_row("c1", "Dragons Célestes", "Dragon", Some("r2"))],
        )
        .with_rows("royaumes", &four_realms_out_of_order());
    backend.fail_rejected("royaumes", Some("42501"), "permission denied");
    let session = PageSession::new();
    let mut page = CreaturePage::new();

    let result = load_creatures(&backend).await;
    assert!(result.is_err());
    page.settle(&session.begin(), result);

    assert!(!page.is_loading());
    assert!(page.realms().is_empty());
    let entries = page.entries();
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| !e.is_loaded()));
}

// ============================================================================
// Stories page
// ============================================================================

#[tokio::test]
async fn stories_page_newest_first() {
    let backend = MemoryBackend::new().with_rows(
        "recits",
        &[
            story_row("s1", "Ancien", "2024-01-01T00:00:00+00:00"),
            story_row("s3", "Récent", "2025-06-01T00:00:00+00:00"),
            story_row("s2", "Milieu", "2024-09-01T00:00:00+00:00"),
        ],
    );
    let session = PageSession::new();
    let mut listing = story_listing();

    listing.settle(&session.begin(), load_stories(&backend).await);

    let titles: Vec<String> = listing.entries().iter().map(|e| e.title().to_string()).collect();
    assert_eq!(titles, vec!["Récent", "Milieu", "Ancien"]);
    assert_eq!(listing.entries()[0].paragraphs().len(), 2);
    assert_eq!(listing.entries()[0].category(), "Chroniques");
}

#[tokio::test]
async fn stories_page_placeholder_selection_switches_directly() {
    let backend = MemoryBackend::new();
    let session = PageSession::new();
    let mut listing = story_listing();
    listing.settle(&session.begin(), load_stories(&backend).await);

    let entries: Vec<StoryEntry> = listing.entries();
    let mut selection = Selection::Closed;

    selection.open(entries[0].clone());
    assert_eq!(selection.current().map(|e| e.title()), Some("L'Éveil du Tétravers"));

    selection.open(entries[2].clone());
    let current = selection.current().unwrap();
    assert_eq!(current.title(), "La Guerre des Brumes");
    assert_eq!(current.category(), "Histoire");
    assert_eq!(current.paragraphs().len(), 4);
}

#[tokio::test]
async fn stories_page_keeps_rows_with_null_text_columns() {
    let mut bare = story_row("s2", "B", "2024-01-01T00:00:00+00:00");
    bare["extrait"] = serde_json::Value::Null;
    bare["categorie"] = serde_json::Value::Null;
    let backend = MemoryBackend::new().with_rows(
        "recits",
        &[story_row("s1", "A", "2025-01-01T00:00:00+00:00"), bare],
    );
    let session = PageSession::new();
    let mut listing = story_listing();

    let result = load_stories(&backend).await;
    assert!(result.is_ok());
    listing.settle(&session.begin(), result);

    let entries = listing.entries();
    let titles: Vec<&str> = entries.iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(entries[1].excerpt(), "");
    assert_eq!(entries[1].category(), "Archives");
}

#[tokio::test]
async fn stories_page_decode_failure_falls_back() {
    let backend = MemoryBackend::new().with_rows("recits", &[json!({"id": "broken"})]);
    let session = PageSession::new();
    let mut listing = story_listing();

    let result = load_stories(&backend).await;
    assert!(result.is_err());
    listing.settle(&session.begin(), result);

    assert!(listing.shows_fallback());
    assert_eq!(listing.entries().len(), 3);
}
