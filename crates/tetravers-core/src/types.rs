//! Core record types for Le Tétravers
//!
//! Rows come from the hosted backend, whose columns are named in French.
//! Field names here are English; serde maps them to the backend columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend table holding realms
pub const REALMS_TABLE: &str = "royaumes";
/// Backend table holding creatures
pub const CREATURES_TABLE: &str = "creatures";
/// Backend table holding stories
pub const STORIES_TABLE: &str = "recits";
/// Backend table receiving newsletter signups
pub const NEWSLETTER_TABLE: &str = "newsletter_subscriptions";

/// Marker separating paragraphs inside a story's content
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Optional text columns may hold `null`; those read as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A named region of the Tétravers
///
/// `display_order` gives the total listing order; the backend sorts on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// CSS color used for borders, orbs and badges
    #[serde(rename = "couleur_principale")]
    pub primary_color: String,
    /// Reference to an ambient audio track
    #[serde(rename = "ambiance_audio", default)]
    pub ambient_audio: Option<String>,
    #[serde(rename = "ordre")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A being that lives in the Tétravers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    /// Open-ended label such as "Dragon" or "Entité"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Owning realm; a creature may be unaffiliated
    #[serde(rename = "royaume_id", default)]
    pub realm_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A narrative from the archives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "contenu")]
    pub content: String,
    #[serde(rename = "extrait", default, deserialize_with = "null_as_empty")]
    pub excerpt: String,
    #[serde(rename = "categorie", default, deserialize_with = "null_as_empty")]
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// Story content split into paragraphs.
    pub fn paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.content)
    }
}

/// Split content on blank-line markers, dropping empty paragraphs.
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    content
        .split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// A newsletter signup as inserted into the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
    pub is_active: bool,
}

impl NewsletterSubscription {
    /// A new, active subscription for `email`.
    pub fn active(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_columns_read_as_empty() {
        let row = serde_json::json!({
            "id": "s-1",
            "titre": "Sans extrait",
            "contenu": "Un paragraphe.",
            "extrait": null,
            "categorie": null,
            "published_at": "2025-02-01T00:00:00Z",
            "created_at": "2025-02-01T00:00:00Z"
        });
        let story: Story = serde_json::from_value(row).unwrap();
        assert_eq!(story.excerpt, "");
        assert_eq!(story.category, "");

        let row = serde_json::json!({
            "id": "c-1",
            "nom": "Ombre",
            "type": "Entité",
            "description": null,
            "created_at": "2025-02-01T00:00:00Z"
        });
        let creature: Creature = serde_json::from_value(row).unwrap();
        assert_eq!(creature.description, "");
    }

    #[test]
    fn realm_reads_backend_columns() {
        let row = serde_json::json!({
            "id": "r-1",
            "nom": "Le Royaume des Éclats",
            "description": "Lumière fragmentée",
            "couleur_principale": "#00D9FF",
            "ambiance_audio": null,
            "ordre": 1,
            "created_at": "2025-01-10T12:00:00.123456+00:00"
        });
        let realm: Realm = serde_json::from_value(row).unwrap();
        assert_eq!(realm.name, "Le Royaume des Éclats");
        assert_eq!(realm.primary_color, "#00D9FF");
        assert_eq!(realm.display_order, 1);
        assert!(realm.ambient_audio.is_none());
    }

    #[test]
    fn creature_realm_reference_is_nullable() {
        let row = serde_json::json!({
            "id": "c-1",
            "nom": "Ombres Spectrales",
            "type": "Entité",
            "description": "",
            "royaume_id": null,
            "image_url": null,
            "created_at": "2025-01-10T12:00:00Z"
        });
        let creature: Creature = serde_json::from_value(row).unwrap();
        assert_eq!(creature.kind, "Entité");
        assert!(creature.realm_id.is_none());
    }

    #[test]
    fn story_paragraphs_split_on_blank_lines() {
        let content = "Premier.\n\nDeuxième.\n\n\n\nTroisième.";
        assert_eq!(split_paragraphs(content), vec!["Premier.", "Deuxième.", "Troisième."]);
    }

    #[test]
    fn subscription_serializes_to_insert_payload() {
        let sub = NewsletterSubscription::active("veille@tetravers.fr");
        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "email": "veille@tetravers.fr", "is_active": true })
        );
    }
}
