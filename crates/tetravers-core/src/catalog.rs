//! Fallback catalog and display entries.
//!
//! When the backend holds no rows for a kind of record, the site shows a
//! fixed set of illustrative entries instead. Fallback entries carry less
//! than backend rows (no identifiers, no timestamps, an inline color and
//! realm name instead of a realm reference), so every list item is an
//! [`Entry`] and display code matches on the variant.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::{split_paragraphs, Creature, Realm, Story};

/// Accent color when a creature's realm is unknown
pub const DEFAULT_ACCENT: &str = "#00D9FF";
/// Realm label when a creature's realm is unknown
pub const UNKNOWN_REALM: &str = "Inconnu";
/// Category shown for stories without one
pub const DEFAULT_CATEGORY: &str = "Archives";
/// Characters kept in a creature card excerpt
pub const EXCERPT_CHARS: usize = 120;

/// A list item: either a backend row or a fallback placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<L, P> {
    Loaded(L),
    Placeholder(P),
}

impl<L, P> Entry<L, P> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Entry::Loaded(_))
    }

    pub fn as_loaded(&self) -> Option<&L> {
        match self {
            Entry::Loaded(row) => Some(row),
            Entry::Placeholder(_) => None,
        }
    }
}

pub type RealmEntry = Entry<Realm, FallbackRealm>;
pub type CreatureEntry = Entry<Creature, FallbackCreature>;
pub type StoryEntry = Entry<Story, FallbackStory>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRealm {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackCreature {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    /// Inline realm name, standing in for a realm reference
    pub realm: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackStory {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub category: &'static str,
}

// ============================================================================
// Fallback data
// ============================================================================

const FALLBACK_REALMS: [FallbackRealm; 4] = [
    FallbackRealm {
        name: "Le Royaume des Éclats",
        description: "Là où la lumière elle-même se fragmente en mille vérités cristallines. \
            Chaque éclat reflète une facette de la réalité, et seuls ceux qui maîtrisent \
            la Magie de Pureté savent lire leurs reflets.",
        color: "#00D9FF",
    },
    FallbackRealm {
        name: "Le Royaume des Flammes",
        description: "Incarnation de la passion destructrice et créatrice. Les dragons célestes \
            et les phénix y veillent sur le cycle éternel de la destruction et du renouveau.",
        color: "#FF3366",
    },
    FallbackRealm {
        name: "Le Royaume des Brumes",
        description: "Un voile épais entre illusion et réalité. Scellé partiellement depuis la \
            Grande Distorsion, il n'est accessible qu'au prix de rituels complexes et dangereux.",
        color: "#9B7EDE",
    },
    FallbackRealm {
        name: "Le Royaume du Vide",
        description: "Le néant originel devenu royaume, gardien des possibilités infinies. \
            Les Créateurs Primordiaux y demeurent, présents partout et nulle part.",
        color: "#1A1A2E",
    },
];

const FALLBACK_CREATURES: [FallbackCreature; 5] = [
    FallbackCreature {
        name: "Dragons Célestes",
        kind: "Dragon",
        description: "Gardiens ancestraux du Tétravers, les dragons célestes incarnent la puissance \
            destructrice et la sagesse millénaire. Leurs écailles reflètent les couleurs des \
            royaumes qu'ils protègent.",
        realm: "Le Royaume des Flammes",
        color: "#FF3366",
    },
    FallbackCreature {
        name: "Licornes Éthérées",
        kind: "Licorne",
        description: "Créatures de pureté absolue, les licornes éthérées traversent les dimensions \
            avec grâce. Leur corne cristalline peut percer les voiles de l'illusion et révéler la \
            vérité cachée.",
        realm: "Le Royaume des Éclats",
        color: "#00D9FF",
    },
    FallbackCreature {
        name: "Phénix de la Transcendance",
        kind: "Phénix",
        description: "Êtres de renaissance perpétuelle, les phénix symbolisent le cycle éternel de \
            destruction et de création. Leurs flammes contiennent l'essence même de la \
            transformation.",
        realm: "Le Royaume des Flammes",
        color: "#FF3366",
    },
    FallbackCreature {
        name: "Ombres Spectrales",
        kind: "Entité",
        description: "Manifestations mystérieuses du Royaume des Brumes, ces entités oscillent entre \
            existence et néant. Elles sont les gardiennes des secrets les plus profonds du \
            Tétravers.",
        realm: "Le Royaume des Brumes",
        color: "#9B7EDE",
    },
    FallbackCreature {
        name: "Créateurs Primordiaux",
        kind: "Entité Divine",
        description: "Entités cosmiques qui ont façonné le Tétravers. Leur nature transcende la \
            compréhension mortelle, existant simultanément dans tous les royaumes et aucun.",
        realm: "Le Royaume du Vide",
        color: "#1A1A2E",
    },
];

const FALLBACK_STORIES: [FallbackStory; 3] = [
    FallbackStory {
        title: "L'Éveil du Tétravers",
        excerpt: "Au commencement, il n'y avait que le Vide. Un néant absolu où le temps et \
            l'espace n'avaient aucun sens...",
        content: "Au commencement, il n'y avait que le Vide. Un néant absolu où le temps et l'espace \
n'avaient aucun sens. Puis, dans ce silence cosmique, une étincelle de conscience s'éveilla. Cette \
première pensée, pure et primordiale, donna naissance à la Transcendance.

La Transcendance, dans sa sagesse infinie, comprit qu'un univers unique serait fragile. Elle décida \
donc de tisser quatre dimensions entrelacées, chacune reflétant une facette différente de la \
réalité. Ainsi naquit le Tétravers.

Le premier royaume à émerger fut le Royaume des Éclats, où la lumière elle-même se fragmentait en \
mille vérités cristallines. Puis vinrent les Flammes, incarnation de la passion destructrice et \
créatrice. Les Brumes suivirent, voilant la frontière entre illusion et réalité. Enfin, le Vide \
originel devint le quatrième royaume, gardien des possibilités infinies.",
        category: "Origines",
    },
    FallbackStory {
        title: "Les Premiers Créateurs",
        excerpt: "Ils étaient cinq, bien que le nombre soit trompeur pour décrire des entités qui \
            existaient au-delà du comptable...",
        content: "Ils étaient cinq, bien que le nombre soit trompeur pour décrire des entités qui \
existaient au-delà du comptable. Les premiers Créateurs ne possédaient pas de forme physique telle \
que nous la concevons. Ils étaient pure essence, volonté incarnée, conscience cristallisée.

Leur mission était claire : donner forme au Tétravers, établir les lois de la magie, et créer les \
gardiens qui préserveraient l'équilibre. Chaque Créateur apporta sa contribution unique.

Le premier enseigna l'art de l'Illusion, révélant que la perception façonne la réalité. Le deuxième \
insuffla la Pureté, cette magie de création absolue. Le troisième déchaîna les forces Destructrices, \
nécessaires au cycle de renouveau. Les deux derniers restent mystérieux, leurs noms perdus même pour \
les plus anciennes archives.

Leur œuvre accomplie, les Créateurs transcendèrent leur existence, devenant un avec le Tétravers \
lui-même. Certains disent qu'ils observent encore, tissés dans le tissu même de la réalité.",
        category: "Légendes",
    },
    FallbackStory {
        title: "La Guerre des Brumes",
        excerpt: "Il fut un temps où le Royaume des Brumes menaça de consumer tous les autres \
            royaumes dans ses voiles d'illusion...",
        content: "Il fut un temps où le Royaume des Brumes menaça de consumer tous les autres royaumes \
dans ses voiles d'illusion. C'était l'ère que les chroniqueurs nomment la Grande Distorsion.

Un maître des illusions, dont le nom a été effacé de l'histoire, découvrit un moyen de fusionner les \
trois types de magie. Le pouvoir qui en résulta était si immense qu'il commença à dissoudre les \
frontières entre les royaumes. La réalité elle-même devenait malléable, indistinguable du rêve.

La Transcendance dut intervenir directement, un événement rarissime. Les dragons célestes furent \
convoqués, les licornes éthérées mobilisées, et même les ombres spectrales prirent part à la \
bataille. Ce ne fut pas un conflit de violence, mais une guerre de perception, où chaque camp \
tentait d'imposer sa vision de la réalité.

Finalement, l'équilibre fut restauré, mais à un prix. Le Royaume des Brumes fut scellé \
partiellement, ses connexions aux autres dimensions limitées. Depuis ce jour, traverser vers les \
Brumes nécessite des rituels complexes et dangereux.",
        category: "Histoire",
    },
];

pub fn fallback_realms() -> Vec<FallbackRealm> {
    FALLBACK_REALMS.to_vec()
}

pub fn fallback_creatures() -> Vec<FallbackCreature> {
    FALLBACK_CREATURES.to_vec()
}

pub fn fallback_stories() -> Vec<FallbackStory> {
    FALLBACK_STORIES.to_vec()
}

// ============================================================================
// Display accessors
// ============================================================================

impl Entry<Realm, FallbackRealm> {
    /// Stable list key: the backend id, or a positional key for placeholders.
    pub fn key(&self, index: usize) -> String {
        match self {
            Entry::Loaded(realm) => realm.id.clone(),
            Entry::Placeholder(_) => format!("default-{index}"),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Loaded(realm) => &realm.name,
            Entry::Placeholder(realm) => realm.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::Loaded(realm) => &realm.description,
            Entry::Placeholder(realm) => realm.description,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Entry::Loaded(realm) => &realm.primary_color,
            Entry::Placeholder(realm) => realm.color,
        }
    }
}

/// Color and realm label shown on a creature card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accent {
    pub color: String,
    pub realm_label: String,
}

impl Entry<Creature, FallbackCreature> {
    pub fn key(&self, index: usize) -> String {
        match self {
            Entry::Loaded(creature) => creature.id.clone(),
            Entry::Placeholder(_) => format!("default-{index}"),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Loaded(creature) => &creature.name,
            Entry::Placeholder(creature) => creature.name,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Entry::Loaded(creature) => &creature.kind,
            Entry::Placeholder(creature) => creature.kind,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::Loaded(creature) => &creature.description,
            Entry::Placeholder(creature) => creature.description,
        }
    }

    /// First [`EXCERPT_CHARS`] characters of the description, with an ellipsis.
    pub fn excerpt(&self) -> String {
        let head: String = self.description().chars().take(EXCERPT_CHARS).collect();
        format!("{head}...")
    }

    pub fn glyph(&self) -> &'static str {
        creature_glyph(self.kind())
    }

    /// Resolve the card color and realm label.
    ///
    /// Backend creatures go through the realm map; placeholders carry their
    /// own values.
    pub fn accent(&self, realms: &HashMap<String, Realm>) -> Accent {
        match self {
            Entry::Loaded(creature) => {
                let realm = creature.realm_id.as_ref().and_then(|id| realms.get(id));
                match realm {
                    Some(realm) => Accent {
                        color: realm.primary_color.clone(),
                        realm_label: realm.name.clone(),
                    },
                    None => Accent {
                        color: DEFAULT_ACCENT.to_string(),
                        realm_label: UNKNOWN_REALM.to_string(),
                    },
                }
            }
            Entry::Placeholder(creature) => Accent {
                color: creature.color.to_string(),
                realm_label: creature.realm.to_string(),
            },
        }
    }
}

/// Glyph for a creature kind.
pub fn creature_glyph(kind: &str) -> &'static str {
    match kind {
        "Dragon" => "🐉",
        "Licorne" => "🦄",
        "Phénix" => "🔥",
        "Entité" => "👁️",
        "Entité Divine" => "✨",
        _ => "◈",
    }
}

impl Entry<Story, FallbackStory> {
    pub fn key(&self, index: usize) -> String {
        match self {
            Entry::Loaded(story) => story.id.clone(),
            Entry::Placeholder(_) => format!("default-{index}"),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Loaded(story) => &story.title,
            Entry::Placeholder(story) => story.title,
        }
    }

    pub fn excerpt(&self) -> &str {
        match self {
            Entry::Loaded(story) => &story.excerpt,
            Entry::Placeholder(story) => story.excerpt,
        }
    }

    pub fn category(&self) -> &str {
        let category = match self {
            Entry::Loaded(story) => story.category.as_str(),
            Entry::Placeholder(story) => story.category,
        };
        if category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        }
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Entry::Loaded(story) => story.paragraphs(),
            Entry::Placeholder(story) => split_paragraphs(story.content),
        }
    }

    /// Publication date; placeholders have none.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.as_loaded().map(|story| story.published_at)
    }
}
