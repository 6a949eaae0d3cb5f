//! Creature gallery card.

use dioxus::prelude::*;
use tetravers_core::catalog::Accent;
use tetravers_core::CreatureEntry;

/// Card for one creature, colored by its realm.
#[component]
pub fn CreatureCard(creature: CreatureEntry, accent: Accent) -> Element {
    let color = &accent.color;
    let card_style = format!("border-color: {color}; box-shadow: 0 0 20px {color}30;");
    let icon_style = format!(
        "background: linear-gradient(135deg, {color}40, {color}10); box-shadow: 0 0 30px {color}50;"
    );
    let kind_style = format!("color: {color};");
    let footer_style = format!("border-top-color: {color};");
    let badge_style = format!("background-color: {color};");
    let glyph = creature.glyph();
    let name = creature.name();
    let kind = creature.kind();
    let excerpt = creature.excerpt();
    let realm_label = &accent.realm_label;

    rsx! {
        div { class: "creature-card", style: "{card_style}",
            div { class: "creature-icon", style: "{icon_style}",
                span { class: "creature-glyph", "{glyph}" }
            }

            h3 { class: "creature-name", "{name}" }
            div { class: "creature-type", style: "{kind_style}", "{kind}" }
            p { class: "creature-excerpt", "{excerpt}" }

            div { class: "creature-royaume", style: "{footer_style}",
                span { class: "royaume-badge", style: "{badge_style}", "{realm_label}" }
            }
        }
    }
}
