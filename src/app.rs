use dioxus::prelude::*;
use tetravers_ui::Starfield;

use crate::components::Navigation;
use crate::pages::{Contact, Creatures, Home, Recits, Univers};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Portal with the eye and the "Accéder au Tétravers" button
/// - `/univers` - Realm map, magic system, the Transcendance
/// - `/creatures` - Creature gallery
/// - `/recits` - Story archive
/// - `/contact` - Newsletter signup
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/univers")]
        Univers {},
        #[route("/creatures")]
        Creatures {},
        #[route("/recits")]
        Recits {},
        #[route("/contact")]
        Contact {},
}

impl Route {
    /// Entries of the navigation bar, in display order.
    pub fn nav_items() -> [(Route, &'static str); 5] {
        [
            (Route::Home {}, "Portail"),
            (Route::Univers {}, "L'Univers"),
            (Route::Creatures {}, "Créatures"),
            (Route::Recits {}, "Récits"),
            (Route::Contact {}, "Contact"),
        ]
    }
}

/// Root application component.
///
/// Provides global styles and routing. The backend handle is injected by
/// `main` through the launch context.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout shared by every page: starfield, navigation bar, page body.
#[component]
fn Shell() -> Element {
    rsx! {
        Starfield {}
        Navigation {}
        main { Outlet::<Route> {} }
    }
}
