//! Top navigation bar.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Navigation() -> Element {
    let current = use_route::<Route>();

    let links: Vec<(Route, &'static str, &'static str)> = Route::nav_items()
        .into_iter()
        .map(|(route, label)| {
            let class = if route == current { "nav-link active" } else { "nav-link" };
            (route, label, class)
        })
        .collect();

    rsx! {
        nav { class: "navigation",
            div { class: "nav-container",
                Link { to: Route::Home {}, class: "nav-logo",
                    span { class: "logo-text glow-text", "TÉTRAVERS" }
                }

                ul { class: "nav-menu",
                    for (route, label, class) in links {
                        li { key: "{route}",
                            Link { to: route, class: class,
                                "{label}"
                                if class.ends_with("active") {
                                    span { class: "nav-underline" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
