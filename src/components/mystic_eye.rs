//! Mystic Eye
//!
//! SVG rendition of the rotating eye on the portal page: a pulsing cyan
//! sphere with an iris that follows the sphere's rotation, wrapped in two
//! counter-rotating rings. The pose is recomputed every frame from a
//! [`FrameClock`]; the loop lives in `use_future` and stops when the
//! component unmounts.

use dioxus::prelude::*;
use tetravers_core::mystic_eye::{
    Camera, EyePose, FrameClock, Ring, CAMERA, FRAME_INTERVAL, INNER_RING, OUTER_RING,
    POINT_LIGHTS, SPHERE_COLOR,
};

/// Half-width of the SVG viewport in user units
const VIEW_HALF: f32 = 200.0;

/// Scene units to SVG units
fn to_view(camera: &Camera, length: f32) -> f32 {
    camera.scale_at_origin(length) * VIEW_HALF
}

/// Ring attributes, formatted for SVG
struct RingShape {
    radius: String,
    stroke: String,
    color: &'static str,
    glow: String,
}

impl RingShape {
    fn of(ring: &Ring) -> Self {
        Self {
            radius: format!("{:.1}", to_view(&CAMERA, ring.radius)),
            stroke: format!("{:.1}", to_view(&CAMERA, ring.tube * 2.0).max(1.0)),
            color: ring.color,
            glow: format!("{:.2}", ring.glow),
        }
    }
}

struct IrisShape {
    cx: String,
    cy: String,
    rx: String,
    ry: String,
}

/// Soft glow marking a point light
struct Halo {
    cx: String,
    cy: String,
    r: String,
    color: &'static str,
}

#[component]
pub fn MysticEye() -> Element {
    let mut pose = use_signal(|| EyePose::at(0.0));

    use_future(move || async move {
        let clock = FrameClock::start();
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            pose.set(clock.pose());
        }
    });

    let current = pose();
    let sphere_r = to_view(&CAMERA, current.sphere_radius());
    let (inner_deg, outer_deg) = current.ring_degrees();
    let inner = RingShape::of(&INNER_RING);
    let outer = RingShape::of(&OUTER_RING);

    let sphere_radius = format!("{sphere_r:.1}");
    let iris = current.iris_offset().map(|[x, y]| IrisShape {
        cx: format!("{:.1}", x * sphere_r * 0.55),
        cy: format!("{:.1}", -y * sphere_r * 0.55),
        rx: format!("{:.1}", sphere_r * 0.28),
        ry: format!("{:.1}", sphere_r * 0.18),
    });

    let halos: Vec<Halo> = POINT_LIGHTS
        .iter()
        .filter_map(|light| {
            CAMERA.project(light.position).map(|[x, y]| Halo {
                cx: format!("{:.1}", x * VIEW_HALF),
                cy: format!("{:.1}", -y * VIEW_HALF),
                r: format!("{:.1}", 40.0 * light.intensity),
                color: light.color,
            })
        })
        .collect();

    let inner_transform = format!("rotate({inner_deg:.2})");
    let outer_transform = format!("rotate({outer_deg:.2})");
    let view_box = format!(
        "{} {} {} {}",
        -VIEW_HALF,
        -VIEW_HALF,
        VIEW_HALF * 2.0,
        VIEW_HALF * 2.0
    );

    rsx! {
        div { class: "mystic-eye",
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "{view_box}",
                width: "100%",
                height: "100%",

                for (i, halo) in halos.into_iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: halo.cx,
                        cy: halo.cy,
                        r: halo.r,
                        fill: halo.color,
                        opacity: "0.08",
                    }
                }

                g { class: "eye-ring", transform: "{outer_transform}",
                    circle {
                        r: outer.radius,
                        fill: "none",
                        stroke: outer.color,
                        stroke_width: outer.stroke,
                        stroke_dasharray: "24 10",
                        opacity: outer.glow,
                    }
                }

                g { class: "eye-ring", transform: "{inner_transform}",
                    circle {
                        r: inner.radius,
                        fill: "none",
                        stroke: inner.color,
                        stroke_width: inner.stroke,
                        stroke_dasharray: "40 6",
                        opacity: inner.glow,
                    }
                }

                circle {
                    class: "eye-sphere",
                    r: "{sphere_radius}",
                    fill: SPHERE_COLOR,
                }

                if let Some(iris) = iris {
                    ellipse {
                        cx: iris.cx,
                        cy: iris.cy,
                        rx: iris.rx,
                        ry: iris.ry,
                        fill: "#0a0a1a",
                        stroke: SPHERE_COLOR,
                        stroke_width: "2",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_fit_the_viewport() {
        let inner = to_view(&CAMERA, INNER_RING.radius);
        let outer = to_view(&CAMERA, OUTER_RING.radius);
        assert!(inner < outer);
        assert!(outer < VIEW_HALF);
    }

    #[test]
    fn ring_strokes_stay_visible() {
        let shape = RingShape::of(&OUTER_RING);
        let stroke: f32 = shape.stroke.parse().unwrap();
        assert!(stroke >= 1.0);
    }
}
