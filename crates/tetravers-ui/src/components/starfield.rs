//! Starfield Background Component
//!
//! A fixed layer of twinkling stars behind every page. Star positions come
//! from a small deterministic generator so the sky stays the same between
//! renders.

use dioxus::prelude::*;

/// One star in percent coordinates
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Twinkle animation delay in seconds
    pub delay: f32,
}

impl Star {
    /// Inline CSS placing and sizing the star.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.delay
        )
    }
}

/// Deterministic star layout (xorshift32).
pub fn star_layout(count: usize, seed: u32) -> Vec<Star> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state % 10_000) as f32 / 10_000.0
    };

    (0..count)
        .map(|_| Star {
            x: next() * 100.0,
            y: next() * 100.0,
            size: 1.0 + next() * 2.0,
            delay: next() * 4.0,
        })
        .collect()
}

/// Properties for the Starfield component
#[derive(Clone, PartialEq, Props)]
pub struct StarfieldProps {
    /// Number of stars (default: 120)
    #[props(default = 120)]
    pub count: usize,
    /// Layout seed
    #[props(default = 7)]
    pub seed: u32,
}

#[component]
pub fn Starfield(props: StarfieldProps) -> Element {
    let stars = star_layout(props.count, props.seed);

    rsx! {
        div { class: "stars-background", "aria-hidden": "true",
            for (i, style) in stars.iter().map(Star::style).enumerate() {
                span { key: "{i}", class: "star", style: "{style}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic_and_in_bounds() {
        let a = star_layout(50, 7);
        let b = star_layout(50, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        for star in &a {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.0).contains(&star.size));
        }
    }

    #[test]
    fn zero_seed_still_produces_stars() {
        let stars = star_layout(3, 0);
        assert!(stars.iter().any(|s| s.x > 0.0));
    }
}
