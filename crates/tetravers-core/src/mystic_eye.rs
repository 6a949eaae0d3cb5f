//! The mystic eye: a decorative scene driven only by elapsed time.
//!
//! One distorting sphere sits inside two counter-rotating rings, lit by
//! three point lights and seen through a fixed perspective camera. Every
//! angle is `elapsed seconds × per-element rate`, so a pose can be computed
//! for any instant without keeping state between frames.

use std::time::{Duration, Instant};

/// Target frame period for the animation loop (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Sphere rotation rate around X, in rad/s
pub const SPHERE_RATE_X: f32 = 0.2;
/// Sphere rotation rate around Y, in rad/s
pub const SPHERE_RATE_Y: f32 = 0.3;
/// Inner ring rotation rate around Z, in rad/s
pub const INNER_RING_RATE: f32 = 0.5;
/// Outer ring rotation rate around Z, in rad/s (counter-clockwise)
pub const OUTER_RING_RATE: f32 = -0.3;

/// Sphere base radius in scene units (radius 1, scaled by 1.2)
pub const SPHERE_RADIUS: f32 = 1.2;
/// Surface distortion amount; the radius swings by a quarter of it
pub const DISTORT_AMOUNT: f32 = 0.4;
/// Distortion oscillation speed, in rad/s
pub const DISTORT_SPEED: f32 = 2.0;

pub const SPHERE_COLOR: &str = "#00d9ff";

/// Largest relative change of the sphere radius.
pub fn max_radius_swing() -> f32 {
    DISTORT_AMOUNT * 0.25
}

/// A torus lying in the view plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub tube: f32,
    pub color: &'static str,
    pub glow: f32,
}

pub const INNER_RING: Ring = Ring {
    radius: 2.0,
    tube: 0.05,
    color: "#ff3366",
    glow: 0.8,
};

pub const OUTER_RING: Ring = Ring {
    radius: 2.8,
    tube: 0.03,
    color: "#9b7ede",
    glow: 0.6,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: &'static str,
}

pub const POINT_LIGHTS: [PointLight; 3] = [
    PointLight {
        position: [0.0, 0.0, 0.0],
        intensity: 2.0,
        color: "#00d9ff",
    },
    PointLight {
        position: [5.0, 5.0, 5.0],
        intensity: 1.0,
        color: "#ff3366",
    },
    PointLight {
        position: [-5.0, -5.0, 5.0],
        intensity: 1.0,
        color: "#9b7ede",
    },
];

/// Perspective camera on the +Z axis looking at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub fov_degrees: f32,
}

pub const CAMERA: Camera = Camera {
    distance: 8.0,
    fov_degrees: 50.0,
};

impl Camera {
    fn focal(&self) -> f32 {
        1.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Project a scene point to normalized view coordinates (y up, [-1, 1]
    /// at the frustum edge). `None` when the point is behind the camera.
    pub fn project(&self, point: [f32; 3]) -> Option<[f32; 2]> {
        let depth = self.distance - point[2];
        if depth <= f32::EPSILON {
            return None;
        }
        let scale = self.focal() / depth;
        Some([point[0] * scale, point[1] * scale])
    }

    /// Apparent size of a length lying in the plane z = 0.
    pub fn scale_at_origin(&self, length: f32) -> f32 {
        length * self.focal() / self.distance
    }
}

/// Euler angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    /// Z angle in degrees, normalized to [0, 360).
    pub fn z_degrees(&self) -> f32 {
        self.z.to_degrees().rem_euclid(360.0)
    }
}

/// The scene at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePose {
    pub elapsed: f32,
    pub sphere: Rotation,
    pub inner_ring: Rotation,
    pub outer_ring: Rotation,
    /// Sphere radius multiplier from the distortion wobble
    pub distortion: f32,
}

impl EyePose {
    /// Pose after `elapsed` seconds.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            sphere: Rotation {
                x: elapsed * SPHERE_RATE_X,
                y: elapsed * SPHERE_RATE_Y,
                z: 0.0,
            },
            inner_ring: Rotation {
                z: elapsed * INNER_RING_RATE,
                ..Rotation::default()
            },
            outer_ring: Rotation {
                z: elapsed * OUTER_RING_RATE,
                ..Rotation::default()
            },
            distortion: 1.0 + max_radius_swing() * (elapsed * DISTORT_SPEED).sin(),
        }
    }

    pub fn sphere_radius(&self) -> f32 {
        SPHERE_RADIUS * self.distortion
    }

    /// Where the sphere's front pole (the "iris") faces after rotation, as
    /// an (x, y) offset on the unit disc. `None` while it faces away.
    pub fn iris_offset(&self) -> Option<[f32; 2]> {
        let (sin_x, cos_x) = self.sphere.x.sin_cos();
        let (sin_y, cos_y) = self.sphere.y.sin_cos();
        // (0, 0, 1) rotated about X, then about Y
        let x = sin_y * cos_x;
        let y = -sin_x;
        let z = cos_x * cos_y;
        (z > 0.0).then_some([x, y])
    }

    /// Inner and outer ring angles in degrees, for SVG transforms.
    pub fn ring_degrees(&self) -> (f32, f32) {
        (self.inner_ring.z_degrees(), self.outer_ring.z_degrees())
    }
}

/// Elapsed-time source for the animation loop
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn pose(&self) -> EyePose {
        EyePose::at(self.elapsed_secs())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn pose_at_zero_is_rest() {
        let pose = EyePose::at(0.0);
        assert_eq!(pose.sphere, Rotation::default());
        assert!(close(pose.distortion, 1.0));
        assert_eq!(pose.iris_offset(), Some([0.0, 0.0]));
    }

    #[test]
    fn angles_grow_linearly_with_time() {
        let pose = EyePose::at(10.0);
        assert!(close(pose.sphere.x, 2.0));
        assert!(close(pose.sphere.y, 3.0));
        assert!(close(pose.inner_ring.z, 5.0));
        assert!(close(pose.outer_ring.z, -3.0));
    }

    #[test]
    fn rings_turn_in_opposite_directions() {
        let (inner, outer) = EyePose::at(1.0).ring_degrees();
        assert!(inner > 0.0 && inner < 90.0);
        assert!(outer > 270.0 && outer < 360.0);
    }

    #[test]
    fn distortion_stays_bounded() {
        let swing = max_radius_swing();
        assert!((swing - 0.1).abs() < 1e-6);

        let mut peak: f32 = 0.0;
        for step in 0..1000 {
            let pose = EyePose::at(step as f32 * 0.037);
            let change = (pose.distortion - 1.0).abs();
            assert!(change <= swing + 1e-6);
            peak = peak.max(change);
        }
        assert!(peak > swing * 0.95);
    }

    #[test]
    fn iris_hides_when_facing_away() {
        let mut pose = EyePose::at(0.0);
        pose.sphere.y = PI;
        assert!(pose.iris_offset().is_none());

        pose.sphere.y = PI / 4.0;
        let [x, y] = pose.iris_offset().unwrap();
        assert!(x > 0.0);
        assert!(close(y, 0.0));
    }

    #[test]
    fn camera_projects_origin_to_center() {
        assert_eq!(CAMERA.project([0.0, 0.0, 0.0]), Some([0.0, 0.0]));
        assert!(CAMERA.project([0.0, 0.0, 9.0]).is_none());

        let edge = CAMERA.project([1.0, 0.0, 0.0]).unwrap();
        assert!(close(edge[0], CAMERA.scale_at_origin(1.0)));
    }

    #[test]
    fn lights_in_front_of_camera_project() {
        for light in POINT_LIGHTS {
            assert!(CAMERA.project(light.position).is_some());
        }
    }
}
