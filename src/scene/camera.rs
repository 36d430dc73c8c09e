use crate::config::scene::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POLAR, CAMERA_TIME_SCALE,
};
use crate::scene::geometry::Segment;
use crate::scene::math::{add, cross, dot, from_spherical, length, mix, normalize, scale, sub, Vec3};

/// Spherical camera position for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub distance: f64,
    pub polar: f64,
    pub azimuth: f64,
}

impl CameraPose {
    /// Pose for the given scroll progress and milliseconds since the scene
    /// started. Progress outside [0, 1] is clamped.
    pub fn at(scroll_progress: f64, elapsed_ms: f64) -> Self {
        let p = scroll_progress.clamp(0.0, 1.0);
        CameraPose {
            distance: mix(CAMERA_DISTANCE.0, CAMERA_DISTANCE.1, p),
            polar: mix(CAMERA_POLAR.0, CAMERA_POLAR.1, p),
            azimuth: elapsed_ms * CAMERA_TIME_SCALE,
        }
    }

    pub fn position(&self) -> Vec3 {
        from_spherical(self.distance, self.polar, self.azimuth)
    }
}

/// A perspective camera looking at the origin with +Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    back: Vec3,
    focal: f64,
    aspect: f64,
    near: f64,
}

impl Camera {
    pub fn new(pose: &CameraPose, aspect: f64) -> Self {
        Self::looking_at_origin(pose.position(), aspect)
    }

    pub fn looking_at_origin(eye: Vec3, aspect: f64) -> Self {
        let world_up = [0.0, 1.0, 0.0];

        let mut back = if length(&eye) == 0.0 { [0.0, 0.0, 1.0] } else { normalize(&eye) };
        let mut right = cross(&world_up, &back);
        if length(&right) == 0.0 {
            // Looking straight along the up axis: nudge off it.
            back[2] += 0.0001;
            back = normalize(&back);
            right = cross(&world_up, &back);
        }
        let right = normalize(&right);
        let up = cross(&back, &right);

        Camera {
            eye,
            right,
            up,
            back,
            focal: 1.0 / (CAMERA_FOV_DEGREES.to_radians() / 2.0).tan(),
            aspect: if aspect > 0.0 { aspect } else { 1.0 },
            near: CAMERA_NEAR,
        }
    }

    /// Converts a world-space point into camera space, where the camera looks
    /// down -Z.
    pub fn to_view(&self, point: &Vec3) -> Vec3 {
        let rel = sub(point, &self.eye);
        [dot(&rel, &self.right), dot(&rel, &self.up), dot(&rel, &self.back)]
    }

    /// Projects a camera-space point in front of the near plane to pixel
    /// coordinates on a `width` × `height` surface, origin top-left.
    pub fn to_screen(&self, view: &Vec3, width: f64, height: f64) -> (f64, f64) {
        let depth = -view[2];
        let ndc_x = self.focal / self.aspect * view[0] / depth;
        let ndc_y = self.focal * view[1] / depth;
        ((ndc_x + 1.0) / 2.0 * width, (1.0 - ndc_y) / 2.0 * height)
    }

    /// Projects a world-space edge, clipping it against the near and far
    /// planes. Returns `None` when nothing of the edge is visible in depth.
    pub fn project_segment(
        &self,
        segment: &Segment,
        width: f64,
        height: f64,
    ) -> Option<[(f64, f64); 2]> {
        let a = self.to_view(&segment[0]);
        let b = self.to_view(&segment[1]);
        let (a, b) = clip_depth(a, b, self.near, CAMERA_FAR)?;
        Some([self.to_screen(&a, width, height), self.to_screen(&b, width, height)])
    }
}

/// Clips a camera-space segment to `near <= -z <= far`.
fn clip_depth(a: Vec3, b: Vec3, near: f64, far: f64) -> Option<(Vec3, Vec3)> {
    let (a, b) = clip_against(a, b, |p| -p[2] - near)?;
    clip_against(a, b, |p| far + p[2])
}

/// Keeps the part of `a..b` where `inside(p) >= 0`.
fn clip_against(a: Vec3, b: Vec3, inside: impl Fn(&Vec3) -> f64) -> Option<(Vec3, Vec3)> {
    let da = inside(&a);
    let db = inside(&b);
    if da < 0.0 && db < 0.0 {
        return None;
    }
    if da >= 0.0 && db >= 0.0 {
        return Some((a, b));
    }
    let t = da / (da - db);
    let hit = add(&a, &scale(&sub(&b, &a), t));
    if da < 0.0 {
        Some((hit, b))
    } else {
        Some((a, hit))
    }
}
