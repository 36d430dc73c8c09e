use crate::config::scene::{ICOSAHEDRON_RADIUS, ICOSAHEDRON_TILT, STAR_SIZE};
use crate::scene::math::{add, length, normalize, rotate_x, scale, sub, Vec3};
use crate::scene::stars::StarPlacement;

/// A wireframe edge in world space.
pub type Segment = [Vec3; 2];

/// Edges of a regular icosahedron with the given circumradius, centred on
/// the origin.
pub fn icosahedron(radius: f64) -> Vec<Segment> {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let corners: [Vec3; 12] = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];

    // Neighbouring corners of this construction sit exactly 2 apart.
    let mut edges = Vec::with_capacity(30);
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            if (length(&sub(a, b)) - 2.0).abs() < 1e-9 {
                edges.push([
                    scale(&normalize(a), radius),
                    scale(&normalize(b), radius),
                ]);
            }
        }
    }
    edges
}

/// Edges of an axis-aligned cube with edge length `size` centred on `center`.
pub fn cube(center: &Vec3, size: f64) -> Vec<Segment> {
    let h = size / 2.0;
    let corner = |bits: usize| -> Vec3 {
        let pick = |bit: usize| if bits & bit == 0 { -h } else { h };
        add(center, &[pick(1), pick(2), pick(4)])
    };

    let mut edges = Vec::with_capacity(12);
    for bits in 0..8usize {
        for axis in [1usize, 2, 4] {
            if bits & axis == 0 {
                edges.push([corner(bits), corner(bits | axis)]);
            }
        }
    }
    edges
}

/// Everything the background scene draws, flattened to world-space edges.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGeometry {
    pub segments: Vec<Segment>,
}

impl SceneGeometry {
    pub fn build(stars: &[StarPlacement]) -> Self {
        let mut segments: Vec<Segment> = icosahedron(ICOSAHEDRON_RADIUS)
            .into_iter()
            .map(|[a, b]| [rotate_x(&a, ICOSAHEDRON_TILT), rotate_x(&b, ICOSAHEDRON_TILT)])
            .collect();

        for star in stars {
            segments.extend(cube(&star.position(), STAR_SIZE));
        }

        SceneGeometry { segments }
    }
}
