use rand::Rng;

use crate::config::scene::{STAR_DISTANCE, STAR_POLAR_DEGREES};
use crate::scene::math::{from_spherical, mix, Vec3};

/// Where one star sits around the origin. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPlacement {
    pub distance: f64,
    pub polar: f64,
    pub azimuth: f64,
}

impl StarPlacement {
    /// Places star `index` of `count`: the azimuth is spaced evenly around
    /// the ring, distance and polar angle are drawn uniformly within bounds.
    pub fn sample<R: Rng + ?Sized>(index: usize, count: usize, rng: &mut R) -> Self {
        let (near, far) = STAR_DISTANCE;
        let (low, high) = STAR_POLAR_DEGREES;
        StarPlacement {
            distance: mix(near, far, rng.gen::<f64>()),
            polar: mix(low.to_radians(), high.to_radians(), rng.gen::<f64>()),
            azimuth: 360.0_f64.to_radians() * ring_progress(index, count),
        }
    }

    pub fn position(&self) -> Vec3 {
        from_spherical(self.distance, self.polar, self.azimuth)
    }
}

/// Fraction of the way round the ring for star `index` of `count`.
fn ring_progress(index: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        index as f64 / count as f64
    }
}

pub fn place_stars<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<StarPlacement> {
    (0..count)
        .map(|index| StarPlacement::sample(index, count, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hundred_stars_evenly_spaced() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = place_stars(100, &mut rng);
        assert_eq!(stars.len(), 100);
        assert_eq!(stars[0].azimuth, 0.0);
        let step = 3.6_f64.to_radians();
        for (i, star) in stars.iter().enumerate() {
            assert!((star.azimuth - step * i as f64).abs() < 1e-12, "star {i}");
        }
    }

    #[test]
    fn random_components_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for star in place_stars(1000, &mut rng) {
            assert!((2.0..=3.5).contains(&star.distance), "{star:?}");
            assert!(
                (80.0_f64.to_radians()..=100.0_f64.to_radians()).contains(&star.polar),
                "{star:?}"
            );
        }
    }

    #[test]
    fn position_is_at_sampled_distance() {
        let mut rng = StdRng::seed_from_u64(3);
        for star in place_stars(20, &mut rng) {
            let [x, y, z] = star.position();
            let d = (x * x + y * y + z * z).sqrt();
            assert!((d - star.distance).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_field() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(place_stars(0, &mut rng).is_empty());
    }
}
