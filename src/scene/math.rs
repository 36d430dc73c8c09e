pub type Vec3 = [f64; 3];

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: &Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(v: &Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Normalizes `v`, returning the zero vector unchanged.
pub fn normalize(v: &Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        *v
    } else {
        scale(v, 1.0 / len)
    }
}

/// Linear interpolation from `from` to `to` by `t`.
pub fn mix(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Position for spherical coordinates around +Y: `polar` is measured from
/// +Y and `azimuth` turns from +Z towards +X.
pub fn from_spherical(distance: f64, polar: f64, azimuth: f64) -> Vec3 {
    let sin_polar = polar.sin();
    [
        distance * sin_polar * azimuth.sin(),
        distance * polar.cos(),
        distance * sin_polar * azimuth.cos(),
    ]
}

/// Rotates `v` about the X axis by `angle` radians.
pub fn rotate_x(v: &Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: &Vec3, b: &Vec3) -> bool {
        length(&sub(a, b)) < 1e-9
    }

    #[test]
    fn spherical_axes() {
        assert!(close(&from_spherical(2.0, 0.0, 0.0), &[0.0, 2.0, 0.0]));
        assert!(close(&from_spherical(1.0, FRAC_PI_2, 0.0), &[0.0, 0.0, 1.0]));
        assert!(close(&from_spherical(1.0, FRAC_PI_2, FRAC_PI_2), &[1.0, 0.0, 0.0]));
        assert!(close(&from_spherical(3.0, PI, 1.2), &[0.0, -3.0, 0.0]));
    }

    #[test]
    fn spherical_distance_is_preserved() {
        let p = from_spherical(3.25, 1.5, 4.0);
        assert!((length(&p) - 3.25).abs() < 1e-9);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        assert!(close(&rotate_x(&[0.0, 1.0, 0.0], FRAC_PI_2), &[0.0, 0.0, 1.0]));
        assert!(close(&rotate_x(&[1.0, 0.0, 0.0], 0.7), &[1.0, 0.0, 0.0]));
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert!(close(&cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), &[0.0, 0.0, 1.0]));
    }

    #[test]
    fn normalize_keeps_zero() {
        assert_eq!(normalize(&[0.0; 3]), [0.0; 3]);
        assert!((length(&normalize(&[3.0, 4.0, 0.0])) - 1.0).abs() < 1e-12);
    }
}
