//! The signed distance field: a sphere with its surface displaced by
//! fractal noise, plus a finite-difference normal estimator.

use serde::Deserialize;

use crate::math::Vec3;
use crate::noise::fbm;

/// How often the displacement noise repeats across the sphere surface.
const NOISE_FREQUENCY: f32 = 3.4;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FieldSettings {
    pub radius: f32,
    pub amplitude: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            radius: 1.5,
            amplitude: 1.0,
        }
    }
}

/// Distance-ish value for the displaced sphere: positive outside, negative
/// inside, zero on the perturbed surface. The displacement breaks the exact
/// distance property, which is why the marcher under-relaxes its steps.
pub fn signed_distance(p: Vec3, settings: &FieldSettings) -> f32 {
    let displacement = -fbm(p * NOISE_FREQUENCY) * settings.amplitude;
    p.norm() - (settings.radius + displacement)
}

/// Field gradient by forward differences, normalized. First-order accurate
/// only, with a coarse epsilon.
pub fn normal(pos: Vec3, settings: &FieldSettings) -> Vec3 {
    const EPS: f32 = 0.1;
    let d = signed_distance(pos, settings);
    let nx = signed_distance(pos + Vec3::X * EPS, settings) - d;
    let ny = signed_distance(pos + Vec3::Y * EPS, settings) - d;
    let nz = signed_distance(pos + Vec3::Z * EPS, settings) - d;
    Vec3::new(nx, ny, nz).normalized()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_origin_is_inside() {
        let settings = FieldSettings::default();
        assert!(signed_distance(Vec3::ZERO, &settings) < 0.0);
    }

    #[test]
    fn test_far_point_is_outside() {
        let settings = FieldSettings::default();
        assert!(signed_distance(Vec3::new(0.0, 0.0, 100.0), &settings) > 0.0);
    }

    #[test]
    fn test_plain_sphere_normal() {
        // with the displacement turned off the field is an exact sphere
        let settings = FieldSettings {
            radius: 1.5,
            amplitude: 0.0,
        };
        // forward differences bias the off-axis components by O(eps), so
        // only expect the normal to point mostly along +x
        let n = normal(Vec3::new(2.0, 0.0, 0.0), &settings);
        assert!(n.x > 0.99);
        assert!(n.y.abs() < 0.05);
        assert!(n.z.abs() < 0.05);
    }

    #[test]
    fn test_normal_is_unit_length() {
        let settings = FieldSettings::default();
        let n = normal(Vec3::new(1.2, 0.4, -0.9), &settings);
        assert!((n.norm() - 1.0).abs() < 1e-5);
    }
}
