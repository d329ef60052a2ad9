//! Value noise over the unit lattice and the fractal sum built on top of it.
//! Everything in here is seed-free and deterministic: the same input point
//! always produces the same value, across calls and across threads.

use crate::math::{lerp, Vec3};

/// Cheap scalar hash into roughly [0, 1). Not of cryptographic quality and
/// not meant to be; it only has to decorrelate neighboring lattice indices.
#[inline(always)]
pub fn hash(n: f32) -> f32 {
    let s = n.sin() * 43758.5453;
    s - s.floor()
}

/// 3D value noise: hashes the 8 corners of the lattice cell containing `x`
/// and interpolates trilinearly. Lattice indices are flattened with the
/// basis (1, 57, 113), so a +1 step along y is +57 in index space and a +1
/// step along z is +113.
///
/// The interpolation weight is one shared scalar, `dot(f, (3,3,3) - 2f)`,
/// applied to all three axes at once instead of a per-axis smoothstep.
/// Changing this to the textbook per-axis curve alters the look of every
/// surface built on it, so it stays as is.
#[inline]
pub fn noise(x: Vec3) -> f32 {
    let p = x.floor();
    let mut f = x - p;
    let w = f * (Vec3::new(3.0, 3.0, 3.0) - f * 2.0);
    f = f * w;
    let n = p * Vec3::new(1.0, 57.0, 113.0);
    lerp(
        lerp(
            lerp(hash(n + 0.0), hash(n + 1.0), f.x),
            lerp(hash(n + 57.0), hash(n + 58.0), f.x),
            f.y,
        ),
        lerp(
            lerp(hash(n + 113.0), hash(n + 114.0), f.x),
            lerp(hash(n + 170.0), hash(n + 171.0), f.x),
            f.y,
        ),
        f.z,
    )
}

#[inline(always)]
fn rotate(v: Vec3) -> Vec3 {
    Vec3::new(
        Vec3::new(0.00, 0.80, 0.60) * v,
        Vec3::new(-0.80, 0.36, -0.48) * v,
        Vec3::new(-0.60, -0.48, 0.64) * v,
    )
}

/// Four octaves of value noise under a fixed rotation. The inter-octave
/// rescalings (2.32, 3.03, 2.61) are deliberately non-integer so repeated
/// octaves don't line up on the same lattice and alias. The final division
/// by 0.9375 renormalizes the summed weights 0.5 + 0.25 + 0.125 + 0.0625.
#[inline]
pub fn fbm(x: Vec3) -> f32 {
    let mut p = rotate(x);
    let mut f = 0.0;
    f += 0.5000 * noise(p);
    p = p * 2.32;
    f += 0.2500 * noise(p);
    p = p * 3.03;
    f += 0.1250 * noise(p);
    p = p * 2.61;
    f += 0.0625 * noise(p);
    f / 0.9375
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hash_range() {
        for i in 0..1000 {
            let h = hash(i as f32 * 0.73 - 250.0);
            assert!((0.0..1.0).contains(&h), "hash escaped [0,1): {}", h);
        }
    }

    #[test]
    fn test_noise_deterministic() {
        let p = Vec3::new(1.37, -2.04, 0.55);
        let first = noise(p);
        for _ in 0..10 {
            assert_eq!(noise(p), first);
        }
    }

    #[test]
    fn test_noise_varies_across_space() {
        let samples: Vec<f32> = (0..8)
            .map(|i| noise(Vec3::new(0.37 + 1.9 * i as f32, -0.11 * i as f32, 2.3)))
            .collect();
        let distinct = samples
            .iter()
            .filter(|&&s| (s - samples[0]).abs() > 1e-6)
            .count();
        assert!(distinct > 0, "noise is constant across sample points");
    }

    #[test]
    fn test_fbm_deterministic_and_finite() {
        let p = Vec3::new(0.9, 4.2, -1.1);
        let first = fbm(p);
        assert!(first.is_finite());
        assert_eq!(fbm(p), first);
    }
}
