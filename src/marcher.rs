use crate::field::{signed_distance, FieldSettings};
use crate::math::{Ray, Vec3};

/// Outcome of marching a single ray. A miss is an ordinary result, not an
/// error; rays that point away from the object or diverge end up here once
/// the step budget runs out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    Hit(Vec3),
    Miss,
}

const MAX_STEPS: usize = 128;

/// Sphere tracing against the displaced-sphere field. The displacement
/// means the field value is not a true distance bound, so each step takes
/// only a tenth of it, with a small floor to keep making progress where the
/// field flattens out.
pub fn sphere_trace(r: Ray, settings: &FieldSettings) -> MarchResult {
    let mut pos = r.origin;
    for _ in 0..MAX_STEPS {
        let d = signed_distance(pos, settings);
        if d < 0.0 {
            return MarchResult::Hit(pos);
        }
        pos = pos + r.direction * (d * 0.1).max(0.01);
    }
    MarchResult::Miss
}
