use crate::math::{Ray, Vec3, PI};

/// Pinhole camera at a fixed origin, looking down −z. The image plane is
/// centered on the image center, with its distance derived from the
/// vertical field of view.
#[derive(Copy, Clone, Debug)]
pub struct PinholeCamera {
    pub origin: Vec3,
    fov: f32,
}

impl PinholeCamera {
    /// `vertical_fov` should be given in degrees, since it is converted to
    /// radians here.
    pub fn new(look_from: Vec3, vertical_fov: f32) -> Self {
        PinholeCamera {
            origin: look_from,
            fov: vertical_fov * PI / 180.0,
        }
    }

    pub const fn from_radians(look_from: Vec3, fov: f32) -> Self {
        PinholeCamera {
            origin: look_from,
            fov,
        }
    }

    /// Ray through the center of pixel (x, y) on a width×height image.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let dir_x = (x as f32 + 0.5) - width as f32 / 2.0;
        let dir_y = -(y as f32 + 0.5) + height as f32 / 2.0;
        let dir_z = -(height as f32) / (2.0 * (self.fov / 2.0).tan());
        Ray::new(self.origin, Vec3::new(dir_x, dir_y, dir_z).normalized())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_ray_points_forward() {
        let camera = PinholeCamera::from_radians(Vec3::new(0.0, 0.0, 3.0), PI / 3.0);
        // on an even-sized image the center straddles four pixels; any of
        // them should produce a direction dominated by -z
        let r = camera.get_ray(320, 240, 640, 480);
        assert!(r.direction.z < -0.99);
        assert!((r.direction.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degrees_conversion_matches_radians() {
        let a = PinholeCamera::new(Vec3::ZERO, 60.0);
        let b = PinholeCamera::from_radians(Vec3::ZERO, PI / 3.0);
        let ra = a.get_ray(10, 20, 640, 480);
        let rb = b.get_ray(10, 20, 640, 480);
        assert!((ra.direction - rb.direction).norm() < 1e-6);
    }
}
