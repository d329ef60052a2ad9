use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::camera::PinholeCamera;
use crate::field::{normal, FieldSettings};
use crate::marcher::{sphere_trace, MarchResult};
use crate::math::{Vec3, PI};
use crate::tonemap::film_to_rgb8;

/// Row-major grid of per-pixel values, `index = x + y * width`.
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Film<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

pub const CAMERA_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 3.0);

const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 10.0);
const BACKGROUND: Vec3 = Vec3::new(0.3, 0.9, 0.2);
// lower bound on the shading term
const AMBIENT_FLOOR: f32 = 0.4;

/// Fill a linear-color framebuffer by sphere tracing one ray per pixel.
/// Every pixel owns exactly one buffer cell and reads only immutable
/// settings, so the whole pass runs as an unsynchronized parallel map.
pub fn render_framebuffer(
    camera: &PinholeCamera,
    settings: &FieldSettings,
    width: usize,
    height: usize,
) -> Film<Vec3> {
    let mut film = Film::new(width, height, Vec3::ZERO);
    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(pixel_index, pixel_ref)| {
            let y: usize = pixel_index / width;
            let x: usize = pixel_index - width * y;
            let r = camera.get_ray(x, y, width, height);
            *pixel_ref = match sphere_trace(r, settings) {
                MarchResult::Hit(hit) => {
                    let light_dir = (LIGHT_POSITION - hit).normalized();
                    let light_intensity = (light_dir * normal(hit, settings)).max(AMBIENT_FLOOR);
                    Vec3::ONE * light_intensity
                }
                MarchResult::Miss => BACKGROUND,
            };
        });
    film
}

/// The crate's outer boundary: validate the parameters once, render with
/// the default field, and hand back `width * height * 3` interleaved RGB
/// bytes. `fov` is in radians. Past validation nothing in the pipeline can
/// fail.
pub fn render(width: usize, height: usize, fov: f32) -> Result<Vec<u8>> {
    ensure!(
        width > 0 && height > 0,
        "invalid parameters: resolution {}x{}",
        width,
        height
    );
    ensure!(
        fov.is_finite() && fov > 0.0 && fov < PI,
        "invalid parameters: fov {} not in (0, pi)",
        fov
    );
    info!("starting render with film resolution {}x{}", width, height);
    let camera = PinholeCamera::from_radians(CAMERA_ORIGIN, fov);
    let film = render_framebuffer(&camera, &FieldSettings::default(), width, height);
    Ok(film_to_rgb8(&film))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_film_indexing() {
        let mut film = Film::new(4, 3, 0u8);
        film.write_at(3, 2, 7);
        assert_eq!(film.at(3, 2), 7);
        assert_eq!(film.buffer[2 * 4 + 3], 7);
        assert_eq!(film.total_pixels(), 12);
    }

    #[test]
    fn test_single_pixel_frame() {
        let camera = PinholeCamera::from_radians(CAMERA_ORIGIN, PI / 3.0);
        let film = render_framebuffer(&camera, &FieldSettings::default(), 1, 1);
        let color = film.at(0, 0);
        let shaded = color.x == color.y
            && color.y == color.z
            && (AMBIENT_FLOOR..=1.0).contains(&color.x);
        let background = color == BACKGROUND;
        assert!(
            shaded || background,
            "1x1 frame produced neither a shaded hit nor the background: {:?}",
            color
        );
    }

    #[test]
    fn test_render_rejects_bad_parameters() {
        assert!(render(0, 480, PI / 3.0).is_err());
        assert!(render(640, 0, PI / 3.0).is_err());
        assert!(render(640, 480, 0.0).is_err());
        assert!(render(640, 480, f32::NAN).is_err());
    }

    #[test]
    fn test_render_buffer_shape() {
        let pixels = render(16, 9, PI / 3.0).unwrap();
        assert_eq!(pixels.len(), 16 * 9 * 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(24, 18, PI / 3.0).unwrap();
        let b = render(24, 18, PI / 3.0).unwrap();
        assert_eq!(a, b);
    }
}
