use crate::math::Vec3;
use crate::renderer::Film;

/// Encode a linear-color framebuffer as interleaved 8-bit RGB, row-major.
/// Each channel is scaled by 255 and clamped; out-of-range colors are
/// clamped rather than rejected, so this can't fail. Purely elementwise,
/// no cross-pixel state.
pub fn film_to_rgb8(film: &Film<Vec3>) -> Vec<u8> {
    let mut pixels = vec![0u8; film.total_pixels() * 3];
    for y in 0..film.height {
        for x in 0..film.width {
            let color = film.at(x, y);
            let pixel_index = (y * film.width + x) * 3;
            pixels[pixel_index] = (color.x * 255.0).clamp(0.0, 255.0) as u8;
            pixels[pixel_index + 1] = (color.y * 255.0).clamp(0.0, 255.0) as u8;
            pixels[pixel_index + 2] = (color.z * 255.0).clamp(0.0, 255.0) as u8;
        }
    }
    pixels
}
