#[macro_use]
extern crate log;

pub mod camera;
pub mod config;
pub mod field;
pub mod marcher;
pub mod math;
pub mod noise;
pub mod renderer;
pub mod tonemap;

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Present a finished pixel buffer in a window until it is closed or
/// Escape is pressed. The buffer is a snapshot; nothing re-renders here.
#[cfg(feature = "preview")]
pub fn window_loop(title: &str, width: usize, height: usize, pixels: &[u8]) {
    use minifb::{Key, Scale, Window, WindowOptions};

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .unwrap_or_else(|e| {
        panic!("{}", e);
    });
    window.limit_update_rate(Some(std::time::Duration::from_micros(6944)));

    let buffer: Vec<u32> = pixels
        .chunks_exact(3)
        .map(|rgb| rgb_to_u32(rgb[0], rgb[1], rgb[2]))
        .collect();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, width, height).unwrap();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rgb_packing() {
        assert_eq!(rgb_to_u32(0xff, 0x00, 0x00), 0x00ff0000);
        assert_eq!(rgb_to_u32(0x12, 0x34, 0x56), 0x00123456);
    }
}
