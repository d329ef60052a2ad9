#[macro_use]
extern crate log;

use std::fs::File;
use std::time::Instant;

use anyhow::{ensure, Context};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use structopt::StructOpt;

use fireball::camera::PinholeCamera;
use fireball::config::{get_settings, Config, RendererType};
use fireball::math::Vec3;
use fireball::renderer::render_framebuffer;
use fireball::tonemap::film_to_rgb8;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config: String,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
}

fn write_png(pixels: &[u8], width: usize, height: usize, filename: &str) -> anyhow::Result<String> {
    std::fs::create_dir_all("output")?;
    let png_filename = format!("output/{}.png", filename);
    let mut img: image::RgbImage = image::ImageBuffer::new(width as u32, height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let pixel_index = (y as usize * width + x as usize) * 3;
        *pixel = image::Rgb([
            pixels[pixel_index],
            pixels[pixel_index + 1],
            pixels[pixel_index + 2],
        ]);
    }
    img.save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename))?;
    Ok(png_filename)
}

fn main() -> anyhow::Result<()> {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            simplelog::Config::default(),
            File::create("main.log")?,
        ),
    ])?;

    let opt = Opt::from_args();

    let mut config: Config = get_settings(&opt.config)?;

    // command line overrides applied onto the parsed config
    if let Some(width) = opt.width {
        config.render_settings.resolution.width = width;
    }
    if let Some(height) = opt.height {
        config.render_settings.resolution.height = height;
    }
    config.render_settings.filename = opt.output.or(config.render_settings.filename);

    let (width, height) = (
        config.render_settings.resolution.width,
        config.render_settings.resolution.height,
    );
    ensure!(
        width > 0 && height > 0,
        "invalid parameters: resolution {}x{}",
        width,
        height
    );

    let threads = config.render_settings.threads.unwrap_or(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;

    let camera = PinholeCamera::new(Vec3::from(config.camera.look_from), config.camera.vfov);

    info!("starting render with film resolution {}x{}", width, height);
    info!(
        "field radius {}, displacement amplitude {}, {} threads",
        config.field.radius, config.field.amplitude, threads
    );

    if opt.dry_run {
        return Ok(());
    }

    let now = Instant::now();
    let film = render_framebuffer(&camera, &config.field, width, height);
    let pixels = film_to_rgb8(&film);
    info!(
        "took {}s to render and encode",
        (now.elapsed().as_millis() as f32) / 1000.0
    );

    let filename = config
        .render_settings
        .filename
        .unwrap_or_else(|| String::from("fireball"));
    let png_filename = write_png(&pixels, width, height, &filename)?;
    info!("wrote {}", png_filename);

    match config.renderer {
        RendererType::Naive => {}
        RendererType::Preview => {
            #[cfg(feature = "preview")]
            fireball::window_loop("fireball", width, height, &pixels);
            #[cfg(not(feature = "preview"))]
            warn!("config requests a preview window but the preview feature is not enabled");
        }
    }

    Ok(())
}
