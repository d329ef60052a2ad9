use std::fs::File;
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;

use crate::field::FieldSettings;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: [f32; 3],
    // degrees; converted to radians when the camera is constructed
    pub vfov: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            look_from: [0.0, 0.0, 3.0],
            vfov: 60.0,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Preview,
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Naive
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            resolution: Resolution {
                width: 640,
                height: 480,
            },
            threads: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub field: FieldSettings,
    #[serde(default)]
    pub renderer: RendererType,
    #[serde(default)]
    pub render_settings: RenderSettings,
}

pub fn get_settings(filepath: &str) -> anyhow::Result<Config> {
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath))?;
    let mut settings: Config = toml::from_str(&input)?;
    settings.render_settings.threads = match settings.render_settings.threads {
        Some(expr) => Some(expr),
        None => Some(num_cpus::get() as u16),
    };
    Ok(settings)
}
