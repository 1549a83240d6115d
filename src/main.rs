use std::error::Error;
use std::fs::File;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use image::RgbImage;
use log::{info, LevelFilter};
use serde::Deserialize;

use albedo::{Camera, Group, Props, Scene};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "albedo")]
#[command(about = "Render a scene document to a PNG with the albedo ray caster")]
struct Args {
    /// Scene document to render
    #[arg(short, long, default_value = "scene.json")]
    scene: String,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: String,

    /// Logging verbosity
    #[arg(long, default_value = "info")]
    debug_level: LogLevel,
}

/// On-disk scene document: the camera's property map plus the grouped
/// entries the editor exports.
#[derive(Debug, Deserialize)]
struct SceneDoc {
    camera: Props,
    scene: Vec<Group>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    let file = File::open(&args.scene)?;
    let doc: SceneDoc = serde_json::from_reader(file)?;

    let camera = Camera::from_props(&doc.camera)?;
    let scene = Scene::assemble(&doc.scene)?;
    info!(
        "assembled {} objects and {} lights from {}",
        scene.objects().len(),
        scene.lights().len(),
        args.scene
    );

    let started = Instant::now();
    let picture = scene.render(&camera);
    info!("rendered in {:.3?}", started.elapsed());

    let (width, height) = (picture.width(), picture.height());
    let image = RgbImage::from_raw(width, height, picture.into_bytes())
        .ok_or("pixel buffer does not match image dimensions")?;
    image.save(&args.output)?;
    info!("wrote {}", args.output);

    Ok(())
}
