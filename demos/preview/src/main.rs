use argh::FromArgs;
use std::path::PathBuf;

use bodywarp::io::{decode, IoError};
use bodywarp::{
    render_preview_bytes, render_preview_with_table, IntensitySource, PreviewConfig,
    PreviewError, View, ZoneTable,
};

#[derive(FromArgs)]
/// Render a body warp preview of a photograph
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// camera view: front, back, side or side_alt
    #[argh(option, default = "View::Front")]
    view: View,

    /// forecast fraction in [0, 1], preferred over --months
    #[argh(option)]
    fraction: Option<f32>,

    /// investment duration in months
    #[argh(option, default = "12.0")]
    months: f32,

    /// path of the JPEG preview to write
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// path of a JSON file receiving the definition overlays
    #[argh(option)]
    overlays: Option<PathBuf>,

    /// path of a JSON pipeline configuration
    #[argh(option)]
    config: Option<PathBuf>,

    /// path of a JSON zone table replacing the built-in one
    #[argh(option)]
    zones: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => PreviewConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PreviewConfig::default(),
    };
    let intensity = IntensitySource::preferred(args.fraction, args.months).resolve();
    let bytes = std::fs::read(&args.image_path)?;

    let preview = match &args.zones {
        Some(path) => {
            let table = ZoneTable::from_json(&std::fs::read_to_string(path)?)?;
            let source = decode::decode_image_rgba8(&bytes).map_err(PreviewError::from);
            source.and_then(|source| {
                render_preview_with_table(&source, args.view, intensity, &config, &table)
            })
        }
        None => render_preview_bytes(&bytes, args.view, intensity, &config),
    };

    let preview = match preview {
        Ok(preview) => preview,
        Err(PreviewError::Io(IoError::DecodeError(e))) => {
            // show the original instead of failing
            log::warn!("cannot decode {}: {e}", args.image_path.display());
            std::fs::write(&args.output, &bytes)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} preview at p = {:.3}: {} zones, {} overlays",
        args.view,
        preview.intensity.value(),
        preview.zones.len(),
        preview.overlays.len()
    );

    std::fs::write(&args.output, preview.encode_jpeg(config.jpeg_quality)?)?;

    if let Some(path) = &args.overlays {
        std::fs::write(path, serde_json::to_string_pretty(&preview.overlays)?)?;
    }

    Ok(())
}
