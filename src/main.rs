// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Radial image carousel

USAGE:
  iced_carousel [OPTIONS] [IMAGE...]

OPTIONS:
  --config-dir DIR     Read settings.toml from DIR
  --dir DIR            Show every supported image in DIR
  --auto-rotate SECS   Advance automatically every SECS seconds (0 disables)
  -h, --help           Print this help

KEYS:
  Left / Right         Rotate the carousel
  Escape               Quit
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let directory: Option<PathBuf> = args.opt_value_from_str("--dir")?;
    let auto_rotate: Option<String> = args.opt_value_from_str("--auto-rotate")?;

    let auto_rotate_secs = auto_rotate.and_then(|value| match value.parse::<f32>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Some(secs),
        _ => {
            tracing::warn!(value = %value, "ignoring invalid --auto-rotate value");
            None
        }
    });

    let images = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect();

    Ok(Some(Flags {
        config_dir,
        directory,
        auto_rotate_secs,
        images,
    }))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wgpu_core=warn,wgpu_hal=warn,naga=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        images = flags.images.len(),
        directory = ?flags.directory,
        "starting carousel"
    );
    app::run(flags)
}
