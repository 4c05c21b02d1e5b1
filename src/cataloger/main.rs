// This is free and unencumbered software released into the public domain.

use asimov_module::SysexitsError::{self, *};
use clap::Parser;
use clientele::StandardOptions;
use native_camera2::{
    cli,
    shared::{CameraError, list_cameras},
};
use std::error::Error as StdError;

/// Lists the cameras the NDK camera service reports.
#[derive(Debug, Parser)]
struct Options {
    #[clap(flatten)]
    flags: StandardOptions,

    #[arg(
        value_name = "FORMAT",
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text"
    )]
    output: OutputFormat,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Jsonl,
}

pub fn main() -> Result<SysexitsError, Box<dyn StdError>> {
    asimov_module::dotenv().ok();
    let args = asimov_module::args_os()?;
    let options = Options::parse_from(args);

    if options.flags.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(EX_OK);
    }

    if options.flags.license {
        print!("{}", include_str!("../../UNLICENSE"));
        return Ok(EX_OK);
    }

    #[cfg(feature = "tracing")]
    asimov_module::init_tracing_subscriber(&options.flags).expect("failed to initialize logging");

    let exit_code = match run_cataloger(&options) {
        Ok(()) => EX_OK,
        Err(err) => cli::handle_error(&err, &options.flags),
    };

    Ok(exit_code)
}

fn run_cataloger(options: &Options) -> Result<(), CameraError> {
    cli::info_user(&options.flags, "enumerating camera devices");

    let mut cameras = list_cameras()?;
    if cameras.is_empty() {
        cli::warn_user(&options.flags, "no camera devices found");
        return Ok(());
    }

    cameras.sort_by(|a, b| a.id.cmp(&b.id));

    for camera in &cameras {
        match options.output {
            OutputFormat::Text => println!("{}", cli::camera_line(camera)),
            OutputFormat::Jsonl => println!("{}", cli::camera_json(camera)),
        }
    }

    Ok(())
}
