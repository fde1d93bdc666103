//! `vcc`, the visual-codec command-line (de)serializer.
//!
//! All codec behavior lives in the library; this binary only parses
//! arguments, owns the logging policy, and reports what the bridge did.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use visual_codec::bridge;
use visual_codec::config::CodecConfig;
use visual_codec::error::CodecError;

#[derive(Parser)]
#[command(name = "vcc", version, about = "visual-codec frame-grid (de)serializer")]
struct Cli {
    /// Output directory for every artifact this run produces.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Create the output directory if it is missing.
    #[arg(long)]
    create_output: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serialize a payload file into a frame-grid video plus key and metadata.
    Serialize {
        /// File to convert.
        file: PathBuf,

        /// Frame size in pixels for the output video, e.g. 352x240.
        #[arg(short, long, default_value = "352x240", value_parser = parse_resolution)]
        resolution: (u16, u16),

        /// Bit-replication factor for redundancy coding.
        #[arg(short, long, default_value_t = 1)]
        exp_factor: usize,

        /// How many bits each pixel run unit occupies; 1 or a multiple of 8.
        #[arg(short, long, default_value_t = 8)]
        chunk_bits: usize,

        /// Playback rate of the generated video.
        #[arg(long, default_value_t = 1)]
        fps: u16,
    },
    /// Restore the original payload from a video plus its key and metadata.
    Deserialize {
        /// Video file to restore data from.
        video: PathBuf,

        /// Key artifact produced by the matching serialize run.
        #[arg(short, long)]
        key: PathBuf,

        /// Metadata document produced by the matching serialize run.
        #[arg(short, long)]
        metadata: PathBuf,
    },
}

fn parse_resolution(value: &str) -> Result<(u16, u16), String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| "expected WIDTHxHEIGHT, e.g. 352x240".to_string())?;
    let width = width
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("bad frame width: {e}"))?;
    let height = height
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("bad frame height: {e}"))?;
    Ok((width, height))
}

fn run(cli: Cli) -> Result<(), CodecError> {
    if !cli.output.is_dir() {
        if cli.create_output {
            log::info!("creating missing output directory: {}", cli.output.display());
            std::fs::create_dir_all(&cli.output)?;
        } else {
            return Err(CodecError::InvalidArgument(format!(
                "output directory {} does not exist (pass --create-output to create it)",
                cli.output.display()
            )));
        }
    }

    match cli.command {
        Command::Serialize {
            file,
            resolution,
            exp_factor,
            chunk_bits,
            fps,
        } => {
            let config = CodecConfig {
                exp_factor,
                chunk_bits,
                frame_width: resolution.0,
                frame_height: resolution.1,
                fps,
            };
            if exp_factor > 1 {
                log::info!("applying bit expansion of {exp_factor}");
            }
            let artifacts = bridge::serialize_to_video(&file, &cli.output, &config)?;
            log::info!("key saved into: {}", artifacts.key_path.display());
            log::info!("saved video file into: {}", artifacts.video_path.display());
            log::info!(
                "saved metadata json file into: {}",
                artifacts.metadata_path.display()
            );
        }
        Command::Deserialize {
            video,
            key,
            metadata,
        } => {
            let restored = bridge::deserialize_from_video(&video, &key, &metadata, &cli.output)?;
            for warning in &restored.warnings {
                log::warn!("{warning}");
            }
            log::info!("file saved into: {}", restored.data_path.display());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
