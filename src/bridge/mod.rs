// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The bridge is the sole file-facing boundary of the visual-codec library. It
// encapsulates the pure `pipeline` engine behind two operations that mirror
// each other exactly:
//
//   serialize_to_video:
//     payload file -> encode_payload -> frame layout -> GIF frame store
//                                    -> key artifact
//                                    -> metadata document
//
//   deserialize_from_video:
//     GIF frame store + key artifact + metadata -> decode_payload -> payload file
//
// Policy decisions live here and nowhere lower: artifact naming, the
// requirement that the output directory already exists (no implicit
// directory creation), and the sanitization of the restored file name.
// Nothing in this module or below it logs; integrity findings are returned
// to the caller.
// ====================================================================================

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::artifact::keyfile;
use crate::artifact::metadata::{Metadata, METADATA_FORMAT_VERSION};
use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::frame;
use crate::frame::gifio::{GifFrameReader, GifFrameWriter};
use crate::pipeline::orchestrator::{self, IntegrityWarning};


//==================================================================================
// Public Structs
//==================================================================================

/// The artifact paths a serialization run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeArtifacts {
    pub video_path: PathBuf,
    pub key_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// The restored payload path plus any non-fatal integrity findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializeArtifacts {
    pub data_path: PathBuf,
    pub warnings: Vec<IntegrityWarning>,
}

//==================================================================================
// Public API
//==================================================================================

/// Serializes a payload file into a frame-grid video plus its key and
/// metadata sidecars, all written into `output_dir`.
pub fn serialize_to_video(
    input_path: &Path,
    output_dir: &Path,
    config: &CodecConfig,
) -> Result<SerializeArtifacts, CodecError> {
    config.validate()?;
    ensure_output_dir(output_dir)?;
    let source_name = utf8_file_name(input_path)?;
    let stem = utf8_file_stem(input_path)?;

    let data = fs::read(input_path)?;
    let encoded = orchestrator::encode_payload(&data, config)?;

    let video_path = output_dir.join(format!("{stem}.gif"));
    let mut sink = GifFrameWriter::new(
        BufWriter::new(File::create(&video_path)?),
        config.frame_width,
        config.frame_height,
        config.fps,
    )?;
    let frame_pad = frame::write_frames(&encoded.pixels, config.frame_size(), &mut sink)?;
    sink.finish()?;

    let key_path = output_dir.join(format!("{stem}.key"));
    keyfile::write_key(&encoded.key, &mut File::create(&key_path)?)?;

    let metadata = Metadata {
        format_version: METADATA_FORMAT_VERSION,
        source_name,
        exp_factor: config.exp_factor,
        chunk_bits: config.chunk_bits,
        zero_pad: encoded.pads.zeros,
        one_pad: encoded.pads.ones,
        frame_pad,
        grouped_bits: encoded.grouped_bits,
        payload_len: encoded.payload_len,
    };
    let metadata_path = output_dir.join(format!("{stem}_metadata.json"));
    let mut metadata_writer = BufWriter::new(File::create(&metadata_path)?);
    metadata.to_writer(&mut metadata_writer)?;
    metadata_writer.flush()?;

    Ok(SerializeArtifacts {
        video_path,
        key_path,
        metadata_path,
    })
}

/// Restores the original payload from a frame-grid video plus its key and
/// metadata sidecars, writing it into `output_dir` under its recorded name.
pub fn deserialize_from_video(
    video_path: &Path,
    key_path: &Path,
    metadata_path: &Path,
    output_dir: &Path,
) -> Result<DeserializeArtifacts, CodecError> {
    ensure_output_dir(output_dir)?;

    let metadata = Metadata::from_reader(BufReader::new(File::open(metadata_path)?))?;
    let key = keyfile::read_key(&mut BufReader::new(File::open(key_path)?))?;

    let mut source = GifFrameReader::new(BufReader::new(File::open(video_path)?))?;
    let pixels = frame::read_frames(&mut source, metadata.frame_pad)?;

    let decoded = orchestrator::decode_payload(&pixels, &key, &metadata)?;

    let data_path = output_dir.join(restored_file_name(&metadata, video_path));
    fs::write(&data_path, &decoded.data)?;

    Ok(DeserializeArtifacts {
        data_path,
        warnings: decoded.warnings,
    })
}

//==================================================================================
// Private Helpers
//==================================================================================

fn ensure_output_dir(dir: &Path) -> Result<(), CodecError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(CodecError::InvalidArgument(format!(
            "output directory {} does not exist",
            dir.display()
        )))
    }
}

fn utf8_file_name(path: &Path) -> Result<String, CodecError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            CodecError::InvalidArgument(format!(
                "input path {} has no usable file name",
                path.display()
            ))
        })
}

fn utf8_file_stem(path: &Path) -> Result<String, CodecError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            CodecError::InvalidArgument(format!(
                "input path {} has no usable file name",
                path.display()
            ))
        })
}

/// Only the bare file name recorded in the metadata is honored; anything
/// path-like in it is discarded, and an unusable name falls back to the
/// video's stem.
fn restored_file_name(metadata: &Metadata, video_path: &Path) -> String {
    Path::new(&metadata.source_name)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| {
            let stem = video_path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("restored");
            format!("{stem}.bin")
        })
}
