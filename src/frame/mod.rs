//! Frame-grid layout over an opaque frame store.
//!
//! The grouped pixel byte stream is sliced into fixed-size frames here; the
//! actual container is behind the `FrameSink`/`FrameSource` seam so the
//! layout logic never knows whether it is talking to a GIF file (the shipped
//! implementation in `gifio`) or anything else that can hold grids of
//! greyscale bytes.

use crate::error::CodecError;

pub mod gifio;

/// Write half of the frame store seam: accepts whole frames, in order.
pub trait FrameSink {
    fn write_frame(&mut self, pixels: &[u8]) -> Result<(), CodecError>;
}

/// Read half of the frame store seam: yields whole frames, in order, until
/// exhausted.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError>;
}

/// Slices `pixels` into `frame_size`-byte frames and pushes them to `sink`,
/// zero-filling the final partial frame.
///
/// Returns the number of fill bytes, which the decoder needs to strip them
/// again; an already-aligned stream gets no synthetic trailing frame and a
/// fill count of 0.
pub fn write_frames<S: FrameSink>(
    pixels: &[u8],
    frame_size: usize,
    sink: &mut S,
) -> Result<usize, CodecError> {
    if frame_size == 0 {
        return Err(CodecError::InvalidArgument(
            "frame size must be at least 1 pixel".to_string(),
        ));
    }

    let frame_pad = (frame_size - pixels.len() % frame_size) % frame_size;
    for chunk in pixels.chunks(frame_size) {
        if chunk.len() == frame_size {
            sink.write_frame(chunk)?;
        } else {
            let mut last = chunk.to_vec();
            last.resize(frame_size, 0);
            sink.write_frame(&last)?;
        }
    }
    Ok(frame_pad)
}

/// Concatenates every frame from `source` and strips the recorded fill
/// bytes.
pub fn read_frames<S: FrameSource>(
    source: &mut S,
    frame_pad: usize,
) -> Result<Vec<u8>, CodecError> {
    let mut pixels = Vec::new();
    while let Some(frame) = source.next_frame()? {
        pixels.extend_from_slice(&frame);
    }

    if frame_pad > pixels.len() {
        return Err(CodecError::FrameError(format!(
            "recorded frame fill of {frame_pad} bytes exceeds the {} recovered pixels",
            pixels.len()
        )));
    }
    let keep = pixels.len() - frame_pad;
    pixels.truncate(keep);
    Ok(pixels)
}

//==================================================================================
// Unit Tests
//==================================================================================
