//! GIF-backed frame store.
//!
//! Each payload byte becomes one pixel, indexed into a 256-entry greyscale
//! palette where index `i` maps to intensity `(i, i, i)`, so the index
//! stream read back with indexed color output is exactly the byte stream
//! that was written.

use std::borrow::Cow;
use std::io::{Read, Write};

use gif::{ColorOutput, DecodeOptions, Decoder, Encoder, Frame};

use crate::error::CodecError;

use super::{FrameSink, FrameSource};

fn greyscale_palette() -> Vec<u8> {
    (0..=255u8).flat_map(|level| [level, level, level]).collect()
}

//==================================================================================
// Writer
//==================================================================================

pub struct GifFrameWriter<W: Write> {
    encoder: Encoder<W>,
    width: u16,
    height: u16,
    delay: u16,
}

impl<W: Write> GifFrameWriter<W> {
    pub fn new(writer: W, width: u16, height: u16, fps: u16) -> Result<Self, CodecError> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidArgument(format!(
                "frame dimensions must be nonzero, got {width}x{height}"
            )));
        }
        if fps == 0 {
            return Err(CodecError::InvalidArgument(
                "fps must be at least 1".to_string(),
            ));
        }

        let palette = greyscale_palette();
        let encoder = Encoder::new(writer, width, height, &palette)
            .map_err(|e| CodecError::FrameError(e.to_string()))?;
        // GIF delays are expressed in centiseconds.
        let delay = (100 / fps).max(1);
        Ok(Self {
            encoder,
            width,
            height,
            delay,
        })
    }

    /// Writes the trailer and flushes the underlying writer.
    pub fn finish(self) -> Result<(), CodecError> {
        let mut writer = self.encoder.into_inner()?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameSink for GifFrameWriter<W> {
    fn write_frame(&mut self, pixels: &[u8]) -> Result<(), CodecError> {
        let expected = usize::from(self.width) * usize::from(self.height);
        if pixels.len() != expected {
            return Err(CodecError::FrameError(format!(
                "frame has {} pixels, expected {}x{} = {expected}",
                pixels.len(),
                self.width,
                self.height
            )));
        }

        let mut frame = Frame::default();
        frame.width = self.width;
        frame.height = self.height;
        frame.delay = self.delay;
        frame.buffer = Cow::Borrowed(pixels);
        self.encoder
            .write_frame(&frame)
            .map_err(|e| CodecError::FrameError(e.to_string()))
    }
}

//==================================================================================
// Reader
//==================================================================================

pub struct GifFrameReader<R: Read> {
    decoder: Decoder<R>,
}

impl<R: Read> GifFrameReader<R> {
    pub fn new(reader: R) -> Result<Self, CodecError> {
        let mut options = DecodeOptions::new();
        // Indexed output hands back the palette indices, i.e. our bytes.
        options.set_color_output(ColorOutput::Indexed);
        let decoder = options
            .read_info(reader)
            .map_err(|e| CodecError::FrameError(e.to_string()))?;
        Ok(Self { decoder })
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.decoder.width(), self.decoder.height())
    }
}

impl<R: Read> FrameSource for GifFrameReader<R> {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CodecError> {
        let frame = self
            .decoder
            .read_next_frame()
            .map_err(|e| CodecError::FrameError(e.to_string()))?;
        Ok(frame.map(|f| f.buffer.to_vec()))
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_gif_store_roundtrip() {
        let frames: Vec<Vec<u8>> = vec![
            (0..8).collect(),
            (248..=255).collect(),
            vec![0, 255, 0, 255, 128, 128, 7, 200],
        ];

        let mut buf = Vec::new();
        let mut writer = GifFrameWriter::new(&mut buf, 4, 2, 1).unwrap();
        for frame in &frames {
            writer.write_frame(frame).unwrap();
        }
        writer.finish().unwrap();

        let mut reader = GifFrameReader::new(Cursor::new(buf)).unwrap();
        assert_eq!(reader.dimensions(), (4, 2));
        for frame in &frames {
            assert_eq!(reader.next_frame().unwrap().as_deref(), Some(&frame[..]));
        }
        assert!(reader.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_wrong_frame_size_rejected() {
        let mut buf = Vec::new();
        let mut writer = GifFrameWriter::new(&mut buf, 4, 2, 1).unwrap();
        let result = writer.write_frame(&[1, 2, 3]);
        assert!(matches!(result, Err(CodecError::FrameError(_))));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut buf = Vec::new();
        assert!(matches!(
            GifFrameWriter::new(&mut buf, 4, 2, 0),
            Err(CodecError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_garbage_input_rejected() {
        let result = GifFrameReader::new(Cursor::new(vec![1u8, 2, 3, 4]));
        assert!(matches!(result, Err(CodecError::FrameError(_))));
    }
}
