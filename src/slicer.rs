use crate::{Result, SheetLayout, SliceConfig, SliceError, SpriteSheet};
use image::{png::PngEncoder, DynamicImage, GenericImageView};
use log::{debug, info};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    /// Width and height of the sheet.
    pub sheet_size: (u32, u32),
    /// Frames that fit across one row of the sheet.
    pub frames_per_row: u32,
    /// Every file written, in write order. The padding frame, if any, is last.
    pub written: Vec<PathBuf>,
}

/// Slice the sheet at `config.input` into frame files.
///
/// Creates the output directory, decodes the sheet and hands off to
/// [slice_sheet].
pub fn slice(config: &SliceConfig) -> Result<SliceReport> {
    info!("Slicing spritesheet: {}", config.input.display());
    ensure_output_dir(config)?;
    let sheet = SpriteSheet::open(&config.input)?;
    write_frames(&sheet, config)
}

/// Slice an already decoded sheet into frame files.
///
/// The whole frame layout is checked before anything is written, so a
/// geometry error writes no frame files. Any other error
/// stops the run; files written up to that point stay on disk.
pub fn slice_sheet(sheet: &SpriteSheet, config: &SliceConfig) -> Result<SliceReport> {
    ensure_output_dir(config)?;
    write_frames(sheet, config)
}

fn ensure_output_dir(config: &SliceConfig) -> Result<()> {
    let dir = &config.output_dir;
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| SliceError::IoError(dir.clone(), err))?;
    info!("Created directory: {}", dir.display());
    Ok(())
}

fn write_frames(sheet: &SpriteSheet, config: &SliceConfig) -> Result<SliceReport> {
    let (width, height) = sheet.size();
    info!("Sprite sheet dimensions: {}x{}", width, height);

    let layout = SheetLayout::new(
        sheet.size(),
        (config.frame_width, config.frame_height),
        config.frame_count,
    )?;
    info!("Frames per row: {}", layout.frames_per_row());

    let mut written = Vec::with_capacity(config.output_file_count());
    for (index, rect) in (0..).zip(layout.rects()) {
        info!(
            "Extracting frame {} from position ({},{})",
            index, rect.left, rect.top
        );
        debug!("Frame {} covers {:?} of {:?}", index, rect, sheet.color());

        let frame = sheet.frame(rect);
        let output = config.frame_path(index);
        let encoded = encode_png(&frame, &output)?;
        write_file(&output, &encoded)?;
        info!("Saved frame {} to {}", index, output.display());
        written.push(output);

        if config.pad_last_frame && index + 1 == layout.frame_count() {
            let output = config.frame_path(index + 1);
            write_file(&output, &encoded)?;
            info!("Saved duplicate of last frame as {}", output.display());
            written.push(output);
        }
    }

    info!("Finished slicing sprite sheet.");
    Ok(SliceReport {
        sheet_size: (width, height),
        frames_per_row: layout.frames_per_row(),
        written,
    })
}

// Frames are encoded once so the padding copy is byte-identical to the last
// frame.
fn encode_png(frame: &DynamicImage, output: &Path) -> Result<Vec<u8>> {
    let (width, height) = frame.dimensions();
    let samples: Cow<[u8]> = match frame {
        DynamicImage::ImageLuma16(buf) => Cow::Owned(big_endian(buf.as_raw())),
        DynamicImage::ImageLumaA16(buf) => Cow::Owned(big_endian(buf.as_raw())),
        DynamicImage::ImageRgb16(buf) => Cow::Owned(big_endian(buf.as_raw())),
        DynamicImage::ImageRgba16(buf) => Cow::Owned(big_endian(buf.as_raw())),
        other => Cow::Borrowed(other.as_bytes()),
    };
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded)
        .encode(&samples, width, height, frame.color())
        .map_err(|err| SliceError::EncodeError(output.to_owned(), err))?;
    Ok(encoded)
}

// PNG stores 16-bit samples big-endian; the encoder passes bytes through as is.
fn big_endian(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

fn write_file(output: &Path, data: &[u8]) -> Result<()> {
    fs::write(output, data).map_err(|err| SliceError::IoError(output.to_owned(), err))
}
