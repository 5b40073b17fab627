use crate::{Result, SliceError};

/// A pixel rectangle inside the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    /// X coordinate of the left edge.
    pub left: u32,
    /// Y coordinate of the top edge.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameRect {
    /// X coordinate one past the right edge.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Grid geometry of a sprite sheet: where each frame lives.
///
/// Frames are numbered in row-major order. Frame `i` sits in column
/// `i % frames_per_row` and row `i / frames_per_row`. A layout can only be
/// constructed if every requested frame lies fully inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    frame_width: u32,
    frame_height: u32,
    frame_count: u32,
    frames_per_row: u32,
}

impl SheetLayout {
    /// Compute the layout of `frame_count` frames of `frame_size` on a sheet
    /// of `sheet_size` (both `(width, height)`).
    ///
    /// Fails with [SliceError::InvalidGeometry] if not even one frame fits
    /// across the sheet, or if the rows needed for `frame_count` frames run
    /// past the bottom of the sheet.
    pub fn new(sheet_size: (u32, u32), frame_size: (u32, u32), frame_count: u32) -> Result<Self> {
        let (sheet_width, sheet_height) = sheet_size;
        let (frame_width, frame_height) = frame_size;

        if frame_width == 0 || frame_height == 0 {
            return Err(SliceError::InvalidGeometry(format!(
                "Frame size must be positive, got {}x{}",
                frame_width, frame_height
            )));
        }

        let frames_per_row = sheet_width / frame_width;
        if frames_per_row == 0 {
            return Err(SliceError::InvalidGeometry(format!(
                "Frame width {} exceeds sheet width {}; no frame fits in a row",
                frame_width, sheet_width
            )));
        }

        let layout = SheetLayout {
            frame_width,
            frame_height,
            frame_count,
            frames_per_row,
        };
        let needed_height = u64::from(layout.rows()) * u64::from(frame_height);
        if needed_height > u64::from(sheet_height) {
            return Err(SliceError::InvalidGeometry(format!(
                "{} frames of {}x{} need {} rows ({} px) but the sheet is only {} px high",
                frame_count,
                frame_width,
                frame_height,
                layout.rows(),
                needed_height,
                sheet_height
            )));
        }
        Ok(layout)
    }

    /// Number of whole frames that fit across the sheet.
    pub fn frames_per_row(&self) -> u32 {
        self.frames_per_row
    }

    /// Number of rows occupied by the requested frames.
    pub fn rows(&self) -> u32 {
        if self.frame_count == 0 {
            0
        } else {
            (self.frame_count - 1) / self.frames_per_row + 1
        }
    }

    /// Number of frames in the layout.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Rectangle of frame `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `frame_count`.
    pub fn frame_rect(&self, index: u32) -> FrameRect {
        assert!(index < self.frame_count);
        let col = index % self.frames_per_row;
        let row = index / self.frames_per_row;
        FrameRect {
            left: col * self.frame_width,
            top: row * self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }

    /// All frame rectangles in index order.
    pub fn rects(&self) -> impl Iterator<Item = FrameRect> + '_ {
        (0..self.frame_count).map(move |index| self.frame_rect(index))
    }
}
