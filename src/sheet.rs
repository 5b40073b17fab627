use crate::{layout::FrameRect, Result, SliceError};
use image::{io::Reader, ColorType, DynamicImage, GenericImageView};
use std::{
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::Path,
};

/// A decoded sprite sheet. Never modified after loading.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: DynamicImage,
}

impl SpriteSheet {
    /// Load a sprite sheet from disk. The image format is guessed from the
    /// file contents, not the extension.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| SliceError::IoError(path.to_owned(), err))?;
        Self::read_from(BufReader::new(file), path)
    }

    /// Load a sprite sheet from any seekable, buffered input, such as an
    /// in-memory `Cursor`.
    pub fn read<R: BufRead + Seek>(input: R) -> Result<Self> {
        Self::read_from(input, Path::new("<input>"))
    }

    fn read_from<R: BufRead + Seek>(input: R, path: &Path) -> Result<Self> {
        let image = Reader::new(input)
            .with_guessed_format()
            .map_err(|err| SliceError::IoError(path.to_owned(), err))?
            .decode()
            .map_err(|err| SliceError::decoding(path, err))?;
        Ok(SpriteSheet { image })
    }

    /// Wrap an image that is already in memory.
    pub fn from_image(image: DynamicImage) -> Self {
        SpriteSheet { image }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Color type of the decoded sheet. Every frame shares it.
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// The decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Copy the pixels under `rect` into a new image of the same color type.
    ///
    /// The backend clips rectangles at the sheet edges, so a rect reaching
    /// past them yields a smaller image. Rects from a [crate::SheetLayout]
    /// built for this sheet never do.
    pub fn frame(&self, rect: FrameRect) -> DynamicImage {
        self.image.crop_imm(rect.left, rect.top, rect.width, rect.height)
    }
}
