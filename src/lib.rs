#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Slice fixed-grid sprite sheets into one PNG file per frame. Use it as a step
in your asset pipeline when an artist delivers an animation as a single packed
image but your engine wants individual frames.

Frames are read in row-major order from a grid of equally sized cells. Frame
`i` of a sheet with `R` frames per row comes from column `i % R` and row
`i / R`. Each frame is written as `<prefix>_<i>.png`, and the last frame is
written once more under the next index so the animation holds on it for an
extra step.

# Basic Usage

## Slice a file

Build a [SliceConfig] and call [slice]:

```no_run
use spriteslice::SliceConfig;

let config = SliceConfig::default()
    .input("assets/explosion.png")
    .output_dir("assets/explosion_frames")
    .frame_size(96, 96)
    .frame_count(6);
let report = spriteslice::slice(&config).unwrap();
assert_eq!(report.written.len(), 7);
```

## Slice an image in memory

If the sheet is already decoded, wrap it in a [SpriteSheet] and use
[slice_sheet]:

```
use image::{DynamicImage, Rgba, RgbaImage};
use spriteslice::{slice_sheet, SliceConfig, SpriteSheet};
# let dir = tempfile::tempdir().unwrap();

let sheet = SpriteSheet::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
    64, 16, Rgba([255, 0, 0, 255]),
)));
let config = SliceConfig::default()
    .output_dir(dir.path())
    .frame_size(16, 16)
    .frame_count(4);
let report = slice_sheet(&sheet, &config).unwrap();
assert_eq!(report.frames_per_row, 4);
```

## Geometry

Use [SheetLayout] to inspect where frames come from without writing anything.
A layout in which no frame fits across the sheet, or whose rows run past the
bottom edge, is rejected with [SliceError::InvalidGeometry].

```
use spriteslice::SheetLayout;

let layout = SheetLayout::new((576, 96), (96, 96), 6).unwrap();
assert_eq!(layout.frames_per_row(), 6);
assert_eq!(layout.frame_rect(5).left, 480);
```

Progress is reported through the [log](https://docs.rs/log) crate.

*/

pub mod config;
pub(crate) mod error;
pub(crate) mod layout;
pub(crate) mod sheet;
pub(crate) mod slicer;

/// A specialized `Result` type for slicing functions.
pub type Result<T> = std::result::Result<T, SliceError>;

pub use config::SliceConfig;
pub use error::SliceError;
pub use layout::{FrameRect, SheetLayout};
pub use sheet::SpriteSheet;
pub use slicer::{slice, slice_sheet, SliceReport};
