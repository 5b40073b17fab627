use std::path::PathBuf;

/// Sheet read when no other input is configured.
pub const INPUT_PATH: &str = "src/assets/Asteroid 01 - Explode.png";
/// Directory the frames are written to when no other output is configured.
pub const OUTPUT_DIR: &str = "src/assets/asteroid_frames";
/// Width of one frame in pixels.
pub const FRAME_WIDTH: u32 = 96;
/// Height of one frame in pixels.
pub const FRAME_HEIGHT: u32 = 96;
/// Number of frames packed into the sheet.
pub const FRAME_COUNT: u32 = 6;
/// File name prefix of every written frame.
pub const FRAME_PREFIX: &str = "asteroid_frame";

/// Everything a slicing run needs to know.
///
/// `Default` yields the asteroid explosion sheet used by the game. Tests and
/// other pipelines build their own with the setters:
///
/// ```
/// use spriteslice::SliceConfig;
///
/// let config = SliceConfig::default()
///     .input("sheet.png")
///     .output_dir("frames")
///     .frame_size(32, 32)
///     .frame_count(4);
/// assert_eq!(config.frame_path(3), std::path::Path::new("frames/asteroid_frame_3.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceConfig {
    /// Path of the sprite sheet.
    pub input: PathBuf,
    /// Directory receiving the frame files. Created if missing.
    pub output_dir: PathBuf,
    /// Width of one frame in pixels.
    pub frame_width: u32,
    /// Height of one frame in pixels.
    pub frame_height: u32,
    /// Number of frames to extract, counted in row-major order.
    pub frame_count: u32,
    /// Frame files are named `<prefix>_<index>.png`.
    pub prefix: String,
    /// Write the last frame a second time under index `frame_count`, so an
    /// animation loop holds on its final frame for one extra step.
    pub pad_last_frame: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        SliceConfig {
            input: PathBuf::from(INPUT_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            frame_count: FRAME_COUNT,
            prefix: FRAME_PREFIX.to_owned(),
            pad_last_frame: true,
        }
    }
}

impl SliceConfig {
    /// Set the sprite sheet path.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set frame width and height in pixels.
    pub fn frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    /// Set the number of frames to extract.
    pub fn frame_count(mut self, count: u32) -> Self {
        self.frame_count = count;
        self
    }

    /// Set the file name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable writing the padding frame.
    pub fn pad_last_frame(mut self, pad: bool) -> Self {
        self.pad_last_frame = pad;
        self
    }

    /// Output path of the frame with the given index.
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.output_dir.join(frame_file_name(&self.prefix, index))
    }

    /// Number of files a successful run writes.
    pub fn output_file_count(&self) -> usize {
        let padding = self.pad_last_frame && self.frame_count > 0;
        self.frame_count as usize + padding as usize
    }
}

fn frame_file_name(prefix: &str, index: u32) -> String {
    format!("{}_{}.png", prefix, index)
}
