//! Render configuration

use std::path::PathBuf;

use crate::export::ExportOptions;
use crate::line::LineMode;

/// Settings for a rendering session
///
///     use softraster::{LineMode, RenderConfig};
///
///     let cfg = RenderConfig::default()
///         .with_size(320, 200)
///         .with_line_mode(LineMode::Aliased);
///     assert_eq!(cfg.stride(), 320);
///     assert_eq!(cfg.pixel_count(), 320 * 200);
///
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Extra pixels at the end of each row
    pub stride_padding: usize,
    /// Initial arena size in bytes
    pub arena_capacity: usize,
    pub line_mode: LineMode,
    /// Flip rows when writing the PNG
    pub flip_on_export: bool,
    pub output: PathBuf,
    /// Frames the headless driver renders before exporting
    pub frames: usize,
    /// Seconds per frame
    pub frame_dt: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 600,
            stride_padding: 0,
            arena_capacity: 10 * 1024 * 1024,
            line_mode: LineMode::AntiAliased,
            flip_on_export: true,
            output: PathBuf::from("dist/canvas.png"),
            frames: 120,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn with_stride_padding(mut self, padding: usize) -> Self {
        self.stride_padding = padding;
        self
    }
    pub fn with_arena_capacity(mut self, bytes: usize) -> Self {
        self.arena_capacity = bytes;
        self
    }
    pub fn with_line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }
    pub fn with_frames(mut self, frames: usize, frame_dt: f64) -> Self {
        self.frames = frames;
        self.frame_dt = frame_dt;
        self
    }
    /// Pixels per row
    pub fn stride(&self) -> usize {
        self.width + self.stride_padding
    }
    /// Pixels the canvas buffer must hold
    pub fn pixel_count(&self) -> usize {
        self.stride() * self.height
    }
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { flip_vertical: self.flip_on_export }
    }
}
