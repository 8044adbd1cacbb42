//! Writing of PNG files
//!
//! In-memory rows run top to bottom in the order the rasterizer writes
//! them, while the display side reads them bottom-up. Rows are therefore
//! flipped on the way out unless [`ExportOptions::flip_vertical`] is off.
//!
//! See <https://en.wikipedia.org/wiki/Portable_Network_Graphics>

use std::path::Path;

use image::{ColorType, ImageFormat};
use log::{error, info};

use crate::error::Result;
use crate::PixelData;

/// Bytes per exported pixel (RGBA, 8 bits each)
pub const CHANNELS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write the last row first
    pub flip_vertical: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { flip_vertical: true }
    }
}

/// RGBA8 rows of `src`, `width * CHANNELS` bytes each, stride padding dropped
pub fn rgba_rows<D: PixelData + ?Sized>(src: &D, flip_vertical: bool) -> Vec<u8> {
    let (w, h, stride) = (src.width(), src.height(), src.stride());
    let px = src.pixeldata();
    let mut out = Vec::with_capacity(w * h * CHANNELS);
    let mut push_row = |y: usize| {
        let start = y * stride;
        for p in &px[start..start + w] {
            out.extend_from_slice(&p.to_le_bytes());
        }
    };
    if flip_vertical {
        (0..h).rev().for_each(&mut push_row);
    } else {
        (0..h).for_each(&mut push_row);
    }
    out
}

/// Save the pixels of `src` to `filename` as an RGBA8 PNG
pub fn save_png<D, P>(src: &D, filename: P, opts: ExportOptions) -> Result<()>
where
    D: PixelData + ?Sized,
    P: AsRef<Path>,
{
    let filename = filename.as_ref();
    let buf = rgba_rows(src, opts.flip_vertical);
    let (w, h) = (src.width() as u32, src.height() as u32);
    image::save_buffer_with_format(filename, &buf, w, h, ColorType::Rgba8, ImageFormat::Png).map_err(|e| {
        error!("png export to {} failed: {}", filename.display(), e);
        e
    })?;
    info!("wrote {}x{} canvas to {}", w, h, filename.display());
    Ok(())
}

/// Read a PNG back as RGBA8 rows, with its width and height
pub fn read_png<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}
