//! Software rasterizer over a packed 32-bit pixel buffer
//!
//! How does this work
//!
//! ```text
//!    arena  = Arena::new(bytes)
//!    pixels = arena.alloc_pixels(stride * height)
//!    canvas = Canvas( arena.pixels_mut(pixels) )
//!  Canvas Operations
//!    clear()                 -- fill() per row, AVX2 when available
//!    fill_rect()
//!    draw_line()
//!      draw_line_aa()        -- Wu, two pixels per major step
//!        blend_pixel()
//!          alpha_composite()
//!      draw_line_aliased()   -- one pixel per major step
//!    fill_triangle()
//!      triangle_spans()      -- upper and lower half, one span per row
//!        fill_span()
//!  Output
//!    save_png(canvas)        -- rows flipped, stride padding dropped
//!    arena.free()
//! ```

pub mod arena;
pub mod blend;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod file;
pub mod fill;
pub mod geometry;
pub mod line;
pub mod motion;
pub mod scene;
pub mod triangle;

pub use arena::*;
pub use blend::*;
pub use canvas::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use fill::*;
pub use geometry::*;
pub use line::*;
pub use triangle::*;

pub use export::{read_png, rgba_rows, save_png, ExportOptions};
pub use file::read_entire_file;
pub use motion::{Entity, EntityMut, Initial, MotionTable, NextState, ObjectId, Sprite};
pub use scene::Scene;

/// Access to the raw pixels of a surface
///
/// Pixels are packed [`Color`] values, `stride` per row, `height` rows.
pub trait PixelData {
    fn pixeldata(&self) -> &[u32];
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;
}
