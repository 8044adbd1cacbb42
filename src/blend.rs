//! Coverage compositing

use crate::color::Color;

/// Blend foreground over background with a fractional coverage
///
/// A coverage of 1.0 or more returns `fg` untouched. Otherwise each color
/// channel is
///
/// out = bg * (1 - coverage) + fg * coverage
///
/// truncated to an integer, and the result is fully opaque.
///
///     use softraster::{alpha_composite, Color};
///
///     let fg = Color::new(255, 0, 0, 255);
///     let bg = Color::new(0, 0, 0, 255);
///     let c = alpha_composite(fg, bg, 0.5);
///     assert_eq!(c.to_rgba(), [127, 0, 0, 255]);
///
/// see [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
pub fn alpha_composite(fg: Color, bg: Color, coverage: f64) -> Color {
    if coverage >= 1.0 {
        return fg;
    }
    let coverage = coverage.max(0.0);
    let mix = |f: u8, b: u8| (f64::from(b) * (1.0 - coverage) + f64::from(f) * coverage) as u8;
    Color::new(
        mix(fg.red8(), bg.red8()),
        mix(fg.green8(), bg.green8()),
        mix(fg.blue8(), bg.blue8()),
        255,
    )
}
