//! Colors

/// Packed 32-bit color
///
/// The value reads `0xAABBGGRR`, so the bytes in little-endian memory are
/// red, green, blue, alpha: the channel order of an RGBA8 PNG row.
///
///     use softraster::Color;
///
///     let c = Color::new(0x18, 0x20, 0x30, 0xff);
///     assert_eq!(c.to_u32(), 0xff302018);
///     assert_eq!(c.to_rgba(), [0x18, 0x20, 0x30, 0xff]);
///
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(pub u32);

/// Default clear color
pub const DARK_GRAY: Color = Color(0xff18_1818);
pub const RED: Color = Color(0xff00_00ff);
pub const GREEN: Color = Color(0xff00_ff00);
pub const BLUE: Color = Color(0xffff_0000);

impl Color {
    /// Create a new color from its channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }
    /// White Color (255,255,255,255)
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
    /// Black Color (0,0,0,255)
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
    pub const fn from_u32(v: u32) -> Self {
        Color(v)
    }
    pub const fn to_u32(self) -> u32 {
        self.0
    }
    pub const fn red8(self) -> u8 {
        self.0 as u8
    }
    pub const fn green8(self) -> u8 {
        (self.0 >> 8) as u8
    }
    pub const fn blue8(self) -> u8 {
        (self.0 >> 16) as u8
    }
    pub const fn alpha8(self) -> u8 {
        (self.0 >> 24) as u8
    }
    /// Same color with alpha replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.red8(), self.green8(), self.blue8(), a)
    }
    /// Channels in memory order: red, green, blue, alpha
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red8(), self.green8(), self.blue8(), self.alpha8()]
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Color(v)
    }
}
impl From<Color> for u32 {
    fn from(c: Color) -> u32 {
        c.0
    }
}
impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}
