//! The Doom fire palette
//!
//! 37 hand-tuned colors from no heat (transparent black) through dull reds
//! and oranges up to white hot. Users see these exact values.

/// Number of heat levels, one per palette entry
pub const PALETTE_LEN: usize = 37;

/// Heat of the source row
pub const MAX_INTENSITY: u8 = (PALETTE_LEN - 1) as u8;

/// Straight RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Bytes in R, G, B, A order
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

const DOOM_FIRE: [Rgba; PALETTE_LEN] = [
    Rgba::TRANSPARENT,
    Rgba::opaque(7, 7, 7),
    Rgba::opaque(31, 7, 7),
    Rgba::opaque(47, 15, 7),
    Rgba::opaque(71, 15, 7),
    Rgba::opaque(87, 23, 7),
    Rgba::opaque(103, 31, 7),
    Rgba::opaque(119, 31, 7),
    Rgba::opaque(143, 39, 7),
    Rgba::opaque(159, 47, 7),
    Rgba::opaque(175, 63, 7), // 10
    Rgba::opaque(191, 71, 7),
    Rgba::opaque(199, 71, 7),
    Rgba::opaque(223, 79, 7),
    Rgba::opaque(223, 87, 7),
    Rgba::opaque(223, 87, 7),
    Rgba::opaque(215, 95, 7),
    Rgba::opaque(215, 103, 15),
    Rgba::opaque(207, 111, 15),
    Rgba::opaque(207, 119, 15),
    Rgba::opaque(207, 127, 15), // 20
    Rgba::opaque(207, 135, 23),
    Rgba::opaque(199, 135, 23),
    Rgba::opaque(199, 143, 23),
    Rgba::opaque(199, 151, 31),
    Rgba::opaque(191, 159, 31),
    Rgba::opaque(191, 159, 31),
    Rgba::opaque(191, 167, 39),
    Rgba::opaque(191, 167, 39),
    Rgba::opaque(255, 255, 63),
    Rgba::opaque(255, 255, 111), // 30
    Rgba::opaque(255, 255, 159),
    Rgba::opaque(255, 255, 191),
    Rgba::opaque(255, 255, 223),
    Rgba::opaque(255, 255, 239),
    Rgba::opaque(255, 255, 247),
    Rgba::opaque(255, 255, 255),
];

/// Heat-to-color lookup, built once and shared read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; PALETTE_LEN],
}

impl Palette {
    /// The classic fire gradient
    ///
    /// Entry 0 is fully transparent so cold cells show whatever is behind
    /// the fire.
    pub const fn doom() -> Self {
        Self { colors: DOOM_FIRE }
    }

    /// Color for a heat level; anything above the top clamps to white
    #[inline]
    pub fn get(&self, intensity: u8) -> Rgba {
        self.colors[(intensity as usize).min(PALETTE_LEN - 1)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        PALETTE_LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::doom()
    }
}
