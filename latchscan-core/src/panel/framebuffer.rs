//! Pixel and framebuffer types
//!
//! Each pixel has one bit per channel. The same 32x32 grid type is used
//! for the logical picture the scan driver reads and for the latched
//! picture the emulator produces.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::row::RowAddress;

/// Panel width in pixels
pub const PANEL_WIDTH: usize = 32;

/// Panel height in pixels
pub const PANEL_HEIGHT: usize = 32;

/// Bits shifted per logical row (R, G and B planes of 32 columns)
pub const ROW_BITS: usize = 3 * PANEL_WIDTH;

/// One pixel, one bit per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Pixel {
    pub const OFF: Pixel = Pixel::new(false, false, false);
    pub const WHITE: Pixel = Pixel::new(true, true, true);

    pub const fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    /// Channel value by plane index (0 = red, 1 = green, 2 = blue)
    ///
    /// # Panics
    /// If `plane > 2`.
    pub fn plane(self, plane: usize) -> bool {
        match plane {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("colour plane {} out of range", plane),
        }
    }

    /// Whether any channel is lit
    pub const fn is_on(self) -> bool {
        self.r || self.g || self.b
    }
}

/// The eight colours a 1-bit-per-channel pixel can show
///
/// Each colour has a single-character code used when describing pictures
/// as text: `X` is off and the rest are the colour initials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Off,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    /// Parse a colour code (`X R G B Y C M W`)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'X' => Some(Color::Off),
            b'R' => Some(Color::Red),
            b'G' => Some(Color::Green),
            b'B' => Some(Color::Blue),
            b'Y' => Some(Color::Yellow),
            b'C' => Some(Color::Cyan),
            b'M' => Some(Color::Magenta),
            b'W' => Some(Color::White),
            _ => None,
        }
    }

    /// Colour code for this colour
    pub const fn code(self) -> u8 {
        match self {
            Color::Off => b'X',
            Color::Red => b'R',
            Color::Green => b'G',
            Color::Blue => b'B',
            Color::Yellow => b'Y',
            Color::Cyan => b'C',
            Color::Magenta => b'M',
            Color::White => b'W',
        }
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Pixel {
        match color {
            Color::Off => Pixel::new(false, false, false),
            Color::Red => Pixel::new(true, false, false),
            Color::Green => Pixel::new(false, true, false),
            Color::Blue => Pixel::new(false, false, true),
            Color::Yellow => Pixel::new(true, true, false),
            Color::Cyan => Pixel::new(false, true, true),
            Color::Magenta => Pixel::new(true, false, true),
            Color::White => Pixel::new(true, true, true),
        }
    }
}

impl From<Pixel> for Color {
    fn from(pixel: Pixel) -> Color {
        match (pixel.r, pixel.g, pixel.b) {
            (false, false, false) => Color::Off,
            (true, false, false) => Color::Red,
            (false, true, false) => Color::Green,
            (false, false, true) => Color::Blue,
            (true, true, false) => Color::Yellow,
            (false, true, true) => Color::Cyan,
            (true, false, true) => Color::Magenta,
            (true, true, true) => Color::White,
        }
    }
}

/// One row of pixels
pub type PixelRow = [Pixel; PANEL_WIDTH];

/// Plane-major bitstream for one logical row
///
/// Yields 96 bits: red for columns 0..32, then green, then blue. This is
/// the order the panel expects on its data line.
pub fn row_bits(row: &PixelRow) -> impl Iterator<Item = bool> + '_ {
    (0..3).flat_map(move |plane| row.iter().map(move |px| px.plane(plane)))
}

/// 32x32 grid of 1-bit RGB pixels, indexed `[y][x]`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Framebuffer {
    rows: [PixelRow; PANEL_HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an all-off framebuffer
    pub const fn new() -> Self {
        Self {
            rows: [[Pixel::OFF; PANEL_WIDTH]; PANEL_HEIGHT],
        }
    }

    /// Create a framebuffer with every pixel set to `pixel`
    pub const fn filled(pixel: Pixel) -> Self {
        Self {
            rows: [[pixel; PANEL_WIDTH]; PANEL_HEIGHT],
        }
    }

    /// Build a framebuffer by evaluating `f(x, y)` for every pixel
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        Self {
            rows: core::array::from_fn(|y| core::array::from_fn(|x| f(x, y))),
        }
    }

    /// Pixel at column `x`, row `y`
    ///
    /// # Panics
    /// If either coordinate is 32 or more.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.rows[y][x]
    }

    /// Set the pixel at column `x`, row `y`
    ///
    /// # Panics
    /// If either coordinate is 32 or more.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.rows[y][x] = pixel;
    }

    /// One full row
    pub fn row(&self, y: usize) -> &PixelRow {
        &self.rows[y]
    }

    /// One full row, mutable
    pub fn row_mut(&mut self, y: usize) -> &mut PixelRow {
        &mut self.rows[y]
    }

    /// Set every pixel to `pixel`
    pub fn fill(&mut self, pixel: Pixel) {
        for row in &mut self.rows {
            *row = [pixel; PANEL_WIDTH];
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Pixel::OFF);
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &PixelRow> {
        self.rows.iter()
    }

    /// Copy keeping only the two physical rows of one row-pair
    ///
    /// Every pixel outside rows `pair.top()` and `pair.bottom()` is off.
    /// This is what the panel actually lights at the instant `pair` is
    /// addressed.
    pub fn row_pair_view(&self, pair: RowAddress) -> Framebuffer {
        let mut view = Framebuffer::new();
        view.rows[pair.top()] = self.rows[pair.top()];
        view.rows[pair.bottom()] = self.rows[pair.bottom()];
        view
    }

    /// Number of pixels with at least one channel lit
    pub fn lit_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|px| px.is_on())
            .count()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Framebuffer [")?;
        for row in &self.rows {
            f.write_str("  ")?;
            for px in row {
                let code = Color::from(*px).code();
                write!(f, "{}", code as char)?;
            }
            writeln!(f)?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[{} lit]", self.lit_count());
    }
}
