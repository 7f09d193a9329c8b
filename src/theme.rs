//! Host theme sampling and the colors derived from it.

use std::fmt;
use std::str::FromStr;

use crate::error::PreviewError;

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights).
    pub fn brightness(&self) -> f32 {
        f32::from(self.r) * 0.299 + f32::from(self.g) * 0.587 + f32::from(self.b) * 0.114
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PreviewError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Host theme colors sampled when a preview document is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThemeSnapshot {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ThemeSnapshot {
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.background.brightness() < 128.0
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::from(self)
    }
}

/// Full set of colors used by the preview stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: Rgb,
    pub text: Rgb,
    pub node_stroke: Rgb,
    pub link: Rgb,
    pub node_fill: Rgb,
    pub node_border: Rgb,
    pub table_header: Rgb,
    pub code_block_background: Rgb,
    pub code_block_border: Rgb,
    pub inline_code_background: Rgb,
}

impl From<&ThemeSnapshot> for ThemePalette {
    fn from(theme: &ThemeSnapshot) -> Self {
        let (node_stroke, link, node_fill, node_border, table_header, code_block, code_border, inline_code) =
            if theme.is_dark() {
                (0x666666, 0x555555, 0x2d2d2d, 0x555555, 0x3a3a3a, 0x1e1e1e, 0x444444, 0x2d2d2d)
            } else {
                (0x999999, 0xbbbbbb, 0xffffff, 0xdddddd, 0xf5f5f5, 0xf8f8f8, 0xe1e1e1, 0xf1f1f1)
            };

        Self {
            background: theme.background,
            text: theme.foreground,
            node_stroke: hex(node_stroke),
            link: hex(link),
            node_fill: hex(node_fill),
            node_border: hex(node_border),
            table_header: hex(table_header),
            code_block_background: hex(code_block),
            code_block_border: hex(code_border),
            inline_code_background: hex(inline_code),
        }
    }
}

const fn hex(value: u32) -> Rgb {
    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Synchronous access to the host's current theme.
///
/// Theme *changes* are delivered separately as
/// [`PreviewEvent::ThemeChanged`](crate::PreviewEvent::ThemeChanged); the
/// runtime calls [`sample`](Self::sample) whenever it builds a new document.
///
/// Closures returning a [`ThemeSnapshot`] implement this trait.
pub trait ThemeSource {
    fn sample(&self) -> ThemeSnapshot;
}

impl<F> ThemeSource for F
where
    F: Fn() -> ThemeSnapshot,
{
    fn sample(&self) -> ThemeSnapshot {
        self()
    }
}
