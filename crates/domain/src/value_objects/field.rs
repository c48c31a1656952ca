//! Field snapshots
//!
//! A field arrives as a flat string, one character per tile, in rendering
//! order. Width and height are not part of the message.

use serde::{Deserialize, Serialize};

/// Stylesheet class used for every special (non-digit) tile.
pub const SPECIAL_TILE_CLASS: &str = "tileS";

/// One decoded tile of a field snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Tile {
    /// `'0'..='9'`: a plain tile of the given colour class
    Numbered(u8),
    /// Any other character, shown with that character as its label
    Special(char),
}

impl Tile {
    /// Classify a single character. Every character maps to some tile.
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_digit() {
            Tile::Numbered(c as u8 - b'0')
        } else {
            Tile::Special(c)
        }
    }

    /// Stylesheet class: `tile0`..`tile9` or `tileS`.
    pub fn css_class(&self) -> String {
        match self {
            Tile::Numbered(n) => format!("tile{}", n),
            Tile::Special(_) => SPECIAL_TILE_CLASS.to_string(),
        }
    }

    /// Character drawn by text surfaces. Empty cells (`0`) show as `.`.
    pub fn glyph(&self) -> char {
        match self {
            Tile::Numbered(0) => '.',
            Tile::Numbered(n) => char::from(b'0' + n),
            Tile::Special(c) => *c,
        }
    }
}

/// A complete field snapshot for one slot.
///
/// Rendering a field always replaces the previous snapshot for that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(Vec<Tile>);

impl Field {
    /// Decode a field string left to right. There is no error path: any
    /// character that is not an ASCII digit becomes a special tile,
    /// whitespace and punctuation included.
    pub fn decode(raw: &str) -> Self {
        Self(raw.chars().map(Tile::from_char).collect())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into rows of `width` tiles (row-major). The last row may be short.
    pub fn rows(&self, width: usize) -> impl Iterator<Item = &[Tile]> {
        self.0.chunks(width.max(1))
    }
}

impl From<Vec<Tile>> for Field {
    fn from(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }
}
