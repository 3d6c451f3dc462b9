//! DTerm Border Glyphs
//!
//! Box-drawing glyph records and the border styles that select them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DTermError;

/// Box drawing characters for one border style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub x: char,   // Horizontal edge
    pub y: char,   // Vertical edge
    pub nw: char,
    pub ne: char,
    pub sw: char,
    pub se: char,
    pub tee_n: char, // ┬
    pub tee_s: char, // ┴
    pub tee_e: char, // ┤
    pub tee_w: char, // ├
    pub cross: char,
}

/// Glyph table
pub mod glyph_sets {
    use super::BorderGlyphs;

    pub const THIN: BorderGlyphs = BorderGlyphs {
        x: '─', y: '│',
        nw: '┌', ne: '┐', sw: '└', se: '┘',
        tee_n: '┬', tee_s: '┴', tee_e: '┤', tee_w: '├',
        cross: '┼',
    };

    pub const DOUBLE: BorderGlyphs = BorderGlyphs {
        x: '═', y: '║',
        nw: '╔', ne: '╗', sw: '╚', se: '╝',
        tee_n: '╦', tee_s: '╩', tee_e: '╣', tee_w: '╠',
        cross: '╬',
    };
}

/// Border style for panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Thin,
    #[default]
    Double,
    /// Accepted by name but has no glyph record
    Bold,
}

impl BorderStyle {
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Thin => "thin",
            BorderStyle::Double => "double",
            BorderStyle::Bold => "bold",
        }
    }

    /// Look up the glyph record for this style
    pub fn glyphs(&self) -> Result<&'static BorderGlyphs, DTermError> {
        match self {
            BorderStyle::Thin => Ok(&glyph_sets::THIN),
            BorderStyle::Double => Ok(&glyph_sets::DOUBLE),
            BorderStyle::Bold => Err(DTermError::UnimplementedBorderStyle(self.name())),
        }
    }
}

impl FromStr for BorderStyle {
    type Err = DTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thin" => Ok(BorderStyle::Thin),
            "double" => Ok(BorderStyle::Double),
            "bold" => Ok(BorderStyle::Bold),
            other => Err(DTermError::UnknownBorderStyle(other.to_string())),
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Glyph text for the four edge strips of a bordered panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderStrips {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
}

impl BorderStrips {
    /// Compose the strips for a panel `cols` cells wide and `rows` cells tall.
    /// Each strip spans its full side with a corner glyph at both ends.
    /// Returns `None` when either side is shorter than its two corners.
    pub fn compose(glyphs: &BorderGlyphs, cols: u32, rows: u32) -> Option<Self> {
        if cols < 2 || rows < 2 {
            return None;
        }
        let run = |ends: (char, char), edge: char, len: u32| -> String {
            let mut s = String::with_capacity(len as usize * edge.len_utf8());
            s.push(ends.0);
            s.extend(std::iter::repeat(edge).take(len as usize - 2));
            s.push(ends.1);
            s
        };
        Some(Self {
            north: run((glyphs.nw, glyphs.ne), glyphs.x, cols),
            south: run((glyphs.sw, glyphs.se), glyphs.x, cols),
            east: run((glyphs.ne, glyphs.se), glyphs.y, rows),
            west: run((glyphs.nw, glyphs.sw), glyphs.y, rows),
        })
    }
}
