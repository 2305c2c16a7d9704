//! # Glyph Table
//!
//! Fixed 4x6 block letters used to spell messages on the CRT.
//!
//! Each glyph is drawn as ASCII art where `#` marks a lit pixel. The art
//! literals start with a newline so the first row lines up in source; that
//! leading line is skipped when scanning.
//!
//! ```
//! use crtgen::glyph::GlyphTable;
//!
//! let table = GlyphTable::standard();
//! let s = table.get('S', 0).unwrap();
//! assert!(s.pixels().contains(&(1, 0)));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::error::CrtgenError;

/// Character marking a lit pixel in glyph art.
pub const MARK: char = '#';

/// Height of every glyph cell in rows.
pub const GLYPH_HEIGHT: usize = 6;

const S: &str = "
 ###
#
 ##
   #
   #
###
";

const E: &str = "
####
#
###
#
#
####
";

const N: &str = "
#  #
## #
## #
# ##
# ##
#  #
";

const D: &str = "
##
# #
#  #
#  #
# #
##
";

const U: &str = "
#  #
#  #
#  #
#  #
#  #
 ##
";

const SPACE: &str = "";

const ART: &[(char, &str)] = &[
    ('S', S),
    ('E', E),
    ('N', N),
    ('D', D),
    ('U', U),
    (' ', SPACE),
];

/// A single character's pixel set, (column, row) relative to its top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    art: &'static str,
    pixels: BTreeSet<(usize, usize)>,
}

impl Glyph {
    /// Build a glyph by scanning ASCII art for [`MARK`].
    pub fn from_art(ch: char, art: &'static str) -> Self {
        Self {
            ch,
            art,
            pixels: scan_art(art),
        }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn art(&self) -> &'static str {
        self.art
    }

    pub fn pixels(&self) -> &BTreeSet<(usize, usize)> {
        &self.pixels
    }

    /// True for glyphs without any lit pixel (the space).
    pub fn is_blank(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Collect `(column, row)` of every mark, skipping the leading blank line.
pub fn scan_art(art: &str) -> BTreeSet<(usize, usize)> {
    art.lines()
        .skip(1)
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == MARK)
                .map(move |(x, _)| (x, y))
        })
        .collect()
}

/// Lookup table from supported characters to glyphs.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    /// The built-in table: `S`, `E`, `N`, `D`, `U` and space.
    pub fn standard() -> Self {
        ART.iter()
            .map(|&(ch, art)| Glyph::from_art(ch, art))
            .collect()
    }

    /// Look up a glyph. `index` is the character's position in the message
    /// and is only used to report unsupported characters.
    pub fn get(&self, ch: char, index: usize) -> Result<&Glyph, CrtgenError> {
        self.glyphs
            .get(&ch)
            .ok_or(CrtgenError::UnsupportedCharacter { ch, index })
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Supported characters in sorted order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<Glyph> for GlyphTable {
    fn from_iter<T: IntoIterator<Item = Glyph>>(iter: T) -> Self {
        Self {
            glyphs: iter.into_iter().map(|g| (g.ch, g)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(ch: char) -> Vec<(usize, usize)> {
        GlyphTable::standard()
            .get(ch, 0)
            .unwrap()
            .pixels()
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn test_s_pixels() {
        assert_eq!(
            pixels('S'),
            vec![
                (0, 1),
                (0, 5),
                (1, 0),
                (1, 2),
                (1, 5),
                (2, 0),
                (2, 2),
                (2, 5),
                (3, 0),
                (3, 3),
                (3, 4),
            ]
        );
    }

    #[test]
    fn test_e_pixels() {
        let e = pixels('E');
        assert_eq!(e.len(), 4 + 1 + 3 + 1 + 1 + 4);
        // Left column is fully lit
        for y in 0..GLYPH_HEIGHT {
            assert!(e.contains(&(0, y)));
        }
        assert!(e.contains(&(3, 0)));
        assert!(!e.contains(&(3, 2)));
        assert!(e.contains(&(3, 5)));
    }

    #[test]
    fn test_n_d_u_pixels() {
        let n = pixels('N');
        assert!(n.contains(&(1, 1)) && n.contains(&(2, 3)) && n.contains(&(3, 0)));
        assert_eq!(n.len(), 16);

        let d = pixels('D');
        assert_eq!(
            d,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (1, 0),
                (1, 5),
                (2, 1),
                (2, 4),
                (3, 2),
                (3, 3),
            ]
        );

        let u = pixels('U');
        assert!(!u.contains(&(0, 5)));
        assert!(u.contains(&(1, 5)) && u.contains(&(2, 5)));
        assert_eq!(u.len(), 12);
    }

    #[test]
    fn test_rows_stay_within_cell() {
        for glyph in GlyphTable::standard().iter() {
            for &(x, y) in glyph.pixels() {
                assert!(x < 4, "{:?} column {}", glyph.ch(), x);
                assert!(y < GLYPH_HEIGHT, "{:?} row {}", glyph.ch(), y);
            }
        }
    }

    #[test]
    fn test_space_is_blank() {
        let table = GlyphTable::standard();
        assert!(table.get(' ', 0).unwrap().is_blank());
        assert!(!table.get('S', 0).unwrap().is_blank());
    }

    #[test]
    fn test_unsupported_character() {
        let table = GlyphTable::standard();
        match table.get('X', 7) {
            Err(CrtgenError::UnsupportedCharacter { ch, index }) => {
                assert_eq!(ch, 'X');
                assert_eq!(index, 7);
            }
            other => panic!("expected unsupported character, got {:?}", other),
        }
        assert!(!table.contains('s'));
    }

    #[test]
    fn test_chars() {
        let chars: String = GlyphTable::standard().chars().collect();
        assert_eq!(chars, " DENSU");
    }
}
