//! # Text Layout
//!
//! Places glyphs left to right on a single line of pixels.
//!
//! The cursor starts at [`RasterConfig::cursor_start`] and advances by
//! `glyph_advance` after a glyph with pixels or by `space_advance` after a
//! blank one. The reported width is the last cursor position minus one.

use std::collections::BTreeSet;

use crate::error::CrtgenError;
use crate::glyph::GlyphTable;
use crate::raster::RasterConfig;

/// Absolute pixel positions of a laid-out message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Lit pixels as `(x, y)`, y growing downward.
    pub points: BTreeSet<(usize, usize)>,
    /// Inclusive rightmost column reached by the cursor.
    pub width: usize,
}

/// Lay out `message` with the glyphs in `table`.
///
/// Every character is checked before any pixel is placed, so an unsupported
/// character fails the whole layout and names its position.
pub fn layout(
    table: &GlyphTable,
    message: &str,
    config: &RasterConfig,
) -> Result<Layout, CrtgenError> {
    let glyphs = message
        .chars()
        .enumerate()
        .map(|(index, ch)| table.get(ch, index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut points = BTreeSet::new();
    let mut cursor = config.cursor_start;

    for glyph in glyphs {
        points.extend(glyph.pixels().iter().map(|&(dx, dy)| (cursor + dx, dy)));
        cursor += if glyph.is_blank() {
            config.space_advance
        } else {
            config.glyph_advance
        };
    }

    Ok(Layout {
        points,
        width: cursor.saturating_sub(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(message: &str) -> Result<Layout, CrtgenError> {
        layout(&GlyphTable::standard(), message, &RasterConfig::STANDARD)
    }

    #[test]
    fn test_layout_single_glyph() {
        let result = standard("S").unwrap();
        assert_eq!(result.width, 6);
        assert_eq!(result.points.len(), 11);
        // Glyph is shifted right by the cursor start
        assert!(result.points.contains(&(2, 1)));
        assert!(result.points.contains(&(5, 4)));
        assert!(!result.points.iter().any(|&(x, _)| x < 2));
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(standard("S").unwrap(), standard("S").unwrap());
    }

    #[test]
    fn test_layout_advances() {
        // 2 + 4 glyphs * 5 + space 3 + 5 glyphs * 5 - 1
        assert_eq!(standard("SEND NUDES").unwrap().width, 49);
        assert_eq!(standard("SS").unwrap().width, 11);
        assert_eq!(standard(" S").unwrap().width, 9);

        let spaced = standard(" S").unwrap();
        assert!(spaced.points.contains(&(5, 1)));
    }

    #[test]
    fn test_layout_empty_message() {
        let result = standard("").unwrap();
        assert!(result.points.is_empty());
        assert_eq!(result.width, 1);
    }

    #[test]
    fn test_layout_rejects_unsupported() {
        match standard("SEND nudes") {
            Err(CrtgenError::UnsupportedCharacter { ch, index }) => {
                assert_eq!(ch, 'n');
                assert_eq!(index, 5);
            }
            other => panic!("expected unsupported character, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_second_glyph_offset() {
        let result = standard("SE").unwrap();
        // E's left column starts at 2 + 5
        for y in 0..6 {
            assert!(result.points.contains(&(7, y)));
        }
    }
}
