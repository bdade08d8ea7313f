//! 3x5 bitmap font
//!
//! Each glyph is five rows of three bits, most significant bit on the left.
//! Glyphs sit in a 4x6 cell so text advances four pixels per character.
//! Lower-case letters use the upper-case shapes.

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
pub const ADVANCE: i32 = 4;

/// ASCII 0x20..=0x5F
static GLYPHS: [[u8; 5]; 64] = [
    [0, 0, 0, 0, 0], // ' '
    [2, 2, 2, 0, 2], // !
    [5, 5, 0, 0, 0], // "
    [5, 7, 5, 7, 5], // #
    [7, 6, 7, 3, 7], // $
    [5, 1, 2, 4, 5], // %
    [2, 5, 2, 5, 3], // &
    [2, 2, 0, 0, 0], // '
    [1, 2, 2, 2, 1], // (
    [4, 2, 2, 2, 4], // )
    [0, 5, 2, 5, 0], // *
    [0, 2, 7, 2, 0], // +
    [0, 0, 0, 2, 4], // ,
    [0, 0, 7, 0, 0], // -
    [0, 0, 0, 0, 2], // .
    [1, 1, 2, 4, 4], // /
    [7, 5, 5, 5, 7], // 0
    [2, 6, 2, 2, 7], // 1
    [7, 1, 7, 4, 7], // 2
    [7, 1, 3, 1, 7], // 3
    [5, 5, 7, 1, 1], // 4
    [7, 4, 7, 1, 7], // 5
    [7, 4, 7, 5, 7], // 6
    [7, 1, 1, 1, 1], // 7
    [7, 5, 7, 5, 7], // 8
    [7, 5, 7, 1, 7], // 9
    [0, 2, 0, 2, 0], // :
    [0, 2, 0, 2, 4], // ;
    [1, 2, 4, 2, 1], // <
    [0, 7, 0, 7, 0], // =
    [4, 2, 1, 2, 4], // >
    [7, 1, 3, 0, 2], // ?
    [2, 5, 7, 4, 3], // @
    [2, 5, 7, 5, 5], // A
    [6, 5, 6, 5, 6], // B
    [3, 4, 4, 4, 3], // C
    [6, 5, 5, 5, 6], // D
    [7, 4, 6, 4, 7], // E
    [7, 4, 6, 4, 4], // F
    [3, 4, 5, 5, 3], // G
    [5, 5, 7, 5, 5], // H
    [7, 2, 2, 2, 7], // I
    [1, 1, 1, 5, 2], // J
    [5, 5, 6, 5, 5], // K
    [4, 4, 4, 4, 7], // L
    [5, 7, 7, 5, 5], // M
    [6, 5, 5, 5, 5], // N
    [2, 5, 5, 5, 2], // O
    [6, 5, 6, 4, 4], // P
    [2, 5, 5, 6, 3], // Q
    [6, 5, 6, 5, 5], // R
    [3, 4, 2, 1, 6], // S
    [7, 2, 2, 2, 2], // T
    [5, 5, 5, 5, 7], // U
    [5, 5, 5, 5, 2], // V
    [5, 5, 7, 7, 5], // W
    [5, 5, 2, 5, 5], // X
    [5, 5, 2, 2, 2], // Y
    [7, 1, 2, 4, 7], // Z
    [6, 4, 4, 4, 6], // [
    [4, 4, 2, 1, 1], // \
    [3, 1, 1, 1, 3], // ]
    [2, 5, 0, 0, 0], // ^
    [0, 0, 0, 0, 7], // _
];

/// Characters after the lower-case block
static GLYPHS_TAIL: [[u8; 5]; 5] = [
    [4, 2, 0, 0, 0], // `
    [3, 2, 6, 2, 3], // {
    [2, 2, 2, 2, 2], // |
    [6, 2, 3, 2, 6], // }
    [0, 3, 6, 0, 0], // ~
];

/// Rows for `c`, or `None` if the font has no glyph for it
pub fn glyph(c: char) -> Option<&'static [u8; 5]> {
    let c = c.to_ascii_uppercase();
    match c {
        ' '..='_' => GLYPHS.get(c as usize - ' ' as usize),
        '`' => Some(&GLYPHS_TAIL[0]),
        '{'..='~' => GLYPHS_TAIL.get(c as usize - '{' as usize + 1),
        _ => None,
    }
}

/// Lit pixels of `c` as (column, row) offsets within its cell
pub fn glyph_pixels(c: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(c).copied().unwrap_or([0; 5]);
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        let bits = rows[row as usize];
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (0b100u8 >> *col) != 0)
            .map(move |col| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(glyph('A'), Some(&[2, 5, 7, 5, 5]));
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('0'), Some(&[7, 5, 5, 5, 7]));
        assert_eq!(glyph('_'), Some(&[0, 0, 0, 0, 7]));
        assert_eq!(glyph('~'), Some(&[0, 3, 6, 0, 0]));
        assert_eq!(glyph('|'), Some(&[2, 2, 2, 2, 2]));
        assert_eq!(glyph('é'), None);
        assert_eq!(glyph('\n'), None);
    }

    #[test]
    fn test_every_game_string_has_glyphs() {
        for text in [
            "PASTEL STALACTITES",
            "You didn't lose; you just found a new way to not win!",
            "(press SPACE to continue)",
            "Score/100 px: 480",
        ] {
            for c in text.chars() {
                assert!(glyph(c).is_some(), "no glyph for {:?}", c);
            }
        }
    }

    #[test]
    fn test_glyph_pixels() {
        let pixels: Vec<_> = glyph_pixels('1').collect();
        // 2, 6, 2, 2, 7
        assert_eq!(pixels.len(), 1 + 2 + 1 + 1 + 3);
        assert!(pixels.contains(&(1, 0)));
        assert!(pixels.contains(&(0, 1)));
        assert!(pixels.contains(&(2, 4)));
        assert_eq!(glyph_pixels(' ').count(), 0);
    }
}
