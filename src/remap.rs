//! Translation of logical character masks to physical grid words.
//!
//! The display module ties each of the five character positions to one
//! segment output line and fans the seven segments of a position out
//! across the seven grid lines. Two factory wirings exist: the standard
//! layout and a mirrored one for modules mounted upside-down.

use crate::constants::*;

/// Builds the seven grid words from the five character-position masks.
pub type RemapFn = fn(&[u8; NUM_DIGITS as usize]) -> [u16; NUM_GRIDS as usize];

/// Wiring translation applied on every display refresh.
#[derive(Clone, Copy)]
pub enum Remap {
    /// Standard module wiring.
    Normal,
    /// Module mounted upside-down.
    Inverted,
    /// Caller-supplied translation for non-standard wirings.
    Custom(RemapFn),
}

impl Remap {
    pub(crate) fn apply(&self, digits: &[u8; NUM_DIGITS as usize]) -> [u16; NUM_GRIDS as usize] {
        match self {
            Remap::Normal => normal_remap(digits),
            Remap::Inverted => inverted_remap(digits),
            Remap::Custom(remap) => remap(digits),
        }
    }
}

// Segment line carrying each character position, leftmost first. The
// symbols position sits on SG3 in both wirings.
const NORMAL_POSITION_LINES: [u16; NUM_DIGITS as usize] = [SG2, SG9, SG10, SG8, SG3];
const INVERTED_POSITION_LINES: [u16; NUM_DIGITS as usize] = [SG8, SG10, SG9, SG2, SG3];

// Segment of a character position driven while GR1-GR7 is scanned.
// Positions 0-3 share one assignment; the symbols position has its own.
const NORMAL_GRID_SEGMENTS: [u8; NUM_GRIDS as usize] =
    [SEG_F, SEG_E, SEG_D, SEG_C, SEG_B, SEG_G, SEG_A];
const NORMAL_SYMBOL_SEGMENTS: [u8; NUM_GRIDS as usize] =
    [SEG_G, SEG_C, SEG_D, SEG_E, SEG_A, SEG_B, SEG_F];

const INVERTED_GRID_SEGMENTS: [u8; NUM_GRIDS as usize] =
    [SEG_C, SEG_B, SEG_A, SEG_F, SEG_E, SEG_G, SEG_D];
const INVERTED_SYMBOL_SEGMENTS: [u8; NUM_GRIDS as usize] =
    [SEG_G, SEG_F, SEG_A, SEG_B, SEG_D, SEG_E, SEG_C];

/// Standard wiring: positions 0-3 on SG2/SG9/SG10/SG8, symbols on SG3.
pub fn normal_remap(digits: &[u8; NUM_DIGITS as usize]) -> [u16; NUM_GRIDS as usize] {
    build_matrix(
        digits,
        &NORMAL_POSITION_LINES,
        &NORMAL_GRID_SEGMENTS,
        &NORMAL_SYMBOL_SEGMENTS,
    )
}

/// Mirrored wiring for a module mounted upside-down: positions read
/// right-to-left and each glyph is turned half a revolution.
pub fn inverted_remap(digits: &[u8; NUM_DIGITS as usize]) -> [u16; NUM_GRIDS as usize] {
    build_matrix(
        digits,
        &INVERTED_POSITION_LINES,
        &INVERTED_GRID_SEGMENTS,
        &INVERTED_SYMBOL_SEGMENTS,
    )
}

fn build_matrix(
    digits: &[u8; NUM_DIGITS as usize],
    lines: &[u16; NUM_DIGITS as usize],
    grid_segments: &[u8; NUM_GRIDS as usize],
    symbol_segments: &[u8; NUM_GRIDS as usize],
) -> [u16; NUM_GRIDS as usize] {
    let mut matrix = [0u16; NUM_GRIDS as usize];
    for (grid, word) in matrix.iter_mut().enumerate() {
        for pos in 0..4 {
            if digits[pos] & grid_segments[grid] != 0 {
                *word |= lines[pos];
            }
        }
        // position 4 carries the standalone symbol segments
        if digits[4] & symbol_segments[grid] != 0 {
            *word |= lines[4];
        }
    }
    matrix
}
