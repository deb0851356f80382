//! Line mask → box-drawing glyph lookup.
//!
//! The mask packs a style per compass direction (N, E, S, W, two bits each).
//! Unicode's box-drawing block covers every light/heavy arm combination but
//! only a subset of double-stroke junctions, so double arms are reconciled
//! first: a double arm paired against a single arm on the same axis becomes
//! single, and double demotes to single entirely when thick arms are present
//! on the same cell. An unpaired double half-arm renders as the full double
//! stroke, which Unicode has no half form for.

use crate::lines::{EAST_SHIFT, NORTH_SHIFT, SOUTH_SHIFT, WEST_SHIFT};

const NONE: u8 = 0;
const SINGLE: u8 = 1;
const DOUBLE: u8 = 2;
const THICK: u8 = 3;

pub(crate) fn line_glyph(mask: u8) -> char {
    let mut n = (mask >> NORTH_SHIFT) & 0x03;
    let mut e = (mask >> EAST_SHIFT) & 0x03;
    let mut s = (mask >> SOUTH_SHIFT) & 0x03;
    let mut w = (mask >> WEST_SHIFT) & 0x03;

    // Same-axis style disagreements involving double resolve to single.
    if n != NONE && s != NONE && n != s && (n == DOUBLE || s == DOUBLE) {
        n = SINGLE;
        s = SINGLE;
    }
    if e != NONE && w != NONE && e != w && (e == DOUBLE || w == DOUBLE) {
        e = SINGLE;
        w = SINGLE;
    }

    let arms = [n, e, s, w];
    if arms.contains(&DOUBLE) {
        if arms.contains(&THICK) {
            let demote = |a: u8| if a == DOUBLE { SINGLE } else { a };
            light_heavy_glyph(demote(n), demote(e), demote(s), demote(w))
        } else {
            double_glyph(n, e, s, w)
        }
    } else {
        light_heavy_glyph(n, e, s, w)
    }
}

/// Arms are `NONE`/`SINGLE`/`DOUBLE`, at least one `DOUBLE`, and both
/// present arms of an axis share a style.
fn double_glyph(n: u8, e: u8, s: u8, w: u8) -> char {
    match (n, e, s, w) {
        // straights; an unpaired double half-arm draws the full stroke
        (2, 0, 0, 0) | (0, 0, 2, 0) | (2, 0, 2, 0) => '║',
        (0, 2, 0, 0) | (0, 0, 0, 2) | (0, 2, 0, 2) => '═',
        // corners
        (0, 2, 2, 0) => '╔',
        (0, 1, 2, 0) => '╓',
        (0, 2, 1, 0) => '╒',
        (0, 0, 2, 2) => '╗',
        (0, 0, 2, 1) => '╖',
        (0, 0, 1, 2) => '╕',
        (2, 2, 0, 0) => '╚',
        (2, 1, 0, 0) => '╙',
        (1, 2, 0, 0) => '╘',
        (2, 0, 0, 2) => '╝',
        (2, 0, 0, 1) => '╜',
        (1, 0, 0, 2) => '╛',
        // tees
        (2, 2, 2, 0) => '╠',
        (2, 1, 2, 0) => '╟',
        (1, 2, 1, 0) => '╞',
        (2, 0, 2, 2) => '╣',
        (2, 0, 2, 1) => '╢',
        (1, 0, 1, 2) => '╡',
        (0, 2, 2, 2) => '╦',
        (0, 1, 2, 1) => '╥',
        (0, 2, 1, 2) => '╤',
        (2, 2, 0, 2) => '╩',
        (2, 1, 0, 1) => '╨',
        (1, 2, 0, 2) => '╧',
        // crosses
        (2, 2, 2, 2) => '╬',
        (1, 2, 1, 2) => '╪',
        (2, 1, 2, 1) => '╫',
        _ => {
            let demote = |a: u8| if a == DOUBLE { SINGLE } else { a };
            light_heavy_glyph(demote(n), demote(e), demote(s), demote(w))
        }
    }
}

/// Arms are `NONE`/`SINGLE`/`THICK`; Unicode covers all 81 combinations.
fn light_heavy_glyph(n: u8, e: u8, s: u8, w: u8) -> char {
    match (n, e, s, w) {
        (0, 0, 0, 0) => ' ',
        // half strokes
        (1, 0, 0, 0) => '╵',
        (3, 0, 0, 0) => '╹',
        (0, 1, 0, 0) => '╶',
        (0, 3, 0, 0) => '╺',
        (0, 0, 1, 0) => '╷',
        (0, 0, 3, 0) => '╻',
        (0, 0, 0, 1) => '╴',
        (0, 0, 0, 3) => '╸',
        // horizontals
        (0, 1, 0, 1) => '─',
        (0, 3, 0, 3) => '━',
        (0, 3, 0, 1) => '╼',
        (0, 1, 0, 3) => '╾',
        // verticals
        (1, 0, 1, 0) => '│',
        (3, 0, 3, 0) => '┃',
        (1, 0, 3, 0) => '╽',
        (3, 0, 1, 0) => '╿',
        // down + right corners
        (0, 1, 1, 0) => '┌',
        (0, 3, 1, 0) => '┍',
        (0, 1, 3, 0) => '┎',
        (0, 3, 3, 0) => '┏',
        // down + left corners
        (0, 0, 1, 1) => '┐',
        (0, 0, 1, 3) => '┑',
        (0, 0, 3, 1) => '┒',
        (0, 0, 3, 3) => '┓',
        // up + right corners
        (1, 1, 0, 0) => '└',
        (1, 3, 0, 0) => '┕',
        (3, 1, 0, 0) => '┖',
        (3, 3, 0, 0) => '┗',
        // up + left corners
        (1, 0, 0, 1) => '┘',
        (1, 0, 0, 3) => '┙',
        (3, 0, 0, 1) => '┚',
        (3, 0, 0, 3) => '┛',
        // vertical + right tees
        (1, 1, 1, 0) => '├',
        (1, 3, 1, 0) => '┝',
        (3, 1, 1, 0) => '┞',
        (1, 1, 3, 0) => '┟',
        (3, 1, 3, 0) => '┠',
        (3, 3, 1, 0) => '┡',
        (1, 3, 3, 0) => '┢',
        (3, 3, 3, 0) => '┣',
        // vertical + left tees
        (1, 0, 1, 1) => '┤',
        (1, 0, 1, 3) => '┥',
        (3, 0, 1, 1) => '┦',
        (1, 0, 3, 1) => '┧',
        (3, 0, 3, 1) => '┨',
        (3, 0, 1, 3) => '┩',
        (1, 0, 3, 3) => '┪',
        (3, 0, 3, 3) => '┫',
        // down + horizontal tees
        (0, 1, 1, 1) => '┬',
        (0, 1, 1, 3) => '┭',
        (0, 3, 1, 1) => '┮',
        (0, 3, 1, 3) => '┯',
        (0, 1, 3, 1) => '┰',
        (0, 1, 3, 3) => '┱',
        (0, 3, 3, 1) => '┲',
        (0, 3, 3, 3) => '┳',
        // up + horizontal tees
        (1, 1, 0, 1) => '┴',
        (1, 1, 0, 3) => '┵',
        (1, 3, 0, 1) => '┶',
        (1, 3, 0, 3) => '┷',
        (3, 1, 0, 1) => '┸',
        (3, 1, 0, 3) => '┹',
        (3, 3, 0, 1) => '┺',
        (3, 3, 0, 3) => '┻',
        // crosses
        (1, 1, 1, 1) => '┼',
        (1, 1, 1, 3) => '┽',
        (1, 3, 1, 1) => '┾',
        (1, 3, 1, 3) => '┿',
        (3, 1, 1, 1) => '╀',
        (1, 1, 3, 1) => '╁',
        (3, 1, 3, 1) => '╂',
        (3, 1, 1, 3) => '╃',
        (3, 3, 1, 1) => '╄',
        (1, 1, 3, 3) => '╅',
        (1, 3, 3, 1) => '╆',
        (3, 3, 1, 3) => '╇',
        (1, 3, 3, 3) => '╈',
        (3, 1, 3, 3) => '╉',
        (3, 3, 3, 1) => '╊',
        (3, 3, 3, 3) => '╋',
        _ => ' ',
    }
}
