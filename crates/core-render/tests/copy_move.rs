//! Copy, blit and move between regions.

use core_geometry::Rect;
use core_pen::{Color, Pen};
use core_render::{LineCaps, LineStyle, RenderBuffer};

#[test]
fn moverect_rightward_in_place() {
    let mut rb = RenderBuffer::new(1, 10);
    rb.text_at(0, 0, "ABCDEFGHIJ");
    rb.moverect(&Rect::new(0, 3, 1, 5), &Rect::new(0, 0, 1, 5));

    // Origin of the move is skipped out.
    for col in 0..3 {
        assert_eq!(rb.get_cell_active(0, col), Some(false), "col {col}");
    }
    let moved = rb.get_span(0, 3).unwrap();
    assert_eq!(moved.text, "ABCDE");
    assert_eq!(moved.n_columns, 5);
    // The tail of the original string survives past the destination.
    let tail = rb.get_span(0, 8).unwrap();
    assert_eq!(tail.text, "IJ");
    assert_eq!(tail.n_columns, 2);
}

#[test]
fn moverect_leftward_in_place() {
    let mut rb = RenderBuffer::new(1, 10);
    rb.text_at(0, 2, "ABCDE");
    rb.moverect(&Rect::new(0, 0, 1, 5), &Rect::new(0, 2, 1, 5));

    assert_eq!(rb.get_span(0, 0).unwrap().text, "ABCDE");
    // The vacated columns (5..7) are skipped.
    assert_eq!(rb.get_cell_active(0, 5), Some(false));
    assert_eq!(rb.get_cell_active(0, 6), Some(false));
}

#[test]
fn copyrect_downward_iterates_bottom_up() {
    let mut rb = RenderBuffer::new(3, 6);
    rb.text_at(0, 0, "top");
    rb.text_at(1, 0, "mid");
    rb.copyrect(&Rect::new(1, 0, 2, 6), &Rect::new(0, 0, 2, 6));

    // Line 0 is untouched; lines shift down one without tearing.
    assert_eq!(rb.get_span(0, 0).unwrap().text, "top");
    assert_eq!(rb.get_span(1, 0).unwrap().text, "top");
    assert_eq!(rb.get_span(2, 0).unwrap().text, "mid");
}

#[test]
fn copyrect_upward_iterates_top_down() {
    let mut rb = RenderBuffer::new(3, 6);
    rb.text_at(1, 0, "mid");
    rb.text_at(2, 0, "low");
    rb.copyrect(&Rect::new(0, 0, 2, 6), &Rect::new(1, 0, 2, 6));

    assert_eq!(rb.get_span(0, 0).unwrap().text, "mid");
    assert_eq!(rb.get_span(1, 0).unwrap().text, "low");
    assert_eq!(rb.get_span(2, 0).unwrap().text, "low");
}

#[test]
fn copyrect_copies_skip_cells() {
    let mut rb = RenderBuffer::new(1, 10);
    rb.text_at(0, 0, "AB");
    // Source columns 2..5 are still skip; copying them must skip out the
    // erased destination.
    rb.erase_at(0, 5, 5);
    rb.copyrect(&Rect::new(0, 5, 1, 5), &Rect::new(0, 0, 1, 5));

    assert_eq!(rb.get_span(0, 5).unwrap().text, "AB");
    assert_eq!(rb.get_cell_active(0, 7), Some(false));
    assert_eq!(rb.get_cell_active(0, 9), Some(false));
}

#[test]
fn blit_redraws_every_non_skip_span() {
    let mut src = RenderBuffer::new(2, 12);
    src.set_pen(&Pen::new().with_fg(Color::Red));
    src.text_at(0, 1, "hello");
    src.char_at(0, 8, '!');
    src.set_pen(&Pen::new());
    src.erase_at(1, 0, 3);
    src.hline_at(1, 5, 9, LineStyle::Single, LineCaps::empty());

    let mut dst = RenderBuffer::new(2, 12);
    dst.blit(&src);

    for line in 0..2 {
        for col in 0..12 {
            assert_eq!(
                dst.get_cell_active(line, col),
                src.get_cell_active(line, col),
                "active ({line},{col})"
            );
            assert_eq!(
                dst.get_cell_text(line, col),
                src.get_cell_text(line, col),
                "text ({line},{col})"
            );
            assert_eq!(
                dst.get_cell_pen(line, col),
                src.get_cell_pen(line, col),
                "pen ({line},{col})"
            );
        }
    }
}

#[test]
fn blit_leaves_destination_content_under_source_skips() {
    let mut src = RenderBuffer::new(1, 8);
    src.text_at(0, 4, "hi");

    let mut dst = RenderBuffer::new(1, 8);
    dst.text_at(0, 0, "keepme");
    dst.blit(&src);

    // Source skip columns do not disturb the destination.
    assert_eq!(rb_text(&dst, 0, 0), "keep");
    assert_eq!(rb_text(&dst, 0, 4), "hi");
    assert_eq!(rb_text(&dst, 0, 6), "");
}

fn rb_text(rb: &RenderBuffer, line: i32, col: i32) -> String {
    rb.get_span(line, col).unwrap().text
}

#[test]
fn copy_preserves_span_pens() {
    let mut rb = RenderBuffer::new(2, 8);
    rb.set_pen(&Pen::new().with_fg(Color::Magenta).with_underline(true));
    rb.text_at(0, 0, "ab");
    rb.set_pen(&Pen::new());

    rb.copyrect(&Rect::new(1, 0, 1, 2), &Rect::new(0, 0, 1, 2));

    let pen = rb.get_cell_pen(1, 0).unwrap();
    assert_eq!(pen.fg, Some(Color::Magenta));
    assert_eq!(pen.underline, Some(true));
    // The buffer's own pen is untouched by the copy.
    assert!(rb.pen().is_default());
}

#[test]
fn copy_respects_destination_masks() {
    let mut rb = RenderBuffer::new(2, 6);
    rb.text_at(0, 0, "abcdef");
    rb.mask(&Rect::new(1, 2, 1, 2));
    rb.copyrect(&Rect::new(1, 0, 1, 6), &Rect::new(0, 0, 1, 6));

    assert_eq!(rb_text(&rb, 1, 0), "ab");
    assert_eq!(rb.get_cell_active(1, 2), Some(false));
    assert_eq!(rb.get_cell_active(1, 3), Some(false));
    assert_eq!(rb_text(&rb, 1, 4), "ef");
}

#[test]
fn moverect_partial_overlap_skips_the_residue_only() {
    let mut rb = RenderBuffer::new(4, 4);
    for line in 0..4 {
        rb.text_at(line, 0, "rrrr");
    }
    // Move the top-left 2x2 block down-right by one.
    rb.moverect(&Rect::new(1, 1, 2, 2), &Rect::new(0, 0, 2, 2));

    // The L-shaped residue of the source is skipped.
    assert_eq!(rb.get_cell_active(0, 0), Some(false));
    assert_eq!(rb.get_cell_active(0, 1), Some(false));
    assert_eq!(rb.get_cell_active(1, 0), Some(false));
    // Destination cells hold the copied text.
    assert_eq!(rb.get_cell_text(1, 1).unwrap(), "r");
    assert_eq!(rb.get_cell_text(2, 2).unwrap(), "r");
    // Cells outside both rects are untouched.
    assert_eq!(rb.get_cell_text(3, 0).unwrap(), "r");
    assert_eq!(rb.get_cell_text(0, 3).unwrap(), "r");
}

#[test]
fn same_place_copy_is_a_no_op() {
    let mut rb = RenderBuffer::new(1, 6);
    rb.text_at(0, 0, "abc");
    rb.copyrect(&Rect::new(0, 0, 1, 6), &Rect::new(0, 0, 1, 6));
    assert_eq!(rb_text(&rb, 0, 0), "abc");
    assert_eq!(rb.get_cell_active(0, 4), Some(false));
}
