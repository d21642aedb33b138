//! Alignment-based layout
//!
//! Every shape, icon and text run is positioned by [`place`]: the cursor is
//! treated as the anchor named by the alignment flags, the shape's top-left
//! corner is derived from it, and the cursor then moves past the shape if a
//! movement flag is set. Chained draw calls lay themselves out this way
//! without explicit positions.

use super::state::{Align, DrawState};

/// Offset from an anchor to the leading edge of a span of `len` pixels
///
/// Right/bottom anchors sit on the last pixel, centre/middle anchors on
/// the middle pixel, with odd lengths favouring the leading pixel.
fn lead(len: i16, near: Align, far: Align, align: Align) -> i16 {
    let both = near | far;
    if align.contains(both) {
        len.saturating_sub(1) / 2
    } else if align.contains(far) {
        len.saturating_sub(1)
    } else {
        0
    }
}

/// Top-left origin for a `width` x `height` shape at the cursor
///
/// Advances the cursor by `width + h_margin` (`height + v_margin`) when
/// the horizontal (vertical) movement flag is set: forwards for a
/// left/top anchor, backwards for a right/bottom anchor. A centre anchor
/// carries both bits, so the two moves cancel. The cursor moves whether
/// or not the caller goes on to draw anything.
pub fn place(
    state: &mut DrawState,
    width: i16,
    height: i16,
    h_margin: i16,
    v_margin: i16,
) -> (i16, i16) {
    let align = state.align;
    let left = state
        .x
        .saturating_sub(lead(width, Align::LEFT, Align::RIGHT, align));
    let top = state
        .y
        .saturating_sub(lead(height, Align::TOP, Align::BOTTOM, align));

    if align.contains(Align::HMOVE) {
        let step = width.saturating_add(h_margin);
        if align.contains(Align::LEFT) {
            state.x = state.x.saturating_add(step);
        }
        if align.contains(Align::RIGHT) {
            state.x = state.x.saturating_sub(step);
        }
    }
    if align.contains(Align::VMOVE) {
        let step = height.saturating_add(v_margin);
        if align.contains(Align::TOP) {
            state.y = state.y.saturating_add(step);
        }
        if align.contains(Align::BOTTOM) {
            state.y = state.y.saturating_sub(step);
        }
    }

    (left, top)
}
