//! Write boundary between the positioner and whatever displays it.

use crate::positioner::{RenderState, WaveColumnPositioner};
use crate::wave::Side;

/// Target of every visual side effect of the animation.
pub trait Surface {
    /// Horizontal translation of the element at `index`, in pixels.
    fn set_offset(&mut self, side: Side, index: usize, x: f64);
    fn set_focused(&mut self, side: Side, index: usize, focused: bool);
    fn set_thumbnail_src(&mut self, src: &str);
    fn set_thumbnail_y(&mut self, y: f64);
}

/// Paint the current smoothed position of every element.
pub fn paint_offsets<S: Surface + ?Sized>(positioner: &WaveColumnPositioner, surface: &mut S) {
    for side in Side::BOTH {
        for (index, x) in positioner.offsets(side).into_iter().enumerate() {
            surface.set_offset(side, index, x);
        }
    }
}

/// Paint focus flags and the thumbnail after a scroll update.
pub fn paint_state<S: Surface + ?Sized>(
    state: &RenderState,
    positioner: &WaveColumnPositioner,
    surface: &mut S,
) {
    for side in Side::BOTH {
        let focused = state.focus.index(side);
        for index in 0..positioner.len(side) {
            surface.set_focused(side, index, focused == Some(index));
        }
    }
    if let Some(src) = &state.thumbnail.src {
        surface.set_thumbnail_src(src);
    }
    surface.set_thumbnail_y(state.thumbnail.y);
}
