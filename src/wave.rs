//! Sine-wave placement of text elements inside a column.
//!
//! Every element gets a phase from its index and the scroll progress; the
//! sine of that phase is normalised to `[0, 1]` and mapped into the column's
//! travel range, so an element can never leave its container.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use crate::config::WaveConfig;

/// Which of the two mirrored columns an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Direction multiplier applied to the raw offset.
    pub fn multiplier(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal travel bounds of a column, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min_x: f64,
    pub max_x: f64,
}

impl Range {
    /// Travel range for a column of `column_width` whose widest element is
    /// `widest` pixels wide.
    ///
    /// When the widest element does not fit, the span collapses to zero
    /// instead of going negative.
    pub fn for_column(column_width: f64, widest: f64) -> Self {
        let span = column_width - widest;
        Range {
            min_x: 0.0,
            max_x: if span.is_finite() { span.max(0.0) } else { 0.0 },
        }
    }

    pub fn span(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// True when the column has no room to move, either because the widest
    /// element fills it exactly or because it overflows.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }
}

/// Width of the widest element, `0.0` for an empty column.
pub fn widest(widths: &[f64]) -> f64 {
    widths.iter().copied().fold(0.0, f64::max)
}

/// Angular input of the wave for the element at `index`.
pub fn phase(config: &WaveConfig, index: usize, progress: f64) -> f64 {
    config.wave_number * index as f64 + config.wave_speed * progress * TAU - FRAC_PI_2
}

/// `sin(phase)` normalised from `[-1, 1]` to `[0, 1]`.
pub fn cycle(phase: f64) -> f64 {
    ((phase.sin() + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Position inside `range` before the column's direction is applied.
pub fn raw_offset(range: &Range, cycle: f64) -> f64 {
    range.min_x + cycle * range.span()
}

/// Final horizontal offset of the element at `index` for `progress`.
pub fn offset(config: &WaveConfig, range: &Range, side: Side, index: usize, progress: f64) -> f64 {
    raw_offset(range, cycle(phase(config, index, progress))) * side.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn range_subtracts_widest_element() {
        let range = Range::for_column(800.0, 320.0);
        assert_eq!(range, Range { min_x: 0.0, max_x: 480.0 });
        assert!(!range.is_degenerate());
    }

    #[test]
    fn overflowing_column_collapses_range() {
        let range = Range::for_column(200.0, 260.0);
        assert_eq!(range.max_x, 0.0);
        assert!(range.is_degenerate());
    }

    #[test]
    fn first_element_starts_at_range_min() {
        let config = WaveConfig::default();
        let range = Range::for_column(1000.0, 400.0);
        assert!(approx_eq(phase(&config, 0, 0.0), -FRAC_PI_2));
        assert!(approx_eq(offset(&config, &range, Side::Left, 0, 0.0), range.min_x));
        assert!(approx_eq(offset(&config, &range, Side::Right, 0, 0.0), -range.min_x));
    }

    #[test]
    fn quarter_progress_reaches_midpoint() {
        let config = WaveConfig::default();
        let range = Range::for_column(1000.0, 400.0);
        assert!(approx_eq(phase(&config, 0, 0.25), 0.0));
        assert!(approx_eq(cycle(0.0), 0.5));
        assert!(approx_eq(offset(&config, &range, Side::Left, 0, 0.25), 300.0));
        assert!(approx_eq(offset(&config, &range, Side::Right, 0, 0.25), -300.0));
    }

    #[test]
    fn widest_of_empty_column_is_zero() {
        assert_eq!(widest(&[]), 0.0);
        assert_eq!(widest(&[12.0, 80.5, 40.0]), 80.5);
    }
}
