//! Scroll-driven placement of two mirrored text columns.
//!
//! The positioner is the pure half of the animation: it owns the wave
//! configuration, each column's travel range and one smoothing follower per
//! element. The DOM layer feeds it measurements and scroll samples and paints
//! whatever it reports back.

use log::{debug, warn};

use crate::config::WaveConfig;
use crate::error::AttachError;
use crate::focus;
use crate::scroll::ScrollSample;
use crate::smoothing::Follower;
use crate::wave::{self, Range, Side};

// Upper bound on a single smoothing step, so a backgrounded tab does not
// teleport everything on its first frame back.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Measured shape of one column at attach time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSpec {
    pub width: f64,
    pub element_widths: Vec<f64>,
    /// Image resource associated with each element, if any.
    pub images: Vec<Option<String>>,
}

/// Live vertical geometry needed to resolve focus, in viewport coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusGeometry {
    /// Vertical centre of every left-column element.
    pub centers: Vec<f64>,
    pub viewport_height: f64,
    pub wrapper_top: f64,
    pub wrapper_height: f64,
    pub thumbnail_height: f64,
}

/// Focused element of each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Focus {
    pub fn index(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailState {
    /// New source to display; `None` when the current one is still right.
    pub src: Option<String>,
    pub y: f64,
}

/// Everything the render layer has to write after a scroll update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub focus: Focus,
    pub thumbnail: ThumbnailState,
}

#[derive(Debug, Clone)]
struct Column {
    side: Side,
    range: Range,
    followers: Vec<Follower>,
    images: Vec<Option<String>>,
}

impl Column {
    fn new(side: Side, spec: ColumnSpec) -> Result<Self, AttachError> {
        if spec.element_widths.is_empty() {
            return Err(AttachError::EmptyColumn(side));
        }
        let mut images = spec.images;
        images.resize(spec.element_widths.len(), None);
        Ok(Self {
            side,
            range: column_range(side, spec.width, &spec.element_widths),
            followers: vec![Follower::new(0.0); spec.element_widths.len()],
            images,
        })
    }

    fn target(&self, config: &WaveConfig, index: usize, progress: f64) -> f64 {
        wave::offset(config, &self.range, self.side, index, progress)
    }

    fn focus_for(&self, index: usize) -> usize {
        index.min(self.followers.len() - 1)
    }
}

fn column_range(side: Side, width: f64, element_widths: &[f64]) -> Range {
    let widest = wave::widest(element_widths);
    let range = Range::for_column(width, widest);
    if width - widest < 0.0 {
        warn!(
            "{} column ({}px) is narrower than its widest element ({}px); wave disabled",
            side, width, widest
        );
    }
    range
}

#[derive(Debug, Clone)]
pub struct WaveColumnPositioner {
    config: WaveConfig,
    left: Column,
    right: Column,
    shown_image: Option<String>,
    progress: f64,
    // Time of the last smoothing step; `None` while everything is at rest.
    clock_ms: Option<f64>,
    disposed: bool,
}

impl WaveColumnPositioner {
    /// Build the positioner and place every element at its progress-0
    /// position. `shown_image` is the thumbnail's current source.
    pub fn new(
        config: WaveConfig,
        left: ColumnSpec,
        right: ColumnSpec,
        shown_image: Option<String>,
    ) -> Result<Self, AttachError> {
        let mut positioner = Self {
            config,
            left: Column::new(Side::Left, left)?,
            right: Column::new(Side::Right, right)?,
            shown_image,
            progress: 0.0,
            clock_ms: None,
            disposed: false,
        };
        positioner.place(0.0);
        debug!(
            "wave positioner ready: {} left / {} right elements, {:?}",
            positioner.left.followers.len(),
            positioner.right.followers.len(),
            positioner.config
        );
        Ok(positioner)
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn range(&self, side: Side) -> Range {
        self.column(side).range
    }

    pub fn len(&self, side: Side) -> usize {
        self.column(side).followers.len()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn shown_image(&self) -> Option<&str> {
        self.shown_image.as_deref()
    }

    /// Positions the followers are heading to.
    pub fn targets(&self, side: Side) -> Vec<f64> {
        self.column(side).followers.iter().map(Follower::target).collect()
    }

    /// Current smoothed positions.
    pub fn offsets(&self, side: Side) -> Vec<f64> {
        self.column(side).followers.iter().map(Follower::value).collect()
    }

    /// Recompute a column's travel range after a resize.
    ///
    /// Positions are left alone; the next scroll update moves elements into
    /// the new range.
    pub fn resize(&mut self, side: Side, width: f64, element_widths: &[f64]) {
        if self.disposed {
            return;
        }
        let range = column_range(side, width, element_widths);
        self.column_mut(side).range = range;
    }

    /// Retarget every element for `sample` and resolve focus from `geometry`.
    ///
    /// Returns `None` once the positioner has been disposed.
    pub fn update(&mut self, sample: ScrollSample, geometry: &FocusGeometry) -> Option<RenderState> {
        if self.disposed {
            return None;
        }
        self.progress = sample.progress;
        if self.is_settled() {
            self.clock_ms = Some(sample.time_ms);
        }
        let config = self.config;
        for column in [&mut self.left, &mut self.right] {
            for index in 0..column.followers.len() {
                let target = column.target(&config, index, sample.progress);
                column.followers[index].set_target(target);
            }
        }

        let viewport_mid = geometry.viewport_height / 2.0;
        let focused = focus::nearest_to_center(&geometry.centers, viewport_mid)
            .filter(|&index| index < self.left.followers.len());
        let focus = Focus {
            left: focused,
            right: focused.map(|index| self.right.focus_for(index)),
        };

        let src = focused
            .and_then(|index| self.left.images[index].as_ref())
            .filter(|src| self.shown_image.as_ref() != Some(*src))
            .cloned();
        if let Some(src) = &src {
            self.shown_image = Some(src.clone());
        }

        Some(RenderState {
            focus,
            thumbnail: ThumbnailState {
                src,
                y: focus::thumbnail_y(
                    viewport_mid,
                    geometry.wrapper_top,
                    geometry.wrapper_height,
                    geometry.thumbnail_height,
                ),
            },
        })
    }

    /// Advance smoothing by `dt` seconds. Returns whether anything still moves.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.disposed {
            return false;
        }
        for column in [&mut self.left, &mut self.right] {
            for follower in &mut column.followers {
                follower.step(dt);
            }
        }
        !self.is_settled()
    }

    /// Advance smoothing to `now_ms`, on the same clock as the scroll
    /// samples. Returns whether anything still moves.
    pub fn advance_to(&mut self, now_ms: f64) -> bool {
        if self.disposed {
            return false;
        }
        let dt = self
            .clock_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT));
        let moving = self.step(dt);
        self.clock_ms = moving.then_some(now_ms);
        moving
    }

    pub fn is_settled(&self) -> bool {
        self.left
            .followers
            .iter()
            .chain(&self.right.followers)
            .all(Follower::is_settled)
    }

    /// Stop reacting to updates. Safe to call more than once.
    pub fn dispose(&mut self) {
        if !self.disposed {
            debug!("wave positioner disposed at progress {:.3}", self.progress);
        }
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn place(&mut self, progress: f64) {
        let config = self.config;
        for column in [&mut self.left, &mut self.right] {
            for index in 0..column.followers.len() {
                let x = column.target(&config, index, progress);
                column.followers[index].snap(x);
            }
        }
    }

    fn column(&self, side: Side) -> &Column {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn column_mut(&mut self, side: Side) -> &mut Column {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: f64, widths: &[f64]) -> ColumnSpec {
        ColumnSpec {
            width,
            element_widths: widths.to_vec(),
            images: Vec::new(),
        }
    }

    #[test]
    fn empty_column_fails_attach() {
        let err = WaveColumnPositioner::new(
            WaveConfig::default(),
            spec(500.0, &[100.0]),
            spec(500.0, &[]),
            None,
        )
        .unwrap_err();
        assert_eq!(err, AttachError::EmptyColumn(Side::Right));
    }

    #[test]
    fn elements_start_at_progress_zero() {
        let positioner = WaveColumnPositioner::new(
            WaveConfig::default(),
            spec(500.0, &[100.0, 200.0]),
            spec(400.0, &[50.0, 150.0]),
            None,
        )
        .unwrap();

        assert_eq!(positioner.range(Side::Left), Range { min_x: 0.0, max_x: 300.0 });
        assert_eq!(positioner.range(Side::Right), Range { min_x: 0.0, max_x: 250.0 });
        assert_eq!(positioner.offsets(Side::Left)[0], 0.0);
        assert_eq!(positioner.offsets(Side::Right)[0], 0.0);
        assert!(positioner.is_settled());
    }

    #[test]
    fn resize_only_touches_range() {
        let mut positioner = WaveColumnPositioner::new(
            WaveConfig::default(),
            spec(500.0, &[100.0, 200.0]),
            spec(500.0, &[100.0, 200.0]),
            None,
        )
        .unwrap();
        let before = positioner.offsets(Side::Left);

        positioner.resize(Side::Left, 900.0, &[100.0, 200.0]);

        assert_eq!(positioner.range(Side::Left).max_x, 700.0);
        assert_eq!(positioner.offsets(Side::Left), before);
        assert_eq!(positioner.range(Side::Right).max_x, 300.0);
    }

    #[test]
    fn missing_images_are_padded() {
        let left = ColumnSpec {
            width: 300.0,
            element_widths: vec![10.0, 20.0, 30.0],
            images: vec![Some("a.jpg".into())],
        };
        let mut positioner =
            WaveColumnPositioner::new(WaveConfig::default(), left, spec(300.0, &[10.0]), None).unwrap();
        let geometry = FocusGeometry {
            centers: vec![0.0, 100.0, 500.0],
            viewport_height: 1000.0,
            wrapper_top: 0.0,
            wrapper_height: 600.0,
            thumbnail_height: 100.0,
        };

        let state = positioner.update(ScrollSample::new(0.5, 0.0), &geometry).unwrap();
        assert_eq!(state.focus, Focus { left: Some(2), right: Some(0) });
        assert_eq!(state.thumbnail.src, None);
    }
}
