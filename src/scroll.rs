//! Scroll progress through the pinned wave section.

/// One scroll observation fed into the positioner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Normalised progress through the track, `0.0..=1.0`.
    pub progress: f64,
    /// Timestamp of the observation in milliseconds.
    pub time_ms: f64,
}

impl ScrollSample {
    pub fn new(progress: f64, time_ms: f64) -> Self {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        Self { progress, time_ms }
    }
}

/// Geometry of the tracked section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Distance from the viewport top to the section top.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl TrackGeometry {
    /// Progress runs from 0 when the section's top reaches the viewport top
    /// to 1 when its bottom reaches the viewport bottom.
    pub fn progress(&self) -> f64 {
        let distance = self.height - self.viewport_height;
        if distance <= 0.0 {
            return if self.top > 0.0 { 0.0 } else { 1.0 };
        }
        (-self.top / distance).clamp(0.0, 1.0)
    }
}
