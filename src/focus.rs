//! Focus tracking: which element sits at the viewport's vertical centre, and
//! where the synced thumbnail goes.

/// Index of the centre closest to `viewport_mid`. Ties go to the lowest index.
pub fn nearest_to_center(centers: &[f64], viewport_mid: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, center) in centers.iter().enumerate() {
        let distance = (center - viewport_mid).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Vertical offset of the thumbnail inside its wrapper so that it tracks the
/// viewport centre.
///
/// Half of the thumbnail may hang over either end of the wrapper, which lets
/// the first and last items still line up with it.
pub fn thumbnail_y(viewport_mid: f64, wrapper_top: f64, wrapper_height: f64, thumb_height: f64) -> f64 {
    let half = thumb_height / 2.0;
    let y = viewport_mid - wrapper_top - half;
    let lower = -half;
    let upper = (wrapper_height - half).max(lower);
    y.clamp(lower, upper)
}
