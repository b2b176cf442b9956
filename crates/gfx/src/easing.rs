//! Easing curves for the caret transition.

/// Animation progress in `0.0..=1.0`. A non-positive duration is already done.
pub fn progress(elapsed: f32, total: f32) -> f32 {
    if total <= 0.0 {
        return 1.0;
    }
    (elapsed / total).clamp(0.0, 1.0)
}

/// Starts fast and gradually slows down.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Interpolates between two values using an easing function.
pub fn interpolate(from: f32, to: f32, progress: f32, easing_fn: fn(f32) -> f32) -> f32 {
    from + (to - from) * easing_fn(progress)
}
