use glam::Vec3;

/// Distance below which a damped value snaps onto its target.
pub const DEFAULT_EPS: f32 = 0.001;

const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Fraction of the remaining distance left after one step.
///
/// `x = omega * delta`; the polynomial is the usual fast approximation of
/// `e^-x` and stays in `(0, 1]` for every `x >= 0`.
#[inline]
pub fn decay_factor(smooth_time: f32, delta: f32) -> f32 {
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let x = omega * delta.max(0.0);
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Exponentially approach `target` from `current`.
///
/// Smaller `smooth_time` converges faster. Never overshoots.
#[inline]
pub fn damp(current: f32, target: f32, smooth_time: f32, delta: f32) -> f32 {
    damp_with_eps(current, target, smooth_time, delta, DEFAULT_EPS)
}

#[inline]
pub fn damp_with_eps(current: f32, target: f32, smooth_time: f32, delta: f32, eps: f32) -> f32 {
    if (current - target).abs() <= eps {
        return target;
    }
    let next = target + (current - target) * decay_factor(smooth_time, delta);
    if (next - target).abs() <= eps {
        target
    } else {
        next
    }
}

/// Component-wise [`damp`].
#[inline]
pub fn damp3(current: Vec3, target: Vec3, smooth_time: f32, delta: f32) -> Vec3 {
    Vec3::new(
        damp(current.x, target.x, smooth_time, delta),
        damp(current.y, target.y, smooth_time, delta),
        damp(current.z, target.z, smooth_time, delta),
    )
}
