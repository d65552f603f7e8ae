//! Counter easing and the one-shot hero trigger.
//!
//! The stats strip counts each `data-counter` element up from zero with a
//! cubic ease-out, and only the first time the hero becomes visible enough.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Fast start, slow finish: `1 - (1-p)^3`, `p` clamped to `[0, 1]`.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fraction of the animation elapsed. A zero duration is already done.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Value shown at progress `p` when counting from 0 to `target`.
pub fn counter_value(target: i64, p: f64) -> i64 {
    (target as f64 * ease_out_cubic(p)).round() as i64
}

/// Reads a `data-counter` attribute. Anything unparsable counts to 0.
pub fn parse_target(attr: Option<&str>) -> i64 {
    attr.map(str::trim)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map_or(0, |value| value.round() as i64)
}

/// Latch that fires once, the first time the observed ratio reaches the
/// threshold. Later observations never fire again.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroTrigger {
    threshold: f64,
    fired: bool,
}

impl HeroTrigger {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, fired: false }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feeds one intersection ratio, returns `true` only on the firing call.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}
