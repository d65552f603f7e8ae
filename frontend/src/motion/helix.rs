//! Placement math for the allies "helix".
//!
//! Every item sits on a vertically scrolling column and swings left/right on
//! a sine wave; the cosine of the same phase is used as a depth cue that
//! drives scale, opacity, blur and stacking so the flat layout reads as a
//! rotating double helix. Everything here is a closed-form function of the
//! frame time, so a frame can be recomputed from scratch at any `t`.

#[cfg(test)]
#[path = "helix_test.rs"]
mod helix_test;

/// Fewer items than this leave visible holes in the wave.
pub const MIN_ITEMS: usize = 14;
pub const MAX_PADDING_PASSES: usize = 10;

/// px/s
const SCROLL_SPEED: f64 = 12.0;
/// rad/s
const WAVE_SPEED: f64 = 0.85;
const PHASE_STEP: f64 = 0.72;
const MIN_GAP: f64 = 18.0;
const MAX_AMPLITUDE: f64 = 210.0;

/// Used when the viewport reports a zero size (not laid out yet).
pub const FALLBACK_HEIGHT: f64 = 260.0;
pub const FALLBACK_WIDTH: f64 = 900.0;

/// Repeats the authored items, in order, until there are at least
/// [`MIN_ITEMS`]. Each pass clones a snapshot of the list so far; the pass
/// limit keeps an empty list from spinning forever.
pub fn pad_items<T: Clone>(authored: &[T]) -> Vec<T> {
    let mut items = authored.to_vec();
    let mut passes = 0;
    while items.len() < MIN_ITEMS && passes < MAX_PADDING_PASSES {
        let snapshot = items.clone();
        for item in snapshot {
            if items.len() >= MIN_ITEMS {
                break;
            }
            items.push(item);
        }
        passes += 1;
    }
    items
}

/// Items to render: padded for the animated helix, exactly as authored for
/// the static layout.
pub fn displayed_items<T: Clone>(authored: &[T], animated: bool) -> Vec<T> {
    if animated {
        pad_items(authored)
    } else {
        authored.to_vec()
    }
}

/// Geometry shared by every item for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixFrame {
    t: f64,
    height: f64,
    gap: f64,
    base: f64,
    amplitude: f64,
}

impl HelixFrame {
    /// `t_secs` is the frame time in seconds; `count` is the padded item
    /// count. Non-positive dimensions fall back to the static defaults.
    pub fn new(t_secs: f64, height: f64, width: f64, count: usize) -> Self {
        let height = if height > 0.0 { height } else { FALLBACK_HEIGHT };
        let width = if width > 0.0 { width } else { FALLBACK_WIDTH };
        let count = count.max(1) as f64;

        let gap = MIN_GAP.max((height + 50.0) / count);
        let base = (t_secs * SCROLL_SPEED).rem_euclid(height + gap);
        let amplitude = (width * 0.24).min(MAX_AMPLITUDE);

        Self { t: t_secs, height, gap, base, amplitude }
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn place(&self, index: usize) -> HelixPlacement {
        let i = index as f64;
        let span = self.height + self.gap;
        let y = (i * self.gap + self.base).rem_euclid(span) - self.gap / 2.0;

        let phase = self.t * WAVE_SPEED + i * PHASE_STEP;
        let x = phase.sin() * self.amplitude;
        let depth = (phase.cos() + 1.0) / 2.0;

        HelixPlacement {
            x,
            y,
            scale: 0.75 + depth * 0.75,
            opacity: 0.40 + depth * 0.60,
            z_index: (depth * 100.0).round() as i32,
            blur: (1.0 - depth) * 0.9,
            rotate: phase.sin() * 6.0,
        }
    }
}

/// Where one item sits in a frame, in px / deg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixPlacement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub blur: f64,
    pub rotate: f64,
}

impl HelixPlacement {
    pub fn transform_css(&self) -> String {
        format!(
            "translate(-50%, -50%) translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn z_index_css(&self) -> String {
        self.z_index.to_string()
    }

    pub fn filter_css(&self) -> String {
        format!("blur({}px)", self.blur)
    }
}
