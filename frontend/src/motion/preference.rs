use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The visitor's motion preference, resolved once when the app starts and
/// handed down through context so components never query the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub fn detect() -> Self {
        let reduced = window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map_or(false, |query| query.matches());
        Self { reduced }
    }

    pub fn allows_animation(&self) -> bool {
        !self.reduced
    }
}
