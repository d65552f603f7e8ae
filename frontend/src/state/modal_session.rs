//! State behind the embed dialog: what it shows and where focus goes back.
//!
//! The session is generic over the focus handle so the component can keep a
//! `web_sys::HtmlElement` while tests use plain values.

#[cfg(test)]
#[path = "modal_session_test.rs"]
mod modal_session_test;

/// Frame source after close. Loading it unloads whatever the embedded page
/// was doing (audio, timers).
pub const BLANK_FRAME: &str = "about:blank";
pub const DEFAULT_TITLE: &str = "Vista";

#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession<F> {
    open: bool,
    url: Option<String>,
    title: String,
    return_focus: Option<F>,
}

impl<F> Default for ModalSession<F> {
    fn default() -> Self {
        Self {
            open: false,
            url: None,
            title: DEFAULT_TITLE.to_string(),
            return_focus: None,
        }
    }
}

impl<F> ModalSession<F> {
    /// Shows `url`. Opening an already open dialog only swaps the content;
    /// focus still returns to whatever had it before the first open.
    pub fn open(&mut self, url: impl Into<String>, title: impl Into<String>, focused: Option<F>) {
        if !self.open {
            self.return_focus = focused;
        }
        self.open = true;
        self.url = Some(url.into());
        self.title = title.into();
    }

    /// Hides the dialog and hands back the element to refocus, if any.
    /// Closing a closed dialog changes nothing.
    pub fn close(&mut self) -> Option<F> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.url = None;
        self.return_focus.take()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The URL currently loaded, while open.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn frame_src(&self) -> &str {
        self.url.as_deref().unwrap_or(BLANK_FRAME)
    }
}

/// Title for a `data-modal-url` link: explicit `data-modal-title`, then the
/// link's visible text, then [`DEFAULT_TITLE`].
pub fn resolve_title(attr: Option<&str>, text: Option<&str>) -> String {
    [attr, text]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}
