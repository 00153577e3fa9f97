//! Render port
//!
//! Defines how the controller hands the draft to whatever draws it.

use pollstream_domain::{Draft, DraftError, Locale};
use serde::Serialize;

/// A user-facing advisory message.
///
/// Raised only when a structural mutation is refused, never for internal
/// targeting slips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Notice for `error`, if it is one the user should see.
    pub fn for_error(error: &DraftError, locale: Locale) -> Option<Self> {
        match error {
            DraftError::LastPage => Some(Self::new(locale.last_page_notice())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Callback for redrawing the draft
///
/// Implementations live in the presentation layer. `render` is invoked with
/// the whole draft after every applied mutation, once the draft has been
/// written to storage.
pub trait DraftRenderer {
    /// Redraw everything from `draft`.
    fn render(&self, draft: &Draft);

    /// Show an advisory message.
    fn notify(&self, _notice: &Notice) {}
}

/// No-op renderer for when nothing is drawn
pub struct NoRender;

impl DraftRenderer for NoRender {
    fn render(&self, _draft: &Draft) {}
}

impl<R: DraftRenderer + ?Sized> DraftRenderer for &R {
    fn render(&self, draft: &Draft) {
        (**self).render(draft)
    }

    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}
