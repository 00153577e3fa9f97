//! View sinks and the renderer adapter that feeds them.

use super::model::DraftView;
use super::projection::render_draft;
use pollstream_application::{DraftRenderer, Notice};
use pollstream_domain::{Draft, Locale};
use std::cell::{Cell, RefCell};

/// Applies a projected view to some output surface
pub trait ViewSink {
    /// Replace whatever is shown with `view`.
    fn apply(&self, view: &DraftView);

    /// Show an advisory message.
    fn notice(&self, _notice: &Notice) {}
}

/// [`DraftRenderer`] that projects the draft and hands the view to a sink
pub struct ViewModelRenderer<S: ViewSink> {
    sink: S,
    locale: Locale,
}

impl<S: ViewSink> ViewModelRenderer<S> {
    pub fn new(sink: S, locale: Locale) -> Self {
        Self { sink, locale }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ViewSink> DraftRenderer for ViewModelRenderer<S> {
    fn render(&self, draft: &Draft) {
        self.sink.apply(&render_draft(draft, self.locale));
    }

    fn notify(&self, notice: &Notice) {
        self.sink.notice(notice);
    }
}

/// Sink that keeps only the most recent view and every notice
///
/// Used by one-shot commands that print once at exit instead of on every
/// redraw.
#[derive(Debug, Default)]
pub struct LatestView {
    view: RefCell<Option<DraftView>>,
    notices: RefCell<Vec<Notice>>,
    applied: Cell<usize>,
}

impl LatestView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<DraftView> {
        self.view.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// How many times a view was applied.
    pub fn applied(&self) -> usize {
        self.applied.get()
    }
}

impl ViewSink for LatestView {
    fn apply(&self, view: &DraftView) {
        *self.view.borrow_mut() = Some(view.clone());
        self.applied.set(self.applied.get() + 1);
    }

    fn notice(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

impl<T: ViewSink + ?Sized> ViewSink for &T {
    fn apply(&self, view: &DraftView) {
        (**self).apply(view)
    }

    fn notice(&self, notice: &Notice) {
        (**self).notice(notice)
    }
}
