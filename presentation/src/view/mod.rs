//! Draft view models
//!
//! The draft is projected wholesale into plain view structs after every
//! mutation; sinks decide how to draw them. Nothing here touches a terminal.

mod model;
mod projection;
mod sink;

pub use model::{
    CardBody, ChoiceMarker, DraftView, PageItemView, PageListView, QuestionCardView,
    QuestionListView,
};
pub use projection::{render_draft, render_pages, render_questions};
pub use sink::{LatestView, ViewModelRenderer, ViewSink};
