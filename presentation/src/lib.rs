//! Presentation layer for pollstream
//!
//! This crate contains the pure draft-to-view projection, the view sinks
//! that draw it, output formatters and the CLI definitions.

pub mod cli;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::{ConsoleFormatter, ConsoleSink};
pub use output::json::JsonFormatter;
pub use view::{
    CardBody, ChoiceMarker, DraftView, LatestView, PageItemView, PageListView, QuestionCardView,
    QuestionListView, ViewModelRenderer, ViewSink, render_draft, render_pages, render_questions,
};
