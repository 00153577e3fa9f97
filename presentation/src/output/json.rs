//! JSON output for the draft view

use crate::view::DraftView;
use pollstream_application::Notice;
use serde::Serialize;

/// Formats views as JSON
pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed view, with any notices raised while producing it
    pub fn format(view: &DraftView, notices: &[Notice]) -> String {
        #[derive(Serialize)]
        struct Envelope<'a> {
            view: &'a DraftView,
            notices: &'a [Notice],
        }

        serde_json::to_string_pretty(&Envelope { view, notices })
            .unwrap_or_else(|_| "{}".to_string())
    }
}
