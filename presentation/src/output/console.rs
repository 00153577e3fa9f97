//! Console output for the draft view

use crate::view::{CardBody, ChoiceMarker, DraftView, QuestionCardView, ViewSink};
use colored::Colorize;
use pollstream_application::Notice;
use pollstream_domain::{Locale, QuestionKind, SurveyTemplate};

/// Formats views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete builder view
    pub fn format(view: &DraftView, locale: Locale) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Pages"));
        for item in &view.pages.items {
            let marker = if item.active { "▸" } else { " " };
            let title = if item.active {
                item.title.bold().to_string()
            } else {
                item.title.normal().to_string()
            };
            output.push_str(&format!(
                "{} {} {} {}\n",
                marker.green().bold(),
                title,
                format!("({})", locale.question_count(item.question_count)).dimmed(),
                item.id.dimmed()
            ));
        }

        output.push_str(&Self::section_header("Questions"));
        if view.questions.empty {
            output.push_str(&format!("  {}\n", locale.empty_page_hint().dimmed()));
        }
        for card in &view.questions.cards {
            output.push_str(&Self::card(card, locale));
        }

        output
    }

    /// Format an advisory message
    pub fn format_notice(notice: &Notice) -> String {
        format!("{} {}", "!".yellow().bold(), notice.message.yellow())
    }

    /// Known question kinds with their wire names
    pub fn format_kinds(locale: Locale) -> String {
        let mut output = Self::section_header("Question kinds");
        for kind in &QuestionKind::KNOWN {
            output.push_str(&format!(
                "  {:<16} {}\n",
                kind.as_str().cyan(),
                locale.kind_label(kind)
            ));
        }
        output
    }

    /// Built-in templates and their page/question counts
    pub fn format_templates(templates: &[SurveyTemplate]) -> String {
        let mut output = Self::section_header("Templates");
        for template in templates {
            let questions: usize = template.pages.iter().map(|p| p.questions.len()).sum();
            output.push_str(&format!(
                "  {:<20} {} {}\n",
                template.id.cyan(),
                template.title,
                format!("[{} pages, {} questions]", template.pages.len(), questions).dimmed()
            ));
        }
        output
    }

    fn card(card: &QuestionCardView, locale: Locale) -> String {
        let mut output = format!(
            "\n{} {} {}\n",
            format!("{}.", card.number).yellow().bold(),
            card.title.bold(),
            format!("[{}]", card.kind_label).cyan()
        );
        if card.required {
            output.push_str(&format!("   {}\n", locale.required_label().red()));
        }

        match &card.body {
            CardBody::Choice { marker, options } => {
                let bullet = match marker {
                    ChoiceMarker::Round => "○",
                    ChoiceMarker::Square => "□",
                };
                for (i, option) in options.iter().enumerate() {
                    output.push_str(&format!("   {} {} {}\n", bullet, index(i), option));
                }
            }
            CardBody::Matrix { rows, cols } => {
                let cols: Vec<String> = cols
                    .iter()
                    .enumerate()
                    .map(|(i, col)| format!("{} {}", index(i), col))
                    .collect();
                output.push_str(&format!("   {} {}\n", "cols:".dimmed(), cols.join(" | ")));
                for (i, row) in rows.iter().enumerate() {
                    output.push_str(&format!("   {} {}\n", index(i), row));
                }
            }
            CardBody::Hint { text } => {
                output.push_str(&format!("   {}\n", text.dimmed()));
            }
            CardBody::FreeText { placeholder } => {
                output.push_str(&format!("   {}\n", placeholder.dimmed().italic()));
            }
        }
        output.push_str(&format!("   {}\n", card.id.dimmed()));

        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

/// Sink that prints every applied view to stdout
pub struct ConsoleSink {
    locale: Locale,
}

/// Position label for option/row/col lists, as taken by the `*-option`,
/// `*-row` and `*-col` commands.
fn index(i: usize) -> String {
    format!("#{}", i).dimmed().to_string()
}

impl ConsoleSink {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl ViewSink for ConsoleSink {
    fn apply(&self, view: &DraftView) {
        print!("{}", ConsoleFormatter::format(view, self.locale));
    }

    fn notice(&self, notice: &Notice) {
        eprintln!("{}", ConsoleFormatter::format_notice(notice));
    }
}
