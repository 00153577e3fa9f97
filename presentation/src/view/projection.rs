//! Pure projections from [`Draft`] to view models.

use super::model::{
    CardBody, ChoiceMarker, DraftView, PageItemView, PageListView, QuestionCardView,
    QuestionListView,
};
use pollstream_domain::{Draft, Locale, Question, QuestionBody, QuestionKind};

/// Page list with the current page highlighted.
pub fn render_pages(draft: &Draft) -> PageListView {
    let current = draft.current_page_id();
    let deletable = draft.pages().len() > 1;

    let items = draft
        .pages()
        .iter()
        .map(|page| {
            let active = Some(page.id()) == current;
            PageItemView {
                id: page.id().to_string(),
                title: page.title.clone(),
                active,
                title_editable: active,
                deletable,
                question_count: page.questions().len(),
            }
        })
        .collect();

    PageListView { items }
}

/// Question cards of the current page.
pub fn render_questions(draft: &Draft, locale: Locale) -> QuestionListView {
    let cards: Vec<_> = draft
        .current_questions()
        .iter()
        .enumerate()
        .map(|(i, question)| card(question, i + 1, locale))
        .collect();

    QuestionListView {
        empty: cards.is_empty(),
        cards,
    }
}

pub fn render_draft(draft: &Draft, locale: Locale) -> DraftView {
    DraftView {
        pages: render_pages(draft),
        questions: render_questions(draft, locale),
    }
}

fn card(question: &Question, number: usize, locale: Locale) -> QuestionCardView {
    QuestionCardView {
        id: question.id().to_string(),
        number,
        kind: question.kind().as_str().to_string(),
        kind_label: locale.kind_label(question.kind()).into_owned(),
        title: question.title.clone(),
        required: question.required,
        body: card_body(question, locale),
    }
}

fn card_body(question: &Question, locale: Locale) -> CardBody {
    match question.body() {
        QuestionBody::Choice { options } => CardBody::Choice {
            marker: if *question.kind() == QuestionKind::MultipleChoice {
                ChoiceMarker::Square
            } else {
                ChoiceMarker::Round
            },
            options: options.clone(),
        },
        QuestionBody::Matrix { rows, cols } => CardBody::Matrix {
            rows: rows.clone(),
            cols: cols.clone(),
        },
        QuestionBody::Scalar => match question.kind() {
            QuestionKind::Email => hint(locale.email_hint()),
            QuestionKind::Number => hint(locale.number_hint()),
            QuestionKind::Date => hint(locale.date_hint()),
            _ => CardBody::FreeText {
                placeholder: locale.free_text_placeholder().to_string(),
            },
        },
    }
}

fn hint(text: &str) -> CardBody {
    CardBody::Hint {
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollstream_domain::{RecordError, decode_record};
    use serde_json::json;

    fn draft_from(value: serde_json::Value) -> Result<Draft, RecordError> {
        decode_record(&value.to_string(), Locale::Ru).map(|d| d.into_draft())
    }

    #[test]
    fn test_render_pages_marks_current_and_counts() {
        let draft = draft_from(json!({
            "pages": [
                {"id": "p1", "title": "Первая", "questions": [{"id": "q1", "kind": "text"}]},
                {"id": "p2", "title": "Вторая", "questions": []}
            ],
            "currentPageId": "p2"
        }))
        .unwrap();

        let view = render_pages(&draft);
        assert_eq!(view.items.len(), 2);

        let first = &view.items[0];
        assert_eq!(first.id, "p1");
        assert!(!first.active);
        assert!(!first.title_editable);
        assert!(first.deletable);
        assert_eq!(first.question_count, 1);

        let second = &view.items[1];
        assert!(second.active);
        assert!(second.title_editable);
        assert_eq!(second.question_count, 0);
    }

    #[test]
    fn test_single_page_is_not_deletable() {
        let draft = Draft::with_default_page(Locale::Ru);
        let view = render_pages(&draft);
        assert_eq!(view.items.len(), 1);
        assert!(!view.items[0].deletable);
        assert!(view.items[0].active);
        assert_eq!(view.items[0].title, "Главная страница");
    }

    #[test]
    fn test_empty_page_signals_empty_state() {
        let draft = Draft::with_default_page(Locale::Ru);
        let view = render_questions(&draft, Locale::Ru);
        assert!(view.empty);
        assert!(view.cards.is_empty());
    }

    #[test]
    fn test_cards_follow_kind_layouts() {
        let draft = draft_from(json!({
            "pages": [{"id": "p1", "title": "P", "questions": [
                {"id": "a", "kind": "single_choice", "title": "A", "required": true,
                 "options": ["x", "y"]},
                {"id": "b", "kind": "multiple_choice", "title": "B", "options": ["z"]},
                {"id": "c", "kind": "matrix", "title": "C", "rows": ["r"], "cols": ["c1", "c2"]},
                {"id": "d", "kind": "email", "title": "D"},
                {"id": "e", "kind": "text", "title": "E"},
                {"id": "f", "kind": "slider", "title": "F"}
            ]}],
            "currentPageId": "p1"
        }))
        .unwrap();

        let view = render_questions(&draft, Locale::Ru);
        assert!(!view.empty);
        assert_eq!(view.cards.len(), 6);

        let a = &view.cards[0];
        assert_eq!(a.number, 1);
        assert_eq!(a.kind_label, "Одиночный выбор");
        assert!(a.required);
        assert_eq!(
            a.body,
            CardBody::Choice {
                marker: ChoiceMarker::Round,
                options: vec!["x".to_string(), "y".to_string()],
            }
        );

        assert!(matches!(
            view.cards[1].body,
            CardBody::Choice {
                marker: ChoiceMarker::Square,
                ..
            }
        ));
        assert_eq!(
            view.cards[2].body,
            CardBody::Matrix {
                rows: vec!["r".to_string()],
                cols: vec!["c1".to_string(), "c2".to_string()],
            }
        );
        assert_eq!(
            view.cards[3].body,
            CardBody::Hint {
                text: Locale::Ru.email_hint().to_string()
            }
        );
        assert!(matches!(view.cards[4].body, CardBody::FreeText { .. }));

        let unknown = &view.cards[5];
        assert_eq!(unknown.kind_label, "slider");
        assert!(matches!(unknown.body, CardBody::FreeText { .. }));
        assert_eq!(unknown.number, 6);
    }

    #[test]
    fn test_only_current_page_questions_are_rendered() {
        let draft = draft_from(json!({
            "pages": [
                {"id": "p1", "title": "One", "questions": [{"id": "q1", "kind": "text"}]},
                {"id": "p2", "title": "Two", "questions": [{"id": "q2", "kind": "date"}]}
            ],
            "currentPageId": "p2"
        }))
        .unwrap();

        let view = render_draft(&draft, Locale::En);
        assert_eq!(view.questions.cards.len(), 1);
        assert_eq!(view.questions.cards[0].id, "q2");
        assert_eq!(view.questions.cards[0].kind_label, "Date answer");
    }

    #[test]
    fn test_view_serializes_with_layout_tag() {
        let mut draft = Draft::with_default_page(Locale::Ru);
        draft.add_question("number".into(), Locale::Ru).unwrap();

        let value = serde_json::to_value(render_draft(&draft, Locale::Ru)).unwrap();
        assert_eq!(value["questions"]["cards"][0]["body"]["layout"], "hint");
        assert_eq!(value["questions"]["empty"], false);
        assert_eq!(value["pages"]["items"][0]["active"], true);
    }
}
