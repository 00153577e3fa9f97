//! Built-in survey templates.
//!
//! A template is a static description of pages and questions. Building it
//! assigns fresh identifiers throughout and makes the first page current, so
//! the result can seed a new draft through the bootstrap payload.

use crate::core::error::RecordError;
use crate::core::locale::Locale;
use crate::survey::draft::Draft;
use crate::survey::kind::QuestionKind;
use crate::survey::page::Page;
use crate::survey::question::Question;
use crate::survey::record::encode_record;

/// A question inside a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateQuestion {
    pub kind: &'static str,
    pub title: &'static str,
    pub required: bool,
    pub options: &'static [&'static str],
}

/// A page inside a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplatePage {
    pub title: &'static str,
    pub questions: &'static [TemplateQuestion],
}

/// A ready-made survey to start from.
#[derive(Debug, Clone, Copy)]
pub struct SurveyTemplate {
    pub id: &'static str,
    pub title: &'static str,
    /// Survey name used when the user did not pick one.
    pub default_name: &'static str,
    pub pages: &'static [TemplatePage],
}

const fn question(
    kind: &'static str,
    title: &'static str,
    required: bool,
    options: &'static [&'static str],
) -> TemplateQuestion {
    TemplateQuestion {
        kind,
        title,
        required,
        options,
    }
}

static TEMPLATES: [SurveyTemplate; 3] = [
    SurveyTemplate {
        id: "feedback_form",
        title: "Feedback Form",
        default_name: "Feedback Form",
        pages: &[TemplatePage {
            title: "Главная страница",
            questions: &[
                question("text", "Ваше имя", true, &[]),
                question("email", "Email", true, &[]),
                question("single_choice", "Оценка", true, &["1", "2", "3", "4", "5"]),
                question("text", "Комментарий", false, &[]),
            ],
        }],
    },
    SurveyTemplate {
        id: "event_registration",
        title: "Event Registration",
        default_name: "Event Registration",
        pages: &[TemplatePage {
            title: "Регистрация",
            questions: &[
                question("text", "Имя", true, &[]),
                question("email", "Email", true, &[]),
                question(
                    "single_choice",
                    "Вы будете участвовать?",
                    true,
                    &["Да", "Нет"],
                ),
            ],
        }],
    },
    SurveyTemplate {
        id: "simple_survey",
        title: "Simple Survey",
        default_name: "Simple Survey",
        pages: &[TemplatePage {
            title: "Опрос",
            questions: &[question(
                "single_choice",
                "Какой вариант вы выбираете?",
                true,
                &["Вариант 1", "Вариант 2", "Вариант 3"],
            )],
        }],
    },
];

/// All built-in templates.
pub fn builtin_templates() -> &'static [SurveyTemplate] {
    &TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static SurveyTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl SurveyTemplate {
    /// Builds a draft with fresh ids, the first page current.
    pub fn build_draft(&self, locale: Locale) -> Draft {
        let pages = self
            .pages
            .iter()
            .map(|page| {
                let title = if page.title.is_empty() {
                    locale.default_page_title()
                } else {
                    page.title
                };
                let questions = page
                    .questions
                    .iter()
                    .map(|q| {
                        Question::with_options(
                            QuestionKind::from(q.kind),
                            q.title,
                            q.required,
                            q.options.iter().map(|o| o.to_string()).collect(),
                        )
                    })
                    .collect();
                Page::new(title).with_questions(questions)
            })
            .collect();

        Draft::from_pages(pages)
    }

    /// Serializes [`SurveyTemplate::build_draft`] as a bootstrap payload.
    pub fn to_payload(&self, locale: Locale) -> Result<String, RecordError> {
        encode_record(&self.build_draft(locale))
    }

    /// Survey name to use for a draft created from this template.
    ///
    /// An empty request, or one equal to the generic default name, is
    /// replaced by the template's own default name.
    pub fn resolve_survey_name(&self, requested: &str, generic_default: &str) -> String {
        if requested.trim().is_empty() || requested == generic_default {
            self.default_name.to_string()
        } else {
            requested.to_string()
        }
    }

    /// Kinds used anywhere in the template.
    pub fn kinds(&self) -> impl Iterator<Item = QuestionKind> + '_ {
        self.pages
            .iter()
            .flat_map(|p| p.questions.iter())
            .map(|q| QuestionKind::from(q.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::question::LabelList;
    use crate::survey::record::decode_template;

    #[test]
    fn test_catalog_ids() {
        let ids: Vec<_> = builtin_templates().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            ["feedback_form", "event_registration", "simple_survey"]
        );
        assert!(find_template("nope").is_none());
    }

    #[test]
    fn test_templates_use_known_kinds() {
        for template in builtin_templates() {
            assert!(template.kinds().all(|k| k.is_known()), "{}", template.id);
        }
    }

    #[test]
    fn test_build_draft() {
        let template = find_template("feedback_form").unwrap();
        let draft = template.build_draft(Locale::Ru);

        assert!(draft.is_consistent());
        assert_eq!(draft.pages().len(), 1);
        assert_eq!(draft.current_page_id(), Some(draft.pages()[0].id()));

        let questions = draft.current_questions();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[1].kind(), &QuestionKind::Email);
        assert!(questions[2].required);
        assert_eq!(
            questions[2].labels(LabelList::Options).unwrap(),
            ["1", "2", "3", "4", "5"]
        );
        assert!(!questions[3].required);
    }

    #[test]
    fn test_every_template_builds_in_full() {
        for template in builtin_templates() {
            let draft = template.build_draft(Locale::Ru);
            assert!(draft.is_consistent(), "{}", template.id);
            assert_eq!(draft.pages().len(), template.pages.len());
            for (page, source) in draft.pages().iter().zip(template.pages) {
                assert_eq!(page.title, source.title);
                assert_eq!(page.questions().len(), source.questions.len());
                for (q, source) in page.questions().iter().zip(source.questions) {
                    assert_eq!(q.kind().as_str(), source.kind);
                    assert_eq!(q.title, source.title);
                    assert_eq!(q.required, source.required);
                }
            }
        }
    }

    #[test]
    fn test_builds_get_fresh_ids() {
        let template = find_template("simple_survey").unwrap();
        let a = template.build_draft(Locale::Ru);
        let b = template.build_draft(Locale::Ru);
        assert_ne!(a.pages()[0].id(), b.pages()[0].id());
    }

    #[test]
    fn test_payload_is_accepted_as_template() {
        let template = find_template("event_registration").unwrap();
        let payload = template.to_payload(Locale::Ru).unwrap();
        let draft = decode_template(&payload, Locale::Ru).unwrap();
        assert_eq!(draft.pages()[0].title, "Регистрация");
        assert_eq!(draft.current_questions().len(), 3);
    }

    #[test]
    fn test_resolve_survey_name() {
        let template = find_template("simple_survey").unwrap();
        assert_eq!(
            template.resolve_survey_name("", "Новый опрос"),
            "Simple Survey"
        );
        assert_eq!(
            template.resolve_survey_name("Новый опрос", "Новый опрос"),
            "Simple Survey"
        );
        assert_eq!(
            template.resolve_survey_name("Team poll", "Новый опрос"),
            "Team poll"
        );
    }
}
