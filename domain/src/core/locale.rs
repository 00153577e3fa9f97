//! Placeholder and label texts.
//!
//! The builder seeds new pages, questions and list items with localized
//! placeholders. Russian is the default locale.

use crate::survey::kind::QuestionKind;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Language of placeholder and label texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Title of a freshly added question.
    pub fn question_title(&self) -> &'static str {
        match self {
            Self::Ru => "Новый вопрос",
            Self::En => "New question",
        }
    }

    /// Title of the page synthesized when a draft has none.
    pub fn default_page_title(&self) -> &'static str {
        match self {
            Self::Ru => "Главная страница",
            Self::En => "Main page",
        }
    }

    /// Title of an added page without an explicit title; `n` is 1-based.
    pub fn numbered_page_title(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Страница {}", n),
            Self::En => format!("Page {}", n),
        }
    }

    pub fn option_label(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Вариант {}", n),
            Self::En => format!("Option {}", n),
        }
    }

    pub fn row_label(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Строка {}", n),
            Self::En => format!("Row {}", n),
        }
    }

    pub fn col_label(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Колонка {}", n),
            Self::En => format!("Column {}", n),
        }
    }

    pub fn ranking_item(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Пункт {}", n),
            Self::En => format!("Item {}", n),
        }
    }

    pub fn image_item(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Изображение {}", n),
            Self::En => format!("Image {}", n),
        }
    }

    /// Human-readable name of a question kind.
    ///
    /// Unknown kinds echo their raw tag.
    pub fn kind_label<'a>(&self, kind: &'a QuestionKind) -> Cow<'a, str> {
        let label = match (self, kind) {
            (_, QuestionKind::Other(raw)) => return Cow::Borrowed(raw.as_str()),
            (Self::Ru, QuestionKind::SingleChoice) => "Одиночный выбор",
            (Self::Ru, QuestionKind::MultipleChoice) => "Множественный выбор",
            (Self::Ru, QuestionKind::ImageChoice) => "Выбор изображения",
            (Self::Ru, QuestionKind::Text) => "Текстовый ответ",
            (Self::Ru, QuestionKind::Email) => "Ответ электронной почты",
            (Self::Ru, QuestionKind::Number) => "Числовой ответ",
            (Self::Ru, QuestionKind::Date) => "Ответ с датой",
            (Self::Ru, QuestionKind::Matrix) => "Матрица",
            (Self::Ru, QuestionKind::Ranking) => "Ранжирование",
            (Self::Ru, QuestionKind::Dropdown) => "Выпадающий список",
            (Self::En, QuestionKind::SingleChoice) => "Single choice",
            (Self::En, QuestionKind::MultipleChoice) => "Multiple choice",
            (Self::En, QuestionKind::ImageChoice) => "Image choice",
            (Self::En, QuestionKind::Text) => "Text answer",
            (Self::En, QuestionKind::Email) => "Email answer",
            (Self::En, QuestionKind::Number) => "Number answer",
            (Self::En, QuestionKind::Date) => "Date answer",
            (Self::En, QuestionKind::Matrix) => "Matrix",
            (Self::En, QuestionKind::Ranking) => "Ranking",
            (Self::En, QuestionKind::Dropdown) => "Dropdown",
        };
        Cow::Borrowed(label)
    }

    /// Advisory shown when deleting the last remaining page is refused.
    pub fn last_page_notice(&self) -> &'static str {
        match self {
            Self::Ru => "Нельзя удалить последнюю страницу",
            Self::En => "The last page cannot be deleted",
        }
    }

    pub fn required_label(&self) -> &'static str {
        match self {
            Self::Ru => "Обязательный",
            Self::En => "Required",
        }
    }

    pub fn question_heading(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("Вопрос {}", n),
            Self::En => format!("Question {}", n),
        }
    }

    pub fn question_count(&self, n: usize) -> String {
        match self {
            Self::Ru => format!("{} вопросов", n),
            Self::En => format!("{} questions", n),
        }
    }

    pub fn email_hint(&self) -> &'static str {
        match self {
            Self::Ru => "Ответ будет проверяться как email.",
            Self::En => "The answer will be validated as an email.",
        }
    }

    pub fn number_hint(&self) -> &'static str {
        match self {
            Self::Ru => "Ответ будет числом.",
            Self::En => "The answer will be a number.",
        }
    }

    pub fn date_hint(&self) -> &'static str {
        match self {
            Self::Ru => "Ответ будет датой.",
            Self::En => "The answer will be a date.",
        }
    }

    pub fn free_text_placeholder(&self) -> &'static str {
        match self {
            Self::Ru => "Текстовый ответ...",
            Self::En => "Text answer...",
        }
    }

    pub fn empty_page_hint(&self) -> &'static str {
        match self {
            Self::Ru => "На этой странице пока нет вопросов",
            Self::En => "This page has no questions yet",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale '{}'", other)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
