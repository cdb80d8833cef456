use serde::Deserialize;
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_option_number_from_string,
};

// the trivia frontend sends ids as numbers in some places and as numeric strings in others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LooseId(#[serde(deserialize_with = "deserialize_number_from_string")] pub i64);

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
}

impl QuestionsBody {
    /// A non-empty `searchTerm` turns the request into a search.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: LooseId,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<LooseId>,
}
