/// The query being normalized.
///
/// Words are appended in the order their tokens were encountered, accepted and corrected words alike.
pub trait Query {
    fn get_text(&self) -> &str;

    fn add_word(&mut self, word: String);
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    words: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            words: Vec::new(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn corrected_text(&self) -> String {
        self.words.join(" ")
    }
}

impl Query for SearchQuery {
    fn get_text(&self) -> &str {
        &self.text
    }

    fn add_word(&mut self, word: String) {
        self.words.push(word);
    }
}
