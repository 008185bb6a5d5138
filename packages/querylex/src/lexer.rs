use log::debug;
use serde::Serialize;

use querylex_common::query::Query;
use querylex_common::similarity::similarity;
use querylex_common::vocabulary::KeywordSource;
use querylex_common::words::{count_words, AlphabeticRuns};
use querylex_common::{CorrectionConfig, MINIMAL_DISTANCE};

use crate::i_debug;

pub static INITIAL_CONFIDENCE_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectedToken {
    /// The word emitted into the query, the keyword if corrected
    pub term: String,
    pub original_term: String,
    /// Best similarity of the original term against the vocabulary
    pub similarity: f64,
    pub is_corrected: bool,
}

/// Corrects the words of a query towards a vocabulary,
/// docking its confidence score for every correction made.
///
/// The score is never reset, so one lexer should be used per query.
pub struct Lexer {
    config: CorrectionConfig,
    confidence_score: f64,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(CorrectionConfig::default())
    }
}

impl Lexer {
    pub fn new(config: CorrectionConfig) -> Self {
        Lexer {
            config,
            confidence_score: INITIAL_CONFIDENCE_SCORE,
        }
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn tokenize_and_correct(
        &mut self,
        query_text: &str,
        vocabulary: &dyn KeywordSource,
    ) -> Vec<CorrectedToken> {
        let num_words = count_words(query_text);
        if num_words == 0 {
            debug!("No words to correct in query {:?}", query_text);
            return Vec::new();
        }

        let penalty = self.config.lexical_penalty_percentage / num_words as f64;

        AlphabeticRuns::new(query_text)
            .map(|(_, token)| self.correct_token(token, vocabulary, penalty))
            .collect()
    }

    /// Corrects the query's text, adding every resulting word to the query.
    pub fn correct_query(
        &mut self,
        query: &mut dyn Query,
        vocabulary: &dyn KeywordSource,
    ) -> Vec<CorrectedToken> {
        let tokens = self.tokenize_and_correct(query.get_text(), vocabulary);

        for token in tokens.iter() {
            query.add_word(token.term.clone());
        }

        tokens
    }

    fn correct_token(
        &mut self,
        token: &str,
        vocabulary: &dyn KeywordSource,
        penalty: f64,
    ) -> CorrectedToken {
        let (best_keyword, max_similarity) = get_best_keyword(token, vocabulary);

        let unchanged = CorrectedToken {
            term: token.to_owned(),
            original_term: token.to_owned(),
            similarity: max_similarity,
            is_corrected: false,
        };

        if max_similarity - MINIMAL_DISTANCE < self.config.eps {
            return unchanged;
        }

        match best_keyword {
            Some(keyword) if keyword != token => {
                let deduction = ((max_similarity - MINIMAL_DISTANCE) / (1.0 - MINIMAL_DISTANCE)) * penalty;
                self.confidence_score -= deduction;

                debug!(
                    "Corrected {} to {} ({:.4}), confidence -{:.4} to {:.4}",
                    token, keyword, max_similarity, deduction, self.confidence_score,
                );

                CorrectedToken {
                    term: keyword.to_owned(),
                    is_corrected: true,
                    ..unchanged
                }
            }
            // Exact vocabulary hit
            _ => unchanged,
        }
    }
}

/// Scans the vocabulary in order, the first keyword wins ties.
fn get_best_keyword<'v>(token: &str, vocabulary: &'v dyn KeywordSource) -> (Option<&'v str>, f64) {
    let mut best_keyword = None;
    let mut max_similarity = 0.0;

    for keyword in vocabulary.keywords() {
        let keyword_similarity = similarity(token, keyword);
        i_debug!("{} ~ {}: {}", token, keyword, keyword_similarity);

        if keyword_similarity > max_similarity {
            max_similarity = keyword_similarity;
            best_keyword = Some(keyword);

            if max_similarity >= 1.0 {
                break;
            }
        }
    }

    (best_keyword, max_similarity)
}
