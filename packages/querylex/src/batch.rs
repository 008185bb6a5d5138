use std::panic;

use crossbeam::thread;
use log::info;
use serde::Serialize;

use querylex_common::query::SearchQuery;
use querylex_common::vocabulary::KeywordSource;
use querylex_common::CorrectionConfig;

use crate::i_debug;
use crate::lexer::{CorrectedToken, Lexer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReport {
    pub query: String,
    pub corrected: String,
    pub tokens: Vec<CorrectedToken>,
    pub confidence_score: f64,
}

/// Corrects a single query with a fresh lexer.
pub fn correct_query_text(
    text: &str,
    vocabulary: &dyn KeywordSource,
    config: &CorrectionConfig,
) -> QueryReport {
    let mut query = SearchQuery::new(text);
    let mut lexer = Lexer::new(config.clone());

    let tokens = lexer.correct_query(&mut query, vocabulary);

    QueryReport {
        query: text.to_owned(),
        corrected: query.corrected_text(),
        tokens,
        confidence_score: lexer.confidence_score(),
    }
}

/// Corrects queries over up to `num_threads` threads, each query with its own lexer.
///
/// Reports are returned in the same order as the queries.
pub fn correct_batch(
    queries: &[String],
    vocabulary: &(dyn KeywordSource + Sync),
    config: &CorrectionConfig,
    num_threads: usize,
) -> Vec<QueryReport> {
    if queries.is_empty() {
        return Vec::new();
    }

    let num_threads = num_threads.clamp(1, queries.len());
    if num_threads == 1 {
        return queries
            .iter()
            .map(|query| correct_query_text(query, vocabulary, config))
            .collect();
    }

    let chunk_size = (queries.len() + num_threads - 1) / num_threads;
    info!("Correcting {} queries over {} threads", queries.len(), num_threads);

    let result = thread::scope(|s| {
        let handles: Vec<_> = queries
            .chunks(chunk_size)
            .enumerate()
            .map(|(worker_id, chunk)| {
                s.spawn(move |_| {
                    i_debug!("Worker {} correcting {} queries", worker_id, chunk.len());

                    chunk
                        .iter()
                        .map(|query| correct_query_text(query, vocabulary, config))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    result.unwrap_or_else(|e| panic::resume_unwind(e))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use querylex_common::vocabulary::Vocabulary;
    use querylex_common::CorrectionConfig;

    use super::{correct_batch, correct_query_text};

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_keywords(vec!["the", "quick", "brown", "fox"])
    }

    #[test]
    fn reports_a_single_query() {
        let report = correct_query_text("teh quikc fox", &vocabulary(), &CorrectionConfig::default());

        assert_eq!(report.query, "teh quikc fox");
        assert_eq!(report.corrected, "the quick fox");
        assert_eq!(report.tokens.len(), 3);
        assert!(report.confidence_score < 100.0 && report.confidence_score > 70.0);
    }

    #[test]
    fn keeps_query_order_across_threads() {
        let vocabulary = vocabulary();
        let config = CorrectionConfig::default();
        let queries: Vec<String> = ["teh", "fox", "qick browm", "", "lazy dog", "the fox", "foxes"]
            .iter()
            .cycle()
            .take(50)
            .map(|query| (*query).to_owned())
            .collect();

        let sequential = correct_batch(&queries, &vocabulary, &config, 1);
        let parallel = correct_batch(&queries, &vocabulary, &config, 4);

        assert_eq!(parallel.len(), queries.len());
        assert_eq!(parallel, sequential);
        assert_eq!(
            parallel.iter().map(|report| report.query.as_str()).collect::<Vec<_>>(),
            queries.iter().map(String::as_str).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn each_query_starts_from_full_confidence() {
        let queries = vec!["teh".to_owned(), "teh".to_owned(), "the".to_owned()];

        let reports = correct_batch(&queries, &vocabulary(), &CorrectionConfig::default(), 2);

        assert_eq!(reports[0].confidence_score, reports[1].confidence_score);
        assert_eq!(reports[2].confidence_score, 100.0);
    }

    #[test]
    fn empty_batches() {
        assert!(correct_batch(&[], &vocabulary(), &CorrectionConfig::default(), 4).is_empty());
    }
}
