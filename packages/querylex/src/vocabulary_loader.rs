use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use querylex_common::vocabulary::Vocabulary;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VocabularyError>;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Vocabulary file {path} is not a json array of strings: {source}")]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("Vocabulary file {0} contains no keywords")]
    Empty(PathBuf),
}

/// Loads a vocabulary from either a `.json` array of strings,
/// or a plain text file of keywords separated by `delimiter` and / or newlines.
pub fn load_vocabulary(path: &Path, delimiter: char) -> Result<Vocabulary> {
    let raw = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let (vocabulary, num_raw_keywords) = if is_json {
        let keywords: Vec<String> = serde_json::from_str(&raw).map_err(|source| VocabularyError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let num_raw_keywords = keywords.iter().filter(|keyword| !keyword.is_empty()).count();

        (Vocabulary::from_keywords(keywords), num_raw_keywords)
    } else {
        parse_delimited(&raw, delimiter)
    };

    if vocabulary.is_empty() {
        return Err(VocabularyError::Empty(path.to_path_buf()));
    }

    if num_raw_keywords > vocabulary.len() {
        warn!(
            "Dropped {} duplicate keywords from {}",
            num_raw_keywords - vocabulary.len(),
            path.display(),
        );
    }

    info!("Loaded {} keywords from {}", vocabulary.len(), path.display());

    Ok(vocabulary)
}

fn parse_delimited(raw: &str, delimiter: char) -> (Vocabulary, usize) {
    let keywords: Vec<&str> = raw
        .lines()
        .flat_map(|line| line.split(delimiter))
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .collect();
    let num_raw_keywords = keywords.len();

    (Vocabulary::from_keywords(keywords), num_raw_keywords)
}

#[cfg(test)]
mod test {
    use std::fs;

    use pretty_assertions::assert_eq;
    use querylex_common::vocabulary::KeywordSource;

    use super::{load_vocabulary, VocabularyError};

    fn keywords(vocabulary: &dyn KeywordSource) -> Vec<String> {
        vocabulary.keywords().map(str::to_owned).collect()
    }

    #[test]
    fn loads_delimited_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.txt");
        fs::write(&path, "the|quick|brown\nfox\n\n| jumps |the\n").unwrap();

        let vocabulary = load_vocabulary(&path, '|').unwrap();

        assert_eq!(keywords(&vocabulary), vec!["the", "quick", "brown", "fox", "jumps"]);
    }

    #[test]
    fn loads_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        fs::write(&path, r#"["the", "quick", "", "fox", "quick"]"#).unwrap();

        let vocabulary = load_vocabulary(&path, '|').unwrap();

        assert_eq!(keywords(&vocabulary), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(load_vocabulary(&missing, '|'), Err(VocabularyError::Io { .. })));

        let malformed = dir.path().join("keywords.json");
        fs::write(&malformed, r#"{ "the": 1 }"#).unwrap();
        assert!(matches!(load_vocabulary(&malformed, '|'), Err(VocabularyError::Json { .. })));

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "||\n  \n").unwrap();
        assert!(matches!(load_vocabulary(&empty, '|'), Err(VocabularyError::Empty(_))));
    }
}
