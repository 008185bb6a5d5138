use rustc_hash::FxHashSet;

pub type KeywordIter<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Anything that can hand out keywords in a stable order, any number of times.
pub trait KeywordSource {
    fn keywords(&self) -> KeywordIter<'_>;
}

/// An ordered set of distinct, non-empty keywords
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vocabulary {
    keywords: Vec<String>,
}

impl Vocabulary {
    /// Keeps the first occurence of every keyword, dropping empty ones.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut deduped = Vec::new();

        for keyword in keywords {
            let keyword: String = keyword.into();
            if keyword.is_empty() || seen.contains(&keyword) {
                continue;
            }

            seen.insert(keyword.clone());
            deduped.push(keyword);
        }

        Vocabulary { keywords: deduped }
    }

    pub fn from_delimited(blob: &str, delimiter: char) -> Self {
        Vocabulary::from_keywords(DelimitedKeywords::new(blob, delimiter).keywords())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

impl KeywordSource for Vocabulary {
    fn keywords(&self) -> KeywordIter<'_> {
        Box::new(self.keywords.iter().map(String::as_str))
    }
}

impl KeywordSource for [String] {
    fn keywords(&self) -> KeywordIter<'_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl KeywordSource for Vec<String> {
    fn keywords(&self) -> KeywordIter<'_> {
        self.as_slice().keywords()
    }
}

impl<'s> KeywordSource for [&'s str] {
    fn keywords(&self) -> KeywordIter<'_> {
        Box::new(self.iter().copied())
    }
}

/// Keywords stored as one delimited blob, e.g. `the|quick|brown|fox`,
/// split lazily on every pass. Empty segments are skipped.
pub struct DelimitedKeywords<'a> {
    blob: &'a str,
    delimiter: char,
}

impl<'a> DelimitedKeywords<'a> {
    pub fn new(blob: &'a str, delimiter: char) -> Self {
        DelimitedKeywords { blob, delimiter }
    }
}

impl<'a> KeywordSource for DelimitedKeywords<'a> {
    fn keywords(&self) -> KeywordIter<'_> {
        Box::new(self.blob.split(self.delimiter).filter(|keyword| !keyword.is_empty()))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{DelimitedKeywords, KeywordSource, Vocabulary};

    fn collect(source: &dyn KeywordSource) -> Vec<&str> {
        source.keywords().collect()
    }

    #[test]
    fn dedupes_keeping_first_occurence() {
        let vocabulary = Vocabulary::from_keywords(vec!["fox", "the", "", "fox", "quick", "the"]);
        assert_eq!(collect(&vocabulary), vec!["fox", "the", "quick"]);
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("quick"));
        assert!(!vocabulary.contains(""));
    }

    #[test]
    fn splits_delimited_blobs() {
        let blob = DelimitedKeywords::new("the|quick||brown|fox|", '|');
        assert_eq!(collect(&blob), vec!["the", "quick", "brown", "fox"]);

        // Re-iterable
        assert_eq!(blob.keywords().count(), 4);

        let vocabulary = Vocabulary::from_delimited("a,b,a,c", ',');
        assert_eq!(collect(&vocabulary), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_sources() {
        assert!(Vocabulary::from_delimited("|||", '|').is_empty());
        assert_eq!(DelimitedKeywords::new("", '|').keywords().count(), 0);

        let no_keywords: Vec<String> = Vec::new();
        assert_eq!(no_keywords.keywords().count(), 0);
    }

    #[test]
    fn slices_are_sources() {
        let owned = vec!["the".to_owned(), "fox".to_owned()];
        assert_eq!(collect(&owned), vec!["the", "fox"]);

        let borrowed: &[&str] = &["the", "fox"];
        assert_eq!(borrowed.keywords().collect::<Vec<_>>(), vec!["the", "fox"]);
    }
}
