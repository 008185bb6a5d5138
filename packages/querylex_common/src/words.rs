/// Iterates over the maximal runs of ascii alphabetic characters in some text,
/// yielding the byte offset of each run alongside the run.
///
/// Everything else, whitespace, digits, punctuation and non-ascii characters alike,
/// only ever separates two runs.
pub struct AlphabeticRuns<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> AlphabeticRuns<'a> {
    pub fn new(text: &'a str) -> Self {
        AlphabeticRuns { text, pos: 0 }
    }
}

impl<'a> Iterator for AlphabeticRuns<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();

        let start = self.pos + bytes[self.pos..].iter().position(u8::is_ascii_alphabetic)?;
        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .map_or(bytes.len(), |len| start + len);

        self.pos = end;

        // Ascii bytes are always char boundaries
        Some((start, &self.text[start..end]))
    }
}

pub fn count_words(text: &str) -> usize {
    AlphabeticRuns::new(text).count()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{count_words, AlphabeticRuns};

    fn runs(text: &str) -> Vec<&str> {
        AlphabeticRuns::new(text).map(|(_, run)| run).collect()
    }

    #[test]
    fn counts_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("hello, world!"), 2);
        assert_eq!(count_words("a1b2c3"), 3);
        assert_eq!(count_words("  ..  "), 0);
        assert_eq!(count_words("123"), 0);
    }

    #[test]
    fn splits_on_any_non_alphabetic_character() {
        assert_eq!(runs("teh quikc fox"), vec!["teh", "quikc", "fox"]);
        assert_eq!(runs("don't stop-me_now"), vec!["don", "t", "stop", "me", "now"]);
        assert_eq!(runs("  leading and trailing  "), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn non_ascii_characters_are_separators() {
        assert_eq!(runs("caféau lait"), vec!["caf", "au", "lait"]);
        assert_eq!(runs("日本abc語"), vec!["abc"]);
    }

    #[test]
    fn yields_byte_offsets() {
        let offsets: Vec<usize> = AlphabeticRuns::new("a1 bc,def").map(|(idx, _)| idx).collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn counts_agree_with_runs() {
        for text in ["", "a", "a b", "?!a!?b!?", "ab12cd34", "the quick brown fox"] {
            assert_eq!(count_words(text), runs(text).len());
        }
    }
}
