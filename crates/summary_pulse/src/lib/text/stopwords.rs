/// Languages the local pipeline can rank. Only English for now, matching the
/// fixed `"english"` the original UI exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
        }
    }

    pub fn stopwords(&self) -> &'static [&'static str] {
        match self {
            Language::English => ENGLISH_STOPWORDS,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords().contains(&word)
    }
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_stopwords() {
        let lang = Language::English;
        assert!(lang.is_stopword("the"));
        assert!(lang.is_stopword("and"));
        assert!(!lang.is_stopword("parliament"));
    }
}
