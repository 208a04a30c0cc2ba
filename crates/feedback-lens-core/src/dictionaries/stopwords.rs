//! English stopwords removed by the text cleaner.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stopwords, lowercase, with and without apostrophes.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Pronouns
    set.extend([
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those",
    ]);

    // Auxiliaries
    set.extend([
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
        "might", "must",
    ]);

    // Articles, conjunctions, prepositions
    set.extend([
        "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at",
        "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under",
    ]);

    // Adverbs and determiners
    set.extend([
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
        "only", "own", "same", "so", "than", "too", "very", "just", "now",
    ]);

    // Contractions with punctuation already stripped
    set.extend([
        "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "don", "dont", "should've", "shouldve",
        "ain", "aren", "arent", "couldn", "couldnt", "didn", "didnt", "doesn", "doesnt", "hadn",
        "hadnt", "hasn", "hasnt", "haven", "havent", "isn", "isnt", "ma", "mightn", "mightnt",
        "mustn", "mustnt", "needn", "neednt", "shan", "shant", "shouldn", "shouldnt", "wasn",
        "wasnt", "weren", "werent", "won", "wont", "wouldn", "wouldnt", "youre", "youve", "youll",
        "youd", "shes", "its", "thatll",
    ]);

    set
});

/// Returns `true` if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
