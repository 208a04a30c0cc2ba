//! Adjective lexicon for the pattern analyzer.
//!
//! Each entry is `(polarity, subjectivity)`: polarity in [-1, 1], subjectivity
//! in [0, 1] where 0 is factual and 1 is pure opinion.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Polarity and subjectivity of opinion-bearing adjectives and adverbs.
pub static ADJECTIVES: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Positive
    map.extend([
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("beautiful", (0.85, 1.0)),
        ("best", (1.0, 0.3)),
        ("better", (0.5, 0.5)),
        ("brilliant", (0.9, 1.0)),
        ("clean", (0.37, 0.69)),
        ("comfortable", (0.4, 0.7)),
        ("cool", (0.35, 0.65)),
        ("cute", (0.5, 1.0)),
        ("delicious", (1.0, 1.0)),
        ("delightful", (1.0, 1.0)),
        ("easy", (0.43, 0.83)),
        ("excellent", (1.0, 1.0)),
        ("exceptional", (0.67, 1.0)),
        ("fantastic", (0.4, 0.9)),
        ("fast", (0.2, 0.6)),
        ("favorite", (0.5, 1.0)),
        ("fine", (0.42, 0.5)),
        ("fresh", (0.3, 0.5)),
        ("friendly", (0.38, 0.5)),
        ("fun", (0.3, 0.2)),
        ("glad", (0.5, 1.0)),
        ("good", (0.7, 0.6)),
        ("gorgeous", (0.7, 1.0)),
        ("great", (0.8, 0.75)),
        ("happy", (0.8, 1.0)),
        ("healthy", (0.5, 0.5)),
        ("helpful", (0.3, 0.1)),
        ("impressive", (1.0, 1.0)),
        ("incredible", (0.9, 0.9)),
        ("interesting", (0.5, 0.5)),
        ("lovely", (0.5, 0.75)),
        ("nice", (0.6, 1.0)),
        ("outstanding", (0.5, 0.67)),
        ("perfect", (1.0, 1.0)),
        ("pleasant", (0.73, 0.97)),
        ("pleased", (0.5, 1.0)),
        ("positive", (0.23, 0.55)),
        ("pretty", (0.25, 1.0)),
        ("quick", (0.33, 0.5)),
        ("reliable", (0.5, 0.5)),
        ("right", (0.29, 0.54)),
        ("satisfied", (0.5, 1.0)),
        ("smooth", (0.4, 0.7)),
        ("superb", (1.0, 1.0)),
        ("sweet", (0.35, 0.65)),
        ("tasty", (0.6, 0.8)),
        ("terrific", (1.0, 1.0)),
        ("useful", (0.3, 0.0)),
        ("wonderful", (1.0, 1.0)),
        ("worth", (0.3, 0.1)),
        ("yummy", (0.8, 1.0)),
    ]);

    // Negative
    map.extend([
        ("annoying", (-0.8, 0.9)),
        ("awful", (-1.0, 1.0)),
        ("bad", (-0.7, 0.67)),
        ("bland", (-0.5, 0.6)),
        ("boring", (-1.0, 1.0)),
        ("broken", (-0.4, 0.4)),
        ("cheap", (0.4, 0.7)),
        ("disappointed", (-0.75, 0.75)),
        ("disappointing", (-0.6, 0.7)),
        ("disgusting", (-1.0, 1.0)),
        ("dull", (-0.31, 0.69)),
        ("expensive", (-0.5, 0.7)),
        ("horrible", (-1.0, 1.0)),
        ("inedible", (-0.6, 0.8)),
        ("late", (-0.3, 0.6)),
        ("mediocre", (-0.3, 0.6)),
        ("nasty", (-1.0, 1.0)),
        ("overpriced", (-0.5, 0.8)),
        ("pathetic", (-1.0, 1.0)),
        ("poor", (-0.4, 0.6)),
        ("rotten", (-0.8, 0.9)),
        ("rude", (-0.3, 0.6)),
        ("sad", (-0.5, 1.0)),
        ("slow", (-0.3, 0.39)),
        ("stale", (-0.5, 0.6)),
        ("stupid", (-0.8, 1.0)),
        ("terrible", (-1.0, 1.0)),
        ("ugly", (-0.7, 1.0)),
        ("unhappy", (-0.6, 0.9)),
        ("useless", (-0.5, 0.2)),
        ("weak", (-0.38, 0.62)),
        ("weird", (-0.5, 1.0)),
        ("worse", (-0.4, 0.6)),
        ("worst", (-1.0, 1.0)),
        ("wrong", (-0.5, 0.9)),
    ]);

    // Opinion-laden but neutral in valence
    map.extend([
        ("different", (0.0, 0.6)),
        ("honestly", (0.6, 0.9)),
        ("new", (0.14, 0.45)),
        ("old", (0.1, 0.2)),
        ("real", (0.2, 0.3)),
        ("strange", (0.0, 0.15)),
        ("usual", (-0.25, 0.25)),
    ]);

    map
});

/// Adverbs that scale the next adjective's polarity and subjectivity.
pub static INTENSIFIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("absolutely", 1.5),
        ("completely", 1.4),
        ("especially", 1.3),
        ("extremely", 1.5),
        ("highly", 1.3),
        ("incredibly", 1.4),
        ("particularly", 1.3),
        ("quite", 1.1),
        ("really", 1.3),
        ("remarkably", 1.3),
        ("so", 1.3),
        ("somewhat", 0.8),
        ("slightly", 0.7),
        ("too", 1.3),
        ("totally", 1.4),
        ("truly", 1.3),
        ("very", 1.3),
    ]
    .into_iter()
    .collect()
});

/// Words that negate the next scored adjective.
pub static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["not", "never", "no", "n't", "hardly", "nothing"]
        .into_iter()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_stay_in_range() {
        for (word, (polarity, subjectivity)) in ADJECTIVES.iter() {
            assert!((-1.0..=1.0).contains(polarity), "{word} polarity");
            assert!((0.0..=1.0).contains(subjectivity), "{word} subjectivity");
        }
    }

    #[test]
    fn intensifiers_are_not_adjectives() {
        for word in INTENSIFIERS.keys() {
            assert!(!ADJECTIVES.contains_key(word), "{word} is in both lists");
        }
    }
}
