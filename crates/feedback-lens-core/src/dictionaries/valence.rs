//! Word valences for the lexicon-and-rule analyzer.
//!
//! Valences run from about -4 (extremely negative) to +4 (extremely positive).
//! Keys are lowercase; emoticons are stored as written.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Scalar added to a word's magnitude by a booster.
pub const B_INCR: f64 = 0.293;

/// Scalar subtracted from a word's magnitude by a dampener.
pub const B_DECR: f64 = -0.293;

/// Magnitude added to an ALL-CAPS sentiment word when the text mixes case.
pub const C_INCR: f64 = 0.733;

/// Multiplier applied to a negated word.
pub const N_SCALAR: f64 = -0.74;

/// Lexicon of sentiment-bearing words and their valence.
pub static VALENCE: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Strongly positive
    map.extend([
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("best", 3.2),
        ("brilliant", 2.8),
        ("delicious", 2.7),
        ("delight", 2.9),
        ("delighted", 3.1),
        ("excellent", 3.2),
        ("exceptional", 2.8),
        ("fantastic", 2.6),
        ("flawless", 2.9),
        ("incredible", 2.6),
        ("love", 3.2),
        ("loved", 2.9),
        ("loves", 2.7),
        ("magnificent", 3.4),
        ("marvelous", 2.9),
        ("outstanding", 3.0),
        ("perfect", 2.7),
        ("phenomenal", 2.9),
        ("superb", 3.1),
        ("terrific", 2.1),
        ("wonderful", 2.7),
        ("yummy", 2.4),
        ("ecstatic", 2.3),
        ("thrilled", 2.6),
        ("adore", 2.6),
        ("adorable", 2.2),
        ("gorgeous", 3.0),
        ("beautiful", 2.9),
        ("heavenly", 2.5),
    ]);

    // Moderately positive
    map.extend([
        ("good", 1.9),
        ("great", 3.1),
        ("nice", 1.8),
        ("happy", 2.7),
        ("glad", 2.0),
        ("like", 1.5),
        ("liked", 1.8),
        ("likes", 1.8),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("fresh", 1.3),
        ("favorite", 2.0),
        ("fine", 0.8),
        ("fun", 2.3),
        ("helpful", 1.8),
        ("recommend", 1.5),
        ("recommended", 1.8),
        ("satisfied", 1.8),
        ("smooth", 1.2),
        ("tasty", 2.0),
        ("thanks", 1.9),
        ("thank", 1.5),
        ("worth", 0.9),
        ("win", 2.8),
        ("winner", 2.8),
        ("better", 1.9),
        ("pleasant", 2.3),
        ("pleased", 1.9),
        ("impressed", 2.1),
        ("impressive", 2.3),
        ("friendly", 2.2),
        ("fast", 0.6),
        ("quick", 1.0),
        ("reliable", 1.4),
        ("sweet", 2.0),
        ("healthy", 1.7),
        ("clean", 1.7),
        ("comfortable", 1.5),
        ("cool", 1.3),
        ("easy", 1.9),
        ("affordable", 1.3),
        ("bargain", 0.8),
        ("fair", 1.3),
        ("free", 2.3),
        ("gift", 1.9),
        ("hope", 1.9),
        ("interesting", 1.7),
        ("kind", 2.4),
        ("lucky", 2.6),
        ("okay", 0.9),
        ("ok", 1.2),
        ("popular", 1.8),
        ("positive", 2.6),
        ("pretty", 2.2),
        ("pure", 1.2),
        ("quality", 1.3),
        ("rich", 2.6),
        ("safe", 1.9),
        ("solid", 1.1),
        ("success", 2.7),
        ("support", 1.7),
        ("useful", 1.9),
        ("value", 1.3),
        ("wow", 2.8),
        ("yes", 1.7),
        ("care", 2.2),
        ("cute", 2.0),
        ("welcome", 2.0),
        ("appreciate", 1.7),
        ("appreciated", 2.3),
        ("calm", 1.3),
        ("charming", 2.8),
        ("cheerful", 2.5),
        ("convenient", 1.3),
        ("creative", 1.9),
        ("crisp", 1.0),
        ("efficient", 1.8),
        ("generous", 2.3),
        ("honest", 2.3),
        ("lovely", 2.8),
        ("loving", 2.9),
        ("gentle", 1.9),
        ("satisfying", 2.0),
        ("smile", 1.5),
        ("strong", 2.3),
        ("trust", 2.3),
        ("improved", 2.1),
        ("improvement", 1.3),
    ]);

    // Mildly negative
    map.extend([
        ("bad", -2.5),
        ("bland", -1.2),
        ("boring", -1.3),
        ("broken", -2.1),
        ("cheap", -0.7),
        ("complaint", -1.5),
        ("confused", -1.3),
        ("damaged", -1.9),
        ("delay", -1.3),
        ("delayed", -1.5),
        ("difficult", -1.5),
        ("dislike", -1.6),
        ("disappointed", -1.9),
        ("disappointing", -2.2),
        ("disappointment", -2.3),
        ("dull", -1.7),
        ("expensive", -0.9),
        ("fail", -2.5),
        ("failed", -2.3),
        ("fake", -2.1),
        ("hard", -0.4),
        ("lacking", -1.3),
        ("late", -0.6),
        ("lost", -1.3),
        ("mediocre", -1.0),
        ("mess", -1.5),
        ("missing", -1.2),
        ("poor", -2.1),
        ("problem", -1.7),
        ("problems", -1.7),
        ("refund", -0.3),
        ("sad", -2.1),
        ("slow", -0.9),
        ("sorry", -0.3),
        ("stale", -1.3),
        ("stupid", -2.4),
        ("unhappy", -1.8),
        ("upset", -1.6),
        ("waste", -1.8),
        ("wasted", -2.2),
        ("weak", -1.9),
        ("wrong", -2.1),
        ("worse", -2.1),
        ("annoyed", -1.6),
        ("annoying", -1.7),
        ("complain", -1.5),
        ("concern", -0.8),
        ("error", -1.7),
        ("issue", -0.8),
        ("issues", -0.8),
        ("junk", -1.9),
        ("lame", -1.8),
        ("no", -1.2),
        ("odd", -1.3),
        ("overpriced", -1.8),
        ("pain", -2.3),
        ("rude", -2.0),
        ("sick", -2.3),
        ("sour", -0.8),
        ("sticky", -0.4),
        ("unfortunately", -1.4),
        ("unreliable", -1.7),
        ("useless", -1.8),
        ("worried", -1.2),
        ("weird", -0.7),
        ("hate", -2.7),
        ("hated", -3.2),
        ("angry", -2.3),
        ("scared", -1.9),
        ("cry", -2.1),
        ("leak", -1.4),
        ("leaked", -1.3),
        ("ugly", -2.3),
        ("uncomfortable", -1.6),
        ("unfair", -2.1),
        ("unpleasant", -2.1),
        ("doubt", -1.5),
        ("regret", -1.8),
    ]);

    // Strongly negative
    map.extend([
        ("awful", -2.0),
        ("disgusting", -2.4),
        ("dreadful", -2.7),
        ("garbage", -1.8),
        ("horrible", -2.5),
        ("horrid", -2.5),
        ("inedible", -2.2),
        ("nasty", -2.6),
        ("pathetic", -2.2),
        ("poison", -2.5),
        ("rotten", -2.3),
        ("scam", -2.5),
        ("terrible", -2.1),
        ("toxic", -2.4),
        ("trash", -1.6),
        ("vile", -3.1),
        ("worst", -3.1),
        ("disaster", -3.1),
        ("furious", -2.7),
        ("miserable", -2.2),
        ("abysmal", -2.5),
        ("atrocious", -3.0),
        ("appalling", -2.6),
        ("fraud", -2.8),
        ("hideous", -2.7),
        ("outrageous", -2.0),
        ("revolting", -2.5),
        ("sucks", -1.5),
        ("dangerous", -2.1),
        ("died", -2.6),
        ("dead", -3.3),
        ("kill", -3.7),
    ]);

    // Emoticons and slang
    map.extend([
        (":)", 2.0),
        (":-)", 1.3),
        (":d", 2.3),
        ("<3", 1.9),
        (":(", -1.9),
        (":-(", -1.5),
        (":/", -1.4),
        ("lol", 2.9),
        ("meh", -0.3),
        ("ugh", -1.8),
        ("yay", 2.4),
    ]);

    map
});

/// Words that scale the magnitude of the next sentiment word.
pub static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.extend(
        [
            "absolutely",
            "amazingly",
            "completely",
            "considerably",
            "deeply",
            "definitely",
            "enormously",
            "entirely",
            "especially",
            "exceptionally",
            "extremely",
            "fully",
            "greatly",
            "highly",
            "hugely",
            "incredibly",
            "intensely",
            "majorly",
            "more",
            "most",
            "particularly",
            "purely",
            "quite",
            "really",
            "remarkably",
            "so",
            "substantially",
            "thoroughly",
            "totally",
            "tremendously",
            "truly",
            "unbelievably",
            "utterly",
            "very",
        ]
        .map(|w| (w, B_INCR)),
    );

    map.extend(
        [
            "almost",
            "barely",
            "hardly",
            "less",
            "little",
            "marginally",
            "occasionally",
            "partly",
            "scarcely",
            "slightly",
            "somewhat",
            "sort",
            "kinda",
        ]
        .map(|w| (w, B_DECR)),
    );

    map
});

/// Words that flip the polarity of nearby sentiment words.
pub static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
        "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "neither", "never",
        "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
        "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` negates what follows it.
///
/// Matches the negation set with or without an apostrophe and any word
/// ending in `n't`.
pub fn is_negation(word: &str) -> bool {
    let lower = word.to_lowercase();
    if lower.ends_with("n't") {
        return true;
    }
    let bare: String = lower.chars().filter(|&c| c != '\'').collect();
    NEGATIONS.contains(bare.as_str())
}
