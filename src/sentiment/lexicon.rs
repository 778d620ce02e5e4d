// Rule-based lexicon scorer.
//
// Each known word carries a valence in [-4, 4]. Valences are adjusted by
// nearby intensity words ("very", "barely") and negations ("not", "cant"),
// a contrastive "but" shifts weight to the clause after it, and the summed
// valence is squashed into (-1, 1) with x / sqrt(x^2 + alpha).

use std::collections::HashMap;

use super::traits::SentimentScorer;

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
/// Multiplier applied to a word's valence when it is negated.
const NEGATION_SCALAR: f64 = -0.74;
/// Intensity shift contributed by a booster or dampener word.
const BOOST_INCREMENT: f64 = 0.293;
/// How many preceding tokens a negation or booster reaches.
const LOOKBACK: usize = 3;
/// Booster effect decay by distance (1, 2, 3 tokens back).
const BOOST_DECAY: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

/// Default word valences, tuned towards app and banking reviews.
pub const DEFAULT_LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("perfect", 2.7),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("nice", 1.8),
    ("best", 3.2),
    ("better", 1.9),
    ("easy", 1.9),
    ("fast", 1.4),
    ("quick", 1.3),
    ("smooth", 1.5),
    ("simple", 1.2),
    ("convenient", 1.6),
    ("reliable", 1.9),
    ("helpful", 1.8),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("happy", 2.7),
    ("satisfied", 1.8),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("useful", 1.9),
    ("recommend", 1.5),
    ("secure", 1.4),
    ("safe", 1.9),
    ("fine", 0.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("cool", 1.3),
    ("friendly", 2.2),
    ("efficient", 1.8),
    ("improved", 1.6),
    ("works", 1.0),
    ("working", 0.8),
    ("wow", 2.8),
    ("brilliant", 2.8),
    ("beautiful", 2.9),
    ("enjoy", 2.2),
    ("glad", 2.0),
    ("excited", 1.4),
    ("stable", 1.2),
    ("appreciate", 2.1),
    ("superb", 3.1),
    ("impressive", 2.3),
    ("support", 1.7),
    ("trust", 2.3),
    // Negative
    ("bad", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("useless", -1.8),
    ("hate", -2.7),
    ("slow", -1.0),
    ("error", -1.7),
    ("errors", -1.4),
    ("fail", -2.3),
    ("fails", -2.1),
    ("failed", -2.3),
    ("failure", -2.3),
    ("crash", -1.7),
    ("crashes", -1.7),
    ("crashed", -1.7),
    ("bug", -1.4),
    ("bugs", -1.4),
    ("buggy", -1.6),
    ("broken", -1.9),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -1.0),
    ("issues", -1.0),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("annoying", -1.7),
    ("frustrating", -1.9),
    ("waste", -1.8),
    ("stuck", -1.0),
    ("hanged", -1.2),
    ("freeze", -1.0),
    ("freezes", -1.0),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("lost", -1.3),
    ("scam", -2.8),
    ("fraud", -2.8),
    ("unable", -1.4),
    ("difficult", -1.5),
    ("complicated", -1.0),
    ("confusing", -1.3),
    ("angry", -2.3),
    ("sad", -2.1),
    ("sucks", -1.5),
    ("stupid", -2.4),
    ("rubbish", -1.9),
    ("nonsense", -1.7),
    ("wrong", -2.1),
    ("unreliable", -1.7),
    ("unhappy", -1.8),
    ("never", -0.5),
];

/// Words that scale the intensity of the sentiment word after them.
/// Positive values boost, negative values dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("super", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("absolutely", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("most", BOOST_INCREMENT),
    ("too", BOOST_INCREMENT),
    ("barely", -BOOST_INCREMENT),
    ("slightly", -BOOST_INCREMENT),
    ("somewhat", -BOOST_INCREMENT),
    ("kinda", -BOOST_INCREMENT),
    ("little", -BOOST_INCREMENT),
    ("hardly", -BOOST_INCREMENT),
    ("partly", -BOOST_INCREMENT),
];

/// Negation words, in their normalized form (apostrophes already removed).
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "nor", "neither", "without", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt",
    "couldnt", "shouldnt", "hasnt", "havent", "hadnt", "aint",
];

/// Lexicon- and rule-based polarity scorer.
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LEXICON)
    }
}

impl LexiconScorer {
    /// Build a scorer from a custom word → valence table.
    pub fn new(valences: HashMap<String, f64>) -> Self {
        Self { valences }
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(pairs.iter().map(|(w, v)| (w.to_string(), *v)).collect())
    }

    fn valence_at(&self, tokens: &[String], i: usize) -> f64 {
        let token = tokens[i].as_str();
        if is_booster(token).is_some() {
            return 0.0;
        }
        let Some(&base) = self.valences.get(token) else {
            return 0.0;
        };

        let mut valence = base;
        let preceding = &tokens[i.saturating_sub(LOOKBACK)..i];

        for (distance, prev) in preceding.iter().rev().enumerate() {
            if let Some(shift) = is_booster(prev) {
                let shift = shift * BOOST_DECAY[distance];
                valence += if valence < 0.0 { -shift } else { shift };
            }
        }

        if preceding.iter().any(|t| is_negation(t)) {
            valence *= NEGATION_SCALAR;
        }

        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| {
                // A negation directly before a sentiment word only modifies it
                let followed_by_sentiment = tokens
                    .get(i + 1)
                    .is_some_and(|next| self.valences.contains_key(next.as_str()));
                if is_negation(&tokens[i]) && followed_by_sentiment {
                    0.0
                } else {
                    self.valence_at(&tokens, i)
                }
            })
            .collect();

        if let Some(but_idx) = tokens.iter().position(|t| t == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but_idx {
                    *s *= 0.5;
                } else if i > but_idx {
                    *s *= 1.5;
                }
            }
        }

        let sum: f64 = sentiments.iter().sum();
        compound(sum)
    }
}

/// Squash a summed valence into (-1, 1).
pub fn compound(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Split into lowercase tokens, rejoining contractions that normalization
/// broke apart ("can t" → "cant", "don t" → "dont").
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let word = word.to_lowercase();
        if word == "t" {
            if let Some(last) = tokens.last_mut() {
                if last.ends_with('n') {
                    last.push('t');
                    continue;
                }
            }
        }
        tokens.push(word);
    }
    tokens
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

fn is_booster(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == token)
        .map(|(_, shift)| *shift)
}
