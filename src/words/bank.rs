//! Word bank: per-language lists of word pairs.
//!
//! The bank is static configuration. The engine only ever asks it for one
//! uniformly drawn pair when a game starts.

use rustc_hash::FxHashMap;
use std::path::Path;

use super::pair::{Language, WordPair};
use crate::core::{GameError, Randomness};

const ENGLISH: &[(&str, &str)] = &[
    ("Fruit", "Mango"),
    ("Animal", "Elephant"),
    ("Bird", "Peacock"),
    ("Vehicle", "Bicycle"),
    ("Drink", "Coffee"),
    ("Sport", "Cricket"),
    ("Instrument", "Violin"),
    ("Planet", "Saturn"),
    ("Profession", "Surgeon"),
    ("Building", "Lighthouse"),
    ("Weather", "Thunderstorm"),
    ("Furniture", "Hammock"),
    ("Dessert", "Ice Cream"),
    ("Ocean Creature", "Octopus"),
    ("Kitchen Tool", "Whisk"),
    ("Holiday", "Halloween"),
    ("Body Part", "Elbow"),
    ("Clothing", "Raincoat"),
    ("Insect", "Butterfly"),
    ("Game", "Chess"),
];

const MALAYALAM: &[(&str, &str)] = &[
    ("പഴം", "മാങ്ങ"),
    ("മൃഗം", "ആന"),
    ("പക്ഷി", "കാക്ക"),
    ("വാഹനം", "ഓട്ടോറിക്ഷ"),
    ("ഭക്ഷണം", "ദോശ"),
    ("പാനീയം", "ചായ"),
    ("ഉത്സവം", "ഓണം"),
    ("വാദ്യം", "ചെണ്ട"),
    ("നിറം", "പച്ച"),
    ("പൂവ്", "താമര"),
    ("കളി", "ക്രിക്കറ്റ്"),
    ("സ്ഥലം", "കടൽത്തീരം"),
];

/// Registry of word pairs keyed by language.
///
/// ## Example
///
/// ```
/// use insider::core::GameRng;
/// use insider::words::{Language, WordBank, WordPair};
///
/// let mut bank = WordBank::new();
/// bank.insert(Language::English, WordPair::new("Fruit", "Mango"));
///
/// let pair = bank.draw(Language::English, &mut GameRng::new(1)).unwrap();
/// assert_eq!(pair.specific, "Mango");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    pairs: FxHashMap<Language, Vec<WordPair>>,
}

impl WordBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled English and Malayalam lists.
    #[must_use]
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for (language, list) in [(Language::English, ENGLISH), (Language::Malayalam, MALAYALAM)] {
            for &(general, specific) in list {
                bank.insert(language, WordPair::new(general, specific));
            }
        }
        bank
    }

    /// Parse a bank from JSON of the form
    /// `{"english": [{"general": "..", "specific": ".."}], "malayalam": [..]}`.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let pairs: FxHashMap<Language, Vec<WordPair>> =
            serde_json::from_str(json).map_err(|e| GameError::WordBank(e.to_string()))?;
        Ok(Self { pairs })
    }

    /// Read and parse a JSON bank from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::WordBank(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Append a pair to a language's list.
    pub fn insert(&mut self, language: Language, pair: WordPair) {
        self.pairs.entry(language).or_default().push(pair);
    }

    /// All pairs for a language, in insertion order.
    #[must_use]
    pub fn pairs(&self, language: Language) -> &[WordPair] {
        self.pairs.get(&language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of pairs available for a language.
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.pairs(language).len()
    }

    #[must_use]
    pub fn is_empty(&self, language: Language) -> bool {
        self.pairs(language).is_empty()
    }

    /// Draw one pair uniformly at random.
    pub fn draw(&self, language: Language, rng: &mut impl Randomness) -> Result<WordPair, GameError> {
        let pairs = self.pairs(language);
        if pairs.is_empty() {
            return Err(GameError::EmptyWordBank(language));
        }
        Ok(pairs[rng.pick(pairs.len())].clone())
    }
}
