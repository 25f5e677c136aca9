use crate::Alphabet;
use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Set};
pub use dictionary_load::*;
pub use dictionary_stats::*;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

mod dictionary_load;
mod dictionary_stats;

/// The word-legality oracle consumed by a [game](crate::Game). Every lookup is
/// case-insensitive.
pub trait Lexicon {
    /// Whether `word` is in the vocabulary.
    fn is_word(&self, word: &str) -> bool;

    /// # Returns
    ///
    /// Every word starting with `prefix`, in lexicographic order.
    fn find_words(&self, prefix: &str) -> Vec<String>;

    /// # Returns
    ///
    /// The [statistics](WordStats) of `word`, or [None] if it is not in the vocabulary.
    fn word_stats(&self, word: &str) -> Option<WordStats>;

    /// Sorts the vocabulary descending by `metric`, keeping lexicographic order among ties.
    ///
    /// # Errors
    ///
    /// * [RankError::NotEnoughWords] Asking for more words than the vocabulary holds.
    ///
    /// # Returns
    ///
    /// The first `n` words.
    fn top_n(&self, n: usize, metric: Metric) -> Result<Vec<String>, RankError>;
}

/// Derived numbers for one word.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WordStats {
    /// The number of letters.
    pub length: usize,
    /// The sum of the points of each letter. A blank scores `0`.
    pub raw_score: u32,
    /// `raw_score / length`.
    pub relative_score: f64,
}

/// Describes the reason why a [dictionary](Dictionary) could not be created.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Reading the word list or the automaton failed.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The automaton could not be built or its bytes are corrupt.
    #[error("invalid word automaton")]
    Fst(#[from] fst::Error),
    /// The source holds no words.
    #[error("word list is empty")]
    EmptyWordList,
}

/// A vocabulary stored as a finite state transducer, plus the [alphabet](Alphabet) its
/// words are scored with. Words are stored in lower case.
#[derive(Clone)]
pub struct Dictionary {
    words: Set<Vec<u8>>,
    alphabet: Alphabet,
}

impl Dictionary {
    /// Builds a dictionary from `words`. Each word is trimmed and lower-cased; blank lines
    /// are skipped and duplicates are dropped.
    ///
    /// # Errors
    ///
    /// * [DictionaryError::EmptyWordList] No word remains after trimming.
    /// * [DictionaryError::Fst] The automaton could not be built.
    pub fn from_words<I, S>(words: I, alphabet: Alphabet) -> Result<Dictionary, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        if sorted.is_empty() {
            return Err(DictionaryError::EmptyWordList);
        }

        Ok(Dictionary {
            words: Set::from_iter(sorted)?,
            alphabet,
        })
    }

    /// Restores a dictionary from bytes previously returned by [Dictionary::as_bytes].
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Fst] The bytes are not a valid automaton.
    /// * [DictionaryError::EmptyWordList] The automaton holds no words.
    pub fn from_fst_bytes(bytes: Vec<u8>, alphabet: Alphabet) -> Result<Dictionary, DictionaryError> {
        let words = Set::new(bytes)?;
        if words.is_empty() {
            return Err(DictionaryError::EmptyWordList);
        }

        Ok(Dictionary { words, alphabet })
    }

    /// The serialized automaton.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.words.as_fst().as_bytes()
    }

    /// The alphabet words are scored with.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words. Never true for a constructed dictionary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        collect_words(self.words.stream())
    }

    /// # Returns
    ///
    /// Every word that is a prefix of `word`, shortest first. `word` itself is included if
    /// it is in the vocabulary.
    pub fn prefixes_of(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        word.char_indices()
            .map(|(index, letter)| &word[..index + letter.len_utf8()])
            .filter(|prefix| self.words.contains(prefix))
            .map(String::from)
            .collect()
    }

    fn stats_of(&self, word: &str) -> WordStats {
        let length = word.chars().count();
        let raw_score = self.alphabet.word_score(word);
        WordStats {
            length,
            raw_score,
            relative_score: f64::from(raw_score) / length.max(1) as f64,
        }
    }
}

impl Lexicon for Dictionary {
    #[inline]
    fn is_word(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase())
    }

    fn find_words(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let matcher = Str::new(&prefix).starts_with();
        collect_words(self.words.search(matcher).into_stream())
    }

    fn word_stats(&self, word: &str) -> Option<WordStats> {
        let word = word.to_lowercase();
        self.words.contains(&word).then(|| self.stats_of(&word))
    }

    fn top_n(&self, n: usize, metric: Metric) -> Result<Vec<String>, RankError> {
        self.rank(n, metric)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .field("alphabet", &self.alphabet)
            .finish()
    }
}

fn collect_words<A: Automaton>(stream: fst::set::Stream<'_, A>) -> Vec<String> {
    stream.into_strs().unwrap_or_else(|error| {
        warn!(%error, "dictionary holds a word that is not valid UTF-8");
        Vec::new()
    })
}
