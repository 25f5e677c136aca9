use crate::{Alphabet, Dictionary, DictionaryError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// The extension of the cached automaton written next to a word list.
pub const CACHE_EXTENSION: &str = "fst";

/// # Returns
///
/// The path of the cached automaton for the word list at `path`: the same file stem with
/// the [cache extension](CACHE_EXTENSION).
pub fn cache_path(path: &Path) -> PathBuf {
    path.with_extension(CACHE_EXTENSION)
}

impl Dictionary {
    /// Loads the word list at `path`, one word per line.
    ///
    /// If a cached automaton exists next to the word list, it is used instead. Otherwise,
    /// or if the cache is unreadable, the dictionary is built from the word list and the
    /// cache is written. Failing to read or write the cache is logged and not fatal.
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Io] The word list could not be read.
    /// * [DictionaryError::EmptyWordList] The word list holds no words.
    /// * [DictionaryError::Fst] The automaton could not be built.
    #[instrument(level = "debug", skip(path, alphabet), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, alphabet: Alphabet) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let cache = cache_path(path);

        if cache != path && cache.is_file() {
            match Dictionary::read_fst(&cache, alphabet.clone()) {
                Ok(dictionary) => {
                    debug!(cache = %cache.display(), words = dictionary.len(), "loaded cached dictionary");
                    return Ok(dictionary);
                }
                Err(error) => {
                    warn!(cache = %cache.display(), %error, "ignoring unreadable dictionary cache");
                }
            }
        }

        let dictionary = Dictionary::read_word_list(path, alphabet)?;
        if cache != path {
            if let Err(error) = dictionary.save(&cache) {
                warn!(cache = %cache.display(), %error, "failed to write dictionary cache");
            }
        }
        debug!(words = dictionary.len(), "built dictionary from word list");

        Ok(dictionary)
    }

    /// Builds a dictionary from the word list at `path`, one word per line, without
    /// touching any cache.
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Io] The word list could not be read.
    /// * [DictionaryError::EmptyWordList] The word list holds no words.
    /// * [DictionaryError::Fst] The automaton could not be built.
    pub fn read_word_list(
        path: impl AsRef<Path>,
        alphabet: Alphabet,
    ) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Dictionary::from_words(text.lines(), alphabet)
    }

    /// Restores a dictionary from an automaton previously written by [Dictionary::save].
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Io] The file could not be read.
    /// * [DictionaryError::Fst] The file is not a valid automaton.
    /// * [DictionaryError::EmptyWordList] The automaton holds no words.
    pub fn read_fst(path: impl AsRef<Path>, alphabet: Alphabet) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Dictionary::from_fst_bytes(bytes, alphabet)
    }

    /// Writes the automaton to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Io] The file could not be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        fs::write(path, self.as_bytes()).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("word_game_state_{}_{name}", std::process::id()))
    }

    #[test]
    fn cache_path_replaces_extension() {
        assert_eq!(
            PathBuf::from("/words/english.fst"),
            cache_path(Path::new("/words/english.txt"))
        );
        assert_eq!(
            PathBuf::from("/words/english.fst"),
            cache_path(Path::new("/words/english"))
        );
    }

    #[test]
    fn load_builds_and_caches() {
        let words = temp_path("build.txt");
        let cache = cache_path(&words);
        let _ = fs::remove_file(&cache);
        fs::write(&words, "Cat\ndog\n\ncat\n").expect("temporary file should be writable");

        let dictionary =
            Dictionary::load(&words, Alphabet::english()).expect("word list should load");

        assert_eq!(vec!["cat", "dog"], dictionary.words());
        assert!(cache.is_file());
        let _ = fs::remove_file(&words);
        let _ = fs::remove_file(&cache);
    }

    #[test]
    fn load_prefers_cache() {
        let words = temp_path("cached.txt");
        let cache = cache_path(&words);
        fs::write(&words, "cat\n").expect("temporary file should be writable");
        Dictionary::from_words(["cached"], Alphabet::english())
            .expect("word list should build")
            .save(&cache)
            .expect("temporary file should be writable");

        let dictionary =
            Dictionary::load(&words, Alphabet::english()).expect("cache should load");

        assert!(dictionary.is_word("cached"));
        assert!(!dictionary.is_word("cat"));
        let _ = fs::remove_file(&words);
        let _ = fs::remove_file(&cache);
    }

    #[test]
    fn load_rebuilds_corrupt_cache() {
        let words = temp_path("corrupt.txt");
        let cache = cache_path(&words);
        fs::write(&words, "cat\n").expect("temporary file should be writable");
        fs::write(&cache, b"not an automaton").expect("temporary file should be writable");

        let dictionary =
            Dictionary::load(&words, Alphabet::english()).expect("word list should load");

        assert!(dictionary.is_word("cat"));
        let repaired = Dictionary::read_fst(&cache, Alphabet::english())
            .expect("cache should be rewritten");
        assert!(repaired.is_word("cat"));
        let _ = fs::remove_file(&words);
        let _ = fs::remove_file(&cache);
    }

    #[test]
    fn load_missing_word_list() {
        let words = temp_path("missing.txt");
        let _ = fs::remove_file(&words);
        let _ = fs::remove_file(cache_path(&words));

        let result = Dictionary::load(&words, Alphabet::english());

        assert!(matches!(result, Err(DictionaryError::Io { path, .. }) if path == words));
    }

    #[test]
    fn load_empty_word_list() {
        let words = temp_path("empty.txt");
        let _ = fs::remove_file(cache_path(&words));
        fs::write(&words, "\n\n").expect("temporary file should be writable");

        let result = Dictionary::load(&words, Alphabet::english());

        assert!(matches!(result, Err(DictionaryError::EmptyWordList)));
        let _ = fs::remove_file(&words);
    }
}
