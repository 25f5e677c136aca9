use crate::{Dictionary, DictionaryError, WordStats};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// The header row written by [Dictionary::export_stats].
pub const STATS_HEADER: &str = "word,word_length,word_score,word_relative_score";

/// The number a vocabulary is ranked by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Metric {
    /// [WordStats::length].
    Length,
    /// [WordStats::raw_score].
    Score,
    /// [WordStats::relative_score].
    RelativeScore,
}

impl Metric {
    fn compare(self, first: &WordStats, second: &WordStats) -> Ordering {
        match self {
            Metric::Length => first.length.cmp(&second.length),
            Metric::Score => first.raw_score.cmp(&second.raw_score),
            Metric::RelativeScore => first.relative_score.total_cmp(&second.relative_score),
        }
    }
}

/// Describes the reason why a ranking could not be returned.
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum RankError {
    /// Asking for more words than the vocabulary holds.
    #[error("requested {requested} words but the dictionary holds {available}")]
    NotEnoughWords {
        /// The number of words asked for.
        requested: usize,
        /// The number of words in the vocabulary.
        available: usize,
    },
}

impl Dictionary {
    pub(super) fn rank(&self, n: usize, metric: Metric) -> Result<Vec<String>, RankError> {
        let available = self.len();
        if n > available {
            return Err(RankError::NotEnoughWords {
                requested: n,
                available,
            });
        }

        let mut ranked: Vec<(String, WordStats)> = self
            .words()
            .into_iter()
            .map(|word| {
                let stats = self.stats_of(&word);
                (word, stats)
            })
            .collect();
        // stable, so ties stay in lexicographic order
        ranked.sort_by(|(_, first), (_, second)| metric.compare(second, first));

        Ok(ranked.into_iter().take(n).map(|(word, _)| word).collect())
    }

    /// The `n` words with the most letters.
    ///
    /// # Errors
    ///
    /// * [RankError::NotEnoughWords] Asking for more words than the vocabulary holds.
    pub fn top_n_longest(&self, n: usize) -> Result<Vec<String>, RankError> {
        self.rank(n, Metric::Length)
    }

    /// The `n` words with the highest [raw score](WordStats::raw_score).
    ///
    /// # Errors
    ///
    /// * [RankError::NotEnoughWords] Asking for more words than the vocabulary holds.
    pub fn top_n_by_score(&self, n: usize) -> Result<Vec<String>, RankError> {
        self.rank(n, Metric::Score)
    }

    /// The `n` words with the highest [relative score](WordStats::relative_score).
    ///
    /// # Errors
    ///
    /// * [RankError::NotEnoughWords] Asking for more words than the vocabulary holds.
    pub fn top_n_by_relative_score(&self, n: usize) -> Result<Vec<String>, RankError> {
        self.rank(n, Metric::RelativeScore)
    }

    /// Writes [STATS_HEADER] followed by one comma-separated row per word in lexicographic
    /// order. The relative score is printed with six decimals.
    ///
    /// # Errors
    ///
    /// Any failure of `writer`.
    pub fn export_stats<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{STATS_HEADER}")?;
        for word in self.words() {
            let stats = self.stats_of(&word);
            writeln!(
                writer,
                "{},{},{},{:.6}",
                word, stats.length, stats.raw_score, stats.relative_score
            )?;
        }
        writer.flush()
    }

    /// Creates or truncates the file at `path` and [exports](Dictionary::export_stats) into it.
    ///
    /// # Errors
    ///
    /// * [DictionaryError::Io] The file could not be created or written.
    #[instrument(level = "debug", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn export_stats_csv(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        self.export_stats(BufWriter::new(file)).map_err(io_error)?;
        debug!(words = self.len(), "exported dictionary stats");

        Ok(())
    }
}
