//! Word-scoring strategies for selecting the next guess.
//!
//! Each scorer implements [`WordScorer`]: it is rebuilt from the surviving candidate list on
//! every update, and scores individual words so that the highest score marks the best guess.

use crate::data::LetterCounts;
use crate::oracle::ComputedFeedback;
use crate::oracle::FeedbackOracle;
use crate::restrictions::WordRestrictions;
use crate::results::FeedbackCode;
use crate::results::SolverError;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Updates the scorer with the latest guess, the updated restrictions, and the updated
    /// list of possible words.
    fn update(
        &mut self,
        latest_guess: &str,
        restrictions: &WordRestrictions,
        possible_words: &[Arc<str>],
    ) -> Result<(), SolverError>;

    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Arc<str>) -> i64;
}

fn is_first_occurrence(bytes: &[u8], index: usize) -> bool {
    !bytes[..index].contains(&bytes[index])
}

/// Scores words by total letter frequency across the candidate list.
///
/// Each letter's frequency is its total number of occurrences in the candidates (duplicates
/// within a word counted). A word scores the sum of the frequencies of its distinct letters;
/// a letter repeated within the word is only counted once.
///
/// ```
/// use guesswork::GuessFrom;
/// use guesswork::Guesser;
/// use guesswork::MaxScoreGuesser;
/// use guesswork::WordBank;
/// use guesswork::scorers::LetterFrequencyScorer;
///
/// let bank = WordBank::from_iterator(["robot", "raise", "crane"]).unwrap();
/// let scorer = LetterFrequencyScorer::new(&bank);
/// let guesser = MaxScoreGuesser::new(GuessFrom::PossibleWords, &bank, scorer);
///
/// assert!(guesser.select_next_guess().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LetterFrequencyScorer {
    counts: LetterCounts,
}

impl LetterFrequencyScorer {
    pub fn new<S: AsRef<str>>(all_words: &[S]) -> LetterFrequencyScorer {
        LetterFrequencyScorer {
            counts: LetterCounts::from_words(all_words),
        }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn update(
        &mut self,
        _latest_guess: &str,
        _restrictions: &WordRestrictions,
        possible_words: &[Arc<str>],
    ) -> Result<(), SolverError> {
        self.counts = LetterCounts::from_words(possible_words);
        Ok(())
    }

    fn score_word(&self, word: &Arc<str>) -> i64 {
        let bytes = word.as_bytes();
        let mut sum = 0;
        for (index, &letter) in bytes.iter().enumerate() {
            if is_first_occurrence(bytes, index) {
                sum += self.counts.occurrences(char::from(letter)) as i64;
            }
        }
        sum
    }
}

/// Scores words by the proportion of candidate words containing each distinct letter.
///
/// For each letter, `p` is the fraction of candidates containing it at least once and the
/// letter contributes `50 - (0.5 - p) * 10` points; the distance from one-half prevalence is
/// signed, not absolute. Scores are scaled by 1000 into integers.
#[derive(Clone, Debug)]
pub struct LetterProportionScorer {
    counts: LetterCounts,
}

impl LetterProportionScorer {
    pub fn new<S: AsRef<str>>(all_words: &[S]) -> LetterProportionScorer {
        LetterProportionScorer {
            counts: LetterCounts::from_words(all_words),
        }
    }

    fn letter_contribution(&self, letter: char) -> f64 {
        let num_words = self.counts.num_words();
        let fraction = if num_words == 0 {
            0.0
        } else {
            self.counts.words_containing(letter) as f64 / num_words as f64
        };
        let distance = 0.5 - fraction;
        50.0 - distance * 10.0
    }
}

impl WordScorer for LetterProportionScorer {
    fn update(
        &mut self,
        _latest_guess: &str,
        _restrictions: &WordRestrictions,
        possible_words: &[Arc<str>],
    ) -> Result<(), SolverError> {
        // Scoring an empty candidate list would divide by zero; surface it instead.
        if possible_words.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        self.counts = LetterCounts::from_words(possible_words);
        Ok(())
    }

    fn score_word(&self, word: &Arc<str>) -> i64 {
        let bytes = word.as_bytes();
        let mut sum = 0.0;
        for (index, &letter) in bytes.iter().enumerate() {
            if is_first_occurrence(bytes, index) {
                sum += self.letter_contribution(char::from(letter));
            }
        }
        (sum * 1000.0) as i64
    }
}

/// Scores words by the worst case number of candidates that would survive the guess.
///
/// The candidate list is partitioned by the feedback code each candidate would produce for the
/// guess; the raw score of the guess is the size of the largest partition. `score_word`
/// returns the negated size so that the shared maximum-score selection picks the guess that
/// minimizes the worst case.
///
/// This strategy costs one feedback evaluation per (guess, candidate) pair per turn. For
/// large word lists, construct it with [`MinimaxPartitionScorer::with_oracle`] and a
/// [`PrecomputedFeedback`](crate::PrecomputedFeedback) cache.
#[derive(Clone, Debug)]
pub struct MinimaxPartitionScorer<O = ComputedFeedback> {
    oracle: O,
    possible_words: Vec<Arc<str>>,
}

impl MinimaxPartitionScorer<ComputedFeedback> {
    pub fn new(possible_words: &[Arc<str>]) -> MinimaxPartitionScorer<ComputedFeedback> {
        MinimaxPartitionScorer::with_oracle(possible_words, ComputedFeedback)
    }
}

impl<O: FeedbackOracle> MinimaxPartitionScorer<O> {
    /// Constructs a scorer that obtains feedback codes from the given oracle.
    pub fn with_oracle(possible_words: &[Arc<str>], oracle: O) -> MinimaxPartitionScorer<O> {
        MinimaxPartitionScorer {
            oracle,
            possible_words: possible_words.to_vec(),
        }
    }

    /// Returns the size of the largest feedback partition of the current candidates for the
    /// given guess, i.e. the number of candidates remaining after the guess in the worst case.
    pub fn worst_case_partition(&self, guess: &str) -> usize {
        let mut partition_sizes = [0u32; FeedbackCode::NUM_CODES];
        for candidate in &self.possible_words {
            // Bank words are pre-validated, so feedback computation cannot fail.
            let code = self.oracle.code_for_guess(candidate, guess).unwrap();
            partition_sizes[code.as_index()] += 1;
        }
        partition_sizes.iter().copied().max().unwrap_or(0) as usize
    }
}

impl<O: FeedbackOracle> WordScorer for MinimaxPartitionScorer<O> {
    fn update(
        &mut self,
        _latest_guess: &str,
        _restrictions: &WordRestrictions,
        possible_words: &[Arc<str>],
    ) -> Result<(), SolverError> {
        self.possible_words = possible_words.to_vec();
        Ok(())
    }

    fn score_word(&self, word: &Arc<str>) -> i64 {
        -(self.worst_case_partition(word) as i64)
    }
}
