use crate::restrictions::WordRestrictions;
use crate::restrictions::ALPHABET_SIZE;
use crate::results::SolverError;
use crate::results::WORD_LENGTH;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the possible words for a game.
///
/// Every word is validated on construction: exactly [`WORD_LENGTH`] letters, lowercase ASCII
/// after normalization. Words are stored as `Arc<str>` so that guessers and scorers can share
/// them without copying.
#[derive(Clone, Debug)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader, one word per line.
    ///
    /// Each word is trimmed and converted to lower case; empty lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<WordBank, SolverError> {
        let mut words = Vec::new();
        for maybe_word in word_reader.lines() {
            words.push(maybe_word?);
        }
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` from the given words, preserving their order.
    ///
    /// Each word is trimmed and converted to lower case; empty entries are skipped.
    pub fn from_iterator<I>(words: I) -> Result<WordBank, SolverError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut all_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            all_words.push(validate_word(&word)?);
        }
        Ok(WordBank { all_words })
    }

    /// Retrieves a copy of the full list of available words.
    pub fn all_words(&self) -> Vec<Arc<str>> {
        self.all_words.clone()
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.all_words
    }
}

fn validate_word(word: &str) -> Result<Arc<str>, SolverError> {
    if word.len() != WORD_LENGTH {
        return Err(SolverError::WordLength(word.len()));
    }
    if let Some(unsupported) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
        return Err(SolverError::UnsupportedCharacter(unsupported));
    }
    Ok(Arc::from(word))
}

/// Gets the words that meet the given restrictions, preserving their input order.
pub fn get_possible_words(restrictions: &WordRestrictions, words: &[Arc<str>]) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}

/// Per-letter tallies over a word list, rebuilt once per turn from the current candidates.
///
/// Two tallies are kept: the total number of occurrences of each letter (duplicates within a
/// word counted), and the number of words containing each letter at least once. Both are flat
/// 26-entry tables.
#[derive(Clone, Debug, Default)]
pub struct LetterCounts {
    occurrences: [u32; ALPHABET_SIZE],
    words_containing: [u32; ALPHABET_SIZE],
    num_words: usize,
}

impl LetterCounts {
    /// Tallies the given words.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> LetterCounts {
        let mut counts = LetterCounts::default();
        for word in words {
            counts.add_word(word.as_ref());
        }
        counts
    }

    fn add_word(&mut self, word: &str) {
        self.num_words += 1;
        let bytes = word.as_bytes();
        for (index, &letter) in bytes.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                continue;
            }
            let slot = (letter - b'a') as usize;
            self.occurrences[slot] += 1;
            if !bytes[..index].contains(&letter) {
                self.words_containing[slot] += 1;
            }
        }
    }

    /// Total occurrences of the given letter, duplicates within a word counted.
    pub fn occurrences(&self, letter: char) -> u32 {
        self.slot(letter).map_or(0, |slot| self.occurrences[slot])
    }

    /// The number of words containing the given letter at least once.
    pub fn words_containing(&self, letter: char) -> u32 {
        self.slot(letter)
            .map_or(0, |slot| self.words_containing[slot])
    }

    /// The number of words tallied.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    fn slot(&self, letter: char) -> Option<usize> {
        if letter.is_ascii_lowercase() {
            Some((letter as u8 - b'a') as usize)
        } else {
            None
        }
    }
}
