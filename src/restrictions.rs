use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WORD_LENGTH;

/// The number of supported letters.
pub const ALPHABET_SIZE: usize = 26;

/// A set of lowercase ASCII letters backed by a 26-bit mask.
///
/// Membership tests are a single mask probe, which keeps the per-word filtering cost flat even
/// when the restrictions are consulted thousands of times per turn.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// Adds the given letter. Bytes outside `a..=z` are ignored.
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter - b'a');
        }
    }

    /// Returns whether the given letter is in the set.
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the letters in the set in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |offset| self.0 & (1 << offset) != 0)
            .map(|offset| offset + b'a')
    }
}

/// Defines letter restrictions that a candidate word must adhere to.
///
/// The state is created empty, grows monotonically with every observed [`GuessResult`], and is
/// never relaxed: there are no removal operations.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordRestrictions {
    /// Letters marked `NotPresent` at some position of some guess.
    excluded_letters: LetterSet,
    /// Letters known to occur somewhere in the objective word.
    required_letters: LetterSet,
    /// Letters known to be correct at a specific position.
    fixed_positions: [Option<u8>; WORD_LENGTH],
    /// Letters known to be in the word, but not at this position.
    excluded_at: [LetterSet; WORD_LENGTH],
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object with all letters unknown.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given result alone.
    pub fn from_result(result: &GuessResult) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(result);
        restrictions
    }

    /// Adds restrictions arising from the given guess result.
    pub fn update(&mut self, guess_result: &GuessResult) {
        for (index, (letter, result)) in guess_result
            .guess
            .bytes()
            .zip(guess_result.code.iter())
            .enumerate()
        {
            match result {
                LetterResult::Correct => {
                    self.fixed_positions[index] = Some(letter);
                }
                LetterResult::PresentNotHere => {
                    self.required_letters.insert(letter);
                    self.excluded_at[index].insert(letter);
                }
                LetterResult::NotPresent => {
                    self.excluded_letters.insert(letter);
                }
            }
        }
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    ///
    /// An excluded letter only disqualifies a word if that letter is not separately required:
    /// with repeated guess letters, the same letter can legitimately be reported both absent
    /// (at one position) and present (at another), and the required-letter evidence wins.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return false;
        }
        for (index, &letter) in bytes.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return false;
            }
            if self.excluded_letters.contains(letter) && !self.required_letters.contains(letter) {
                return false;
            }
            if let Some(fixed) = self.fixed_positions[index] {
                if fixed != letter {
                    return false;
                }
            }
            if self.excluded_at[index].contains(letter) {
                return false;
            }
        }
        self.required_letters
            .iter()
            .all(|letter| bytes.contains(&letter))
    }

    /// Letters known to be absent (subject to the required-letter override above).
    pub fn excluded_letters(&self) -> LetterSet {
        self.excluded_letters
    }

    /// Letters known to be present somewhere.
    pub fn required_letters(&self) -> LetterSet {
        self.required_letters
    }

    /// The letter known to be correct at the given position, if any.
    pub fn fixed_position(&self, index: usize) -> Option<char> {
        self.fixed_positions[index].map(char::from)
    }

    /// Letters known to be present but not at the given position.
    pub fn excluded_at(&self, index: usize) -> LetterSet {
        self.excluded_at[index]
    }
}
