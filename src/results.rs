use std::fmt;
use std::io;
use std::str::FromStr;

/// The number of letters in every word handled by this crate.
pub const WORD_LENGTH: usize = 5;

/// The result of a given letter at a specific location.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

/// Indicates that an error occurred while narrowing or guessing the objective word.
#[derive(Debug)]
pub enum SolverError {
    /// A word did not have exactly [`WORD_LENGTH`] letters.
    WordLength(usize),
    /// A word contained a character outside the lowercase ASCII alphabet.
    UnsupportedCharacter(char),
    /// A feedback code was malformed: wrong length or an unknown symbol.
    InvalidFeedback,
    /// No candidate word satisfies all of the accumulated feedback. This means the feedback was
    /// inconsistent, or the objective word is missing from the word list.
    NoCandidates,
    /// The word list could not be read.
    Io(io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::WordLength(length) => {
                write!(f, "words must have {} letters, got {}", WORD_LENGTH, length)
            }
            SolverError::UnsupportedCharacter(letter) => {
                write!(f, "unsupported character: {:?}", letter)
            }
            SolverError::InvalidFeedback => {
                write!(
                    f,
                    "feedback codes must be {} symbols, each one of 'g', 'y' or '.'",
                    WORD_LENGTH
                )
            }
            SolverError::NoCandidates => write!(f, "no candidate words remain"),
            SolverError::Io(error) => write!(f, "could not read the word list: {}", error),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(error: io::Error) -> SolverError {
        SolverError::Io(error)
    }
}

/// The feedback for a whole guess: one [`LetterResult`] per position.
///
/// Codes are cheap to copy and hashable, so they can key partition tables and second-guess
/// lookups. [`FeedbackCode::as_index`] packs the code into `0..NUM_CODES` for flat-array
/// counting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FeedbackCode {
    letters: [LetterResult; WORD_LENGTH],
}

impl FeedbackCode {
    /// The number of distinct feedback codes.
    pub const NUM_CODES: usize = 3usize.pow(WORD_LENGTH as u32);

    /// The code given when every letter of the guess is correct.
    pub const ALL_CORRECT: FeedbackCode = FeedbackCode {
        letters: [LetterResult::Correct; WORD_LENGTH],
    };

    pub fn new(letters: [LetterResult; WORD_LENGTH]) -> FeedbackCode {
        FeedbackCode { letters }
    }

    /// Returns the result for the letter at the given position.
    pub fn letter(&self, index: usize) -> LetterResult {
        self.letters[index]
    }

    /// Iterates the per-position results in order.
    pub fn iter(&self) -> impl Iterator<Item = LetterResult> + '_ {
        self.letters.iter().copied()
    }

    /// Returns `true` iff every position is [`LetterResult::Correct`]. This is the terminal
    /// sentinel of a game.
    pub fn is_all_correct(&self) -> bool {
        *self == FeedbackCode::ALL_CORRECT
    }

    /// Packs the code into a base-3 index in `0..NUM_CODES`.
    pub fn as_index(&self) -> usize {
        self.letters.iter().rev().fold(0, |index, result| {
            index * 3
                + match result {
                    LetterResult::NotPresent => 0,
                    LetterResult::PresentNotHere => 1,
                    LetterResult::Correct => 2,
                }
        })
    }
}

impl FromStr for FeedbackCode {
    type Err = SolverError;

    /// Parses an external feedback code: 'g' for correct, 'y' for present-but-elsewhere, and
    /// '.' for absent, e.g. `"gy..g"`.
    fn from_str(s: &str) -> Result<FeedbackCode, SolverError> {
        if s.chars().count() != WORD_LENGTH {
            return Err(SolverError::InvalidFeedback);
        }
        let mut letters = [LetterResult::NotPresent; WORD_LENGTH];
        for (index, symbol) in s.chars().enumerate() {
            letters[index] = match symbol {
                'g' => LetterResult::Correct,
                'y' => LetterResult::PresentNotHere,
                '.' => LetterResult::NotPresent,
                _ => return Err(SolverError::InvalidFeedback),
            };
        }
        Ok(FeedbackCode { letters })
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.letters.iter() {
            let symbol = match result {
                LetterResult::Correct => 'g',
                LetterResult::PresentNotHere => 'y',
                LetterResult::NotPresent => '.',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// The result of a single word guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The per-letter feedback, in the same letter order as the guess.
    pub code: FeedbackCode,
}

/// Determines the feedback code for the given `guess` against the given `objective`.
///
/// A letter is `PresentNotHere` whenever it occurs *anywhere* in the objective, even if every
/// occurrence is already matched exactly by another position of the guess. Repeated guess
/// letters are therefore over-reported relative to the two-pass rule used by the published
/// game. Downstream restrictions rely on this interpretation, so it must not change on its
/// own.
pub fn get_code_for_guess(objective: &str, guess: &str) -> Result<FeedbackCode, SolverError> {
    if objective.len() != WORD_LENGTH {
        return Err(SolverError::WordLength(objective.len()));
    }
    if guess.len() != WORD_LENGTH {
        return Err(SolverError::WordLength(guess.len()));
    }
    let objective_bytes = objective.as_bytes();
    let mut letters = [LetterResult::NotPresent; WORD_LENGTH];
    for (index, letter) in guess.bytes().enumerate() {
        letters[index] = if objective_bytes[index] == letter {
            LetterResult::Correct
        } else if objective_bytes.contains(&letter) {
            LetterResult::PresentNotHere
        } else {
            LetterResult::NotPresent
        };
    }
    Ok(FeedbackCode::new(letters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_code_round_trips_through_display() -> Result<(), SolverError> {
        let code = FeedbackCode::from_str("gy..y")?;

        assert_eq!(code.letter(0), LetterResult::Correct);
        assert_eq!(code.letter(1), LetterResult::PresentNotHere);
        assert_eq!(code.letter(2), LetterResult::NotPresent);
        assert_eq!(code.to_string(), "gy..y");
        Ok(())
    }

    #[test]
    fn feedback_code_indexes_are_distinct_and_bounded() {
        let codes = [".....", "ggggg", "gy..y", "yyyyy", "....g"];
        let mut indices: Vec<usize> = codes
            .iter()
            .map(|code| FeedbackCode::from_str(code).unwrap().as_index())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        assert_eq!(indices.len(), codes.len());
        assert!(indices.iter().all(|index| *index < FeedbackCode::NUM_CODES));
        assert_eq!(FeedbackCode::from_str(".....").unwrap().as_index(), 0);
        assert_eq!(
            FeedbackCode::from_str("ggggg").unwrap().as_index(),
            FeedbackCode::NUM_CODES - 1
        );
    }

    #[test]
    fn all_correct_sentinel() {
        assert!(FeedbackCode::ALL_CORRECT.is_all_correct());
        assert!(FeedbackCode::from_str("ggggg").unwrap().is_all_correct());
        assert!(!FeedbackCode::from_str("ggggy").unwrap().is_all_correct());
    }
}
