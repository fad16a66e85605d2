use crate::data::get_possible_words;
use crate::data::WordBank;
use crate::oracle::ComputedFeedback;
use crate::oracle::FeedbackOracle;
use crate::restrictions::WordRestrictions;
use crate::results::FeedbackCode;
use crate::results::GuessResult;
use crate::results::SolverError;
use crate::scorers::MinimaxPartitionScorer;
use crate::scorers::WordScorer;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Which list the next guess may be drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuessFrom {
    /// Only guess words that could still be the objective.
    PossibleWords,
    /// Guess from any not-yet-guessed word, trading a possible win for more information.
    AllUnguessedWords,
}

/// Selects the next guess and accumulates feedback over a game.
pub trait Guesser {
    /// Updates this guesser with the result of the last guess.
    fn update(&mut self, result: &GuessResult) -> Result<(), SolverError>;

    /// Selects the word to guess next, or `None` if no candidate words remain.
    fn select_next_guess(&self) -> Option<Arc<str>>;
}

/// A fixed first guess and an optional second-guess lookup keyed by the first turn's feedback.
///
/// Use [`build_second_guess_table`] to compute the lookup, or supply one from elsewhere.
#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    first_guess: Option<Arc<str>>,
    second_guesses: HashMap<FeedbackCode, Arc<str>>,
}

impl OpeningBook {
    pub fn new() -> OpeningBook {
        OpeningBook::default()
    }

    /// Sets the word to open every game with.
    pub fn with_first_guess(mut self, word: &str) -> OpeningBook {
        self.first_guess = Some(Arc::from(word));
        self
    }

    /// Sets the second guess to use for each first-turn feedback code.
    pub fn with_second_guesses(
        mut self,
        second_guesses: HashMap<FeedbackCode, Arc<str>>,
    ) -> OpeningBook {
        self.second_guesses = second_guesses;
        self
    }

    pub fn first_guess(&self) -> Option<&Arc<str>> {
        self.first_guess.as_ref()
    }

    pub fn second_guess(&self, code: &FeedbackCode) -> Option<&Arc<str>> {
        self.second_guesses.get(code)
    }
}

/// Guesses the word that maximizes the score given by the provided scorer.
pub struct MaxScoreGuesser<S: WordScorer> {
    guess_mode: GuessFrom,
    all_words: Vec<Arc<str>>,
    all_unguessed_words: Vec<Arc<str>>,
    possible_words: Vec<Arc<str>>,
    guessed: Vec<Arc<str>>,
    restrictions: WordRestrictions,
    scorer: S,
    opening_book: Option<OpeningBook>,
    turn: usize,
    first_code: Option<FeedbackCode>,
}

impl<S: WordScorer> MaxScoreGuesser<S> {
    pub fn new(guess_mode: GuessFrom, bank: &WordBank, scorer: S) -> MaxScoreGuesser<S> {
        MaxScoreGuesser {
            guess_mode,
            all_words: bank.all_words(),
            all_unguessed_words: bank.all_words(),
            possible_words: bank.all_words(),
            guessed: Vec::new(),
            restrictions: WordRestrictions::new(),
            scorer,
            opening_book: None,
            turn: 0,
            first_code: None,
        }
    }

    /// As [`MaxScoreGuesser::new`], but consulting the given opening book on the first two
    /// turns.
    pub fn with_opening_book(
        guess_mode: GuessFrom,
        bank: &WordBank,
        scorer: S,
        opening_book: OpeningBook,
    ) -> MaxScoreGuesser<S> {
        let mut guesser = MaxScoreGuesser::new(guess_mode, bank, scorer);
        guesser.opening_book = Some(opening_book);
        guesser
    }

    /// The words that could still be the objective.
    pub fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }

    /// Returns the highest-scoring word; ties keep the earliest word in list order.
    fn best_scoring_word(&self, words: &[Arc<str>]) -> Option<Arc<str>> {
        let mut best: Option<(&Arc<str>, i64)> = None;
        for word in words {
            let score = self.scorer.score_word(word);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        best.map(|(word, _)| Arc::clone(word))
    }

    fn book_guess(&self) -> Option<Arc<str>> {
        let book = self.opening_book.as_ref()?;
        if self.turn == 0 {
            return book.first_guess().map(Arc::clone);
        }
        if self.turn == 1 {
            if let Some(code) = self.first_code {
                return book.second_guess(&code).map(Arc::clone);
            }
        }
        None
    }
}

impl<S: WordScorer> Guesser for MaxScoreGuesser<S> {
    fn update(&mut self, result: &GuessResult) -> Result<(), SolverError> {
        if self.turn == 0 {
            self.first_code = Some(result.code);
        }
        self.turn += 1;
        self.restrictions.update(result);
        // Remove the guess so it is not repeated; absence is fine, e.g. when the guess came
        // from an opening book rather than the word list.
        if let Some(position) = self
            .all_unguessed_words
            .iter()
            .position(|word| word.as_ref() == result.guess)
        {
            self.all_unguessed_words.remove(position);
        }
        if !self
            .guessed
            .iter()
            .any(|word| word.as_ref() == result.guess)
        {
            self.guessed.push(Arc::from(result.guess));
        }
        self.possible_words = get_possible_words(&self.restrictions, &self.all_words);
        self.possible_words
            .retain(|word| !self.guessed.contains(word));
        if self.possible_words.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        self.scorer
            .update(result.guess, &self.restrictions, &self.possible_words)
    }

    fn select_next_guess(&self) -> Option<Arc<str>> {
        if self.possible_words.len() > 1 {
            if let Some(guess) = self.book_guess() {
                return Some(guess);
            }
        }
        // With at most two candidates left, a direct attempt is at least as good as probing.
        if self.guess_mode == GuessFrom::AllUnguessedWords && self.possible_words.len() > 2 {
            return self.best_scoring_word(&self.all_unguessed_words);
        }
        self.best_scoring_word(&self.possible_words)
    }
}

/// Guesses at random from the possible words that meet the restrictions.
pub struct RandomGuesser {
    all_words: Vec<Arc<str>>,
    possible_words: Vec<Arc<str>>,
    guessed: Vec<Arc<str>>,
    restrictions: WordRestrictions,
}

impl RandomGuesser {
    pub fn new(bank: &WordBank) -> RandomGuesser {
        RandomGuesser {
            all_words: bank.all_words(),
            possible_words: bank.all_words(),
            guessed: Vec::new(),
            restrictions: WordRestrictions::new(),
        }
    }
}

impl Guesser for RandomGuesser {
    fn update(&mut self, result: &GuessResult) -> Result<(), SolverError> {
        self.restrictions.update(result);
        if !self
            .guessed
            .iter()
            .any(|word| word.as_ref() == result.guess)
        {
            self.guessed.push(Arc::from(result.guess));
        }
        self.possible_words = get_possible_words(&self.restrictions, &self.all_words);
        self.possible_words
            .retain(|word| !self.guessed.contains(word));
        if self.possible_words.is_empty() {
            return Err(SolverError::NoCandidates);
        }
        Ok(())
    }

    fn select_next_guess(&self) -> Option<Arc<str>> {
        if self.possible_words.is_empty() {
            return None;
        }
        let random: usize = rand::random();
        self.possible_words
            .get(random % self.possible_words.len())
            .map(Arc::clone)
    }
}

/// Supplies the feedback code for each guess of a game.
///
/// Automated play uses [`SecretWordSource`]; an external harness can implement this to feed
/// codes from elsewhere.
pub trait FeedbackSource {
    fn feedback_for(&mut self, guess: &str) -> Result<FeedbackCode, SolverError>;
}

/// Answers feedback queries from a known objective word via a [`FeedbackOracle`].
pub struct SecretWordSource<O> {
    objective: Arc<str>,
    oracle: O,
}

impl SecretWordSource<ComputedFeedback> {
    pub fn new(objective: &str) -> SecretWordSource<ComputedFeedback> {
        SecretWordSource::with_oracle(objective, ComputedFeedback)
    }
}

impl<O: FeedbackOracle> SecretWordSource<O> {
    pub fn with_oracle(objective: &str, oracle: O) -> SecretWordSource<O> {
        SecretWordSource {
            objective: Arc::from(objective),
            oracle,
        }
    }
}

impl<O: FeedbackOracle> FeedbackSource for SecretWordSource<O> {
    fn feedback_for(&mut self, guess: &str) -> Result<FeedbackCode, SolverError> {
        self.oracle.code_for_guess(&self.objective, guess)
    }
}

/// The record of a won game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSummary {
    /// Every guess submitted, in order. The last one is the winning word.
    pub guesses: Vec<Arc<str>>,
}

impl GameSummary {
    /// The number of turns the game took.
    pub fn num_turns(&self) -> usize {
        self.guesses.len()
    }
}

/// Runs the turn loop until the feedback source reports an all-correct guess.
///
/// There is no turn limit: the loop ends with the winning guesses, or with
/// [`SolverError::NoCandidates`] once inconsistent feedback (or an objective missing from the
/// word list) eliminates every candidate.
pub fn play_game<F, G>(mut source: F, mut guesser: G) -> Result<GameSummary, SolverError>
where
    F: FeedbackSource,
    G: Guesser,
{
    let mut guesses: Vec<Arc<str>> = Vec::new();
    loop {
        let guess = guesser.select_next_guess().ok_or(SolverError::NoCandidates)?;
        guesses.push(Arc::clone(&guess));
        let code = source.feedback_for(&guess)?;
        if code.is_all_correct() {
            return Ok(GameSummary { guesses });
        }
        guesser.update(&GuessResult {
            guess: &guess,
            code,
        })?;
    }
}

/// Attempts to guess the given word, computing feedback automatically.
pub fn play_game_with_guesser<G: Guesser>(
    objective: &str,
    guesser: G,
) -> Result<GameSummary, SolverError> {
    play_game(SecretWordSource::new(objective), guesser)
}

/// Computes the best greedy second guess for every feedback code the given first guess can
/// receive against `answer_words`.
///
/// For each distinct code (the all-correct code excepted, as the game is already over), the
/// answers consistent with that code are partition-scored against every word in `guess_words`
/// other than the first guess, and the minimax winner is recorded. Codes are evaluated in
/// parallel. The resulting table plugs into [`OpeningBook::with_second_guesses`].
pub fn build_second_guess_table<O>(
    first_guess: &str,
    guess_words: &[Arc<str>],
    answer_words: &[Arc<str>],
    oracle: &O,
) -> Result<HashMap<FeedbackCode, Arc<str>>, SolverError>
where
    O: FeedbackOracle + Sync,
{
    let mut seen = HashSet::new();
    let mut codes = Vec::new();
    for answer in answer_words {
        let code = oracle.code_for_guess(answer, first_guess)?;
        if !code.is_all_correct() && seen.insert(code) {
            codes.push(code);
        }
    }
    codes
        .par_iter()
        .map(|code| {
            let restrictions = WordRestrictions::from_result(&GuessResult {
                guess: first_guess,
                code: *code,
            });
            let candidates = get_possible_words(&restrictions, answer_words);
            if candidates.is_empty() {
                return Err(SolverError::NoCandidates);
            }
            let scorer = MinimaxPartitionScorer::with_oracle(&candidates, oracle);
            let mut best: Option<(&Arc<str>, i64)> = None;
            for word in guess_words
                .iter()
                .filter(|word| word.as_ref() != first_guess)
            {
                let score = scorer.score_word(word);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((word, score));
                }
            }
            best.map(|(word, _)| (*code, Arc::clone(word)))
                .ok_or(SolverError::NoCandidates)
        })
        .collect()
}
