use crate::results::get_code_for_guess;
use crate::results::FeedbackCode;
use crate::results::SolverError;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies the feedback code a guess would receive against an objective word.
///
/// The engine computes feedback on the fly by default, but batch analysis of the minimax
/// strategy re-evaluates the same word pairs many times per game; injecting a
/// [`PrecomputedFeedback`] cache through this trait avoids the recomputation without changing
/// any caller.
pub trait FeedbackOracle {
    fn code_for_guess(&self, objective: &str, guess: &str) -> Result<FeedbackCode, SolverError>;
}

impl<O: FeedbackOracle + ?Sized> FeedbackOracle for &O {
    fn code_for_guess(&self, objective: &str, guess: &str) -> Result<FeedbackCode, SolverError> {
        (**self).code_for_guess(objective, guess)
    }
}

/// Computes feedback live via [`get_code_for_guess`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ComputedFeedback;

impl FeedbackOracle for ComputedFeedback {
    fn code_for_guess(&self, objective: &str, guess: &str) -> Result<FeedbackCode, SolverError> {
        get_code_for_guess(objective, guess)
    }
}

/// A read-only pairwise feedback cache.
///
/// Holds the code for every (objective, guess) pair it was built with; pairs outside the cache
/// fall back to live computation, so the cache is transparent to callers. Building it costs
/// one feedback evaluation per pair and is parallelized across objectives.
#[derive(Clone, Debug)]
pub struct PrecomputedFeedback {
    codes: HashMap<Arc<str>, HashMap<Arc<str>, FeedbackCode>>,
}

impl PrecomputedFeedback {
    /// Precomputes the code for every guess in `guesses` against every objective in
    /// `objectives`.
    pub fn from_words(
        objectives: &[Arc<str>],
        guesses: &[Arc<str>],
    ) -> Result<PrecomputedFeedback, SolverError> {
        let codes = objectives
            .par_iter()
            .map(|objective| {
                let mut row = HashMap::with_capacity(guesses.len());
                for guess in guesses {
                    let code = get_code_for_guess(objective, guess)?;
                    row.insert(Arc::clone(guess), code);
                }
                Ok((Arc::clone(objective), row))
            })
            .collect::<Result<HashMap<_, _>, SolverError>>()?;
        Ok(PrecomputedFeedback { codes })
    }

    /// The number of cached pairs.
    pub fn len(&self) -> usize {
        self.codes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FeedbackOracle for PrecomputedFeedback {
    fn code_for_guess(&self, objective: &str, guess: &str) -> Result<FeedbackCode, SolverError> {
        if let Some(code) = self
            .codes
            .get(objective)
            .and_then(|row| row.get(guess))
        {
            return Ok(*code);
        }
        get_code_for_guess(objective, guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn precomputed_feedback_agrees_with_live_computation() -> Result<(), SolverError> {
        let list = words(&["robot", "raise", "feast", "crane"]);
        let cache = PrecomputedFeedback::from_words(&list, &list)?;

        assert_eq!(cache.len(), list.len() * list.len());
        for objective in &list {
            for guess in &list {
                assert_eq!(
                    cache.code_for_guess(objective, guess)?,
                    get_code_for_guess(objective, guess)?
                );
            }
        }
        Ok(())
    }

    #[test]
    fn precomputed_feedback_falls_back_for_unknown_pairs() -> Result<(), SolverError> {
        let list = words(&["robot", "raise"]);
        let cache = PrecomputedFeedback::from_words(&list, &list)?;

        assert_eq!(
            cache.code_for_guess("crane", "feast")?,
            get_code_for_guess("crane", "feast")?
        );
        Ok(())
    }
}
