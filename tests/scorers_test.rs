#[macro_use]
extern crate assert_matches;

use guesswork::scorers::*;
use guesswork::*;

use std::collections::HashMap;
use std::sync::Arc;

macro_rules! test_scorer {
    ($construct_scorer_from_bank_fn:ident, $guess_from:expr) => {
        #[test]
        fn solves_every_word_in_the_bank() -> Result<(), SolverError> {
            let bank = WordBank::from_iterator(vec![
                "alpha", "allot", "begot", "below", "endow", "ingot",
            ])?;
            for objective in bank.iter() {
                let scorer = $construct_scorer_from_bank_fn(&bank);
                let guesser = MaxScoreGuesser::new($guess_from, &bank, scorer);

                let summary = play_game_with_guesser(objective, guesser)?;

                assert_eq!(summary.guesses.last(), Some(objective));
            }
            Ok(())
        }

        #[test]
        fn guesses_come_from_the_bank() -> Result<(), SolverError> {
            let bank = WordBank::from_iterator(vec![
                "alpha", "allot", "begot", "below", "endow", "ingot",
            ])?;
            let scorer = $construct_scorer_from_bank_fn(&bank);
            let guesser = MaxScoreGuesser::new($guess_from, &bank, scorer);

            let summary = play_game_with_guesser("endow", guesser)?;

            for guess in &summary.guesses {
                assert!(bank.contains(guess));
            }
            Ok(())
        }
    };
}

mod letter_frequency_scorer {
    use super::*;

    fn create_scorer(bank: &WordBank) -> LetterFrequencyScorer {
        LetterFrequencyScorer::new(bank)
    }

    test_scorer!(create_scorer, GuessFrom::PossibleWords);

    #[test]
    fn score_word_sums_distinct_letter_occurrences() -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec!["robot", "raise", "feast", "crane"])?;
        let scorer = LetterFrequencyScorer::new(&bank);

        // Occurrence totals: r=3, o=2, b=1, t=2, a=3, i=1, s=2, e=3, f=1, c=1, n=1.
        // The repeated 'o' in "robot" is scored once.
        assert_eq!(scorer.score_word(&Arc::from("robot")), 3 + 2 + 1 + 2);
        assert_eq!(scorer.score_word(&Arc::from("raise")), 3 + 3 + 1 + 2 + 3);
        assert_eq!(scorer.score_word(&Arc::from("feast")), 1 + 3 + 3 + 2 + 2);
        assert_eq!(scorer.score_word(&Arc::from("crane")), 1 + 3 + 3 + 1 + 3);
        Ok(())
    }

    #[test]
    fn highest_scoring_word_is_selected() -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec!["robot", "raise", "feast", "crane"])?;
        let guesser = MaxScoreGuesser::new(
            GuessFrom::PossibleWords,
            &bank,
            LetterFrequencyScorer::new(&bank),
        );

        assert_eq!(guesser.select_next_guess().as_deref(), Some("raise"));
        Ok(())
    }

    #[test]
    fn ties_keep_the_first_word_in_list_order() -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec!["abcde", "abcdf"])?;
        let guesser = MaxScoreGuesser::new(
            GuessFrom::PossibleWords,
            &bank,
            LetterFrequencyScorer::new(&bank),
        );

        assert_eq!(guesser.select_next_guess().as_deref(), Some("abcde"));
        Ok(())
    }
}

mod letter_proportion_scorer {
    use super::*;

    fn create_scorer(bank: &WordBank) -> LetterProportionScorer {
        LetterProportionScorer::new(bank)
    }

    test_scorer!(create_scorer, GuessFrom::PossibleWords);

    #[test]
    fn score_word_uses_signed_distance_from_half_prevalence() -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec!["robot", "raise", "feast", "crane"])?;
        let scorer = LetterProportionScorer::new(&bank);

        // Each distinct letter contributes 50 - (0.5 - p) * 10 where p is the fraction of
        // words containing it, then the sum is scaled by 1000.
        // "raise": r and a and e appear in 3/4 of words (52.5), s in 2/4 (50), i in 1/4 (47.5).
        assert_eq!(scorer.score_word(&Arc::from("raise")), 255_000);
        assert_eq!(scorer.score_word(&Arc::from("feast")), 252_500);
        assert_eq!(scorer.score_word(&Arc::from("crane")), 252_500);
        assert_eq!(scorer.score_word(&Arc::from("robot")), 197_500);
        Ok(())
    }

    #[test]
    fn updating_with_no_candidates_is_an_error() -> Result<(), SolverError> {
        let bank = WordBank::from_iterator(vec!["robot", "raise"])?;
        let mut scorer = LetterProportionScorer::new(&bank);
        let restrictions = WordRestrictions::new();

        assert_matches!(
            scorer.update("robot", &restrictions, &[]),
            Err(SolverError::NoCandidates)
        );
        Ok(())
    }
}

mod minimax_partition_scorer {
    use super::*;

    fn create_scorer(bank: &WordBank) -> MinimaxPartitionScorer {
        MinimaxPartitionScorer::new(bank)
    }

    test_scorer!(create_scorer, GuessFrom::AllUnguessedWords);

    fn fixture() -> WordBank {
        WordBank::from_iterator(vec![
            "crane", "slate", "grime", "shard", "pound", "blitz", "fjord", "gypsy", "whack",
            "mover",
        ])
        .unwrap()
    }

    fn brute_force_worst_case(guess: &str, candidates: &[Arc<str>]) -> usize {
        let mut partitions: HashMap<FeedbackCode, usize> = HashMap::new();
        for candidate in candidates {
            let code = get_code_for_guess(candidate, guess).unwrap();
            *partitions.entry(code).or_insert(0) += 1;
        }
        partitions.values().copied().max().unwrap_or(0)
    }

    #[test]
    fn worst_case_partition_matches_brute_force() {
        let bank = fixture();
        let scorer = MinimaxPartitionScorer::new(&bank);

        for guess in bank.iter() {
            assert_eq!(
                scorer.worst_case_partition(guess),
                brute_force_worst_case(guess, &bank),
                "mismatch for guess {}",
                guess
            );
        }
    }

    #[test]
    fn selected_guess_minimizes_the_worst_case() {
        let bank = fixture();
        let guesser = MaxScoreGuesser::new(
            GuessFrom::AllUnguessedWords,
            &bank,
            MinimaxPartitionScorer::new(&bank),
        );

        let selected = guesser.select_next_guess().unwrap();

        // Recompute the minimax winner by brute force, breaking ties by list order.
        let mut best: Option<(&Arc<str>, usize)> = None;
        for guess in bank.iter() {
            let worst = brute_force_worst_case(guess, &bank);
            if best.map_or(true, |(_, best_worst)| worst < best_worst) {
                best = Some((guess, worst));
            }
        }
        assert_eq!(&selected, best.unwrap().0);
    }

    #[test]
    fn worst_case_partition_counts_candidates() {
        let candidates: Vec<Arc<str>> = ["crane", "crate", "grace"]
            .iter()
            .map(|word| Arc::from(*word))
            .collect();
        let scorer = MinimaxPartitionScorer::new(&candidates);

        // "crane" gives a distinct code for every candidate; an unrelated word leaves all
        // three candidates in a single partition.
        assert_eq!(scorer.worst_case_partition("crane"), 1);
        assert_eq!(scorer.worst_case_partition("moldy"), 3);
    }

    #[test]
    fn precomputed_oracle_scores_like_the_live_one() -> Result<(), SolverError> {
        let bank = fixture();
        let cache = PrecomputedFeedback::from_words(&bank, &bank)?;
        let live = MinimaxPartitionScorer::new(&bank);
        let cached = MinimaxPartitionScorer::with_oracle(&bank, &cache);

        for guess in bank.iter() {
            assert_eq!(live.score_word(guess), cached.score_word(guess));
        }
        Ok(())
    }
}
