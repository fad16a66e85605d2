#[macro_use]
extern crate assert_matches;

use guesswork::*;

use std::str::FromStr;

#[test]
fn get_code_for_guess_same_word_is_all_correct() {
    for word in ["crane", "abbey", "fuzzy"] {
        let code = get_code_for_guess(word, word).unwrap();

        assert!(code.is_all_correct());
        assert_eq!(code, FeedbackCode::ALL_CORRECT);
    }
}

#[test]
fn get_code_for_guess_partial() {
    let code = get_code_for_guess("piano", "amino").unwrap();

    assert_eq!(
        code.iter().collect::<Vec<LetterResult>>(),
        vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::Correct,
        ]
    );
}

#[test]
fn get_code_for_guess_none_match() {
    let code = get_code_for_guess("crane", "build").unwrap();

    assert_eq!(code, FeedbackCode::from_str(".....").unwrap());
}

#[test]
fn get_code_for_guess_over_reports_repeated_letters() {
    // The objective has a single 'e', matched exactly at the last position, yet the earlier
    // 'e's still read as present: occurrences are not consumed by correct matches.
    let code = get_code_for_guess("crane", "eerie").unwrap();

    assert_eq!(code, FeedbackCode::from_str("yyy.g").unwrap());
}

#[test]
fn get_code_for_guess_wrong_length() {
    assert_matches!(get_code_for_guess("goal", "guess"), Err(SolverError::WordLength(4)));
    assert_matches!(
        get_code_for_guess("crane", "cranes"),
        Err(SolverError::WordLength(6))
    );
}

#[test]
fn feedback_code_from_str_rejects_malformed_codes() {
    assert_matches!(FeedbackCode::from_str("gg"), Err(SolverError::InvalidFeedback));
    assert_matches!(
        FeedbackCode::from_str("gyyggg"),
        Err(SolverError::InvalidFeedback)
    );
    assert_matches!(
        FeedbackCode::from_str("gyxg."),
        Err(SolverError::InvalidFeedback)
    );
}
