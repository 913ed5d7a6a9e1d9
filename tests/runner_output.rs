use snippets_core::config::OutputFormat;
use snippets_core::runner::{
    run_exercise, CountSwaps, Exercise, MakeAnagram, MinAbsDiff, MinimumBribes, RotateLeft,
};
use snippets_core::SnippetError;

fn run_text<E: Exercise>(exercise: &E, input: &str) -> Result<String, SnippetError> {
    let mut out = Vec::new();
    run_exercise(exercise, input.as_bytes(), &mut out, OutputFormat::Text)?;
    Ok(String::from_utf8(out).unwrap())
}

fn run_json<E: Exercise>(exercise: &E, input: &str) -> serde_json::Value {
    let mut out = Vec::new();
    run_exercise(exercise, input.as_bytes(), &mut out, OutputFormat::Json).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn count_swaps_text_output() {
    assert_eq!(
        run_text(&CountSwaps, "3\n3 2 1\n").unwrap(),
        "Array is sorted in 3 swaps.\nFirst Element: 1\nLast Element: 3\n"
    );
    assert_eq!(
        run_text(&CountSwaps, "1\n5\n").unwrap(),
        "Array is sorted in 0 swaps.\nFirst Element: 5\nLast Element: 5\n"
    );
}

#[test]
fn count_swaps_json_output() {
    assert_eq!(
        run_json(&CountSwaps, "4\n4 2 3 1\n"),
        serde_json::json!({"swaps": 5, "first": 1, "last": 4})
    );
}

#[test]
fn rotate_left_text_output() {
    assert_eq!(
        run_text(&RotateLeft, "5 4\n1 2 3 4 5\n").unwrap(),
        "5 1 2 3 4\n"
    );
}

#[test]
fn minimum_bribes_text_output() {
    let input = "2\n8\n5 1 2 3 7 8 6 4\n8\n1 2 5 3 7 8 6 4\n";
    assert_eq!(
        run_text(&MinimumBribes, input).unwrap(),
        "Too chaotic\n7\n"
    );
}

#[test]
fn minimum_bribes_json_output() {
    assert_eq!(
        run_json(&MinimumBribes, "1\n5\n2 1 5 3 4\n"),
        serde_json::json!({"cases": [{"outcome": "bribes", "bribes": 3}]})
    );
}

#[test]
fn min_abs_diff_text_output() {
    let input = "10\n-59 -36 -13 1 -53 -92 -2 -96 -54 75\n";
    assert_eq!(run_text(&MinAbsDiff, input).unwrap(), "1\n");
}

#[test]
fn make_anagram_text_output() {
    let input = "fcrxzwscanmligyxyvym\njxwtrhvujlmrpdoqbisbwhmgpmeoke\n";
    assert_eq!(run_text(&MakeAnagram, input).unwrap(), "30\n");
}

#[test]
fn malformed_input_is_reported() {
    assert!(matches!(
        run_text(&CountSwaps, "3\n1 two 3\n"),
        Err(SnippetError::InvalidNumber { line: 2, .. })
    ));
    assert!(matches!(
        run_text(&RotateLeft, "5 1\n1 2 3\n"),
        Err(SnippetError::CountMismatch {
            expected: 5,
            found: 3,
            line: 2
        })
    ));
    assert!(matches!(
        run_text(&MakeAnagram, "only one line\n"),
        Err(SnippetError::UnexpectedEof { .. })
    ));
}

#[test]
fn nothing_is_written_on_error() {
    let mut out = Vec::new();
    let result = run_exercise(&MinAbsDiff, "1\n7\n".as_bytes(), &mut out, OutputFormat::Text);
    assert!(result.is_err());
    assert!(out.is_empty());
}
