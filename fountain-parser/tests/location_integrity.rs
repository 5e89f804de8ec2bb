//! Location integrity for the repaired token stream
//!
//! The locator's cursor never rewinds, so located tokens must come out in
//! non-decreasing line order for any input, and misses must come out as
//! `Unresolved` without failing the pipeline.

use fountain_parser::fountain::token::LineRef;
use fountain_parser::fountain::transforms::standard::tokenize_document;
use proptest::prelude::*;

fn assert_monotonic_lines(source: &str) {
    let tokens = tokenize_document(source).unwrap();
    let mut previous = None;
    for token in &tokens {
        if let LineRef::Located(line) = token.line {
            if let Some(prev) = previous {
                assert!(
                    line >= prev,
                    "line {line} after line {prev} in {source:?}"
                );
            }
            previous = Some(line);
        }
    }
}

/// A pool of realistic block shapes the generator draws from.
fn block_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("INT. KITCHEN - DAY".to_string()),
        Just("EXT. ROOFTOP - NIGHT #2#".to_string()),
        Just("JOHN\nHello there.".to_string()),
        Just("MARY^\n(softly)\nNo!".to_string()),
        Just("@BRICK (ON PHONE)\nI hear you.".to_string()),
        Just(">BURN TO BLACK".to_string()),
        Just("> THE END <".to_string()),
        Just("~ la la la".to_string()),
        Just("## Midpoint".to_string()),
        Just("= They fight.".to_string()),
        Just("[[fix this beat]]".to_string()),
        Just("SMASH CUT TO:".to_string()),
        // free-form action prose
        "[a-z][a-z .,']{0,30}",
    ]
}

proptest! {
    #[test]
    fn located_lines_are_non_decreasing(blocks in prop::collection::vec(block_strategy(), 0..12)) {
        let source = blocks.join("\n\n");
        assert_monotonic_lines(&source);
    }

    #[test]
    fn pipeline_never_panics_on_marker_soup(source in "[-A-Za-z0-9 @~>^#=().\\[\\]\n]{0,200}") {
        // any outcome is fine as long as it is a value, not a panic
        let _ = tokenize_document(&source);
    }
}

#[test]
fn test_repeated_identical_cues_resolve_in_order() {
    let source = "JOHN\nHi.\n\nJOHN\nHi.\n\nJOHN\nHi.\n";
    let tokens = tokenize_document(source).unwrap();
    let cues: Vec<usize> = tokens
        .iter()
        .filter(|t| t.text == "JOHN")
        .map(|t| t.line.index().unwrap())
        .collect();
    assert_eq!(cues, vec![0, 3, 6]);
}

#[test]
fn test_unmatchable_token_resolves_to_unresolved() {
    // the boneyard text exists on the source line but was stripped from
    // the body, so the dialogue token can never match a line
    let tokens = tokenize_document("JOHN\nso /* gone */ it goes.\n").unwrap();
    assert_eq!(tokens[1].line, LineRef::Unresolved);
    assert_monotonic_lines("JOHN\nso /* gone */ it goes.\n");
}
