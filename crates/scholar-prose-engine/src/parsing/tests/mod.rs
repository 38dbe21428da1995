//! Pipeline tests for the parsing module.
//!
//! Each test runs the whole pipeline, checks the output invariants, and pins
//! the result with an inline outline snapshot.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{BlockKind, TextLine},
    classify_document, classify_document_with,
    inline::Span,
    parse_blocks, snapshot,
    thresholds::Thresholds,
};

fn outline_of(raw: &str) -> String {
    outline_with(raw, &Thresholds::default())
}

fn outline_with(raw: &str, thresholds: &Thresholds) -> String {
    let result = classify_document_with(raw, thresholds);
    snapshot::invariants(raw, thresholds, &result.blocks);
    snapshot::outline(&result.blocks)
}

// Single-construct inputs

#[test]
fn heading() {
    insta::assert_snapshot!(outline_of("## Eligibility"), @r"
    heading h2 (callout)
      Eligibility
    ");
}

#[test]
fn bullet_list() {
    insta::assert_snapshot!(outline_of("- Item A\n- Item B"), @r"
    bullet-list (callout)
      - Item A
      - Item B
    ");
}

#[test]
fn numbered_item_with_title() {
    insta::assert_snapshot!(
        outline_of("1. Financial Stability Working for a year or two can help you save money..."),
        @r"
    numbered-list (callout)
      1. [Financial Stability] Working for a year or two can help you save money...
    "
    );
}

#[test]
fn bold_phrase_inside_numbered_item_keeps_its_spans() {
    let result = classify_document("1. Apply **as early as possible** because deadlines fall months ahead");
    let BlockKind::NumberedList { items, .. } = &result.blocks[0].kind else {
        panic!("expected a numbered list, got {:?}", result.blocks[0].kind);
    };
    assert_eq!(
        items[0].title,
        vec![
            Span::plain("Apply "),
            Span::bold("as early as possible"),
            Span::plain(" because deadlines fall months ahead"),
        ]
    );
    assert!(items[0].body.is_empty());
}

#[test]
fn document_list() {
    insta::assert_snapshot!(outline_of("Required documents:\n- Transcript\n- Passport photo"), @r"
    document-list (callout)
      header: Required documents:
      - Transcript
      - Passport photo
    ");
}

#[test]
fn colon_header_without_document_keyword() {
    insta::assert_snapshot!(outline_of("Popular majors:\nEngineering\nNursing"), @r"
    bullet-list (callout)
      header: Popular majors:
      - Engineering
      - Nursing
    ");
}

#[test]
fn unclosed_bold_is_literal() {
    let result = classify_document("**bold without closing");
    assert_eq!(result.blocks.len(), 1);
    assert_eq!(
        result.blocks[0].kind,
        BlockKind::Paragraph {
            lines: vec![TextLine {
                spans: vec![Span::plain("**bold without closing")],
                is_step: false,
            }],
        }
    );
}

// Whole documents

const ARTICLE: &str = "\
Winning a scholarship takes planning. Here is how to start.

## Eligibility

Academic
- GPA of 3.0 or higher
- Full-time enrollment
Financial
- Demonstrated need

1. Research early Most scholarship deadlines fall months before the school year begins
2. Write a strong essay

Visit the official portal
Create your applicant profile
Upload your transcript
Submit before the deadline

In conclusion, *preparation* is what sets **winning** applicants apart.
";

#[test]
fn full_article() {
    insta::assert_snapshot!(outline_of(ARTICLE), @r"
    paragraph (callout)
      | Winning a scholarship takes planning. Here is how to start.
    heading h2
      Eligibility
    grouped-list
      Academic
        - GPA of 3.0 or higher
        - Full-time enrollment
      Financial
        - Demonstrated need
    numbered-list
      1. [Research early] Most scholarship deadlines fall months before the school year begins
      2. [Write a strong essay]
    step-list
      -> Visit the official portal
      -> Create your applicant profile
      -> Upload your transcript
      -> Submit before the deadline
    paragraph (callout)
      | In conclusion, *preparation* is what sets **winning** applicants apart.
    ");
}

#[test]
fn artifact_tokens_become_breaks() {
    insta::assert_snapshot!(
        outline_of("Eligible majors nest Engineering nest Nursing stop Apply before March"),
        @r"
    paragraph (callout)
      | Eligible majors
      | Engineering
      | Nursing
    paragraph
      | Apply before March
    "
    );
}

#[test]
fn hyphenated_words_are_not_artifacts() {
    insta::assert_snapshot!(
        outline_of("ScholarHunt is your one-stop guide to funding for international students."),
        @r"
    paragraph (callout)
      | ScholarHunt is your one-stop guide to funding for international students.
    "
    );
}

#[test]
fn artifact_repair_can_be_switched_off() {
    let thresholds = Thresholds {
        repair_artifacts: false,
        ..Thresholds::default()
    };
    insta::assert_snapshot!(
        outline_with("Eligible majors nest Engineering nest Nursing stop Apply before March", &thresholds),
        @r"
    paragraph (callout)
      | Eligible majors nest Engineering nest Nursing stop Apply before March
    "
    );
}

#[test]
fn advertisement_and_noise_are_dropped() {
    insta::assert_snapshot!(
        outline_of("- Advertisement -\n\nThe award covers full tuition.\n\nShare\n\n- Item A\n- Item B"),
        @r"
    paragraph (callout)
      | The award covers full tuition.
    bullet-list
      - Item A
      - Item B
    "
    );
}

// Properties

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\n")]
#[case("Too short")]
fn nothing_to_classify(#[case] raw: &str) {
    assert!(classify_document(raw).is_empty());
}

#[rstest]
#[case(ARTICLE)]
#[case("## Eligibility")]
#[case("**bold without closing")]
#[case("* lone star and *** triple run *")]
#[case("1.\n2.\n3. Only the last one has text")]
#[case("Academic\n- A\nFinancial")]
#[case("The award covers tuition fees. Recipients must keep a 3.0 GPA; Renewal is annual")]
#[case("Is this for you? Then read on! Deadlines are strict! Apply soon.")]
#[case("Applicants must be enrolled. Submit the following: transcript, photo and two letters")]
#[case("–bulletin first item –bulletin second item")]
fn invariants_hold(#[case] raw: &str) {
    let result = classify_document(raw);
    assert!(!result.is_empty(), "no blocks for {raw:?}");
    snapshot::invariants(raw, &Thresholds::default(), &result.blocks);
}

#[test]
fn pipeline_is_deterministic() {
    assert_eq!(classify_document(ARTICLE), classify_document(ARTICLE));
}

#[test]
fn keyword_callouts_need_the_detector() {
    let raw = "Opening paragraph here.\n\nIn summary, apply early and often.";
    let structural: Vec<bool> = parse_blocks(raw, &Thresholds::default())
        .iter()
        .map(|b| b.is_callout)
        .collect();
    let detected: Vec<bool> = classify_document(raw)
        .blocks
        .iter()
        .map(|b| b.is_callout)
        .collect();
    assert_eq!(structural, vec![true, false]);
    assert_eq!(detected, vec![true, true]);
}
