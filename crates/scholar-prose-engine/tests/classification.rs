use scholar_prose_engine::{
    ArticleNode, RequirementBody, Thresholds, classify_document,
    parsing::snapshot,
    render::{Inset, html::article_to_html},
    render_article, render_requirements,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn outline_fixture(name: &str) -> String {
    let raw = fixture(name);
    let result = classify_document(&raw);
    snapshot::invariants(&raw, &Thresholds::default(), &result.blocks);
    snapshot::outline(&result.blocks)
}

#[test]
fn fixture_scholarship_description() {
    insta::assert_snapshot!(outline_fixture("scholarship_description"), @r"
    paragraph (callout)
      | The Future Leaders Award supports first-generation students.
    heading h2
      Eligibility
    document-list
      header: Applicants must meet all of the following:
      - Enrolled full time at an accredited college
      - GPA of **3.0** or higher
      - Demonstrated financial need
    heading h3
      Required documents
    document-list
      header: Documents to prepare:
      - Official transcript
      - Two letters of recommendation
      - Proof of income
    paragraph (callout)
      | To conclude, the award renews each year for good standing.
    ");
}

#[test]
fn fixture_blog_post() {
    insta::assert_snapshot!(outline_fixture("blog_post"), @r"
    heading h1 (callout)
      Five Reasons to Take a Gap Year
    paragraph
      | Many students wonder whether a gap year hurts their chances. It usually does not.
    numbered-list
      1. [Financial Stability] Working for a year or two can help you save money for tuition
      2. [**Clarity**] time away from school helps you choose a major you actually want
      3. [Experience]
    grouped-list
      Before you apply
        - Check the deadline
        - Read the essay prompt
      After you apply
        - Track your email
        - Prepare for interviews
    paragraph (callout)
      | In conclusion, a gap year can **transform your** application.
    ");
}

#[test]
fn fixture_pdf_paste() {
    insta::assert_snapshot!(outline_fixture("pdf_paste"), @r"
    paragraph (callout)
      | Applicants must be residents of Ohio.
    paragraph
      | Submit the following:
    paragraph
      | transcript, two references and a personal statement
    ");
}

#[test]
fn fixture_corrupted() {
    insta::assert_snapshot!(outline_fixture("corrupted"), @r"
    paragraph (callout)
      | Eligible fields
      | Engineering
      | Nursing
      | Education
    bullet-list
      - Must be a junior
      - Must volunteer 20 hours
    ");
}

#[test]
fn blog_post_article_ends_with_follow_up() {
    let article = render_article(classify_document(&fixture("blog_post")));
    assert!(matches!(
        article.nodes.last(),
        Some(ArticleNode::FollowUp { .. })
    ));

    let html = article_to_html(&article);
    assert!(html.starts_with("<article class=\"prose\">"));
    assert!(html.contains("<div class=\"grouped-list\">"));
    assert!(html.contains("<span class=\"item-title\"><strong>Clarity</strong></span>"));
}

#[test]
fn requirement_lines_from_fixture() {
    let raw = fixture("requirements");
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    let items = render_requirements(&lines, &Thresholds::default());

    let badges: Vec<usize> = items.iter().map(|i| i.badge).collect();
    assert_eq!(badges, vec![1, 2, 3]);
    assert!(matches!(items[0].body, RequirementBody::Plain { .. }));
    assert!(matches!(items[1].body, RequirementBody::Plain { .. }));
    assert!(matches!(
        items[2].body,
        RequirementBody::Structured {
            inset: Inset::StepByStep,
            ..
        }
    ));
}

#[test]
fn every_fixture_is_deterministic() {
    for name in ["scholarship_description", "blog_post", "pdf_paste", "corrupted"] {
        let raw = fixture(name);
        assert_eq!(classify_document(&raw), classify_document(&raw), "{name}");
    }
}
