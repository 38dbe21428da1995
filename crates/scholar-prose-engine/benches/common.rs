// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let base = "## Eligibility\n\n\
                Applicants must be enrolled full time and keep a **3.0** GPA.\n\n\
                Academic\n- Transcript\n- Two references\nFinancial\n- Tax return\n\n\
                1. Research early Most deadlines fall months before the school year begins\n\
                2. Write a strong essay\n\n\
                Visit the portal\nCreate a profile\nUpload your essay\nSubmit before May\n\n";
    let mut content = String::from("Winning a scholarship takes *planning*.\n\n");
    content.push_str(&base.repeat(sections));
    content.push_str("In conclusion, start early and apply widely.");
    content
}

#[allow(dead_code)]
pub fn generate_single_run(sentences: usize) -> String {
    "The award covers tuition. Recipients must reapply each year! "
        .repeat(sentences / 2)
        .trim_end()
        .to_string()
}
