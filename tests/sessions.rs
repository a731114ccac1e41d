use std::fs;

use bigcalc::run;
use walkdir::WalkDir;

/// Splits a transcript into the session input and the expected output.
///
/// Lines starting with `>` are typed by the user; every other line is expected
/// output. A line starting with `#` is a comment.
fn split_transcript(content: &str) -> (String, String) {
    let mut input = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(typed) = line.strip_prefix('>') {
            input.push_str(typed.strip_prefix(' ').unwrap_or(typed));
            input.push('\n');
        } else {
            expected.push_str(line);
            expected.push('\n');
        }
    }

    (input, expected)
}

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (input, expected) = split_transcript(&content);

        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap_or_else(|e| panic!("{path:?}: {e}"));
        let output = String::from_utf8(output).expect("session output is UTF-8");

        assert_eq!(output, expected, "transcript {path:?} diverged");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}
