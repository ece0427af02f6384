//! Testing utilities
//!
//! Round-trip tests compare a reconstructed document with its source. A plain `assert_eq!`
//! on two multi-line strings is hard to read when they differ by one indented line, so
//! [assert_text_eq] reports the differing lines instead.

/// Assert that two strings are equal, with a line-by-line diff on failure.
///
/// # Panics
///
/// Panics if the strings differ, listing every mismatched, missing or extra line.
pub fn assert_text_eq(expected: &str, actual: &str) {
    if let Some(report) = diff_text(expected, actual) {
        panic!("\n\n{report}\n");
    }
}

/// Compare two strings and return a diff report without panicking.
///
/// Returns `None` if the strings are equal.
pub fn diff_text(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let max_lines = expected_lines.len().max(actual_lines.len());

    let mut diff_lines = Vec::new();
    for i in 0..max_lines {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(exp), Some(act)) if exp == act => {}
            (Some(exp), Some(act)) => {
                diff_lines.push(format!("Line {}: MISMATCH", i + 1));
                diff_lines.push(format!("  Expected: {exp:?}"));
                diff_lines.push(format!("  Actual:   {act:?}"));
            }
            (Some(exp), None) => {
                diff_lines.push(format!("Line {}: MISSING in actual", i + 1));
                diff_lines.push(format!("  Expected: {exp:?}"));
            }
            (None, Some(act)) => {
                diff_lines.push(format!("Line {}: EXTRA in actual", i + 1));
                diff_lines.push(format!("  Actual:   {act:?}"));
            }
            (None, None) => unreachable!(),
        }
    }

    Some(format!(
        "Text differs:\n{}\n\nExpected ({} lines):\n{expected}\n\nActual ({} lines):\n{actual}",
        diff_lines.join("\n"),
        expected_lines.len(),
        actual_lines.len(),
    ))
}
