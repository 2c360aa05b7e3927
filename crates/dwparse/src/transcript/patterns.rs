//! Compiled patterns for transcript field extraction.
//!
//! Label tables are ordered most-specific-first; extraction takes the first
//! table entry that matches anywhere in the text, so `Cumulative GPA` is
//! tried before the generic `GPA` label that would otherwise pre-empt it.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of characters between the end of a course code and the
/// grade or registration marker attributed to it.
pub const COURSE_WINDOW: usize = 50;

// Identity labels capture the remainder of their line only.
pub static STUDENT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Student:[^\S\n]*([^\n]+)").unwrap());
pub static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bID:[^\S\n]*([^\n]+)").unwrap());
pub static MAJOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Major:[^\S\n]*([^\n]+)").unwrap());

/// GPA labels, most specific first.
pub static GPA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_label_table(&[
        "Overall GPA",
        "Cumulative GPA",
        "GPA",
        "Grade Point Average",
    ])
});

/// Earned-credit labels, first match wins.
pub static CREDIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_label_table(&[
        "Total Credits",
        "Credits Earned",
        "Total Hours",
        "Earned Hours",
        "Total Credit Hours",
    ])
});

/// Course code shape: 2-4 uppercase letters, optional whitespace, 3-4 digits.
pub static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,4}\s*\d{3,4}").unwrap());

/// A standalone letter grade, optionally suffixed `+`/`-`. The trailing
/// alternation stands in for a lookahead so `B` inside `Biology` never
/// counts as a grade.
pub static GRADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([ABCDF][+\-]?)(?:[^\w+\-]|$)").unwrap());

/// Registration-status markers for in-progress courses (case-insensitive).
pub static ONGOING_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:IP|REG|ENROLLED|IN\s+PROGRESS)\b").unwrap());

/// Builds `<label>[\s:]+(<number>)` regexes for an ordered label list.
fn compile_label_table(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i){}[\s:]+(\d+(?:\.\d+)?)", regex::escape(label))).unwrap()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_code_shape() {
        assert!(COURSE_CODE_RE.is_match("CS 101"));
        assert!(COURSE_CODE_RE.is_match("CSCI201"));
        assert!(COURSE_CODE_RE.is_match("MATH  1010"));
        // Single-letter department or too few digits
        assert!(!COURSE_CODE_RE.is_match("C 101"));
        assert!(!COURSE_CODE_RE.is_match("CS 10"));
    }

    #[test]
    fn test_grade_is_standalone() {
        assert!(GRADE_RE.is_match("earned a B+ overall"));
        assert!(GRADE_RE.is_match("A-"));
        assert!(!GRADE_RE.is_match("Biology"));
        assert!(!GRADE_RE.is_match("Dept"));
    }

    #[test]
    fn test_ongoing_marker_case_insensitive() {
        assert!(ONGOING_MARKER_RE.is_match("REG"));
        assert!(ONGOING_MARKER_RE.is_match("enrolled"));
        assert!(ONGOING_MARKER_RE.is_match("In Progress"));
        // Marker letters inside a longer word
        assert!(!ONGOING_MARKER_RE.is_match("REGISTRATION"));
    }

    #[test]
    fn test_label_tables_compile_in_order() {
        assert_eq!(GPA_PATTERNS.len(), 4);
        assert_eq!(CREDIT_PATTERNS.len(), 5);
        assert!(GPA_PATTERNS[0].as_str().contains("Overall GPA"));
        assert!(GPA_PATTERNS[2].as_str().contains("GPA"));
    }
}
