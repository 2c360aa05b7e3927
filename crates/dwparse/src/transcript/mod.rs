/// Transcript text parsing module
mod error;
mod extract;
mod patterns;
mod types;

pub mod cache;

pub use error::TranscriptError;
pub use extract::extract_text;
pub use types::*;

use patterns::*;
use regex::Regex;
use tracing::{debug, info};

/// Decodes a PDF byte stream and parses the resulting text in one step.
///
/// Convenience function that combines the upstream extraction boundary
/// with [`parse_transcript_text`].
///
/// # Arguments
/// * `bytes` - Raw PDF byte stream
///
/// # Returns
/// * `Ok(TranscriptRecord)` - Structured academic record
/// * `Err` - If decoding fails or no informational field could be extracted
pub fn parse_pdf(bytes: &[u8]) -> Result<TranscriptRecord, TranscriptError> {
    let text = extract::extract_text(bytes)?;
    parse_transcript_text(&text)
}

/// Parses a flattened transcript text dump into a structured record.
///
/// Each field is extracted independently by its own pattern scan; there is
/// no shared cursor, so the same substring may contribute to more than one
/// field. Missing identity fields are left empty and never fail the parse.
///
/// # Arguments
/// * `text` - Full document text, order-preserved as extracted
///
/// # Returns
/// * `Ok(TranscriptRecord)` - At least one informational field was found
/// * `Err(TranscriptError::NoDataExtracted)` - GPA, credits, and both course lists all came up empty
pub fn parse_transcript_text(text: &str) -> Result<TranscriptRecord, TranscriptError> {
    let mut record = TranscriptRecord {
        student_name: match_line_label(&STUDENT_NAME_RE, text),
        student_id: match_line_label(&STUDENT_ID_RE, text),
        major: match_line_label(&MAJOR_RE, text),
        ..Default::default()
    };

    if let Some(gpa) = match_first_number(&GPA_PATTERNS, text) {
        debug!("Found GPA: {gpa}");
        record.gpa = gpa;
    }

    if let Some(credits) = match_first_number(&CREDIT_PATTERNS, text) {
        debug!("Found credits: {credits}");
        record.total_credits = credits.trunc() as u32;
    }

    record.completed_courses = scan_completed_courses(text);
    record.ongoing_courses = scan_ongoing_courses(text);

    if !record.has_data() {
        return Err(TranscriptError::NoDataExtracted);
    }

    info!(
        "Parsed transcript: GPA {}, {} credits, {} completed, {} ongoing courses",
        record.gpa,
        record.total_credits,
        record.completed_courses.len(),
        record.ongoing_courses.len()
    );

    Ok(record)
}

/// Captures the remainder of a labeled line, trimmed. Empty when absent.
fn match_line_label(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Evaluates an ordered label table, returning the value captured by the
/// first pattern that matches anywhere in the text.
fn match_first_number(patterns: &[Regex], text: &str) -> Option<f64> {
    for pattern in patterns {
        if let Some(value) = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return Some(value);
        }
    }
    None
}

/// Scans for completed courses: a course code followed within the window
/// by a standalone letter grade.
fn scan_completed_courses(text: &str) -> Vec<String> {
    claim_courses(text, &GRADE_RE)
        .into_iter()
        .map(|(code, grade)| CourseRecord { code, grade }.to_string())
        .collect()
}

/// Scans for in-progress courses: a course code followed within the window
/// by a registration-status marker. Independent of the completed scan, so a
/// course flagged both ways appears in both lists.
fn scan_ongoing_courses(text: &str) -> Vec<String> {
    claim_courses(text, &ONGOING_MARKER_RE)
        .into_iter()
        .map(|(code, _)| code)
        .collect()
}

/// Pairs each marker match with the nearest preceding course code.
///
/// A marker claims the closest code that ends no more than `COURSE_WINDOW`
/// characters before it; a code can be claimed once per scan. Markers with
/// no unclaimed code in range are dropped, so a stray grade letter in prose
/// far from any code never produces an entry. Output order follows marker
/// position in the text.
fn claim_courses(text: &str, marker_re: &Regex) -> Vec<(String, String)> {
    let codes: Vec<_> = COURSE_CODE_RE.find_iter(text).collect();
    let mut claimed = vec![false; codes.len()];
    let mut matched = Vec::new();

    for caps in marker_re.captures_iter(text) {
        let marker = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };

        let Some(idx) = codes.iter().rposition(|c| c.end() <= marker.start()) else {
            continue;
        };
        if claimed[idx] || marker.start() - codes[idx].end() > COURSE_WINDOW {
            continue;
        }

        claimed[idx] = true;
        let value = caps
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .to_string();
        matched.push((normalize_code(codes[idx].as_str()), value));
    }

    matched
}

/// Collapses whitespace runs inside a course code to a single space.
fn normalize_code(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
