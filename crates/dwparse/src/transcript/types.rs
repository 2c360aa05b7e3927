/// Types for parsed transcript data
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured academic record extracted from a DegreeWorks-style report.
///
/// Identity fields stay empty when their label is absent; numeric fields
/// default to zero. Course lists preserve first-seen order from the
/// source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    #[serde(rename = "studentName")]
    pub student_name: String,

    #[serde(rename = "studentId")]
    pub student_id: String,

    pub major: String,

    /// Cumulative GPA as printed in the report. Not range-validated:
    /// a false-positive numeric match passes through unchanged.
    pub gpa: f64,

    #[serde(rename = "totalCredits")]
    pub total_credits: u32,

    /// Completed courses encoded as `"<code> (<grade>)"`.
    #[serde(rename = "completedCourses")]
    pub completed_courses: Vec<String>,

    /// In-progress course codes, no grade.
    #[serde(rename = "ongoingCourses")]
    pub ongoing_courses: Vec<String>,
}

impl TranscriptRecord {
    /// Returns true if at least one informational field was extracted.
    ///
    /// Identity fields do not count; a record with only a name is still
    /// considered empty.
    pub fn has_data(&self) -> bool {
        self.gpa != 0.0
            || self.total_credits != 0
            || !self.completed_courses.is_empty()
            || !self.ongoing_courses.is_empty()
    }
}

/// A course code paired with the letter grade it was completed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Whitespace-normalized course code, e.g. "CSCI 201"
    pub code: String,
    /// Letter grade with optional +/- suffix, e.g. "A-"
    pub grade: String,
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_record_encoding() {
        let course = CourseRecord {
            code: "CSCI 201".to_string(),
            grade: "A-".to_string(),
        };
        assert_eq!(course.to_string(), "CSCI 201 (A-)");
    }

    #[test]
    fn test_empty_record_has_no_data() {
        let mut record = TranscriptRecord::default();
        assert!(!record.has_data());

        // Identity fields alone do not count as data
        record.student_name = "Jane Doe".to_string();
        assert!(!record.has_data());

        record.gpa = 3.2;
        assert!(record.has_data());
    }

    #[test]
    fn test_record_wire_names() {
        let record = TranscriptRecord {
            total_credits: 12,
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("totalCredits").is_some());
        assert!(json.get("studentName").is_some());
        assert!(json.get("completedCourses").is_some());
    }
}
