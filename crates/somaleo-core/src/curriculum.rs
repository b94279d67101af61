//! The curriculum the tutor is restricted to.

/// Display name of the tutor.
pub const TUTOR_NAME: &str = "CBC Tutor";

/// Subjects the tutor may teach.
pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "English",
    "Kiswahili",
    "Integrated Science",
    "Social Studies",
    "CRE",
    "Pre-Technical Studies",
    "Agriculture",
    "Computer Studies",
];

/// Grade levels the tutor supports.
pub const GRADES: &[u8] = &[6, 7, 8, 9];

pub const GRADES_DESCRIPTION: &str = "Competency-Based Curriculum (CBC) grades in Kenya";

pub fn is_supported_grade(grade: u8) -> bool {
    GRADES.contains(&grade)
}
