use serde::Serialize;
use std::fmt;

/// Categorical classification of a numeric average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a numeric average (0–100) into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
///
/// A NaN average fails every comparison and lands on F.
pub fn letter_grade(average: f64) -> LetterGrade {
    match average {
        a if a >= 90.0 => LetterGrade::A,
        a if a >= 80.0 => LetterGrade::B,
        a if a >= 70.0 => LetterGrade::C,
        a if a >= 60.0 => LetterGrade::D,
        _ => LetterGrade::F,
    }
}
