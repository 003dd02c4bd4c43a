//! The grade ledger: an ordered list of validated grades and the statistics
//! derived from it.

use tracing::{debug, info};

use crate::analyzers::grade::{LetterGrade, letter_grade};
use crate::analyzers::types::{BatchOutcome, LedgerState, LedgerSummary};
use crate::analyzers::utility::mean;
use crate::error::ValidationError;
use crate::output;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

/// Checks that `value` is a number in `[0, 100]`.
///
/// # Errors
///
/// NaN fails with [`ValidationError::NotANumber`]; anything else outside the
/// closed range (infinities included) fails with [`ValidationError::OutOfRange`].
pub fn validate_grade(value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber(value.to_string()));
    }
    if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
        return Err(ValidationError::OutOfRange(value));
    }
    Ok(value)
}

/// Parses raw user input and validates the result.
///
/// Surrounding whitespace is ignored.
pub fn validate_input(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
    validate_grade(value)
}

/// Anything that can be offered to the ledger as a grade: numbers directly,
/// or raw strings that still need parsing.
pub trait GradeInput {
    fn to_grade(&self) -> Result<f64, ValidationError>;
}

impl GradeInput for f64 {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        validate_grade(*self)
    }
}

impl GradeInput for i32 {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        validate_grade(f64::from(*self))
    }
}

impl GradeInput for u32 {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        validate_grade(f64::from(*self))
    }
}

impl GradeInput for str {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        validate_input(self)
    }
}

impl GradeInput for String {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        validate_input(self)
    }
}

impl<T: GradeInput + ?Sized> GradeInput for &T {
    fn to_grade(&self) -> Result<f64, ValidationError> {
        (**self).to_grade()
    }
}

/// Ordered sequence of recorded grades.
///
/// Every stored value lies in `[0, 100]`. The average and letter grade are
/// recomputed from the stored grades on every call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GradeLedger {
    grades: Vec<f64>,
}

impl GradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` if it is a valid grade.
    pub fn record(&mut self, value: f64) -> Result<(), ValidationError> {
        let value = validate_grade(value)?;
        self.grades.push(value);
        debug!(value, count = self.grades.len(), "Grade recorded");
        Ok(())
    }

    /// Parses `raw` and appends it, returning the stored value.
    pub fn record_input(&mut self, raw: &str) -> Result<f64, ValidationError> {
        let value = validate_input(raw)?;
        self.record(value)?;
        Ok(value)
    }

    /// Records every entry in order, skipping the ones that fail validation.
    pub fn record_batch<I>(&mut self, inputs: I) -> BatchOutcome
    where
        I: IntoIterator,
        I::Item: GradeInput,
    {
        let mut outcome = BatchOutcome::default();

        for input in inputs {
            match input.to_grade().and_then(|v| self.record(v)) {
                Ok(()) => outcome.accepted += 1,
                Err(e) => {
                    debug!(error = %e, "Batch entry rejected");
                    outcome.rejected += 1;
                }
            }
        }

        info!(
            accepted = outcome.accepted,
            rejected = outcome.rejected,
            "Batch recorded"
        );
        outcome
    }

    /// Removes every grade. Clearing an empty ledger changes nothing.
    pub fn clear(&mut self) {
        let removed = self.grades.len();
        self.grades.clear();
        info!(removed, "Ledger cleared");
    }

    /// Arithmetic mean of the recorded grades, or 0.0 when there are none.
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }

    /// Letter grade for an arbitrary average. See [`letter_grade`].
    pub fn letter_grade(average: f64) -> LetterGrade {
        letter_grade(average)
    }

    /// Letter grade of the current average, `None` while empty.
    pub fn current_letter(&self) -> Option<LetterGrade> {
        match self.state() {
            LedgerState::Empty => None,
            LedgerState::Populated => Some(letter_grade(self.average())),
        }
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.grades.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::Populated
        }
    }

    /// Multi-line breakdown of the ledger. See [`output::render_report`].
    pub fn report(&self) -> String {
        output::render_report(self)
    }

    /// One-line statistics summary. See [`output::render_headline`].
    pub fn headline(&self) -> String {
        output::render_headline(self)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            count: self.grades.len(),
            grades: self.grades.clone(),
            average: self.average(),
            letter_grade: self.current_letter(),
        }
    }
}
