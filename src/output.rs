//! Text and JSON rendering of a [`GradeLedger`].
//!
//! Numbers follow a `#.##` rule: at most two fractional digits, with
//! trailing zeros and a dangling decimal point removed.

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::LedgerState;
use crate::ledger::GradeLedger;

pub const EMPTY_REPORT: &str = "No grades to display.\n\n\
     Choose 'Add Single Grade' or 'Add Multiple Grades' to get started!";

pub const EMPTY_HEADLINE: &str = "No grades entered yet";

/// Formats a number with at most two fractional digits.
pub fn format_number(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// Renders the numbered grade breakdown followed by the statistics block.
pub fn render_report(ledger: &GradeLedger) -> String {
    if ledger.state() == LedgerState::Empty {
        return EMPTY_REPORT.to_string();
    }

    let average = ledger.average();
    let mut out = String::from("GRADE BREAKDOWN:\n================\n\n");

    for (i, grade) in ledger.grades().iter().enumerate() {
        out.push_str(&format!("Grade {}: {}%\n", i + 1, format_number(*grade)));
    }

    out.push_str(&format!(
        "\nSTATISTICS:\n===========\nTotal Grades: {}\nAverage: {}%\nLetter Grade: {}\n",
        ledger.len(),
        format_number(average),
        GradeLedger::letter_grade(average)
    ));

    out
}

/// Text printed by the `report` subcommand: the headline, a blank line, then
/// the report. Always ends with exactly one newline.
pub fn render_cli_report(ledger: &GradeLedger) -> String {
    let report = render_report(ledger);
    format!("{}\n\n{}\n", render_headline(ledger), report.trim_end())
}

/// One-line statistics summary shown above the report.
pub fn render_headline(ledger: &GradeLedger) -> String {
    match ledger.state() {
        LedgerState::Empty => EMPTY_HEADLINE.to_string(),
        LedgerState::Populated => format!(
            "Average: {}% ({} grades)",
            format_number(ledger.average()),
            ledger.len()
        ),
    }
}

/// Serializes the ledger summary as pretty-printed JSON.
pub fn render_json(ledger: &GradeLedger) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ledger.summary())?)
}

/// Logs the ledger summary using Rust's debug pretty-print format.
pub fn print_pretty(ledger: &GradeLedger) {
    debug!("{:#?}", ledger.summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(values: &[f64]) -> GradeLedger {
        let mut ledger = GradeLedger::new();
        for v in values {
            ledger.record(*v).unwrap();
        }
        ledger
    }

    #[test]
    fn test_format_number_strips_insignificant_zeros() {
        assert_eq!(format_number(90.0), "90");
        assert_eq!(format_number(85.5), "85.5");
        assert_eq!(format_number(82.333_333), "82.33");
        assert_eq!(format_number(66.666_666), "66.67");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(99.999), "100");
    }

    #[test]
    fn test_empty_report_is_placeholder() {
        let ledger = GradeLedger::new();
        assert_eq!(render_report(&ledger), EMPTY_REPORT);
        assert_eq!(render_headline(&ledger), EMPTY_HEADLINE);
    }

    #[test]
    fn test_report_lists_in_insertion_order() {
        let ledger = ledger_with(&[70.0, 95.0, 82.0]);
        let expected = "GRADE BREAKDOWN:\n\
                        ================\n\
                        \n\
                        Grade 1: 70%\n\
                        Grade 2: 95%\n\
                        Grade 3: 82%\n\
                        \n\
                        STATISTICS:\n\
                        ===========\n\
                        Total Grades: 3\n\
                        Average: 82.33%\n\
                        Letter Grade: B\n";

        assert_eq!(render_report(&ledger), expected);
    }

    #[test]
    fn test_cli_report_populated() {
        let mut ledger = GradeLedger::new();
        let outcome = ledger.record_batch(["95", "-5", "abc", "100", "101"]);
        let text = render_cli_report(&ledger);

        assert_eq!(outcome.rejected, 3);
        assert!(text.starts_with("Average: 97.5% (2 grades)\n\nGRADE BREAKDOWN:\n"));
        assert!(text.contains("Grade 1: 95%\nGrade 2: 100%\n"));
        assert!(text.ends_with("Letter Grade: A\n"));
        assert!(!text.contains("Grade 3"));
    }

    #[test]
    fn test_cli_report_empty() {
        let text = render_cli_report(&GradeLedger::new());
        assert_eq!(text, format!("{}\n\n{}\n", EMPTY_HEADLINE, EMPTY_REPORT));
    }

    #[test]
    fn test_headline_populated() {
        let ledger = ledger_with(&[70.0, 95.0, 82.0]);
        assert_eq!(render_headline(&ledger), "Average: 82.33% (3 grades)");
    }

    #[test]
    fn test_render_json_fields() {
        let ledger = ledger_with(&[90.0, 100.0]);
        let json: serde_json::Value = serde_json::from_str(&render_json(&ledger).unwrap()).unwrap();

        assert_eq!(json["count"], 2);
        assert_eq!(json["average"], 95.0);
        assert_eq!(json["letter_grade"], "A");
    }

    #[test]
    fn test_render_json_empty_omits_letter() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&GradeLedger::new()).unwrap()).unwrap();

        assert_eq!(json["count"], 0);
        assert!(json.get("letter_grade").is_none());
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&ledger_with(&[75.0]));
    }
}
