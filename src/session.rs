//! Interactive terminal front end for a [`GradeLedger`].
//!
//! The session reads answers line by line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so it can be driven by stdin/stdout
//! or by in-memory buffers. End of input on a prompt means the user
//! cancelled it.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::analyzers::grade::LetterGrade;
use crate::config::Settings;
use crate::error::ValidationError;
use crate::ledger::{GradeLedger, validate_input};

/// Largest number of grades accepted in one "Add Multiple Grades" round.
pub const MAX_BATCH: usize = 20;

const MENU: &str = "\
1) Add Single Grade
2) Add Multiple Grades
3) Clear All Grades
4) Exit Application";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddSingle,
    AddMultiple,
    ClearAll,
    Exit,
}

impl MenuAction {
    /// Maps a menu answer (number or keyword) to an action.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "single" => Some(MenuAction::AddSingle),
            "2" | "multiple" | "batch" => Some(MenuAction::AddMultiple),
            "3" | "clear" => Some(MenuAction::ClearAll),
            "4" | "exit" | "quit" | "q" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Notice {
    Success,
    Error,
    Warning,
}

/// Returns true for an affirmative confirmation answer.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub struct Session<R, W> {
    ledger: GradeLedger,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            ledger: GradeLedger::new(),
            input,
            output,
            color: settings.color,
        }
    }

    pub fn ledger(&self) -> &GradeLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> GradeLedger {
        self.ledger
    }

    /// Runs the menu loop until the user confirms exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.display()?;

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(answer) = self.read_answer("Choose an option [1-4]:")? else {
                debug!("Input closed at menu");
                break;
            };

            match MenuAction::parse(&answer) {
                Some(MenuAction::AddSingle) => self.add_single_grade()?,
                Some(MenuAction::AddMultiple) => self.add_multiple_grades()?,
                Some(MenuAction::ClearAll) => self.clear_all_grades()?,
                Some(MenuAction::Exit) => {
                    if self.confirm("Are you sure you want to exit?")? {
                        break;
                    }
                }
                None if answer.trim().is_empty() => {}
                None => self.notify(Notice::Error, "Please choose an option from 1 to 4.")?,
            }
        }

        info!(grades = self.ledger.len(), "Session ended");
        Ok(())
    }

    /// Prompts for one grade and records it.
    #[tracing::instrument(skip(self))]
    pub fn add_single_grade(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Enter a grade (0-100):")? else {
            debug!("Single grade prompt cancelled");
            return Ok(());
        };

        match self.ledger.record_input(&answer) {
            Ok(value) => {
                info!(value, "Grade added");
                self.display()?;
                let message = format!(
                    "Grade {}% added successfully!",
                    crate::output::format_number(value)
                );
                self.notify(Notice::Success, &message)?;
            }
            Err(ValidationError::OutOfRange(_)) => {
                self.notify(Notice::Error, "Please enter a grade between 0 and 100.")?;
            }
            Err(ValidationError::NotANumber(_)) => {
                self.notify(Notice::Error, "Please enter a valid number.")?;
            }
        }
        Ok(())
    }

    /// Asks for a count, then prompts for that many grades and records the
    /// valid ones as a single batch.
    #[tracing::instrument(skip(self))]
    pub fn add_multiple_grades(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("How many grades would you like to add?")? else {
            return Ok(());
        };

        let count: usize = match answer.parse::<i64>() {
            Ok(n) if (1..=MAX_BATCH as i64).contains(&n) => n as usize,
            Ok(_) => {
                let message = format!("Please enter a number between 1 and {}.", MAX_BATCH);
                return self.notify(Notice::Error, &message);
            }
            Err(_) => return self.notify(Notice::Error, "Please enter a valid number."),
        };

        let mut answers = Vec::with_capacity(count);
        let mut cancelled = 0;

        for i in 1..=count {
            // Only end of input cancels an item; a blank answer is a format error.
            let Some(raw) = self.read_answer(&format!("Enter grade {} of {}:", i, count))? else {
                cancelled += 1;
                continue;
            };

            match validate_input(&raw) {
                Ok(_) => {}
                Err(ValidationError::OutOfRange(_)) => {
                    let message = format!("Grade {} invalid (0-100 range). Skipping...", i);
                    self.notify(Notice::Error, &message)?;
                }
                Err(ValidationError::NotANumber(_)) => {
                    let message = format!("Grade {} invalid format. Skipping...", i);
                    self.notify(Notice::Error, &message)?;
                }
            }
            answers.push(raw);
        }

        let outcome = self.ledger.record_batch(&answers);
        let skipped = outcome.rejected + cancelled;
        info!(
            requested = count,
            accepted = outcome.accepted,
            skipped,
            "Multiple grades added"
        );

        self.display()?;
        let mut message = format!("Added {} grade(s) successfully!", outcome.accepted);
        if skipped > 0 {
            message.push_str(&format!("\n{} grade(s) were skipped.", skipped));
        }
        self.notify(Notice::Success, &message)
    }

    /// Clears the ledger after confirmation.
    #[tracing::instrument(skip(self))]
    pub fn clear_all_grades(&mut self) -> Result<()> {
        if self.ledger.is_empty() {
            return self.notify(Notice::Warning, "No grades to clear.");
        }

        let question = format!(
            "Are you sure you want to clear all {} grades?",
            self.ledger.len()
        );
        if !self.confirm(&question)? {
            debug!("Clear declined");
            return Ok(());
        }

        self.ledger.clear();
        self.display()?;
        self.notify(Notice::Success, "All grades cleared successfully!")
    }

    /// Writes the statistics headline, the letter grade and the report.
    pub fn display(&mut self) -> Result<()> {
        writeln!(self.output, "\nGrade Statistics")?;
        writeln!(self.output, "{}", self.ledger.headline())?;
        if let Some(letter) = self.ledger.current_letter() {
            let letter = self.paint_letter(letter);
            writeln!(self.output, "Letter Grade: {}", letter)?;
        }
        writeln!(self.output, "\n{}", self.ledger.report().trim_end())?;
        crate::output::print_pretty(&self.ledger);
        Ok(())
    }

    fn paint_letter(&self, letter: LetterGrade) -> String {
        if !self.color {
            return letter.to_string();
        }
        let painted: ColoredString = match letter {
            LetterGrade::A => letter.as_str().green(),
            LetterGrade::B => letter.as_str().blue(),
            LetterGrade::C => letter.as_str().yellow(),
            LetterGrade::D => letter.as_str().bright_yellow(),
            LetterGrade::F => letter.as_str().red(),
        };
        painted.bold().to_string()
    }

    fn notify(&mut self, notice: Notice, message: &str) -> Result<()> {
        let label = match notice {
            Notice::Success => "Success",
            Notice::Error => "Error",
            Notice::Warning => "Warning",
        };
        let label = if self.color {
            match notice {
                Notice::Success => label.green().bold().to_string(),
                Notice::Error => label.red().bold().to_string(),
                Notice::Warning => label.yellow().bold().to_string(),
            }
        } else {
            label.to_string()
        };
        writeln!(self.output, "{}: {}", label, message)?;
        Ok(())
    }

    /// Asks a yes/no question. Anything but an explicit yes, including end
    /// of input, counts as no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.read_answer(&format!("{} [y/N]", question))?;
        Ok(answer.as_deref().is_some_and(is_yes))
    }

    /// Like [`Self::read_answer`], but a blank answer also counts as cancelled.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self
            .read_answer(message)?
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()))
    }

    /// Writes `message` and reads one line. `None` means input has ended.
    fn read_answer(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
