//! Grade report command.

use std::fs::File;
use std::path::PathBuf;

use stratus_core::grades::{self, ReportError};

use crate::prelude::*;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Compute a grade average and write the CSV report.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Compute the arithmetic mean of a list of grades and
write a two-column CSV report (name, truncated average).

The average is truncated toward zero in the report, so 7.75 is
recorded as 7.")]
pub struct GradesCommand {
    /// Student name for the report.
    #[arg(long, default_value = "Rodrigo")]
    pub name: String,

    /// Grades to average (repeatable).
    #[arg(long = "grade", value_name = "N", default_values_t = [7.0, 10.0, 8.0, 6.0])]
    pub grades: Vec<f64>,

    /// Output file path.
    #[arg(long, default_value = "final_result.csv")]
    pub output: PathBuf,
}

/// Main entry point for the grades command.
pub fn run(cmd: GradesCommand, global: crate::Global) -> Result<()> {
    let average = grades::mean(&cmd.grades).ok_or(ReportError::Empty)?;

    let file = File::create(&cmd.output)?;
    grades::write_report(file, &cmd.name, average)?;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Average:"), average);
        aprintln!(
            "{} {} -> {}",
            p_g("Wrote:"),
            cmd.name,
            cmd.output.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("final_result.csv");

        let cmd = GradesCommand {
            name: "Rodrigo".to_string(),
            grades: vec![7.0, 10.0, 8.0, 6.0],
            output: output.clone(),
        };
        run(cmd, crate::Global { silent: true, verbose: false }).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "Rodrigo,7\n");
    }

    #[test]
    fn test_empty_grade_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = GradesCommand {
            name: "Rodrigo".to_string(),
            grades: vec![],
            output: dir.path().join("out.csv"),
        };

        let err = run(cmd, crate::Global { silent: true, verbose: false }).unwrap_err();
        assert!(matches!(err, ReportError::Empty));
    }
}
