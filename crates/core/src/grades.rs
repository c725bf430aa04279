//! Grade averaging and CSV report output.

use std::io;

use thiserror::Error;

/// Errors that can occur while producing a grade report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No grades provided")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Arithmetic mean of `notes`, or `None` for an empty slice.
pub fn mean(notes: &[f64]) -> Option<f64> {
    if notes.is_empty() {
        return None;
    }
    Some(notes.iter().sum::<f64>() / notes.len() as f64)
}

/// Truncates a grade average toward zero.
///
/// Deliberately truncation rather than rounding: the output stays
/// compatible with consumers of the historical report format, where
/// an average of 7.75 is recorded as 7.
pub fn truncate_grade(value: f64) -> i64 {
    value as i64
}

/// Writes a single two-column CSV record: the student name and the
/// truncated average.
pub fn write_report<W: io::Write>(writer: W, name: &str, average: f64) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let truncated = truncate_grade(average).to_string();
    csv_writer.write_record([name, truncated.as_str()])?;
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_sample_grades() {
        assert_eq!(mean(&[7.0, 10.0, 8.0, 6.0]), Some(7.75));
    }

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_truncate_is_toward_zero_not_rounding() {
        assert_eq!(truncate_grade(7.75), 7);
        assert_eq!(truncate_grade(7.2), 7);
        assert_eq!(truncate_grade(-2.9), -2);
    }

    #[test]
    fn test_report_line_matches_historical_format() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, "Rodrigo", 7.75).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Rodrigo,7\n");
    }

    #[test]
    fn test_report_quotes_names_with_commas() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, "Lima, Rodrigo", 9.0).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"Lima, Rodrigo\",9\n");
    }
}
