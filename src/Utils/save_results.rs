//! Saving solved problems to CSV.
//!
//! Layout: a `quantity,value,units` block with one line per report row, then, for the
//! Levenspiel problem, an empty line and an `X,inv_rA` block with the plot points.
use crate::ReactorDesign::reactor_error::ReactorDesignError;
use crate::ReactorDesign::reactor_problems::ProblemReport;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_report_csv<W: Write>(report: &ProblemReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "quantity,value,units")?;
    for row in &report.rows {
        writeln!(out, "\"{}\",{},{}", row.label, row.value, row.units)?;
    }
    if let Some(points) = &report.levenspiel {
        writeln!(out)?;
        writeln!(out, "X,inv_rA")?;
        for p in points {
            writeln!(out, "{},{}", p.x, p.inverse_rate)?;
        }
    }
    Ok(())
}

pub fn save_report_csv(report: &ProblemReport, path: &Path) -> Result<(), ReactorDesignError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report_csv(report, &mut writer)?;
    writer.flush()?;
    info!("results of '{}' saved to {:?}", report.title, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReactorDesign::levenspiel::SizingRequest;
    use crate::ReactorDesign::rate_table::RateTable;
    use crate::ReactorDesign::reactor_problems::{BatchTask, LevenspielTask, ReactorProblem};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_batch_report_csv() {
        let report = BatchTask { k: 0.23, x: 0.99 }.solve().unwrap();
        let mut buffer = Vec::new();
        write_report_csv(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "quantity,value,units");
        assert_eq!(lines.len(), 1 + report.rows.len());
        assert!(lines[3].starts_with("\"Time required\",20.02"));
        assert!(!text.contains("inv_rA"));
    }

    #[test]
    fn test_levenspiel_report_saved_to_file() {
        let table = RateTable::new(vec![0.0, 0.5, 1.0], vec![0.01, 0.005, 0.0025]).unwrap();
        let report = LevenspielTask::new(table, SizingRequest::new(1.0, 0.5, 1.0))
            .solve()
            .unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");
        save_report_csv(&report, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let tail: Vec<&str> = text.lines().rev().take(4).collect();
        assert_eq!(tail[3], "X,inv_rA");
        assert!(tail[0].starts_with("1,"));
        assert!(text.contains("\"CSTR volume\","));
    }
}
