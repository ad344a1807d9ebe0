//! # Reactor Problems
//!
//! The three problem types offered to the user, each a small task struct holding its
//! inputs. All of them implement `ReactorProblem`, and `ReactorTask` dispatches over them
//! with `enum_dispatch` so the CLI and the task-file loader can handle a list of mixed problems.
//!
//! | Task | Inputs | Result |
//! |------|--------|--------|
//! | `BatchTask` | k, X | time, min |
//! | `CstrTask` | F_A0, X, v0, k | volume, L |
//! | `LevenspielTask` | rate table, F_A0, X_int, X_final | CSTR and PFR volumes, L; Levenspiel plot |
use super::closed_form::{batch_time_to_conversion, cstr_first_order_volume, inlet_concentration};
use super::levenspiel::{LevenspielPoint, SizingRequest, levenspiel_points, size_cstr_pfr_series};
use super::rate_table::RateTable;
use super::reactor_error::ReactorDesignError;
use enum_dispatch::enum_dispatch;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

#[enum_dispatch]
pub trait ReactorProblem {
    fn name(&self) -> &'static str;
    /// modelling assumptions shown next to the result
    fn assumptions(&self) -> &'static [&'static str];
    fn validate(&self) -> Result<(), ReactorDesignError>;
    fn solve(&self) -> Result<ProblemReport, ReactorDesignError>;
}

#[enum_dispatch(ReactorProblem)]
#[derive(Debug, Clone)]
pub enum ReactorTask {
    BatchTask,
    CstrTask,
    LevenspielTask,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: f64,
    pub units: String,
}

/// Result of a solved problem: labelled values, optional Levenspiel plot data and
/// non-fatal warnings about the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemReport {
    pub title: String,
    pub rows: Vec<ReportRow>,
    pub levenspiel: Option<Vec<LevenspielPoint>>,
    pub warnings: Vec<String>,
}

impl ProblemReport {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            rows: Vec::new(),
            levenspiel: None,
            warnings: Vec::new(),
        }
    }

    pub fn add_row(&mut self, label: &str, value: f64, units: &str) {
        self.rows.push(ReportRow {
            label: label.to_string(),
            value,
            units: units.to_string(),
        });
    }

    pub fn value(&self, label: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value)
    }

    pub fn pretty_print(&self) {
        println!("\n=== {} ===", self.title);
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value", "Units"]);
        for r in &self.rows {
            table.add_row(row![r.label, format!("{:.4}", r.value), r.units]);
        }
        table.printstd();
        if let Some(points) = &self.levenspiel {
            let mut plot = Table::new();
            plot.add_row(row!["X", "1/(-rA), L*min/mol"]);
            for p in points {
                plot.add_row(row![format!("{:.3}", p.x), format!("{:.2}", p.inverse_rate)]);
            }
            println!("Levenspiel plot data:");
            plot.printstd();
        }
        for w in &self.warnings {
            println!("\x1b[33mWarning: {}\x1b[0m", w);
        }
    }
}

////////////////////////////////////////BATCH////////////////////////////////////////
/// First-order batch reactor: time to reach a target conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchTask {
    /// rate constant, 1/min
    pub k: f64,
    /// target conversion
    pub x: f64,
}

impl ReactorProblem for BatchTask {
    fn name(&self) -> &'static str {
        "Batch Reactor: Time to reach target conversion"
    }

    fn assumptions(&self) -> &'static [&'static str] {
        &[
            "First-order irreversible reaction A -> B",
            "Isothermal operation",
            "Constant volume reactor",
            "Well-mixed system",
            "Negligible pressure drop",
        ]
    }

    fn validate(&self) -> Result<(), ReactorDesignError> {
        batch_time_to_conversion(self.k, self.x).map(|_| ())
    }

    fn solve(&self) -> Result<ProblemReport, ReactorDesignError> {
        let t = batch_time_to_conversion(self.k, self.x)?;
        let mut report = ProblemReport::new(self.name());
        report.add_row("Rate constant k", self.k, "1/min");
        report.add_row("Target conversion X", self.x, "-");
        report.add_row("Time required", t, "min");
        Ok(report)
    }
}

////////////////////////////////////////CSTR////////////////////////////////////////
/// First-order CSTR sized for a target conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CstrTask {
    /// molar feed rate, mol/min
    pub fa0: f64,
    pub x: f64,
    /// inlet volumetric flow rate, L/min
    pub v0: f64,
    /// rate constant, 1/min
    pub k: f64,
}

impl ReactorProblem for CstrTask {
    fn name(&self) -> &'static str {
        "CSTR Volume Calculation"
    }

    fn assumptions(&self) -> &'static [&'static str] {
        &[
            "First-order irreversible reaction",
            "Steady-state operation",
            "Isothermal, constant flow rate",
            "Ideal mixing (concentration inside = exit)",
        ]
    }

    fn validate(&self) -> Result<(), ReactorDesignError> {
        cstr_first_order_volume(self.fa0, self.x, self.v0, self.k).map(|_| ())
    }

    fn solve(&self) -> Result<ProblemReport, ReactorDesignError> {
        let volume = cstr_first_order_volume(self.fa0, self.x, self.v0, self.k)?;
        let ca0 = inlet_concentration(self.fa0, self.v0)?;
        let mut report = ProblemReport::new(self.name());
        report.add_row("Molar feed rate F_A0", self.fa0, "mol/min");
        report.add_row("Inlet concentration C_A0", ca0, "mol/L");
        report.add_row("Conversion X", self.x, "-");
        report.add_row("CSTR volume", volume, "L");
        Ok(report)
    }
}

////////////////////////////////////////LEVENSPIEL////////////////////////////////////////
/// CSTR followed by a PFR, both sized from tabulated -rA(X).
#[derive(Debug, Clone, PartialEq)]
pub struct LevenspielTask {
    pub table: RateTable,
    pub request: SizingRequest,
}

impl LevenspielTask {
    pub fn new(table: RateTable, request: SizingRequest) -> Self {
        Self { table, request }
    }

    fn input_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.request.x_final >= 1.0 {
            warnings.push(format!(
                "final conversion {} is not below 1.0",
                self.request.x_final
            ));
        }
        if self.request.x_final > self.table.max_x() {
            warnings.push(format!(
                "final conversion {} lies beyond the last tabulated conversion {}, the PFR integral stops at {}",
                self.request.x_final,
                self.table.max_x(),
                self.table.max_x()
            ));
        }
        warnings
    }
}

impl ReactorProblem for LevenspielTask {
    fn name(&self) -> &'static str {
        "Levenspiel Plot Analysis: CSTR + PFR in Series"
    }

    fn assumptions(&self) -> &'static [&'static str] {
        &[
            "Rate data known as a function of conversion",
            "Steady-state operation",
            "CSTR: ideal mixing; PFR: plug flow with no axial dispersion",
            "Isothermal and constant volumetric flow rate",
        ]
    }

    fn validate(&self) -> Result<(), ReactorDesignError> {
        self.request.validate()
    }

    fn solve(&self) -> Result<ProblemReport, ReactorDesignError> {
        let result = size_cstr_pfr_series(&self.table, &self.request)?;
        let SizingRequest {
            fa0,
            x_int,
            x_final,
        } = self.request;
        let mut report = ProblemReport::new(self.name());
        report.add_row("Molar feed rate F_A0", fa0, "mol/min");
        report.add_row("-rA at X_int", result.rate_at_x_int, "mol/(L*min)");
        report.add_row("Intermediate conversion X_int", x_int, "-");
        report.add_row("Final conversion X_final", x_final, "-");
        report.add_row("CSTR volume", result.cstr_volume, "L");
        report.add_row("PFR volume", result.pfr_volume, "L");
        report.add_row("PFR points integrated", result.points_integrated as f64, "-");
        report.add_row("Total volume", result.total_volume(), "L");
        report.levenspiel = Some(levenspiel_points(&self.table)?);
        report.warnings = self.input_warnings();
        Ok(report)
    }
}
