//! # Rate Table Module
//!
//! ## Aim
//! Holds tabulated reaction rate data -rA(X) and answers the one query every sizing
//! calculation needs: the rate at an arbitrary conversion.
//!
//! ## Main Data Structures and Logic
//! - `RateSample`: one measured point (X, -rA)
//! - `RateTable`: immutable table with strictly increasing X, at least two points.
//!   Columns are stored as `nalgebra::DVector` so derived columns (1/-rA) are a single `map`.
//! - `interpolate_rate()`: piecewise-linear interpolation with constant extrapolation
//!   at both ends of the table
//! - `parse_rate_data()`: reads the two-row comma-separated text block
//!   (first row X, second row -rA) into a `RateTable`
//!
//! ## Usage
//! ```rust, ignore
//! let table = parse_rate_data("0.0, 0.5, 1.0\n0.01, 0.005, 0.0025")?;
//! let rate = table.interpolate_rate(0.25)?; // 0.0075
//! ```
//!
//! ## Interesting Features
//! - Unsorted input is sorted on construction, duplicate X values are rejected
//!   because interpolation between two points with equal X is undefined
//! - Rates are not required to be positive at construction: a non-positive rate is
//!   the user's data and only becomes an error where a volume is computed from it
use super::reactor_error::ReactorDesignError;
use log::warn;
use nalgebra::DVector;

/// one tabulated point: conversion and reaction rate magnitude -rA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    pub x: f64,
    pub rate: f64,
}

impl RateSample {
    pub fn new(x: f64, rate: f64) -> Self {
        Self { x, rate }
    }
}

/// Table of -rA vs X. Invariants: len >= 2, X strictly increasing, all values finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    x: DVector<f64>,
    rate: DVector<f64>,
}

impl RateTable {
    /// Builds a table from paired lists of equal length. Samples are sorted by X.
    pub fn new(x_values: Vec<f64>, rate_values: Vec<f64>) -> Result<Self, ReactorDesignError> {
        if x_values.len() != rate_values.len() {
            return Err(ReactorDesignError::DomainError(format!(
                "X and -rA rows must have equal length, got {} and {}",
                x_values.len(),
                rate_values.len()
            )));
        }
        if x_values.len() < 2 {
            return Err(ReactorDesignError::DomainError(format!(
                "rate table needs at least 2 points, got {}",
                x_values.len()
            )));
        }
        let mut samples: Vec<RateSample> = x_values
            .into_iter()
            .zip(rate_values)
            .map(|(x, rate)| RateSample::new(x, rate))
            .collect();
        if let Some(bad) = samples
            .iter()
            .find(|s| !s.x.is_finite() || !s.rate.is_finite())
        {
            return Err(ReactorDesignError::DomainError(format!(
                "non-finite value in rate table: X = {}, -rA = {}",
                bad.x, bad.rate
            )));
        }
        samples.sort_by(|a, b| a.x.total_cmp(&b.x));
        if let Some(pair) = samples.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(ReactorDesignError::DomainError(format!(
                "duplicate conversion X = {} in rate table",
                pair[0].x
            )));
        }
        let (x, rate): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.rate)).unzip();
        Ok(Self {
            x: DVector::from_vec(x),
            rate: DVector::from_vec(rate),
        })
    }

    pub fn from_samples(samples: &[RateSample]) -> Result<Self, ReactorDesignError> {
        let (x, rate): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.rate)).unzip();
        Self::new(x, rate)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn x_values(&self) -> &[f64] {
        self.x.as_slice()
    }

    pub fn rates(&self) -> &[f64] {
        self.rate.as_slice()
    }

    pub fn rate_vector(&self) -> &DVector<f64> {
        &self.rate
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    pub fn samples(&self) -> Vec<RateSample> {
        self.x
            .iter()
            .zip(self.rate.iter())
            .map(|(&x, &rate)| RateSample::new(x, rate))
            .collect()
    }

    /// samples whose X lies in [x_low, x_high], bounds included
    pub fn samples_in_range(&self, x_low: f64, x_high: f64) -> Vec<RateSample> {
        self.samples()
            .into_iter()
            .filter(|s| s.x >= x_low && s.x <= x_high)
            .collect()
    }

    /// Rate at conversion `x`, see [`interpolate_rate`] for the extrapolation rule.
    pub fn interpolate_rate(&self, x: f64) -> Result<f64, ReactorDesignError> {
        interpolate_sorted(self.x_values(), self.rates(), x)
    }
}

/// Piecewise-linear interpolation of -rA at conversion `x` over raw samples.
///
/// Outside [min X, max X] the rate of the nearest boundary sample is returned
/// (constant extrapolation), so asking for X = 0 with a table starting at X = 0.1
/// gives the rate tabulated at 0.1.
///
/// Errors with `DomainError` for fewer than 2 samples, samples not strictly
/// increasing in X, or a non-finite `x`.
pub fn interpolate_rate(samples: &[RateSample], x: f64) -> Result<f64, ReactorDesignError> {
    if samples.len() < 2 {
        return Err(ReactorDesignError::DomainError(format!(
            "interpolation needs at least 2 rate points, got {}",
            samples.len()
        )));
    }
    if samples.windows(2).any(|pair| !(pair[0].x < pair[1].x)) {
        return Err(ReactorDesignError::DomainError(
            "rate points must be strictly increasing in X".to_string(),
        ));
    }
    let (xs, rates): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.rate)).unzip();
    interpolate_sorted(&xs, &rates, x)
}

fn interpolate_sorted(xs: &[f64], rates: &[f64], x: f64) -> Result<f64, ReactorDesignError> {
    if !x.is_finite() {
        return Err(ReactorDesignError::DomainError(format!(
            "cannot interpolate rate at X = {}",
            x
        )));
    }
    let last = xs.len() - 1;
    if x <= xs[0] {
        return Ok(rates[0]);
    }
    if x >= xs[last] {
        return Ok(rates[last]);
    }
    // first index with xs[i] > x; xs[0] <= x so upper >= 1
    let upper = xs.partition_point(|&xi| xi <= x);
    let lower = upper - 1;
    let t = (x - xs[lower]) / (xs[upper] - xs[lower]);
    Ok(rates[lower] + (rates[upper] - rates[lower]) * t)
}

/// Parses two comma-separated rows: conversions first, rates second.
///
/// Blank lines are skipped; lines after the second non-blank one are ignored with a warning.
pub fn parse_rate_data(text: &str) -> Result<RateTable, ReactorDesignError> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    if rows.len() < 2 {
        return Err(ReactorDesignError::DomainError(
            "rate data needs two rows: X values and -rA values".to_string(),
        ));
    }
    if rows.len() > 2 {
        warn!(
            "rate data has {} rows, only the first two are used",
            rows.len()
        );
    }
    let x_values = parse_row(rows[0].0, rows[0].1)?;
    let rate_values = parse_row(rows[1].0, rows[1].1)?;
    RateTable::new(x_values, rate_values)
}

/// Parses one comma-separated row of numbers; `line` is only used for error reporting.
pub fn parse_row(line: usize, row: &str) -> Result<Vec<f64>, ReactorDesignError> {
    row.split(',')
        .enumerate()
        .map(|(column, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| ReactorDesignError::ParseError {
                    line,
                    column: column + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}
