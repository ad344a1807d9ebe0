//! # Levenspiel Sizing Module
//!
//! Sizes a CSTR followed by a PFR from tabulated rate data -rA(X).
//!
//! ```text
//! V_CSTR = F_A0 * X_int / (-rA(X_int))
//! V_PFR  = F_A0 * ∫[X_int, X_final] dX / (-rA)
//! ```
//!
//! The CSTR rate is interpolated at exactly X_int. The PFR integral uses only the
//! tabulated points lying inside [X_int, X_final] (trapezoidal rule), it does not
//! interpolate extra points at the interval ends. With coarse tables this makes the
//! PFR volume an underestimate whenever X_int or X_final falls between table points.
use super::rate_table::{RateSample, RateTable};
use super::reactor_error::ReactorDesignError;
use log::{debug, info};

/// feed and conversion targets of a CSTR + PFR train
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRequest {
    /// molar feed rate of A, mol/min
    pub fa0: f64,
    /// conversion at the CSTR outlet
    pub x_int: f64,
    /// conversion at the PFR outlet
    pub x_final: f64,
}

impl SizingRequest {
    pub fn new(fa0: f64, x_int: f64, x_final: f64) -> Self {
        Self {
            fa0,
            x_int,
            x_final,
        }
    }

    pub fn validate(&self) -> Result<(), ReactorDesignError> {
        if !(self.fa0 > 0.0) || !self.fa0.is_finite() {
            return Err(ReactorDesignError::DomainError(format!(
                "feed rate F_A0 must be positive, got {}",
                self.fa0
            )));
        }
        check_conversion_bounds(self.x_int, self.x_final)?;
        if !(self.x_int >= 0.0) {
            return Err(ReactorDesignError::DomainError(format!(
                "intermediate conversion must be non-negative, got {}",
                self.x_int
            )));
        }
        if !(self.x_int < self.x_final) {
            return Err(ReactorDesignError::DomainError(format!(
                "intermediate conversion {} must be below final conversion {}",
                self.x_int, self.x_final
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResult {
    /// -rA interpolated at X_int
    pub rate_at_x_int: f64,
    /// stage 1, 0 -> X_int
    pub cstr_volume: f64,
    /// stage 2, X_int -> X_final
    pub pfr_volume: f64,
    /// number of table points the PFR integral was taken over
    pub points_integrated: usize,
}

impl SizingResult {
    pub fn total_volume(&self) -> f64 {
        self.cstr_volume + self.pfr_volume
    }
}

/// one point of the Levenspiel plot, 1/(-rA) against X
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevenspielPoint {
    pub x: f64,
    pub inverse_rate: f64,
}

fn check_conversion_bounds(x_int: f64, x_final: f64) -> Result<(), ReactorDesignError> {
    if !x_int.is_finite() || !x_final.is_finite() {
        return Err(ReactorDesignError::DomainError(format!(
            "conversions must be finite, got X_int = {}, X_final = {}",
            x_int, x_final
        )));
    }
    Ok(())
}

/// V = F_A0 * X / (-rA)
pub fn cstr_volume(fa0: f64, x_int: f64, rate_at_x_int: f64) -> Result<f64, ReactorDesignError> {
    if !(rate_at_x_int > 0.0) {
        return Err(ReactorDesignError::DivisionByZero(format!(
            "rate at X = {} is {}, CSTR volume is unbounded",
            x_int, rate_at_x_int
        )));
    }
    Ok(fa0 * x_int / rate_at_x_int)
}

/// Trapezoidal rule over sorted abscissae: Σ (x[i+1] - x[i]) * (y[i] + y[i+1]) / 2.
/// Slices of length below 2 integrate to zero.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

/// V = F_A0 * ∫ dX/(-rA) over the table points with X in [x_int, x_final].
pub fn pfr_volume(
    table: &RateTable,
    fa0: f64,
    x_int: f64,
    x_final: f64,
) -> Result<f64, ReactorDesignError> {
    check_conversion_bounds(x_int, x_final)?;
    let selected = table.samples_in_range(x_int, x_final);
    integrate_selected(&selected, fa0, x_int, x_final)
}

fn integrate_selected(
    selected: &[RateSample],
    fa0: f64,
    x_int: f64,
    x_final: f64,
) -> Result<f64, ReactorDesignError> {
    if selected.len() < 2 {
        return Err(ReactorDesignError::InsufficientData {
            found: selected.len(),
            x_int,
            x_final,
        });
    }
    if let Some(bad) = selected.iter().find(|s| !(s.rate > 0.0)) {
        return Err(ReactorDesignError::DivisionByZero(format!(
            "rate at X = {} is {}, PFR volume is unbounded",
            bad.x, bad.rate
        )));
    }
    let x: Vec<f64> = selected.iter().map(|s| s.x).collect();
    let inverse_rate: Vec<f64> = selected.iter().map(|s| 1.0 / s.rate).collect();
    Ok(fa0 * trapezoid(&x, &inverse_rate))
}

/// Full two-stage calculation: validates the request, interpolates the CSTR rate,
/// sizes the CSTR then the PFR.
pub fn size_cstr_pfr_series(
    table: &RateTable,
    request: &SizingRequest,
) -> Result<SizingResult, ReactorDesignError> {
    request.validate()?;
    if request.x_final > table.max_x() {
        debug!(
            "final conversion {} lies beyond the last tabulated conversion {}",
            request.x_final,
            table.max_x()
        );
    }
    let rate_at_x_int = table.interpolate_rate(request.x_int)?;
    debug!("-rA({}) = {}", request.x_int, rate_at_x_int);
    let cstr = cstr_volume(request.fa0, request.x_int, rate_at_x_int)?;
    let selected = table.samples_in_range(request.x_int, request.x_final);
    let pfr = integrate_selected(&selected, request.fa0, request.x_int, request.x_final)?;
    info!(
        "CSTR (0 -> {}) = {:.4}, PFR ({} -> {}) = {:.4}",
        request.x_int, cstr, request.x_int, request.x_final, pfr
    );
    Ok(SizingResult {
        rate_at_x_int,
        cstr_volume: cstr,
        pfr_volume: pfr,
        points_integrated: selected.len(),
    })
}

/// Levenspiel plot data: 1/(-rA) for every table point.
pub fn levenspiel_points(table: &RateTable) -> Result<Vec<LevenspielPoint>, ReactorDesignError> {
    if let Some(i) = table.rates().iter().position(|&r| !(r > 0.0)) {
        return Err(ReactorDesignError::DivisionByZero(format!(
            "rate at X = {} is {}, 1/(-rA) is undefined",
            table.x_values()[i],
            table.rates()[i]
        )));
    }
    let inverse = table.rate_vector().map(|r| 1.0 / r);
    Ok(table
        .x_values()
        .iter()
        .zip(inverse.iter())
        .map(|(&x, &inverse_rate)| LevenspielPoint { x, inverse_rate })
        .collect())
}
