//! Closed-form design equations for a first-order irreversible reaction A -> B.
//!
//! | Reactor | Equation | Units |
//! |---------|----------|-------|
//! | Batch, constant volume | `t = -ln(1 - X) / k` | min |
//! | CSTR, steady state | `V = F_A0 X / (k C_A0 (1 - X))`, `C_A0 = F_A0 / v0` | L |
use super::reactor_error::ReactorDesignError;

fn check_conversion(x: f64) -> Result<(), ReactorDesignError> {
    if !(x > 0.0 && x < 1.0) {
        return Err(ReactorDesignError::DomainError(format!(
            "conversion must lie in (0, 1), got {}",
            x
        )));
    }
    Ok(())
}

fn check_rate_constant(k: f64) -> Result<(), ReactorDesignError> {
    if !(k > 0.0) {
        return Err(ReactorDesignError::DivisionByZero(format!(
            "rate constant must be positive, got {}",
            k
        )));
    }
    Ok(())
}

/// Time for a batch reactor to reach conversion `x`, in the time unit of `k`.
pub fn batch_time_to_conversion(k: f64, x: f64) -> Result<f64, ReactorDesignError> {
    check_conversion(x)?;
    check_rate_constant(k)?;
    Ok(-(1.0 - x).ln() / k)
}

/// Inlet concentration C_A0 = F_A0 / v0, mol/L
pub fn inlet_concentration(fa0: f64, v0: f64) -> Result<f64, ReactorDesignError> {
    if !(fa0 > 0.0) {
        return Err(ReactorDesignError::DomainError(format!(
            "feed rate F_A0 must be positive, got {}",
            fa0
        )));
    }
    if !(v0 > 0.0) {
        return Err(ReactorDesignError::DomainError(format!(
            "volumetric flow rate v0 must be positive, got {}",
            v0
        )));
    }
    Ok(fa0 / v0)
}

/// CSTR volume for a first-order reaction.
pub fn cstr_first_order_volume(
    fa0: f64,
    x: f64,
    v0: f64,
    k: f64,
) -> Result<f64, ReactorDesignError> {
    check_conversion(x)?;
    let ca0 = inlet_concentration(fa0, v0)?;
    check_rate_constant(k)?;
    Ok(fa0 * x / (k * ca0 * (1.0 - x)))
}
