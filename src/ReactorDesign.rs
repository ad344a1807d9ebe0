//! # Reactor Design Module
//!
//! Design equations for ideal isothermal reactors with a single reaction A -> B.
//!
//! ## Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `X` | Conversion of A | - |
//! | `-rA` | Rate of consumption of A | mol/(L·min) |
//! | `F_A0` | Molar feed rate of A | mol/min |
//! | `C_A0` | Inlet concentration of A | mol/L |
//! | `v0` | Inlet volumetric flow rate | L/min |
//! | `k` | First-order rate constant | 1/min |
//!
//! ## Problems
//!
//! - **Batch reactor**: `t = -ln(1 - X)/k`
//! - **CSTR, first order**: `V = F_A0 X / (k C_A0 (1 - X))`
//! - **CSTR + PFR in series from rate data** (Levenspiel analysis):
//!   `V_CSTR = F_A0 X_int / (-rA(X_int))`, `V_PFR = F_A0 ∫ dX/(-rA)` from `X_int` to `X_final`.
//!   The rate at `X_int` is interpolated linearly in the table, the PFR integral is taken
//!   with the trapezoidal rule over the table points inside `[X_int, X_final]`.
//!
//! All calculations are pure functions of their inputs and report problems with the
//! input through `ReactorDesignError`.

/// typed errors of all calculations
pub mod reactor_error;
/// tabulated -rA(X): construction, parsing, interpolation
pub mod rate_table;
/// two-stage CSTR + PFR sizing from a rate table
pub mod levenspiel;
/// batch and first-order CSTR formulas
pub mod closed_form;
/// task structs of the three problem types and their common trait
pub mod reactor_problems;
mod rate_table_tests;
