//! Classical one-dimensional root finding.
//!
//! ┌ [`root_finding::bisection`]    : bracketing, midpoint update
//! ├ [`root_finding::regula_falsi`] : bracketing, false-position update
//! ├ [`root_finding::newton`]       : open, Newton-Raphson with analytic derivative
//! └ [`root_finding::secant`]       : open, secant with a synthesized second point

pub mod root_finding;
