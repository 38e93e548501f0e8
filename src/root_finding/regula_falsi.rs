//! Regula falsi (false position) method

use super::algorithms::{Algorithm, BracketFamily}; 
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::signs::strict_sign_change; 
use thiserror::Error; 


#[derive(Debug, Error)]
pub enum RegulaFalsiError{ 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError), 

    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange  { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 }, 

    #[error("secant step non-finite on [{a}, {b}]: fa={fa}, fb={fb}")]
    DegenerateSecantStep { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("bracket [{a}, {b}] stagnated at x={x} with |f(x)|={fx} >= tol")] 
    BracketCollapsed { a: f64, b: f64, x: f64, fx: f64 },
}


/// RegulaFalsi configuration 
/// 
/// # Defaults
/// - `tol = 1e-6`, compared against `|f(c)|`.
/// - If `max_iter` is `None`, [`regula_falsi`] uses 
///   [`Algorithm::default_max_iter`] for [`BracketFamily::RegulaFalsi`]. 
///   One endpoint of a convex or concave function never moves, so the 
///   cap is larger than the open methods'.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg { 
    common: CommonCfg, 
}
impl RegulaFalsiCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(RegulaFalsiCfg);


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`. 
/// 
/// Callers guarantee `fa` and `fb` have strictly opposite signs, so the 
/// denominator is nonzero; only overflow can make the result non-finite.
#[inline]
fn false_position(a: f64, b: f64, fa: f64, fb: f64) -> Result<f64, RegulaFalsiError> { 
    let c = a - fa * (b - a) / (fb - fa); 
    if !c.is_finite() { 
        return Err(RegulaFalsiError::DegenerateSecantStep { a, b, fa, fb }); 
    }

    Ok(c)
}

#[inline] 
fn eval_fx_checked<F>(
    f: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<f64, RegulaFalsiError> where F: FnMut(f64) -> f64 { 
    let fx = { *evals += 1; f(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok(fx)
}


/// Finds a root of a function using the 
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : Lower bound, finite and less than `b`
/// - `b`    : Upper bound, finite and greater than `a`
/// - `cfg`  : [`RegulaFalsiCfg`] (tolerance, optional `max_iter`)
///
/// # Errors
/// - [`RegulaFalsiError::InvalidBounds`]        : `a` or `b` NaN/inf or `a >= b`
/// - [`RegulaFalsiError::NoSignChange`]         : `func(a) * func(b) >= 0`
/// - [`RegulaFalsiError::DegenerateSecantStep`] : chord intercept overflowed
/// - [`RegulaFalsiError::BracketCollapsed`]     : intercept landed on an endpoint 
///                                                without meeting the tolerance
/// - [`RootFindingError`] via [`RegulaFalsiError::RootFinding`]
///
/// # Behavior
/// - Update: `c = a - f(a) * (b - a) / (f(b) - f(a))`
/// - Stops when `|f(c)| < tol`. 
/// - If `f(a)` and `f(c)` have opposite signs, `b = c`, otherwise `a = c`. 
///
/// # Notes
/// - Converges faster than bisection for well-behaved functions, but the 
///   bracket does not shrink symmetrically and one endpoint may stagnate.
pub fn regula_falsi<F>(
    mut func: F, 
    mut a: f64, 
    mut b: f64, 
    cfg: RegulaFalsiCfg
) -> Result<RootFindingReport, RegulaFalsiError> 
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b { 
        return Err(RegulaFalsiError::InvalidBounds { a, b }); 
    }

    let algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi); 
    let algo_name = algorithm.algorithm_name(); 
    let tol       = cfg.tol(); 
    let num_iter  = algorithm.resolve_max_iter(cfg.max_iter()); 
    log::trace!("starting {algo_name}: {{a: {a}, b: {b}, tol: {tol}, max_iter: {num_iter}}}");

    let mut evals = 0; 

    let mut fa = eval_fx_checked(&mut func, a, &mut evals)?; 
    let mut fb = eval_fx_checked(&mut func, b, &mut evals)?; 
    if !strict_sign_change(fa, fb) { 
        log::debug!("{algo_name}: no sign change {{fa: {fa}, fb: {fb}}}"); 
        return Err(RegulaFalsiError::NoSignChange { a, b, fa, fb }); 
    }

    let mut c = a; 
    for iter in 1..=num_iter { 
        c      = false_position(a, b, fa, fb)?; 
        let fc = eval_fx_checked(&mut func, c, &mut evals)?; 
        log::trace!("{algo_name} iter {iter}: {{a: {a}, b: {b}, c: {c}, f(c): {fc}}}"); 

        if fc.abs() < tol { 
            log::debug!("{algo_name} converged: {{root: {c}, iterations: {iter}, evaluations: {evals}}}"); 
            return Ok(RootFindingReport {
                root                : c, 
                f_root              : fc, 
                iterations          : iter, 
                evaluations         : evals, 
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached, 
                stencil             : Stencil::bracket(a, b), 
                algorithm_name      : algo_name, 
            });
        }

        // update would leave the bracket unchanged 
        if c == a || c == b { 
            log::debug!("{algo_name}: bracket stagnated {{a: {a}, b: {b}, c: {c}, f(c): {fc}}}"); 
            return Err(RegulaFalsiError::BracketCollapsed { a, b, x: c, fx: fc }); 
        }

        if strict_sign_change(fa, fc) { 
            b  = c; 
            fb = fc; 
        } else { 
            a  = c; 
            fa = fc; 
        }
    }

    log::debug!("{algo_name}: iteration limit reached {{last: {c}}}"); 
    Err(RootFindingError::IterationLimit { 
        algorithm, 
        iterations: num_iter, 
        last: c 
    }.into())
}
