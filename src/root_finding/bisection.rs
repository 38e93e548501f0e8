//! Bisection method

use super::algorithms::{Algorithm, BracketFamily}; 
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::signs::strict_sign_change; 
use thiserror::Error; 


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange  { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 },

    #[error("bracket [{a}, {b}] collapsed at machine precision with |f(x)|={fx} >= tol")] 
    BracketCollapsed { a: f64, b: f64, fx: f64 },
}


/// Bisection configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Defaults
/// - `tol = 1e-6`, compared against `|f(midpoint)|`.
/// - If `common.max_iter` is `None`, [`bisection`] uses 
///   [`bisection_theoretical_iter`], the number of halvings after which 
///   no representable midpoint is left in `[a, b]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]; halves first so `b - a` cannot overflow
#[inline] 
fn calculate_bisection(a: f64, b: f64) -> f64 { 
    0.5 * a + 0.5 * b
}

/// Extra halvings on top of the exact bound; `0.5 * a + 0.5 * b` rounds, 
/// so the width is not halved exactly every step.
const ROUNDING_SLACK: usize = 10;

/// Number of halvings of `[a, b]` until the bracket collapses to two 
/// adjacent floats.
///
/// The smallest float spacing inside `[a, b]` bounds the final width: 
/// the smallest subnormal if the bracket contains zero, otherwise the 
/// spacing just below the endpoint of smaller magnitude. 
/// `log2` is taken of each factor separately so `[-f64::MAX, f64::MAX]` 
/// does not overflow.
pub fn bisection_theoretical_iter(a: f64, b: f64) -> usize { 
    let half_width = 0.5 * b - 0.5 * a; 
    let spacing = if a <= 0.0 && b >= 0.0 { 
        f64::from_bits(1) 
    } else { 
        let x = a.abs().min(b.abs()); 
        x - f64::from_bits(x.to_bits() - 1)
    };

    // saturating cast: a zero width gives -inf -> 0 
    let halvings = (half_width.log2() - spacing.log2()).ceil() as usize; 
    halvings + 2 + ROUNDING_SLACK
}

#[inline] 
fn eval_fx_checked<F>(
    f: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<f64, BisectionError> where F: FnMut(f64) -> f64 { 
    let fx = { *evals += 1; f(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok(fx)
}


/// Finds a root of a function using the 
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
///
/// [`RootFindingReport`] with:
/// ├ `root`                : midpoint `c` with `|f(c)| < tol`
/// ├ `f_root`              : `f(c)`
/// ├ `iterations`          : number of midpoints evaluated
/// ├ `evaluations`         : total function evaluations (two for the endpoints)
/// ├ `tolerance_satisfied` : always [`ToleranceSatisfied::AbsFxReached`]
/// ├ `stencil`             : bracket the final midpoint was taken from
/// └ `algorithm_name`      : "bisection"
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`]    - `a` or `b` is NaN/inf or `a >= b`.
/// ├ [`BisectionError::NoSignChange`]     - `func(a) * func(b) >= 0`. 
/// ├ [`BisectionError::BracketCollapsed`] - no representable midpoint is left 
/// │                                        and the tolerance was not met.
/// │ 
/// │ Propagated via [`BisectionError::RootFinding`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
/// └ [`RootFindingError::IterationLimit`]      - cap reached without convergence.
///
/// # Warning 
/// └ A root exactly at `a` or `b` is not reported: an endpoint value of exactly 
///   zero counts as "no sign change".
pub fn bisection<F>(
    mut func: F,                
    mut a: f64, 
    mut b: f64, 
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError> 
where F: FnMut(f64) -> f64 {
    
    if !(a.is_finite() && b.is_finite()) || a >= b { 
        return Err(BisectionError::InvalidBounds { a, b }); 
    }

    let algorithm = Algorithm::Bracket(BracketFamily::Bisection); 
    let algo_name = algorithm.algorithm_name(); 
    let tol       = cfg.tol(); 
    let num_iter  = match cfg.max_iter() { 
        Some(m) => m, 
        None    => bisection_theoretical_iter(a, b), 
    };
    log::trace!("starting {algo_name}: {{a: {a}, b: {b}, tol: {tol}, max_iter: {num_iter}}}");

    let mut evals = 0; 

    let mut fa = eval_fx_checked(&mut func, a, &mut evals)?; 
    let fb     = eval_fx_checked(&mut func, b, &mut evals)?; 
    if !strict_sign_change(fa, fb) { 
        log::debug!("{algo_name}: no sign change {{fa: {fa}, fb: {fb}}}"); 
        return Err(BisectionError::NoSignChange { a, b, fa, fb }); 
    }

    let mut midpoint = a; 
    for iter in 1..=num_iter {
        midpoint = calculate_bisection(a, b); 
        let fm   = eval_fx_checked(&mut func, midpoint, &mut evals)?; 
        log::trace!("{algo_name} iter {iter}: {{a: {a}, b: {b}, c: {midpoint}, f(c): {fm}}}"); 

        if fm.abs() < tol { 
            log::debug!("{algo_name} converged: {{root: {midpoint}, iterations: {iter}, evaluations: {evals}}}"); 
            return Ok(RootFindingReport {
                root                : midpoint, 
                f_root              : fm, 
                iterations          : iter, 
                evaluations         : evals, 
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached, 
                stencil             : Stencil::bracket(a, b), 
                algorithm_name      : algo_name, 
            });
        }

        // no representable point strictly inside [a, b] 
        if midpoint == a || midpoint == b { 
            log::debug!("{algo_name}: bracket collapsed {{a: {a}, b: {b}, f(c): {fm}}}"); 
            return Err(BisectionError::BracketCollapsed { a, b, fx: fm }); 
        }

        // shrink interval
        if strict_sign_change(fa, fm) { 
            b = midpoint; 
        } else { 
            a  = midpoint; 
            fa = fm; 
        }
    }

    log::debug!("{algo_name}: iteration limit reached {{last: {midpoint}}}"); 
    Err(RootFindingError::IterationLimit { 
        algorithm, 
        iterations: num_iter, 
        last: midpoint 
    }.into())
}
