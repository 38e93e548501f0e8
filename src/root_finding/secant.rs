//! Secant method

use super::algorithms::{Algorithm, OpenFamily}; 
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use thiserror::Error; 


#[derive(Debug, Error)] 
pub enum SecantError{ 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a <= b. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("iterate x={x} left the admissible range [{a}, {b}]")] 
    Diverged { x: f64, a: f64, b: f64 }, 

    #[error("degenerate secant through x1={x1}, x2={x2}: f(x1)={fx1}, f(x2)={fx2}")]
    DegenerateSecantStep { x1: f64, x2: f64, fx1: f64, fx2: f64 },
}


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Defaults 
/// - `tol = 1e-6`. It is both the step tolerance and the offset of the 
///   synthesized second starting point `x0 + tol`.
/// - If `common.max_iter` is `None`, [`secant`] resolves it using 
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`]. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg { 
    common: CommonCfg, 
}
impl SecantCfg { 
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the x-intercept of the secant through `(x1, fx1)` and `(x2, fx2)`, 
/// stepping from `x2`.
///
/// # Returns 
/// - `Ok(x_secant)` if the slope is nonzero and the intercept finite 
/// - `Err(DegenerateSecantStep)` otherwise 
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x1, fx1): (f64, f64), 
    (x2, fx2): (f64, f64), 
)-> Result<f64, SecantError> {
    let denom = fx2 - fx1;
    if denom == 0.0 {
        return Err(SecantError::DegenerateSecantStep { x1, x2, fx1, fx2 });
    } 

    let x_next = x2 - fx2 * (x2 - x1) / denom; 
    if !x_next.is_finite() { 
        return Err(SecantError::DegenerateSecantStep { x1, x2, fx1, fx2 });
    }

    Ok(x_next)
}

#[inline] 
fn eval_fx_checked<F>(
    f: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<f64, SecantError> where F: FnMut(f64) -> f64 { 
    let fx = { *evals += 1; f(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok(fx)
}


/// Finds a root of a function using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : lower end of the admissible range
/// - `b`    : upper end of the admissible range (`a <= b`)
/// - `x0`   : finite initial guess. The second point is `x0 + tol`.
/// - `cfg`  : [`SecantCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with 
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`; not finiteness-checked, it does
///                           not override the step criterion
/// - `iterations`          : number of iterations performed
/// - `evaluations`         : total function evaluations 
/// - `tolerance_satisfied` : always [`ToleranceSatisfied::StepSizeReached`]
/// - `stencil`             : the two iterates `{x_k, x_{k-1}}` used to form the last step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::InvalidBounds`]        : `a` or `b` non-finite, or `a > b`
/// - [`SecantError::InvalidGuess`]         : `x0` is NaN/inf
/// - [`SecantError::Diverged`]             : an iterate left `[a, b]`
/// - [`SecantError::DegenerateSecantStep`] : `f(x_k) == f(x_{k-1})` or the intercept overflowed
/// 
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : cap reached without convergence
///
/// # Behavior
/// - Update:
///       x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - Stops when |x_{k+1} - x_k| < tol, after the range check.
///
/// # Warning 
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F> ( 
    mut func: F, 
    a: f64, 
    b: f64, 
    x0: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError> 
where F: FnMut(f64) -> f64 { 
    
    if !(a.is_finite() && b.is_finite()) || a > b { 
        return Err(SecantError::InvalidBounds { a, b }); 
    }
    if !x0.is_finite() { 
        return Err(SecantError::InvalidGuess { x0 });
    }

    let algorithm = Algorithm::Open(OpenFamily::Secant);
    let algo_name = algorithm.algorithm_name(); 
    let tol       = cfg.tol(); 
    let num_iter  = algorithm.resolve_max_iter(cfg.max_iter()); 
    let x1        = x0 + tol; 
    log::trace!("starting {algo_name}: {{a: {a}, b: {b}, x0: {x0}, x1: {x1}, tol: {tol}, max_iter: {num_iter}}}");

    let mut evals = 0; 

    let mut x_parent2 = x0; 
    let mut x_parent1 = x1; 
    let mut f_parent2 = eval_fx_checked(&mut func, x_parent2, &mut evals)?; 
    let mut f_parent1 = eval_fx_checked(&mut func, x_parent1, &mut evals)?; 
    for iter in 1..=num_iter { 
        let x_next = calculate_secant_x_intercept(
            (x_parent2, f_parent2), (x_parent1, f_parent1)
        )?; 
        log::trace!("{algo_name} iter {iter}: {{x_k-1: {x_parent2}, x_k: {x_parent1}, x_next: {x_next}}}"); 

        if x_next < a || x_next > b { 
            log::debug!("{algo_name}: diverged {{x: {x_next}, a: {a}, b: {b}}}"); 
            return Err(SecantError::Diverged { x: x_next, a, b }); 
        }

        if (x_next - x_parent1).abs() < tol { 
            // reported only; the step criterion already decided convergence 
            let f_next = { evals += 1; func(x_next) }; 
            log::debug!("{algo_name} converged: {{root: {x_next}, iterations: {iter}, evaluations: {evals}}}"); 
            return Ok(RootFindingReport {
                root                : x_next, 
                f_root              : f_next, 
                iterations          : iter, 
                evaluations         : evals,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::doubleton(x_parent1, x_parent2),
                algorithm_name      : algo_name
            }); 
        }

        let f_next = eval_fx_checked(&mut func, x_next, &mut evals)?; 

        x_parent2 = x_parent1; 
        f_parent2 = f_parent1; 
        x_parent1 = x_next; 
        f_parent1 = f_next; 
    }

    log::debug!("{algo_name}: iteration limit reached {{last: {x_parent1}}}"); 
    Err(RootFindingError::IterationLimit { 
        algorithm, 
        iterations: num_iter, 
        last: x_parent1 
    }.into())
}
