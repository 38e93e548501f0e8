//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily}; 
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil}; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use thiserror::Error;


#[derive(Debug, Error)] 
pub enum NewtonError {
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

    #[error("step non-finite from vanishing derivative at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}


/// Newton-Raphson configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Defaults
/// - `tol = 1e-6`, compared against the step `|x_n - x_{n+1}|`.
/// - If `common.max_iter` is `None`, [`newton_raphson`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::NewtonRaphson`].
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { 
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Helpers 
/// - `eval_fx_checked`   : evaluates `f(x)` with finite-check
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)` 
#[inline] 
fn eval_fx_checked<F>(
    f: &mut F, 
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 { 
    let fx = { *evals += 1; f(x) }; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into()); 
    }

    Ok(fx)
}
#[inline] 
fn eval_dfx_analytic<G>(
    df: &mut G, 
    x: f64, 
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 { 
    let dfx = { *evals += 1; df(x) };  
    if !dfx.is_finite() { 
        return Err(NewtonError::DerivativeNotFinite { x, dfx }); 
    }

    Ok(dfx)
}

/// Newton step `f(x) / f'(x)`; a zero derivative is rejected up front 
/// instead of letting inf/NaN reach the range check.
#[inline] 
fn newton_step(x: f64, fx: f64, dfx: f64) -> Result<f64, NewtonError> { 
    if dfx == 0.0 { 
        return Err(NewtonError::DerivativeTooSmall { x, dfx }); 
    }
    let step = fx / dfx; 
    if !step.is_finite() { 
        return Err(NewtonError::DerivativeTooSmall { x, dfx }); 
    }

    Ok(step)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : derivative of `func`
/// - `a`     : lower end of the admissible range
/// - `b`     : upper end of the admissible range (`a <= b`)
/// - `x0`    : finite initial guess; need not lie inside `[a, b]`
/// - `cfg`   : [`NewtonCfg`] (tolerance, optional `max_iter`)
///
/// `[a, b]` is not a bracket: no sign change is required. It only bounds 
/// where iterates may go.
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : the iterate `x_{n+1}` that satisfied the step tolerance
/// - `f_root`              : function value at `root`; not finiteness-checked, it does
///                           not override the step criterion
/// - `iterations`          : number of Newton steps taken
/// - `evaluations`         : total evaluations (f and f')
/// - `tolerance_satisfied` : always [`ToleranceSatisfied::StepSizeReached`]
/// - `stencil`             : previous iterate used to form the step
/// - `algorithm_name`      : "newton_raphson"
///
/// # Errors
/// - [`NewtonError::InvalidBounds`]       : `a` or `b` non-finite, or `a > b`
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::Diverged`]            : an iterate left `[a, b]`
/// - [`NewtonError::DerivativeTooSmall`]  : `f'(x) == 0` or the step overflowed
/// - [`NewtonError::DerivativeNotFinite`] : derivative non-finite
///  
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : cap reached without convergence
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. Poor guesses or ill-behaved functions can diverge or cycle.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn newton_raphson<F, G>( 
    mut func: F, 
    mut dfunc: G, 
    a: f64, 
    b: f64, 
    x0: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> f64, 
    G: FnMut(f64) -> f64 
{   
    if !(a.is_finite() && b.is_finite()) || a > b { 
        return Err(NewtonError::InvalidBounds { a, b }); 
    }
    if !x0.is_finite() { 
        return Err(NewtonError::InvalidGuess { x0 }); 
    }

    let algorithm = Algorithm::Open(OpenFamily::NewtonRaphson);
    let algo_name = algorithm.algorithm_name(); 
    let tol       = cfg.tol(); 
    let num_iter  = algorithm.resolve_max_iter(cfg.max_iter()); 
    log::trace!("starting {algo_name}: {{a: {a}, b: {b}, x0: {x0}, tol: {tol}, max_iter: {num_iter}}}");

    let mut evals: usize = 0; 
    let mut x = x0; 
    for iter in 1..=num_iter {
        let fx     = eval_fx_checked(&mut func, x, &mut evals)?; 
        let dfx    = eval_dfx_analytic(&mut dfunc, x, &mut evals)?; 
        let step   = newton_step(x, fx, dfx)?; 
        let x_next = x - step; 
        log::trace!("{algo_name} iter {iter}: {{x: {x}, f(x): {fx}, f'(x): {dfx}, x_next: {x_next}}}"); 

        if x_next < a || x_next > b { 
            log::debug!("{algo_name}: diverged {{x: {x_next}, a: {a}, b: {b}}}"); 
            return Err(NewtonError::Diverged { x: x_next, a, b }); 
        }

        if (x - x_next).abs() < tol { 
            // reported only; the step criterion already decided convergence 
            let f_root = { evals += 1; func(x_next) }; 
            log::debug!("{algo_name} converged: {{root: {x_next}, iterations: {iter}, evaluations: {evals}}}"); 
            return Ok(RootFindingReport {
                root                : x_next,
                f_root              : f_root,
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::singleton(x), 
                algorithm_name      : algo_name,
            });
        }

        x = x_next; 
    }

    log::debug!("{algo_name}: iteration limit reached {{last: {x}}}"); 
    Err(RootFindingError::IterationLimit { 
        algorithm, 
        iterations: num_iter, 
        last: x 
    }.into())
}
