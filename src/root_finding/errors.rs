//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : common runtime errors  
//! │   ├ non-finite function evaluation  
//! │   ├ iteration cap reached without convergence  
//! │   └ invalid global parameters (e.g. max_iter) 
//! │
//! └ [`ToleranceError`]   : tolerance-related errors  
//!     └ invalid input tolerance  
//!
//! Method-specific failures (no sign change, divergence, ...) live next to 
//! each algorithm and wrap these two enums transparently.


use thiserror::Error; 
use super::algorithms::Algorithm; 


/// Root-finding runtime errors.  
/// 
/// ┌ Non-finite function evaluation  
/// ├ Iteration cap reached before the tolerance was met  
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("{algorithm} did not converge in {iterations} iterations; last estimate x={last}")]
    IterationLimit { algorithm: Algorithm, iterations: usize, last: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration errors.  
#[derive(Debug, Error)]
pub enum ToleranceError { 
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },
}
