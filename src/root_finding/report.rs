//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms on success. 


/// Which tolerance condition was satisfied.
/// - [`ToleranceSatisfied::AbsFxReached`]    
///     - [`Algorithm::Bracket`](super::algorithms::Algorithm::Bracket) 
///     - |f(x)| < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - [`Algorithm::Open`](super::algorithms::Algorithm::Open) 
///     - |x_n - x_{n - 1}| < tol 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied { 
    AbsFxReached, 
    StepSizeReached, 
}


/// Method-specific data returned by a solver. 
/// Contains the last set of points used in the update formula. 
/// - [`Stencil::Bracket`] : bracketing methods  
///     - `bounds` of the interval the root was computed from  
/// - [`Stencil::Open`]    : open methods  
///     - `x` = iterates used to compute the root  
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil { 
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize }, 
}
impl Stencil { 
    pub fn stencil(&self) -> &[f64] { 
        match self { 
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self { 
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self { 
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self { 
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`                : root estimate  
/// - `f_root`              : function value at `root`  
/// - `iterations`          : total iterations  
/// - `evaluations`         : total function (and derivative) evaluations  
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`]) 
/// - `stencil`             : last set of points used in update formula    
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)  
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct RootFindingReport {
    pub root                : f64, 
    pub f_root              : f64, 
    pub iterations          : usize, 
    pub evaluations         : usize, 
    pub tolerance_satisfied : ToleranceSatisfied, 
    pub stencil             : Stencil, 
    pub algorithm_name      : &'static str, 
}
