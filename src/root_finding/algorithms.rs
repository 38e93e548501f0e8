//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods, 
//! along with shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Iteration cap used when neither the config nor 
/// [`Algorithm::default_max_iter`] provides one.  
///
/// Bisection does not use it: its cap is derived from the bracket 
/// (see `bisection_theoretical_iter`), since a bracket spanning the whole 
/// `f64` range needs about 2100 halvings to collapse.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding 
/// - [`Algorithm::Open`]    contains open methods for root-finding 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bracket(BracketFamily), 
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily { 
    Bisection,
    RegulaFalsi, 
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily { 
    Secant, 
    NewtonRaphson,
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Applied only when `max_iter` is unset.  
    /// - Values are heuristic and method-specific.  
    /// - `None` means "compute the theoretical bound instead"; 
    ///   [`BracketFamily::Bisection`] derives it from the bracket. 
    ///   Elsewhere [`GLOBAL_MAX_ITER_FALLBACK`] is used.  
    /// - Newton-Raphson converges only linearly at a root of multiplicity `m` 
    ///   (error ratio `(m - 1) / m`), hence the same budget as regula falsi.
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection)   => None, 
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => Some(200), 
            Algorithm::Open(OpenFamily::Secant)            => Some(100), 
            Algorithm::Open(OpenFamily::NewtonRaphson)     => Some(200), 
        }
    }

    /// Resolves the effective iteration cap from an optional user value.
    pub const fn resolve_max_iter(self, max_iter: Option<usize>) -> usize { 
        match max_iter { 
            Some(v) => v, 
            None    => match self.default_max_iter() { 
                Some(v) => v, 
                None    => GLOBAL_MAX_ITER_FALLBACK, 
            },
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection", 
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi", 
            Algorithm::Open(OpenFamily::Secant)            => "secant", 
            Algorithm::Open(OpenFamily::NewtonRaphson)     => "newton_raphson",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
