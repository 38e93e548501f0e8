//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration limit, 
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields  
//! ├ `tol`      : convergence tolerance, `|f(x)|` for bracket methods 
//! │              and `|step|` for open methods  
//! └ `max_iter` : iteration cap (optional) 
//!
//! [`CommonCfg::new`] initializes configuration with default values. 


/// Default convergence tolerance shared by all methods.
pub const DEFAULT_TOL: f64 = 1e-6;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol:      f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            tol      : DEFAULT_TOL, 
            max_iter : None 
        }
    }

    // getters  
    pub fn tol(&self)      -> f64 { self.tol }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_tol      (&mut self, v: f64)   { self.tol      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg { 
    fn default() -> Self { Self::new() }
}

/// Generates the validated builder setters and getters shared by every 
/// `<Method>Cfg`. The target type must have a `common: CommonCfg` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTol { got: v }
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn tol(&self) -> f64 { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }

        impl Default for $cfg { 
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg; 
