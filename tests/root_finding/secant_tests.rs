//! tests for the secant root-finding algorithm
use roots1d::root_finding::errors::RootFindingError;
use roots1d::root_finding::report::ToleranceSatisfied; 
use roots1d::root_finding::secant::{secant, SecantCfg, SecantError};
use std::f64::consts::FRAC_PI_2; 

type TestResult = Result<(), SecantError>;

#[test]
fn finds_half_pi() -> TestResult {
    let _ = simple_logger::init_with_level(log::Level::Trace);
    let f   = |x: f64| x.cos();
    let res = secant(f, 0.0, 3.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_eq!(res.algorithm_name, "secant");
    assert!((res.root - FRAC_PI_2).abs() < 1e-6);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = secant(f, 0.0, 3.0, 1.0, SecantCfg::new())?;

    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-10);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = secant(f, 0.0, 10.0, 0.0, SecantCfg::new())?;

    assert!((res.root - 3.0).abs() < 1e-9);
    assert_eq!(res.stencil.stencil().len(), 2);
    Ok(())
}

#[test]
fn non_finite_value_at_converged_root_is_reported() -> TestResult {
    let f   = |x: f64| if (x - 2.0).abs() < 1e-9 { f64::NAN } else { x - 2.0 };
    let res = secant(f, 0.0, 10.0, 2.0 - 5e-7, SecantCfg::new())?;

    assert!((res.root - 2.0).abs() < 1e-9);
    assert!(res.f_root.is_nan());
    Ok(())
}

#[test]
fn flat_function_is_degenerate() {
    let f   = |_x: f64| 5.0;
    let err = secant(f, -1.0, 1.0, 0.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::DegenerateSecantStep { fx1, fx2, .. } if fx1 == 5.0 && fx2 == 5.0));
}

#[test]
fn near_flat_start_leaves_range() {
    let f   = |x: f64| x * x - 2.0;
    let err = secant(f, 0.0, 3.0, 0.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::Diverged { x, .. } if x > 3.0));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| 1.0 / x - 1.0;
    let err = secant(f, -5.0, 5.0, 0.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn invalid_inputs() {
    let f   = |x: f64| x;

    let err = secant(f, -1.0, 1.0, f64::INFINITY, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));

    let err = secant(f, 1.0, -1.0, 0.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidBounds { a, b } if a == 1.0 && b == -1.0));
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x.cos();
    let cfg = SecantCfg::new().set_max_iter(1)?;
    let err = secant(f, 0.0, 3.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::IterationLimit { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn loose_tol_still_lands_near_root() -> TestResult {
    let f   = |x: f64| x.cos();
    let cfg = SecantCfg::new().set_tol(1e-3)?;
    let res = secant(f, 0.0, 3.0, 1.0, cfg)?;

    assert!((res.root - FRAC_PI_2).abs() < 1e-3);
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f   = |x: f64| x.cos();
    let r1  = secant(f, 0.0, 3.0, 1.0, SecantCfg::new())?;
    let r2  = secant(f, 0.0, 3.0, 1.0, SecantCfg::new())?;

    assert_eq!(r1, r2);
    Ok(())
}
