//! tests for the bisection root finding algorithm 
use roots1d::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use roots1d::root_finding::errors::{RootFindingError, ToleranceError}; 
use roots1d::root_finding::report::{Stencil, ToleranceSatisfied}; 

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_2() -> TestResult {
    let _ = simple_logger::init_with_level(log::Level::Trace);
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, 0.0, 10.0, BisectionCfg::new())?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.algorithm_name, "bisection");
    assert!((res.root - 2.0).abs() < 1e-6);
    assert!(res.f_root.abs() < 1e-6);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_sqrt_2_with_tight_tol() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;
    let cfg = BisectionCfg::new().set_tol(tol)?; 

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!(res.f_root.abs() < tol);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    Ok(())
}

#[test]
fn counts_endpoint_evaluations() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, 0.0, 10.0, BisectionCfg::new())?;

    // two endpoints plus one midpoint per iteration 
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}

#[test]
fn no_sign_change() {
    let mut calls = 0; 
    let f   = |x: f64| { calls += 1; x + 1.0 };
    let err = bisection(f, 5.0, 10.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b, .. } if a == 5.0 && b == 10.0));
    assert_eq!(calls, 2); 
}

#[test]
fn root_at_endpoint_is_no_sign_change() {
    let f   = |x: f64| x;
    let err = bisection(f, 0.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { fa, .. } if fa == 0.0));
}

#[test]
fn tiny_opposite_values_are_a_sign_change() -> TestResult {
    let f   = |x: f64| 1e-200 * (x - 0.5);
    let res = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.5);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn detects_invalid_bounds() {
    let f   = |x: f64| x;
    let err = bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { a, b } if a == 2.0 && b == 0.0));

    let err = bisection(f, 1.0, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));

    let err = bisection(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
}

#[test]
fn non_finite_eval() {
    let f   = |x: f64| x.sqrt() - 2.0; 
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err(); 

    assert!(matches!(
        err, 
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx }) 
        if x == -1.0 && fx.is_nan()));
}

#[test]
fn infinite_function_value() {
    let f   = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err, 
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()));
}

#[test]
fn discontinuity_collapses_bracket() {
    let f   = |x: f64| if x < 1.0 / 3.0 { -1.0 } else { 1.0 };
    let err = bisection(f, 0.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err, 
        BisectionError::BracketCollapsed { a, b, fx } 
        if (a - 1.0 / 3.0).abs() < 1e-15 && (b - 1.0 / 3.0).abs() < 1e-15 && fx.abs() == 1.0));
}

#[test]
fn wide_bracket_converges() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, 0.0, 1e300, BisectionCfg::new())?;

    assert!((res.root - 2.0).abs() < 1e-6);
    assert!(res.iterations > 1000);
    Ok(())
}

#[test]
fn full_range_bracket_converges() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, -f64::MAX, f64::MAX, BisectionCfg::new())?;

    assert!((res.root - 2.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn full_range_discontinuity_collapses_before_cap() {
    // sign flips at the smallest subnormal, the deepest possible collapse 
    let tiny = f64::from_bits(1); 
    let f    = |x: f64| if x < tiny { -1.0 } else { 1.0 };
    let err  = bisection(f, -f64::MAX, f64::MAX, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::BracketCollapsed { .. }));
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let cfg = BisectionCfg::new().set_max_iter(3)?;
    let err = bisection(f, 0.0, 10.0, cfg).unwrap_err();

    assert!(matches!(
        err, 
        BisectionError::RootFinding(RootFindingError::IterationLimit { iterations: 3, last, .. }) 
        if last == 1.25));
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    let err = BisectionCfg::new().set_tol(0.0).unwrap_err(); 
    assert!(matches!(err, ToleranceError::InvalidTol { got } if got == 0.0)); 

    let err = BisectionCfg::new().set_tol(f64::NAN).unwrap_err(); 
    assert!(matches!(err, ToleranceError::InvalidTol { .. })); 

    let err = BisectionCfg::new().set_max_iter(0).unwrap_err(); 
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 })); 
}

#[test]
fn stencil_is_final_bracket() -> TestResult {
    let f   = |x: f64| (x - 1.0).powi(3);
    let res = bisection(f, -2.0, 2.0, BisectionCfg::new())?;

    // 0 -> f < 0, then midpoint of [0, 2] is the exact root 
    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.stencil, Stencil::bracket(0.0, 2.0));
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let r1  = bisection(f, 0.0, 1.0, BisectionCfg::new())?;
    let r2  = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(r1, r2);
    Ok(())
}
