use approx::assert_relative_eq;
use statorder::distributions::{rbinom, rcauchy, rexp, rf, rgeom, rnorm, runif};
use statorder::prelude::*;
use std::cell::Cell;

const EMPTY: &[f64] = &[];

#[test]
fn test_recycling() {
    let mut ctx = RngContext::from_seed(1);
    let out = evaluate_vector(&mut ctx, 5, [&[1.0, 2.0][..], &[10.0][..]], |[a, b], _| a + b);

    assert_eq!(out.values, vec![11.0, 12.0, 11.0, 12.0, 11.0]);
    assert!(out.complete);
    assert_eq!(out.warning, None);
}

#[test]
fn test_recycling_three_params() {
    let mut ctx = RngContext::from_seed(1);
    let a = [1.0, 2.0, 3.0];
    let b = [10.0, 20.0];
    let c = [100.0];
    let out = evaluate_vector(&mut ctx, 6, [&a[..], &b[..], &c[..]], |[x, y, z], _| x + y + z);

    assert_eq!(out.values, vec![111.0, 122.0, 113.0, 121.0, 112.0, 123.0]);
}

#[test]
fn test_empty_parameter_short_circuits() {
    let mut ctx = RngContext::from_seed(1);
    let calls = Cell::new(0);
    let out = evaluate_vector(&mut ctx, 3, [EMPTY, &[5.0][..]], |[a, _], _| {
        calls.set(calls.get() + 1);
        a
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(out.values.len(), 3);
    assert!(out.values.iter().all(|&v| statorder::core::is_na_real(v)));
    assert!(!out.complete);
    assert_eq!(out.warning, Some(RandWarning::NaProduced));
}

#[test]
fn test_empty_parameter_integer_result() {
    let mut ctx = RngContext::from_seed(1);
    let out: RandVector<i32> = evaluate_vector(&mut ctx, 2, [&[10.0][..], EMPTY], |[n, p], r| {
        rbinom(n, p, r)
    });

    assert_eq!(out.values, vec![NA_INTEGER, NA_INTEGER]);
    assert_eq!(out.warning, Some(RandWarning::NanProduced));
    assert_eq!(out.into_vector(), Vector::Integer(vec![NA_INTEGER, NA_INTEGER]));
}

#[test]
fn test_empty_parameter_leaves_generator_untouched() {
    let mut used = RngContext::from_seed(77);
    let _ = evaluate_vector(&mut used, 4, [EMPTY], |[a], r| a + r.unif_rand());

    let mut fresh = RngContext::from_seed(77);
    assert_eq!(used.acquire().unif_rand(), fresh.acquire().unif_rand());
}

#[test]
fn test_domain_violation_folds_into_one_warning() {
    let mut ctx = RngContext::from_seed(3);
    let scale = [1.0, -1.0, 2.0, -3.0];
    let out = evaluate_vector(&mut ctx, 8, [&[0.0][..], &scale[..]], |[l, s], r| rcauchy(l, s, r));

    assert_eq!(out.values.len(), 8);
    assert!(!out.complete);
    assert_eq!(out.warning, Some(RandWarning::NaProduced));
    for (i, v) in out.values.iter().enumerate() {
        assert_eq!(v.is_nan(), scale[i % 4] < 0.0, "position {i}");
    }
}

#[test]
fn test_zero_length_output() {
    let mut ctx = RngContext::from_seed(3);
    let out = evaluate_vector(&mut ctx, 0, [&[0.0][..], &[1.0][..]], |[m, s], r| rnorm(m, s, r));
    assert!(out.values.is_empty());
    assert!(out.complete);
}

#[test]
fn test_seeded_reproducibility() {
    let draw = |seed| {
        let mut ctx = RngContext::from_seed(seed);
        evaluate_vector(&mut ctx, 100, [&[0.0][..], &[1.0][..]], |[a, b], r| runif(a, b, r)).values
    };

    assert_eq!(draw(42), draw(42));
    assert_ne!(draw(42), draw(43));
}

#[test]
fn test_consecutive_calls_continue_the_stream() {
    let mut split = RngContext::from_seed(5);
    let mut first = evaluate_vector(&mut split, 3, [&[1.0][..]], |[s], r| rexp(s, r)).values;
    let second = evaluate_vector(&mut split, 3, [&[1.0][..]], |[s], r| rexp(s, r)).values;
    first.extend(second);

    let mut joined = RngContext::from_seed(5);
    let all = evaluate_vector(&mut joined, 6, [&[1.0][..]], |[s], r| rexp(s, r)).values;
    assert_eq!(first, all);
}

#[test]
fn test_uniform_moments() {
    let mut ctx = RngContext::from_seed(12);
    let out = evaluate_vector(&mut ctx, 50_000, [&[2.0][..], &[4.0][..]], |[a, b], r| runif(a, b, r));

    assert!(out.values.iter().all(|&v| (2.0..4.0).contains(&v)));
    let mean = out.values.iter().sum::<f64>() / out.values.len() as f64;
    assert_relative_eq!(mean, 3.0, epsilon = 0.02);
}

#[test]
fn test_normal_kinds_through_dispatch() {
    for kind in [NormKind::Inversion, NormKind::BoxMuller, NormKind::Ziggurat] {
        let mut ctx = RngContext::new(RngConfig {
            seed: 99,
            norm_kind: kind,
        });
        let out = evaluate_vector(&mut ctx, 40_000, [&[10.0][..], &[2.0][..]], |[m, s], r| {
            rnorm(m, s, r)
        });
        let n = out.values.len() as f64;
        let mean = out.values.iter().sum::<f64>() / n;
        let var = out.values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_relative_eq!(mean, 10.0, epsilon = 0.05);
        assert_relative_eq!(var, 4.0, epsilon = 0.15);
    }
}

#[test]
fn test_f_distribution_mean() {
    let mut ctx = RngContext::from_seed(17);
    let out = evaluate_vector(&mut ctx, 40_000, [&[5.0][..], &[10.0][..]], |[a, b], r| rf(a, b, r));

    assert!(out.complete);
    let mean = out.values.iter().sum::<f64>() / out.values.len() as f64;
    // E[F(d1, d2)] = d2 / (d2 - 2)
    assert_relative_eq!(mean, 1.25, epsilon = 0.05);
}

#[test]
fn test_integer_results() {
    let mut ctx = RngContext::from_seed(4);
    let out = evaluate_vector(&mut ctx, 1_000, [&[0.25][..]], |[p], r| rgeom(p, r));

    assert!(out.complete);
    assert!(out.values.iter().all(|&k| k >= 0));
    let mean = out.values.iter().map(|&k| f64::from(k)).sum::<f64>() / 1_000.0;
    assert_relative_eq!(mean, 3.0, epsilon = 0.5);

    let out = evaluate_vector(&mut ctx, 4, [&[5.0, -1.0][..], &[0.5][..]], |[n, p], r| {
        rbinom(n, p, r)
    });
    assert!(!out.complete);
    assert_eq!(out.warning, Some(RandWarning::NanProduced));
    assert_eq!(out.values[1], NA_INTEGER);
    assert_eq!(out.values[3], NA_INTEGER);
}

#[test]
fn test_resolve_length() {
    assert_eq!(resolve_length(&Vector::Integer(vec![5])).unwrap(), 5);
    assert_eq!(resolve_length(&Vector::Double(vec![2.99])).unwrap(), 2);
    assert_eq!(resolve_length(&Vector::Double(vec![-0.5])).unwrap(), 0);
    assert_eq!(resolve_length(&Vector::Logical(vec![Some(true)])).unwrap(), 1);
    assert_eq!(resolve_length(&Vector::character([Some(" 12 ")])).unwrap(), 12);
    assert_eq!(resolve_length(&Vector::Complex(vec![Complex::new(3.0, 9.0)])).unwrap(), 3);
    assert_eq!(resolve_length(&Vector::Double(vec![])).unwrap(), 0);
    assert_eq!(resolve_length(&Vector::Double(vec![-1.0, -2.0])).unwrap(), 2);
}

#[test]
fn test_resolve_length_rejects_invalid() {
    let invalid = [
        Vector::Integer(vec![NA_INTEGER]),
        Vector::Integer(vec![-3]),
        Vector::Double(vec![NA_REAL]),
        Vector::Double(vec![f64::INFINITY]),
        Vector::Logical(vec![None]),
        Vector::character([Some("ten")]),
        Vector::character([None::<&str>]),
    ];
    for spec in &invalid {
        assert!(
            matches!(resolve_length(spec), Err(Error::InvalidLengthSpec(_))),
            "{spec:?} should be rejected"
        );
    }
}

#[test]
fn test_generate_with_length_spec() {
    let mut ctx = RngContext::from_seed(8);
    let spec = Vector::character([Some("a"), Some("b"), Some("c")]);
    let out = generate(&mut ctx, &spec, [&[0.0][..], &[1.0][..]], |[a, b], r| runif(a, b, r)).unwrap();
    assert_eq!(out.values.len(), 3);

    let bad = Vector::Integer(vec![-1]);
    let err = generate(&mut ctx, &bad, [&[0.0][..]], |[a], _| a).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid arguments: length must be a non-negative integer, got -1"
    );
}
