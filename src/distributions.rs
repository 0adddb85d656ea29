//! Per-element random variate formulas.
//!
//! Each function draws one variate from its parameters and a
//! [`RandomNumberProvider`]. Parameters outside the distribution's domain
//! never panic or error: the function returns the missing sentinel of its
//! result kind (`NaN` for reals, [`NA_INTEGER`] for integers), which the
//! vectorized dispatcher folds into a single warning.
//!
//! | Function | Parameters | Result |
//! |---|---|---|
//! | [`rcauchy`] | location, scale | real |
//! | [`rnorm`] | mean, sd | real |
//! | [`runif`] | min, max | real |
//! | [`rlogis`] | location, scale | real |
//! | [`rweibull`] | shape, scale | real |
//! | [`rexp`] | scale | real |
//! | [`rgamma`] | shape, scale | real |
//! | [`rchisq`] | df | real |
//! | [`rf`] | df1, df2 | real |
//! | [`rbinom`] | size, prob | integer |
//! | [`rgeom`] | prob | integer |

use std::f64::consts::PI;

use rand_distr::Binomial;

use crate::core::NA_INTEGER;
use crate::rng::RandomNumberProvider;

/// Cauchy variate by inversion: `location + scale * tan(π u)`.
pub fn rcauchy(location: f64, scale: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if location.is_nan() || !scale.is_finite() || scale < 0.0 {
        return f64::NAN;
    }
    if scale == 0.0 || !location.is_finite() {
        location
    } else {
        location + scale * (PI * rand.unif_rand()).tan()
    }
}

pub fn rnorm(mean: f64, sd: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if mean.is_nan() || !sd.is_finite() || sd < 0.0 {
        return f64::NAN;
    }
    if sd == 0.0 || !mean.is_finite() {
        mean
    } else {
        mean + sd * rand.norm_rand()
    }
}

pub fn runif(min: f64, max: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if !min.is_finite() || !max.is_finite() || max < min {
        return f64::NAN;
    }
    if min == max {
        min
    } else {
        let u = rand.unif_rand();
        min + (max - min) * u
    }
}

/// Logistic variate by inversion: `location + scale * ln(u / (1 - u))`.
pub fn rlogis(location: f64, scale: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if location.is_nan() || !scale.is_finite() {
        return f64::NAN;
    }
    if scale == 0.0 || !location.is_finite() {
        location
    } else {
        let u = rand.unif_rand();
        location + scale * (u / (1.0 - u)).ln()
    }
}

pub fn rweibull(shape: f64, scale: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
        return if scale == 0.0 { 0.0 } else { f64::NAN };
    }
    scale * (-rand.unif_rand().ln()).powf(1.0 / shape)
}

/// Exponential variate with mean `scale`.
pub fn rexp(scale: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if !scale.is_finite() || scale <= 0.0 {
        return if scale == 0.0 { 0.0 } else { f64::NAN };
    }
    scale * rand.exp_rand()
}

/// Gamma variate with the given shape and scale.
///
/// # Algorithm
/// Marsaglia & Tsang (2000) squeeze method for `shape >= 1`; smaller
/// shapes are boosted by one and scaled back with `u^(1/shape)`.
///
/// Reference: Marsaglia, G. & Tsang, W. W. (2000), *A simple method for
/// generating gamma variables*, ACM TOMS 26(3).
pub fn rgamma(shape: f64, scale: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if shape.is_nan() || scale.is_nan() {
        return f64::NAN;
    }
    if shape <= 0.0 || scale <= 0.0 {
        return if scale == 0.0 || shape == 0.0 {
            0.0
        } else {
            f64::NAN
        };
    }
    if !shape.is_finite() || !scale.is_finite() {
        return f64::INFINITY;
    }

    if shape < 1.0 {
        let boost = rand.unif_rand().powf(1.0 / shape);
        return rgamma(shape + 1.0, scale, rand) * boost;
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let (x, v) = loop {
            let x = rand.norm_rand();
            let v = 1.0 + c * x;
            if v > 0.0 {
                break (x, v * v * v);
            }
        };
        let u = rand.unif_rand();
        let x2 = x * x;
        if u < 1.0 - 0.0331 * x2 * x2 || u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
            return d * v * scale;
        }
    }
}

pub fn rchisq(df: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if !df.is_finite() || df < 0.0 {
        return f64::NAN;
    }
    rgamma(df / 2.0, 2.0, rand)
}

/// F variate as a ratio of scaled chi-squared variates. An infinite degree
/// of freedom contributes a constant 1.
pub fn rf(df1: f64, df2: f64, rand: &mut RandomNumberProvider<'_>) -> f64 {
    if df1.is_nan() || df2.is_nan() || df1 <= 0.0 || df2 <= 0.0 {
        return f64::NAN;
    }
    let v1 = if df1.is_finite() {
        rchisq(df1, rand) / df1
    } else {
        1.0
    };
    let v2 = if df2.is_finite() {
        rchisq(df2, rand) / df2
    } else {
        1.0
    };
    v1 / v2
}

/// Binomial variate, sampled in bounded time whatever `size` is.
///
/// `size` must be a non-negative whole number within the integer range.
pub fn rbinom(size: f64, prob: f64, rand: &mut RandomNumberProvider<'_>) -> i32 {
    if !size.is_finite() || size.round() != size || size < 0.0 || size > i32::MAX as f64 {
        return NA_INTEGER;
    }
    if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
        return NA_INTEGER;
    }
    let trials = size as i32;
    if trials == 0 || prob == 0.0 {
        return 0;
    }
    if prob == 1.0 {
        return trials;
    }
    match Binomial::new(trials as u64, prob) {
        Ok(binomial) => i32::try_from(rand.sample::<u64, _>(binomial)).unwrap_or(NA_INTEGER),
        Err(_) => NA_INTEGER,
    }
}

/// Geometric variate (failures before the first success) by inversion.
pub fn rgeom(prob: f64, rand: &mut RandomNumberProvider<'_>) -> i32 {
    if !prob.is_finite() || prob <= 0.0 || prob > 1.0 {
        return NA_INTEGER;
    }
    if prob == 1.0 {
        return 0;
    }
    let failures = (rand.unif_rand().ln() / (-prob).ln_1p()).floor();
    if failures > i32::MAX as f64 {
        NA_INTEGER
    } else {
        failures as i32
    }
}
