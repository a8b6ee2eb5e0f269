//! 標準常態分佈反函數

use replen_core::{ReplenError, Result};

// Acklam 有理逼近係數（相對誤差 < 1.15e-9）
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239e0,
];

const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838e0,
    -2.549_732_539_343_734e0,
    4.374_664_141_464_968e0,
    2.938_163_982_698_783e0,
];

const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996e0,
    3.754_408_661_907_416e0,
];

/// 下尾區間分界
const P_LOW: f64 = 0.02425;

/// 計算 z 使得 P(Z <= z) = p
///
/// p 必須在 (0, 1) 之間；端點處 z 為 ±∞，回傳 `InvalidServiceLevel`。
pub fn inverse_normal_cdf(p: f64) -> Result<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(ReplenError::InvalidServiceLevel(p));
    }

    let z = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    };

    Ok(z)
}

fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 0.0)]
    #[case(0.95, 1.644_853_626_951_472)]
    #[case(0.975, 1.959_963_984_540_054)]
    #[case(0.99, 2.326_347_874_040_841)]
    #[case(0.8413447460685429, 1.0)]
    #[case(0.01, -2.326_347_874_040_841)]
    #[case(0.001, -3.090_232_306_167_813)]
    #[case(0.999_999, 4.753_424_308_822_899)]
    fn test_known_quantiles(#[case] p: f64, #[case] expected: f64) {
        let z = inverse_normal_cdf(p).unwrap();
        assert!(
            (z - expected).abs() < 1e-7,
            "p = {p}: got {z}, expected {expected}"
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.5)]
    #[case(2.0)]
    #[case(f64::NAN)]
    fn test_rejects_out_of_range(#[case] p: f64) {
        assert!(matches!(
            inverse_normal_cdf(p),
            Err(ReplenError::InvalidServiceLevel(_))
        ));
    }

    #[test]
    fn test_region_boundaries_are_continuous() {
        for boundary in [P_LOW, 1.0 - P_LOW] {
            let below = inverse_normal_cdf(boundary - 1e-12).unwrap();
            let above = inverse_normal_cdf(boundary + 1e-12).unwrap();
            assert!((above - below).abs() < 1e-6);
        }
    }

    proptest! {
        #[test]
        fn prop_symmetric(p in 0.0001f64..0.9999) {
            let z = inverse_normal_cdf(p).unwrap();
            let mirrored = inverse_normal_cdf(1.0 - p).unwrap();
            prop_assert!((z + mirrored).abs() < 1e-6);
        }

        #[test]
        fn prop_monotonic(a in 0.0001f64..0.9999, b in 0.0001f64..0.9999) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let z_lo = inverse_normal_cdf(lo).unwrap();
            let z_hi = inverse_normal_cdf(hi).unwrap();
            prop_assert!(z_lo <= z_hi + 1e-9);
        }
    }
}
