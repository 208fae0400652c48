// ─────────────────────────────────────────────
// Scalar root solving
// ─────────────────────────────────────────────
//
// Newton 迭代：x ← x − (f(x)−T)/f'(x)
//
// 不保證收斂：
//   - 步長 |Δx| < tolerance 時提前結束
//   - |f'(x)| 低於 DERIVATIVE_GUARD 或 f/f' 出現非有限值時，
//     中止並回傳目前的迭代值（而非 sentinel）
//
// 呼叫端必須自行驗證回傳的根（代回檢查殘差、確認落在幾何可行範圍內）。

/// 數值微分（中央差分）的固定步長。
pub const DERIVATIVE_STEP: f64 = 1e-6;

const DERIVATIVE_GUARD: f64 = 1e-12;

pub fn newton_solve(
    target: f64,
    f: &dyn Fn(f64) -> f64,
    df: &dyn Fn(f64) -> f64,
    guess: f64,
    max_iterations: usize,
    tolerance: f64,
) -> f64 {
    let mut x = guess;
    for _ in 0..max_iterations {
        let fx = f(x);
        let dx = df(x);
        if !fx.is_finite() || !dx.is_finite() || dx.abs() < DERIVATIVE_GUARD {
            return x;
        }
        let step = (fx - target) / dx;
        x -= step;
        if step.abs() < tolerance {
            break;
        }
    }
    x
}

/// 以中央差分近似 f' 的 Newton 迭代。
pub fn newton_solve_numeric(
    target: f64,
    f: &dyn Fn(f64) -> f64,
    guess: f64,
    max_iterations: usize,
    tolerance: f64,
) -> f64 {
    let df = |x: f64| (f(x + DERIVATIVE_STEP) - f(x - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP);
    newton_solve(target, f, &df, guess, max_iterations, tolerance)
}

/// 區間二分法。f 在 [lo, hi] 上須單調（遞增或遞減皆可）。
pub fn bisection_solve(
    target: f64,
    f: &dyn Fn(f64) -> f64,
    mut lo: f64,
    mut hi: f64,
    rounds: usize,
) -> f64 {
    let increasing = f(hi) >= f(lo);
    for _ in 0..rounds {
        let mid = 0.5 * (lo + hi);
        if (f(mid) > target) == increasing {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_finds_cube_root() {
        let f = |x: f64| x * x * x;
        let df = |x: f64| 3.0 * x * x;
        let root = newton_solve(27.0, &f, &df, 2.0, 100, 1e-14);
        assert!((root - 3.0).abs() < 1e-10);
    }

    #[test]
    fn newton_numeric_matches_analytic() {
        let f = |x: f64| x.exp() - 2.0 * x;
        let df = |x: f64| x.exp() - 2.0;
        let analytic = newton_solve(5.0, &f, &df, 2.0, 100, 1e-14);
        let numeric = newton_solve_numeric(5.0, &f, 2.0, 100, 1e-14);
        assert!((analytic - numeric).abs() < 1e-8);
    }

    #[test]
    fn newton_returns_last_iterate_on_flat_derivative() {
        let f = |_x: f64| 1.0;
        let df = |_x: f64| 0.0;
        let root = newton_solve(0.0, &f, &df, 7.5, 100, 1e-14);
        assert_eq!(root, 7.5);
    }

    #[test]
    fn bisection_handles_decreasing_function() {
        let f = |x: f64| -x * x;
        let root = bisection_solve(-4.0, &f, 0.0, 10.0, 200);
        assert!((root - 2.0).abs() < 1e-12);
    }
}
