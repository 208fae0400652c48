use crate::math::curve::curve::{
    Curve,
    CurveIntegration,
    CurveInversion
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};
use crate::math::solver::bisection_solve;

// ─────────────────────────────────────────────
// SquareRootCurve: y = √(kx+b) + a
// ─────────────────────────────────────────────
//
// 全代數消去，無迭代。令 s0 = √b、s1 = √(k·x1+b)、d = y1−y0、p = s1+s0：
//
//   s1 − s0 = d，k·x1 = s1² − s0² = d·p
//   ∫₀^x1 = (2/(3k))(s1³ − s0³) + a·x1，s1³−s0³ = d(3p²+d²)/4
//
// 代入後 p 的封閉解：
//
//   p = d²·x1 / (6h1 − 3(y0+y1)·x1)
//
// 再得 s0 = (p−d)/2（須 ≥ 0，否則 √b 無法匹配 y0）、b = s0²、
// k = d·p/x1、a = y0 − s0。
//
// 由目標積分反解 x：以線性內插 x1·H/h1 為種子的 Newton（F' = y），
// 迭代越出 [0,x1] 或未收斂時退回 200 輪二分法——二分法是正確性
// 後盾，Newton 只是加速。

const NEWTON_MAX_ITERATIONS: usize = 20;
const NEWTON_TOLERANCE: f64 = 1e-12;
const BISECTION_ROUNDS: usize = 200;
const DERIVATIVE_GUARD: f64 = 1e-12;

pub struct SquareRootCurve {
    problem: BoundaryProblem,
    a: f64,
    b: f64,
    k: f64
}

impl SquareRootCurve {
    pub fn fit(problem: BoundaryProblem) -> Option<SquareRootCurve> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let d = y1 - y0;
        let denominator = 6.0 * h1 - 3.0 * (y0 + y1) * x1;
        if denominator == 0.0 {
            return None;
        }
        let p = d * d * x1 / denominator;
        let s0 = 0.5 * (p - d);
        if !s0.is_finite() || s0 < 0.0 {
            return None;
        }
        let b = s0 * s0;
        let k = d * p / x1;
        let a = y0 - s0;
        if !b.is_finite() || !k.is_finite() || !a.is_finite() || k <= 0.0 {
            return None;
        }
        Some(SquareRootCurve { problem, a, b, k })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl ParametricCurve for SquareRootCurve {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for SquareRootCurve {
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.k, x, self.b).sqrt() + self.a
    }

    fn derivative(&self, x: f64) -> f64 {
        0.5 * self.k / f64::mul_add(self.k, x, self.b).sqrt()
    }
}

impl CurveIntegration for SquareRootCurve {
    fn integral(&self, x: f64) -> f64 {
        let shifted = f64::mul_add(self.k, x, self.b);
        2.0 / (3.0 * self.k) * (shifted * shifted.sqrt() - self.b * self.b.sqrt())
            + self.a * x
    }
}

impl CurveInversion for SquareRootCurve {
    fn solve_x_from_integral(&self, target: f64) -> Option<f64> {
        let x1 = self.problem.x1();
        let h1 = self.problem.h1();
        // F 自 0 遞減至 h1；目標在值域外即無解
        if target > 0.0 || target < h1 {
            return None;
        }

        let mut x = x1 * target / h1;
        let mut converged = false;
        for _ in 0..NEWTON_MAX_ITERATIONS {
            let dy = self.value(x);
            if !dy.is_finite() || dy.abs() < DERIVATIVE_GUARD {
                break;
            }
            let step = (self.integral(x) - target) / dy;
            x -= step;
            if !(0.0..=x1).contains(&x) {
                break;
            }
            if step.abs() < NEWTON_TOLERANCE {
                converged = true;
                break;
            }
        }
        if converged {
            return Some(x);
        }

        let f = |x: f64| self.integral(x);
        Some(bisection_solve(target, &f, 0.0, x1, BISECTION_ROUNDS))
    }
}
