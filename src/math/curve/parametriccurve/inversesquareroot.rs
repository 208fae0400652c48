use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};
use crate::math::solver::newton_solve;

// ─────────────────────────────────────────────
// InverseSquareRoot: y = c − a/√(x+b)
// ─────────────────────────────────────────────
//
// 衰減速率介於雙曲線與指數之間。令 s0 = √b、s1 = √(x1+b)，消去 a、c：
//
//   a = (y1−y0)·s0·s1/(s1−s0)，c = y0 + a/s0
//
// 代入 ∫₀^x1 = c·x1 − 2a(√(x1+b) − √b)，利用 x1 = s1² − s0² 化簡成：
//
//   f(b) = y0·x1 + (y1−y0)·s1·(s1−s0) − h1 = 0
//
// 解析導數：
//
//   f'(b) = −(y1−y0)(s1−s0)²/(2·s0·s1) < 0
//
// f 在 b 上嚴格遞減且凸，故自根的左側（小 b）出發的 Newton
// 迭代單調上升收斂、不會越出定義域；種子取 x1/100。

const NEWTON_MAX_ITERATIONS: usize = 200;
const NEWTON_TOLERANCE: f64 = 1e-13;
const INTEGRAL_TOLERANCE: f64 = 1e-6;

pub struct InverseSquareRoot {
    problem: BoundaryProblem,
    a: f64,
    b: f64,
    c: f64
}

impl InverseSquareRoot {
    pub fn fit(problem: BoundaryProblem) -> Option<InverseSquareRoot> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let residual = move |b: f64| {
            let s0 = b.sqrt();
            let s1 = (x1 + b).sqrt();
            y0 * x1 + (y1 - y0) * s1 * (s1 - s0) - h1
        };
        let slope = move |b: f64| {
            let s0 = b.sqrt();
            let s1 = (x1 + b).sqrt();
            let diff = s1 - s0;
            -(y1 - y0) * diff * diff / (2.0 * s0 * s1)
        };
        let b = newton_solve(0.0, &residual, &slope, x1 / 100.0, NEWTON_MAX_ITERATIONS, NEWTON_TOLERANCE);
        if !b.is_finite() || b <= 0.0 {
            return None;
        }

        let s0 = b.sqrt();
        let s1 = (x1 + b).sqrt();
        let a = (y1 - y0) * s0 * s1 / (s1 - s0);
        let c = y0 + a / s0;
        if !a.is_finite() || !c.is_finite() {
            return None;
        }

        let fitted = InverseSquareRoot { problem, a, b, c };
        if (fitted.integral(x1) - h1).abs() > INTEGRAL_TOLERANCE {
            return None;
        }
        Some(fitted)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl ParametricCurve for InverseSquareRoot {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for InverseSquareRoot {
    fn value(&self, x: f64) -> f64 {
        self.c - self.a / (x + self.b).sqrt()
    }

    fn derivative(&self, x: f64) -> f64 {
        let shifted = x + self.b;
        0.5 * self.a / (shifted * shifted.sqrt())
    }
}

impl CurveIntegration for InverseSquareRoot {
    fn integral(&self, x: f64) -> f64 {
        self.c * x - 2.0 * self.a * ((x + self.b).sqrt() - self.b.sqrt())
    }
}
