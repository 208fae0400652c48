use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};

// ─────────────────────────────────────────────
// InverseSquare: y = c − a/(x+b)²
// ─────────────────────────────────────────────
//
// 唯一不需迭代的曲線族。令 K = (h1 − y0·x1)/(y1 − y0)，
// 由三個邊界方程消去 a、c 後得 K 與 b 的恆等式：
//
//   K = x1·(x1+b)/(x1+2b)
//     → b = x1·(x1 − K)/(2K − x1)
//
// 可行域內 K ∈ (x1/2, x1)，對應 b ∈ (0, ∞)；b ≤ 0 即拒絕。
// 其餘參數封閉解：
//
//   a = (y1−y0)·b²(x1+b)²/(x1·(x1+2b))
//   c = y0 + a/b²

pub struct InverseSquare {
    problem: BoundaryProblem,
    a: f64,
    b: f64,
    c: f64
}

impl InverseSquare {
    pub fn fit(problem: BoundaryProblem) -> Option<InverseSquare> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let big_k = (h1 - y0 * x1) / (y1 - y0);
        let denominator = 2.0 * big_k - x1;
        if denominator == 0.0 {
            return None;
        }
        let b = x1 * (x1 - big_k) / denominator;
        if !b.is_finite() || b <= 0.0 {
            return None;
        }

        let shifted = x1 + b;
        let a = (y1 - y0) * b * b * shifted * shifted / (x1 * (x1 + 2.0 * b));
        let c = y0 + a / (b * b);
        if !a.is_finite() || !c.is_finite() {
            return None;
        }
        Some(InverseSquare { problem, a, b, c })
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

impl ParametricCurve for InverseSquare {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for InverseSquare {
    fn value(&self, x: f64) -> f64 {
        let shifted = x + self.b;
        self.c - self.a / (shifted * shifted)
    }

    fn derivative(&self, x: f64) -> f64 {
        let shifted = x + self.b;
        2.0 * self.a / (shifted * shifted * shifted)
    }
}

impl CurveIntegration for InverseSquare {
    fn integral(&self, x: f64) -> f64 {
        self.c * x - self.a * (1.0 / self.b - 1.0 / (x + self.b))
    }
}
