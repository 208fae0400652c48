use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};
use crate::math::solver::newton_solve_numeric;

// ─────────────────────────────────────────────
// ShiftedExponential: y = c − a·e^(−bx)
// ─────────────────────────────────────────────
//
// 飽和型衰減。由三個邊界方程消去 a、c：
//
//   y(0)  = c − a            = y0
//   y(x1) = c − a·e^(−b·x1)  = y1
//     → a = (y1−y0)/(1−e^(−b·x1))，c = y0 + a
//
// 代入積分式 ∫₀^x1 = c·x1 + (a/b)(e^(−b·x1)−1) 得單變數超越方程：
//
//   f(b) = y0·x1 + (y1−y0)·x1/(1−e^(−b·x1)) − (y1−y0)/b − h1 = 0
//
// b → 0⁺ 時 f → (y0+y1)x1/2 − h1（梯形界），b → ∞ 時 f → y1·x1 − h1
// （矩形界）；可行域嚴格內部必有正根。以數值微分 Newton 求解。

const NEWTON_MAX_ITERATIONS: usize = 100;
const NEWTON_TOLERANCE: f64 = 1e-12;
const INTEGRAL_TOLERANCE: f64 = 1e-6;

pub struct ShiftedExponential {
    problem: BoundaryProblem,
    a: f64,
    b: f64,
    c: f64
}

impl ShiftedExponential {
    pub fn fit(problem: BoundaryProblem) -> Option<ShiftedExponential> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let residual = move |b: f64| {
            let u = (-b * x1).exp();
            y0 * x1 + (y1 - y0) * x1 / (1.0 - u) - (y1 - y0) / b - h1
        };
        let b = newton_solve_numeric(0.0, &residual, 1.0 / x1, NEWTON_MAX_ITERATIONS, NEWTON_TOLERANCE);
        if !b.is_finite() || b <= 0.0 {
            return None;
        }

        let a = (y1 - y0) / (1.0 - (-b * x1).exp());
        let c = y0 + a;
        if !a.is_finite() || !c.is_finite() {
            return None;
        }

        let fitted = ShiftedExponential { problem, a, b, c };
        // Newton 無收斂保證，代回積分式驗證殘差
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

impl ParametricCurve for ShiftedExponential {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for ShiftedExponential {
    fn value(&self, x: f64) -> f64 {
        self.c - self.a * (-self.b * x).exp()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.a * self.b * (-self.b * x).exp()
    }
}

impl CurveIntegration for ShiftedExponential {
    fn integral(&self, x: f64) -> f64 {
        self.c * x + (self.a / self.b) * ((-self.b * x).exp() - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> BoundaryProblem {
        BoundaryProblem::new(-800.0, -150.0, 0.133, -50.0)
    }

    #[test]
    fn satisfies_boundary_constraints() {
        let curve = ShiftedExponential::fit(reference()).unwrap();
        assert!((curve.value(0.0) - -800.0).abs() < 1e-8);
        assert!((curve.value(0.133) - -150.0).abs() < 1e-8);
        assert!((curve.integral(0.133) - -50.0).abs() < 1e-6);
    }

    #[test]
    fn shape_parameters_are_positive() {
        let curve = ShiftedExponential::fit(reference()).unwrap();
        assert!(curve.a() > 0.0);
        assert!(curve.b() > 0.0);
    }

    #[test]
    fn value_is_monotonically_increasing() {
        let curve = ShiftedExponential::fit(reference()).unwrap();
        let mut prev = curve.value(0.0);
        for i in 1..=50 {
            let y = curve.value(0.133 * i as f64 / 50.0);
            assert!(y > prev);
            prev = y;
        }
    }

    #[test]
    fn infeasible_problem_rejected() {
        assert!(ShiftedExponential::fit(BoundaryProblem::new(-800.0, -150.0, 0.133, 50.0)).is_none());
        assert!(ShiftedExponential::fit(BoundaryProblem::new(-800.0, -150.0, 0.5, -50.0)).is_none());
    }
}
