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
// ShiftedRational: y = c − a/(x+b)
// ─────────────────────────────────────────────
//
// 雙曲線，前段衰減陡峭。消去 a、c：
//
//   y(0)  = c − a/b       = y0
//   y(x1) = c − a/(x1+b)  = y1
//     → a = (y1−y0)·b·(x1+b)/x1，c = y0 + (y1−y0)(x1+b)/x1
//
// 代入 ∫₀^x1 = c·x1 − a·ln((x1+b)/b) 得對數型超越方程：
//
//   f(b) = y0·x1 + (y1−y0)(x1+b)
//          − (y1−y0)·b(x1+b)·ln(1+x1/b)/x1 − h1 = 0
//
// b → 0⁺ 時 f → y1·x1 − h1（矩形界），b → ∞ 時 f → (y0+y1)x1/2 − h1
// （梯形界）。以數值微分 Newton 求解，b 須為正。

const NEWTON_MAX_ITERATIONS: usize = 200;
const NEWTON_TOLERANCE: f64 = 1e-13;
const INTEGRAL_TOLERANCE: f64 = 1e-6;

pub struct ShiftedRational {
    problem: BoundaryProblem,
    a: f64,
    b: f64,
    c: f64
}

impl ShiftedRational {
    pub fn fit(problem: BoundaryProblem) -> Option<ShiftedRational> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let residual = move |b: f64| {
            y0 * x1 + (y1 - y0) * (x1 + b)
                - (y1 - y0) * b * (x1 + b) * (1.0 + x1 / b).ln() / x1
                - h1
        };
        let b = newton_solve_numeric(0.0, &residual, x1, NEWTON_MAX_ITERATIONS, NEWTON_TOLERANCE);
        if !b.is_finite() || b <= 0.0 {
            return None;
        }

        let a = (y1 - y0) * b * (x1 + b) / x1;
        let c = y0 + a / b;
        if !a.is_finite() || !c.is_finite() {
            return None;
        }

        let fitted = ShiftedRational { problem, a, b, c };
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

impl ParametricCurve for ShiftedRational {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for ShiftedRational {
    fn value(&self, x: f64) -> f64 {
        self.c - self.a / (x + self.b)
    }

    fn derivative(&self, x: f64) -> f64 {
        let shifted = x + self.b;
        self.a / (shifted * shifted)
    }
}

impl CurveIntegration for ShiftedRational {
    fn integral(&self, x: f64) -> f64 {
        self.c * x - self.a * ((x + self.b) / self.b).ln()
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
        let curve = ShiftedRational::fit(reference()).unwrap();
        assert!((curve.value(0.0) - -800.0).abs() < 1e-8);
        assert!((curve.value(0.133) - -150.0).abs() < 1e-8);
        assert!((curve.integral(0.133) - -50.0).abs() < 1e-6);
    }

    #[test]
    fn pole_lies_left_of_domain() {
        let curve = ShiftedRational::fit(reference()).unwrap();
        assert!(curve.b() > 0.0);
    }

    #[test]
    fn decay_is_steepest_at_start() {
        let curve = ShiftedRational::fit(reference()).unwrap();
        assert!(curve.derivative(0.0) > curve.derivative(0.133));
    }

    #[test]
    fn infeasible_problem_rejected() {
        assert!(ShiftedRational::fit(BoundaryProblem::new(-800.0, -150.0, 0.133, 50.0)).is_none());
        assert!(ShiftedRational::fit(BoundaryProblem::new(-150.0, -800.0, 0.133, -50.0)).is_none());
    }
}
