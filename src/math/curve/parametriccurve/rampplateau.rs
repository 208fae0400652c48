use crate::math::curve::curve::{
    Curve,
    CurveIntegration,
    CurveInversion
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};

// ─────────────────────────────────────────────
// RampPlateau: y = y0 + kx (x ≤ a)，y = y1 (x > a)
// ─────────────────────────────────────────────
//
// 線性爬升後轉水平。積分為 [0,a] 的梯形加 [a,x1] 的矩形：
//
//   h1 = y1·x1 + a·(y0−y1)/2
//     → a = 2(h1 − y1·x1)/(y0 − y1)
//
// 須 0 < a ≤ x1 否則拒絕；k = (y1−y0)/a（轉折點連續：k·a + y0 = y1）。

pub struct RampPlateau {
    problem: BoundaryProblem,
    a: f64,
    k: f64
}

impl RampPlateau {
    pub fn fit(problem: BoundaryProblem) -> Option<RampPlateau> {
        if !problem.is_feasible() {
            return None;
        }
        let y0 = problem.y0();
        let y1 = problem.y1();
        let x1 = problem.x1();
        let h1 = problem.h1();

        let a = 2.0 * (h1 - y1 * x1) / (y0 - y1);
        if !a.is_finite() || a <= 0.0 || a > x1 {
            return None;
        }
        let k = (y1 - y0) / a;
        Some(RampPlateau { problem, a, k })
    }

    /// 轉折點。
    pub fn transition(&self) -> f64 {
        self.a
    }

    pub fn slope(&self) -> f64 {
        self.k
    }

    fn ramp_integral(&self, x: f64) -> f64 {
        (0.5 * self.k * x + self.problem.y0()) * x
    }
}

impl ParametricCurve for RampPlateau {
    fn problem(&self) -> &BoundaryProblem {
        &self.problem
    }
}

impl Curve for RampPlateau {
    fn value(&self, x: f64) -> f64 {
        if x <= self.a {
            f64::mul_add(self.k, x, self.problem.y0())
        } else {
            self.problem.y1()
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        if x <= self.a {
            self.k
        } else {
            0.0
        }
    }
}

impl CurveIntegration for RampPlateau {
    fn integral(&self, x: f64) -> f64 {
        if x <= self.a {
            self.ramp_integral(x)
        } else {
            self.ramp_integral(self.a) + self.problem.y1() * (x - self.a)
        }
    }
}

impl CurveInversion for RampPlateau {
    /// 先判斷目標積分落在爬升段或水平段：
    /// 爬升段解二次方程 (k/2)x² + y0·x − H = 0（根須在 [0,a]），
    /// 水平段解線性方程（結果須 ≥ a，否則視為不一致）。
    fn solve_x_from_integral(&self, target: f64) -> Option<f64> {
        let y0 = self.problem.y0();
        let y1 = self.problem.y1();
        let ramp_end = self.ramp_integral(self.a);

        // y < 0 使積分嚴格遞減：爬升段涵蓋 [ramp_end, 0]
        if target >= ramp_end {
            let discriminant = f64::mul_add(y0, y0, 2.0 * self.k * target);
            if discriminant < 0.0 {
                return None;
            }
            let sq = discriminant.sqrt();
            for root in [(-y0 - sq) / self.k, (-y0 + sq) / self.k] {
                if (0.0..=self.a).contains(&root) {
                    return Some(root);
                }
            }
            None
        } else {
            let x = self.a + (target - ramp_end) / y1;
            if x < self.a {
                return None;
            }
            Some(x)
        }
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
        let curve = RampPlateau::fit(reference()).unwrap();
        assert!((curve.value(0.0) - -800.0).abs() < 1e-8);
        assert!((curve.value(0.133) - -150.0).abs() < 1e-8);
        assert!((curve.integral(0.133) - -50.0).abs() < 1e-6);
    }

    #[test]
    fn ramp_meets_plateau_continuously() {
        let curve = RampPlateau::fit(reference()).unwrap();
        let a = curve.transition();
        assert!(a > 0.0 && a <= 0.133);
        assert!((curve.slope() * a + -800.0 - -150.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_equal_rates_rejected() {
        assert!(RampPlateau::fit(BoundaryProblem::new(-400.0, -400.0, 0.2, -60.0)).is_none());
    }

    #[test]
    fn positive_integral_rejected() {
        assert!(RampPlateau::fit(BoundaryProblem::new(-800.0, -150.0, 0.133, 50.0)).is_none());
    }

    #[test]
    fn inversion_round_trips_in_both_regions() {
        let curve = RampPlateau::fit(reference()).unwrap();
        let a = curve.transition();
        for x in [0.25 * a, 0.5 * a, 0.9 * a, a + 0.5 * (0.133 - a), 0.133] {
            let h = curve.integral(x);
            let back = curve.solve_x_from_integral(h).unwrap();
            assert!((back - x).abs() < 1e-10, "round trip failed at {x}: {back}");
        }
    }

    #[test]
    fn inversion_rejects_out_of_range_targets() {
        let curve = RampPlateau::fit(reference()).unwrap();
        // 正的目標積分落不在下降剖面的值域內
        assert!(curve.solve_x_from_integral(10.0).is_none());
    }
}
