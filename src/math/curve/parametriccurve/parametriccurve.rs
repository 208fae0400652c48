// ─────────────────────────────────────────────
// BoundaryProblem
// ─────────────────────────────────────────────
//
// 邊界問題四元組 (y0, y1, x1, h1)：
//
//   y(0)  = y0
//   y(x1) = y1
//   ∫₀^x1 y(t) dt = h1
//
// 下降率剖面的可行域（梯形／矩形面積界）：
//
//   y0 < y1 < 0 < x1
//   min_x1 = 2·h1/(y0+y1)   （線性剖面的梯形面積）
//   max_x1 = h1/y1          （水平剖面的矩形面積）
//   x1 ∈ [min_x1, max_x1]
//
// 超出此範圍的 (x1, h1) 不存在任何單調下降的擬合，
// 各曲線族一律以 None 拒絕而非外插。

#[derive(Clone, Copy, Debug)]
pub struct BoundaryProblem {
    y0: f64,
    y1: f64,
    x1: f64,
    h1: f64
}

impl BoundaryProblem {
    pub fn new(y0: f64, y1: f64, x1: f64, h1: f64) -> BoundaryProblem {
        BoundaryProblem { y0, y1, x1, h1 }
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn h1(&self) -> f64 {
        self.h1
    }

    pub fn min_x1(&self) -> f64 {
        2.0 * self.h1 / (self.y0 + self.y1)
    }

    pub fn max_x1(&self) -> f64 {
        self.h1 / self.y1
    }

    pub fn is_feasible(&self) -> bool {
        self.y0.is_finite()
            && self.y1.is_finite()
            && self.x1.is_finite()
            && self.h1.is_finite()
            && self.x1 > 0.0
            && self.y1 > self.y0
            && self.y1 < 0.0
            && self.x1 >= self.min_x1()
            && self.x1 <= self.max_x1()
    }
}

pub trait ParametricCurve {
    fn problem(&self) -> &BoundaryProblem;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_problem_is_feasible() {
        let problem = BoundaryProblem::new(-800.0, -150.0, 0.133, -50.0);
        assert!(problem.is_feasible());
        assert!((problem.min_x1() - 2.0 * -50.0 / -950.0).abs() < 1e-15);
        assert!((problem.max_x1() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn positive_integral_is_infeasible() {
        // 下降剖面累積高度必為負
        assert!(!BoundaryProblem::new(-800.0, -150.0, 0.133, 50.0).is_feasible());
    }

    #[test]
    fn degenerate_rates_are_infeasible() {
        assert!(!BoundaryProblem::new(-400.0, -400.0, 0.2, -60.0).is_feasible());
        assert!(!BoundaryProblem::new(-150.0, -800.0, 0.2, -60.0).is_feasible());
        assert!(!BoundaryProblem::new(-800.0, 150.0, 0.2, -60.0).is_feasible());
        assert!(!BoundaryProblem::new(-800.0, -150.0, 0.0, -60.0).is_feasible());
    }

    #[test]
    fn area_bounds_are_enforced() {
        // x1 小於梯形界
        assert!(!BoundaryProblem::new(-800.0, -150.0, 0.09, -50.0).is_feasible());
        // x1 大於矩形界
        assert!(!BoundaryProblem::new(-800.0, -150.0, 0.4, -50.0).is_feasible());
    }
}
