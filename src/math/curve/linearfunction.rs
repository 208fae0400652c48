use crate::math::curve::curve::{
    Curve,
    CurveIntegration,
    CurveInversion,
    Point2D
};

// ─────────────────────────────────────────────
// LinearFunction
// ─────────────────────────────────────────────
//
// y = kx + b。三種建構方式皆為封閉解：
//
//   1. 兩點：k = Δy/Δx，b = y0 − k·x0
//   2. (b, x1, H)：解 H = (k/2)x1² + b·x1
//   3. (b, y1, H)：解 k = (y1² − b²)/(2H)
//      （由 x1 = (y1−b)/k 代入積分式消去 x1 而得）
//
// 建構失敗（兩點 x 座標重合、x1 = 0、H = 0、k 非有限或為零）回傳 None。

pub struct LinearFunction {
    k: f64,
    b: f64
}

impl LinearFunction {
    pub fn from_points(lhs_pt: &Point2D, rhs_pt: &Point2D) -> Option<LinearFunction> {
        if lhs_pt.x() == rhs_pt.x() {
            return None;
        }
        let k = Point2D::slope(lhs_pt, rhs_pt);
        let b = lhs_pt.y() - k * lhs_pt.x();
        Some(LinearFunction { k, b })
    }

    /// 給定截距 b、定義域長度 x1 與目標積分 H。
    pub fn from_integral_over(b: f64, x1: f64, integral: f64) -> Option<LinearFunction> {
        if x1 == 0.0 {
            return None;
        }
        let k = 2.0 * (integral - b * x1) / (x1 * x1);
        if !k.is_finite() {
            return None;
        }
        Some(LinearFunction { k, b })
    }

    /// 給定截距 b、終點值 y1 與目標積分 H；定義域長度隨之隱含決定。
    pub fn from_final_value_and_integral(b: f64, y1: f64, integral: f64) -> Option<LinearFunction> {
        if integral == 0.0 {
            return None;
        }
        let k = (y1 * y1 - b * b) / (2.0 * integral);
        if !k.is_finite() || k == 0.0 {
            return None;
        }
        Some(LinearFunction { k, b })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// 反函數 x = (y − b)/k；k 為 0 或非有限時無解。
    pub fn x_from_value(&self, y: f64) -> Option<f64> {
        if self.k == 0.0 || !self.k.is_finite() {
            return None;
        }
        Some((y - self.b) / self.k)
    }
}

impl Curve for LinearFunction {
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.k, x, self.b)
    }

    fn derivative(&self, _x: f64) -> f64 {
        self.k
    }
}

impl CurveIntegration for LinearFunction {
    fn integral(&self, x: f64) -> f64 {
        (0.5 * self.k * x + self.b) * x
    }
}

impl CurveInversion for LinearFunction {
    /// 解 (k/2)x² + bx − H = 0。
    ///
    /// 取非負且落在單調段上的根（兩根中較小的非負者）；
    /// 判別式為負時回傳 None。k = 0 退化為線性方程 x = H/b。
    fn solve_x_from_integral(&self, target: f64) -> Option<f64> {
        if !self.k.is_finite() || !self.b.is_finite() {
            return None;
        }
        if self.k == 0.0 {
            if self.b == 0.0 {
                return None;
            }
            let x = target / self.b;
            return if x >= 0.0 { Some(x) } else { None };
        }
        let discriminant = f64::mul_add(self.b, self.b, 2.0 * self.k * target);
        if discriminant < 0.0 {
            return None;
        }
        let sq = discriminant.sqrt();
        let r1 = (-self.b + sq) / self.k;
        let r2 = (-self.b - sq) / self.k;
        let lo = r1.min(r2);
        let hi = r1.max(r2);
        if lo >= 0.0 {
            Some(lo)
        } else if hi >= 0.0 {
            Some(hi)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_from_two_points() {
        let line = LinearFunction::from_points(
            &Point2D::new(0.0, 2.0),
            &Point2D::new(4.0, 10.0),
        ).unwrap();
        assert_eq!(line.k(), 2.0);
        assert_eq!(line.b(), 2.0);
        assert_eq!(line.value(3.0), 8.0);
    }

    #[test]
    fn coincident_abscissae_have_no_line() {
        let result = LinearFunction::from_points(
            &Point2D::new(1.0, 2.0),
            &Point2D::new(1.0, 5.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn constructs_from_intercept_and_integral() {
        // H = (k/2)x1² + b·x1 with b = 1, x1 = 2, H = 6 → k = 2
        let line = LinearFunction::from_integral_over(1.0, 2.0, 6.0).unwrap();
        assert!((line.k() - 2.0).abs() < 1e-12);
        assert!((line.integral(2.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn constructs_from_final_value_and_integral() {
        // 減速剖面：b = 13000, y1 = 12000, H = 1300
        let line = LinearFunction::from_final_value_and_integral(13000.0, 12000.0, 1300.0).unwrap();
        let x1 = line.x_from_value(12000.0).unwrap();
        assert!(x1 > 0.0);
        assert!((line.integral(x1) - 1300.0).abs() < 1e-6);
    }

    #[test]
    fn zero_integral_rejected() {
        assert!(LinearFunction::from_final_value_and_integral(10.0, 20.0, 0.0).is_none());
    }

    #[test]
    fn equal_endpoint_rates_rejected() {
        // y1 = b ⇒ k = 0，無法表示減速剖面
        assert!(LinearFunction::from_final_value_and_integral(10.0, 10.0, 5.0).is_none());
    }

    #[test]
    fn integral_round_trip() {
        let line = LinearFunction::from_points(
            &Point2D::new(0.0, 13000.0),
            &Point2D::new(0.12, 12000.0),
        ).unwrap();
        for v in [0.0, 0.01, 0.05, 0.1, 0.12] {
            let h = line.integral(v);
            let back = line.solve_x_from_integral(h).unwrap();
            assert!((back - v).abs() < 1e-9, "round trip failed at {v}: {back}");
        }
    }

    #[test]
    fn inversion_rejects_unreachable_integral() {
        // 遞減至零後積分有上界，超過即判別式為負
        let line = LinearFunction::from_points(
            &Point2D::new(0.0, 10.0),
            &Point2D::new(1.0, -10.0),
        ).unwrap();
        assert!(line.solve_x_from_integral(100.0).is_none());
    }

    #[test]
    fn horizontal_line_inverts_linearly() {
        let line = LinearFunction::from_points(
            &Point2D::new(0.0, 5.0),
            &Point2D::new(1.0, 5.0),
        ).unwrap();
        assert!(line.x_from_value(7.0).is_none());
        assert!((line.solve_x_from_integral(10.0).unwrap() - 2.0).abs() < 1e-12);
    }
}
