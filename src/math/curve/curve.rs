pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}

pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

/// 定積分以 0 為下界：integral(x) = ∫₀ˣ y(t) dt
pub trait CurveIntegration {
    fn integral(&self, x: f64) -> f64;
}

/// 由目標定積分值反解 x；無解（判別式為負、根不在定義域內）時回傳 None。
pub trait CurveInversion {
    fn solve_x_from_integral(&self, target: f64) -> Option<f64>;
}
