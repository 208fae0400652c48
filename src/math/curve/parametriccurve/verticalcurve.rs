use serde::{
    Serialize,
    Deserialize
};

use crate::math::curve::curve::{
    Curve,
    CurveIntegration,
    CurveInversion
};
use crate::math::curve::parametriccurve::parametriccurve::{
    BoundaryProblem,
    ParametricCurve
};
use crate::math::curve::parametriccurve::shiftedexponential::ShiftedExponential;
use crate::math::curve::parametriccurve::shiftedrational::ShiftedRational;
use crate::math::curve::parametriccurve::inversesquareroot::InverseSquareRoot;
use crate::math::curve::parametriccurve::inversesquare::InverseSquare;
use crate::math::curve::parametriccurve::rampplateau::RampPlateau;
use crate::math::curve::parametriccurve::squareroot::SquareRootCurve;

// ─────────────────────────────────────────────
// FlareModel / VerticalCurve
// ─────────────────────────────────────────────

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum FlareModel {
    ShiftedExponential,
    ShiftedRational,
    InverseSquareRoot,
    InverseSquare,
    RampPlateau,
    SquareRoot,
}

/// 垂直剖面：六個曲線族的 tagged union，共用同一組求值介面。
///
/// 擬合是推測性的：不可行的邊界問題或未收斂的參數解一律回傳
/// None，讓呼叫端能廉價地對同一問題批次嘗試多個模型。
pub enum VerticalCurve {
    ShiftedExponential(ShiftedExponential),
    ShiftedRational(ShiftedRational),
    InverseSquareRoot(InverseSquareRoot),
    InverseSquare(InverseSquare),
    RampPlateau(RampPlateau),
    SquareRoot(SquareRootCurve),
}

impl VerticalCurve {
    pub fn fit(model: FlareModel, problem: BoundaryProblem) -> Option<VerticalCurve> {
        match model {
            FlareModel::ShiftedExponential => {
                ShiftedExponential::fit(problem).map(VerticalCurve::ShiftedExponential)
            }
            FlareModel::ShiftedRational => {
                ShiftedRational::fit(problem).map(VerticalCurve::ShiftedRational)
            }
            FlareModel::InverseSquareRoot => {
                InverseSquareRoot::fit(problem).map(VerticalCurve::InverseSquareRoot)
            }
            FlareModel::InverseSquare => {
                InverseSquare::fit(problem).map(VerticalCurve::InverseSquare)
            }
            FlareModel::RampPlateau => {
                RampPlateau::fit(problem).map(VerticalCurve::RampPlateau)
            }
            FlareModel::SquareRoot => {
                SquareRootCurve::fit(problem).map(VerticalCurve::SquareRoot)
            }
        }
    }

    pub fn model(&self) -> FlareModel {
        match self {
            VerticalCurve::ShiftedExponential(_) => FlareModel::ShiftedExponential,
            VerticalCurve::ShiftedRational(_) => FlareModel::ShiftedRational,
            VerticalCurve::InverseSquareRoot(_) => FlareModel::InverseSquareRoot,
            VerticalCurve::InverseSquare(_) => FlareModel::InverseSquare,
            VerticalCurve::RampPlateau(_) => FlareModel::RampPlateau,
            VerticalCurve::SquareRoot(_) => FlareModel::SquareRoot,
        }
    }

    /// 僅 RampPlateau 有轉折點。
    pub fn ramp_transition(&self) -> Option<f64> {
        match self {
            VerticalCurve::RampPlateau(curve) => Some(curve.transition()),
            _ => None,
        }
    }

    /// 由目標積分反解 x；僅部分模型定義解析反函數。
    pub fn solve_x_from_integral(&self, target: f64) -> Option<f64> {
        match self {
            VerticalCurve::RampPlateau(curve) => curve.solve_x_from_integral(target),
            VerticalCurve::SquareRoot(curve) => curve.solve_x_from_integral(target),
            _ => None,
        }
    }
}

impl ParametricCurve for VerticalCurve {
    fn problem(&self) -> &BoundaryProblem {
        match self {
            VerticalCurve::ShiftedExponential(curve) => curve.problem(),
            VerticalCurve::ShiftedRational(curve) => curve.problem(),
            VerticalCurve::InverseSquareRoot(curve) => curve.problem(),
            VerticalCurve::InverseSquare(curve) => curve.problem(),
            VerticalCurve::RampPlateau(curve) => curve.problem(),
            VerticalCurve::SquareRoot(curve) => curve.problem(),
        }
    }
}

impl Curve for VerticalCurve {
    fn value(&self, x: f64) -> f64 {
        match self {
            VerticalCurve::ShiftedExponential(curve) => curve.value(x),
            VerticalCurve::ShiftedRational(curve) => curve.value(x),
            VerticalCurve::InverseSquareRoot(curve) => curve.value(x),
            VerticalCurve::InverseSquare(curve) => curve.value(x),
            VerticalCurve::RampPlateau(curve) => curve.value(x),
            VerticalCurve::SquareRoot(curve) => curve.value(x),
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            VerticalCurve::ShiftedExponential(curve) => curve.derivative(x),
            VerticalCurve::ShiftedRational(curve) => curve.derivative(x),
            VerticalCurve::InverseSquareRoot(curve) => curve.derivative(x),
            VerticalCurve::InverseSquare(curve) => curve.derivative(x),
            VerticalCurve::RampPlateau(curve) => curve.derivative(x),
            VerticalCurve::SquareRoot(curve) => curve.derivative(x),
        }
    }
}

impl CurveIntegration for VerticalCurve {
    fn integral(&self, x: f64) -> f64 {
        match self {
            VerticalCurve::ShiftedExponential(curve) => curve.integral(x),
            VerticalCurve::ShiftedRational(curve) => curve.integral(x),
            VerticalCurve::InverseSquareRoot(curve) => curve.integral(x),
            VerticalCurve::InverseSquare(curve) => curve.integral(x),
            VerticalCurve::RampPlateau(curve) => curve.integral(x),
            VerticalCurve::SquareRoot(curve) => curve.integral(x),
        }
    }
}
