use serde::{
    Serialize,
    Deserialize
};

use crate::manager::managererror::ManagerError;
use crate::math::curve::parametriccurve::verticalcurve::FlareModel;
use crate::profile::flareprofile::FlareProfileComputer;
use crate::profile::units;

/// 具名拉平情境：速度以節、垂直速率以呎／分、距離與高度以呎表示。
/// 自 JSON 反序列化，經 `computer()` 轉成計算用的純量組。
#[derive(Clone, Serialize, Deserialize)]
pub struct FlareScenario {
    name: String,
    approach_speed_knots: f64,
    touchdown_speed_knots: f64,
    approach_vertical_rate: f64,
    touchdown_vertical_rate: f64,
    flare_distance: f64,
    flare_height: f64,
    model: FlareModel
}

impl FlareScenario {
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn model(&self) -> FlareModel {
        self.model
    }

    pub fn computer(&self) -> FlareProfileComputer {
        FlareProfileComputer::new(
            units::knots_to_feet_per_minute(self.approach_speed_knots),
            units::knots_to_feet_per_minute(self.touchdown_speed_knots),
            self.approach_vertical_rate,
            self.touchdown_vertical_rate,
            self.flare_distance,
            self.flare_height,
        )
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<FlareScenario, ManagerError> {
        ManagerError::from_json_or_json_parse_error(json_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_and_builds_a_computer() {
        let json = serde_json::json!({
            "name": "default",
            "approach_speed_knots": 130.0,
            "touchdown_speed_knots": 120.0,
            "approach_vertical_rate": -800.0,
            "touchdown_vertical_rate": -150.0,
            "flare_distance": 1350.0,
            "flare_height": 50.0,
            "model": "RampPlateau"
        });
        let scenario = FlareScenario::from_json(json).unwrap();
        assert_eq!(scenario.name(), "default");
        assert_eq!(scenario.model(), FlareModel::RampPlateau);
        let computer = scenario.computer();
        assert!((computer.approach_speed_knots() - 130.0).abs() < 1e-9);
        assert!(computer.key_points(scenario.model()).is_some());
    }
}
