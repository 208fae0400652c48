use std::f64::consts::PI;

pub const FEET_PER_NAUTICAL_MILE: f64 = 6076.115;

pub fn knots_to_feet_per_minute(knots: f64) -> f64 {
    knots * FEET_PER_NAUTICAL_MILE / 60.0
}

pub fn feet_per_minute_to_knots(feet_per_minute: f64) -> f64 {
    feet_per_minute * 60.0 / FEET_PER_NAUTICAL_MILE
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// 下滑角（度）。下降率為負、地速為正時回傳正角度。
pub fn descent_angle_degrees(vertical_rate: f64, ground_rate: f64) -> f64 {
    radians_to_degrees((-vertical_rate / ground_rate).atan())
}
