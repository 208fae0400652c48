use crate::math::curve::curve::{
    Curve,
    CurveIntegration,
    CurveInversion,
    Point2D
};
use crate::math::curve::linearfunction::LinearFunction;
use crate::math::curve::parametriccurve::parametriccurve::BoundaryProblem;
use crate::math::curve::parametriccurve::verticalcurve::{
    FlareModel,
    VerticalCurve
};
use crate::profile::trajectorypoint::TrajectoryPoint;
use crate::profile::units;

// ─────────────────────────────────────────────
// FlareProfileComputer
// ─────────────────────────────────────────────
//
// 兩個獨立參數化的剖面：
//   - 側向：位置對時間恆為線性減速（封閉解）
//   - 垂直：下降率對時間由選定的曲線族擬合
//
// key_points 流程：
//   1. 由（進場地速、目標距離、接地地速）建側向線性函數
//   2. 反解總時間並夾入 [min_time, max_time]（兩端各留 TIME_GUARD，
//      避免夾到幾何邊界——貼邊會使 RampPlateau 的水平段長度退化為零）
//   3. 以夾後總時間重建側向函數，使其與總時間嚴格一致
//   4. 以 (y0, y1, 總時間, −拉平高度) 擬合垂直剖面
//   5. 取樣固定距離 + 最大可達距離 + RampPlateau 的轉折距離，
//      排序、去掉超出最大距離者、合併相近取樣（保留較大者）
//   6. 最大距離取樣直接釘在夾後邊界值上，避免域端反函數捨入
//   7. 濾掉 elapsed 超過總時間的點

/// 相近取樣距離的合併門檻（呎）。
const MERGE_DISTANCE: f64 = 100.0;

/// 可行時間窗兩端的護帶：1/600 分鐘（約 0.1 秒）。
const TIME_GUARD: f64 = 1.0 / 600.0;

/// 固定取樣距離（呎）；1312 呎 ≈ 400 公尺。
const SAMPLE_DISTANCES: [f64; 8] =
    [0.0, 500.0, 1000.0, 1312.0, 1500.0, 2000.0, 2500.0, 3000.0];

/// 六個物理純量即全部狀態；每次輸入變動整組剖面重建，無增量更新。
#[derive(Clone, Copy, Debug)]
pub struct FlareProfileComputer {
    approach_ground_rate: f64,
    touchdown_ground_rate: f64,
    approach_vertical_rate: f64,
    touchdown_vertical_rate: f64,
    flare_distance: f64,
    flare_height: f64
}

impl FlareProfileComputer {
    /// 地速與垂直速率單位為呎／分，距離與高度為呎。
    pub fn new(
        approach_ground_rate: f64,
        touchdown_ground_rate: f64,
        approach_vertical_rate: f64,
        touchdown_vertical_rate: f64,
        flare_distance: f64,
        flare_height: f64,
    ) -> FlareProfileComputer {
        FlareProfileComputer {
            approach_ground_rate,
            touchdown_ground_rate,
            approach_vertical_rate,
            touchdown_vertical_rate,
            flare_distance,
            flare_height,
        }
    }

    pub fn approach_ground_rate(&self) -> f64 {
        self.approach_ground_rate
    }

    pub fn set_approach_ground_rate(&mut self, rate: f64) {
        self.approach_ground_rate = rate;
    }

    pub fn touchdown_ground_rate(&self) -> f64 {
        self.touchdown_ground_rate
    }

    pub fn set_touchdown_ground_rate(&mut self, rate: f64) {
        self.touchdown_ground_rate = rate;
    }

    pub fn approach_vertical_rate(&self) -> f64 {
        self.approach_vertical_rate
    }

    pub fn set_approach_vertical_rate(&mut self, rate: f64) {
        self.approach_vertical_rate = rate;
    }

    pub fn touchdown_vertical_rate(&self) -> f64 {
        self.touchdown_vertical_rate
    }

    pub fn set_touchdown_vertical_rate(&mut self, rate: f64) {
        self.touchdown_vertical_rate = rate;
    }

    pub fn flare_distance(&self) -> f64 {
        self.flare_distance
    }

    pub fn set_flare_distance(&mut self, distance: f64) {
        self.flare_distance = distance;
    }

    pub fn flare_height(&self) -> f64 {
        self.flare_height
    }

    pub fn set_flare_height(&mut self, height: f64) {
        self.flare_height = height;
    }

    // 導出檢視：純 get/set 轉換，無獨立儲存

    pub fn approach_speed_knots(&self) -> f64 {
        units::feet_per_minute_to_knots(self.approach_ground_rate)
    }

    pub fn set_approach_speed_knots(&mut self, knots: f64) {
        self.approach_ground_rate = units::knots_to_feet_per_minute(knots);
    }

    pub fn touchdown_speed_knots(&self) -> f64 {
        units::feet_per_minute_to_knots(self.touchdown_ground_rate)
    }

    pub fn set_touchdown_speed_knots(&mut self, knots: f64) {
        self.touchdown_ground_rate = units::knots_to_feet_per_minute(knots);
    }

    pub fn initial_descent_angle_degrees(&self) -> f64 {
        units::descent_angle_degrees(self.approach_vertical_rate, self.approach_ground_rate)
    }

    pub fn set_initial_descent_angle_degrees(&mut self, degrees: f64) {
        self.approach_vertical_rate =
            -units::degrees_to_radians(degrees).tan() * self.approach_ground_rate;
    }

    fn feasible_time_window(&self) -> Option<(f64, f64)> {
        let h1 = -self.flare_height;
        let rate_sum = self.approach_vertical_rate + self.touchdown_vertical_rate;
        if rate_sum == 0.0 || self.touchdown_vertical_rate == 0.0 {
            return None;
        }
        let minimum = 2.0 * h1 / rate_sum + TIME_GUARD;
        let maximum = h1 / self.touchdown_vertical_rate - TIME_GUARD;
        if !minimum.is_finite() || !maximum.is_finite() || minimum > maximum {
            return None;
        }
        Some((minimum, maximum))
    }

    /// 唯一對外取樣入口。擬合失敗（側向剖面不可建、時間窗為空、
    /// 垂直擬合無解）時回傳 None。
    pub fn key_points(&self, model: FlareModel) -> Option<Vec<TrajectoryPoint>> {
        let lateral = LinearFunction::from_final_value_and_integral(
            self.approach_ground_rate,
            self.touchdown_ground_rate,
            self.flare_distance,
        )?;
        let raw_time = lateral.solve_x_from_integral(self.flare_distance)?;

        let (minimum_time, maximum_time) = self.feasible_time_window()?;
        let total_time = raw_time.clamp(minimum_time, maximum_time);

        // 夾後總時間可能與原距離不一致，以端點重建側向函數
        let lateral = LinearFunction::from_points(
            &Point2D::new(0.0, self.approach_ground_rate),
            &Point2D::new(total_time, self.touchdown_ground_rate),
        )?;
        let maximum_distance = lateral.integral(total_time);

        let problem = BoundaryProblem::new(
            self.approach_vertical_rate,
            self.touchdown_vertical_rate,
            total_time,
            -self.flare_height,
        );
        let vertical = VerticalCurve::fit(model, problem)?;

        let mut distances: Vec<f64> = SAMPLE_DISTANCES.to_vec();
        distances.push(maximum_distance);
        if let Some(transition) = vertical.ramp_transition() {
            distances.push(lateral.integral(transition));
        }
        distances.sort_by(|lhs, rhs| lhs.partial_cmp(rhs).unwrap());
        distances.retain(|&distance| distance <= maximum_distance);

        // 相鄰取樣合併：已排序，保留較大者
        let mut merged: Vec<f64> = Vec::with_capacity(distances.len());
        for distance in distances {
            match merged.last_mut() {
                Some(last) if distance - *last < MERGE_DISTANCE => *last = distance,
                _ => merged.push(distance),
            }
        }

        let mut points = Vec::with_capacity(merged.len());
        for distance in merged {
            if distance == maximum_distance {
                // 域端直接釘在夾後邊界值，避免反函數捨入誤差
                points.push(TrajectoryPoint::new(
                    total_time,
                    maximum_distance,
                    self.flare_height + vertical.integral(total_time),
                    lateral.value(total_time),
                    vertical.value(total_time),
                ));
                continue;
            }
            let elapsed = match lateral.solve_x_from_integral(distance) {
                Some(elapsed) => elapsed,
                None => continue,
            };
            points.push(TrajectoryPoint::new(
                elapsed,
                distance,
                self.flare_height + vertical.integral(elapsed),
                lateral.value(elapsed),
                vertical.value(elapsed),
            ));
        }

        // 反函數在域端附近可能過衝
        points.retain(|point| point.elapsed() <= total_time);
        Some(points)
    }
}
