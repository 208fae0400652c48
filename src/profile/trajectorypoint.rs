use serde::Serialize;

/// 取樣點：同一 elapsed 下兩個剖面的投影，唯讀、每次取樣重新產生。
///
/// height 為剩餘拉平高度（flare height 加上已下降的積分值，
/// 後者為負），供顯示層直接繪製。
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TrajectoryPoint {
    elapsed: f64,
    distance: f64,
    height: f64,
    ground_rate: f64,
    vertical_rate: f64
}

impl TrajectoryPoint {
    pub fn new(
        elapsed: f64,
        distance: f64,
        height: f64,
        ground_rate: f64,
        vertical_rate: f64,
    ) -> TrajectoryPoint {
        TrajectoryPoint { elapsed, distance, height, ground_rate, vertical_rate }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ground_rate(&self) -> f64 {
        self.ground_rate
    }

    pub fn vertical_rate(&self) -> f64 {
        self.vertical_rate
    }
}
