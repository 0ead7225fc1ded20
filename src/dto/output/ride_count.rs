use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RideCount {
    pub count: u64,
}
