use serde::Deserialize;
use serde_json::Value;

/// Document stored at the sensor node by the field device.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorReading {
    #[serde(rename = "umidade_percentual")]
    pub moisture_percent: f64,
}

impl SensorReading {
    /// `Ok(None)` when the node has never been written.
    pub fn from_json(value: Value) -> Result<Option<Self>, serde_json::Error> {
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value).map(Some)
    }
}

pub fn moisture_display(percent: f64) -> String {
    format!("{}%", percent)
}
