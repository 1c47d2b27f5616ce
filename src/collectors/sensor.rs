use crate::client::{RemoteStore, SENSOR_PATH};
use crate::models::sensor::SensorReading;
use log::{debug, error, warn};
use std::time::Instant;

pub async fn collect_moisture(store: &dyn RemoteStore) -> Option<f64> {
    let start = Instant::now();
    let result = match store.get(SENSOR_PATH).await {
        Ok(value) => match SensorReading::from_json(value) {
            Ok(Some(reading)) => Some(reading.moisture_percent),
            Ok(None) => {
                warn!("Sensor reading not yet defined in the store");
                None
            }
            Err(e) => {
                error!("Error parsing sensor reading: {}", e);
                None
            }
        },
        Err(e) => {
            error!("Error reading sensor: {}", e);
            None
        }
    };
    debug!("collect_moisture took: {} ms", start.elapsed().as_millis());
    result
}
