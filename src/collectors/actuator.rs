use crate::client::{RemoteStore, ACTUATOR_PATH};
use crate::models::ActuatorState;
use log::{debug, error};
use std::time::Instant;

pub async fn collect_actuator_state(store: &dyn RemoteStore) -> Option<ActuatorState> {
    let start = Instant::now();
    let result = match store.get(ACTUATOR_PATH).await {
        Ok(value) => Some(ActuatorState::from_json(&value)),
        Err(e) => {
            error!("Error reading actuator: {}", e);
            None
        }
    };
    debug!(
        "collect_actuator_state took: {} ms",
        start.elapsed().as_millis()
    );
    result
}
