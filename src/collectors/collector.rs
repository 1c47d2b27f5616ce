use log::debug;

use crate::client::RemoteStore;
use crate::collectors::{actuator, sensor};
use crate::models::PanelUpdate;

/// Run one polling cycle: both fetches in parallel.
pub async fn collect_panel_update(store: &dyn RemoteStore) -> PanelUpdate {
    let (moisture, actuator) = tokio::join!(
        sensor::collect_moisture(store),
        actuator::collect_actuator_state(store)
    );

    let update = PanelUpdate { moisture, actuator };
    debug!("{:?}", update);

    update
}
