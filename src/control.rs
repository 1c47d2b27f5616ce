use log::info;

use crate::client::{RemoteStore, StoreResult, ACTUATOR_PATH};
use crate::models::ActuatorState;

/// Flip the relay flag in the store and return the value written.
///
/// The stored value goes through `ActuatorState::from_json` before it is
/// negated, so anything other than `true` counts as off and toggles to
/// `true`. A truthy non-boolean such as `"true"` or `1` therefore becomes
/// `true`, where a plain logical NOT of the raw value would give `false`.
///
/// This is a plain read followed by a write. Nothing guards the gap between
/// them, so two overlapping calls can read the same value and write the same
/// result; the last write wins. Nothing is written when the read fails.
pub async fn toggle_actuator(store: &dyn RemoteStore) -> StoreResult<ActuatorState> {
    let current = ActuatorState::from_json(&store.get(ACTUATOR_PATH).await?);
    let next = current.toggled();

    store.put(ACTUATOR_PATH, &next.to_json()).await?;

    info!("Actuator: {} -> {}", current.label(), next.label());
    Ok(next)
}
