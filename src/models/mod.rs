use chrono::{DateTime, Local};

pub mod actuator;
pub mod sensor;

pub use actuator::ActuatorState;

/// What the panel currently shows. `None` means the value was never fetched
/// successfully.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub moisture: Option<f64>,
    pub actuator: Option<ActuatorState>,
    pub updated_at: Option<DateTime<Local>>,
}

/// Outcome of one polling cycle. A failed fetch leaves its field `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelUpdate {
    pub moisture: Option<f64>,
    pub actuator: Option<ActuatorState>,
}

impl PanelState {
    /// Merge fetched values, keeping the previous ones where the fetch failed.
    /// Returns whether anything changed.
    pub fn apply(&mut self, update: &PanelUpdate) -> bool {
        let mut changed = false;

        if let Some(moisture) = update.moisture {
            if self.moisture != Some(moisture) {
                self.moisture = Some(moisture);
                changed = true;
            }
        }

        if let Some(actuator) = update.actuator {
            if self.actuator != Some(actuator) {
                self.actuator = Some(actuator);
                changed = true;
            }
        }

        if changed {
            self.updated_at = Some(Local::now());
        }
        changed
    }
}
