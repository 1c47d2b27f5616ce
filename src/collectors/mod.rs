pub mod actuator;
pub mod collector;
pub mod sensor;

pub use collector::collect_panel_update;
