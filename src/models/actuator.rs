use serde_json::Value;

/// Relay flag as shown on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorState {
    Active,
    Inactive,
}

impl ActuatorState {
    /// The only place the untyped wire value becomes a flag.
    ///
    /// Exactly the JSON boolean `true` is `Active`. Everything else, including
    /// `null`, `0`, `"true"` and objects, is `Inactive`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(true) => ActuatorState::Active,
            _ => ActuatorState::Inactive,
        }
    }

    pub fn to_json(self) -> Value {
        Value::Bool(self.is_active())
    }

    pub fn is_active(self) -> bool {
        self == ActuatorState::Active
    }

    pub fn toggled(self) -> Self {
        match self {
            ActuatorState::Active => ActuatorState::Inactive,
            ActuatorState::Inactive => ActuatorState::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActuatorState::Active => "Ativo",
            ActuatorState::Inactive => "Inativo",
        }
    }

    /// Caption of the control that flips the relay from this state.
    pub fn button_text(self) -> &'static str {
        match self {
            ActuatorState::Active => "Parar Irrigação",
            ActuatorState::Inactive => "Iniciar Irrigação",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_true_is_active() {
        assert_eq!(ActuatorState::from_json(&json!(true)), ActuatorState::Active);

        for value in [
            json!(false),
            Value::Null,
            json!(0),
            json!(1),
            json!("true"),
            json!({"estado": true}),
            json!([true]),
        ] {
            assert_eq!(
                ActuatorState::from_json(&value),
                ActuatorState::Inactive,
                "{value} should render inactive"
            );
        }
    }

    #[test]
    fn test_toggle_and_wire_value() {
        assert_eq!(ActuatorState::Inactive.toggled(), ActuatorState::Active);
        assert_eq!(ActuatorState::Active.toggled(), ActuatorState::Inactive);
        assert_eq!(ActuatorState::Active.to_json(), json!(true));
        assert_eq!(ActuatorState::Inactive.to_json(), json!(false));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActuatorState::Active.label(), "Ativo");
        assert_eq!(ActuatorState::Active.button_text(), "Parar Irrigação");
        assert_eq!(ActuatorState::Inactive.label(), "Inativo");
        assert_eq!(ActuatorState::Inactive.button_text(), "Iniciar Irrigação");
    }
}
