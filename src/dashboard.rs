use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};

use crate::config::AppConfig;
use crate::models::sensor::moisture_display;
use crate::models::{ActuatorState, PanelState};
use crate::renderer::colours::Colours;
use crate::renderer::fonts::Fonts;
use crate::renderer::{drawing, widgets};

// Render the panel as terminal text
pub fn create_text(config: &AppConfig, state: &PanelState) -> String {
    let moisture = match state.moisture {
        Some(m) if m < config.panel.dry_threshold => format!("{} (seco)", moisture_display(m)),
        Some(m) => moisture_display(m),
        None => "--%".to_string(),
    };

    let (marker, label) = match state.actuator {
        Some(ActuatorState::Active) => ("●", ActuatorState::Active.label()),
        Some(ActuatorState::Inactive) => ("○", ActuatorState::Inactive.label()),
        None => ("○", "--"),
    };

    let button = match state.actuator {
        Some(ActuatorState::Active) => format!(">> {} <<", ActuatorState::Active.button_text()),
        other => format!("[ {} ]", other.unwrap_or(ActuatorState::Inactive).button_text()),
    };

    let updated = state
        .updated_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    format!(
        "Umidade:    {}\nIrrigador:  {} {}\n            {}\nAtualizado: {}",
        moisture, marker, label, button, updated
    )
}

// Create a snapshot image of the panel
pub fn create_image(config: &AppConfig, state: &PanelState, fonts: &Fonts) -> DynamicImage {
    let width = config.dashboard.width;
    let height = config.dashboard.height;

    let mut image = RgbaImage::new(width, height);
    drawing::fill(&mut image, Colours::default().background);

    let y_header = 0u32;
    let y_separator = 34u32;
    let y_moisture = y_separator + 10;
    let y_actuator = y_moisture + 66;
    let y_footer = height.saturating_sub(28);

    let mut header_ctx = widgets::RenderContext {
        config,
        state,
        fonts,
        image: &mut image,
        x: 0,
        y: y_header,
        width,
    };
    widgets::render_header(&mut header_ctx);

    drawing::horizonal_line(&mut image, 0, y_separator, width);

    let mut moisture_ctx = widgets::RenderContext {
        config,
        state,
        fonts,
        image: &mut image,
        x: 0,
        y: y_moisture,
        width,
    };
    widgets::render_moisture(&mut moisture_ctx);

    let mut actuator_ctx = widgets::RenderContext {
        config,
        state,
        fonts,
        image: &mut image,
        x: 0,
        y: y_actuator,
        width,
    };
    widgets::render_actuator(&mut actuator_ctx);

    drawing::horizonal_line(&mut image, 0, y_footer.saturating_sub(4), width);

    let mut footer_ctx = widgets::RenderContext {
        config,
        state,
        fonts,
        image: &mut image,
        x: 0,
        y: y_footer,
        width,
    };
    widgets::render_footer(&mut footer_ctx);

    DynamicImage::ImageRgba8(image)
}

pub fn save_image(config: &AppConfig, image: &DynamicImage) -> Result<()> {
    let target_file = &config.dashboard.file;

    image
        .save(target_file)
        .context(format!("Failed to save panel snapshot to {}", target_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PanelUpdate;

    fn state_with(moisture: Option<f64>, actuator: Option<ActuatorState>) -> PanelState {
        let mut state = PanelState::default();
        state.apply(&PanelUpdate { moisture, actuator });
        state
    }

    #[test]
    fn test_initial_panel() {
        let text = create_text(&AppConfig::default(), &PanelState::default());
        assert!(text.contains("Umidade:    --%"));
        assert!(text.contains("Irrigador:  ○ --"));
        assert!(text.contains("[ Iniciar Irrigação ]"));
        assert!(text.contains("Atualizado: --:--:--"));
    }

    #[test]
    fn test_active_panel() {
        let state = state_with(Some(42.0), Some(ActuatorState::Active));
        let text = create_text(&AppConfig::default(), &state);

        assert!(text.contains("Umidade:    42%"));
        assert!(text.contains("● Ativo"));
        assert!(text.contains(">> Parar Irrigação <<"));
        assert!(!text.contains("--:--:--"));
    }

    #[test]
    fn test_inactive_panel() {
        let state = state_with(Some(75.5), Some(ActuatorState::Inactive));
        let text = create_text(&AppConfig::default(), &state);

        assert!(text.contains("Umidade:    75.5%"));
        assert!(!text.contains("seco"));
        assert!(text.contains("○ Inativo"));
        assert!(text.contains("[ Iniciar Irrigação ]"));
    }

    #[test]
    fn test_dry_hint() {
        let config = AppConfig::default();
        let state = state_with(Some(39.9), None);
        assert!(create_text(&config, &state).contains("39.9% (seco)"));

        // The threshold itself is not dry
        let state = state_with(Some(40.0), None);
        assert!(!create_text(&config, &state).contains("seco"));
    }
}
