use crate::config::AppConfig;
use crate::models::sensor::moisture_display;
use crate::models::{ActuatorState, PanelState};
use crate::renderer::colours::Colours;
use crate::renderer::drawing;
use crate::renderer::fonts::Fonts;
use image::RgbaImage;

pub struct RenderContext<'a> {
    pub config: &'a AppConfig,
    pub state: &'a PanelState,
    pub fonts: &'a Fonts,
    pub image: &'a mut RgbaImage,
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

pub fn render_header(ctx: &mut RenderContext) {
    let colours = Colours::default();

    drawing::text(
        ctx.image,
        colours.header,
        (ctx.x + 5) as i32,
        ctx.y as i32,
        &ctx.fonts.title,
        "IRRIGAÇÃO",
    );
}

pub fn render_moisture(ctx: &mut RenderContext) {
    let colours = Colours::default();
    let mut y_pos = ctx.y;

    let (text, colour, percentage) = match ctx.state.moisture {
        Some(moisture) if moisture < ctx.config.panel.dry_threshold => (
            format!("Umidade {} (seco)", moisture_display(moisture)),
            colours.dry,
            moisture as f32 / 100.0,
        ),
        Some(moisture) => (
            format!("Umidade {}", moisture_display(moisture)),
            colours.moisture,
            moisture as f32 / 100.0,
        ),
        None => ("Umidade --%".to_string(), colours.unknown, 0.0),
    };

    drawing::text(
        ctx.image,
        colours.text,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &text,
    );
    y_pos += 28;

    let bar_width = ctx.width.saturating_sub(10);
    if bar_width > 0 {
        drawing::progress_bar(
            ctx.image,
            (ctx.x + 5) as i32,
            y_pos as i32,
            bar_width,
            20,
            percentage,
            colour,
        );
    }
}

pub fn render_actuator(ctx: &mut RenderContext) {
    let colours = Colours::default();
    let mut y_pos = ctx.y;

    let (label, colour, lit) = match ctx.state.actuator {
        Some(ActuatorState::Active) => (ActuatorState::Active.label(), colours.active, true),
        Some(ActuatorState::Inactive) => {
            (ActuatorState::Inactive.label(), colours.inactive, false)
        }
        None => ("--", colours.unknown, false),
    };
    let button = ctx
        .state
        .actuator
        .unwrap_or(ActuatorState::Inactive)
        .button_text();

    drawing::indicator(ctx.image, (ctx.x + 15) as i32, (y_pos + 12) as i32, 9, colour, lit);
    drawing::text(
        ctx.image,
        colour,
        (ctx.x + 35) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &format!("Irrigador {}", label),
    );
    y_pos += 32;

    drawing::text(
        ctx.image,
        colours.text,
        (ctx.x + 5) as i32,
        y_pos as i32,
        &ctx.fonts.regular,
        &format!("[ {} ]", button),
    );
}

pub fn render_footer(ctx: &mut RenderContext) {
    let colours = Colours::default();

    let updated = ctx
        .state
        .updated_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    drawing::text(
        ctx.image,
        colours.inactive,
        (ctx.x + 5) as i32,
        ctx.y as i32,
        &ctx.fonts.small,
        &format!("Atualizado {}", updated),
    );
}
