use log::error;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::client::RemoteStore;
use crate::collectors::{self, actuator};
use crate::config::AppConfig;
use crate::control;
use crate::dashboard;
use crate::models::{PanelState, PanelUpdate};
use crate::renderer::fonts::Fonts;

/// The display/control client: owns the shown state and presents it after
/// every update.
///
/// Fetch handlers merge into `PanelState`; presentation reads only from it.
/// The terminal panel is printed whenever its text changes, and a PNG
/// snapshot is written alongside when enabled in `[DASHBOARD]`. Snapshots
/// are drawn on the blocking pool, so a failing one never takes down the
/// caller.
pub struct Panel {
    store: Arc<dyn RemoteStore>,
    config: Arc<AppConfig>,
    fonts: Option<Arc<Fonts>>,
    state: RwLock<PanelState>,
    last_render: Mutex<String>,
}

impl Panel {
    pub fn new(store: Arc<dyn RemoteStore>, config: AppConfig) -> Self {
        let fonts = if !config.dashboard.save_to_file {
            None
        } else if config.dashboard.width == 0 || config.dashboard.height == 0 {
            error!(
                "Panel snapshots disabled: {}x{} has no area",
                config.dashboard.width, config.dashboard.height
            );
            None
        } else {
            match Fonts::load(&config.dashboard.font) {
                Ok(fonts) => Some(Arc::new(fonts)),
                Err(e) => {
                    error!("Panel snapshots disabled: {:#}", e);
                    None
                }
            }
        };

        Self {
            store,
            config: Arc::new(config),
            fonts,
            state: RwLock::new(PanelState::default()),
            last_render: Mutex::new(String::new()),
        }
    }

    pub async fn state(&self) -> PanelState {
        self.state.read().await.clone()
    }

    pub async fn render(&self) -> String {
        dashboard::create_text(&self.config, &*self.state.read().await)
    }

    /// One polling cycle: update both moisture and actuator.
    pub async fn refresh(&self) {
        let update = collectors::collect_panel_update(&*self.store).await;
        self.apply(update).await;
    }

    pub async fn refresh_actuator(&self) {
        let actuator = actuator::collect_actuator_state(&*self.store).await;
        self.apply(PanelUpdate {
            moisture: None,
            actuator,
        })
        .await;
    }

    /// Flip the relay, then show the value read back from the store.
    pub async fn toggle(&self) {
        match control::toggle_actuator(&*self.store).await {
            Ok(_) => self.refresh_actuator().await,
            Err(e) => error!("Error toggling actuator: {}", e),
        }
    }

    /// Print the panel even if nothing changed.
    pub async fn show(&self) {
        self.present(true).await;
    }

    async fn apply(&self, update: PanelUpdate) {
        self.state.write().await.apply(&update);
        self.present(false).await;
    }

    async fn present(&self, force: bool) {
        let state = {
            let mut last_render = self.last_render.lock().await;
            // Read under the render lock so prints follow state order
            let state = self.state().await;
            let text = dashboard::create_text(&self.config, &state);

            if !force && *last_render == text {
                return;
            }
            println!("{}\n", text);
            *last_render = text;
            state
        };

        if let Some(fonts) = &self.fonts {
            let config = self.config.clone();
            let fonts = fonts.clone();
            let snapshot = tokio::task::spawn_blocking(move || {
                let image = dashboard::create_image(&config, &state, &fonts);
                dashboard::save_image(&config, &image)
            });

            match snapshot.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("{:#}", e),
                Err(e) => error!("Panel snapshot failed: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoryStore, ACTUATOR_PATH, SENSOR_PATH};
    use crate::models::ActuatorState;
    use crate::poller;
    use serde_json::json;
    use std::path::Path;
    use std::time::Duration;

    fn system_font() -> Option<&'static str> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/Library/Fonts/Arial.ttf",
        ]
        .into_iter()
        .find(|path| Path::new(path).exists())
    }

    fn snapshot_config(font: &str, file: &Path, width: u32) -> AppConfig {
        let mut config = AppConfig::default();
        config.dashboard.save_to_file = true;
        config.dashboard.font = font.to_string();
        config.dashboard.file = file.display().to_string();
        config.dashboard.width = width;
        config
    }

    async fn panel_with(moisture: serde_json::Value, estado: serde_json::Value) -> (Arc<MemoryStore>, Panel) {
        let store = Arc::new(MemoryStore::new());
        store.set(SENSOR_PATH, moisture).await;
        store.set(ACTUATOR_PATH, estado).await;
        let panel = Panel::new(store.clone(), AppConfig::default());
        (store, panel)
    }

    #[tokio::test]
    async fn test_refresh_updates_state() {
        let (_store, panel) = panel_with(json!({"umidade_percentual": 42}), json!(true)).await;

        panel.refresh().await;

        let state = panel.state().await;
        assert_eq!(state.moisture, Some(42.0));
        assert_eq!(state.actuator, Some(ActuatorState::Active));

        let text = panel.render().await;
        assert!(text.contains("42%"));
        assert!(text.contains("Ativo"));
    }

    #[tokio::test]
    async fn test_refresh_actuator_leaves_moisture_alone() {
        let (store, panel) = panel_with(json!({"umidade_percentual": 42}), json!(false)).await;
        panel.refresh().await;

        store.set(SENSOR_PATH, json!({"umidade_percentual": 10})).await;
        store.set(ACTUATOR_PATH, json!(true)).await;
        panel.refresh_actuator().await;

        let state = panel.state().await;
        assert_eq!(state.moisture, Some(42.0));
        assert_eq!(state.actuator, Some(ActuatorState::Active));
    }

    #[tokio::test]
    async fn test_snapshot_disabled_without_font() {
        let mut config = AppConfig::default();
        config.dashboard.save_to_file = true;
        config.dashboard.font = "/nonexistent/font.ttf".to_string();

        let panel = Panel::new(Arc::new(MemoryStore::new()), config);
        assert!(panel.fonts.is_none());

        // Presenting without fonts must still work
        panel.refresh().await;
        panel.show().await;
    }

    #[tokio::test]
    async fn test_zero_size_snapshot_is_disabled() {
        let mut config = AppConfig::default();
        config.dashboard.save_to_file = true;
        config.dashboard.width = 0;

        let panel = Panel::new(Arc::new(MemoryStore::new()), config);
        assert!(panel.fonts.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_written_with_font() {
        let Some(font) = system_font() else {
            eprintln!("no system TrueType font found, skipping snapshot rendering");
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("panel.png");

        let store = Arc::new(MemoryStore::new());
        store.set(SENSOR_PATH, json!({"umidade_percentual": 42})).await;
        store.set(ACTUATOR_PATH, json!(true)).await;
        let panel = Panel::new(store, snapshot_config(font, &file, 420));
        assert!(panel.fonts.is_some());

        panel.refresh().await;

        let image = image::open(&file).unwrap();
        assert_eq!(image.width(), 420);
        assert_eq!(image.height(), 250);
    }

    #[tokio::test]
    async fn test_narrow_snapshot_keeps_polling() {
        let font = system_font().unwrap_or("/nonexistent/font.ttf");
        let dir = tempfile::tempdir().unwrap();

        for width in [1, 5, 10, 11] {
            let file = dir.path().join(format!("panel-{}.png", width));
            let store = Arc::new(MemoryStore::new());
            store.set(SENSOR_PATH, json!({"umidade_percentual": 42})).await;
            let panel = Arc::new(Panel::new(store.clone(), snapshot_config(font, &file, width)));

            let handle = poller::spawn(panel.clone(), Duration::from_millis(20));
            tokio::time::sleep(Duration::from_millis(100)).await;

            store.set(SENSOR_PATH, json!({"umidade_percentual": 43})).await;
            tokio::time::sleep(Duration::from_millis(200)).await;

            assert!(handle.is_running(), "poller died at width {}", width);
            assert_eq!(panel.state().await.moisture, Some(43.0), "width {}", width);
            handle.stop().await;
        }
    }

    #[tokio::test]
    async fn test_printed_panel_follows_latest_state() {
        let (store, panel) = panel_with(json!({"umidade_percentual": 42}), json!(false)).await;
        store.set_latency(Duration::from_millis(20));

        tokio::join!(panel.refresh(), panel.toggle(), panel.refresh());
        panel.refresh().await;

        assert_eq!(*panel.last_render.lock().await, panel.render().await);
    }
}
