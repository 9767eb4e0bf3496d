use super::pages::{is_known_page, DEFAULT_PAGE};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string of the application URL: `?active=<page key>`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    active: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page shown in the center zone
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    /// Effective configuration; the selection policy may change from Settings
    pub config: RwSignal<DashboardConfig>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
            config: RwSignal::new(config),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = query.active {
            self.open_page(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string = serde_qs::to_string(&PageQuery {
                active: Some(active_key),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Switches the center zone to `key`; unknown keys are ignored.
    pub fn open_page(&self, key: &str) {
        if !is_known_page(key) {
            log::warn!("open_page: unknown page '{}'", key);
            return;
        }
        log::debug!("open_page: '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
