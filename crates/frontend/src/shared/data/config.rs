use contracts::shared::config::{load_config, DashboardConfig};
use gloo_net::http::Request;

/// Served next to index.html; optional.
pub const CONFIG_URL: &str = "/config.toml";

/// Reads the deployed `config.toml`, falling back to the embedded defaults
/// when it is missing or unreadable.
pub async fn fetch_config() -> DashboardConfig {
    let contents = match fetch_text(CONFIG_URL).await {
        Ok(text) => Some(text),
        Err(e) => {
            log::info!("no deployed configuration ({}); using defaults", e);
            None
        }
    };
    load_config(contents.as_deref())
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}
