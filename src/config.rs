//! Backend Configuration
//!
//! The board talks to one of two REST dialects; which one, and where, is
//! injected by the host page as a JSON global. Missing or malformed config
//! falls back to defaults so the app still mounts.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the window global holding the injected config
pub const CONFIG_GLOBAL: &str = "__PINWALL_CONFIG";

/// Which REST dialect the record store speaks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "dialect", rename_all = "kebab-case")]
pub enum Backend {
    /// Generic module-records API: records under `{base}/{module}/records`
    ModuleRecords { module: String },
    /// PostgREST-style table API: rows under `{base}/{table}`
    #[serde(rename_all = "camelCase")]
    Postgrest { table: String, api_key: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub base_url: String,
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub backend: Backend,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            token: String::new(),
            backend: Backend::ModuleRecords {
                module: "sticky_notes".to_string(),
            },
        }
    }
}

impl BoardConfig {
    /// Read the injected config global, falling back to defaults.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[board] ignoring invalid {CONFIG_GLOBAL}: {err}").into(),
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_records_config_parses() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"baseUrl": "https://records.example/api/v1", "token": "secret",
                "dialect": "module-records", "module": "sticky_notes"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://records.example/api/v1");
        assert_eq!(config.token, "secret");
        assert_eq!(
            config.backend,
            Backend::ModuleRecords {
                module: "sticky_notes".into()
            }
        );
    }

    #[test]
    fn postgrest_config_parses() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"baseUrl": "https://db.example/rest/v1", "token": "jwt",
                "dialect": "postgrest", "table": "notes", "apiKey": "anon"}"#,
        )
        .unwrap();
        assert_eq!(
            config.backend,
            Backend::Postgrest {
                table: "notes".into(),
                api_key: "anon".into()
            }
        );
    }

    #[test]
    fn token_is_optional() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"baseUrl": "https://records.example", "dialect": "module-records", "module": "m"}"#,
        )
        .unwrap();
        assert!(config.token.is_empty());
    }
}
