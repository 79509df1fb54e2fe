//! Build-time configuration for the backend base URL and the admin account,
//! with an optional runtime override. The runtime config is read from
//! `window.CAMP_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not
//! store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub admin_id: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides.
    pub fn load() -> Self {
        let backend_url = option_env!("CAMP_BACKEND_URL").unwrap_or("http://localhost:8000");
        let admin_id = option_env!("CAMP_ADMIN_ID").unwrap_or("admin@example.com");

        let mut config = Self {
            backend_url: backend_url.to_string(),
            admin_id: admin_id.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    backend_url: Option<String>,
    admin_id: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.backend_url {
        config.backend_url = value;
    }
    if let Some(value) = runtime.admin_id {
        config.admin_id = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CAMP_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        backend_url: read_runtime_value(&object, "backend_url"),
        admin_id: read_runtime_value(&object, "admin_id"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://auth.camp.example "),
            Some("http://auth.camp.example".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            backend_url: "http://localhost:8000".to_string(),
            admin_id: "admin@example.com".to_string(),
        };
        let runtime = RuntimeConfig {
            backend_url: normalize_runtime_value(""),
            admin_id: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.admin_id, "admin@example.com");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            backend_url: "http://localhost:8000".to_string(),
            admin_id: "admin@example.com".to_string(),
        };
        let runtime = RuntimeConfig {
            backend_url: normalize_runtime_value("https://auth.camp.example"),
            admin_id: normalize_runtime_value("directrice@camp.example"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.backend_url, "https://auth.camp.example");
        assert_eq!(config.admin_id, "directrice@camp.example");
    }
}
