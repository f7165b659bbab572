//! Build-time configuration for the API origin, logging and the OTP resend
//! window, with an optional runtime override. The runtime config is read from
//! `window.EDUREACH_CONFIG` (if present) so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

use tracing::level_filters::LevelFilter;

/// API origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://e-sdg.onrender.com";
/// Seconds before a new OTP may be requested.
pub const DEFAULT_OTP_RESEND_SECONDS: u32 = 120;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub otp_resend_seconds: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("EDUREACH_API_BASE_URL"),
            option_env!("EDUREACH_LOG_LEVEL"),
            option_env!("EDUREACH_OTP_RESEND_SECONDS"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(
        api_base_url: Option<&str>,
        log_level: Option<&str>,
        otp_resend_seconds: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            log_level: log_level.and_then(parse_level).unwrap_or(LevelFilter::INFO),
            otp_resend_seconds: otp_resend_seconds
                .and_then(parse_seconds)
                .unwrap_or(DEFAULT_OTP_RESEND_SECONDS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env(None, None, None)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
    otp_resend_seconds: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }
    if let Some(seconds) = runtime.otp_resend_seconds.as_deref().and_then(parse_seconds) {
        config.otp_resend_seconds = seconds;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("EDUREACH_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
        otp_resend_seconds: read_runtime_value(&object, "otp_resend_seconds"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted for `otp_resend_seconds`.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
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

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

fn parse_seconds(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|seconds| *seconds > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, DEFAULT_OTP_RESEND_SECONDS, RuntimeConfig,
        apply_runtime_overrides, normalize_runtime_value,
    };
    use tracing::level_filters::LevelFilter;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.edureach.dev "),
            Some("https://api.edureach.dev".to_string())
        );
    }

    #[test]
    fn defaults_apply_without_build_env() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.otp_resend_seconds, DEFAULT_OTP_RESEND_SECONDS);
    }

    #[test]
    fn build_env_values_are_parsed() {
        let config =
            AppConfig::from_build_env(Some("http://localhost:8080"), Some("debug"), Some("30"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.otp_resend_seconds, 30);
    }

    #[test]
    fn invalid_build_env_values_fall_back() {
        let config = AppConfig::from_build_env(Some("  "), Some("chatty"), Some("0"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.otp_resend_seconds, DEFAULT_OTP_RESEND_SECONDS);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
            otp_resend_seconds: Some("soon".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::INFO);
        assert_eq!(config.otp_resend_seconds, DEFAULT_OTP_RESEND_SECONDS);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            log_level: normalize_runtime_value("warn"),
            otp_resend_seconds: normalize_runtime_value("60"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, LevelFilter::WARN);
        assert_eq!(config.otp_resend_seconds, 60);
    }
}
