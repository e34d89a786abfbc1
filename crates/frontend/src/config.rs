//! Frontend configuration.
//!
//! Defaults are embedded as TOML; the base URL of the inference API can be
//! overridden at build time with `NLP_API_BASE_URL`.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    pub max_length: SliderConfig,
    pub temperature: TemperatureConfig,
}

/// Integer range control (min/max/step/default)
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl SliderConfig {
    /// Converts the raw `value` of a range input into a length.
    ///
    /// Unparseable input yields `default`, parsed values are clamped to `min..=max`.
    pub fn parse(&self, raw: &str) -> u32 {
        raw.trim()
            .parse::<u32>()
            .map(|value| value.clamp(self.min, self.max))
            .unwrap_or(self.default)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TemperatureConfig {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl TemperatureConfig {
    pub fn parse(&self, raw: &str) -> f32 {
        match raw.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => value.clamp(self.min, self.max),
            _ => self.default,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:5000"

[generation.max_length]
min = 10
max = 500
step = 10
default = 50

[generation.temperature]
min = 0.1
max = 1.5
step = 0.1
default = 0.7
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
            },
            generation: GenerationConfig {
                max_length: SliderConfig {
                    min: 10,
                    max: 500,
                    step: 10,
                    default: 50,
                },
                temperature: TemperatureConfig {
                    min: 0.1,
                    max: 1.5,
                    step: 0.1,
                    default: 0.7,
                },
            },
        }
    }
}

/// Load the embedded configuration and apply build-time overrides
pub fn load_config() -> Result<Config, toml::de::Error> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(apply_base_url_override(
        config,
        option_env!("NLP_API_BASE_URL"),
    ))
}

fn apply_base_url_override(mut config: Config, base_url: Option<&str>) -> Config {
    if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
        log::debug!("API base URL overridden at build time: {}", url);
        config.api.base_url = url.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_base_url_override() {
        let config = apply_base_url_override(Config::default(), Some(" http://10.0.0.2:8080 "));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8080");

        let config = apply_base_url_override(Config::default(), Some("   "));
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_slider_parse() {
        let slider = Config::default().generation.max_length;
        assert_eq!(slider.parse("150"), 150);
        assert_eq!(slider.parse("9999"), 500);
        assert_eq!(slider.parse("0"), 10);
        assert_eq!(slider.parse("abc"), 50);
        assert_eq!(slider.parse(""), 50);
    }

    #[test]
    fn test_temperature_parse() {
        let temperature = Config::default().generation.temperature;
        assert_eq!(temperature.parse("1.2"), 1.2);
        assert_eq!(temperature.parse("3"), 1.5);
        assert_eq!(temperature.parse("NaN"), 0.7);
        assert_eq!(temperature.parse("warm"), 0.7);
    }
}
