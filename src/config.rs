//! Wave animation parameters.
//!
//! Read once when the animation is attached, either from an options object
//! (`{"waveNumber": 8, "waveSpeed": 0.5}`) or from the container's
//! `data-wave-number` / `data-wave-speed` attributes.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_WAVE_NUMBER: f64 = 12.0;
pub const DEFAULT_WAVE_SPEED: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveConfig {
    /// Phase step between neighbouring elements.
    pub wave_number: f64,
    /// Number of full cycles over the whole scroll track.
    pub wave_speed: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_number: DEFAULT_WAVE_NUMBER,
            wave_speed: DEFAULT_WAVE_SPEED,
        }
    }
}

impl WaveConfig {
    pub fn new(wave_number: f64, wave_speed: f64) -> Result<Self, ConfigError> {
        let config = Self {
            wave_number,
            wave_speed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the raw attribute values; absent attributes keep their default.
    pub fn from_attributes(
        wave_number: Option<&str>,
        wave_speed: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(
            parse_field("waveNumber", wave_number, defaults.wave_number)?,
            parse_field("waveSpeed", wave_speed, defaults.wave_speed)?,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.wave_number.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "waveNumber",
            });
        }
        if !self.wave_speed.is_finite() {
            return Err(ConfigError::NonFinite { field: "waveSpeed" });
        }
        Ok(())
    }
}

fn parse_field(field: &'static str, raw: Option<&str>, default: f64) -> Result<f64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WaveConfig::default();
        assert_eq!(config.wave_number, 12.0);
        assert_eq!(config.wave_speed, 1.0);
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = WaveConfig::from_json(r#"{"waveSpeed": 0.5}"#).unwrap();
        assert_eq!(config, WaveConfig::new(12.0, 0.5).unwrap());
        assert_eq!(WaveConfig::from_json("{}").unwrap(), WaveConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            WaveConfig::from_json(r#"{"waveNumber": "lots"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn attributes() {
        let config = WaveConfig::from_attributes(Some(" 4 "), None).unwrap();
        assert_eq!(config, WaveConfig::new(4.0, 1.0).unwrap());
        assert_eq!(
            WaveConfig::from_attributes(Some(""), None).unwrap(),
            WaveConfig::default()
        );

        let err = WaveConfig::from_attributes(None, Some("fast")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { field: "waveSpeed", .. }));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            WaveConfig::from_attributes(Some("NaN"), None),
            Err(ConfigError::NonFinite { field: "waveNumber" })
        ));
        assert!(WaveConfig::new(1.0, f64::INFINITY).is_err());
    }
}
