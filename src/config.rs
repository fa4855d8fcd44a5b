use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum score a gesture needs to be reported, on the 0-10 scale.
pub const DEFAULT_THRESHOLD: f32 = 8.0;

/// Score removed for every constrained finger whose curl (or direction) does
/// not match the description.
pub const DEFAULT_MISMATCH_PENALTY: f32 = 3.0;

/// Joint angle limits (degrees) separating the three curl levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurlThresholds {
    /// Angles strictly above this are `NoCurl`.
    pub no_curl_start: f32,
    /// Angles strictly above this (and not above `no_curl_start`) are `HalfCurl`.
    pub half_curl_start: f32,
}

impl Default for CurlThresholds {
    fn default() -> Self {
        Self {
            no_curl_start: 130.0,
            half_curl_start: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub threshold: f32,
    pub mismatch_penalty: f32,
    pub curl: CurlThresholds,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
            curl: CurlThresholds::default(),
        }
    }
}

impl RecognizerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=10.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!(
                "threshold must lie in 0..=10, got {}",
                self.threshold
            )));
        }

        if !self.mismatch_penalty.is_finite() || self.mismatch_penalty < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "mismatch_penalty must be non-negative, got {}",
                self.mismatch_penalty
            )));
        }

        let CurlThresholds {
            no_curl_start,
            half_curl_start,
        } = self.curl;
        if !(half_curl_start > 0.0 && half_curl_start < no_curl_start && no_curl_start < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "curl limits must satisfy 0 < half_curl_start < no_curl_start < 180, got {} and {}",
                half_curl_start, no_curl_start
            )));
        }

        Ok(())
    }
}
