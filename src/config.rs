//! Codec defaults and a serializable configuration.
//!
//! The process-wide defaults are 12 characters of base32, the usual
//! geohash precision (cells of roughly 4 cm). A [`CodecConfig`] overrides
//! them per consumer and can be loaded from JSON, or TOML with the `toml`
//! feature.

use crate::codec::Encoding;
use crate::error::{GeohashError, Result};
use crate::geohash::Geohash;
use flexgeohash_types::{LatLng, Region};
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Default number of characters.
pub const DEFAULT_PRECISION: usize = 12;

/// Precision and encoding applied when none is given per call.
///
/// # Example
///
/// ```rust
/// use flexgeohash::{CodecConfig, Coordinate, Encoding};
///
/// let config = CodecConfig::default();
/// assert_eq!(config.encode(&Coordinate::new(35.681, 139.767))?, "xn76urx0zhkz");
///
/// let json = r#"{ "precision": 6, "encoding": "base16" }"#;
/// let config = CodecConfig::from_json(json).unwrap();
/// assert_eq!(config.encoding, Encoding::Base16);
/// # Ok::<(), flexgeohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Characters per geohash (1 to `encoding.max_precision()`)
    #[serde(default = "CodecConfig::default_precision")]
    pub precision: usize,

    /// Symbol width of the text form
    #[serde(default)]
    pub encoding: Encoding,
}

impl CodecConfig {
    const fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    pub fn new(precision: usize, encoding: Encoding) -> Result<Self> {
        let config = Self {
            precision,
            encoding,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_precision(mut self, precision: usize) -> Result<Self> {
        self.encoding.total_bits(precision)?;
        if precision == 1 {
            log::warn!(
                "Geohash precision of 1 yields cells spanning tens of degrees; \
                check that this is intended"
            );
        }
        self.precision = precision;
        Ok(self)
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Result<Self> {
        encoding.total_bits(self.precision)?;
        self.encoding = encoding;
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.encoding
            .total_bits(self.precision)
            .map(|_| ())
            .map_err(|e| GeohashError::InvalidConfig(e.to_string()))
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: CodecConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        log::debug!(
            "Loaded codec config: precision={}, encoding={}",
            config.precision,
            config.encoding
        );
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: CodecConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        log::debug!(
            "Loaded codec config: precision={}, encoding={}",
            config.precision,
            config.encoding
        );
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Quantize a coordinate at the configured precision and encoding.
    pub fn geohash(&self, coordinate: &impl LatLng) -> Result<Geohash> {
        Geohash::new(coordinate, self.precision, self.encoding)
    }

    pub fn encode(&self, coordinate: &impl LatLng) -> Result<String> {
        self.geohash(coordinate).map(|g| g.hash())
    }

    /// Parse text in the configured encoding. The precision comes from the
    /// text, not from the configuration.
    pub fn parse(&self, text: &str) -> Result<Geohash> {
        Geohash::parse(text, self.encoding)
    }

    pub fn decode(&self, text: &str) -> Result<Region> {
        self.parse(text).map(|g| g.region())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            encoding: Encoding::default(),
        }
    }
}
