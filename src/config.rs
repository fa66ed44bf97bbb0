//! Encoder and simulation configuration.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use rotenc::config::{Config, EncoderConfig};
//! use rotenc::EncoderVariant;
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.encoder.variant, EncoderVariant::FullStep);
//!
//! // Or customize
//! let config = Config::default().with_encoder(
//!     EncoderConfig::default()
//!         .with_name("volume")
//!         .with_variant(EncoderVariant::HalfStep)
//!         .with_invert_direction(true),
//! );
//! assert_eq!(config.encoder.name.as_str(), "volume");
//! ```

use heapless::String as HString;

use crate::encoder::{Encoder, EncoderVariant};

/// Maximum length for encoder names.
pub const MAX_NAME: usize = 32;

/// Type alias for encoder names.
pub type NameString = HString<MAX_NAME>;

/// Create a NameString from a &str, truncating if too long
pub fn name_string(s: &str) -> NameString {
    let mut hs = NameString::new();
    for c in s.chars() {
        if hs.push(c).is_err() {
            break;
        }
    }
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Encoder hardware and wiring
    pub encoder: EncoderConfig,
    /// Terminal simulation settings
    pub simulation: SimulationConfig,
}

impl Config {
    /// Set encoder configuration
    pub fn with_encoder(mut self, encoder: EncoderConfig) -> Self {
        self.encoder = encoder;
        self
    }

    /// Set simulation configuration
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotenc::{Config, EncoderVariant};
    ///
    /// let config = Config::from_json(r#"{ "encoder": { "variant": "tristate" } }"#).unwrap();
    /// assert_eq!(config.encoder.variant, EncoderVariant::Tristate);
    /// assert!(config.simulation.show_state);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}

// ============================================================================
// Encoder Config
// ============================================================================

/// Configuration for one physical encoder
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Label used in logs
    pub name: NameString,
    /// Hardware type
    pub variant: EncoderVariant,
    /// Exchange pins A and B before decoding (fixes crossed wiring)
    pub swap_pins: bool,
    /// Report clockwise as negative and counter-clockwise as positive
    pub invert_direction: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            name: name_string("encoder"),
            variant: EncoderVariant::default(),
            swap_pins: false,
            invert_direction: false,
        }
    }
}

impl EncoderConfig {
    /// Set the label
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name_string(name);
        self
    }

    /// Set the hardware type
    pub fn with_variant(mut self, variant: EncoderVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Swap pins A and B
    pub fn with_swap_pins(mut self, swap: bool) -> Self {
        self.swap_pins = swap;
        self
    }

    /// Invert the reported direction
    pub fn with_invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Build a decoder for this configuration, resting on a detent
    pub fn build(&self) -> Encoder {
        Encoder::new(self.variant)
    }
}

// ============================================================================
// Simulation Config
// ============================================================================

/// Terminal simulation settings
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Print the internal state row with every frame
    pub show_state: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { show_state: true }
    }
}

impl SimulationConfig {
    /// Show or hide the internal state row
    pub fn with_show_state(mut self, show: bool) -> Self {
        self.show_state = show;
        self
    }
}
