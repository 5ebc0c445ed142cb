use serde::{Deserialize, Serialize};

use crate::core::DomainPolicy;
use crate::error::{RangeError, RangeResult};
use crate::interaction::DEFAULT_MOVE_DEBOUNCE_MS;

pub const EDITOR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Range editor bootstrap configuration.
///
/// Serializable so host applications can persist the editor setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeEditorConfig {
    #[serde(default)]
    pub domain_policy: DomainPolicy,
    /// Initial lower bound as a multiple of the last price.
    #[serde(default = "default_initial_lower_factor")]
    pub initial_lower_factor: f64,
    /// Initial upper bound as a multiple of the last price.
    #[serde(default = "default_initial_upper_factor")]
    pub initial_upper_factor: f64,
    #[serde(default = "default_move_debounce_ms")]
    pub move_debounce_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RangeEditorConfigJsonContractV1 {
    schema_version: u32,
    config: RangeEditorConfig,
}

impl Default for RangeEditorConfig {
    fn default() -> Self {
        Self {
            domain_policy: DomainPolicy::default(),
            initial_lower_factor: default_initial_lower_factor(),
            initial_upper_factor: default_initial_upper_factor(),
            move_debounce_ms: default_move_debounce_ms(),
        }
    }
}

impl RangeEditorConfig {
    #[must_use]
    pub fn with_domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.domain_policy = policy;
        self
    }

    #[must_use]
    pub fn with_initial_factors(mut self, lower: f64, upper: f64) -> Self {
        self.initial_lower_factor = lower;
        self.initial_upper_factor = upper;
        self
    }

    #[must_use]
    pub fn with_move_debounce_ms(mut self, move_debounce_ms: u64) -> Self {
        self.move_debounce_ms = move_debounce_ms;
        self
    }

    pub fn validate(self) -> RangeResult<Self> {
        self.domain_policy
            .validate()
            .map_err(|e| RangeError::InvalidConfig(e.to_string()))?;

        if !self.initial_lower_factor.is_finite()
            || !self.initial_upper_factor.is_finite()
            || self.initial_lower_factor < 0.0
            || self.initial_lower_factor > self.initial_upper_factor
        {
            return Err(RangeError::InvalidConfig(format!(
                "initial factors must satisfy 0 <= lower <= upper, got {} and {}",
                self.initial_lower_factor, self.initial_upper_factor
            )));
        }

        Ok(self)
    }

    pub fn to_json_contract_v1_pretty(self) -> RangeResult<String> {
        let payload = RangeEditorConfigJsonContractV1 {
            schema_version: EDITOR_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RangeError::InvalidConfig(format!("failed to serialize editor config v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> RangeResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return config.validate();
        }
        let payload: RangeEditorConfigJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                RangeError::InvalidConfig(format!("failed to parse editor config json: {e}"))
            })?;
        if payload.schema_version != EDITOR_CONFIG_JSON_SCHEMA_V1 {
            return Err(RangeError::InvalidConfig(format!(
                "unsupported editor config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()
    }
}

fn default_initial_lower_factor() -> f64 {
    0.85
}

fn default_initial_upper_factor() -> f64 {
    1.15
}

fn default_move_debounce_ms() -> u64 {
    DEFAULT_MOVE_DEBOUNCE_MS
}
