//! Configuration types for productpilot

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::finance::{Complexity, SensitivityVariables};
use crate::opportunity::SelectionOptions;
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
    #[serde(default)]
    pub analysis: SelectionOptions,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Financial model assumptions
#[derive(Debug, Clone, Deserialize)]
pub struct AssumptionsConfig {
    /// Annual market growth rate (e.g., 0.15 = 15%)
    #[serde(default = "default_growth_rate")]
    pub growth_rate: Decimal,

    /// First-year market penetration (e.g., 0.02 = 2%)
    #[serde(default = "default_penetration_rate")]
    pub penetration_rate: Decimal,

    /// Projection horizon in years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Discount rate for NPV
    #[serde(default = "default_discount_rate")]
    pub discount_rate: Decimal,

    /// Up-front capital, also used as fixed costs for break-even
    #[serde(default = "default_initial_investment")]
    pub initial_investment: Decimal,

    /// Complexity tier used for cost estimation
    #[serde(default)]
    pub complexity: Complexity,

    /// Asymptotic penetration of the adoption S-curve, in percent
    #[serde(default = "default_target_penetration_pct")]
    pub target_penetration_pct: Decimal,

    /// Months to reach the target penetration
    #[serde(default = "default_ramp_up_months")]
    pub ramp_up_months: u32,

    /// Sensitivity scenarios evaluated for each opportunity
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<SensitivityVariables>,
}

fn default_growth_rate() -> Decimal {
    Decimal::new(15, 2) // 0.15
}
fn default_penetration_rate() -> Decimal {
    Decimal::new(2, 2) // 0.02
}
fn default_years() -> u32 {
    3
}
fn default_discount_rate() -> Decimal {
    Decimal::new(10, 2) // 0.10
}
fn default_initial_investment() -> Decimal {
    Decimal::new(2_500_000, 0)
}
fn default_target_penetration_pct() -> Decimal {
    Decimal::new(2, 0) // 2%
}
fn default_ramp_up_months() -> u32 {
    18
}
fn default_scenarios() -> Vec<SensitivityVariables> {
    let scenario = |price: i64, cost: i64, tam: i64| SensitivityVariables {
        price_change: Decimal::from(price),
        cost_change: Decimal::from(cost),
        tam_change: Decimal::from(tam),
    };
    vec![
        scenario(10, 0, 0),
        scenario(-10, 0, 0),
        scenario(0, 15, 0),
        scenario(0, 0, -20),
        scenario(-5, -10, 20),
    ]
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            growth_rate: default_growth_rate(),
            penetration_rate: default_penetration_rate(),
            years: default_years(),
            discount_rate: default_discount_rate(),
            initial_investment: default_initial_investment(),
            complexity: Complexity::default(),
            target_penetration_pct: default_target_penetration_pct(),
            ramp_up_months: default_ramp_up_months(),
            scenarios: default_scenarios(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists
    ///
    /// Returns `Ok(None)` only when the file is missing. Unreadable or
    /// malformed files are errors.
    pub fn load_optional(path: impl AsRef<std::path::Path>) -> anyhow::Result<Option<Self>> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read config {}", path.display())))
            }
        };
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(Some(config))
    }
}
