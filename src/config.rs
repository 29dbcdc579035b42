use crate::error::{LgResult, LinkographError};
use crate::geometry::LatticeGeometry;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub lattice: LatticeGeometry,
    #[command(flatten)]
    pub regression: RegressionWeights,
    #[command(flatten)]
    pub service: ServiceParams,
}

/// Coefficients of the logistic model fed by the run-test aggregates.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionWeights {
    #[arg(long, default_value_t = -69.15, allow_hyphen_values = true)]
    pub intercept: f64,
    #[arg(long, default_value_t = 0.077)]
    pub coef_move_count: f64,
    #[arg(long, default_value_t = 0.001)]
    pub coef_run_sum: f64,
    #[arg(long, default_value_t = 6.95)]
    pub coef_probability_sum: f64,
}

impl Default for RegressionWeights {
    fn default() -> Self {
        Self {
            intercept: -69.15,
            coef_move_count: 0.077,
            coef_run_sum: 0.001,
            coef_probability_sum: 6.95,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScoringBackend {
    Local,
    Remote,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceParams {
    #[arg(long, default_value_t = ScoringBackend::Local)]
    pub backend: ScoringBackend,
    #[arg(long, default_value = "http://localhost:5000")]
    pub scoring_url: String,
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            backend: ScoringBackend::Local,
            scoring_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LgResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            LinkographError::Config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.lattice.validate()?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(lattice.canvas_height);
        update_if_present!(lattice.canvas_padding);
        update_if_present!(lattice.diagonal_spacing);
        update_if_present!(lattice.max_diagonal);

        update_if_present!(regression.intercept);
        update_if_present!(regression.coef_move_count);
        update_if_present!(regression.coef_run_sum);
        update_if_present!(regression.coef_probability_sum);

        update_if_present!(service.backend);
        update_if_present!(service.scoring_url);
        update_if_present!(service.timeout_secs);
    }
}
