//! Gaussian model parameters
//!
//! [`GaussianModelParams`] bundles the named Gaussian components of a model
//! with its probability and rate parameter sets, and derives the sojourn
//! weights of exponential holding times from the rates.

use crate::error::Result;
use crate::model::config::SojournConfig;
use crate::model::params::Params;
use crate::weight::algebra::{exp_of, multiply, negate, subtract};
use crate::weight::WeightExpr;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Mean and precision of a Gaussian component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianParams {
    /// Mean (μ). Default: 0
    #[serde(rename = "mu")]
    pub mean: f64,

    /// Precision (τ, the reciprocal of the variance). Default: 1
    #[serde(rename = "tau")]
    pub precision: f64,
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            precision: 1.0,
        }
    }
}

impl GaussianParams {
    /// Create Gaussian parameters with the given mean and precision
    pub fn new(mean: f64, precision: f64) -> Self {
        Self { mean, precision }
    }
}

/// Gaussian components plus probability and rate parameters of a model
///
/// The contents are replaced wholesale on load; there is no field-by-field
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianModelParams {
    gauss: BTreeMap<String, GaussianParams>,
    prob: Params,
    rate: Params,
}

impl GaussianModelParams {
    /// Create an empty parameter container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container from its three sections
    pub fn from_parts(
        gauss: BTreeMap<String, GaussianParams>,
        prob: Params,
        rate: Params,
    ) -> Self {
        Self { gauss, prob, rate }
    }

    /// The Gaussian components, by name
    pub fn gauss(&self) -> &BTreeMap<String, GaussianParams> {
        &self.gauss
    }

    /// The probability parameters
    pub fn prob(&self) -> &Params {
        &self.prob
    }

    /// The rate parameters
    pub fn rate(&self) -> &Params {
        &self.rate
    }

    /// All parameter definitions, with a wait and exit probability derived
    /// for every rate over the time `time`
    ///
    /// For a rate `r`, the wait probability is `exp(-(r * time))`, the
    /// probability of not having left by `time`, and the exit probability is
    /// `1 - wait`. They are stored as `r_wait` and `r_exit`.
    pub fn params(&self, time: &WeightExpr) -> Params {
        self.params_with(time, &SojournConfig::default())
    }

    /// Like [`params`](Self::params), naming derived parameters per `config`
    pub fn params_with(&self, time: &WeightExpr, config: &SojournConfig) -> Params {
        let mut params = self.prob.combine(&self.rate);
        for rate in self.rate.names() {
            let wait = exp_of(negate(multiply(WeightExpr::param(rate.as_str()), time)));
            let exit = subtract(WeightExpr::one(), wait.clone());
            params.set(config.wait_param(&rate), wait);
            params.set(config.exit_param(&rate), exit);
        }
        debug!(
            "derived sojourn weights for {} rate(s) over time {}",
            self.rate.len(),
            time
        );
        params
    }

    /// Replace the contents with the container stored in `value`
    pub fn read_json(&mut self, value: &serde_json::Value) -> Result<()> {
        *self = GaussianModelParams::deserialize(value)?;
        debug!(
            "loaded {} Gaussian component(s), {} probability and {} rate parameter(s)",
            self.gauss.len(),
            self.prob.len(),
            self.rate.len()
        );
        Ok(())
    }

    /// The persisted form of this container
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let mut params = Self::new();
        params.read_json(&value)?;
        Ok(params)
    }

    /// Write to `writer` as a single line of JSON
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Save to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
        let mut params = Self::new();
        params.read_json(&value)?;
        Ok(params)
    }
}
