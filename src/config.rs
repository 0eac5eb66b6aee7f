//! Demo settings loaded from TOML.
//!
//! Only operands and output style are configurable. Which capability or
//! strategy a host is bound to is decided in code.
//!
//! ```toml
//! [output]
//! indent = 2
//! color = true
//! banner = true
//!
//! [basic]
//! first = 1
//! second = 2
//!
//! [calc]
//! plus = [40, 2]
//! times = [42.5, 2.0]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::capability::Token;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub basic: BasicConfig,
    pub calc: CalcConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub indent: usize,
    pub color: bool,
    pub banner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            color: true,
            banner: true,
        }
    }
}

/// Tokens given to the `First` and `Second` hosts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub first: Token,
    pub second: Token,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self { first: 1, second: 2 }
    }
}

/// Operand pairs for the calculator demos.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    pub plus: [i32; 2],
    pub times: [f64; 2],
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            plus: [40, 2],
            times: [42.5, 2.0],
        }
    }
}

// On-disk shape. Operand lists are read as `Vec` so a wrong length is an
// error instead of being truncated to the first two values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDemoConfig {
    output: OutputConfig,
    basic: BasicConfig,
    calc: RawCalcConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawCalcConfig {
    plus: Vec<i32>,
    times: Vec<f64>,
}

impl Default for RawCalcConfig {
    fn default() -> Self {
        let CalcConfig { plus, times } = CalcConfig::default();
        Self {
            plus: plus.to_vec(),
            times: times.to_vec(),
        }
    }
}

fn operand_pair<T>(field: &'static str, values: Vec<T>) -> Result<[T; 2]> {
    let actual = values.len();
    <[T; 2]>::try_from(values).map_err(|_| ConfigError::OperandCount {
        field,
        expected: 2,
        actual,
    })
}

impl TryFrom<RawDemoConfig> for DemoConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDemoConfig) -> Result<Self> {
        Ok(Self {
            output: raw.output,
            basic: raw.basic,
            calc: CalcConfig {
                plus: operand_pair("calc.plus", raw.calc.plus)?,
                times: operand_pair("calc.times", raw.calc.times)?,
            },
        })
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawDemoConfig = toml::from_str(content)?;
        Self::try_from(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
