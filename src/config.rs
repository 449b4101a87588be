// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loading pipeline options from TOML files.
//!
//! ```toml
//! [normalise]
//! default_country = "GB"
//! format = "INTERNATIONAL"
//!
//! [normalise.blocklist]
//! prefixes = ["+44070"]
//!
//! [validate]
//! allowed_countries = ["GB", "IE"]
//! min_length = 9
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    i18n::RegionCode,
    phonenorm::{PhoneBlockConfig, PhoneNormOptions, PhoneValidationOptions},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A config file read from `path` is not valid for [`PhoneConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Text handed to [`PhoneConfig::from_toml_str`], which has no path.
    #[error("failed to parse config: {0}")]
    InvalidToml(#[from] toml::de::Error),
    #[error("unknown region code {code:?} in {field}")]
    UnknownRegion { field: &'static str, code: String },
    #[error("invalid length bounds: min {min} is greater than max {max}")]
    InvalidLengths { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Options for both pipelines as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub normalise: PhoneNormOptions,
    pub validate: PhoneValidationOptions,
}

impl PhoneConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    /// Rejects region codes the parser does not know and inverted bounds.
    fn check(&self) -> Result<()> {
        check_validation(&self.normalise.validation)?;
        check_validation(&self.validate)
    }
}

fn check_validation(options: &PhoneValidationOptions) -> Result<()> {
    if let Some(code) = &options.resolve.default_country {
        check_region("default_country", code)?;
    }
    for code in &options.resolve.fallback_countries {
        check_region("fallback_countries", code)?;
    }
    for code in &options.allowed_countries {
        check_region("allowed_countries", code)?;
    }
    if options.min_length > options.max_length {
        return Err(ConfigError::InvalidLengths {
            min: options.min_length,
            max: options.max_length,
        });
    }
    if let Some(blocklist) = &options.blocklist {
        check_blocklist(blocklist)?;
    }
    Ok(())
}

fn check_blocklist(blocklist: &PhoneBlockConfig) -> Result<()> {
    for code in &blocklist.countries {
        check_region("blocklist.countries", code)?;
    }
    if let (Some(min), Some(max)) = (blocklist.lengths.min, blocklist.lengths.max) {
        if min > 0 && max > 0 && min > max {
            return Err(ConfigError::InvalidLengths { min, max });
        }
    }
    Ok(())
}

fn check_region(field: &'static str, code: &str) -> Result<()> {
    if RegionCode::is_known(code) {
        Ok(())
    } else {
        Err(ConfigError::UnknownRegion {
            field,
            code: code.to_owned(),
        })
    }
}
