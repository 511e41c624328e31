//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::behavior::AttackRangeMode;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "agent/config.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = "agent/.env"
    )]
    pub env_file: Option<String>,

    #[arg(
        long = "follow-distance",
        env = "SKIRMISH_FOLLOW_DISTANCE",
        help = "Override the configured follow distance"
    )]
    pub follow_distance: Option<f64>,

    #[arg(
        long = "attack-distance",
        env = "SKIRMISH_ATTACK_DISTANCE",
        help = "Override the configured attack distance"
    )]
    pub attack_distance: Option<f64>,
}

impl Arguments {
    /// Parse arguments, loading the environment file before the final parse so
    /// its values reach the `env` backed overrides.
    pub fn load_from<I, T>(args: I) -> Result<Arguments, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let arguments = Arguments::try_parse_from(args.clone())?;
        if arguments.load_env_file() {
            Arguments::try_parse_from(args)
        } else {
            Ok(arguments)
        }
    }

    /// Load variables from the environment file. Returns true if a file was read.
    pub fn load_env_file(&self) -> bool {
        let Some(env_file) = &self.env_file else {
            return false;
        };
        if !Path::new(env_file).exists() {
            tracing::debug!("Environment file not found: {}", env_file);
            return false;
        }

        tracing::debug!("Loading environment variables from file: {}", env_file);
        match dotenv::from_filename(env_file) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to load environment file {}: {}", env_file, e);
                false
            }
        }
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            config_file: "config.yaml".to_string(),
            env_file: Some(".env".to_string()),
            follow_distance: None,
            attack_distance: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub behavior: BehaviorSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

impl Configuration {
    pub fn load(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let conf: Configuration = serde_yaml::from_reader(file)?;
        conf.validate()?;

        Ok(conf)
    }

    pub fn from_yaml(yaml: &str) -> Result<Configuration, ConfigError> {
        let conf: Configuration = serde_yaml::from_str(yaml)?;
        conf.validate()?;

        Ok(conf)
    }

    /// Apply command line overrides on top of the loaded file
    pub fn apply_arguments(&mut self, arguments: &Arguments) -> Result<(), ConfigError> {
        if let Some(distance) = arguments.follow_distance {
            tracing::debug!("Overriding follow distance: {}", distance);
            self.behavior.follow_distance = distance;
        }
        if let Some(distance) = arguments.attack_distance {
            tracing::debug!("Overriding attack distance: {}", distance);
            self.behavior.attack_distance = distance;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance("follow_distance", self.behavior.follow_distance)?;
        check_distance("attack_distance", self.behavior.attack_distance)?;
        if self.simulation.tick_millis == 0 {
            return Err(ConfigError::Invalid(
                "simulation.tick_millis must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_distance(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "behavior.{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

/// Ranges used by the attack-entity behavior
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// How close to the entity the agent attempts to get
    pub follow_distance: f64,
    /// How close to the entity the agent should be before attacking
    pub attack_distance: f64,
    pub attack_range_mode: AttackRangeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub tick_millis: u64,
    pub engagement_ticks: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_millis: 50,
            engagement_ticks: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let conf = Configuration::from_yaml("{}").unwrap();
        assert_eq!(conf.behavior, BehaviorSettings::default());
        assert_eq!(conf.behavior.attack_range_mode, AttackRangeMode::FollowDistance);
        assert_eq!(conf.simulation.tick_millis, 50);
        assert_eq!(conf.simulation.engagement_ticks, 40);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "behavior:\n  follow_distance: 4.0\n  attack_distance: 2.5\n  attack_range_mode: attack_distance\nsimulation:\n  tick_millis: 20"
        )
        .unwrap();

        let conf = Configuration::load(file.path()).unwrap();
        assert_eq!(conf.behavior.follow_distance, 4.0);
        assert_eq!(conf.behavior.attack_distance, 2.5);
        assert_eq!(conf.behavior.attack_range_mode, AttackRangeMode::AttackDistance);
        assert_eq!(conf.simulation.tick_millis, 20);
        assert_eq!(conf.simulation.engagement_ticks, 40);
    }

    #[test]
    fn test_missing_file() {
        let err = Configuration::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Open { .. }));
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = Configuration::from_yaml("behavior:\n  follow_distance: -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = Configuration::from_yaml("behavior:\n  attack_range_mode: sideways").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_file_feeds_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "SKIRMISH_FOLLOW_DISTANCE=7.5\n").unwrap();

        let arguments = Arguments::load_from([
            OsString::from("skirmish-agent"),
            OsString::from("-c"),
            dir.path().join("config.yaml").into_os_string(),
            OsString::from("-e"),
            env_file.into_os_string(),
        ])
        .unwrap();
        assert_eq!(arguments.follow_distance, Some(7.5));

        let mut conf = Configuration::default();
        conf.apply_arguments(&arguments).unwrap();
        assert_eq!(conf.behavior.follow_distance, 7.5);
    }

    #[test]
    fn test_missing_env_file_is_skipped() {
        let arguments = Arguments {
            env_file: Some("does/not/exist.env".to_string()),
            ..Default::default()
        };
        assert!(!arguments.load_env_file());
    }

    #[test]
    fn test_argument_overrides() {
        let mut conf = Configuration::default();
        let arguments = Arguments {
            follow_distance: Some(4.0),
            ..Default::default()
        };

        conf.apply_arguments(&arguments).unwrap();
        assert_eq!(conf.behavior.follow_distance, 4.0);
        assert_eq!(conf.behavior.attack_distance, 0.0);
    }
}
