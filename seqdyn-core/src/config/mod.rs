//! Configuration types for seqdyn

use crate::types::DistanceType;
use crate::SeqdynError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Named cost model; leave unset when supplying an explicit matrix
    #[serde(default)]
    pub distance_type: Option<DistanceType>,
    /// Overrides the model's default indel cost
    #[serde(default)]
    pub indel: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Worker threads for the global pool (0 = one per core)
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Minimum number of unique pairs before alignments run in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

// Default value functions
fn default_threads() -> usize { 0 }
fn default_parallel_threshold() -> usize { 64 }

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SeqdynError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SeqdynError::Configuration(format!("Failed to parse config: {}", e)))?;
    if let Some(indel) = config.analysis.indel {
        if !indel.is_finite() || indel < 0.0 {
            return Err(SeqdynError::Configuration(format!(
                "indel must be a non-negative number, got {}",
                indel
            )));
        }
    }
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SeqdynError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SeqdynError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.analysis.distance_type, None);
        assert_eq!(config.analysis.indel, None);
        assert_eq!(config.performance.threads, 0);
        assert_eq!(config.performance.parallel_threshold, 64);
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[analysis]
distance_type = "interval"
indel = 2.5

[performance]
threads = 4
parallel_threshold = 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.analysis.distance_type, Some(DistanceType::Interval));
        assert_eq!(config.analysis.indel, Some(2.5));
        assert_eq!(config.performance.threads, 4);
        assert_eq!(config.performance.parallel_threshold, 10);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[analysis]
distance_type = "tran"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.analysis.distance_type, Some(DistanceType::Tran));
        assert_eq!(config.analysis.indel, None);
        assert_eq!(config.performance.parallel_threshold, 64);
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            SeqdynError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_unknown_distance_type() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[analysis]\ndistance_type = \"euclid\"\n").unwrap();

        assert!(matches!(
            load_config(temp_file.path()),
            Err(SeqdynError::Configuration(_))
        ));
    }

    #[test]
    fn test_load_negative_indel() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[analysis]\nindel = -1.0\n").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            SeqdynError::Configuration(msg) => assert!(msg.contains("non-negative")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            SeqdynError::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.analysis.distance_type = Some(DistanceType::Markov);
        config.analysis.indel = Some(1.5);
        config.performance.threads = 2;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.analysis.distance_type, Some(DistanceType::Markov));
        assert_eq!(loaded.analysis.indel, Some(1.5));
        assert_eq!(loaded.performance.threads, 2);
        assert_eq!(loaded.performance.parallel_threshold, 64);
    }
}
