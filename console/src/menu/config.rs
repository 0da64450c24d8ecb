use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Driver-side settings: how matrices are printed and how large an
/// interactively entered matrix may get.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub delimiter: String,
    pub max_dimension: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            max_dimension: 32,
        }
    }
}

impl ConsoleConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading console config {}", path_ref.display()))?;
        let config: ConsoleConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing console config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_defaults_to_tab_delimiter() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.delimiter, "\t");
        assert_eq!(cfg.max_dimension, 32);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"delimiter: \" \"\nmax_dimension: 8\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ConsoleConfig::load(&path).unwrap();
        assert_eq!(cfg.delimiter, " ");
        assert_eq!(cfg.max_dimension, 8);
    }

    #[test]
    fn config_load_fills_missing_fields_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"max_dimension: 5\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = ConsoleConfig::load(&path).unwrap();
        assert_eq!(cfg.delimiter, "\t");
        assert_eq!(cfg.max_dimension, 5);
    }
}
