use serde::Deserialize;
use std::path::PathBuf;

fn default_simplify() -> f64 {
    0.0
}
fn default_lng() -> f64 {
    69.2401
}
fn default_lat() -> f64 {
    41.2995
}
fn default_verbose() -> bool {
    false
}
fn default_air_quality() -> bool {
    false
}

/// Defaults for the replay CLI, loaded from `ecopatrol.toml`.
/// The initial center defaults to Tashkent.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub border: Option<PathBuf>,
    #[serde(default)]
    pub trace: Option<PathBuf>,
    /// Border simplification epsilon in degrees, 0 disables
    #[serde(default = "default_simplify")]
    pub simplify: f64,
    #[serde(default = "default_lng")]
    pub lng: f64,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_air_quality")]
    pub air_quality: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("ecopatrol.toml"));
    paths.push(PathBuf::from(".ecopatrol.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("ecopatrol").join("config.toml"));
        paths.push(config_dir.join("ecopatrol.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".ecopatrol.toml"));
        paths.push(home.join(".config").join("ecopatrol").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.simplify, 0.0);
        assert_eq!(config.lng, 69.2401);
        assert_eq!(config.lat, 41.2995);
        assert!(!config.air_quality);
        assert!(config.border.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: FileConfig = toml::from_str(
            r#"
            border = "borders/custom.json"
            simplify = 0.1
            verbose = true
        "#,
        )
        .unwrap();
        assert_eq!(config.border, Some(PathBuf::from("borders/custom.json")));
        assert_eq!(config.simplify, 0.1);
        assert!(config.verbose);
        // Unset fields keep their defaults
        assert_eq!(config.lat, 41.2995);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lng = 66.96\nlat = 39.65").unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let config: FileConfig = toml::from_str(&contents).unwrap();
        assert_eq!(config.lng, 66.96);
        assert_eq!(config.lat, 39.65);
    }
}
