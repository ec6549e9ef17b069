use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use utility::{Error, Result};

/// CONFIG_LOCATION_ENV is the name of he env variable used
/// to configure the location of the fluor config folder.
/// When not set, DEFAULT_DIR location is used.
pub const CONFIG_LOCATION_ENV: &str = "FLUOR_CONFIG";

pub const DEFAULT_DIR: &str = "~/.fluor";
pub const DEFAULT_FILE: &str = "config.yml";

/// DEFAULT_CI_DIR is the 'fluor' directory in the current directory
/// used when running in a CI environment.
pub const DEFAULT_CI_DIR: &str = "./fluor";

pub const DEFAULT_GATEWAY: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;

/// ConfigFile holds the settings shared by every fluor command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Gateway is the base url of the registry and function runtime
    pub gateway: String, //`yaml:"gateway"`
    /// Token is a bearer token issued by the platform's auth service
    pub token: String, //`yaml:"token,omitempty"`
    /// ProbeTimeoutMs bounds every probe of an aggregation cycle
    pub probe_timeout_ms: u64, //`yaml:"probe_timeout_ms"`
    /// InvokeTimeoutMs bounds a forwarded invocation, unbounded when not set
    pub invoke_timeout_ms: Option<u64>, //`yaml:"invoke_timeout_ms,omitempty"`
    /// LookupFallback scans the function list when the lookup-by-name endpoint fails
    pub lookup_fallback: bool, //`yaml:"lookup_fallback"`
    /// RefreshIntervalMs is the default period of `status --watch`
    pub refresh_interval_ms: u64, //`yaml:"refresh_interval_ms"`
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            gateway: String::new(),
            token: String::new(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            invoke_timeout_ms: None,
            lookup_fallback: true,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl ConfigFile {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn invoke_timeout(&self) -> Option<Duration> {
        self.invoke_timeout_ms.map(Duration::from_millis)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// load reads the yaml file at the given path, a missing or empty file yields the defaults
    pub fn load(file_path: &Path) -> Result<ConfigFile> {
        if let Err(err) = std::fs::metadata(file_path) {
            return if err.kind() == std::io::ErrorKind::NotFound {
                Ok(ConfigFile::default())
            } else {
                Err(Error::Io(err))
            };
        }
        let data = std::fs::read_to_string(file_path)?;
        if data.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml::from_str(data.as_str()).map_err(|e| {
            Error::Custom(format!(
                "can't parse config file {}: {}",
                file_path.display(),
                e
            ))
        })
    }

    /// load_default reads the config file from the default location
    pub fn load_default() -> Result<ConfigFile> {
        ConfigFile::load(&config_path()?)
    }
}

/// config_dir returns the path to the fluor config directory.
/// When
/// 1. CI = "true" and FLUOR_CONFIG="", then it will return `./fluor`, which is located in the current working directory.
/// 2. FLUOR_CONFIG="<path>", then it will return the path value in FLUOR_CONFIG
/// 3. CI = "" and FLUOR_CONFIG="", then it will return the default location ~/.fluor
pub fn config_dir() -> Result<String> {
    match std::env::var(CONFIG_LOCATION_ENV) {
        Ok(overrid) => {
            if overrid.is_empty() && is_running_in_ci() {
                Ok(DEFAULT_CI_DIR.into())
            } else if !overrid.is_empty() {
                Ok(overrid)
            } else {
                Ok(DEFAULT_DIR.into())
            }
        }
        Err(e) => {
            if is_running_in_ci() && e == VarError::NotPresent {
                Ok(DEFAULT_CI_DIR.into())
            } else if e == VarError::NotPresent {
                Ok(DEFAULT_DIR.into())
            } else {
                Err(Error::Custom(format!("{:?}", e)))
            }
        }
    }
}

/// config_path returns the full path of the config file, with `~` expanded
pub fn config_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    let dir = shellexpand::tilde(&dir);
    Ok(PathBuf::from(dir.into_owned()).join(DEFAULT_FILE).clean())
}

/// is_running_in_ci checks the ENV var CI and returns true if it's set to true or 1
fn is_running_in_ci() -> bool {
    match std::env::var("CI") {
        Ok(val) => val == "1" || val == "true",
        Err(_) => false,
    }
}
