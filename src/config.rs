extern crate anyhow;
extern crate serde;
extern crate serde_json;

use anyhow::Context;
use crate::result;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    // The oldest form never sent a stopId; servers of that vintage still
    // accept a selection by name alone.
    pub require_stop_id: bool,
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Config {
        return Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            require_stop_id: true,
            timeout_secs: None,
            user_agent: format!("ptvselect/{}", env!("CARGO_PKG_VERSION")),
        };
    }
}

pub fn config_from_file<P: AsRef<std::path::Path>>(path: P) -> result::PtvSelectResult<Config> {
    let debug_path = path.as_ref().to_str().map(|x| x.to_string());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Opening config from '{:?}'", debug_path))?;
    let reader = std::io::BufReader::new(file);
    let config: Config = serde_json::from_reader(reader)
        .with_context(|| format!("while parsing config"))?;
    return Ok(config);
}

#[cfg(test)]
mod tests {
    #[test]
    fn defaults() {
        let config = super::Config::default();
        assert_eq!(super::DEFAULT_SERVER_URL, config.server_url);
        assert!(config.require_stop_id);
        assert_eq!(None, config.timeout_secs);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = super::config_from_file("testdata/config.json").expect("read config");
        assert_eq!("http://displaypi.local:5000", config.server_url);
        assert!(!config.require_stop_id);
        assert_eq!(None, config.timeout_secs);
        assert!(config.user_agent.starts_with("ptvselect/"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = super::config_from_file("testdata/no-such-config.json").unwrap_err();
        assert!(format!("{}", err).contains("no-such-config.json"));
    }
}
