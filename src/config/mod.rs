#[cfg(feature = "config-files")]
mod parsing;

#[cfg(feature = "config-files")]
pub use parsing::ConfigError;

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IP_LOOKUP: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_CORS_PROXY: &str = "https://corsproxy.io/?";
pub const DEFAULT_SOAP_URL: &str = "http://isapi.mekashron.com/icu-tech/icutech-test.dll/soap/IICUTech";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    pub settings: Settings,
}

impl Config {
    pub fn split(self) -> (Endpoints, Settings) {
        (self.endpoints, self.settings)
    }

    pub fn default_path(home: Option<PathBuf>) -> PathBuf {
        home.unwrap_or_default()
            .join(CONFIG_SEARCH_FOLDER[0])
            .join(CONFIG_SEARCH_FILE[0])
    }

    /// Config files present under `home`, most preferred first.
    pub fn search_paths(home: &Path) -> Vec<PathBuf> {
        CONFIG_SEARCH_FOLDER
            .iter()
            .flat_map(|folder| {
                CONFIG_SEARCH_FILE
                    .iter()
                    .map(move |file| home.join(folder).join(file))
            })
            .filter(|p| p.is_file())
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub ip_lookup: String,
    /// Prefix the percent-encoded SOAP URL is appended to. Empty means no relay.
    pub cors_proxy: String,
    pub soap_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_lookup: DEFAULT_IP_LOOKUP.to_owned(),
            cors_proxy: DEFAULT_CORS_PROXY.to_owned(),
            soap_url: DEFAULT_SOAP_URL.to_owned(),
        }
    }
}

impl Endpoints {
    pub fn target_url(&self) -> String {
        if self.cors_proxy.is_empty() {
            self.soap_url.clone()
        } else {
            format!("{}{}", self.cors_proxy, encode_uri_component(&self.soap_url))
        }
    }
}

// same set as encodeURIComponent: `! ' ( ) *` stay literal
fn encode_uri_component(s: &str) -> String {
    let mut out = urlencoding::encode(s).into_owned();
    for (escaped, mark) in [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")] {
        out = out.replace(escaped, mark);
    }
    out
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// XML-escape the values placed in the envelope. Off matches the service's
    /// existing clients, which send them raw.
    pub escape_credentials: bool,
    /// Seconds, applied to both the IP lookup and the SOAP call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Settings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

pub static CONFIG_SEARCH_FOLDER: [&str; 2] = [
    ".config/icu_login",
    ".config/icuLogin",
];
pub static CONFIG_SEARCH_FILE: [&str; 3] = [
    "config.yaml",
    "config.toml",
    "config.json",
];
