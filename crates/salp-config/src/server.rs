//! Development backend settings for `salp serve`.

use serde::{Deserialize, Serialize};

fn default_addr() -> String {
    String::from("127.0.0.1:8000")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the development backend binds to.
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}
