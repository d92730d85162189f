//! Runtime configuration for the roster app.

use roster_states::State;
use std::any::Any;
use ustr::Ustr;

/// Where the backend lives.
///
/// On wasm the base URL stays empty and API calls are same-origin (`/api`).
/// On native it comes from the `ROSTER_API_BASE_URL` environment variable;
/// tests inject a mock-server URL via [`RosterConfig::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterConfig {
    pub api_base_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, serde::Deserialize)]
struct RawEnv {
    #[serde(default)]
    roster_api_base_url: Option<String>,
}

impl RosterConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Read configuration from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let base_url = serde_env::from_env::<RawEnv>()
            .map_err(|err| log::warn!("failed to read environment config: {err}"))
            .ok()
            .and_then(|raw| raw.roster_api_base_url)
            .unwrap_or_default();
        Self {
            api_base_url: base_url,
        }
    }

    /// The canonical base for API calls.
    ///
    /// `Ustr` because this is composed once per request and cloned freely.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl State for RosterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
