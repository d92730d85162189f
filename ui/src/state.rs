use roster_business::{FetchPageInput, RosterConfig, RosterState, RouteState};
use roster_states::StateCtx;

/// The main application state: one `StateCtx` with every shared state
/// registered.
pub struct State {
    pub ctx: StateCtx,
}

impl State {
    fn with_config(config: RosterConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        ctx.add_state(RouteState::default());
        ctx.add_state(RosterState::new());
        ctx.add_state(FetchPageInput::default());

        Self { ctx }
    }

    /// State wired against an arbitrary base URL, for mock-server tests.
    pub fn test(base_url: String) -> Self {
        Self::with_config(RosterConfig::new(base_url))
    }
}

impl Default for State {
    fn default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = RosterConfig::from_env();

        // Same-origin API on the web build.
        #[cfg(target_arch = "wasm32")]
        let config = RosterConfig::default();

        Self::with_config(config)
    }
}
