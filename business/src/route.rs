//! Route state: the page-offset parameter of the current location.

use roster_states::State;
use std::any::Any;

/// Root path of the admission-list page; pagination links navigate to
/// `/applicants/<offset>`.
pub const PAGE_ROOT: &str = "/applicants";

/// The current location's page-offset segment, kept as the raw string so
/// parsing stays in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
    param: Option<String>,
}

impl RouteState {
    pub fn new(param: Option<String>) -> Self {
        Self { param }
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// The page offset encoded in the route. A missing or non-numeric
    /// segment is silently coerced to 0.
    pub fn offset(&self) -> i64 {
        self.param
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    /// The link target for a page at `offset`.
    pub fn path_for(offset: i64) -> String {
        format!("{PAGE_ROOT}/{offset}")
    }

    /// Rewrite the offset segment; what clicking a pagination link does.
    pub fn navigate_to(&mut self, offset: i64) {
        self.param = Some(offset.to_string());
    }
}

impl State for RouteState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
