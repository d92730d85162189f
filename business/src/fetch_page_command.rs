//! Page loading: input state, command, and the lifecycle trigger.
//!
//! The view never fetches. It calls [`ensure_page_loaded`] on attach and on
//! every subsequent frame; the function is idempotent per offset, so a
//! frame that does not change the route offset dispatches nothing.

use std::future::Future;
use std::pin::Pin;

use roster_states::{Command, CommandSnapshot, State, StateCtx, Updater};
use std::any::Any;

use crate::{RosterConfig, RosterState, RouteState, api};

/// Input for [`FetchPageCommand`], written by [`ensure_page_loaded`] right
/// before the command is enqueued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPageInput {
    pub offset: i64,
}

impl State for FetchPageInput {
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

/// Fetch one page of applicants and publish it into [`RosterState`].
///
/// No retry, no timeout beyond the HTTP client's own, no cancellation.
/// Out-of-order completions are resolved by the stale-response guard in
/// [`RosterState::receive_page`], not here.
#[derive(Debug, Default)]
pub struct FetchPageCommand;

impl Command for FetchPageCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let input = snap.state::<FetchPageInput>();
        let config = snap.state::<RosterConfig>();

        Box::pin(async move {
            let offset = input.offset;
            let api_url = config.api_url();

            match api::fetch_page(api_url.as_str(), offset).await {
                Ok(applicants) => {
                    updater.update::<RosterState>(move |s| s.receive_page(offset, applicants));
                }
                Err(err) => {
                    // The view has no error surface; log and stop loading.
                    log::warn!("loading applicants page {offset} failed: {err}");
                    updater.update::<RosterState>(move |s| s.fail_page(offset));
                }
            }
        })
    }
}

/// Ensure the page for the current route offset has been requested.
///
/// Bound to both lifecycle triggers: the app calls it once on construction
/// ("initial attach") and once per frame afterwards ("parameter changed").
/// The request is recorded in [`RosterState`] synchronously, so repeated
/// calls for an unchanged offset are no-ops.
pub fn ensure_page_loaded(ctx: &mut StateCtx) {
    let offset = ctx.state::<RouteState>().offset();
    if !ctx.state::<RosterState>().needs_page(offset) {
        return;
    }

    ctx.update::<RosterState>(|s| s.begin_request(offset));
    ctx.update::<FetchPageInput>(|input| input.offset = offset);
    ctx.enqueue_command::<FetchPageCommand>();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_page(server: &MockServer, offset: i64, ids: &[i32], expect: u64) {
        let body: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "lastName": "", "firstName": "", "middleName": "", "financing": "",
                    "math": 0, "phys": 0, "rusL": 0,
                    "sport": 0, "diploma": 0, "volunteer": 0, "contests": 0, "essay": 0,
                    "advantage": "", "consent": "", "competition": "", "hostel": "", "enrollment": ""
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/applicants"))
            .and(query_param("startIndex", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expect)
            .mount(server)
            .await;
    }

    fn test_ctx(base_url: String) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(RouteState::default());
        ctx.add_state(RosterState::new());
        ctx.add_state(FetchPageInput::default());
        ctx.add_state(RosterConfig::new(base_url));
        ctx
    }

    async fn settle(ctx: &mut StateCtx) {
        ctx.flush_commands();
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        ctx.sync_pending();
    }

    #[tokio::test]
    async fn initial_attach_fetches_exactly_once() {
        let server = MockServer::start().await;
        mock_page(&server, 0, &[1, 2], 1).await;

        let mut ctx = test_ctx(server.uri());

        ensure_page_loaded(&mut ctx);
        assert!(ctx.state::<RosterState>().is_loading());
        settle(&mut ctx).await;

        let roster = ctx.state::<RosterState>();
        assert!(!roster.is_loading());
        assert_eq!(roster.applicants().len(), 2);

        // Re-renders with the same offset must not fetch again; the
        // mock's expect(1) is verified when the server drops.
        ensure_page_loaded(&mut ctx);
        ensure_page_loaded(&mut ctx);
        settle(&mut ctx).await;
    }

    #[tokio::test]
    async fn offset_change_fetches_exactly_once_more() {
        let server = MockServer::start().await;
        mock_page(&server, 0, &[1], 1).await;
        mock_page(&server, 10, &[11], 1).await;

        let mut ctx = test_ctx(server.uri());

        ensure_page_loaded(&mut ctx);
        settle(&mut ctx).await;
        assert_eq!(ctx.state::<RosterState>().applicants()[0].id, 1);

        ctx.state_mut::<RouteState>().navigate_to(10);
        ensure_page_loaded(&mut ctx);
        settle(&mut ctx).await;

        let roster = ctx.state::<RosterState>();
        assert_eq!(roster.current_offset(), 10);
        assert_eq!(roster.applicants()[0].id, 11);
    }

    #[tokio::test]
    async fn failed_fetch_clears_loading_without_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/applicants"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut ctx = test_ctx(server.uri());
        ensure_page_loaded(&mut ctx);
        settle(&mut ctx).await;

        let roster = ctx.state::<RosterState>();
        assert!(!roster.is_loading());
        assert!(roster.applicants().is_empty());
    }
}
