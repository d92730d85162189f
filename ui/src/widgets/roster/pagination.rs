//! Pagination controls for the admission list.
//!
//! Two links step the list offset back and forward by [`PAGE_STEP`]. The
//! targets are not clamped, so stepping back from the first page produces a
//! negative offset and the server answers with an empty page. While a page
//! request is in flight a loading label sits between the links.

use egui::Ui;
use roster_business::{PAGE_STEP, RosterState, RouteState};
use roster_states::StateCtx;

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
pub const LOADING_LABEL: &str = "Loading...";

pub fn pagination_controls(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let (offset, is_loading) = {
        let roster = state_ctx.state::<RosterState>();
        (roster.current_offset(), roster.is_loading())
    };
    let previous_offset = offset - PAGE_STEP;
    let next_offset = offset + PAGE_STEP;

    ui.horizontal(|ui| {
        if ui
            .link(PREVIOUS_LABEL)
            .on_hover_text(RouteState::path_for(previous_offset))
            .clicked()
        {
            navigate(state_ctx, previous_offset);
        }

        if is_loading {
            ui.label(LOADING_LABEL);
        }

        if ui
            .link(NEXT_LABEL)
            .on_hover_text(RouteState::path_for(next_offset))
            .clicked()
        {
            navigate(state_ctx, next_offset);
        }
    });
}

fn navigate(state_ctx: &mut StateCtx, offset: i64) {
    log::info!("navigating to offset {offset}");
    state_ctx.update::<RouteState>(move |route| {
        route.navigate_to(offset);
    });
}
