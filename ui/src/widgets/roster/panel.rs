//! Main panel for the admission list.

use egui::{Response, ScrollArea, Ui};
use roster_business::RosterState;
use roster_states::StateCtx;

use super::pagination::pagination_controls;
use super::table::roster_table;

pub const PANEL_HEADING: &str = "Список абитуриентов";

/// Displays the admission list: heading, applicant table, pagination links.
pub fn roster_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        ui.heading(PANEL_HEADING);
        ui.add_space(8.0);

        ScrollArea::horizontal().show(ui, |ui| {
            let roster = state_ctx.state::<RosterState>();
            roster_table(ui, roster.applicants());
        });

        ui.add_space(8.0);
        pagination_controls(state_ctx, ui);
    });

    response.response
}

#[cfg(test)]
mod roster_panel_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{Applicant, RouteState};

    use super::super::pagination::{LOADING_LABEL, NEXT_LABEL, PREVIOUS_LABEL};
    use super::super::table::header::HEADERS;
    use super::*;

    /// Helper to create a StateCtx for testing the roster panel.
    fn create_test_state_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(RosterState::default());
        ctx.add_state(RouteState::default());
        ctx
    }

    /// Helper to build one applicant with the reference score layout:
    /// three exams 39 + 40 + 40 plus five one-point achievements.
    fn create_test_applicant(id: i32, last_name: &str) -> Applicant {
        Applicant {
            id,
            last_name: last_name.to_string(),
            first_name: "Иван".to_string(),
            middle_name: "Иванович".to_string(),
            financing: "Бюджет".to_string(),
            math: 39,
            phys: 40,
            rus_l: 40,
            sport: 1,
            diploma: 1,
            volunteer: 1,
            contests: 1,
            essay: 1,
            advantage: "Нет".to_string(),
            consent: "Да".to_string(),
            competition: "Общий конкурс".to_string(),
            hostel: "Нет".to_string(),
            enrollment: "Зачислен".to_string(),
        }
    }

    /// Helper to settle a loaded page into the state, as if a fetch for
    /// `offset` had completed.
    fn load_page(state_ctx: &mut StateCtx, offset: i64, applicants: Vec<Applicant>) {
        let roster = state_ctx.state_mut::<RosterState>();
        roster.begin_request(offset);
        roster.receive_page(offset, applicants);
    }

    fn panel_harness(state_ctx: &mut StateCtx) -> Harness<'_, &mut StateCtx> {
        Harness::builder()
            .with_size(egui::Vec2::new(1500.0, 900.0))
            .build_ui_state(
                |ui, state_ctx| {
                    roster_panel(state_ctx, ui);
                },
                state_ctx,
            )
    }

    // Element Existence Tests

    #[test]
    fn test_table_header_elements_exist() {
        let mut state_ctx = create_test_state_ctx();
        let harness = panel_harness(&mut state_ctx);

        for label in HEADERS {
            assert!(
                harness.query_by_label_contains(label).is_some(),
                "header '{label}' should exist"
            );
        }
    }

    #[test]
    fn test_pagination_links_exist() {
        let mut state_ctx = create_test_state_ctx();
        let harness = panel_harness(&mut state_ctx);

        assert!(
            harness.query_by_label(PREVIOUS_LABEL).is_some(),
            "Previous link should exist"
        );
        assert!(
            harness.query_by_label(NEXT_LABEL).is_some(),
            "Next link should exist"
        );
    }

    #[test]
    fn test_empty_page_shows_headers_only() {
        let mut state_ctx = create_test_state_ctx();
        load_page(&mut state_ctx, 0, vec![]);

        let harness = panel_harness(&mut state_ctx);

        assert!(
            harness.query_by_label_contains("Фамилия").is_some(),
            "headers should exist even with no rows"
        );
        assert!(
            harness.query_by_label("124").is_none(),
            "no score cells should exist with no rows"
        );
    }

    // Content Correctness Tests

    #[test]
    fn test_rows_display_applicant_data() {
        let mut state_ctx = create_test_state_ctx();
        load_page(
            &mut state_ctx,
            0,
            vec![
                create_test_applicant(1, "Смирнов"),
                create_test_applicant(2, "Петров"),
            ],
        );

        let harness = panel_harness(&mut state_ctx);

        assert!(
            harness.query_by_label("Смирнов").is_some(),
            "last name 'Смирнов' should be displayed"
        );
        assert!(
            harness.query_by_label("Петров").is_some(),
            "last name 'Петров' should be displayed"
        );
        assert!(
            harness.query_by_label("Зачислен").is_some(),
            "enrollment status should be displayed"
        );
    }

    #[test]
    fn test_rows_display_derived_scores() {
        let mut state_ctx = create_test_state_ctx();
        load_page(&mut state_ctx, 0, vec![create_test_applicant(1, "Смирнов")]);

        let harness = panel_harness(&mut state_ctx);

        // 39 + 40 + 40 exam points plus 5 achievement points.
        assert!(
            harness.query_by_label("124").is_some(),
            "total score 124 should be displayed"
        );
        assert!(
            harness.query_by_label("5").is_some(),
            "achievement subtotal 5 should be displayed"
        );
    }

    #[test]
    fn test_loading_indicator_visibility() {
        let mut state_ctx = create_test_state_ctx();
        state_ctx.state_mut::<RosterState>().begin_request(0);

        let harness = panel_harness(&mut state_ctx);
        assert!(
            harness.query_by_label(LOADING_LABEL).is_some(),
            "loading indicator should be visible while a request is in flight"
        );

        let mut state_ctx = create_test_state_ctx();
        load_page(&mut state_ctx, 0, vec![]);

        let harness = panel_harness(&mut state_ctx);
        assert!(
            harness.query_by_label(LOADING_LABEL).is_none(),
            "loading indicator should be hidden once the page arrived"
        );
    }

    // User Interaction Tests

    #[test]
    fn test_next_link_advances_route_by_page_step() {
        let mut state_ctx = create_test_state_ctx();
        state_ctx.update::<RouteState>(|route| route.navigate_to(10));
        load_page(&mut state_ctx, 10, vec![]);

        let mut harness = panel_harness(&mut state_ctx);
        harness.step();

        harness.get_by_label(NEXT_LABEL).click();
        harness.step();

        assert_eq!(
            harness.state().state::<RouteState>().offset(),
            15,
            "Next should navigate five records forward"
        );
    }

    #[test]
    fn test_previous_link_steps_route_back_by_page_step() {
        let mut state_ctx = create_test_state_ctx();
        state_ctx.update::<RouteState>(|route| route.navigate_to(10));
        load_page(&mut state_ctx, 10, vec![]);

        let mut harness = panel_harness(&mut state_ctx);
        harness.step();

        harness.get_by_label(PREVIOUS_LABEL).click();
        harness.step();

        assert_eq!(
            harness.state().state::<RouteState>().offset(),
            5,
            "Previous should navigate five records back"
        );
    }

    #[test]
    fn test_previous_link_goes_negative_from_first_page() {
        let mut state_ctx = create_test_state_ctx();
        load_page(&mut state_ctx, 0, vec![]);

        let mut harness = panel_harness(&mut state_ctx);
        harness.step();

        harness.get_by_label(PREVIOUS_LABEL).click();
        harness.step();

        assert_eq!(
            harness.state().state::<RouteState>().offset(),
            -5,
            "offsets are not clamped at zero"
        );
    }
}
