//! Table rendering for the admission list, split into focused pieces:
//! - `columns`: column definitions and widths
//! - `header`: table header rendering
//! - `row`: individual row rendering

pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::Applicant;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_applicant_row;

/// Renders the applicant table: a fixed header row plus one body row per
/// applicant, in the order the slice provides them. An empty slice yields
/// the header row alone.
pub fn roster_table(ui: &mut Ui, applicants: &[Applicant]) {
    let mut builder = TableBuilder::new(ui).striped(true);
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for applicant in applicants {
                body.row(ROW_HEIGHT, |mut row| {
                    render_applicant_row(&mut row, applicant);
                });
            }
        });
}
