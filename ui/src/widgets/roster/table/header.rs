//! Header rendering for the admission-list table.

use egui::Ui;
use egui_extras::TableRow;

/// Header column labels. Fixed and hard-coded in the list's original locale.
pub const HEADERS: [&str; 16] = [
    "№",
    "№ л.д.",
    "Фамилия",
    "Имя",
    "Отчество",
    "Источник фин-я",
    "Сумма баллов",
    "Математика(39)",
    "Физика(40)",
    "Русский язык(40)",
    "Инд. дос.",
    "Прием.",
    "Согласие",
    "Тип конкурса",
    "Нуж-ся в общ-и",
    "Итог зач-я",
];

/// Renders the table header with centered, bold labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}
