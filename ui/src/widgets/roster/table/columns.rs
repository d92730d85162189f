//! Column definitions for the admission-list table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const INDEX_WIDTH: f32 = 36.0;
pub const FILE_NO_WIDTH: f32 = 60.0;
pub const NAME_WIDTH: f32 = 110.0;
pub const FINANCING_WIDTH: f32 = 110.0;
pub const SCORE_WIDTH: f32 = 72.0;
pub const LABEL_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration, in header order: row number, personal-file
/// number, three name parts, funding source, five score columns (total,
/// three exams, extras subtotal), and five status labels.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(INDEX_WIDTH),                 // №
        Column::exact(FILE_NO_WIDTH),               // № л.д.
        Column::initial(NAME_WIDTH).at_least(80.0), // Фамилия
        Column::initial(NAME_WIDTH).at_least(80.0), // Имя
        Column::initial(NAME_WIDTH).at_least(80.0), // Отчество
        Column::initial(FINANCING_WIDTH),           // Источник фин-я
        Column::exact(SCORE_WIDTH),                 // Сумма баллов
        Column::exact(SCORE_WIDTH),                 // Математика(39)
        Column::exact(SCORE_WIDTH),                 // Физика(40)
        Column::exact(SCORE_WIDTH),                 // Русский язык(40)
        Column::exact(SCORE_WIDTH),                 // Инд. дос.
        Column::initial(LABEL_WIDTH),               // Прием.
        Column::initial(LABEL_WIDTH),               // Согласие
        Column::initial(LABEL_WIDTH),               // Тип конкурса
        Column::initial(LABEL_WIDTH),               // Нуж-ся в общ-и
        Column::remainder().at_least(LABEL_WIDTH),  // Итог зач-я
    ]
}
