//! Row rendering for the admission-list table.

use egui_extras::TableRow;
use roster_business::Applicant;

/// Renders one applicant row.
///
/// Cell order matches [`super::header::HEADERS`]. Two cells are derived at
/// render time: the total score and the individual-achievement subtotal.
/// The upstream list has no separate personal-file number, so the second
/// column repeats the id.
#[inline]
pub fn render_applicant_row(row: &mut TableRow<'_, '_>, applicant: &Applicant) {
    let cells: [String; 16] = [
        applicant.id.to_string(),
        applicant.id.to_string(),
        applicant.last_name.clone(),
        applicant.first_name.clone(),
        applicant.middle_name.clone(),
        applicant.financing.clone(),
        applicant.total_score().to_string(),
        applicant.math.to_string(),
        applicant.phys.to_string(),
        applicant.rus_l.to_string(),
        applicant.extras_score().to_string(),
        applicant.advantage.clone(),
        applicant.consent.clone(),
        applicant.competition.clone(),
        applicant.hostel.clone(),
        applicant.enrollment.clone(),
    ];

    for text in cells {
        row.col(|ui| {
            ui.label(text);
        });
    }
}
