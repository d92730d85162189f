//! The admission-list record as served by the backend.

use serde::{Deserialize, Serialize};

/// One row of the admission list.
///
/// Field names on the wire are camelCase (`lastName`, `rusL`, ...); the two
/// score totals shown in the table are derived at render time and never
/// stored or transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    /// Funding-source label.
    pub financing: String,

    // Exam subscores.
    pub math: i32,
    pub phys: i32,
    pub rus_l: i32,

    // Individual-achievement scores.
    pub sport: i32,
    pub diploma: i32,
    pub volunteer: i32,
    pub contests: i32,
    pub essay: i32,

    // Status labels.
    pub advantage: String,
    pub consent: String,
    pub competition: String,
    pub hostel: String,
    pub enrollment: String,
}

impl Applicant {
    /// Exam subscores plus all individual-achievement points.
    pub fn total_score(&self) -> i32 {
        self.math + self.phys + self.rus_l + self.extras_score()
    }

    /// Individual-achievement subtotal.
    pub fn extras_score(&self) -> i32 {
        self.sport + self.diploma + self.volunteer + self.contests + self.essay
    }
}
