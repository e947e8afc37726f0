//! Meeting attendance records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A partner's participation outcome for one meeting. Immutable once
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    /// Unique identifier assigned at recording time
    pub id: Uuid,

    /// Date of the meeting
    pub date: DateTime<Utc>,

    /// Whether the partner showed up
    pub attended: bool,
}

/// Input for recording a meeting outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub date: DateTime<Utc>,
    pub attended: bool,
}
