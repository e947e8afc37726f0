//! Dashboard aggregations over the partner collection
//!
//! Every function here is pure: derived views depend only on the partner
//! slice passed in and, for time-windowed figures, on an explicit `now`.
//! Chart rendering is someone else's job; these produce the numbers and
//! series the charts consume.

use crate::model::{Partner, PaymentType};
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Window for the "collected recently" figure
const ROLLING_WINDOW_DAYS: i64 = 30;

/// How many partners the "recent partners" table shows
const RECENT_PARTNERS_LIMIT: usize = 5;

/// One bar of the attendance chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendancePoint {
    /// Short partner label ("J. Perez")
    pub label: String,

    /// Number of meetings the partner actually attended
    pub attended: usize,
}

/// One slice of the payment-distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSlice {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// Total amount collected for this payment type
    pub total: f64,
}

/// Everything the dashboard view needs, computed in one place
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub partner_count: usize,
    pub total_collected: f64,
    pub collected_last_30_days: f64,
    pub attendance: Vec<AttendancePoint>,
    pub payment_breakdown: Vec<PaymentSlice>,
    pub recent_partners: Vec<Partner>,
}

impl DashboardReport {
    /// Build the full report for `partners` as of `now`
    pub fn build(partners: &[Partner], now: DateTime<Utc>) -> Self {
        Self {
            partner_count: partners.len(),
            total_collected: total_collected(partners),
            collected_last_30_days: collected_last_30_days(partners, now),
            attendance: attendance_series(partners),
            payment_breakdown: payment_type_breakdown(partners),
            recent_partners: recent_partners(partners),
        }
    }
}

/// Sum of every payment of every partner
pub fn total_collected(partners: &[Partner]) -> f64 {
    partners.iter().map(Partner::total_paid).sum()
}

/// Sum of payments dated strictly after `now` minus 30 days
pub fn collected_last_30_days(partners: &[Partner], now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(ROLLING_WINDOW_DAYS);
    partners.iter().map(|p| p.paid_after(cutoff)).sum()
}

/// Meetings attended per partner, labeled first-initial + last name
pub fn attendance_series(partners: &[Partner]) -> Vec<AttendancePoint> {
    partners
        .iter()
        .map(|p| AttendancePoint {
            label: p.short_label(),
            attended: p.meetings_attended(),
        })
        .collect()
}

/// Amount collected per payment type
///
/// Groups are ordered by first appearance in the flattened payment
/// sequence, which is what keeps chart colors stable across renders.
pub fn payment_type_breakdown(partners: &[Partner]) -> Vec<PaymentSlice> {
    let mut totals: IndexMap<PaymentType, f64> = IndexMap::new();
    for payment in partners.iter().flat_map(|p| p.payments.iter()) {
        *totals.entry(payment.payment_type).or_insert(0.0) += payment.amount;
    }

    totals
        .into_iter()
        .map(|(payment_type, total)| PaymentSlice {
            payment_type,
            total,
        })
        .collect()
}

/// The most recently joined partners, newest first, at most five
///
/// Ties in `join_date` are broken by ascending partner id, so the order
/// is deterministic for any input.
pub fn recent_partners(partners: &[Partner]) -> Vec<Partner> {
    let mut sorted = partners.to_vec();
    sorted.sort_by(|a, b| b.join_date.cmp(&a.join_date).then_with(|| a.id.cmp(&b.id)));
    sorted.truncate(RECENT_PARTNERS_LIMIT);
    sorted
}
