//! Partners: property-owning members of the association

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Attendance, Payment, Property};

/// Identifier assigned by the registry from a monotonic counter.
///
/// Ids are never reused, even after the partner they belonged to is
/// deleted.
pub type PartnerId = u64;

/// A registered member of the association, together with the payment and
/// attendance history the dashboard reports on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// Unique identifier within the registry
    pub id: PartnerId,

    pub first_name: String,
    pub last_name: String,

    /// National identity document number
    pub dni: String,

    pub phone: String,
    pub email: String,

    /// When the partner joined the association
    pub join_date: DateTime<Utc>,

    /// The lot this partner owns
    pub property: Property,

    /// Payment history, oldest first. May be empty.
    pub payments: Vec<Payment>,

    /// Meeting attendance history, oldest first. May be empty.
    pub attendance: Vec<Attendance>,
}

impl Partner {
    /// "Juan Perez"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Short chart label: first initial plus last name ("J. Perez").
    /// Falls back to the last name alone when the first name is empty.
    pub fn short_label(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }

    /// Sum of every payment this partner has made
    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Sum of payments dated strictly after `cutoff`
    pub fn paid_after(&self, cutoff: DateTime<Utc>) -> f64 {
        self.payments
            .iter()
            .filter(|p| p.date > cutoff)
            .map(|p| p.amount)
            .sum()
    }

    /// Number of meetings this partner actually attended
    pub fn meetings_attended(&self) -> usize {
        self.attendance.iter().filter(|a| a.attended).count()
    }
}

/// Input for registering a new partner.
///
/// The registry assigns the id and starts the payment and attendance
/// histories empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    pub email: String,
    pub join_date: DateTime<Utc>,
    pub property: Property,
}

/// Partial update of a partner's own fields (shallow overwrite).
///
/// Absent fields are left untouched. Payment and attendance histories are
/// append-only through the service and cannot be replaced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartnerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Property>,
}

impl PartnerUpdate {
    /// Merge the present fields into `partner`, leaving the rest unchanged
    pub fn apply_to(&self, partner: &mut Partner) {
        if let Some(first_name) = &self.first_name {
            partner.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            partner.last_name = last_name.clone();
        }
        if let Some(dni) = &self.dni {
            partner.dni = dni.clone();
        }
        if let Some(phone) = &self.phone {
            partner.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            partner.email = email.clone();
        }
        if let Some(join_date) = self.join_date {
            partner.join_date = join_date;
        }
        if let Some(property) = &self.property {
            partner.property = property.clone();
        }
    }
}
