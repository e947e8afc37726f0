//! Service trait for partner registry operations

use crate::model::{
    Attendance, NewAttendance, NewPartner, NewPayment, Partner, PartnerId, PartnerUpdate, Payment,
};
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for managing the partner registry
///
/// Implementations own the authoritative partner collection. Every
/// operation is asynchronous; "not found" is signaled through an absent
/// value (`None` / `false`), never through an error. The error channel is
/// reserved for infrastructure failures.
#[async_trait]
pub trait PartnerService: Send + Sync {
    /// List all partners, insertion order preserved
    async fn list(&self) -> Result<Vec<Partner>>;

    /// Get a partner by id
    async fn get(&self, id: PartnerId) -> Result<Option<Partner>>;

    /// Register a new partner
    ///
    /// Assigns a fresh id and starts the payment and attendance histories
    /// empty.
    async fn create(&self, data: NewPartner) -> Result<Partner>;

    /// Merge the present fields of `changes` into the partner at `id`
    ///
    /// Returns the updated partner, or `None` if no partner has that id.
    async fn update(&self, id: PartnerId, changes: PartnerUpdate) -> Result<Option<Partner>>;

    /// Remove the partner with the given id
    ///
    /// Returns whether a partner was found and removed. The id is retired:
    /// it will not be handed out again by `create`.
    async fn delete(&self, id: PartnerId) -> Result<bool>;

    /// Append a payment to a partner's history
    ///
    /// Payments are immutable once recorded. Returns `None` if no partner
    /// has that id; a negative amount is rejected with an error.
    async fn record_payment(
        &self,
        partner_id: PartnerId,
        payment: NewPayment,
    ) -> Result<Option<Payment>>;

    /// Append a meeting outcome to a partner's attendance history
    ///
    /// Returns `None` if no partner has that id.
    async fn record_attendance(
        &self,
        partner_id: PartnerId,
        entry: NewAttendance,
    ) -> Result<Option<Attendance>>;
}
