//! In-memory implementation of PartnerService with simulated latency
//!
//! This is the backing store the dashboard was built against: a single
//! shared collection, mutated directly, with every operation resolving
//! after a fixed delay that stands in for network latency.

use crate::core::PartnerService;
use crate::model::{
    Attendance, NewAttendance, NewPartner, NewPayment, Partner, PartnerId, PartnerUpdate, Payment,
};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use uuid::Uuid;

/// Delay applied to every operation by [`InMemoryPartnerService::new`]
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

struct Inner {
    /// Insertion-ordered partner collection
    partners: Vec<Partner>,

    /// Next id to hand out. Monotonic, so ids are never reused after a
    /// delete.
    next_id: PartnerId,
}

/// In-memory partner registry
///
/// Cloning is cheap and shares the underlying collection; the RwLock
/// serializes read-modify-write sequences so the uniqueness and
/// consistency invariants hold even under parallel callers. The lock is
/// never held across an await point.
#[derive(Clone)]
pub struct InMemoryPartnerService {
    inner: Arc<RwLock<Inner>>,
    latency: Duration,
}

impl InMemoryPartnerService {
    /// Create an empty registry with the default simulated latency
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Create an empty registry with a custom simulated latency
    ///
    /// Tests typically pass `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                partners: Vec::new(),
                next_id: 1,
            })),
            latency,
        }
    }

    /// Create a registry pre-loaded with the given partners
    ///
    /// The id counter resumes above the highest seeded id.
    pub fn with_partners(partners: Vec<Partner>) -> Self {
        let next_id = partners.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { partners, next_id })),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency of an existing registry
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for InMemoryPartnerService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PartnerService for InMemoryPartnerService {
    async fn list(&self) -> Result<Vec<Partner>> {
        self.simulate_latency().await;

        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.partners.clone())
    }

    async fn get(&self, id: PartnerId) -> Result<Option<Partner>> {
        self.simulate_latency().await;

        let inner = self
            .inner
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(inner.partners.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: NewPartner) -> Result<Partner> {
        self.simulate_latency().await;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let partner = Partner {
            id: inner.next_id,
            first_name: data.first_name,
            last_name: data.last_name,
            dni: data.dni,
            phone: data.phone,
            email: data.email,
            join_date: data.join_date,
            property: data.property,
            payments: Vec::new(),
            attendance: Vec::new(),
        };
        inner.next_id += 1;
        inner.partners.push(partner.clone());

        tracing::debug!(id = partner.id, name = %partner.full_name(), "partner registered");
        Ok(partner)
    }

    async fn update(&self, id: PartnerId, changes: PartnerUpdate) -> Result<Option<Partner>> {
        self.simulate_latency().await;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(partner) = inner.partners.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        changes.apply_to(partner);
        tracing::debug!(id, "partner updated");
        Ok(Some(partner.clone()))
    }

    async fn delete(&self, id: PartnerId) -> Result<bool> {
        self.simulate_latency().await;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(index) = inner.partners.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        inner.partners.remove(index);
        tracing::debug!(id, "partner removed");
        Ok(true)
    }

    async fn record_payment(
        &self,
        partner_id: PartnerId,
        payment: NewPayment,
    ) -> Result<Option<Payment>> {
        if payment.amount < 0.0 {
            return Err(anyhow!(
                "Payment amount must be non-negative, got {}",
                payment.amount
            ));
        }

        self.simulate_latency().await;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(partner) = inner.partners.iter_mut().find(|p| p.id == partner_id) else {
            return Ok(None);
        };

        let payment = Payment {
            id: Uuid::new_v4(),
            date: payment.date,
            payment_type: payment.payment_type,
            amount: payment.amount,
            receipt_number: payment.receipt_number,
        };
        partner.payments.push(payment.clone());

        tracing::debug!(
            partner_id,
            amount = payment.amount,
            receipt = %payment.receipt_number,
            "payment recorded"
        );
        Ok(Some(payment))
    }

    async fn record_attendance(
        &self,
        partner_id: PartnerId,
        entry: NewAttendance,
    ) -> Result<Option<Attendance>> {
        self.simulate_latency().await;

        let mut inner = self
            .inner
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(partner) = inner.partners.iter_mut().find(|p| p.id == partner_id) else {
            return Ok(None);
        };

        let record = Attendance {
            id: Uuid::new_v4(),
            date: entry.date,
            attended: entry.attended,
        };
        partner.attendance.push(record.clone());

        tracing::debug!(partner_id, attended = record.attended, "attendance recorded");
        Ok(Some(record))
    }
}
