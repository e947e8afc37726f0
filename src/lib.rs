//! # Padron
//!
//! The data core of an administrative dashboard for a neighborhood
//! association: a registry of partners (property owners) with their
//! payments and meeting attendance, plus the aggregations that drive the
//! dashboard charts.
//!
//! ## Features
//!
//! - **Async CRUD Registry**: `PartnerService` trait with an in-memory
//!   backend that simulates network latency
//! - **Monotonic Ids**: partner ids are never reused after deletion
//! - **Pure Reporting**: deterministic aggregations taking an explicit
//!   "now" (totals, 30-day rolling totals, attendance series,
//!   payment-type breakdown, recent partners)
//! - **Wire-Compatible Models**: serde representations matching the
//!   dashboard's JSON shape (camelCase fields, Spanish enum labels)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use padron::prelude::*;
//!
//! let service = InMemoryPartnerService::with_partners(padron::fixtures::sample_partners());
//!
//! let partner = service
//!     .create(NewPartner {
//!         first_name: "Ana".to_string(),
//!         last_name: "Torres".to_string(),
//!         dni: "44556677".to_string(),
//!         phone: "955443322".to_string(),
//!         email: "ana.torres@example.com".to_string(),
//!         join_date: Utc::now(),
//!         property: Property::new("C", "03", ConstructionStatus::Unbuilt),
//!     })
//!     .await?;
//!
//! let report = DashboardReport::build(&service.list().await?, Utc::now());
//! println!("total collected: {}", report.total_collected);
//! ```

pub mod config;
pub mod core;
pub mod fixtures;
pub mod model;
pub mod reporting;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Model ===
    pub use crate::model::{
        Attendance, ConstructionStatus, NewAttendance, NewPartner, NewPayment, Partner, PartnerId,
        PartnerUpdate, Payment, PaymentType, Property, User, UserRole,
    };

    // === Service ===
    pub use crate::core::service::PartnerService;

    // === Storage ===
    pub use crate::storage::InMemoryPartnerService;

    // === Reporting ===
    pub use crate::reporting::{AttendancePoint, DashboardReport, PaymentSlice};

    // === Config ===
    pub use crate::config::RegistryConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
