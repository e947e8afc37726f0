//! Domain model for the partner registry
//!
//! All types serialize to the dashboard's JSON shape: camelCase field
//! names and Spanish enum labels.

pub mod attendance;
pub mod partner;
pub mod payment;
pub mod property;
pub mod user;

pub use attendance::{Attendance, NewAttendance};
pub use partner::{NewPartner, Partner, PartnerId, PartnerUpdate};
pub use payment::{NewPayment, Payment, PaymentType};
pub use property::{ConstructionStatus, Property};
pub use user::{User, UserRole};
