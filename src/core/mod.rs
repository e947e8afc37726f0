//! Core module containing the service contract for the registry

pub mod service;

pub use service::PartnerService;
