//! Storage implementations for the partner registry

pub mod in_memory;

pub use in_memory::InMemoryPartnerService;
