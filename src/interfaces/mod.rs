//! Inbound and outbound adapters at the payment boundary.

pub mod csv;
