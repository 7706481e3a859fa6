//! Application layer containing the payment orchestration logic.
//!
//! This module defines the `PaymentService`, the family-agnostic entry
//! point that drives a gateway triplet obtained from a single factory.

pub mod service;
