//! Gateway family adapters and the registry that resolves them.
//!
//! One module per provider family; each supplies the complete
//! validator/processor/logger triplet plus the factory that creates it.

pub mod mercadopago;
pub mod pagseguro;
pub mod registry;
pub mod stripe;
