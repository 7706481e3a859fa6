use crate::domain::family::GatewayFamily;
use crate::domain::ports::GatewayFactoryArc;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;

use super::mercadopago::MercadoPagoFactory;
use super::pagseguro::PagSeguroFactory;
use super::stripe::StripeFactory;

/// Maps each gateway family to the factory implementing it.
///
/// The registry is a plain mapping built once at process start and passed
/// by reference to whoever needs to resolve a family. Factories are
/// stateless, so resolved handles can be cloned freely across concurrent
/// flows.
pub struct FamilyRegistry {
    factories: HashMap<GatewayFamily, GatewayFactoryArc>,
}

impl FamilyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in family registered.
    pub fn with_default_gateways() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PagSeguroFactory::new()));
        registry.register(Arc::new(MercadoPagoFactory::new()));
        registry.register(Arc::new(StripeFactory::new()));
        registry
    }

    /// Registers a factory under its own family, replacing any previous
    /// entry for that family.
    pub fn register(&mut self, factory: GatewayFactoryArc) {
        self.factories.insert(factory.family(), factory);
    }

    /// Looks up the factory for an already-parsed family value.
    pub fn get(&self, family: GatewayFamily) -> Result<GatewayFactoryArc> {
        self.factories
            .get(&family)
            .cloned()
            .ok_or_else(|| PaymentError::UnknownFamily(family.to_string()))
    }

    /// Resolves an external family identifier (a CLI argument, a config
    /// value, a request header) into a factory.
    pub fn resolve(&self, code: &str) -> Result<GatewayFactoryArc> {
        self.get(code.parse()?)
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::with_default_gateways()
    }
}
