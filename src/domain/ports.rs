use super::card::CardNumber;
use super::family::GatewayFamily;
use super::money::Amount;
use super::transaction::TransactionId;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Family-specific card acceptance rules.
pub trait CardValidator: Send + Sync {
    /// Returns whether the card is acceptable to this family.
    ///
    /// Malformed input is an ordinary rejection, never an error.
    fn validate(&self, card: &CardNumber) -> bool;
}

/// Executes charges against one provider family.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Executes the charge and returns the family-prefixed transaction id.
    ///
    /// Expects `card` to have already passed the matching family's
    /// validator; enforcing that is the orchestrator's job, not the
    /// processor's.
    async fn process(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId>;
}

/// Records business-level transaction events for one provider family.
#[async_trait]
pub trait TransactionLogger: Send + Sync {
    /// Records the message, tagged with the family name and a timestamp.
    ///
    /// Best-effort: sink failures are swallowed and never surface to the
    /// payment flow.
    async fn log(&self, message: &str);
}

pub type CardValidatorBox = Box<dyn CardValidator>;
pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
pub type TransactionLoggerBox = Box<dyn TransactionLogger>;

/// Produces one matched validator/processor/logger triplet.
///
/// A service wired through a single factory cannot end up holding
/// components of different families; the factory is the sole creation
/// point for all three.
pub trait GatewayFactory: Send + Sync {
    fn family(&self) -> GatewayFamily;
    fn create_validator(&self) -> CardValidatorBox;
    fn create_processor(&self) -> PaymentProcessorBox;
    fn create_logger(&self) -> TransactionLoggerBox;
}

/// Factories are stateless and shared across concurrent flows.
pub type GatewayFactoryArc = Arc<dyn GatewayFactory>;
