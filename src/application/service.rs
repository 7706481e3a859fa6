use crate::domain::card::CardNumber;
use crate::domain::family::GatewayFamily;
use crate::domain::money::Amount;
use crate::domain::ports::{
    CardValidatorBox, GatewayFactory, PaymentProcessorBox, TransactionLoggerBox,
};
use crate::domain::transaction::TransactionId;
use crate::error::{PaymentError, Result};

/// The main entry point for processing payments.
///
/// `PaymentService` is ignorant of the active gateway family: it pulls its
/// validator/processor/logger triplet from one factory at construction and
/// thereafter drives the triplet purely through the port contracts.
pub struct PaymentService {
    family: GatewayFamily,
    validator: CardValidatorBox,
    processor: PaymentProcessorBox,
    logger: TransactionLoggerBox,
}

impl PaymentService {
    /// Creates a service wired to one gateway family.
    ///
    /// The triplet is created here, once, and held for the service's whole
    /// lifetime. Obtaining all three components from the same factory is
    /// what makes a cross-family mix impossible to assemble.
    pub fn new(factory: &dyn GatewayFactory) -> Self {
        Self {
            family: factory.family(),
            validator: factory.create_validator(),
            processor: factory.create_processor(),
            logger: factory.create_logger(),
        }
    }

    /// The gateway family this service was wired for.
    pub fn family(&self) -> GatewayFamily {
        self.family
    }

    /// Validates the card, executes the charge, and records the outcome.
    ///
    /// A rejected card short-circuits before the processor runs. Logging is
    /// best-effort and cannot turn a completed charge into a failure.
    pub async fn process_payment(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId> {
        if !self.validator.validate(card) {
            tracing::debug!(family = %self.family, %card, "card rejected by validator");
            return Err(PaymentError::InvalidCard(format!(
                "card {card} rejected by {}",
                self.family
            )));
        }

        let transaction = self.processor.process(amount, card).await?;

        self.logger
            .log(&format!(
                "payment of {amount} approved for card {card}, transaction {transaction}"
            ))
            .await;

        Ok(transaction)
    }
}
