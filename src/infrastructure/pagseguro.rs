use crate::domain::card::CardNumber;
use crate::domain::family::GatewayFamily;
use crate::domain::money::Amount;
use crate::domain::ports::{
    CardValidator, CardValidatorBox, GatewayFactory, PaymentProcessor, PaymentProcessorBox,
    TransactionLogger, TransactionLoggerBox,
};
use crate::domain::transaction::TransactionId;
use crate::error::Result;
use async_trait::async_trait;
use chrono::Utc;

const ID_PREFIX: &str = "PS";
const CARD_LENGTH: usize = 16;

/// PagSeguro accepts any 16-digit number; it does not discriminate by
/// brand prefix.
#[derive(Debug, Default, Clone)]
pub struct PagSeguroValidator;

impl CardValidator for PagSeguroValidator {
    fn validate(&self, card: &CardNumber) -> bool {
        let accepted = card.is_numeric() && card.as_str().len() == CARD_LENGTH;
        if !accepted {
            tracing::debug!(%card, "pagseguro: card failed the 16-digit check");
        }
        accepted
    }
}

/// Simulates a PagSeguro charge; ids carry the `PS-` prefix.
#[derive(Debug, Default, Clone)]
pub struct PagSeguroProcessor;

#[async_trait]
impl PaymentProcessor for PagSeguroProcessor {
    async fn process(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId> {
        let transaction = TransactionId::generate(ID_PREFIX);
        tracing::info!(%card, %amount, %transaction, "pagseguro: simulated charge");
        Ok(transaction)
    }
}

/// Writes PagSeguro transaction records to stdout, tagged with the family
/// name and a UTC timestamp.
#[derive(Debug, Default, Clone)]
pub struct PagSeguroLogger;

#[async_trait]
impl TransactionLogger for PagSeguroLogger {
    async fn log(&self, message: &str) {
        println!(
            "[{}] [pagseguro] {message}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
    }
}

/// Factory for the PagSeguro triplet.
#[derive(Debug, Default, Clone)]
pub struct PagSeguroFactory;

impl PagSeguroFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GatewayFactory for PagSeguroFactory {
    fn family(&self) -> GatewayFamily {
        GatewayFamily::PagSeguro
    }

    fn create_validator(&self) -> CardValidatorBox {
        Box::new(PagSeguroValidator)
    }

    fn create_processor(&self) -> PaymentProcessorBox {
        Box::new(PagSeguroProcessor)
    }

    fn create_logger(&self) -> TransactionLoggerBox {
        Box::new(PagSeguroLogger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validator_accepts_any_16_digit_card() {
        let validator = PagSeguroValidator;
        assert!(validator.validate(&CardNumber::new("1234567890123456").unwrap()));
        assert!(validator.validate(&CardNumber::new("9999888877776666").unwrap()));
    }

    #[test]
    fn test_validator_rejects_wrong_length() {
        let validator = PagSeguroValidator;
        assert!(!validator.validate(&CardNumber::new("123456789012345").unwrap()));
        assert!(!validator.validate(&CardNumber::new("12345678901234567").unwrap()));
    }

    #[test]
    fn test_validator_rejects_non_numeric() {
        let validator = PagSeguroValidator;
        assert!(!validator.validate(&CardNumber::new("1234-5678-9012-34").unwrap()));
    }

    #[tokio::test]
    async fn test_processor_prefixes_transactions() {
        let processor = PagSeguroProcessor;
        let card = CardNumber::new("1234567890123456").unwrap();
        let transaction = processor
            .process(Amount::new(dec!(10.00)).unwrap(), &card)
            .await
            .unwrap();
        assert!(transaction.as_str().starts_with("PS-"));
    }

    #[test]
    fn test_factory_declares_its_family() {
        assert_eq!(PagSeguroFactory::new().family(), GatewayFamily::PagSeguro);
    }
}
