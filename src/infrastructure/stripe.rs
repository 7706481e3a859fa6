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

const ID_PREFIX: &str = "STRIPE";
const CARD_LENGTH: usize = 16;
const BRAND_PREFIX: char = '4';

/// Stripe only accepts 16-digit numbers in the `4` brand range.
#[derive(Debug, Default, Clone)]
pub struct StripeValidator;

impl CardValidator for StripeValidator {
    fn validate(&self, card: &CardNumber) -> bool {
        let accepted = card.is_numeric()
            && card.as_str().len() == CARD_LENGTH
            && card.as_str().starts_with(BRAND_PREFIX);
        if !accepted {
            tracing::debug!(%card, "stripe: card outside the accepted brand range");
        }
        accepted
    }
}

/// Simulates a Stripe charge; ids carry the `STRIPE-` prefix.
#[derive(Debug, Default, Clone)]
pub struct StripeProcessor;

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn process(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId> {
        let transaction = TransactionId::generate(ID_PREFIX);
        tracing::info!(%card, %amount, %transaction, "stripe: simulated charge");
        Ok(transaction)
    }
}

/// Writes Stripe transaction records to stdout, tagged with the family
/// name and a UTC timestamp.
#[derive(Debug, Default, Clone)]
pub struct StripeLogger;

#[async_trait]
impl TransactionLogger for StripeLogger {
    async fn log(&self, message: &str) {
        println!(
            "[{}] [stripe] {message}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
    }
}

/// Factory for the Stripe triplet.
#[derive(Debug, Default, Clone)]
pub struct StripeFactory;

impl StripeFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GatewayFactory for StripeFactory {
    fn family(&self) -> GatewayFamily {
        GatewayFamily::Stripe
    }

    fn create_validator(&self) -> CardValidatorBox {
        Box::new(StripeValidator)
    }

    fn create_processor(&self) -> PaymentProcessorBox {
        Box::new(StripeProcessor)
    }

    fn create_logger(&self) -> TransactionLoggerBox {
        Box::new(StripeLogger)
    }
}
