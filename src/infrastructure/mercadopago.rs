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

const ID_PREFIX: &str = "MP";
const CARD_LENGTH: usize = 16;
const BRAND_PREFIX: char = '5';

/// MercadoPago only accepts 16-digit numbers in the `5` brand range.
#[derive(Debug, Default, Clone)]
pub struct MercadoPagoValidator;

impl CardValidator for MercadoPagoValidator {
    fn validate(&self, card: &CardNumber) -> bool {
        let accepted = card.is_numeric()
            && card.as_str().len() == CARD_LENGTH
            && card.as_str().starts_with(BRAND_PREFIX);
        if !accepted {
            tracing::debug!(%card, "mercadopago: card outside the accepted brand range");
        }
        accepted
    }
}

/// Simulates a MercadoPago charge; ids carry the `MP-` prefix.
#[derive(Debug, Default, Clone)]
pub struct MercadoPagoProcessor;

#[async_trait]
impl PaymentProcessor for MercadoPagoProcessor {
    async fn process(&self, amount: Amount, card: &CardNumber) -> Result<TransactionId> {
        let transaction = TransactionId::generate(ID_PREFIX);
        tracing::info!(%card, %amount, %transaction, "mercadopago: simulated charge");
        Ok(transaction)
    }
}

/// Writes MercadoPago transaction records to stdout, tagged with the
/// family name and a UTC timestamp.
#[derive(Debug, Default, Clone)]
pub struct MercadoPagoLogger;

#[async_trait]
impl TransactionLogger for MercadoPagoLogger {
    async fn log(&self, message: &str) {
        println!(
            "[{}] [mercadopago] {message}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
    }
}

/// Factory for the MercadoPago triplet.
#[derive(Debug, Default, Clone)]
pub struct MercadoPagoFactory;

impl MercadoPagoFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GatewayFactory for MercadoPagoFactory {
    fn family(&self) -> GatewayFamily {
        GatewayFamily::MercadoPago
    }

    fn create_validator(&self) -> CardValidatorBox {
        Box::new(MercadoPagoValidator)
    }

    fn create_processor(&self) -> PaymentProcessorBox {
        Box::new(MercadoPagoProcessor)
    }

    fn create_logger(&self) -> TransactionLoggerBox {
        Box::new(MercadoPagoLogger)
    }
}
