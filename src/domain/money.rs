use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// A positive monetary amount for a payment.
///
/// Currency is implicit per gateway family and not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidAmount(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(PaymentError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_try_from_decimal() {
        let amount: Amount = dec!(150.00).try_into().unwrap();
        assert_eq!(amount.value(), dec!(150.00));
    }

    #[test]
    fn test_amount_display() {
        let amount = Amount::new(dec!(99.99)).unwrap();
        assert_eq!(amount.to_string(), "99.99");
    }
}
