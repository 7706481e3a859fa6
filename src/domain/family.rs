use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported gateway families.
///
/// Adding a provider means adding a variant here plus one factory
/// registration; the orchestration code never branches on the variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GatewayFamily {
    PagSeguro,
    MercadoPago,
    Stripe,
}

impl GatewayFamily {
    pub const ALL: [GatewayFamily; 3] = [Self::PagSeguro, Self::MercadoPago, Self::Stripe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PagSeguro => "pagseguro",
            Self::MercadoPago => "mercadopago",
            Self::Stripe => "stripe",
        }
    }
}

impl fmt::Display for GatewayFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GatewayFamily {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pagseguro" => Ok(Self::PagSeguro),
            "mercadopago" => Ok(Self::MercadoPago),
            "stripe" => Ok(Self::Stripe),
            other => Err(PaymentError::UnknownFamily(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(
            "pagseguro".parse::<GatewayFamily>().unwrap(),
            GatewayFamily::PagSeguro
        );
        assert_eq!(
            "mercadopago".parse::<GatewayFamily>().unwrap(),
            GatewayFamily::MercadoPago
        );
        assert_eq!(
            "stripe".parse::<GatewayFamily>().unwrap(),
            GatewayFamily::Stripe
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            " Stripe ".parse::<GatewayFamily>().unwrap(),
            GatewayFamily::Stripe
        );
    }

    #[test]
    fn test_parse_unknown_code() {
        assert!(matches!(
            "unknown-code".parse::<GatewayFamily>(),
            Err(PaymentError::UnknownFamily(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for family in GatewayFamily::ALL {
            assert_eq!(family.to_string().parse::<GatewayFamily>().unwrap(), family);
        }
    }
}
