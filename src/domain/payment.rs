use super::money::Amount;
use crate::error::PizzeriaError;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Payment methods a customer can pick at checkout.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PaymentKind {
    PayPal,
    CreditCard,
}

impl PaymentKind {
    /// Menu order. The first entry is the fallback for an unrecognised choice.
    pub const ALL: [PaymentKind; 2] = [PaymentKind::PayPal, PaymentKind::CreditCard];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentKind::PayPal => "PayPal",
            PaymentKind::CreditCard => "Credit Card",
        }
    }

    /// Returns the strategy that handles this kind of payment.
    pub fn strategy(self) -> PaymentMethodBox {
        match self {
            PaymentKind::PayPal => Box::new(PayPalPayment),
            PaymentKind::CreditCard => Box::new(CreditCardPayment),
        }
    }
}

impl Default for PaymentKind {
    fn default() -> Self {
        PaymentKind::ALL[0]
    }
}

impl FromStr for PaymentKind {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label.to_ascii_lowercase().as_str() {
            "paypal" => Ok(PaymentKind::PayPal),
            "credit card" | "credit-card" | "credit_card" | "creditcard" | "card" => {
                Ok(PaymentKind::CreditCard)
            }
            _ => Err(PizzeriaError::UnknownPaymentMethod(label.to_string())),
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confirmation handed back by a [`PaymentMethod`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PaymentReceipt {
    pub method: PaymentKind,
    pub amount: Amount,
}

impl PaymentReceipt {
    pub fn confirmation(&self) -> String {
        format!("Payment successful via {}!", self.method)
    }
}

/// A way of paying for an order.
///
/// Implementations are interchangeable: the same amount always succeeds and
/// only the method recorded on the receipt differs.
pub trait PaymentMethod: Send + Sync {
    fn kind(&self) -> PaymentKind;

    fn pay(&self, amount: Amount) -> PaymentReceipt {
        let method = self.kind();
        info!(%method, %amount, "payment accepted");
        PaymentReceipt { method, amount }
    }
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn kind(&self) -> PaymentKind {
        PaymentKind::PayPal
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn kind(&self) -> PaymentKind {
        PaymentKind::CreditCard
    }
}
