use super::money::Price;
use super::payment::PaymentReceipt;

/// An order as the customer phrased it: plain labels, not yet validated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OrderRequest {
    pub pizza: String,
    pub toppings: Vec<String>,
    pub payment: String,
}

/// What a placed order hands back.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OrderReceipt {
    pub description: String,
    pub total: Price,
    pub payment: PaymentReceipt,
}
