use crate::domain::money::Price;
use crate::domain::order::OrderReceipt;
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReceiptRecord<'a> {
    order: usize,
    description: &'a str,
    #[serde(serialize_with = "serialize_price")]
    total: Price,
    payment: &'static str,
}

fn serialize_price<S>(price: &Price, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.2}", price.value()))
}

/// Writes placed orders as CSV: `order,description,total,payment`.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one receipt; `order` is the 1-based position in the input.
    pub fn write(&mut self, order: usize, receipt: &OrderReceipt) -> Result<()> {
        self.writer.serialize(ReceiptRecord {
            order,
            description: &receipt.description,
            total: receipt.total,
            payment: receipt.payment.method.label(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
