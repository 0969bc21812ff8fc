use crate::domain::order::OrderRequest;
use crate::error::{PizzeriaError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of an order file: `pizza, toppings, payment`.
///
/// Toppings are separated by `;` and may be empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
struct OrderRecord {
    pizza: String,
    #[serde(default)]
    toppings: String,
    payment: String,
}

impl From<OrderRecord> for OrderRequest {
    fn from(record: OrderRecord) -> Self {
        let toppings = record
            .toppings
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            pizza: record.pizza,
            toppings,
            payment: record.payment,
        }
    }
}

/// Reads orders from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<OrderRequest>`.
/// Whitespace is trimmed and record lengths may vary.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    ///
    /// A malformed row yields an error for that row only.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRequest>> {
        self.reader.into_deserialize::<OrderRecord>().map(|result| {
            result
                .map(OrderRequest::from)
                .map_err(PizzeriaError::from)
        })
    }
}
