//! Application layer: turns customer choices into pizzas, stock movements and
//! payments.
//!
//! `OrderService` is the single entry point used by both the batch CSV mode
//! and the interactive console.

pub mod order;
