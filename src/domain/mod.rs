//! Menu, money and the two customer-facing choices: which pizza to build and
//! how to pay for it.

pub mod factory;
pub mod inventory;
pub mod money;
pub mod order;
pub mod payment;
pub mod pizza;
pub mod ports;
pub mod topping;
