pub mod order_reader;
pub mod receipt_writer;
