//! `supplynet-coding`: Huffman prefix codes for compact telemetry payloads.

pub mod huffman;

pub use huffman::{CodeBook, FrequencyTable, build_code};
