//! Keypad drivers

pub mod columns;

pub use columns::ColumnLines;
