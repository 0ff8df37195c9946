//! Diagnostic consumers of compiled chunks.

pub mod dasm;

pub use dasm::Disassembler;
