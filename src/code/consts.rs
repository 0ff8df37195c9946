//! Constant values compiled alongside a chunk's bytecode.

use std::fmt;
use static_assertions::assert_eq_size;

use crate::code::buffer::DynArray;
use crate::code::errors::{AccessResult, ErrorKind};


pub type IntType = i64;    // internal representation for integers
pub type FloatType = f64;  // internal representation for floats

/// Index type used when a constant reference is framed as a single
/// instruction operand byte. The pool itself is not bounded by this;
/// the emitting compiler checks `ConstantPool::len` before framing.
pub type ConstID = u8;


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    Integer(IntType),
    Float(FloatType),
}

assert_eq_size!(Constant, [u8; 16]);

impl From<IntType> for Constant {
    fn from(value: IntType) -> Self { Self::Integer(value) }
}

impl From<FloatType> for Constant {
    fn from(value: FloatType) -> Self { Self::Float(value) }
}

// For disassembly/debugging
impl fmt::Display for Constant {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(fmt, "'{}'", value),
            Self::Float(value) => write!(fmt, "'{}'", value),
        }
    }
}


/// Append-only pool of constants referenced by instruction operands.
/// Indices are handed out in call order and stay valid for the lifetime
/// of the pool. Repeated values are not deduplicated; every `add` yields
/// a fresh index.
#[derive(Debug, Default, Clone)]
pub struct ConstantPool {
    values: DynArray<Constant>,
}

impl ConstantPool {
    pub fn new() -> Self {
        Self { values: DynArray::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn add(&mut self, value: Constant) -> usize {
        self.values.push(value)
    }

    pub fn get(&self, index: usize) -> AccessResult<Constant> {
        self.values.get(index).ok_or_else(|| {
            ErrorKind::ConstOutOfRange { index, len: self.values.len() }.into()
        })
    }
}
