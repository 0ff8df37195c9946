//! The bytecode container: code buffer, constant pool, line table,
//! and the `Chunk` that ties them together into one compiled code object.

pub mod buffer;
pub mod consts;
pub mod lines;
pub mod chunk;
pub mod opcodes;
pub mod errors;

pub use opcodes::OpCode;
pub use chunk::Chunk;
pub use consts::{Constant, ConstantPool, ConstID};
pub use lines::LineTable;
pub use errors::{AccessResult, AccessError, ErrorKind};
