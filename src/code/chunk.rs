use crate::code::buffer::DynArray;
use crate::code::consts::{Constant, ConstantPool};
use crate::code::lines::LineTable;
use crate::code::errors::{AccessResult, ErrorKind};
use crate::code::opcodes::OpCode;


/// One compiled code object: a buffer of encoded instructions, the pool
/// of constants those instructions reference, and a line table for
/// diagnostics. Created empty, filled by append operations during
/// compilation, then read by offset/index during execution and
/// disassembly. All three owned buffers are released together when the
/// chunk is dropped.
///
/// The chunk stores raw bytes; it does not validate opcode/operand
/// framing. That discipline belongs to the emitting compiler.
#[derive(Debug, Default, Clone)]
pub struct Chunk {
    code: DynArray<u8>,
    consts: ConstantPool,
    lines: LineTable,
}

impl Chunk {
    pub fn new() -> Self {
        Self {
            code: DynArray::new(),
            consts: ConstantPool::new(),
            lines: LineTable::new(),
        }
    }

    // Bytes

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        self.code.as_slice()
    }

    // using Into<u8> so that OpCodes can be accepted without extra fuss
    pub fn write(&mut self, byte: impl Into<u8>, line: u32) -> usize {
        let offset = self.code.push(byte.into());
        self.lines.record(line);

        debug_assert!(self.code.len() == self.lines.count());
        offset
    }

    /// Appends an opcode followed by its operand bytes, recording the same
    /// line for each. Returns the offset of the opcode byte.
    pub fn write_instr(&mut self, opcode: OpCode, operands: &[u8], line: u32) -> usize {
        debug_assert!(operands.len() + 1 == opcode.instr_len());

        let offset = self.write(opcode, line);
        for &byte in operands {
            self.write(byte, line);
        }
        offset
    }

    pub fn read_byte(&self, offset: usize) -> AccessResult<u8> {
        self.code.get(offset).ok_or_else(|| {
            ErrorKind::OffsetOutOfRange { offset, len: self.code.len() }.into()
        })
    }

    // Constants

    pub fn add_constant(&mut self, value: impl Into<Constant>) -> usize {
        self.consts.add(value.into())
    }

    pub fn lookup_const(&self, index: usize) -> AccessResult<Constant> {
        self.consts.get(index)
    }

    /// Current pool size, so the emitting compiler can detect operand
    /// overflow before framing a single-byte constant index.
    pub fn const_count(&self) -> usize {
        self.consts.len()
    }

    // Lines

    pub fn line_for_offset(&self, offset: usize) -> AccessResult<u32> {
        self.lines.line_for(offset)
    }
}
