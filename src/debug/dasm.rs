use std::fmt;
use std::fmt::Formatter;

use crate::code::{Chunk, OpCode};


/// Renders a human-readable instruction trace of a chunk, for debugging.
/// Purely read-only: decoding never touches the chunk and never panics on
/// malformed bytecode. Unknown opcodes and truncated operands degrade to
/// diagnostic lines instead.
pub struct Disassembler<'c> {
    chunk: &'c Chunk,
    name: Option<&'c str>,
}

impl<'c> Disassembler<'c> {
    pub fn new(chunk: &'c Chunk) -> Self {
        Self { chunk, name: None }
    }

    pub fn with_name(mut self, name: &'c str) -> Self {
        self.name.replace(name); self
    }

    /// Lazily decodes instructions in offset order, starting at offset 0.
    pub fn instructions(&self) -> Instructions<'c> {
        self.instructions_from(0)
    }

    pub fn instructions_from(&self, offset: usize) -> Instructions<'c> {
        Instructions {
            chunk: self.chunk,
            offset,
            last_line: None,
        }
    }
}

impl fmt::Display for Disassembler<'_> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name {
            writeln!(fmt, "== {} ==", name)?;
        }
        for instr in self.instructions() {
            writeln!(fmt, "{}", instr)?;
        }
        Ok(())
    }
}


/// Iterator over the decoded instructions of a chunk.
pub struct Instructions<'c> {
    chunk: &'c Chunk,
    offset: usize,
    last_line: Option<u32>,
}

impl<'c> Iterator for Instructions<'c> {
    type Item = Instruction<'c>;

    fn next(&mut self) -> Option<Instruction<'c>> {
        if self.offset >= self.chunk.len() {
            return None;
        }

        let instr = Instruction {
            chunk: self.chunk,
            offset: self.offset,
            last_line: self.last_line,
        };

        self.last_line = self.chunk.line_for_offset(self.offset).ok();
        self.offset = instr.next_offset();
        Some(instr)
    }
}


/// A single decoded instruction. Rendering happens in `Display`, so a
/// dump stays lazy until somebody actually formats it.
pub struct Instruction<'c> {
    chunk: &'c Chunk,
    offset: usize,
    last_line: Option<u32>,
}

impl Instruction<'_> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of the instruction following this one. Undecodable bytes are
    /// treated as 1-byte-wide; a truncated trailing operand consumes the
    /// rest of the chunk so decoding never reads past the end.
    pub fn next_offset(&self) -> usize {
        let bytes = &self.chunk.bytes()[self.offset..];

        match OpCode::from_byte(bytes[0]) {
            None => self.offset + 1,
            Some(opcode) if bytes.len() < opcode.instr_len() => self.chunk.len(),
            Some(opcode) => self.offset + opcode.instr_len(),
        }
    }

    fn write_operands(&self, fmt: &mut Formatter<'_>, opcode: OpCode, bytes: &[u8]) -> fmt::Result {
        match opcode {
            OpCode::LoadConst => {
                let cid = bytes[1];
                write!(fmt, "{:16} {: >4}    ", opcode, cid)?;

                match self.chunk.lookup_const(usize::from(cid)) {
                    Ok(value) => write!(fmt, "{}", value),
                    Err(..) => write!(fmt, "<invalid constant>"),
                }
            },
            _ => write!(fmt, "{:16}", opcode),
        }
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:04} ", self.offset)?;

        match self.chunk.line_for_offset(self.offset).ok() {
            Some(line) if self.last_line == Some(line) => write!(fmt, "   | ")?,
            Some(line) => write!(fmt, "{: >4} ", line)?,
            None => write!(fmt, "   ? ")?,  // line table out of sync
        }

        let bytes = &self.chunk.bytes()[self.offset..];
        let opcode = match OpCode::from_byte(bytes[0]) {
            Some(opcode) => opcode,
            None => return write!(fmt, "Unknown! {:#04x}", bytes[0]),
        };

        if bytes.len() < opcode.instr_len() {
            return write!(fmt, "{:16} <truncated operand>", opcode);
        }

        self.write_operands(fmt, opcode, bytes)
    }
}
