pub mod utils;

pub mod code;
pub mod debug;

pub use code::{Chunk, OpCode, Constant, ConstantPool};
pub use debug::Disassembler;


/// Render a chunk's full disassembly (header plus one line per
/// instruction) into a new string.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    Disassembler::new(chunk).with_name(name).to_string()
}

/// Decode the single instruction at `offset`, returning its rendered text
/// and the offset of the next instruction. `None` if `offset` is past the
/// end of the chunk.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> Option<(String, usize)> {
    Disassembler::new(chunk)
        .instructions_from(offset)
        .next()
        .map(|instr| (instr.to_string(), instr.next_offset()))
}
