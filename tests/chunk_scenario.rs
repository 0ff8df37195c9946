use basalt::{Chunk, Constant, OpCode, Disassembler};


/// The canonical smoke scenario: a return, then a constant load framed by
/// the emitting compiler from the index `add_constant` handed back.
fn build_test_chunk() -> Chunk {
    let mut chunk = Chunk::new();

    chunk.write(OpCode::Return, 123);

    let cid = chunk.add_constant(1.2);
    assert_eq!(cid, 0);
    chunk.write(OpCode::LoadConst, 123);
    chunk.write(cid as u8, 123);

    chunk
}

#[test_log::test]
fn end_to_end_write_then_disassemble() {
    let chunk = build_test_chunk();

    assert_eq!(chunk.len(), 3);
    assert_eq!(chunk.lookup_const(0).unwrap(), Constant::Float(1.2));
    assert_eq!(chunk.line_for_offset(0).unwrap(), 123);
    assert_eq!(chunk.line_for_offset(2).unwrap(), 123);

    let text = basalt::disassemble_chunk(&chunk, "test chunk");
    let lines = text.lines().collect::<Vec<&str>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "== test chunk ==");

    assert!(lines[1].starts_with("0000"));
    assert!(lines[1].contains("123"));
    assert!(lines[1].contains("OP_RETURN"));

    assert!(lines[2].starts_with("0001"));
    assert!(lines[2].contains(" | "));  // repeated line suppressed
    assert!(lines[2].contains("OP_LD_CONST"));
    assert!(lines[2].contains("'1.2'"));
}

#[test]
fn single_instruction_decode_reports_next_offset() {
    let chunk = build_test_chunk();

    let (text, next) = basalt::disassemble_instruction(&chunk, 0).unwrap();
    assert!(text.contains("OP_RETURN"));
    assert_eq!(next, 1);

    let (text, next) = basalt::disassemble_instruction(&chunk, 1).unwrap();
    assert!(text.contains("OP_LD_CONST"));
    assert_eq!(next, 3);

    assert!(basalt::disassemble_instruction(&chunk, 3).is_none());
}

#[test_log::test]
fn bytes_read_back_exactly_as_written() {
    let mut chunk = Chunk::new();

    let mut written = Vec::new();
    for index in 0..1000usize {
        let byte = (index % 251) as u8;
        let line = (index / 10) as u32;

        let offset = chunk.write(byte, line);
        assert_eq!(offset, index);
        written.push((byte, line));
    }

    assert_eq!(chunk.len(), written.len());
    for (offset, &(byte, line)) in written.iter().enumerate() {
        assert_eq!(chunk.read_byte(offset).unwrap(), byte);
        assert_eq!(chunk.line_for_offset(offset).unwrap(), line);
    }
}

#[test]
fn constant_indices_accumulate_in_call_order() {
    let mut chunk = Chunk::new();

    for expected in 0..32i64 {
        let index = chunk.add_constant(expected);
        assert_eq!(index, expected as usize);
    }

    assert_eq!(chunk.const_count(), 32);
    for index in 0..32usize {
        assert_eq!(chunk.lookup_const(index).unwrap(), Constant::Integer(index as i64));
    }
}

#[test]
fn malformed_chunk_disassembles_without_panicking() {
    let mut chunk = Chunk::new();
    chunk.write(0xEEu8, 1);                 // unknown opcode
    chunk.write(OpCode::LoadConst, 2);      // truncated: no operand byte

    let dump = Disassembler::new(&chunk).to_string();
    assert!(dump.contains("Unknown!"));
    assert!(dump.contains("truncated operand"));
}
