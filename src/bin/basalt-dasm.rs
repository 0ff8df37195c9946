use clap::{Command, Arg};

use basalt::{Chunk, OpCode};
use basalt::debug::Disassembler;

fn main() {
    env_logger::init();

    let app = Command::new("basalt-dasm")
        .version("0.1")
        .about("Bytecode disassembler for the Basalt VM core")
        .arg(
            Arg::new("name")
            .short('n')
            .long("name")
            .help("name shown in the chunk header")
            .value_name("NAME")
        )
        .arg(
            Arg::new("offsets")
            .short('o')
            .help("also print the byte offset each instruction advances to")
        );

    let args = app.get_matches();
    let name = args.value_of("name").unwrap_or("test chunk");

    // No bytecode persistence exists yet, so assemble the demonstration
    // chunk in-process and disassemble that.
    let chunk = build_demo_chunk();
    log::debug!("assembled demo chunk: {} bytes, {} constants", chunk.len(), chunk.const_count());

    if args.is_present("offsets") {
        println!("== {} ==", name);
        for instr in Disassembler::new(&chunk).instructions() {
            println!("{}  -> {:04}", instr, instr.next_offset());
        }
    } else {
        print!("{}", Disassembler::new(&chunk).with_name(name));
    }
}

fn build_demo_chunk() -> Chunk {
    let mut chunk = Chunk::new();

    chunk.write(OpCode::Return, 123);

    let cid = chunk.add_constant(1.2);
    chunk.write(OpCode::LoadConst, 123);
    chunk.write(cid as u8, 123);

    chunk
}
