// Opcodes

// Rust enums are not like C enums! They're more like unions.
// So if we want to convert between them and integer constants easily,
// we need to explictly define each value as a const

// 0x00         Control

const OP_RETURN:        u8 = 0x00;  // return from the current call frame

// 0x10-0x30    Immediate Values

const OP_POP:           u8 = 0x10;

const OP_LD_CONST:      u8 = 0x21;  // load a constant from the chunk's const pool

const OP_NIL:           u8 = 0x30;
const OP_TRUE:          u8 = 0x31;
const OP_FALSE:         u8 = 0x32;

// 0x40         Unary Operations

const OP_NEG:           u8 = 0x40;
const OP_NOT:           u8 = 0x41;

// 0x50         Binary Operations

const OP_ADD:           u8 = 0x50;
const OP_SUB:           u8 = 0x51;
const OP_MUL:           u8 = 0x52;
const OP_DIV:           u8 = 0x53;


#[repr(u8)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OpCode {
    Return = OP_RETURN,

    Pop = OP_POP,
    LoadConst = OP_LD_CONST,

    Nil = OP_NIL,
    True = OP_TRUE,
    False = OP_FALSE,

    Neg = OP_NEG,
    Not = OP_NOT,

    Add = OP_ADD,
    Sub = OP_SUB,
    Mul = OP_MUL,
    Div = OP_DIV,
}

impl OpCode {
    pub fn from_byte(byte: u8) -> Option<OpCode> {
        let opcode = match byte {
            OP_RETURN => Self::Return,

            OP_POP => Self::Pop,
            OP_LD_CONST => Self::LoadConst,

            OP_NIL => Self::Nil,
            OP_TRUE => Self::True,
            OP_FALSE => Self::False,

            OP_NEG => Self::Neg,
            OP_NOT => Self::Not,

            OP_ADD => Self::Add,
            OP_SUB => Self::Sub,
            OP_MUL => Self::Mul,
            OP_DIV => Self::Div,

            _ => return None,
        };
        Some(opcode)
    }

    /// Total encoded width: the opcode byte plus its fixed operand arity.
    /// Consulted identically by the disassembler and the VM dispatch loop.
    pub fn instr_len(&self) -> usize {
        match self {
            Self::LoadConst => 2,
            _ => 1,
        }
    }
}

impl From<OpCode> for u8 {
    fn from(opcode: OpCode) -> Self { opcode as u8 }
}

impl PartialEq<u8> for OpCode {
    fn eq(&self, other: &u8) -> bool { *other == (*self).into() }
}

// For disassembly/debugging
impl std::fmt::Display for OpCode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mnemonic = match *self {
            Self::Return => "OP_RETURN",

            Self::Pop => "OP_POP",
            Self::LoadConst => "OP_LD_CONST",

            Self::Nil => "OP_NIL",
            Self::True => "OP_TRUE",
            Self::False => "OP_FALSE",

            Self::Neg => "OP_NEG",
            Self::Not => "OP_NOT",

            Self::Add => "OP_ADD",
            Self::Sub => "OP_SUB",
            Self::Mul => "OP_MUL",
            Self::Div => "OP_DIV",
        };

        if let Some(width) = fmt.width() {
            write!(fmt, "{:1$}", mnemonic, width)
        } else {
            fmt.write_str(mnemonic)
        }
    }
}
