use bitfrob::{u8_get_bit, u8_get_value};

/// A 2-bit field extracted from an opcode byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum U2 {
    #[default]
    _0 = 0,
    _1 = 1,
    _2 = 2,
    _3 = 3,
}

impl U2 {
    /// Reads the two bits starting at `base` out of `byte`.
    pub const fn new_from_byte(base: u32, byte: u8) -> Self {
        match u8_get_value(base, base + 1, byte) {
            0 => Self::_0,
            1 => Self::_1,
            2 => Self::_2,
            3 => Self::_3,
            _ => unimplemented!(),
        }
    }
}

/// A 3-bit field extracted from an opcode byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum U3 {
    #[default]
    _0 = 0,
    _1 = 1,
    _2 = 2,
    _3 = 3,
    _4 = 4,
    _5 = 5,
    _6 = 6,
    _7 = 7,
}

impl U3 {
    /// Reads the three bits starting at `base` out of `byte`.
    pub const fn new_from_byte(base: u32, byte: u8) -> Self {
        match u8_get_value(base, base + 2, byte) {
            0 => Self::_0,
            1 => Self::_1,
            2 => Self::_2,
            3 => Self::_3,
            4 => Self::_4,
            5 => Self::_5,
            6 => Self::_6,
            7 => Self::_7,
            _ => unimplemented!(),
        }
    }
}

/// An 8-bit operand: a data register or memory at `hl`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum R8m {
    #[default]
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    HLm = 6,
    A = 7,
}

impl R8m {
    pub const fn new(u: U3) -> Self {
        match u {
            U3::_0 => Self::B,
            U3::_1 => Self::C,
            U3::_2 => Self::D,
            U3::_3 => Self::E,
            U3::_4 => Self::H,
            U3::_5 => Self::L,
            U3::_6 => Self::HLm,
            U3::_7 => Self::A,
        }
    }
}

/// A register pair where the fourth slot is `sp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum R16p {
    #[default]
    BC = 0,
    DE = 1,
    HL = 2,
    SP = 3,
}

impl R16p {
    pub const fn new(u: U2) -> Self {
        match u {
            U2::_0 => Self::BC,
            U2::_1 => Self::DE,
            U2::_2 => Self::HL,
            U2::_3 => Self::SP,
        }
    }
}

/// A register pair where the fourth slot is `af` (push/pop).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum R16f {
    #[default]
    BC = 0,
    DE = 1,
    HL = 2,
    AF = 3,
}

impl R16f {
    pub const fn new(u: U2) -> Self {
        match u {
            U2::_0 => Self::BC,
            U2::_1 => Self::DE,
            U2::_2 => Self::HL,
            U2::_3 => Self::AF,
        }
    }
}

/// A memory pointer: `bc`, `de`, or `hl` with post-increment/decrement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum R16id {
    #[default]
    BC = 0,
    DE = 1,
    HLi = 2,
    HLd = 3,
}

impl R16id {
    pub const fn new(u: U2) -> Self {
        match u {
            U2::_0 => Self::BC,
            U2::_1 => Self::DE,
            U2::_2 => Self::HLi,
            U2::_3 => Self::HLd,
        }
    }
}

/// A branch condition over the Zero and Carry flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cond {
    #[default]
    NZ = 0,
    Z = 1,
    NC = 2,
    C = 3,
}

impl Cond {
    pub const fn new(u: u8) -> Self {
        match u {
            0 => Self::NZ,
            1 => Self::Z,
            2 => Self::NC,
            3 => Self::C,
            _ => panic!(),
        }
    }
}

/// The eight accumulator ALU operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alu {
    #[default]
    Add = 0,
    Adc = 1,
    Sub = 2,
    Sbc = 3,
    And = 4,
    Xor = 5,
    Or = 6,
    Cp = 7,
}

impl Alu {
    pub const fn new(u: U3) -> Self {
        match u {
            U3::_0 => Self::Add,
            U3::_1 => Self::Adc,
            U3::_2 => Self::Sub,
            U3::_3 => Self::Sbc,
            U3::_4 => Self::And,
            U3::_5 => Self::Xor,
            U3::_6 => Self::Or,
            U3::_7 => Self::Cp,
        }
    }
}

/// The eight rotate/shift operations of the `CB` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rot {
    #[default]
    Rlc = 0,
    Rrc = 1,
    Rl = 2,
    RR = 3,
    Sla = 4,
    Sra = 5,
    Swap = 6,
    Srl = 7,
}

impl Rot {
    pub const fn new(u: U3) -> Self {
        match u {
            U3::_0 => Self::Rlc,
            U3::_1 => Self::Rrc,
            U3::_2 => Self::Rl,
            U3::_3 => Self::RR,
            U3::_4 => Self::Sla,
            U3::_5 => Self::Sra,
            U3::_6 => Self::Swap,
            U3::_7 => Self::Srl,
        }
    }
}

/// A `CB`-prefixed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefixedOp {
    RotR8m(Rot, R8m),
    Bit(U3, R8m),
    Res(U3, R8m),
    Set(U3, R8m),
}

impl Default for PrefixedOp {
    fn default() -> Self {
        PrefixedOp::RotR8m(Rot::default(), R8m::default())
    }
}

impl PrefixedOp {
    /// Decodes the byte that follows a `$CB` prefix.
    pub const fn new(byte: u8) -> Self {
        let x = U2::new_from_byte(6, byte);
        let y = U3::new_from_byte(3, byte);
        let z = U3::new_from_byte(0, byte);
        match x {
            U2::_0 => Self::RotR8m(Rot::new(y), R8m::new(z)),
            U2::_1 => Self::Bit(y, R8m::new(z)),
            U2::_2 => Self::Res(y, R8m::new(z)),
            U2::_3 => Self::Set(y, R8m::new(z)),
        }
    }
}

/// The eleven opcode bytes with no assigned instruction.
///
/// Executing one of these locks up the hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IllegalOpByte {
    #[default]
    D3 = 0xD3,
    DB = 0xDB,
    DD = 0xDD,
    E3 = 0xE3,
    E4 = 0xE4,
    EB = 0xEB,
    EC = 0xEC,
    ED = 0xED,
    F4 = 0xF4,
    FC = 0xFC,
    FD = 0xFD,
}

/// The structural decode of an unprefixed opcode.
///
/// Immediate payloads decode as zero here; the action machinery fetches the
/// real bytes when the instruction executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    /// `nop`
    #[default]
    Nop,
    /// `ld [<u16>], sp`
    LdImm16SP(u16),
    /// `stop`
    Stop,
    /// `jr <i8>`
    JumpRelative(i8),
    /// `jr cond, <i8>`
    JumpRelativeCond(Cond, i8),
    /// `add hl, <r16p>`
    AddHLR16p(R16p),
    /// `ld <r16p>, <u16>`
    LdR16pImm16(R16p, u16),
    /// `ld a, [<r16id>]` (true) OR `ld [<r16id>], a` (false)
    LdR16idToA(R16id, bool),
    /// `dec <r16p>` (true) OR `inc <r16p>` (false)
    DecIncR16p(R16p, bool),
    /// `dec <r8m>` (true) OR `inc <r8m>` (false)
    DecIncR8m(R8m, bool),
    /// `ld <r8m>, <u8>`
    LdR8mImm8(R8m, u8),
    /// `rlca`
    Rlca,
    /// `rrca`
    Rrca,
    /// `rla`
    Rla,
    /// `rra`
    Rra,
    /// `daa`
    Daa,
    /// `cpl`
    Cpl,
    /// `scf`
    Scf,
    /// `ccf`
    Ccf,
    /// `halt`
    Halt,
    /// `ld <r8m>, <r8m>`
    LdR8mR8m(R8m, R8m),
    /// `<op> a, <r8m>`
    AluR8m(Alu, R8m),
    /// `ret <cond>`
    ReturnCond(Cond),
    /// `ldh a, [<u8>]` (true) or `ldh [<u8>], a` (false)
    LdhImm8ToA(u8, bool),
    /// `add sp, <i8>`
    AddSPImm8(i8),
    /// `ld hl, sp+<i8>`
    LdHLSPImm8(i8),
    /// `pop <r16f>`
    Pop(R16f),
    /// `ret`
    Return,
    /// `reti`
    ReturnIrq,
    /// `jp hl`
    JumpHL,
    /// `ld sp, hl`
    LdSPHL,
    /// `jp <cond>, <u16>`
    JumpCond(Cond, u16),
    /// `ldh a, [c]` (true) or `ldh [c], a` (false)
    LdhCToA(bool),
    /// `ld a, [<u16>]` (true) or `ld [<u16>], a` (false)
    LdImm16ToA(bool),
    /// `jp <u16>`
    JumpImm16(u16),
    /// rot, bit, res, set
    Cb(PrefixedOp),
    /// `di`
    DI,
    /// `ei`
    EI,
    /// `call <cond>, <u16>`
    CallCond(Cond, u16),
    /// `push <r16p>`
    Push(R16p),
    /// `call <u16>`
    Call(u16),
    /// `<op> a, <u8>`
    AluImm8(Alu, u8),
    /// `rst <u8>` (only multiples of 8 can be restarted to)
    Restart(U3),
    /// A byte that isn't a legal op code.
    Illegal(IllegalOpByte),
}

impl Instruction {
    /// Decodes any opcode byte; total over all 256 values.
    pub fn new(op_code: u8) -> Self {
        let x = U2::new_from_byte(6, op_code);
        let y = U3::new_from_byte(3, op_code);
        let z = U3::new_from_byte(0, op_code);
        let p = U2::new_from_byte(4, op_code);
        let q = u8_get_bit(3, op_code);
        //
        match x {
            U2::_0 => match z {
                U3::_0 => match y {
                    U3::_0 => Self::Nop,
                    U3::_1 => Self::LdImm16SP(0),
                    U3::_2 => Self::Stop,
                    U3::_3 => Self::JumpRelative(0),
                    U3::_4 | U3::_5 | U3::_6 | U3::_7 => {
                        Self::JumpRelativeCond(Cond::new((y as u8) - 4), 0)
                    }
                },
                U3::_1 => {
                    if q {
                        Self::AddHLR16p(R16p::new(p))
                    } else {
                        Self::LdR16pImm16(R16p::new(p), 0)
                    }
                }
                U3::_2 => Self::LdR16idToA(R16id::new(p), q),
                U3::_3 => Self::DecIncR16p(R16p::new(p), q),
                U3::_4 => Self::DecIncR8m(R8m::new(y), false),
                U3::_5 => Self::DecIncR8m(R8m::new(y), true),
                U3::_6 => Self::LdR8mImm8(R8m::new(y), 0),
                U3::_7 => match y {
                    U3::_0 => Self::Rlca,
                    U3::_1 => Self::Rrca,
                    U3::_2 => Self::Rla,
                    U3::_3 => Self::Rra,
                    U3::_4 => Self::Daa,
                    U3::_5 => Self::Cpl,
                    U3::_6 => Self::Scf,
                    U3::_7 => Self::Ccf,
                },
            },
            U2::_1 => {
                if (z as u8 == 6) & (y as u8 == 6) {
                    Self::Halt
                } else {
                    Self::LdR8mR8m(R8m::new(y), R8m::new(z))
                }
            }
            U2::_2 => Self::AluR8m(Alu::new(y), R8m::new(z)),
            U2::_3 => match z {
                U3::_0 => match y {
                    U3::_0 | U3::_1 | U3::_2 | U3::_3 => Self::ReturnCond(Cond::new(y as u8)),
                    U3::_4 => Self::LdhImm8ToA(0, false),
                    U3::_5 => Self::AddSPImm8(0),
                    U3::_6 => Self::LdhImm8ToA(0, true),
                    U3::_7 => Self::LdHLSPImm8(0),
                },
                U3::_1 => {
                    if q {
                        match p {
                            U2::_0 => Self::Return,
                            U2::_1 => Self::ReturnIrq,
                            U2::_2 => Self::JumpHL,
                            U2::_3 => Self::LdSPHL,
                        }
                    } else {
                        Self::Pop(R16f::new(p))
                    }
                }
                U3::_2 => match y {
                    U3::_0 | U3::_1 | U3::_2 | U3::_3 => Self::JumpCond(Cond::new(y as u8), 0),
                    U3::_4 => Self::LdhCToA(false),
                    U3::_5 => Self::LdImm16ToA(false),
                    U3::_6 => Self::LdhCToA(true),
                    U3::_7 => Self::LdImm16ToA(true),
                },
                U3::_3 => match y {
                    U3::_0 => Self::JumpImm16(0),
                    U3::_1 => Self::Cb(PrefixedOp::default()),
                    U3::_2 => Self::Illegal(IllegalOpByte::D3),
                    U3::_3 => Self::Illegal(IllegalOpByte::DB),
                    U3::_4 => Self::Illegal(IllegalOpByte::E3),
                    U3::_5 => Self::Illegal(IllegalOpByte::EB),
                    U3::_6 => Self::DI,
                    U3::_7 => Self::EI,
                },
                U3::_4 => match y {
                    U3::_0 | U3::_1 | U3::_2 | U3::_3 => Self::CallCond(Cond::new(y as u8), 0),
                    U3::_4 => Self::Illegal(IllegalOpByte::E4),
                    U3::_5 => Self::Illegal(IllegalOpByte::EC),
                    U3::_6 => Self::Illegal(IllegalOpByte::F4),
                    U3::_7 => Self::Illegal(IllegalOpByte::FC),
                },
                U3::_5 => {
                    if q {
                        match p {
                            U2::_0 => Self::Call(0),
                            U2::_1 => Self::Illegal(IllegalOpByte::DD),
                            U2::_2 => Self::Illegal(IllegalOpByte::ED),
                            U2::_3 => Self::Illegal(IllegalOpByte::FD),
                        }
                    } else {
                        Self::Push(R16p::new(p))
                    }
                }
                U3::_6 => Self::AluImm8(Alu::new(y), 0),
                U3::_7 => Self::Restart(y),
            },
        }
    }
}

/// The byte length of an unprefixed instruction (opcode plus immediates).
pub fn instruction_length(op_code: u8) -> usize {
    let x = U2::new_from_byte(6, op_code);
    let y = U3::new_from_byte(3, op_code);
    let z = U3::new_from_byte(0, op_code);
    let p = U2::new_from_byte(4, op_code);
    let q = u8_get_bit(3, op_code);
    //
    match x {
        U2::_0 => match z {
            U3::_0 => match y {
                U3::_0 | U3::_2 => 1,
                U3::_1 => 3,
                U3::_3 | U3::_4 | U3::_5 | U3::_6 | U3::_7 => 2,
            },
            U3::_1 => {
                if q {
                    1
                } else {
                    3
                }
            }
            U3::_6 => 2,
            U3::_2 | U3::_3 | U3::_4 | U3::_5 | U3::_7 => 1,
        },
        U2::_1 | U2::_2 => 1,
        U2::_3 => match z {
            U3::_0 => match y {
                U3::_0 | U3::_1 | U3::_2 | U3::_3 => 1,
                U3::_4 | U3::_5 | U3::_6 | U3::_7 => 2,
            },
            U3::_1 | U3::_5 if q => match p {
                U2::_0 if z as u8 == 5 => 3,
                _ => 1,
            },
            U3::_1 | U3::_5 => 1,
            U3::_2 => match y {
                // `ld [u16], a` and `ld a, [u16]` carry a full address.
                U3::_0 | U3::_1 | U3::_2 | U3::_3 | U3::_5 | U3::_7 => 3,
                U3::_4 | U3::_6 => 1,
            },
            U3::_4 => match y {
                U3::_0 | U3::_1 | U3::_2 | U3::_3 => 3,
                U3::_4 | U3::_5 | U3::_6 | U3::_7 => 1,
            },
            U3::_3 => match y {
                U3::_0 => 3,
                U3::_1 => 2,
                U3::_2 | U3::_3 | U3::_4 | U3::_5 | U3::_6 | U3::_7 => 1,
            },
            U3::_6 => 2,
            U3::_7 => 1,
        },
    }
}
