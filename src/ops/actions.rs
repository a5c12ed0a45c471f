use super::{Alu, R16id, Rot, U3};

/// An 8-bit data register named by an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionRegister {
    #[default]
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// A 16-bit register pair named by an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionPair {
    #[default]
    BC,
    DE,
    HL,
    AF,
    SP,
    PC,
}

/// A branch condition carried by an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionCond {
    #[default]
    NZ,
    Z,
    NC,
    C,
}

/// One machine cycle's worth of CPU work.
///
/// Every opcode expands to a slice of these in [`ACTION_TABLE`]; the slice's
/// first action executes on the same M-cycle as the opcode fetch, so slice
/// length equals the instruction's duration in M-cycles.
///
/// Conditional instructions place the condition on the action that fetches
/// the deciding immediate byte (or on a [`CheckCond`](Self::CheckCond) cycle
/// for `ret <cond>`). A failed condition clears the rest of the queue, which
/// is exactly the hardware's shorter not-taken timing.
///
/// The CPU's `imm` latch doubles as scratch space: immediate fetches fill it
/// and the action that consumes the value clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CpuAction {
    /// A cycle with no externally visible work.
    #[default]
    Internal,
    /// An illegal opcode was fetched; the CPU locks up.
    Hang,
    /// `di`
    DisableInterrupts,
    /// `ei` (takes effect after the following instruction).
    EnableInterrupts,
    /// The tail cycle of `reti`: IME set with no delay.
    EnableInterruptsNow,
    /// `halt`
    Halt,
    /// `stop`
    Stop,
    /// `ld r8, r8` (dst, src).
    LdR8R8(ActionRegister, ActionRegister),
    /// Fetch the low immediate byte.
    ImmLow,
    /// Fetch the high immediate byte.
    ImmHigh,
    /// Fetch a byte straight into a register (`ld r8, u8` tail).
    ImmLowTo(ActionRegister),
    /// Fetch the high immediate byte, then move `imm` into a pair
    /// (`ld r16, u16` tail).
    ImmHighTo(ActionPair),
    /// `r8 = [hl]`
    ReadHlTo(ActionRegister),
    /// `[hl] = r8`
    WriteHlFrom(ActionRegister),
    /// `[hl] = imm.lo` (`ld [hl], u8` tail).
    WriteHlImm,
    /// `a = [r16]`, post-adjusting `hl` for the `hl+`/`hl-` forms.
    ReadPtrToA(R16id),
    /// `[r16] = a`, post-adjusting `hl` for the `hl+`/`hl-` forms.
    WritePtrFromA(R16id),
    /// `r8 = [imm]`
    ReadImm16To(ActionRegister),
    /// `[imm] = r8`
    WriteRegToImm16(ActionRegister),
    /// `r8 = [$FF00 + imm.lo]`
    ReadHalfAddrTo(ActionRegister),
    /// `[$FF00 + imm.lo] = r8`
    WriteRegToHalfAddr(ActionRegister),
    /// `r8 = [$FF00 + c]`
    ReadHighCTo(ActionRegister),
    /// `[$FF00 + c] = r8`
    WriteRegToHighC(ActionRegister),
    /// `[imm] = sp.lo` (`ld [u16], sp`, fourth cycle).
    WriteImmSpLow,
    /// `[imm+1] = sp.hi` (`ld [u16], sp`, final cycle).
    WriteImmSpHigh,
    /// `sp -= 1; [sp] = pair.hi`
    PushHi(ActionPair),
    /// `sp -= 1; [sp] = pair.lo`
    PushLo(ActionPair),
    /// `pair.lo = [sp]; sp += 1` (masked for `af`).
    PopLo(ActionPair),
    /// `pair.hi = [sp]; sp += 1`
    PopHi(ActionPair),
    /// `sp = hl`
    LdSpHl,
    /// `hl = sp + imm.lo as i8`, with the 8-bit H/C flags.
    LdHlSpImm,
    /// `sp = sp + imm.lo as i8`, with the 8-bit H/C flags.
    AddSpImm,
    /// `a = a <op> r8`
    AluR8(Alu, ActionRegister),
    /// `a = a <op> [hl]`
    AluHl(Alu),
    /// Fetch a byte and do `a = a <op> byte`.
    AluImm(Alu),
    /// `inc r8` (Carry untouched).
    IncR8(ActionRegister),
    /// `dec r8` (Carry untouched).
    DecR8(ActionRegister),
    /// `imm.lo = [hl]`, a scratch read for read-modify-write cycles.
    ReadHlImm,
    /// `[hl] = imm.lo + 1`, with `inc` flags.
    IncHlWrite,
    /// `[hl] = imm.lo - 1`, with `dec` flags.
    DecHlWrite,
    /// `inc r16` (no flags).
    IncPair(ActionPair),
    /// `dec r16` (no flags).
    DecPair(ActionPair),
    /// `hl += r16`, with the 16-bit N/H/C flags (Zero untouched).
    AddHlPair(ActionPair),
    /// The one-byte accumulator rotates (`rlca`/`rrca`/`rla`/`rra`); Zero
    /// always cleared.
    RotateA(Rot),
    /// `daa`
    Daa,
    /// `cpl`
    Cpl,
    /// `scf`
    Scf,
    /// `ccf`
    Ccf,
    /// `pc += imm.lo as i8`
    JumpRelative,
    /// Fetch the low immediate byte; abandon the instruction if the
    /// condition fails.
    ImmLowBranch(ActionCond),
    /// Fetch the high immediate byte; abandon the instruction if the
    /// condition fails.
    ImmHighBranch(ActionCond),
    /// An internal cycle that abandons the instruction if the condition
    /// fails (`ret <cond>`).
    CheckCond(ActionCond),
    /// `pc = imm`
    JumpImm,
    /// `pc = hl`
    JumpHl,
    /// The final `call` cycle: push `pc.lo`, then `pc = imm`.
    CallImm,
    /// The final `rst` cycle: push `pc.lo`, then `pc` = the fixed vector.
    Restart(u8),
    /// Fetch and execute the byte after a `$CB` prefix, queueing extra
    /// cycles for the `[hl]` forms.
    CbDispatch,
    /// Test a bit of `[hl]`.
    BitHl(U3),
    /// `[hl] = rot(imm.lo)`, the write-back cycle of a `CB` rotate on `[hl]`.
    RotHlWrite(Rot),
    /// `[hl] = imm.lo` with one bit set or cleared (`set`/`res` on `[hl]`).
    SetBitHlWrite(U3, bool),
}

use ActionCond as Cc;
use ActionPair as P;
use ActionRegister as R;
use CpuAction::*;

/// Per-opcode action lists: `ACTION_TABLE[op]` is everything the CPU does for
/// `op`, one entry per M-cycle.
pub const ACTION_TABLE: [&[CpuAction]; 256] = [
    // 0x00: nop
    &[Internal],
    // 0x01: ld bc, u16
    &[Internal, ImmLow, ImmHighTo(P::BC)],
    // 0x02: ld [bc], a
    &[Internal, WritePtrFromA(R16id::BC)],
    // 0x03: inc bc
    &[Internal, IncPair(P::BC)],
    // 0x04: inc b
    &[IncR8(R::B)],
    // 0x05: dec b
    &[DecR8(R::B)],
    // 0x06: ld b, u8
    &[Internal, ImmLowTo(R::B)],
    // 0x07: rlca
    &[RotateA(Rot::Rlc)],
    // 0x08: ld [u16], sp
    &[Internal, ImmLow, ImmHigh, WriteImmSpLow, WriteImmSpHigh],
    // 0x09: add hl, bc
    &[Internal, AddHlPair(P::BC)],
    // 0x0A: ld a, [bc]
    &[Internal, ReadPtrToA(R16id::BC)],
    // 0x0B: dec bc
    &[Internal, DecPair(P::BC)],
    // 0x0C: inc c
    &[IncR8(R::C)],
    // 0x0D: dec c
    &[DecR8(R::C)],
    // 0x0E: ld c, u8
    &[Internal, ImmLowTo(R::C)],
    // 0x0F: rrca
    &[RotateA(Rot::Rrc)],
    // 0x10: stop
    &[Stop],
    // 0x11: ld de, u16
    &[Internal, ImmLow, ImmHighTo(P::DE)],
    // 0x12: ld [de], a
    &[Internal, WritePtrFromA(R16id::DE)],
    // 0x13: inc de
    &[Internal, IncPair(P::DE)],
    // 0x14: inc d
    &[IncR8(R::D)],
    // 0x15: dec d
    &[DecR8(R::D)],
    // 0x16: ld d, u8
    &[Internal, ImmLowTo(R::D)],
    // 0x17: rla
    &[RotateA(Rot::Rl)],
    // 0x18: jr i8
    &[Internal, ImmLow, JumpRelative],
    // 0x19: add hl, de
    &[Internal, AddHlPair(P::DE)],
    // 0x1A: ld a, [de]
    &[Internal, ReadPtrToA(R16id::DE)],
    // 0x1B: dec de
    &[Internal, DecPair(P::DE)],
    // 0x1C: inc e
    &[IncR8(R::E)],
    // 0x1D: dec e
    &[DecR8(R::E)],
    // 0x1E: ld e, u8
    &[Internal, ImmLowTo(R::E)],
    // 0x1F: rra
    &[RotateA(Rot::RR)],
    // 0x20: jr nz, i8
    &[Internal, ImmLowBranch(Cc::NZ), JumpRelative],
    // 0x21: ld hl, u16
    &[Internal, ImmLow, ImmHighTo(P::HL)],
    // 0x22: ld [hl+], a
    &[Internal, WritePtrFromA(R16id::HLi)],
    // 0x23: inc hl
    &[Internal, IncPair(P::HL)],
    // 0x24: inc h
    &[IncR8(R::H)],
    // 0x25: dec h
    &[DecR8(R::H)],
    // 0x26: ld h, u8
    &[Internal, ImmLowTo(R::H)],
    // 0x27: daa
    &[Daa],
    // 0x28: jr z, i8
    &[Internal, ImmLowBranch(Cc::Z), JumpRelative],
    // 0x29: add hl, hl
    &[Internal, AddHlPair(P::HL)],
    // 0x2A: ld a, [hl+]
    &[Internal, ReadPtrToA(R16id::HLi)],
    // 0x2B: dec hl
    &[Internal, DecPair(P::HL)],
    // 0x2C: inc l
    &[IncR8(R::L)],
    // 0x2D: dec l
    &[DecR8(R::L)],
    // 0x2E: ld l, u8
    &[Internal, ImmLowTo(R::L)],
    // 0x2F: cpl
    &[Cpl],
    // 0x30: jr nc, i8
    &[Internal, ImmLowBranch(Cc::NC), JumpRelative],
    // 0x31: ld sp, u16
    &[Internal, ImmLow, ImmHighTo(P::SP)],
    // 0x32: ld [hl-], a
    &[Internal, WritePtrFromA(R16id::HLd)],
    // 0x33: inc sp
    &[Internal, IncPair(P::SP)],
    // 0x34: inc [hl]
    &[Internal, ReadHlImm, IncHlWrite],
    // 0x35: dec [hl]
    &[Internal, ReadHlImm, DecHlWrite],
    // 0x36: ld [hl], u8
    &[Internal, ImmLow, WriteHlImm],
    // 0x37: scf
    &[Scf],
    // 0x38: jr c, i8
    &[Internal, ImmLowBranch(Cc::C), JumpRelative],
    // 0x39: add hl, sp
    &[Internal, AddHlPair(P::SP)],
    // 0x3A: ld a, [hl-]
    &[Internal, ReadPtrToA(R16id::HLd)],
    // 0x3B: dec sp
    &[Internal, DecPair(P::SP)],
    // 0x3C: inc a
    &[IncR8(R::A)],
    // 0x3D: dec a
    &[DecR8(R::A)],
    // 0x3E: ld a, u8
    &[Internal, ImmLowTo(R::A)],
    // 0x3F: ccf
    &[Ccf],
    // 0x40..=0x47: ld b, r8
    &[LdR8R8(R::B, R::B)],
    &[LdR8R8(R::B, R::C)],
    &[LdR8R8(R::B, R::D)],
    &[LdR8R8(R::B, R::E)],
    &[LdR8R8(R::B, R::H)],
    &[LdR8R8(R::B, R::L)],
    &[Internal, ReadHlTo(R::B)],
    &[LdR8R8(R::B, R::A)],
    // 0x48..=0x4F: ld c, r8
    &[LdR8R8(R::C, R::B)],
    &[LdR8R8(R::C, R::C)],
    &[LdR8R8(R::C, R::D)],
    &[LdR8R8(R::C, R::E)],
    &[LdR8R8(R::C, R::H)],
    &[LdR8R8(R::C, R::L)],
    &[Internal, ReadHlTo(R::C)],
    &[LdR8R8(R::C, R::A)],
    // 0x50..=0x57: ld d, r8
    &[LdR8R8(R::D, R::B)],
    &[LdR8R8(R::D, R::C)],
    &[LdR8R8(R::D, R::D)],
    &[LdR8R8(R::D, R::E)],
    &[LdR8R8(R::D, R::H)],
    &[LdR8R8(R::D, R::L)],
    &[Internal, ReadHlTo(R::D)],
    &[LdR8R8(R::D, R::A)],
    // 0x58..=0x5F: ld e, r8
    &[LdR8R8(R::E, R::B)],
    &[LdR8R8(R::E, R::C)],
    &[LdR8R8(R::E, R::D)],
    &[LdR8R8(R::E, R::E)],
    &[LdR8R8(R::E, R::H)],
    &[LdR8R8(R::E, R::L)],
    &[Internal, ReadHlTo(R::E)],
    &[LdR8R8(R::E, R::A)],
    // 0x60..=0x67: ld h, r8
    &[LdR8R8(R::H, R::B)],
    &[LdR8R8(R::H, R::C)],
    &[LdR8R8(R::H, R::D)],
    &[LdR8R8(R::H, R::E)],
    &[LdR8R8(R::H, R::H)],
    &[LdR8R8(R::H, R::L)],
    &[Internal, ReadHlTo(R::H)],
    &[LdR8R8(R::H, R::A)],
    // 0x68..=0x6F: ld l, r8
    &[LdR8R8(R::L, R::B)],
    &[LdR8R8(R::L, R::C)],
    &[LdR8R8(R::L, R::D)],
    &[LdR8R8(R::L, R::E)],
    &[LdR8R8(R::L, R::H)],
    &[LdR8R8(R::L, R::L)],
    &[Internal, ReadHlTo(R::L)],
    &[LdR8R8(R::L, R::A)],
    // 0x70..=0x77: ld [hl], r8 (0x76 is halt)
    &[Internal, WriteHlFrom(R::B)],
    &[Internal, WriteHlFrom(R::C)],
    &[Internal, WriteHlFrom(R::D)],
    &[Internal, WriteHlFrom(R::E)],
    &[Internal, WriteHlFrom(R::H)],
    &[Internal, WriteHlFrom(R::L)],
    &[Halt],
    &[Internal, WriteHlFrom(R::A)],
    // 0x78..=0x7F: ld a, r8
    &[LdR8R8(R::A, R::B)],
    &[LdR8R8(R::A, R::C)],
    &[LdR8R8(R::A, R::D)],
    &[LdR8R8(R::A, R::E)],
    &[LdR8R8(R::A, R::H)],
    &[LdR8R8(R::A, R::L)],
    &[Internal, ReadHlTo(R::A)],
    &[LdR8R8(R::A, R::A)],
    // 0x80..=0x87: add a, r8
    &[AluR8(Alu::Add, R::B)],
    &[AluR8(Alu::Add, R::C)],
    &[AluR8(Alu::Add, R::D)],
    &[AluR8(Alu::Add, R::E)],
    &[AluR8(Alu::Add, R::H)],
    &[AluR8(Alu::Add, R::L)],
    &[Internal, AluHl(Alu::Add)],
    &[AluR8(Alu::Add, R::A)],
    // 0x88..=0x8F: adc a, r8
    &[AluR8(Alu::Adc, R::B)],
    &[AluR8(Alu::Adc, R::C)],
    &[AluR8(Alu::Adc, R::D)],
    &[AluR8(Alu::Adc, R::E)],
    &[AluR8(Alu::Adc, R::H)],
    &[AluR8(Alu::Adc, R::L)],
    &[Internal, AluHl(Alu::Adc)],
    &[AluR8(Alu::Adc, R::A)],
    // 0x90..=0x97: sub a, r8
    &[AluR8(Alu::Sub, R::B)],
    &[AluR8(Alu::Sub, R::C)],
    &[AluR8(Alu::Sub, R::D)],
    &[AluR8(Alu::Sub, R::E)],
    &[AluR8(Alu::Sub, R::H)],
    &[AluR8(Alu::Sub, R::L)],
    &[Internal, AluHl(Alu::Sub)],
    &[AluR8(Alu::Sub, R::A)],
    // 0x98..=0x9F: sbc a, r8
    &[AluR8(Alu::Sbc, R::B)],
    &[AluR8(Alu::Sbc, R::C)],
    &[AluR8(Alu::Sbc, R::D)],
    &[AluR8(Alu::Sbc, R::E)],
    &[AluR8(Alu::Sbc, R::H)],
    &[AluR8(Alu::Sbc, R::L)],
    &[Internal, AluHl(Alu::Sbc)],
    &[AluR8(Alu::Sbc, R::A)],
    // 0xA0..=0xA7: and a, r8
    &[AluR8(Alu::And, R::B)],
    &[AluR8(Alu::And, R::C)],
    &[AluR8(Alu::And, R::D)],
    &[AluR8(Alu::And, R::E)],
    &[AluR8(Alu::And, R::H)],
    &[AluR8(Alu::And, R::L)],
    &[Internal, AluHl(Alu::And)],
    &[AluR8(Alu::And, R::A)],
    // 0xA8..=0xAF: xor a, r8
    &[AluR8(Alu::Xor, R::B)],
    &[AluR8(Alu::Xor, R::C)],
    &[AluR8(Alu::Xor, R::D)],
    &[AluR8(Alu::Xor, R::E)],
    &[AluR8(Alu::Xor, R::H)],
    &[AluR8(Alu::Xor, R::L)],
    &[Internal, AluHl(Alu::Xor)],
    &[AluR8(Alu::Xor, R::A)],
    // 0xB0..=0xB7: or a, r8
    &[AluR8(Alu::Or, R::B)],
    &[AluR8(Alu::Or, R::C)],
    &[AluR8(Alu::Or, R::D)],
    &[AluR8(Alu::Or, R::E)],
    &[AluR8(Alu::Or, R::H)],
    &[AluR8(Alu::Or, R::L)],
    &[Internal, AluHl(Alu::Or)],
    &[AluR8(Alu::Or, R::A)],
    // 0xB8..=0xBF: cp a, r8
    &[AluR8(Alu::Cp, R::B)],
    &[AluR8(Alu::Cp, R::C)],
    &[AluR8(Alu::Cp, R::D)],
    &[AluR8(Alu::Cp, R::E)],
    &[AluR8(Alu::Cp, R::H)],
    &[AluR8(Alu::Cp, R::L)],
    &[Internal, AluHl(Alu::Cp)],
    &[AluR8(Alu::Cp, R::A)],
    // 0xC0: ret nz
    &[Internal, CheckCond(Cc::NZ), PopLo(P::PC), PopHi(P::PC), Internal],
    // 0xC1: pop bc
    &[Internal, PopLo(P::BC), PopHi(P::BC)],
    // 0xC2: jp nz, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::NZ), JumpImm],
    // 0xC3: jp u16
    &[Internal, ImmLow, ImmHigh, JumpImm],
    // 0xC4: call nz, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::NZ), Internal, PushHi(P::PC), CallImm],
    // 0xC5: push bc
    &[Internal, Internal, PushHi(P::BC), PushLo(P::BC)],
    // 0xC6: add a, u8
    &[Internal, AluImm(Alu::Add)],
    // 0xC7: rst $00
    &[Internal, Internal, PushHi(P::PC), Restart(0x00)],
    // 0xC8: ret z
    &[Internal, CheckCond(Cc::Z), PopLo(P::PC), PopHi(P::PC), Internal],
    // 0xC9: ret
    &[Internal, PopLo(P::PC), PopHi(P::PC), Internal],
    // 0xCA: jp z, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::Z), JumpImm],
    // 0xCB: prefix
    &[Internal, CbDispatch],
    // 0xCC: call z, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::Z), Internal, PushHi(P::PC), CallImm],
    // 0xCD: call u16
    &[Internal, ImmLow, ImmHigh, Internal, PushHi(P::PC), CallImm],
    // 0xCE: adc a, u8
    &[Internal, AluImm(Alu::Adc)],
    // 0xCF: rst $08
    &[Internal, Internal, PushHi(P::PC), Restart(0x08)],
    // 0xD0: ret nc
    &[Internal, CheckCond(Cc::NC), PopLo(P::PC), PopHi(P::PC), Internal],
    // 0xD1: pop de
    &[Internal, PopLo(P::DE), PopHi(P::DE)],
    // 0xD2: jp nc, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::NC), JumpImm],
    // 0xD3: illegal
    &[Hang],
    // 0xD4: call nc, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::NC), Internal, PushHi(P::PC), CallImm],
    // 0xD5: push de
    &[Internal, Internal, PushHi(P::DE), PushLo(P::DE)],
    // 0xD6: sub a, u8
    &[Internal, AluImm(Alu::Sub)],
    // 0xD7: rst $10
    &[Internal, Internal, PushHi(P::PC), Restart(0x10)],
    // 0xD8: ret c
    &[Internal, CheckCond(Cc::C), PopLo(P::PC), PopHi(P::PC), Internal],
    // 0xD9: reti
    &[Internal, PopLo(P::PC), PopHi(P::PC), EnableInterruptsNow],
    // 0xDA: jp c, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::C), JumpImm],
    // 0xDB: illegal
    &[Hang],
    // 0xDC: call c, u16
    &[Internal, ImmLow, ImmHighBranch(Cc::C), Internal, PushHi(P::PC), CallImm],
    // 0xDD: illegal
    &[Hang],
    // 0xDE: sbc a, u8
    &[Internal, AluImm(Alu::Sbc)],
    // 0xDF: rst $18
    &[Internal, Internal, PushHi(P::PC), Restart(0x18)],
    // 0xE0: ldh [u8], a
    &[Internal, ImmLow, WriteRegToHalfAddr(R::A)],
    // 0xE1: pop hl
    &[Internal, PopLo(P::HL), PopHi(P::HL)],
    // 0xE2: ldh [c], a
    &[Internal, WriteRegToHighC(R::A)],
    // 0xE3: illegal
    &[Hang],
    // 0xE4: illegal
    &[Hang],
    // 0xE5: push hl
    &[Internal, Internal, PushHi(P::HL), PushLo(P::HL)],
    // 0xE6: and a, u8
    &[Internal, AluImm(Alu::And)],
    // 0xE7: rst $20
    &[Internal, Internal, PushHi(P::PC), Restart(0x20)],
    // 0xE8: add sp, i8
    &[Internal, ImmLow, Internal, AddSpImm],
    // 0xE9: jp hl
    &[JumpHl],
    // 0xEA: ld [u16], a
    &[Internal, ImmLow, ImmHigh, WriteRegToImm16(R::A)],
    // 0xEB: illegal
    &[Hang],
    // 0xEC: illegal
    &[Hang],
    // 0xED: illegal
    &[Hang],
    // 0xEE: xor a, u8
    &[Internal, AluImm(Alu::Xor)],
    // 0xEF: rst $28
    &[Internal, Internal, PushHi(P::PC), Restart(0x28)],
    // 0xF0: ldh a, [u8]
    &[Internal, ImmLow, ReadHalfAddrTo(R::A)],
    // 0xF1: pop af
    &[Internal, PopLo(P::AF), PopHi(P::AF)],
    // 0xF2: ldh a, [c]
    &[Internal, ReadHighCTo(R::A)],
    // 0xF3: di
    &[DisableInterrupts],
    // 0xF4: illegal
    &[Hang],
    // 0xF5: push af
    &[Internal, Internal, PushHi(P::AF), PushLo(P::AF)],
    // 0xF6: or a, u8
    &[Internal, AluImm(Alu::Or)],
    // 0xF7: rst $30
    &[Internal, Internal, PushHi(P::PC), Restart(0x30)],
    // 0xF8: ld hl, sp+i8
    &[Internal, ImmLow, LdHlSpImm],
    // 0xF9: ld sp, hl
    &[Internal, LdSpHl],
    // 0xFA: ld a, [u16]
    &[Internal, ImmLow, ImmHigh, ReadImm16To(R::A)],
    // 0xFB: ei
    &[EnableInterrupts],
    // 0xFC: illegal
    &[Hang],
    // 0xFD: illegal
    &[Hang],
    // 0xFE: cp a, u8
    &[Internal, AluImm(Alu::Cp)],
    // 0xFF: rst $38
    &[Internal, Internal, PushHi(P::PC), Restart(0x38)],
];
