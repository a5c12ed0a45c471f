use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::slice;

use bitfrob::u8_with_bit;
use bytemuck::cast_slice_mut;
use log::{trace, warn};
use tinyvec::ArrayVec;

use crate::bus::{DataBus, IRQ_ENABLE_ADDR, IRQ_FLAG_ADDR};
use crate::ops::{
    ACTION_TABLE, ActionCond, ActionPair, ActionRegister, Alu, CpuAction, DISASSEMBLY_TABLE,
    PrefixedOp, R8m, R16id, Rot, U3,
};
use crate::reg::{Reg8, Reg16, RegFlags};

/// The deepest any opcode's action queue gets (`call`, six M-cycles).
const QUEUE_DEPTH: usize = 8;

/// Simulates the Game Boy's LR35902 CPU.
///
/// This is the view of the CPU with 16-bit registers. To access the 8-bit
/// registers, there's a [`Deref`] impl to [`CpuByteFields`], so any data
/// register reads in either width. The `Deref` borrows the entire struct,
/// which rules out split borrows across the two views, but a borrow never
/// needs to outlive a single statement here.
///
/// * See also: [Pan Docs: CPU Registers and Flags](https://gbdev.io/pandocs/CPU_Registers_and_Flags.html)
#[derive(Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Cpu {
    pub af: Reg16,
    pub bc: Reg16,
    pub de: Reg16,
    pub hl: Reg16,
    pub sp: Reg16,
    pub pc: Reg16,
    pub t_cycles: u32,
    pub action_queue: ArrayVec<[CpuAction; QUEUE_DEPTH]>,
    /// The immediate latch; also scratch space for read-modify-write cycles.
    pub imm: u16,
    /// The interrupt master enable flip-flop.
    pub ime: bool,
    /// Set by `ei`; promoted to `ime` one instruction later.
    pub ime_pending: bool,
    pub halted: bool,
    pub stopped: bool,
    /// An illegal opcode was executed; the CPU is locked up.
    pub hung: bool,
}

/// A view of the CPU with the data registers broken into individual bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
// To support big-endian the pairs would swap; until someone asks for
// big-endian it's better not to maintain two near-identical structs.
#[cfg(target_endian = "little")]
pub struct CpuByteFields {
    pub flags: RegFlags,
    pub a: Reg8,
    pub c: Reg8,
    pub b: Reg8,
    pub e: Reg8,
    pub d: Reg8,
    pub l: Reg8,
    pub h: Reg8,
    pub sp: Reg16,
    pub pc: Reg16,
    pub t_cycles: u32,
    pub action_queue: ArrayVec<[CpuAction; QUEUE_DEPTH]>,
    pub imm: u16,
    pub ime: bool,
    pub ime_pending: bool,
    pub halted: bool,
    pub stopped: bool,
    pub hung: bool,
}

impl Debug for Cpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let q = self.deref();
        write!(
            f,
            "CPU {{ f:{flags:?}, a:{a:02X}, b:{b:02X}, c:{c:02X}, d:{d:02X}, e:{e:02X}, h:{h:02X}, l:{l:02X}, sp:{sp:04X}, pc:{pc:04X}, imm:${imm:04X}, ime:{ime}, t:{t}, action_queue:{queue:?} }}",
            flags = q.flags,
            a = q.a,
            b = q.b,
            c = q.c,
            d = q.d,
            e = q.e,
            h = q.h,
            l = q.l,
            sp = q.sp,
            pc = q.pc,
            imm = q.imm,
            ime = q.ime,
            t = q.t_cycles,
            queue = q.action_queue,
        )
    }
}

impl Deref for Cpu {
    type Target = CpuByteFields;
    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: Both structs are `repr(C)` with field-for-field identical
        // layout; the byte view just splits each leading `Reg16` into its
        // little-endian halves.
        unsafe { &*(self as *const Self as *const CpuByteFields) }
    }
}

impl DerefMut for Cpu {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As in `Deref`; the layouts agree exactly.
        unsafe { &mut *(self as *mut Self as *mut CpuByteFields) }
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            // The register values after boot depend on which model's Boot ROM
            // ran; only PC and SP come out consistent. The general registers
            // are just zeroed.
            //
            // See: https://gbdev.io/pandocs/Power_Up_Sequence.html#cpu-registers
            af: Reg16::new(0),
            bc: Reg16::new(0),
            de: Reg16::new(0),
            hl: Reg16::new(0),
            sp: Reg16::new(0xFFFE),
            pc: Reg16::new(0x0100),
            ..Self::default()
        }
    }

    /// Reads the byte at `pc` and advances `pc`.
    pub fn fetch_pc(&mut self, bus: &mut dyn DataBus) -> u8 {
        let b = bus.read(self.pc.get());
        self.pc.inc();
        b
    }

    /// Grants a T-cycle worth of time to the CPU.
    ///
    /// The CPU only actually acts once per 4 T-cycles.
    ///
    /// * **Returns:** If the CPU took an action.
    pub fn t_cycle(&mut self, bus: &mut dyn DataBus) -> bool {
        self.t_cycles = self.t_cycles.wrapping_add(1);
        if self.t_cycles % 4 != 0 {
            return false;
        }
        if self.hung || self.stopped {
            return false;
        }
        // When there's no pending actions this is an instruction boundary:
        // service an interrupt or fetch a new op code to queue up actions.
        // Either way one action also runs this same M-cycle, so the action
        // lists are arranged with that first slot in mind.
        if self.action_queue.is_empty() {
            let pending = pending_interrupts(bus);
            if self.halted {
                if pending == 0 {
                    return false;
                }
                self.halted = false;
            }
            if self.ime && pending != 0 {
                self.begin_interrupt_dispatch(bus, pending);
            } else {
                // `ei` lands here one instruction late on purpose.
                if self.ime_pending {
                    self.ime = true;
                    self.ime_pending = false;
                }
                let op_code = self.fetch_pc(bus);
                let disassembly = DISASSEMBLY_TABLE[usize::from(op_code)];
                let actions = ACTION_TABLE[usize::from(op_code)];
                trace!("queue code (${op_code:02X}): {disassembly: <17} // {actions:?}");
                self.action_queue.extend(actions.iter().copied());
            }
        }
        if self.action_queue.is_empty() {
            return false;
        }
        let action = self.action_queue.remove(0);
        self.process_action(bus, action);
        true
    }

    /// Starts the 5 M-cycle interrupt dispatch for the lowest pending bit.
    fn begin_interrupt_dispatch(&mut self, bus: &mut dyn DataBus, pending: u8) {
        let bit = pending.trailing_zeros();
        let iff = bus.read(IRQ_FLAG_ADDR);
        bus.write(IRQ_FLAG_ADDR, u8_with_bit(bit, iff, false));
        self.ime = false;
        self.imm = 0x0040 + 8 * (bit as u16);
        trace!("irq dispatch to ${:04X}", self.imm);
        self.action_queue.extend([
            CpuAction::Internal,
            CpuAction::Internal,
            CpuAction::PushHi(ActionPair::PC),
            CpuAction::PushLo(ActionPair::PC),
            CpuAction::JumpImm,
        ]);
    }

    fn process_action(&mut self, bus: &mut dyn DataBus, action: CpuAction) {
        use CpuAction::*;
        match action {
            Internal => (),
            Hang => {
                warn!("illegal op code executed, cpu locked up at pc {:04X}", self.pc);
                self.hung = true;
            }
            DisableInterrupts => {
                self.ime = false;
                self.ime_pending = false;
            }
            EnableInterrupts => self.ime_pending = true,
            EnableInterruptsNow => {
                self.ime = true;
                self.ime_pending = false;
            }
            Halt => self.halted = true,
            Stop => self.stopped = true,
            LdR8R8(dst, src) => {
                let v = self.reg8(src);
                self.set_reg8(dst, v);
            }
            ImmLow => {
                let byte = self.fetch_pc(bus);
                self.set_imm_low(byte);
            }
            ImmHigh => {
                let byte = self.fetch_pc(bus);
                self.set_imm_high(byte);
            }
            ImmLowTo(reg) => {
                let byte = self.fetch_pc(bus);
                self.set_reg8(reg, byte);
                self.imm = 0;
            }
            ImmHighTo(pair) => {
                let byte = self.fetch_pc(bus);
                self.set_imm_high(byte);
                let v = self.imm;
                self.pair_set(pair, v);
                self.imm = 0;
            }
            ReadHlTo(reg) => {
                let v = bus.read(self.hl.get());
                self.set_reg8(reg, v);
            }
            WriteHlFrom(reg) => bus.write(self.hl.get(), self.reg8(reg)),
            WriteHlImm => {
                bus.write(self.hl.get(), self.imm as u8);
                self.imm = 0;
            }
            ReadPtrToA(ptr) => {
                let addr = self.ptr_addr(ptr);
                let v = bus.read(addr);
                self.a.set(v);
            }
            WritePtrFromA(ptr) => {
                let addr = self.ptr_addr(ptr);
                bus.write(addr, self.a.get());
            }
            ReadImm16To(reg) => {
                let v = bus.read(self.imm);
                self.set_reg8(reg, v);
                self.imm = 0;
            }
            WriteRegToImm16(reg) => {
                bus.write(self.imm, self.reg8(reg));
                self.imm = 0;
            }
            ReadHalfAddrTo(reg) => {
                debug_assert!(self.imm <= u16::from(u8::MAX));
                let v = bus.read(0xFF00 + self.imm);
                self.set_reg8(reg, v);
                self.imm = 0;
            }
            WriteRegToHalfAddr(reg) => {
                debug_assert!(self.imm <= u16::from(u8::MAX));
                bus.write(0xFF00 + self.imm, self.reg8(reg));
                self.imm = 0;
            }
            ReadHighCTo(reg) => {
                let addr = 0xFF00 + u16::from(self.c.get());
                let v = bus.read(addr);
                self.set_reg8(reg, v);
            }
            WriteRegToHighC(reg) => {
                let addr = 0xFF00 + u16::from(self.c.get());
                bus.write(addr, self.reg8(reg));
            }
            WriteImmSpLow => bus.write(self.imm, self.sp.lo()),
            WriteImmSpHigh => {
                bus.write(self.imm.wrapping_add(1), self.sp.hi());
                self.imm = 0;
            }
            PushHi(pair) => {
                self.sp.dec();
                bus.write(self.sp.get(), (self.pair_get(pair) >> 8) as u8);
            }
            PushLo(pair) => {
                self.sp.dec();
                bus.write(self.sp.get(), self.pair_get(pair) as u8);
            }
            PopLo(pair) => {
                let byte = bus.read(self.sp.get());
                self.sp.inc();
                self.pair_set_lo(pair, byte);
            }
            PopHi(pair) => {
                let byte = bus.read(self.sp.get());
                self.sp.inc();
                self.pair_set_hi(pair, byte);
            }
            LdSpHl => self.sp.set(self.hl.get()),
            LdHlSpImm => {
                let v = self.sp_plus_imm();
                self.hl.set(v);
            }
            AddSpImm => {
                let v = self.sp_plus_imm();
                self.sp.set(v);
            }
            AluR8(op, reg) => {
                let rhs = self.reg8(reg);
                self.alu(op, rhs);
            }
            AluHl(op) => {
                let rhs = bus.read(self.hl.get());
                self.alu(op, rhs);
            }
            AluImm(op) => {
                let rhs = self.fetch_pc(bus);
                self.alu(op, rhs);
            }
            IncR8(reg) => {
                let v = self.inc8(self.reg8(reg));
                self.set_reg8(reg, v);
            }
            DecR8(reg) => {
                let v = self.dec8(self.reg8(reg));
                self.set_reg8(reg, v);
            }
            ReadHlImm => {
                let byte = bus.read(self.hl.get());
                self.set_imm_low(byte);
            }
            IncHlWrite => {
                let v = self.inc8(self.imm as u8);
                bus.write(self.hl.get(), v);
                self.imm = 0;
            }
            DecHlWrite => {
                let v = self.dec8(self.imm as u8);
                bus.write(self.hl.get(), v);
                self.imm = 0;
            }
            IncPair(pair) => {
                let v = self.pair_get(pair).wrapping_add(1);
                self.pair_set(pair, v);
            }
            DecPair(pair) => {
                let v = self.pair_get(pair).wrapping_sub(1);
                self.pair_set(pair, v);
            }
            AddHlPair(pair) => {
                let rhs = self.pair_get(pair);
                self.add_hl(rhs);
            }
            RotateA(rot) => {
                let v = self.rotate(rot, self.a.get(), false);
                self.a.set(v);
            }
            Daa => self.daa(),
            Cpl => {
                let v = !self.a.get();
                self.a.set(v);
                self.flags.set_n(true);
                self.flags.set_h(true);
            }
            Scf => {
                self.flags.set_n(false);
                self.flags.set_h(false);
                self.flags.set_c(true);
            }
            Ccf => {
                let c = self.flags.c();
                self.flags.set_n(false);
                self.flags.set_h(false);
                self.flags.set_c(!c);
            }
            JumpRelative => {
                let offset = i16::from(self.imm as u8 as i8);
                self.pc.set(self.pc.get().wrapping_add_signed(offset));
                self.imm = 0;
            }
            ImmLowBranch(cond) => {
                let byte = self.fetch_pc(bus);
                self.set_imm_low(byte);
                if !self.cond_passed(cond) {
                    self.action_queue.clear();
                    self.imm = 0;
                }
            }
            ImmHighBranch(cond) => {
                let byte = self.fetch_pc(bus);
                self.set_imm_high(byte);
                if !self.cond_passed(cond) {
                    self.action_queue.clear();
                    self.imm = 0;
                }
            }
            CheckCond(cond) => {
                if !self.cond_passed(cond) {
                    self.action_queue.clear();
                }
            }
            JumpImm => {
                self.pc.set(self.imm);
                self.imm = 0;
            }
            JumpHl => self.pc.set(self.hl.get()),
            CallImm => {
                self.sp.dec();
                bus.write(self.sp.get(), self.pc.lo());
                self.pc.set(self.imm);
                self.imm = 0;
            }
            Restart(vector) => {
                self.sp.dec();
                bus.write(self.sp.get(), self.pc.lo());
                self.pc.set(u16::from(vector));
            }
            CbDispatch => self.cb_dispatch(bus),
            BitHl(bit) => {
                let v = bus.read(self.hl.get());
                self.bit_test(bit, v);
            }
            RotHlWrite(rot) => {
                let v = self.rotate(rot, self.imm as u8, true);
                bus.write(self.hl.get(), v);
                self.imm = 0;
            }
            SetBitHlWrite(bit, set) => {
                let v = u8_with_bit(bit as u32, self.imm as u8, set);
                bus.write(self.hl.get(), v);
                self.imm = 0;
            }
        }
    }

    /// Fetches and executes the byte after a `$CB` prefix.
    ///
    /// Register forms finish in this cycle; `[hl]` forms queue their extra
    /// read (and write-back) cycles.
    fn cb_dispatch(&mut self, bus: &mut dyn DataBus) {
        let byte = self.fetch_pc(bus);
        let op = PrefixedOp::new(byte);
        trace!("queue cb   (${byte:02X}): {op:?}");
        match op {
            PrefixedOp::RotR8m(rot, R8m::HLm) => {
                self.action_queue.extend([CpuAction::ReadHlImm, CpuAction::RotHlWrite(rot)]);
            }
            PrefixedOp::RotR8m(rot, r8m) => {
                let reg = data_reg(r8m);
                let v = self.rotate(rot, self.reg8(reg), true);
                self.set_reg8(reg, v);
            }
            PrefixedOp::Bit(bit, R8m::HLm) => self.action_queue.push(CpuAction::BitHl(bit)),
            PrefixedOp::Bit(bit, r8m) => {
                let v = self.reg8(data_reg(r8m));
                self.bit_test(bit, v);
            }
            PrefixedOp::Res(bit, R8m::HLm) => {
                self.action_queue
                    .extend([CpuAction::ReadHlImm, CpuAction::SetBitHlWrite(bit, false)]);
            }
            PrefixedOp::Res(bit, r8m) => {
                let reg = data_reg(r8m);
                let v = u8_with_bit(bit as u32, self.reg8(reg), false);
                self.set_reg8(reg, v);
            }
            PrefixedOp::Set(bit, R8m::HLm) => {
                self.action_queue
                    .extend([CpuAction::ReadHlImm, CpuAction::SetBitHlWrite(bit, true)]);
            }
            PrefixedOp::Set(bit, r8m) => {
                let reg = data_reg(r8m);
                let v = u8_with_bit(bit as u32, self.reg8(reg), true);
                self.set_reg8(reg, v);
            }
        }
    }

    fn reg8(&self, reg: ActionRegister) -> u8 {
        match reg {
            ActionRegister::A => self.a.get(),
            ActionRegister::B => self.b.get(),
            ActionRegister::C => self.c.get(),
            ActionRegister::D => self.d.get(),
            ActionRegister::E => self.e.get(),
            ActionRegister::H => self.h.get(),
            ActionRegister::L => self.l.get(),
        }
    }

    fn set_reg8(&mut self, reg: ActionRegister, v: u8) {
        match reg {
            ActionRegister::A => self.a.set(v),
            ActionRegister::B => self.b.set(v),
            ActionRegister::C => self.c.set(v),
            ActionRegister::D => self.d.set(v),
            ActionRegister::E => self.e.set(v),
            ActionRegister::H => self.h.set(v),
            ActionRegister::L => self.l.set(v),
        }
    }

    fn pair_get(&self, pair: ActionPair) -> u16 {
        match pair {
            ActionPair::BC => self.bc.get(),
            ActionPair::DE => self.de.get(),
            ActionPair::HL => self.hl.get(),
            ActionPair::AF => self.af.get(),
            ActionPair::SP => self.sp.get(),
            ActionPair::PC => self.pc.get(),
        }
    }

    fn pair_set(&mut self, pair: ActionPair, v: u16) {
        match pair {
            ActionPair::BC => self.bc.set(v),
            ActionPair::DE => self.de.set(v),
            ActionPair::HL => self.hl.set(v),
            ActionPair::AF => self.af.set(v),
            ActionPair::SP => self.sp.set(v),
            ActionPair::PC => self.pc.set(v),
        }
    }

    fn pair_set_lo(&mut self, pair: ActionPair, byte: u8) {
        match pair {
            ActionPair::BC => self.bc.set_lo(byte),
            ActionPair::DE => self.de.set_lo(byte),
            ActionPair::HL => self.hl.set_lo(byte),
            // F's low nibble is wired to zero.
            ActionPair::AF => self.flags.set_bits_masked(byte),
            ActionPair::SP => self.sp.set_lo(byte),
            ActionPair::PC => self.pc.set_lo(byte),
        }
    }

    fn pair_set_hi(&mut self, pair: ActionPair, byte: u8) {
        match pair {
            ActionPair::BC => self.bc.set_hi(byte),
            ActionPair::DE => self.de.set_hi(byte),
            ActionPair::HL => self.hl.set_hi(byte),
            ActionPair::AF => self.a.set(byte),
            ActionPair::SP => self.sp.set_hi(byte),
            ActionPair::PC => self.pc.set_hi(byte),
        }
    }

    /// Resolves a pointer operand, post-adjusting `hl` for the `hl+`/`hl-`
    /// forms.
    fn ptr_addr(&mut self, ptr: R16id) -> u16 {
        match ptr {
            R16id::BC => self.bc.get(),
            R16id::DE => self.de.get(),
            R16id::HLi => {
                let addr = self.hl.get();
                self.hl.inc();
                addr
            }
            R16id::HLd => {
                let addr = self.hl.get();
                self.hl.dec();
                addr
            }
        }
    }

    fn cond_passed(&self, cond: ActionCond) -> bool {
        match cond {
            ActionCond::NZ => !self.flags.z(),
            ActionCond::Z => self.flags.z(),
            ActionCond::NC => !self.flags.c(),
            ActionCond::C => self.flags.c(),
        }
    }

    fn set_imm_low(&mut self, byte: u8) {
        let imm_bytes: &mut [u8] = cast_slice_mut(slice::from_mut(&mut self.imm));
        imm_bytes[usize::from(cfg!(target_endian = "big"))] = byte;
    }

    fn set_imm_high(&mut self, byte: u8) {
        let imm_bytes: &mut [u8] = cast_slice_mut(slice::from_mut(&mut self.imm));
        imm_bytes[usize::from(cfg!(target_endian = "little"))] = byte;
    }

    fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.flags.set_z(z);
        self.flags.set_n(n);
        self.flags.set_h(h);
        self.flags.set_c(c);
    }

    /// An accumulator ALU operation with the DMG flag behavior.
    fn alu(&mut self, op: Alu, rhs: u8) {
        let a = self.a.get();
        let carry_in = u8::from(self.flags.c());
        match op {
            Alu::Add | Alu::Adc => {
                let c = if op == Alu::Adc { carry_in } else { 0 };
                let wide = u16::from(a) + u16::from(rhs) + u16::from(c);
                let out = wide as u8;
                let half = (a & 0x0F) + (rhs & 0x0F) + c > 0x0F;
                self.set_flags(out == 0, false, half, wide > 0xFF);
                self.a.set(out);
            }
            Alu::Sub | Alu::Sbc | Alu::Cp => {
                let c = if op == Alu::Sbc { carry_in } else { 0 };
                let out = a.wrapping_sub(rhs).wrapping_sub(c);
                let half = (a & 0x0F) < (rhs & 0x0F) + c;
                let carry = u16::from(a) < u16::from(rhs) + u16::from(c);
                self.set_flags(out == 0, true, half, carry);
                if op != Alu::Cp {
                    self.a.set(out);
                }
            }
            Alu::And => {
                let out = a & rhs;
                self.set_flags(out == 0, false, true, false);
                self.a.set(out);
            }
            Alu::Xor => {
                let out = a ^ rhs;
                self.set_flags(out == 0, false, false, false);
                self.a.set(out);
            }
            Alu::Or => {
                let out = a | rhs;
                self.set_flags(out == 0, false, false, false);
                self.a.set(out);
            }
        }
    }

    /// `inc` on a byte; Carry is left alone.
    fn inc8(&mut self, v: u8) -> u8 {
        let out = v.wrapping_add(1);
        self.flags.set_z(out == 0);
        self.flags.set_n(false);
        self.flags.set_h((v & 0x0F) == 0x0F);
        out
    }

    /// `dec` on a byte; Carry is left alone.
    fn dec8(&mut self, v: u8) -> u8 {
        let out = v.wrapping_sub(1);
        self.flags.set_z(out == 0);
        self.flags.set_n(true);
        self.flags.set_h((v & 0x0F) == 0);
        out
    }

    /// `add hl, rr`; Zero is left alone, H carries out of bit 11.
    fn add_hl(&mut self, rhs: u16) {
        let hl = self.hl.get();
        let (out, carry) = hl.overflowing_add(rhs);
        self.flags.set_n(false);
        self.flags.set_h((hl & 0x0FFF) + (rhs & 0x0FFF) > 0x0FFF);
        self.flags.set_c(carry);
        self.hl.set(out);
    }

    /// `sp + i8` for `add sp, i8` and `ld hl, sp+i8`: H and C come from the
    /// unsigned low-byte add, Z and N are always cleared.
    fn sp_plus_imm(&mut self) -> u16 {
        let sp = self.sp.get();
        let offset = self.imm as u8;
        let out = sp.wrapping_add_signed(i16::from(offset as i8));
        let half = (sp as u8 & 0x0F) + (offset & 0x0F) > 0x0F;
        let carry = u16::from(sp as u8) + u16::from(offset) > 0xFF;
        self.set_flags(false, false, half, carry);
        self.imm = 0;
        out
    }

    /// A rotate/shift with flag updates. The one-byte accumulator forms pass
    /// `set_z = false` since they always clear Zero.
    fn rotate(&mut self, rot: Rot, v: u8, set_z: bool) -> u8 {
        let carry_in = u8::from(self.flags.c());
        let (out, carry) = match rot {
            Rot::Rlc => (v.rotate_left(1), v & 0x80 != 0),
            Rot::Rrc => (v.rotate_right(1), v & 0x01 != 0),
            Rot::Rl => ((v << 1) | carry_in, v & 0x80 != 0),
            Rot::RR => ((v >> 1) | (carry_in << 7), v & 0x01 != 0),
            Rot::Sla => (v << 1, v & 0x80 != 0),
            Rot::Sra => ((v >> 1) | (v & 0x80), v & 0x01 != 0),
            Rot::Swap => (v.rotate_left(4), false),
            Rot::Srl => (v >> 1, v & 0x01 != 0),
        };
        self.set_flags(set_z && out == 0, false, false, carry);
        out
    }

    /// `bit n` against a value; Carry is left alone.
    fn bit_test(&mut self, bit: U3, v: u8) {
        self.flags.set_z(!bitfrob::u8_get_bit(bit as u32, v));
        self.flags.set_n(false);
        self.flags.set_h(true);
    }

    /// Decimal-adjusts the accumulator after a BCD add or subtract.
    fn daa(&mut self) {
        let a = self.a.get();
        let n = self.flags.n();
        let mut adjust = 0_u8;
        let mut carry = self.flags.c();
        if self.flags.h() || (!n && (a & 0x0F) > 0x09) {
            adjust |= 0x06;
        }
        if carry || (!n && a > 0x99) {
            adjust |= 0x60;
            carry = true;
        }
        let out = if n { a.wrapping_sub(adjust) } else { a.wrapping_add(adjust) };
        self.a.set(out);
        self.flags.set_z(out == 0);
        self.flags.set_h(false);
        self.flags.set_c(carry);
    }
}

/// IE & IF & the five real interrupt bits.
fn pending_interrupts(bus: &dyn DataBus) -> u8 {
    bus.read(IRQ_ENABLE_ADDR) & bus.read(IRQ_FLAG_ADDR) & 0x1F
}

/// The [`ActionRegister`] for a register-form `CB` operand.
fn data_reg(r8m: R8m) -> ActionRegister {
    match r8m {
        R8m::B => ActionRegister::B,
        R8m::C => ActionRegister::C,
        R8m::D => ActionRegister::D,
        R8m::E => ActionRegister::E,
        R8m::H => ActionRegister::H,
        R8m::L => ActionRegister::L,
        R8m::A => ActionRegister::A,
        R8m::HLm => unreachable!("memory operands are handled before decode"),
    }
}
