#![cfg(test)]

use super::*;
use crate::bus::{DataBus, IRQ_ENABLE_ADDR, IRQ_FLAG_ADDR};

/// A flat 64 KiB of RAM, so tests can poke any address.
struct TestBus {
    mem: Vec<u8>,
}

impl DataBus for TestBus {
    fn read(&self, addr: u16) -> u8 {
        self.mem[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, byte: u8) {
        self.mem[usize::from(addr)] = byte;
    }
}

/// A bus with `program` placed at the entry point, `$0100`.
fn bus_with(program: &[u8]) -> TestBus {
    let mut mem = vec![0_u8; 0x1_0000];
    mem[0x0100..0x0100 + program.len()].copy_from_slice(program);
    TestBus { mem }
}

fn run_m_cycles(cpu: &mut Cpu, bus: &mut dyn DataBus, m_cycles: usize) {
    for _ in 0..(4 * m_cycles) {
        cpu.t_cycle(bus);
    }
}

/// Runs one full instruction and reports how many M-cycles it took.
fn run_instruction(cpu: &mut Cpu, bus: &mut dyn DataBus) -> usize {
    let mut m_cycles = 0;
    loop {
        run_m_cycles(cpu, bus, 1);
        m_cycles += 1;
        if cpu.action_queue.is_empty() {
            return m_cycles;
        }
    }
}

#[test]
fn test_new_cpu_boot_values() {
    let cpu = Cpu::new();
    assert_eq!(cpu.sp.get(), 0xFFFE);
    assert_eq!(cpu.pc.get(), 0x0100);
    assert_eq!(cpu.af.get(), 0);
    assert!(!cpu.ime);
}

#[test]
fn test_byte_field_view() {
    let mut cpu = Cpu::new();
    cpu.af.set(0x12F0);
    cpu.bc.set(0x3456);
    assert_eq!(cpu.a.get(), 0x12);
    assert_eq!(cpu.flags.bits(), 0xF0);
    assert_eq!(cpu.b.get(), 0x34);
    assert_eq!(cpu.c.get(), 0x56);
    cpu.h.set(0xC0);
    cpu.l.set(0x01);
    assert_eq!(cpu.hl.get(), 0xC001);
}

#[test]
fn test_only_acts_every_fourth_t_cycle() {
    let mut cpu = Cpu::new();
    let mut bus = bus_with(&[0x00]);
    assert!(!cpu.t_cycle(&mut bus));
    assert!(!cpu.t_cycle(&mut bus));
    assert!(!cpu.t_cycle(&mut bus));
    assert!(cpu.t_cycle(&mut bus));
    assert_eq!(cpu.pc.get(), 0x0101, "the nop was fetched on the 4th T-cycle");
}

#[test]
fn test_ld_imm_and_add() {
    let mut cpu = Cpu::new();
    // ld a, $05; add a, $03
    let mut bus = bus_with(&[0x3E, 0x05, 0xC6, 0x03]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.a.get(), 0x05);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.a.get(), 0x08);
    assert_eq!(format!("{:?}", cpu.flags), "____");
    assert_eq!(cpu.t_cycles, 16);
}

#[test]
fn test_sub_flags() {
    let mut cpu = Cpu::new();
    // ld a, $10; sub a, $01
    let mut bus = bus_with(&[0x3E, 0x10, 0xD6, 0x01]);
    run_m_cycles(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.a.get(), 0x0F);
    assert!(cpu.flags.n());
    assert!(cpu.flags.h(), "borrow out of bit 4");
    assert!(!cpu.flags.c());
    assert!(!cpu.flags.z());
}

#[test]
fn test_adc_carry_chain() {
    let mut cpu = Cpu::new();
    // ld a, $FF; add a, $01; adc a, $00
    let mut bus = bus_with(&[0x3E, 0xFF, 0xC6, 0x01, 0xCE, 0x00]);
    run_m_cycles(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.a.get(), 0x00);
    assert!(cpu.flags.z());
    assert!(cpu.flags.c());
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a.get(), 0x01, "adc picked up the carry");
    assert!(!cpu.flags.c());
}

#[test]
fn test_inc_preserves_carry() {
    let mut cpu = Cpu::new();
    // scf; ld c, $0F; inc c
    let mut bus = bus_with(&[0x37, 0x0E, 0x0F, 0x0C]);
    run_m_cycles(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.c.get(), 0x10);
    assert!(cpu.flags.h(), "carry out of the low nibble");
    assert!(!cpu.flags.z());
    assert!(!cpu.flags.n());
    assert!(cpu.flags.c(), "inc leaves Carry alone");
}

#[test]
fn test_hl_memory_ops() {
    let mut cpu = Cpu::new();
    // ld hl, $C000; ld [hl], $5A; ld a, [hl]
    let mut bus = bus_with(&[0x21, 0x00, 0xC0, 0x36, 0x5A, 0x7E]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.hl.get(), 0xC000);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(bus.read(0xC000), 0x5A);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.a.get(), 0x5A);
}

#[test]
fn test_hl_post_increment_pointer() {
    let mut cpu = Cpu::new();
    cpu.a.set(0x77);
    cpu.hl.set(0xC000);
    // ld [hl+], a; ld [hl-], a
    let mut bus = bus_with(&[0x22, 0x32]);
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert_eq!(bus.read(0xC000), 0x77);
    assert_eq!(cpu.hl.get(), 0xC001);
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert_eq!(bus.read(0xC001), 0x77);
    assert_eq!(cpu.hl.get(), 0xC000);
}

#[test]
fn test_inc_hl_memory() {
    let mut cpu = Cpu::new();
    cpu.hl.set(0xC000);
    // inc [hl]
    let mut bus = bus_with(&[0x34]);
    bus.write(0xC000, 0xFF);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(bus.read(0xC000), 0x00);
    assert!(cpu.flags.z());
    assert!(cpu.flags.h());
}

#[test]
fn test_jr_negative_offset() {
    let mut cpu = Cpu::new();
    // jr -2: loops back onto itself.
    let mut bus = bus_with(&[0x18, 0xFE]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc.get(), 0x0100);
}

#[test]
fn test_jr_cond_timing() {
    // jr nz, +2
    let program = [0x20, 0x02];

    let mut cpu = Cpu::new();
    let mut bus = bus_with(&program);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3, "taken");
    assert_eq!(cpu.pc.get(), 0x0104);

    let mut cpu = Cpu::new();
    cpu.flags.set_z(true);
    let mut bus = bus_with(&program);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2, "not taken");
    assert_eq!(cpu.pc.get(), 0x0102);
    assert_eq!(cpu.imm, 0, "the fetched offset was discarded");
}

#[test]
fn test_jp_imm() {
    let mut cpu = Cpu::new();
    // jp $1234
    let mut bus = bus_with(&[0xC3, 0x34, 0x12]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc.get(), 0x1234);
}

#[test]
fn test_jp_cond_timing() {
    // jp c, $1234
    let program = [0xDA, 0x34, 0x12];

    let mut cpu = Cpu::new();
    cpu.flags.set_c(true);
    let mut bus = bus_with(&program);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4, "taken");
    assert_eq!(cpu.pc.get(), 0x1234);

    let mut cpu = Cpu::new();
    let mut bus = bus_with(&program);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3, "not taken");
    assert_eq!(cpu.pc.get(), 0x0103);
}

#[test]
fn test_call_and_ret() {
    let mut cpu = Cpu::new();
    // call $0150 ... $0150: ret
    let mut bus = bus_with(&[0xCD, 0x50, 0x01]);
    bus.write(0x0150, 0xC9);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.pc.get(), 0x0150);
    assert_eq!(cpu.sp.get(), 0xFFFC);
    assert_eq!(bus.read(0xFFFD), 0x01, "return address high byte");
    assert_eq!(bus.read(0xFFFC), 0x03, "return address low byte");

    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc.get(), 0x0103);
    assert_eq!(cpu.sp.get(), 0xFFFE);
}

#[test]
fn test_ret_cond_timing() {
    // ret nz
    let program = [0xC0];

    let mut cpu = Cpu::new();
    cpu.flags.set_z(true);
    let mut bus = bus_with(&program);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2, "not taken");
    assert_eq!(cpu.pc.get(), 0x0101);

    let mut cpu = Cpu::new();
    let mut bus = bus_with(&program);
    bus.write(0xFFFC, 0x34);
    bus.write(0xFFFD, 0x12);
    cpu.sp.set(0xFFFC);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5, "taken");
    assert_eq!(cpu.pc.get(), 0x1234);
    assert_eq!(cpu.sp.get(), 0xFFFE);
}

#[test]
fn test_push_then_pop_af_masks_low_nibble() {
    let mut cpu = Cpu::new();
    cpu.bc.set(0x12FF);
    // push bc; pop af
    let mut bus = bus_with(&[0xC5, 0xF1]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.af.get(), 0x12F0, "F's low nibble always reads zero");
}

#[test]
fn test_rst() {
    let mut cpu = Cpu::new();
    // rst $08
    let mut bus = bus_with(&[0xCF]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc.get(), 0x0008);
    assert_eq!(cpu.sp.get(), 0xFFFC);
    assert_eq!(bus.read(0xFFFD), 0x01);
    assert_eq!(bus.read(0xFFFC), 0x01);
}

#[test]
fn test_ld_imm16_sp() {
    let mut cpu = Cpu::new();
    // ld [$C000], sp
    let mut bus = bus_with(&[0x08, 0x00, 0xC0]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(bus.read(0xC000), 0xFE);
    assert_eq!(bus.read(0xC001), 0xFF);
}

#[test]
fn test_add_sp_imm_flags() {
    let mut cpu = Cpu::new();
    cpu.sp.set(0xFFF8);
    // add sp, $08
    let mut bus = bus_with(&[0xE8, 0x08]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.sp.get(), 0x0000);
    assert!(!cpu.flags.z(), "Zero is always cleared");
    assert!(!cpu.flags.n());
    assert!(cpu.flags.h(), "H comes from the low-byte add");
    assert!(cpu.flags.c(), "C comes from the low-byte add");
}

#[test]
fn test_ld_hl_sp_imm() {
    let mut cpu = Cpu::new();
    cpu.sp.set(0xC000);
    // ld hl, sp-1
    let mut bus = bus_with(&[0xF8, 0xFF]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.hl.get(), 0xBFFF);
    assert_eq!(cpu.sp.get(), 0xC000, "sp itself is untouched");
}

#[test]
fn test_ldh_round_trip() {
    let mut cpu = Cpu::new();
    cpu.a.set(0x42);
    // ldh [$80], a; ld a, $00; ldh a, [$80]
    let mut bus = bus_with(&[0xE0, 0x80, 0x3E, 0x00, 0xF0, 0x80]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(bus.read(0xFF80), 0x42);
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.a.get(), 0x42);
}

#[test]
fn test_ldh_c() {
    let mut cpu = Cpu::new();
    cpu.a.set(0x99);
    cpu.c.set(0x81);
    // ldh [c], a
    let mut bus = bus_with(&[0xE2]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(bus.read(0xFF81), 0x99);
}

#[test]
fn test_daa_after_bcd_add() {
    let mut cpu = Cpu::new();
    // ld a, $45; add a, $38; daa
    let mut bus = bus_with(&[0x3E, 0x45, 0xC6, 0x38, 0x27]);
    run_m_cycles(&mut cpu, &mut bus, 5);
    assert_eq!(cpu.a.get(), 0x83, "BCD 45 + 38 = 83");
    assert!(!cpu.flags.c());
    assert!(!cpu.flags.h());
}

#[test]
fn test_daa_after_bcd_sub() {
    let mut cpu = Cpu::new();
    // ld a, $20; sub a, $13; daa
    let mut bus = bus_with(&[0x3E, 0x20, 0xD6, 0x13, 0x27]);
    run_m_cycles(&mut cpu, &mut bus, 5);
    assert_eq!(cpu.a.get(), 0x07, "BCD 20 - 13 = 07");
}

#[test]
fn test_rotate_a_clears_zero() {
    let mut cpu = Cpu::new();
    cpu.a.set(0x80);
    // rlca
    let mut bus = bus_with(&[0x07]);
    run_m_cycles(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a.get(), 0x01);
    assert!(cpu.flags.c());
    assert!(!cpu.flags.z(), "the one-byte rotates never set Zero");
}

#[test]
fn test_cb_rotate_register() {
    let mut cpu = Cpu::new();
    cpu.b.set(0x85);
    // rl b
    let mut bus = bus_with(&[0xCB, 0x10]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.b.get(), 0x0A);
    assert!(cpu.flags.c());
}

#[test]
fn test_cb_swap_sets_zero() {
    let mut cpu = Cpu::new();
    // swap a
    let mut bus = bus_with(&[0xCB, 0x37]);
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a.get(), 0x00);
    assert!(cpu.flags.z());
    assert!(!cpu.flags.c());
}

#[test]
fn test_cb_bit_hl() {
    let mut cpu = Cpu::new();
    cpu.hl.set(0xC000);
    // bit 7, [hl]
    let mut bus = bus_with(&[0xCB, 0x7E]);
    bus.write(0xC000, 0x80);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert!(!cpu.flags.z());
    assert!(cpu.flags.h());
    assert!(!cpu.flags.n());
}

#[test]
fn test_cb_res_and_set_hl() {
    let mut cpu = Cpu::new();
    cpu.hl.set(0xC000);
    // res 0, [hl]; set 7, [hl]
    let mut bus = bus_with(&[0xCB, 0x86, 0xCB, 0xFE]);
    bus.write(0xC000, 0x01);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(bus.read(0xC000), 0x00);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(bus.read(0xC000), 0x80);
}

#[test]
fn test_ei_delay_and_interrupt_dispatch() {
    let mut cpu = Cpu::new();
    // ei; nop
    let mut bus = bus_with(&[0xFB, 0x00]);
    bus.write(IRQ_ENABLE_ADDR, 0x01);
    bus.write(IRQ_FLAG_ADDR, 0x01);

    run_m_cycles(&mut cpu, &mut bus, 1);
    assert!(!cpu.ime, "ei doesn't take effect immediately");
    assert!(cpu.ime_pending);

    run_m_cycles(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc.get(), 0x0102, "the following instruction still ran");
    assert!(cpu.ime);

    run_m_cycles(&mut cpu, &mut bus, 5);
    assert_eq!(cpu.pc.get(), 0x0040, "VBlank vector");
    assert!(!cpu.ime);
    assert_eq!(bus.read(IRQ_FLAG_ADDR), 0x00, "the IF bit was acknowledged");
    assert_eq!(cpu.sp.get(), 0xFFFC);
    assert_eq!(bus.read(0xFFFD), 0x01);
    assert_eq!(bus.read(0xFFFC), 0x02);
}

#[test]
fn test_interrupt_priority_is_lowest_bit() {
    let mut cpu = Cpu::new();
    cpu.ime = true;
    let mut bus = bus_with(&[0x00]);
    bus.write(IRQ_ENABLE_ADDR, 0x1F);
    // Timer (bit 2) and Joypad (bit 4) both pending.
    bus.write(IRQ_FLAG_ADDR, 0x14);

    run_m_cycles(&mut cpu, &mut bus, 5);
    assert_eq!(cpu.pc.get(), 0x0050, "Timer wins");
    assert_eq!(bus.read(IRQ_FLAG_ADDR), 0x10, "only the Timer bit cleared");
}

#[test]
fn test_reti_enables_immediately() {
    let mut cpu = Cpu::new();
    cpu.sp.set(0xFFFC);
    // reti
    let mut bus = bus_with(&[0xD9]);
    bus.write(0xFFFC, 0x34);
    bus.write(0xFFFD, 0x12);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc.get(), 0x1234);
    assert!(cpu.ime);
    assert!(!cpu.ime_pending);
}

#[test]
fn test_halt_waits_then_wakes() {
    let mut cpu = Cpu::new();
    // halt; ld b, $07
    let mut bus = bus_with(&[0x76, 0x06, 0x07]);
    bus.write(IRQ_ENABLE_ADDR, 0x01);

    run_m_cycles(&mut cpu, &mut bus, 1);
    assert!(cpu.halted);

    run_m_cycles(&mut cpu, &mut bus, 10);
    assert_eq!(cpu.pc.get(), 0x0101, "nothing pending, still halted");

    // Raise VBlank with IME off: the halt ends but no dispatch happens.
    bus.write(IRQ_FLAG_ADDR, 0x01);
    run_m_cycles(&mut cpu, &mut bus, 2);
    assert!(!cpu.halted);
    assert_eq!(cpu.b.get(), 0x07);
    assert_eq!(cpu.pc.get(), 0x0103);
    assert_eq!(bus.read(IRQ_FLAG_ADDR), 0x01, "IF is untouched without a dispatch");
}

#[test]
fn test_illegal_opcode_hangs() {
    let mut cpu = Cpu::new();
    let mut bus = bus_with(&[0xD3, 0x00]);
    run_m_cycles(&mut cpu, &mut bus, 1);
    assert!(cpu.hung);
    let pc = cpu.pc.get();
    for _ in 0..16 {
        assert!(!cpu.t_cycle(&mut bus));
    }
    assert_eq!(cpu.pc.get(), pc, "a hung CPU fetches nothing");
}

#[test]
fn test_stop_freezes() {
    let mut cpu = Cpu::new();
    let mut bus = bus_with(&[0x10, 0x00]);
    run_m_cycles(&mut cpu, &mut bus, 1);
    assert!(cpu.stopped);
    run_m_cycles(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.pc.get(), 0x0101);
}

#[test]
fn test_di_cancels_pending_ei() {
    let mut cpu = Cpu::new();
    // ei; di; nop
    let mut bus = bus_with(&[0xFB, 0xF3, 0x00]);
    run_m_cycles(&mut cpu, &mut bus, 3);
    assert!(!cpu.ime);
    assert!(!cpu.ime_pending);
}

#[test]
fn test_add_hl_flags() {
    let mut cpu = Cpu::new();
    cpu.hl.set(0x0FFF);
    cpu.bc.set(0x0001);
    cpu.flags.set_z(true);
    // add hl, bc
    let mut bus = bus_with(&[0x09]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.hl.get(), 0x1000);
    assert!(cpu.flags.h(), "carry out of bit 11");
    assert!(!cpu.flags.c());
    assert!(cpu.flags.z(), "Zero is left alone");
}

#[test]
fn test_jp_hl_is_one_cycle() {
    let mut cpu = Cpu::new();
    cpu.hl.set(0x4000);
    let mut bus = bus_with(&[0xE9]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.pc.get(), 0x4000);
}

#[test]
fn test_ld_a_imm16() {
    let mut cpu = Cpu::new();
    // ld a, [$C123]
    let mut bus = bus_with(&[0xFA, 0x23, 0xC1]);
    bus.write(0xC123, 0xAB);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.a.get(), 0xAB);
}
