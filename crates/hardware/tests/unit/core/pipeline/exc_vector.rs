//! Exception Vector Unit Tests.
//!
//! Verifies the trap-vector table layout and the debug entry addresses
//! produced by `select_exception_pc`.

use rstest::rstest;

use rvfetch_core::core::pipeline::frontend::exc_vector::{ExcPcSource, select_exception_pc};

const DM_HALT: u32 = 0x1A11_0800;
const DM_EXC: u32 = 0x1A11_0808;

#[rstest]
#[case(ExcPcSource::EXCEPTION, 5, 0x00AB_CD00)]
#[case(ExcPcSource::IRQ, 5, 0x00AB_CD14)]
#[case(ExcPcSource::IRQ, 0, 0x00AB_CD00)]
#[case(ExcPcSource::IRQ, 31, 0x00AB_CD7C)]
#[case(ExcPcSource::DEBUG_ENTRY, 5, DM_HALT)]
#[case(ExcPcSource::DEBUG_EXCEPTION, 5, DM_EXC)]
#[case(0b100, 5, 0x00AB_CD00)]
#[case(0b111, 5, 0x00AB_CD00)]
fn entry_address(#[case] raw: u8, #[case] index: u32, #[case] expected: u32) {
    let pc = select_exception_pc(ExcPcSource::from(raw), 0x00AB_CD, index, DM_HALT, DM_EXC);
    assert_eq!(pc, expected);
}

#[test]
fn interrupt_index_wraps_at_five_bits() {
    let a = select_exception_pc(ExcPcSource::Irq, 0x10, 3, 0, 0);
    let b = select_exception_pc(ExcPcSource::Irq, 0x10, 3 + 32, 0, 0);
    assert_eq!(a, b);
    assert_eq!(a, 0x100C);
}

#[test]
fn base_above_24_bits_is_dropped() {
    let pc = select_exception_pc(ExcPcSource::Exception, 0xAB00_0042, 0, 0, 0);
    assert_eq!(pc, 0x0000_4200);
}

#[test]
fn default_source_is_synchronous_exception() {
    assert_eq!(ExcPcSource::default(), ExcPcSource::Exception);
}
