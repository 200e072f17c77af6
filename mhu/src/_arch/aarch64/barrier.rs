//! DMB SY orders the Normal memory stores holding the payload against the
//! Device memory store to the SET register. A compiler fence alone is not
//! enough because the two accesses target different memory types.

use aarch64_cpu::asm::barrier;

#[inline(always)]
pub fn write_barrier() {
    barrier::dmb(barrier::SY);
}
