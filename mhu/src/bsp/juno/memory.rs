//! Juno physical memory map, as far as this crate is concerned.
//!
//! Firmware runs with a flat mapping, so physical and virtual addresses of the
//! device region are the same.

pub mod mmio {
    /// Message Handling Unit shared with the SCP.
    pub const MHU_BASE: usize = 0x2B1F_0000;
}
