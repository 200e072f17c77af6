//! ARM Message Handling Unit (MHU), as found on Juno.
//!
//! Every channel is a STAT/SET/CLEAR register triplet. Writing ones to SET
//! raises the corresponding STAT bits and the interrupt towards the other
//! processor, writing ones to CLEAR drops them. The SCP_INTR registers signal
//! the application processor, the CPU_INTR registers signal the SCP. Only the
//! secure pair is described here.
use crate::{
    memory::MMIOWrapper,
    mhu::{slot_mask, Direction, Mailbox},
};
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, WriteOnly},
};

register_bitfields! {
    u32,

    INTR [
        // One bit per slot.
        SLOTS OFFSET(0) NUMBITS(31) [],
        // Set by the hardware when a non-secure master touched the channel.
        NON_SECURE OFFSET(31) NUMBITS(1) []
    ]
}

register_structs! {
    IntrRegisters {
        (0x00 => stat: ReadOnly<u32, INTR::Register>),
        (0x04 => _reserved0),
        (0x08 => set: WriteOnly<u32, INTR::Register>),
        (0x0C => _reserved1),
        (0x10 => clear: WriteOnly<u32, INTR::Register>),
        (0x14 => @END),
    }
}

register_structs! {
    RegisterBlock {
        (0x000 => _reserved0),
        (0x200 => scp_intr_s: IntrRegisters),
        (0x214 => _reserved1),
        (0x300 => cpu_intr_s: IntrRegisters),
        (0x314 => @END),
    }
}

type Registers = MMIOWrapper<RegisterBlock>;

pub struct Mhu {
    registers: Registers,
}

impl Mhu {
    /// # Safety
    ///
    /// `mmio_start_addr` must be the base of a mapped MHU, and there must be
    /// no other `Mhu` for the same device.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: unsafe { Registers::new(mmio_start_addr) },
        }
    }

    fn intr(&self, direction: Direction) -> &IntrRegisters {
        match direction {
            Direction::Request => &self.registers.cpu_intr_s,
            Direction::Response => &self.registers.scp_intr_s,
        }
    }
}

impl Mailbox for Mhu {
    fn status(&self, direction: Direction) -> u32 {
        self.intr(direction).stat.get()
    }

    fn set_bit(&self, direction: Direction, slot: u32) {
        self.intr(direction).set.set(slot_mask(slot));
    }

    fn clear_bit(&self, direction: Direction, slot: u32) {
        self.intr(direction).clear.set(slot_mask(slot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPU_INTR_S_STAT: usize = 0x300;
    const CPU_INTR_S_SET: usize = 0x308;
    const SCP_INTR_S_STAT: usize = 0x200;
    const SCP_INTR_S_CLEAR: usize = 0x210;

    /// A page of plain memory standing in for the device. Unlike the real
    /// MHU, SET and CLEAR are ordinary cells here, which lets the test observe
    /// exactly which register each access hit.
    struct FakePage {
        words: Vec<u32>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                words: vec![0; 0x400 / 4],
            }
        }

        fn base(&mut self) -> usize {
            self.words.as_mut_ptr() as usize
        }

        fn read(&self, offset: usize) -> u32 {
            unsafe { core::ptr::read_volatile(self.words.as_ptr().add(offset / 4)) }
        }

        fn write(&mut self, offset: usize, val: u32) {
            unsafe { core::ptr::write_volatile(self.words.as_mut_ptr().add(offset / 4), val) }
        }
    }

    #[test]
    fn register_offsets() {
        let mut page = FakePage::new();
        page.write(CPU_INTR_S_STAT, 0xAB);
        page.write(SCP_INTR_S_STAT, 0x40);
        let mhu = unsafe { Mhu::new(page.base()) };

        assert_eq!(mhu.status(Direction::Request), 0xAB);
        assert_eq!(mhu.status(Direction::Response), 0x40);
        assert!(mhu.is_set(Direction::Response, 6));

        mhu.set_bit(Direction::Request, 5);
        mhu.clear_bit(Direction::Response, 3);
        drop(mhu);

        assert_eq!(page.read(CPU_INTR_S_SET), 1 << 5);
        assert_eq!(page.read(SCP_INTR_S_CLEAR), 1 << 3);
        // STAT is never written by the driver.
        assert_eq!(page.read(CPU_INTR_S_STAT), 0xAB);
        assert_eq!(page.read(SCP_INTR_S_STAT), 0x40);
    }

    #[test]
    #[should_panic(expected = "slot 31 exceeds maximum slot id 30")]
    fn reserved_bit_is_never_written() {
        let mut page = FakePage::new();
        let mhu = unsafe { Mhu::new(page.base()) };
        mhu.set_bit(Direction::Request, 31);
    }
}
