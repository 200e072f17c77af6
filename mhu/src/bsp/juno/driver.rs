use super::{board_name, mmio};
use crate::{
    bsp::device_driver::Mhu,
    errno::{ErrorCode, EALREADY},
    synchronization::RawSpinlock,
    SecureChannel,
};
use core::sync::atomic::{AtomicBool, Ordering};
use lock_api::RawMutex;
use log::info;
use spin::once::Once;

/// The secure MHU channel between the application processors and the SCP.
pub type JunoSecureChannel = SecureChannel<Mhu, RawSpinlock>;

static MHU_SECURE: Once<JunoSecureChannel> = Once::new();

/// Sets up the secure MHU channel. Only the first call does anything.
///
/// # Safety
///
/// The MHU must be mapped as Device memory at [`mmio::MHU_BASE`], and nothing
/// else may drive its secure channel.
pub unsafe fn init() -> Result<&'static JunoSecureChannel, ErrorCode> {
    unsafe { init_at(mmio::MHU_BASE) }
}

unsafe fn init_at(mhu_base: usize) -> Result<&'static JunoSecureChannel, ErrorCode> {
    static INIT_DONE: AtomicBool = AtomicBool::new(false);
    if INIT_DONE.swap(true, Ordering::AcqRel) {
        return Err(EALREADY);
    }

    let channel = MHU_SECURE.call_once(|| {
        let channel = SecureChannel::new(unsafe { Mhu::new(mhu_base) }, RawSpinlock::INIT);
        channel.secure_init();
        channel
    });
    info!("{}: MHU secure channel at {:#x}", board_name(), mhu_base);
    Ok(channel)
}

/// The secure channel, once [`init`] ran.
pub fn secure_channel() -> Option<&'static JunoSecureChannel> {
    MHU_SECURE.get()
}
