//! Board support. Device drivers are generic over the base address; the board
//! modules know where the devices are and own the single instance of each.

pub mod device_driver;

cfg_if::cfg_if! {
    if #[cfg(feature = "bsp_juno")] {
        mod juno;
        pub use juno::*;
    }
}
