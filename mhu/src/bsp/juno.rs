//! Top-level BSP file for the ARM Juno development platform.

mod driver;
mod memory;

pub use driver::*;
pub use memory::*;

pub fn board_name() -> &'static str {
    "ARM Juno"
}
