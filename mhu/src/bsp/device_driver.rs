mod mhu;

pub use mhu::*;
