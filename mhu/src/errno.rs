use crate::errno_decl;

errno_decl!(
    EINVAL = 22 => "Invalid argument",
    EALREADY = 114 => "Operation already done"
);
