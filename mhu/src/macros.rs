/// Declares the crate's error codes.
///
/// Every code becomes a variant of `SysError` carrying its number and
/// description, plus a `'static` instance so that call sites can write
/// `Err(EINVAL)`.
#[macro_export]
macro_rules! errno_decl {
    ($($ident:ident = $code:literal => $literal:literal), * $(,)?) => {
        pub enum SysError{
            $($ident(u8,&'static str)),*
        }

        $(pub static $ident: &'static SysError= &SysError::$ident($code, $literal);)*

        impl SysError {
            pub fn code(&self) -> u8 {
                match self{
                    $(SysError::$ident(c,_) => *c,)*
                }
            }
        }

        impl core::fmt::Display for SysError{
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
               match self{
                   $(SysError::$ident(c,s)=>{write!(f, "{},{}",c, s)},)*
               }
           }
        }
        impl core::fmt::Debug for SysError{
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
               match self{
                   $(SysError::$ident(_,s)=>{write!(f, "{}", s)},)*
               }
           }
        }

        impl PartialEq for SysError{
            fn eq(&self, other: &Self) -> bool {
                self.code() == other.code()
            }
        }

        impl core::error::Error for SysError{}


        pub type ErrorCode = &'static SysError;

    };
}

/// Asserts a protocol invariant.
///
/// A violation is a defect in the caller, never a runtime condition: it is
/// logged at error level and then the executing context panics. On the
/// target the panic handler parks the core.
#[macro_export]
macro_rules! fatal_assert {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__log::error!("MHU contract violation: {}", format_args!($($arg)+));
            panic!($($arg)+);
        }
    };
}

/// Like [`fatal_assert!`], but only checked with debug assertions enabled.
#[macro_export]
macro_rules! debug_fatal_assert {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            $crate::fatal_assert!($($arg)+);
        }
    };
}
