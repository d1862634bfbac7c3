//! Logging macros shared by the library and the binary.
//!
//! On the RP2040 the macros forward to [`defmt`] (RTT transport is set up by
//! the binary). On the host there is no global logger, so the macros only
//! borrow their arguments to keep them type-checked and compile to nothing.

#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}
