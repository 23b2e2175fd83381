/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::string::String;

#[cfg(not(feature = "std"))]
pub use alloc::string::String;
