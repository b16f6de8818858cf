mod fpa;

/// Checks used in debug_assert!() statements and tests
pub mod assertions;

#[doc(inline)]
pub use fpa::FPA;
