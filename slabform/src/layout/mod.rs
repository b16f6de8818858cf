mod cancel;

pub mod best_fit;
pub mod boundary;
pub mod filters;
pub mod lattice;
/// Fans the enabled placement strategies out over a thread pool and assembles a [SlabLayout](crate::entities::SlabLayout)
pub mod orchestrator;
pub mod scanline;
pub mod strategies;

#[doc(inline)]
pub use cancel::CancelToken;
