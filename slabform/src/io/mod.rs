mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Exports a computed layout out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;

/// Imports a part catalog into the library.
pub use import::import_catalog;
