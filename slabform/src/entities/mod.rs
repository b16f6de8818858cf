mod context;
mod options;
mod part;
mod slab_layout;

#[doc(inline)]
pub use context::LayoutContext;
#[doc(inline)]
pub use context::PartSelection;
#[doc(inline)]
pub use options::LayoutOptions;
#[doc(inline)]
pub use options::LdsMode;
#[doc(inline)]
pub use options::Orientation;
#[doc(inline)]
pub use options::RowEndRule;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use part::PartGroup;
#[doc(inline)]
pub use part::PartRole;
#[doc(inline)]
pub use part::filter_catalog;
#[doc(inline)]
pub use part::modulations;
#[doc(inline)]
pub use slab_layout::EndLpRow;
#[doc(inline)]
pub use slab_layout::SlabLayout;
