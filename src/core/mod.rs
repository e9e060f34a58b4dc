// Core numeric bound, capability traits and tagged value cells
pub mod data_type;
pub mod numeric;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use data_type::DataType;
pub use numeric::Numeric;
pub use traits::{CategoryConstrained, Indexable, Lengthed, MutablyIndexable};
pub use value::{Variant, VectorValue};
