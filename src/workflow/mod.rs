pub mod context;
pub mod conversion;
pub mod definition;

pub use context::*;
pub use conversion::*;
pub use definition::*;
