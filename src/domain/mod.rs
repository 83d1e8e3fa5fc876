pub mod convert;
pub mod error;
pub mod model;
pub mod traits;
