pub mod geo;
pub mod id;
pub mod precision;
pub mod serde;
pub mod utm;
