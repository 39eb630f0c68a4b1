pub mod channel;
pub mod product;
