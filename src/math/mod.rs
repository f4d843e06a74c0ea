pub mod float;
pub mod utils;
pub mod vec;
