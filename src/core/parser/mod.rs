pub mod float_list;

pub use float_list::*;
