pub mod load_dict;

pub use load_dict::*;
