mod filter_dropdown;

pub use filter_dropdown::*;
