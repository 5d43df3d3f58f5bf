mod skin_analysis;

pub use skin_analysis::*;
