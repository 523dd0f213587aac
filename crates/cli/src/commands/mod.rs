pub mod catalog;
pub mod convert;
pub mod generate;
pub mod options;
pub mod tables;

pub use catalog::*;
pub use convert::*;
pub use generate::*;
pub use options::*;
pub use tables::*;
