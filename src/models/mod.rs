pub mod claim;
pub mod enums;
pub mod fields;
pub mod report;

pub use claim::*;
pub use enums::*;
pub use fields::*;
pub use report::*;
