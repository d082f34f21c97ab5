pub mod initialize;
pub mod issue;
pub mod purchase;

pub use initialize::*;
pub use issue::*;
pub use purchase::*;
