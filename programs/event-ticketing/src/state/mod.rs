pub mod event;
pub mod payment;

pub use event::*;
pub use payment::*;
