pub mod doctype;
pub mod heading;
pub mod outcome;

pub use doctype::classify;
pub use heading::{evaluate, heading_level, is_heading};
pub use outcome::{AcceptRule, DocTypeScore, LineVerdict, RejectReason};
