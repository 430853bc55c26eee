//! Rule-based recommendations.
//!
//! Output order is the order in which rules are evaluated, not priority.

mod assessment;
mod monitor;

pub use assessment::for_assessment;
pub use monitor::for_check_in;
