//! State Management
//!
//! Dashboard view state and the polling loop that drives it.

pub mod global;
pub mod polling;

pub use global::{provide_dashboard_state, Counter, DashboardState, ViewState};
pub use polling::start_polling;
