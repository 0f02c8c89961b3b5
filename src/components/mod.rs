//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod counter_card;
pub mod error_message;
pub mod header;
pub mod loading;

pub use counter_card::CounterCard;
pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading::Loading;
