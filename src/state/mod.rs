//! State Management
//!
//! Global application state and the typed presence domain model.

pub mod global;

pub use global::{
    provide_global_state, GlobalState, PresenceInterval, PresenceRow, TimestampTuple,
    UserProfile, UserSummary, WeekdayMean, WeekdayTotal,
};
