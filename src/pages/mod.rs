//! Pages
//!
//! Top-level page components for each route.

pub mod mean_time_weekday;
pub mod presence_start_end;
pub mod presence_weekday;

pub use mean_time_weekday::MeanTimeWeekday;
pub use presence_start_end::PresenceStartEnd;
pub use presence_weekday::PresenceWeekday;
