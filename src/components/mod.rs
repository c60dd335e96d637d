//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod timeline_chart;
pub mod toast;
pub mod user_card;
pub mod user_select;
pub mod weekday_chart;

pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use timeline_chart::TimelineChart;
pub use toast::Toast;
pub use user_card::UserCard;
pub use user_select::UserSelect;
pub use weekday_chart::WeekdayBarChart;
