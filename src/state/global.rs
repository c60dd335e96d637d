//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the typed domain
//! model decoded from the presence API.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use leptos::*;
use serde::{Deserialize, Deserializer};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Users available in the dropdown
    pub users: RwSignal<Vec<UserSummary>>,
    /// Currently selected user id, if any
    pub selected_user: RwSignal<Option<u32>>,
    /// Whether the initial users fetch is still in flight
    pub users_loading: RwSignal<bool>,
    /// Global loading state for per-user fetches
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Bumped on every selection change; in-flight fetches compare against it
    /// and drop their response if the selection moved on.
    pub fetch_generation: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            users: create_rw_signal(Vec::new()),
            selected_user: create_rw_signal(None),
            users_loading: create_rw_signal(true),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            fetch_generation: create_rw_signal(0),
        }
    }

    /// Record a new selection and invalidate any in-flight fetches.
    pub fn select_user(&self, user_id: Option<u32>) {
        self.fetch_generation.update(|g| *g += 1);
        self.selected_user.set(user_id);
    }

    /// Generation token to capture before spawning a fetch.
    pub fn current_generation(&self) -> u64 {
        self.fetch_generation.get_untracked()
    }

    /// True if a response captured at `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.fetch_generation.get_untracked() == generation
    }

    /// Display name for the selected user, if known.
    pub fn selected_user_name(&self) -> Option<String> {
        let id = self.selected_user.get()?;
        self.users
            .get()
            .iter()
            .find(|u| u.user_id == id)
            .map(|u| u.name.clone())
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

// ============ Domain model ============

/// One entry of the users listing, used to populate the dropdown
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserSummary {
    pub user_id: u32,
    pub name: String,
}

/// Full profile of a single user
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub image_url: String,
}

/// Six-element timestamp as serialized by the server:
/// `[year, month, day, hour, minute, second]` with a zero-indexed month.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct TimestampTuple(pub i32, pub u32, pub u32, pub u32, pub u32, pub u32);

impl TimestampTuple {
    /// Convert into a calendar datetime. The wire month is zero-indexed, so
    /// it is re-offset by one for chrono. Returns `None` for components that
    /// do not form a valid datetime.
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        let TimestampTuple(year, month0, day, hour, minute, second) = self;
        NaiveDate::from_ymd_opt(year, month0 + 1, day)?.and_hms_opt(hour, minute, second)
    }
}

/// One row of the per-user start/end listing, as serialized: a positional
/// array `[weekday, start_tuple, end_tuple]`.
#[derive(Clone, Debug, PartialEq)]
pub struct PresenceInterval {
    pub weekday: String,
    pub start: TimestampTuple,
    pub end: TimestampTuple,
}

impl<'de> Deserialize<'de> for PresenceInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (weekday, start, end) =
            <(String, TimestampTuple, TimestampTuple)>::deserialize(deserializer)?;
        Ok(Self { weekday, start, end })
    }
}

impl PresenceInterval {
    /// Replace the raw tuples with calendar datetimes, failing on tuples
    /// that do not denote a valid moment.
    pub fn into_row(self) -> Result<PresenceRow, String> {
        let start = self
            .start
            .to_datetime()
            .ok_or_else(|| format!("invalid start timestamp for {}", self.weekday))?;
        let end = self
            .end
            .to_datetime()
            .ok_or_else(|| format!("invalid end timestamp for {}", self.weekday))?;
        Ok(PresenceRow {
            weekday: self.weekday,
            start,
            end,
        })
    }
}

/// Chart-ready start/end row
#[derive(Clone, Debug, PartialEq)]
pub struct PresenceRow {
    pub weekday: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PresenceRow {
    pub fn start_label(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_label(&self) -> String {
        self.end.format("%H:%M:%S").to_string()
    }
}

/// Transform every interval of a response into chart rows.
pub fn transform_intervals(intervals: Vec<PresenceInterval>) -> Result<Vec<PresenceRow>, String> {
    intervals.into_iter().map(PresenceInterval::into_row).collect()
}

/// Seconds since midnight of a datetime's time-of-day component.
pub fn seconds_since_midnight(dt: &NaiveDateTime) -> u32 {
    dt.hour() * 3600 + dt.minute() * 60 + dt.second()
}

/// Mean presence duration for one weekday, in seconds
#[derive(Clone, Debug, PartialEq)]
pub struct WeekdayMean {
    pub weekday: String,
    pub mean_seconds: f64,
}

impl<'de> Deserialize<'de> for WeekdayMean {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (weekday, mean_seconds) = <(String, f64)>::deserialize(deserializer)?;
        Ok(Self {
            weekday,
            mean_seconds,
        })
    }
}

/// Total presence duration for one weekday, in seconds
#[derive(Clone, Debug, PartialEq)]
pub struct WeekdayTotal {
    pub weekday: String,
    pub total_seconds: f64,
}

/// Decode the presence-weekday listing. The endpoint prepends a header row
/// `["Weekday", "Presence (s)"]`, so any row whose second element is not
/// numeric is skipped.
pub fn parse_weekday_totals(rows: &[serde_json::Value]) -> Vec<WeekdayTotal> {
    rows.iter()
        .filter_map(|row| {
            let pair = row.as_array()?;
            let weekday = pair.first()?.as_str()?.to_string();
            let total_seconds = pair.get(1)?.as_f64()?;
            Some(WeekdayTotal {
                weekday,
                total_seconds,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_tuple_decodes_from_array() {
        let tuple: TimestampTuple = serde_json::from_str("[2024,0,1,9,0,0]").unwrap();
        assert_eq!(tuple, TimestampTuple(2024, 0, 1, 9, 0, 0));
    }

    #[test]
    fn test_timestamp_tuple_rejects_short_array() {
        let result: Result<TimestampTuple, _> = serde_json::from_str("[2024,0,1]");
        assert!(result.is_err());
    }

    #[test]
    fn test_tuple_roundtrips_components() {
        let dt = TimestampTuple(2013, 9, 15, 8, 30, 45).to_datetime().unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2013-10-15 08:30:45"
        );
    }

    #[test]
    fn test_tuple_month_is_zero_indexed() {
        let dt = TimestampTuple(2024, 0, 1, 9, 0, 0).to_datetime().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-01");
    }

    #[test]
    fn test_invalid_tuple_yields_none() {
        assert!(TimestampTuple(2024, 12, 1, 9, 0, 0).to_datetime().is_none());
        assert!(TimestampTuple(2024, 0, 1, 25, 0, 0).to_datetime().is_none());
        assert!(TimestampTuple(2024, 1, 30, 9, 0, 0).to_datetime().is_none());
    }

    #[test]
    fn test_interval_decodes_positionally() {
        let json = r#"["Mon", [2024,0,1,9,0,0], [2024,0,1,17,0,0]]"#;
        let interval: PresenceInterval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.weekday, "Mon");
        assert_eq!(interval.start, TimestampTuple(2024, 0, 1, 9, 0, 0));
        assert_eq!(interval.end, TimestampTuple(2024, 0, 1, 17, 0, 0));
    }

    #[test]
    fn test_interval_list_transforms_to_rows() {
        let json = r#"[["Mon", [2024,0,1,9,0,0], [2024,0,1,17,0,0]]]"#;
        let intervals: Vec<PresenceInterval> = serde_json::from_str(json).unwrap();
        let rows = transform_intervals(intervals).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_label(), "09:00:00");
        assert_eq!(rows[0].end_label(), "17:00:00");
    }

    #[test]
    fn test_empty_interval_list_transforms_to_zero_rows() {
        let rows = transform_intervals(Vec::new()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_malformed_interval_is_a_decode_error() {
        let json = r#"["Mon", [2024,0,1,9,0], [2024,0,1,17,0,0]]"#;
        let result: Result<PresenceInterval, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_tuple_is_a_transform_error() {
        let json = r#"[["Mon", [2024,0,1,25,0,0], [2024,0,1,17,0,0]]]"#;
        let intervals: Vec<PresenceInterval> = serde_json::from_str(json).unwrap();
        assert!(transform_intervals(intervals).is_err());
    }

    #[test]
    fn test_seconds_since_midnight() {
        let dt = TimestampTuple(2024, 0, 1, 9, 30, 15).to_datetime().unwrap();
        assert_eq!(seconds_since_midnight(&dt), 9 * 3600 + 30 * 60 + 15);
    }

    #[test]
    fn test_user_summary_decodes() {
        let users: Vec<UserSummary> =
            serde_json::from_str(r#"[{"user_id":1,"name":"Alice"}]"#).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, 1);
        assert_eq!(users[0].name, "Alice");
    }

    #[test]
    fn test_user_profile_decodes() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Bob","image_url":"/img/bob.png"}"#).unwrap();
        assert_eq!(profile.name, "Bob");
        assert_eq!(profile.image_url, "/img/bob.png");
    }

    #[test]
    fn test_weekday_mean_decodes_positionally() {
        let rows: Vec<WeekdayMean> =
            serde_json::from_str(r#"[["Mon", 30420.0], ["Tue", 0]]"#).unwrap();
        assert_eq!(rows[0].weekday, "Mon");
        assert_eq!(rows[0].mean_seconds, 30420.0);
        assert_eq!(rows[1].mean_seconds, 0.0);
    }

    #[test]
    fn test_selection_change_invalidates_old_generation() {
        let runtime = create_runtime();

        let state = GlobalState::new();
        let generation = state.current_generation();
        assert!(state.is_current(generation));

        // A new selection supersedes any fetch spawned before it
        state.select_user(Some(2));
        assert!(!state.is_current(generation));
        assert!(state.is_current(state.current_generation()));

        // Deselecting also invalidates in-flight fetches
        let generation = state.current_generation();
        state.select_user(None);
        assert!(!state.is_current(generation));

        runtime.dispose();
    }

    #[test]
    fn test_weekday_totals_skip_header_row() {
        let raw: Vec<serde_json::Value> = serde_json::from_str(
            r#"[["Weekday", "Presence (s)"], ["Mon", 28800], ["Tue", 0]]"#,
        )
        .unwrap();
        let totals = parse_weekday_totals(&raw);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].weekday, "Mon");
        assert_eq!(totals[0].total_seconds, 28800.0);
    }
}
