//! Fraud-notify core: counts days whose spending reaches twice the trailing median.
//! Histogram-backed sliding window, constant memory in the hot path.

mod anomaly;
mod error;
mod input;
mod models;
mod window;

pub use anomaly::{count_notifications, notification_report};
pub use error::{InputError, NotificationError};
pub use input::{parse_bounds, parse_expenditures, read_request};
pub use models::{
    Bounds, DaySignal, NotificationReport, Request, BUCKETS, MAX_DAYS, MAX_EXPENDITURE,
};
pub use window::FrequencyWindow;
