//! Trailing-median notification scan. Single pass, one histogram, no sorting.

use log::{debug, trace};

use crate::error::NotificationError;
use crate::models::{DaySignal, NotificationReport, MAX_DAYS, MAX_EXPENDITURE};
use crate::window::FrequencyWindow;

/// Count the days whose expenditure is at least twice the median of the
/// `window` days before it. The first `window` days are never evaluated.
pub fn count_notifications(
    expenditures: &[u32],
    window: usize,
) -> Result<usize, NotificationError> {
    validate(expenditures, window)?;
    let mut notifications = 0;
    scan(expenditures, window, |signal| {
        if signal.notify {
            notifications += 1;
        }
    })?;
    Ok(notifications)
}

/// Same scan as [`count_notifications`], keeping the median and threshold of
/// every evaluated day.
pub fn notification_report(
    expenditures: &[u32],
    window: usize,
) -> Result<NotificationReport, NotificationError> {
    validate(expenditures, window)?;
    let mut signals = Vec::with_capacity(expenditures.len() - window);
    scan(expenditures, window, |signal| signals.push(signal))?;
    let notifications = signals.iter().filter(|s| s.notify).count();
    Ok(NotificationReport {
        notifications,
        signals,
    })
}

fn validate(expenditures: &[u32], window: usize) -> Result<(), NotificationError> {
    let len = expenditures.len();
    if window == 0 {
        return Err(NotificationError::EmptyWindow);
    }
    if window > len {
        return Err(NotificationError::WindowTooLarge { window, len });
    }
    if len > MAX_DAYS {
        return Err(NotificationError::TooManyDays { len });
    }
    match expenditures.iter().position(|&v| v > MAX_EXPENDITURE) {
        Some(i) => Err(NotificationError::ExpenditureOutOfRange {
            day: i + 1,
            value: expenditures[i],
        }),
        None => Ok(()),
    }
}

/// Expects input that already passed [`validate`].
fn scan<F>(expenditures: &[u32], window: usize, mut on_day: F) -> Result<(), NotificationError>
where
    F: FnMut(DaySignal),
{
    debug!(
        "scanning {} days with a trailing window of {}",
        expenditures.len(),
        window
    );

    let mut freq = FrequencyWindow::initialize(expenditures, window);
    for day in window..expenditures.len() {
        let median = freq
            .median()
            .ok_or_else(|| NotificationError::WindowInvariant {
                total: freq.total(),
                window,
            })?;
        let expenditure = expenditures[day];
        let threshold = 2.0 * median;
        let notify = f64::from(expenditure) >= threshold;
        if notify {
            trace!("day {day}: spent {expenditure}, trailing median {median}");
        }
        on_day(DaySignal {
            day,
            expenditure,
            median,
            threshold,
            notify,
        });
        freq.slide(expenditures[day - window], expenditure);
    }
    Ok(())
}
