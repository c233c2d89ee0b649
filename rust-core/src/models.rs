use serde::{Deserialize, Deserializer, Serialize};

/// Largest expenditure a single day may record.
pub const MAX_EXPENDITURE: u32 = 200;
/// One histogram bucket per expenditure value in `0..=MAX_EXPENDITURE`.
pub const BUCKETS: usize = MAX_EXPENDITURE as usize + 1;
/// Longest expenditure history accepted.
pub const MAX_DAYS: usize = 200_000;

fn deserialize_expenditures<'de, D>(d: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<i64> = Vec::deserialize(d)?;
    raw.into_iter()
        .enumerate()
        .map(|(i, v)| {
            u32::try_from(v)
                .ok()
                .filter(|&v| v <= MAX_EXPENDITURE)
                .ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!(
                        "expenditure {v} at day {} is outside 0..={MAX_EXPENDITURE}",
                        i + 1
                    ))
                })
        })
        .collect()
}

/// Total days `n` and trailing window `d` from the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub days: usize,
    pub window: usize,
}

/// A validated request: the expenditure history and the trailing window size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    #[serde(deserialize_with = "deserialize_expenditures")]
    pub expenditures: Vec<u32>,
    pub window: usize,
}

/// Outcome for one evaluated day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySignal {
    /// 0-based index into the expenditure history.
    pub day: usize,
    pub expenditure: u32,
    pub median: f64,
    pub threshold: f64,
    pub notify: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationReport {
    pub notifications: usize,
    pub signals: Vec<DaySignal>,
}
