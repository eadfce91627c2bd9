use serde::Serialize;
use std::collections::BTreeMap;

///
/// Number of waiting tickets per slot label
///
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SlotsUsage(pub BTreeMap<String, u64>);

impl FromIterator<String> for SlotsUsage {
    fn from_iter<T: IntoIterator<Item = String>>(scheduled_times: T) -> Self {
        let mut usage = BTreeMap::new();
        for scheduled_time in scheduled_times {
            *usage.entry(scheduled_time).or_insert(0) += 1;
        }

        Self(usage)
    }
}
