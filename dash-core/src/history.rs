//! Bounded per-city observation history.

use std::collections::{HashMap, VecDeque};

use crate::model::WeatherRecord;

/// Records kept per city before the oldest are evicted.
pub const HISTORY_CAPACITY: usize = 200;

/// Owns one insertion-ordered buffer per city.
///
/// Buffers are created on the first append for a city and only shrink through
/// capacity eviction or [`HistoryTracker::clear`].
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    capacity: usize,
    buffers: HashMap<String, VecDeque<WeatherRecord>>,
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            buffers: HashMap::new(),
        }
    }

    pub fn append(&mut self, record: WeatherRecord) {
        let buffer = self.buffers.entry(record.city.clone()).or_default();
        buffer.push_back(record);
        while buffer.len() > self.capacity {
            buffer.pop_front();
        }
    }

    /// Latest minus second-latest temperature, if the city has two records.
    pub fn delta(&self, city: &str) -> Option<f64> {
        let buffer = self.buffers.get(city)?;
        let mut newest_first = buffer.iter().rev();
        let latest = newest_first.next()?;
        let previous = newest_first.next()?;
        Some(latest.temperature_c - previous.temperature_c)
    }

    /// Drops one city's buffer, or every buffer when `city` is `None`.
    pub fn clear(&mut self, city: Option<&str>) {
        match city {
            Some(city) => {
                self.buffers.remove(city);
            }
            None => self.buffers.clear(),
        }
    }

    pub fn records(&self, city: &str) -> impl Iterator<Item = &WeatherRecord> {
        self.buffers.get(city).into_iter().flatten()
    }

    pub fn latest(&self, city: &str) -> Option<&WeatherRecord> {
        self.buffers.get(city).and_then(|b| b.back())
    }

    /// Temperature series in insertion order, for trend display.
    pub fn temperatures(&self, city: &str) -> Vec<f64> {
        self.records(city).map(|r| r.temperature_c).collect()
    }

    pub fn len(&self, city: &str) -> usize {
        self.buffers.get(city).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Cities that currently have a buffer, sorted by name.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.buffers.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Observation;

    fn record(city: &str, temp: f64) -> WeatherRecord {
        WeatherRecord::observed_now(
            city,
            Observation {
                temperature_c: temp,
                feels_like_c: temp,
                humidity_pct: 40,
                pressure_hpa: 1015,
                wind_speed_mps: 1.0,
                description: "Clear Sky".into(),
            },
        )
    }

    #[test]
    fn keeps_the_most_recent_two_hundred_in_order() {
        let mut history = HistoryTracker::new();
        for i in 0..205 {
            history.append(record("X", i as f64));
        }

        assert_eq!(history.len("X"), 200);
        let temps = history.temperatures("X");
        let expected: Vec<f64> = (5..205).map(|i| i as f64).collect();
        assert_eq!(temps, expected);
    }

    #[test]
    fn delta_needs_two_records() {
        let mut history = HistoryTracker::new();
        assert_eq!(history.delta("X"), None);

        history.append(record("X", 20.0));
        assert_eq!(history.delta("X"), None);

        history.append(record("X", 22.5));
        assert_eq!(history.delta("X"), Some(2.5));
        // Repeated queries see the same buffer state.
        assert_eq!(history.delta("X"), Some(2.5));
    }

    #[test]
    fn delta_can_be_negative() {
        let mut history = HistoryTracker::new();
        history.append(record("Y", 18.0));
        history.append(record("Y", 15.5));
        assert_eq!(history.delta("Y"), Some(-2.5));
    }

    #[test]
    fn cities_are_tracked_independently() {
        let mut history = HistoryTracker::new();
        history.append(record("Tokyo", 10.0));
        history.append(record("Paris", 5.0));
        history.append(record("Tokyo", 12.0));

        assert_eq!(history.len("Tokyo"), 2);
        assert_eq!(history.len("Paris"), 1);
        assert_eq!(history.delta("Tokyo"), Some(2.0));
        assert_eq!(history.delta("Paris"), None);
        assert_eq!(history.cities(), vec!["Paris", "Tokyo"]);
        assert_eq!(history.latest("Tokyo").map(|r| r.temperature_c), Some(12.0));
    }

    #[test]
    fn clear_one_or_all() {
        let mut history = HistoryTracker::new();
        history.append(record("A", 1.0));
        history.append(record("B", 2.0));

        history.clear(Some("A"));
        assert_eq!(history.len("A"), 0);
        assert_eq!(history.len("B"), 1);

        history.clear(Some("missing"));
        assert_eq!(history.len("B"), 1);

        history.clear(None);
        assert!(history.is_empty());
        assert_eq!(history.records("B").count(), 0);
    }

    #[test]
    fn custom_capacity_evicts_oldest_first() {
        let mut history = HistoryTracker::with_capacity(3);
        for t in [1.0, 2.0, 3.0, 4.0] {
            history.append(record("Z", t));
        }
        assert_eq!(history.temperatures("Z"), vec![2.0, 3.0, 4.0]);
    }
}
