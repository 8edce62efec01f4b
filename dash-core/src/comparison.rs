use crate::model::WeatherRecord;

/// Extremes across one refresh cycle's records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityComparison<'a> {
    pub hottest: &'a WeatherRecord,
    pub coldest: &'a WeatherRecord,
    pub most_humid: &'a WeatherRecord,
    pub windiest: &'a WeatherRecord,
}

impl<'a> CityComparison<'a> {
    /// `None` for an empty slice. Ties go to the earliest record.
    pub fn from_records(records: &'a [WeatherRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut cmp = CityComparison {
            hottest: first,
            coldest: first,
            most_humid: first,
            windiest: first,
        };

        for r in &records[1..] {
            if r.temperature_c > cmp.hottest.temperature_c {
                cmp.hottest = r;
            }
            if r.temperature_c < cmp.coldest.temperature_c {
                cmp.coldest = r;
            }
            if r.humidity_pct > cmp.most_humid.humidity_pct {
                cmp.most_humid = r;
            }
            if r.wind_speed_mps > cmp.windiest.wind_speed_mps {
                cmp.windiest = r;
            }
        }

        Some(cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Observation;

    fn record(city: &str, temp: f64, humidity: u8, wind: f64) -> WeatherRecord {
        WeatherRecord::observed_now(
            city,
            Observation {
                temperature_c: temp,
                feels_like_c: temp,
                humidity_pct: humidity,
                pressure_hpa: 1010,
                wind_speed_mps: wind,
                description: "Few Clouds".into(),
            },
        )
    }

    #[test]
    fn empty_input_has_no_comparison() {
        assert!(CityComparison::from_records(&[]).is_none());
    }

    #[test]
    fn picks_extremes() {
        let records = vec![
            record("Sydney", 24.0, 60, 3.1),
            record("Tokyo", 8.5, 45, 7.2),
            record("Dubai", 36.0, 30, 2.0),
            record("London", 11.0, 88, 5.5),
        ];
        let cmp = CityComparison::from_records(&records).unwrap();

        assert_eq!(cmp.hottest.city, "Dubai");
        assert_eq!(cmp.coldest.city, "Tokyo");
        assert_eq!(cmp.most_humid.city, "London");
        assert_eq!(cmp.windiest.city, "Tokyo");
    }

    #[test]
    fn ties_resolve_to_first_record() {
        let records = vec![record("A", 20.0, 50, 1.0), record("B", 20.0, 50, 1.0)];
        let cmp = CityComparison::from_records(&records).unwrap();

        assert_eq!(cmp.hottest.city, "A");
        assert_eq!(cmp.coldest.city, "A");
        assert_eq!(cmp.most_humid.city, "A");
        assert_eq!(cmp.windiest.city, "A");
    }
}
