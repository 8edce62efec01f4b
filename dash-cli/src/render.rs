use std::fmt::Write;

use weather_dash_core::{
    CityComparison, FetchError, TempColor, WeatherRecord, temperature_color, temperature_emoji,
    weather_icon,
};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn paint(color: TempColor, text: &str) -> String {
    format!("\x1b[38;5;{}m{text}{RESET}", color.ansi256())
}

fn signed_delta(delta: Option<f64>) -> String {
    delta.map(|d| format!(" ({d:+.1}°C)")).unwrap_or_default()
}

/// One city card. `detailed` adds humidity, wind and pressure.
pub fn card(record: &WeatherRecord, delta: Option<f64>, detailed: bool) -> String {
    let icon = weather_icon(&record.description);
    let color = temperature_color(record.temperature_c);
    let temp = format!(
        "{} {:.1}°C",
        temperature_emoji(record.temperature_c),
        record.temperature_c
    );

    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}{icon} {}{RESET}", record.city);
    let _ = writeln!(
        out,
        "  Temperature  {}{}   Feels like {:.1}°C",
        paint(color, &temp),
        signed_delta(delta),
        record.feels_like_c
    );
    if detailed {
        let _ = writeln!(out, "  💧 Humidity  {}%", record.humidity_pct);
        let _ = writeln!(out, "  💨 Wind      {} m/s", record.wind_speed_mps);
        let _ = writeln!(out, "  🔽 Pressure  {} hPa", record.pressure_hpa);
        let _ = writeln!(out, "  {icon} Weather   {}", record.description);
    } else {
        let _ = writeln!(out, "  {icon} {}", record.description);
    }
    let _ = writeln!(out, "  📅 {} | 🕒 {}", record.date, record.time);
    out
}

/// Comparison table plus the hottest/coldest/most humid/windiest summary.
pub fn comparison(records: &[WeatherRecord]) -> String {
    let Some(cmp) = CityComparison::from_records(records) else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}📊 City Comparison{RESET}");
    let _ = writeln!(
        out,
        "{:<20} {:>9} {:>15} {:>12} {:>10} {:>14}  Weather",
        "City", "Temp (°C)", "Feels Like (°C)", "Humidity (%)", "Wind (m/s)", "Pressure (hPa)"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<20} {:>9.1} {:>15.1} {:>12} {:>10.1} {:>14}  {}",
            r.city,
            r.temperature_c,
            r.feels_like_c,
            r.humidity_pct,
            r.wind_speed_mps,
            r.pressure_hpa,
            r.description
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "🔥 Hottest City  {} {:.1}°C",
        cmp.hottest.city, cmp.hottest.temperature_c
    );
    let _ = writeln!(
        out,
        "🥶 Coldest City  {} {:.1}°C",
        cmp.coldest.city, cmp.coldest.temperature_c
    );
    let _ = writeln!(
        out,
        "💧 Most Humid    {} {}%",
        cmp.most_humid.city, cmp.most_humid.humidity_pct
    );
    let _ = writeln!(
        out,
        "💨 Windiest      {} {:.1} m/s",
        cmp.windiest.city, cmp.windiest.wind_speed_mps
    );
    out
}

pub fn failure(err: &FetchError) -> String {
    format!("❌ {}", err.user_message())
}
