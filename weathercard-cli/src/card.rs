//! Terminal rendering of the weather card.
//!
//! Category decisions come from `weathercard_core::classify`; this module
//! only maps them onto output. A report without a description renders the
//! default categories and no particle banner.

use chrono::Local;
use rand::Rng;
use weathercard_core::{Classification, WeatherReport};

use crate::effects;

/// Render the full card, ambient banner included.
pub fn render<R: Rng + ?Sized>(report: &WeatherReport, rng: &mut R) -> String {
    let class = report
        .description
        .as_deref()
        .map(Classification::of)
        .unwrap_or_default();

    let mut out = String::new();

    let particles = effects::spawn_particles(class.effect, rng);
    if let Some(banner) = effects::banner(class.effect, &particles) {
        out.push_str(&banner);
    }

    out.push('\n');
    out.push_str(&format!(
        "  {}  -  {}\n\n",
        report.location_name,
        Local::now().format("%A, %B %-d")
    ));

    out.push_str(&format!("      {}  {:.0}°\n", class.icon.glyph(), report.temperature_c));
    if let Some(desc) = report.description.as_deref() {
        out.push_str(&format!("      {desc}\n"));
    }
    out.push('\n');

    out.push_str(&format!("  Feels like   {:>5.0}°\n", report.feels_like_c));
    out.push_str(&format!("  Humidity     {:>5}%\n", report.humidity_pct));
    out.push_str(&format!("  Wind         {:>5.0} km/h\n", report.wind_speed_kmh));
    match report.visibility_km {
        Some(km) => out.push_str(&format!("  Visibility   {km:>5.0} km\n")),
        None => out.push_str("  Visibility     n/a\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::{SeedableRng, rngs::StdRng};

    fn report(description: Option<&str>) -> WeatherReport {
        WeatherReport {
            provider: "openweather".to_string(),
            location_name: "New York".to_string(),
            temperature_c: 24.0,
            feels_like_c: 26.0,
            description: description.map(str::to_string),
            humidity_pct: 65,
            wind_speed_kmh: 12.0,
            visibility_km: Some(10.0),
            observation_time: Utc::now(),
        }
    }

    fn render_seeded(report: &WeatherReport) -> String {
        render(report, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn card_shows_location_and_details_grid() {
        let text = render_seeded(&report(Some("Partly Cloudy")));

        assert!(text.contains("New York"));
        assert!(text.contains("Partly Cloudy"));
        assert!(text.contains("24°"));

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.iter().any(|l| l.contains("Feels like") && l.ends_with("26°")));
        assert!(lines.iter().any(|l| l.contains("Humidity") && l.ends_with("65%")));
        assert!(lines.iter().any(|l| l.contains("Wind") && l.ends_with("12 km/h")));
        assert!(lines.iter().any(|l| l.contains("Visibility") && l.ends_with("10 km")));
    }

    #[test]
    fn cloudy_description_picks_cloud_glyph_and_banner() {
        let text = render_seeded(&report(Some("Partly Cloudy")));

        assert!(text.contains("☁️"));
        assert!(text.contains('~'));
    }

    #[test]
    fn clear_description_renders_without_a_banner() {
        let text = render_seeded(&report(Some("clear sky")));

        assert!(text.contains("☀️"));
        assert!(!text.contains('~'));
        assert!(!text.contains('|'));
        assert!(!text.contains('*'));
    }

    #[test]
    fn rainy_description_rains_on_the_banner() {
        let text = render_seeded(&report(Some("Light rain showers")));

        assert!(text.contains("🌧️"));
        assert!(text.contains('|'));
    }

    #[test]
    fn absent_description_falls_back_to_defaults() {
        let text = render_seeded(&report(None));

        // Default pair: clear icon, no effect, and no fabricated text line.
        assert!(text.contains("☀️"));
        assert!(!text.contains('|'));
        assert!(!text.contains('*'));
        assert!(!text.contains('~'));
    }

    #[test]
    fn missing_visibility_renders_as_not_available() {
        let mut r = report(Some("haze"));
        r.visibility_km = None;

        let text = render_seeded(&r);
        assert!(text.lines().any(|l| l.contains("Visibility") && l.ends_with("n/a")));
    }
}
