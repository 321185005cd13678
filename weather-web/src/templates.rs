use askama::Template;
use chrono::{DateTime, Local};
use weather_core::{ComparisonReport, WeatherReport};

/// The landing page with the single-city and comparison forms.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub min_date: DateTime<Local>,
    pub max_date: DateTime<Local>,
}

/// Current conditions for one city.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage<'a> {
    pub report: &'a WeatherReport,
}

/// Side-by-side conditions for two cities.
#[derive(Template)]
#[template(path = "comparison_results.html")]
pub struct ComparisonPage<'a> {
    pub report: &'a ComparisonReport,
}

/// Shown instead of a result page when a lookup fails.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use weather_core::{UnitSystem, WeatherReading};

    fn reading(place: &str) -> WeatherReading {
        WeatherReading {
            place: place.to_string(),
            description: "overcast clouds".to_string(),
            temperature: -3.4,
            humidity: 81,
            wind_speed: 5.2,
            sunrise: Local.timestamp_opt(1609459200, 0).unwrap(),
            sunset: Local.timestamp_opt(1609481400, 0).unwrap(),
            unit_label: 'C',
        }
    }

    #[test]
    fn home_page_embeds_the_date_bounds() {
        let page = HomePage {
            min_date: Local.with_ymd_and_hms(2021, 1, 2, 12, 0, 0).unwrap(),
            max_date: Local.with_ymd_and_hms(2021, 1, 7, 12, 0, 0).unwrap(),
        };

        let html = page.render().unwrap();
        assert!(html.contains("min=\"2021-01-02\""));
        assert!(html.contains("max=\"2021-01-07\""));
        assert!(html.contains("action=\"/results\""));
        assert!(html.contains("action=\"/comparison_results\""));
    }

    #[test]
    fn results_page_shows_every_tracked_field() {
        let report = WeatherReport {
            date: Local.with_ymd_and_hms(2021, 1, 7, 12, 0, 0).unwrap(),
            city: "Oslo".to_string(),
            units: UnitSystem::Metric,
            reading: reading("Oslo"),
        };

        let html = ResultsPage { report: &report }.render().unwrap();
        assert!(html.contains("Oslo"));
        assert!(html.contains("overcast clouds"));
        assert!(html.contains("-3.4"));
        assert!(html.contains("81%"));
        assert!(html.contains("5.2"));
    }

    #[test]
    fn comparison_page_shows_both_readings() {
        let report = ComparisonReport {
            date: Local.with_ymd_and_hms(2021, 1, 7, 12, 0, 0).unwrap(),
            unit_label: 'C',
            first: reading("Oslo"),
            second: reading("Lima"),
        };

        let html = ComparisonPage { report: &report }.render().unwrap();
        assert!(html.contains("Oslo"));
        assert!(html.contains("Lima"));
    }

    #[test]
    fn error_page_carries_the_message() {
        let html = ErrorPage { message: "missing required parameter `city`" }
            .render()
            .unwrap();
        assert!(html.contains("missing required parameter"));
    }

    #[test]
    fn city_names_are_escaped() {
        let mut report = WeatherReport {
            date: Local.with_ymd_and_hms(2021, 1, 7, 12, 0, 0).unwrap(),
            city: "<script>alert(1)</script>".to_string(),
            units: UnitSystem::Metric,
            reading: reading("Oslo"),
        };
        report.reading.place.clone_from(&report.city);

        let html = ResultsPage { report: &report }.render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
