//! Console output formatter for Weather Vibes results

use colored::Colorize;
use serde::Serialize;
use vibes_application::{UmbrellaAdvice, VideoRecommendation};
use vibes_domain::{ToolMetadata, WeatherReport};

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a weather report
    pub fn format_weather(report: &WeatherReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Weather in {}", report.location)));
        output.push('\n');
        output.push_str(&Self::mock_notice(
            report.mock_data,
            report.missing_api_keys.as_deref(),
        ));

        output.push_str(&Self::field("Condition:", &report.weather_condition));
        output.push_str(&Self::field(
            "Temperature:",
            &format!("{}°C", report.temperature),
        ));
        output.push_str(&Self::field(
            "Chance of rain:",
            &format!("{}%", report.precipitation_chance),
        ));
        if let Some(humidity) = report.humidity {
            output.push_str(&Self::field("Humidity:", &format!("{}%", humidity)));
        }
        if let Some(wind) = report.wind_speed {
            output.push_str(&Self::field("Wind:", &format!("{} km/h", wind)));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the umbrella advice; the summary already holds the details
    pub fn format_umbrella(advice: &UmbrellaAdvice) -> String {
        let mut lines = advice.summary.lines();
        let verdict = lines.next().unwrap_or_default();
        let verdict = if advice.needs_umbrella {
            verdict.yellow().bold()
        } else {
            verdict.green().bold()
        };

        let rest: Vec<&str> = lines.collect();
        format!("{}\n{}\n", verdict, rest.join("\n"))
    }

    /// Format a video recommendation
    pub fn format_recommendation(rec: &VideoRecommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Weather Vibes for {}", rec.weather.location)));
        output.push('\n');
        output.push_str(&Self::mock_notice(
            rec.weather.mock_data,
            rec.weather.missing_api_keys.as_deref(),
        ));
        output.push_str(&Self::mock_notice(
            rec.vibes.mock_data,
            rec.vibes.missing_api_key.as_deref(),
        ));

        output.push_str(&Self::field("Weather:", &rec.weather.summary()));
        output.push_str(&Self::field("Search:", &rec.vibes.search_query));

        output.push_str(&Self::section_header("Videos"));
        if rec.vibes.videos.is_empty() {
            output.push_str(&format!("{}\n", "No videos found".dimmed()));
        }
        for (i, video) in rec.vibes.videos.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n   {} {}\n   {}\n",
                format!("{}.", i + 1).yellow().bold(),
                video.title.bold(),
                "by".dimmed(),
                video.channel_title,
                video.video_url.blue().underline()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a list of tool metadata
    pub fn format_tools(tools: &[&ToolMetadata]) -> String {
        if tools.is_empty() {
            return format!("{}\n", "No matching tools".dimmed());
        }

        let mut output = String::new();
        for tool in tools {
            let tags: Vec<&str> = tool.tags.iter().map(String::as_str).collect();
            output.push_str(&format!(
                "{} {}\n  {}\n",
                tool.name.cyan().bold(),
                format!("[{}]", tags.join(", ")).dimmed(),
                tool.description
            ));
            let inputs = tool.required_inputs();
            if !inputs.is_empty() {
                output.push_str(&format!("  {} {}\n", "requires:".dimmed(), inputs.join(", ")));
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn mock_notice(mock: bool, missing: Option<&str>) -> String {
        if !mock {
            return String::new();
        }
        format!(
            "{} {}\n",
            "[MOCK DATA]".yellow().bold(),
            format!("{} not set", missing.unwrap_or("API key")).yellow()
        )
    }

    fn field(label: &str, value: &str) -> String {
        format!("{:<16}{}\n", label.cyan().bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibes_domain::{VibesReport, VideoEntry};

    fn recommendation(videos: Vec<VideoEntry>) -> VideoRecommendation {
        VideoRecommendation {
            weather: WeatherReport::mock("Paris", "WEATHER_API_KEY and WEATHERAPI_KEY"),
            vibes: VibesReport {
                weather_condition: "Partly cloudy".to_string(),
                temperature: 22.5,
                search_query: "cloudy day chill warm summer music playlist".to_string(),
                videos,
                mock_data: false,
                missing_api_key: None,
            },
        }
    }

    #[test]
    fn test_format_weather() {
        let out = ConsoleFormatter::format_weather(&WeatherReport::mock("Paris", "WEATHER_API_KEY"));
        assert!(out.contains("Weather in Paris"));
        assert!(out.contains("22.5°C"));
        assert!(out.contains("WEATHER_API_KEY not set"));
    }

    #[test]
    fn test_format_umbrella_keeps_details() {
        let advice = UmbrellaAdvice {
            needs_umbrella: true,
            summary: "You need an umbrella today!\n\nWeather details for Paris:\n- Temperature: 18°C"
                .to_string(),
        };
        let out = ConsoleFormatter::format_umbrella(&advice);
        assert!(out.contains("You need an umbrella today!"));
        assert!(out.contains("- Temperature: 18°C"));
    }

    #[test]
    fn test_format_recommendation_lists_videos() {
        let rec = recommendation(vec![VideoEntry {
            title: "Cloudy Day Mix".to_string(),
            channel_title: "Chill Channel".to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
            video_id: "abc".to_string(),
            video_url: "https://www.youtube.com/watch?v=abc".to_string(),
        }]);

        let out = ConsoleFormatter::format_recommendation(&rec);

        assert!(out.contains("Cloudy Day Mix"));
        assert!(out.contains("Chill Channel"));
        assert!(out.contains("cloudy day chill warm summer music playlist"));
    }

    #[test]
    fn test_format_recommendation_without_videos() {
        let out = ConsoleFormatter::format_recommendation(&recommendation(Vec::new()));
        assert!(out.contains("No videos found"));
    }

    #[test]
    fn test_format_tools() {
        let meta = ToolMetadata::new("umbrella_decider", "Decides if an umbrella is needed")
            .with_tags(["decision"]);
        let out = ConsoleFormatter::format_tools(&[&meta]);
        assert!(out.contains("umbrella_decider"));
        assert!(out.contains("Decides if an umbrella is needed"));
        assert!(ConsoleFormatter::format_tools(&[]).contains("No matching tools"));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&WeatherReport::mock("Paris", "X"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mock_data"], true);
    }
}
