use crate::application::lookup::SearchOutcome;
use crate::domain::convert::miles_to_kms;
use crate::domain::model::CountryRecord;
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Tag printed next to the country name, telling where the record came from.
pub fn source_indicator(outcome: &SearchOutcome, enable_emoji: bool) -> Option<&'static str> {
    match outcome {
        SearchOutcome::CacheHit(_) => Some(if enable_emoji { "💾 [cached]" } else { "[cached]" }),
        SearchOutcome::Fetched(_) => Some(if enable_emoji { "🌐 [online]" } else { "[online]" }),
        _ => None,
    }
}

/// One-line message for searches that left nothing on display.
pub fn outcome_message(outcome: &SearchOutcome) -> Option<&'static str> {
    match outcome {
        SearchOutcome::Empty => Some("Please provide a country name"),
        SearchOutcome::NotFound => Some("No country found"),
        SearchOutcome::Failed => Some("Lookup failed, see log for details"),
        SearchOutcome::Superseded | SearchOutcome::CacheHit(_) | SearchOutcome::Fetched(_) => None,
    }
}

pub fn format_country(
    record: &CountryRecord,
    theme: &Theme,
    source: Option<&str>,
    is_favourite: bool,
    enable_emoji: bool,
) -> String {
    let mut output = String::new();

    let mut header = (theme.title)(record.common_name());
    if let Some(source) = source {
        header.push(' ');
        header.push_str(&(theme.label)(source));
    }
    if is_favourite {
        let star = if enable_emoji { "★ favourite" } else { "* favourite" };
        header.push(' ');
        header.push_str(&(theme.fav)(star));
    }
    writeln!(output, "{}", header).ok();

    if let Some(official) = &record.name.official {
        writeln!(output, "  {}", (theme.value)(official)).ok();
    }
    writeln!(output, "  {}", (theme.line)(&"⸺".repeat(30))).ok();

    let area = format!("{} sq mi", record.area);
    let area_km = format!("{} sq km", miles_to_kms(record.area));
    let currency = record
        .primary_currency()
        .map(|c| c.label())
        .unwrap_or_default();
    let rows = [
        ("Capital", record.capital_line()),
        ("Population", record.population.to_string()),
        ("Area", area),
        ("Area", area_km),
        ("Languages", record.languages_line()),
        ("Timezones", record.timezones_line()),
        ("Currency", currency),
    ];
    for (label, value) in rows.iter() {
        writeln!(
            output,
            "  {} {}",
            (theme.label)(&format!("{}:", label)),
            (theme.value)(value)
        )
        .ok();
    }

    if let Some(flag) = record.flags.svg.as_ref().or(record.flags.png.as_ref()) {
        writeln!(output, "  {} {}", (theme.label)("Flag:"), (theme.link)(flag)).ok();
    }

    writeln!(output).ok();
    output
}

pub fn format_favourites(names: &[String], theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();
    let title = if enable_emoji { "★ Favourites" } else { "Favourites" };
    writeln!(output, "{}", (theme.title)(title)).ok();

    if names.is_empty() {
        writeln!(output, "  {}", (theme.line)("(none yet)")).ok();
    }
    for (i, name) in names.iter().enumerate() {
        writeln!(
            output,
            "  {}. {}",
            (theme.idx)(&(i + 1).to_string()),
            (theme.value)(name)
        )
        .ok();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> CountryRecord {
        serde_json::from_str(
            r#"{
                "name": {"common": "France", "official": "French Republic"},
                "capital": ["Paris"],
                "population": 67391582,
                "area": 551695,
                "flags": {"svg": "https://flagcdn.com/fr.svg"},
                "languages": {"fra": "French"},
                "timezones": ["UTC+01:00"],
                "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_format_country() {
        let theme = Theme::from_name("plain");
        let output = format_country(&france(), &theme, Some("[online]"), false, false);

        assert!(output.starts_with("France [online]\n"));
        assert!(output.contains("Capital: Paris"));
        assert!(output.contains("Population: 67391582"));
        assert!(output.contains("Area: 551695 sq mi"));
        assert!(output.contains("Area: 887865 sq km"));
        assert!(output.contains("Languages: French"));
        assert!(output.contains("Currency: Euro (€)"));
        assert!(output.contains("Flag: https://flagcdn.com/fr.svg"));
        assert!(!output.contains("favourite"));
    }

    #[test]
    fn test_favourite_marker() {
        let theme = Theme::from_name("plain");
        let output = format_country(&france(), &theme, None, true, false);
        assert!(output.starts_with("France * favourite\n"));
    }

    #[test]
    fn test_format_favourites() {
        let theme = Theme::from_name("plain");
        let names = vec!["France".to_string(), "Japan".to_string()];
        let output = format_favourites(&names, &theme, false);
        assert_eq!(output, "Favourites\n  1. France\n  2. Japan\n");

        let output = format_favourites(&[], &theme, false);
        assert!(output.contains("(none yet)"));
    }

    #[test]
    fn test_source_indicator() {
        assert_eq!(
            source_indicator(&SearchOutcome::CacheHit(france()), false),
            Some("[cached]")
        );
        assert_eq!(source_indicator(&SearchOutcome::NotFound, true), None);
    }
}
