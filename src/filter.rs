use crate::i18n::{Locale, MessageId, message};
use crate::models::Day;
use chrono::NaiveDate;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Label for the `is_selected` styling flag. Searches match this label, not
/// the derived selection status.
pub fn selected_label(day: &Day, locale: Locale) -> &'static str {
    if day.is_selected {
        message(locale, MessageId::DaySelected)
    } else {
        message(locale, MessageId::DayNotSelected)
    }
}

pub fn matches_query(day: &Day, needle: &str, locale: Locale) -> bool {
    let date = day.date.map(format_date).unwrap_or_default().to_lowercase();
    let status = selected_label(day, locale).to_lowercase();
    date.contains(needle) || status.contains(needle)
}

/// Keeps the days whose formatted date or selection label contains `query`,
/// case-insensitively, in their original order. A blank query keeps everything.
pub fn filter_days<'a>(days: &'a [Day], query: &str, locale: Locale) -> Vec<&'a Day> {
    if query.trim().is_empty() {
        return days.iter().collect();
    }

    let needle = query.to_lowercase();
    days.iter()
        .filter(|day| matches_query(day, &needle, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayId;
    use serde_json::json;

    fn day(id: &str, date: Option<(i32, u32, u32)>, is_selected: bool) -> Day {
        Day {
            id: DayId::new(id),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            meals_number: 2,
            snacks_number: 0,
            day_meals: Vec::new(),
            is_selected,
        }
    }

    fn ids(days: &[&Day]) -> Vec<String> {
        days.iter().map(|day| day.id.to_string()).collect()
    }

    fn sample() -> Vec<Day> {
        vec![
            day("a", Some((2024, 3, 1)), false),
            day("b", Some((2024, 3, 2)), true),
            day("c", None, false),
            day("d", Some((2024, 4, 2)), true),
        ]
    }

    #[test]
    fn blank_query_returns_everything() {
        let days = sample();
        assert_eq!(ids(&filter_days(&days, "", Locale::En)), ["a", "b", "c", "d"]);
        assert_eq!(ids(&filter_days(&days, "   ", Locale::En)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn matches_formatted_date_in_order() {
        let days = sample();
        assert_eq!(ids(&filter_days(&days, "/03/2024", Locale::En)), ["a", "b"]);
        assert_eq!(ids(&filter_days(&days, "02/", Locale::En)), ["b", "d"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let days = sample();
        assert_eq!(
            filter_days(&days, "SELECTED", Locale::En),
            filter_days(&days, "selected", Locale::En)
        );
        assert_eq!(ids(&filter_days(&days, "Not Selected", Locale::En)), ["a", "c"]);
    }

    #[test]
    fn status_label_not_classifier_label_is_searched() {
        let mut days = sample();
        days[1].day_meals = vec![json!("meal")];
        assert!(filter_days(&days, "partially", Locale::En).is_empty());
    }

    #[test]
    fn arabic_labels_are_searched_in_arabic() {
        let days = sample();
        assert_eq!(ids(&filter_days(&days, "غير", Locale::Ar)), ["a", "c"]);
        assert!(filter_days(&days, "not selected", Locale::Ar).is_empty());
    }

    #[test]
    fn undated_day_never_matches_on_date() {
        let days = vec![day("c", None, false)];
        assert!(filter_days(&days, "2024", Locale::En).is_empty());
    }
}
