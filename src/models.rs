use crate::selection::{SelectionStatus, classify};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a plan day, used as the edit target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(String);

impl DayId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identity for a day the upstream sent without `_id`, taken from its
    /// position in the unfiltered plan.
    pub fn generated(index: usize) -> Self {
        Self(format!("generated-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: DayId,
    pub date: Option<NaiveDate>,
    pub meals_number: i64,
    pub snacks_number: i64,
    pub day_meals: Vec<Value>,
    pub is_selected: bool,
}

impl Day {
    pub fn selected_number(&self) -> i64 {
        i64::try_from(self.day_meals.len()).unwrap_or(i64::MAX)
    }

    pub fn status(&self) -> SelectionStatus {
        classify(self.selected_number(), self.meals_number, self.snacks_number)
    }
}

/// A plan day exactly as the COACH API sends it. Every field is optional and
/// loosely typed; conversion to [`Day`] substitutes defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(rename = "mealsNumber", default)]
    pub meals_number: Option<Value>,
    #[serde(rename = "snacksNumber", default)]
    pub snacks_number: Option<Value>,
    #[serde(rename = "dayMeals", default)]
    pub day_meals: Option<Value>,
    #[serde(rename = "isSelected", default)]
    pub is_selected: Option<Value>,
}

impl RawDay {
    pub fn upstream_id(&self) -> Option<DayId> {
        self.id.as_ref().and_then(identity_from_value)
    }

    /// `index` is the day's position in the unfiltered upstream list.
    pub fn into_day(self, index: usize) -> Day {
        let id = self.upstream_id().unwrap_or_else(|| DayId::generated(index));
        self.into_day_with_id(id)
    }

    fn into_day_with_id(self, id: DayId) -> Day {
        let day_meals = match self.day_meals {
            Some(Value::Array(meals)) => meals,
            _ => Vec::new(),
        };

        Day {
            id,
            date: self.date.as_ref().and_then(parse_date),
            meals_number: self.meals_number.as_ref().map(count_from_value).unwrap_or(0),
            snacks_number: self.snacks_number.as_ref().map(count_from_value).unwrap_or(0),
            day_meals,
            is_selected: matches!(self.is_selected, Some(Value::Bool(true))),
        }
    }
}

/// Assigns identities while the list still has its upstream order. A
/// generated identity never reuses an `_id` the upstream sent.
pub fn days_from_raw(raw: Vec<RawDay>) -> Vec<Day> {
    let mut taken: HashSet<DayId> = raw.iter().filter_map(RawDay::upstream_id).collect();

    raw.into_iter()
        .enumerate()
        .map(|(index, day)| {
            let id = match day.upstream_id() {
                Some(id) => id,
                None => unique_generated(index, &mut taken),
            };
            day.into_day_with_id(id)
        })
        .collect()
}

fn unique_generated(index: usize, taken: &mut HashSet<DayId>) -> DayId {
    let mut id = DayId::generated(index);
    let mut attempt = 1;
    while taken.contains(&id) {
        id = DayId::new(format!("generated-{index}-{attempt}"));
        attempt += 1;
    }
    taken.insert(id.clone());
    id
}

#[derive(Debug, Default, Deserialize)]
pub struct ClientDetails {
    #[serde(rename = "planDays", default)]
    pub plan_days: Option<Vec<RawDay>>,
}

impl ClientDetails {
    pub fn into_days(self) -> Vec<Day> {
        days_from_raw(self.plan_days.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct VerifyTokenResponse {
    #[serde(default)]
    pub success: bool,
}

fn identity_from_value(value: &Value) -> Option<DayId> {
    match value {
        Value::String(id) if !id.trim().is_empty() => Some(DayId::new(id.trim())),
        Value::Number(id) => Some(DayId::new(id.to_string())),
        _ => None,
    }
}

fn count_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
