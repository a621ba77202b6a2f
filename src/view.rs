use crate::filter::{filter_days, format_date};
use crate::i18n::{Locale, MessageId, message};
use crate::models::{Day, DayId};
use crate::selection::SelectionStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub id: DayId,
    pub date: Option<String>,
    pub date_label: String,
    pub status: SelectionStatus,
    pub status_label: &'static str,
    pub is_selected: bool,
    pub icon: &'static str,
    pub badge_icon: &'static str,
}

impl DayRow {
    fn build(day: &Day, locale: Locale) -> Self {
        let status = day.status();
        let date = day.date.map(format_date);
        let date_label = date
            .clone()
            .unwrap_or_else(|| message(locale, MessageId::NoDate).to_string());

        Self {
            id: day.id.clone(),
            date,
            date_label,
            status,
            status_label: message(locale, status.message_id()),
            is_selected: day.is_selected,
            icon: if day.is_selected { "check-circle" } else { "clock" },
            badge_icon: if day.is_selected { "check" } else { "times" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewState {
    NoPlanDays { message: &'static str },
    NoResults { message: &'static str },
    Rows { rows: Vec<DayRow> },
}

/// Everything a renderer needs for one pass over the list.
#[derive(Debug, Clone, Serialize)]
pub struct DayListModel {
    pub locale: Locale,
    pub dir: &'static str,
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub edit_label: &'static str,
    pub query: String,
    pub total: usize,
    pub state: ViewState,
}

/// Presentational list of plan days. It owns only the query text; edits are
/// handed to `on_edit` and the day list itself is never touched.
pub struct DayListView<'a, F>
where
    F: Fn(&DayId),
{
    days: &'a [Day],
    locale: Locale,
    query: String,
    on_edit: F,
}

impl<'a, F> DayListView<'a, F>
where
    F: Fn(&DayId),
{
    pub fn new(days: &'a [Day], locale: Locale, on_edit: F) -> Self {
        Self {
            days,
            locale,
            query: String::new(),
            on_edit,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> Vec<DayRow> {
        filter_days(self.days, &self.query, self.locale)
            .into_iter()
            .map(|day| DayRow::build(day, self.locale))
            .collect()
    }

    pub fn state(&self) -> ViewState {
        if self.days.is_empty() {
            return ViewState::NoPlanDays {
                message: message(self.locale, MessageId::NoPlanDays),
            };
        }

        let rows = self.rows();
        if rows.is_empty() {
            ViewState::NoResults {
                message: message(self.locale, MessageId::NoSearchResults),
            }
        } else {
            ViewState::Rows { rows }
        }
    }

    pub fn model(&self) -> DayListModel {
        DayListModel {
            locale: self.locale,
            dir: self.locale.dir(),
            title: message(self.locale, MessageId::SubscriptionDaysTitle),
            search_placeholder: message(self.locale, MessageId::SearchPlaceholder),
            edit_label: message(self.locale, MessageId::Edit),
            query: self.query.clone(),
            total: self.days.len(),
            state: self.state(),
        }
    }

    /// Resolves `id` against the unfiltered list so an active query can never
    /// redirect the edit to another day. Returns whether the callback fired.
    pub fn edit(&self, id: &DayId) -> bool {
        match self.days.iter().find(|day| &day.id == id) {
            Some(day) => {
                (self.on_edit)(&day.id);
                true
            }
            None => false,
        }
    }
}
