use crate::i18n::{Locale, MessageId, message};
use crate::selection::SelectionStatus;
use crate::view::{DayListModel, DayRow, ViewState};
use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Error => "error",
        }
    }
}

/// Transient toast shown on top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: MessageId,
}

impl Notice {
    pub fn success(message: MessageId) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    pub fn error(message: MessageId) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
        }
    }
}

pub fn days_page_path(locale: Locale, client_id: &str) -> String {
    format!(
        "/{}/users/edit-day-meals/{}",
        locale.as_str(),
        urlencoding::encode(client_id)
    )
}

pub fn render_days_page(model: &DayListModel, client_id: &str, notice: Option<Notice>) -> String {
    let base = days_page_path(model.locale, client_id);
    let body = match &model.state {
        ViewState::NoPlanDays { message } => render_empty("calendar-times", message),
        ViewState::NoResults { message } => render_empty("search", message),
        ViewState::Rows { rows } => {
            let items: String = rows
                .iter()
                .map(|row| render_row(row, &base, &model.query, model.edit_label))
                .collect();
            format!("<ul class=\"grid-list\">{items}</ul>")
        }
    };

    DAYS_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{LANG}}", model.locale.as_str())
        .replace("{{DIR}}", model.dir)
        .replace("{{TITLE}}", &encode_text(model.title))
        .replace("{{ACTION}}", &encode_double_quoted_attribute(&base))
        .replace("{{PLACEHOLDER}}", &encode_double_quoted_attribute(model.search_placeholder))
        .replace("{{NOTICE}}", &render_notice(model.locale, notice))
        .replace("{{BODY}}", &body)
        .replace("{{QUERY}}", &encode_double_quoted_attribute(&model.query))
}

pub fn render_login_page(locale: Locale, next: Option<&str>, notice: Option<Notice>) -> String {
    LOGIN_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{LANG}}", locale.as_str())
        .replace("{{DIR}}", locale.dir())
        .replace("{{TITLE}}", &encode_text(message(locale, MessageId::LoginTitle)))
        .replace("{{ACTION}}", &format!("/{}/login", locale.as_str()))
        .replace("{{TOKEN_LABEL}}", &encode_text(message(locale, MessageId::TokenLabel)))
        .replace("{{SUBMIT}}", &encode_text(message(locale, MessageId::SignIn)))
        .replace("{{NOTICE}}", &render_notice(locale, notice))
        .replace("{{NEXT}}", &encode_double_quoted_attribute(next.unwrap_or_default()))
}

fn render_row(row: &DayRow, base: &str, query: &str, edit_label: &str) -> String {
    let state = if row.is_selected { "selected" } else { "not-selected" };
    let mut action = format!("{base}/days/{}/edit", urlencoding::encode(row.id.as_str()));
    if !query.is_empty() {
        action.push_str("?q=");
        action.push_str(&urlencoding::encode(query));
    }

    format!(
        concat!(
            "<li class=\"grid-item\"><div class=\"item {state}\"><div>",
            "<div class=\"date-section\"><i class=\"pi pi-{icon}\"></i>",
            "<div class=\"date\">{date}</div></div>",
            "<span class=\"badge {state}\" data-status=\"{status}\"><i class=\"pi pi-{badge}\"></i>{label}</span>",
            "</div><form method=\"post\" action=\"{action}\">",
            "<button class=\"edit\" type=\"submit\"><i class=\"pi pi-pencil\"></i>{edit}</button>",
            "</form></div></li>"
        ),
        state = state,
        icon = row.icon,
        date = encode_text(&row.date_label),
        status = status_attr(row),
        badge = row.badge_icon,
        label = encode_text(row.status_label),
        action = encode_double_quoted_attribute(&action),
        edit = encode_text(edit_label),
    )
}

fn status_attr(row: &DayRow) -> &'static str {
    match row.status {
        SelectionStatus::NotSelected => "not-selected",
        SelectionStatus::SelectedSome => "selected-some",
        SelectionStatus::SelectedAll => "selected-all",
    }
}

fn render_empty(icon: &str, text: &str) -> String {
    format!(
        "<div class=\"empty-state\"><i class=\"pi pi-{icon}\"></i><p>{}</p></div>",
        encode_text(text)
    )
}

fn render_notice(locale: Locale, notice: Option<Notice>) -> String {
    match notice {
        Some(notice) => format!(
            "<div class=\"status\" id=\"status\" data-type=\"{}\">{}</div>",
            notice.kind.as_str(),
            encode_text(message(locale, notice.message))
        ),
        None => String::new(),
    }
}

const STYLE: &str = r#"
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --ok: #2d7a4b;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .card {
      width: min(960px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 1rem;
    }

    .grid-list {
      list-style: none;
      padding: 0;
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 16px;
    }

    .item {
      background: white;
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 12px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .item.selected {
      border-color: var(--ok);
    }

    .badge {
      display: inline-flex;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--accent-2);
    }

    .badge.selected {
      color: var(--ok);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      background: var(--accent-2);
      color: white;
      cursor: pointer;
    }

    .empty-state {
      text-align: center;
      color: #6f6a65;
      padding: 32px 0;
    }

    .status {
      margin-bottom: 16px;
      padding: 12px 16px;
      border-radius: 14px;
      background: white;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--ok);
    }
"#;

const DAYS_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}" dir="{{DIR}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="robots" content="noindex, nofollow" />
  <title>YOUR COACH | {{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="card">
    {{NOTICE}}
    <header>
      <h1><i class="pi pi-calendar"></i> {{TITLE}}</h1>
      <form method="get" action="{{ACTION}}">
        <input type="search" name="q" value="{{QUERY}}" placeholder="{{PLACEHOLDER}}" dir="{{DIR}}" />
      </form>
    </header>
    <hr />
    {{BODY}}
  </main>
  <script>
    const statusEl = document.getElementById('status');
    if (statusEl) {
      setTimeout(() => statusEl.remove(), 3000);
    }
  </script>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}" dir="{{DIR}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="robots" content="noindex, nofollow" />
  <title>YOUR COACH | {{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="card">
    {{NOTICE}}
    <h1>{{TITLE}}</h1>
    <form method="post" action="{{ACTION}}">
      <input type="hidden" name="next" value="{{NEXT}}" />
      <label for="token">{{TOKEN_LABEL}}</label>
      <input id="token" name="token" type="password" autocomplete="off" />
      <button type="submit">{{SUBMIT}}</button>
    </form>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, DayId};
    use crate::view::DayListView;

    fn days() -> Vec<Day> {
        vec![Day {
            id: DayId::new("d<1>"),
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
            meals_number: 3,
            snacks_number: 1,
            day_meals: Vec::new(),
            is_selected: false,
        }]
    }

    #[test]
    fn page_escapes_user_text() {
        let days = days();
        let view = DayListView::new(&days, Locale::En, |_: &DayId| {})
            .with_query("<script>01");
        let html = render_days_page(&view.model(), "c1", None);
        assert!(html.contains("value=\"&lt;script&gt;01\""));
        assert!(!html.contains("<script>01"));
    }

    #[test]
    fn edit_form_targets_encoded_identity_and_keeps_query() {
        let days = days();
        let view = DayListView::new(&days, Locale::En, |_: &DayId| {}).with_query("01/03");
        let html = render_days_page(&view.model(), "c 1", None);
        assert!(html.contains(
            "action=\"/en/users/edit-day-meals/c%201/days/d%3C1%3E/edit?q=01%2F03\""
        ));
        assert!(html.contains("Not Selected"));
    }

    #[test]
    fn arabic_page_is_right_to_left_with_notice() {
        let days = days();
        let view = DayListView::new(&days, Locale::Ar, |_: &DayId| {});
        let html = render_days_page(
            &view.model(),
            "c1",
            Some(Notice::error(MessageId::FetchFailed)),
        );
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("أيام الاشتراك"));
        assert!(html.contains("data-type=\"error\""));
    }

    #[test]
    fn login_page_carries_next_target() {
        let html = render_login_page(Locale::En, Some("/en/users/edit-day-meals/c1"), None);
        assert!(html.contains("name=\"next\" value=\"/en/users/edit-day-meals/c1\""));
        assert!(html.contains("action=\"/en/login\""));
    }

    #[test]
    fn quoted_query_cannot_leave_the_value_attribute() {
        let days = days();
        let view = DayListView::new(&days, Locale::En, |_: &DayId| {})
            .with_query("\" autofocus onfocus=\"alert(1)");
        let html = render_days_page(&view.model(), "c1", None);
        assert!(html.contains("value=\"&quot; autofocus onfocus=&quot;alert(1)\""));
        assert!(!html.contains("\" autofocus"));
    }
}
