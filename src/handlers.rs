use crate::api::Session;
use crate::auth::{ApiSession, AuthSession, safe_next, session_cookie};
use crate::errors::AppError;
use crate::i18n::{Locale, MessageId, message};
use crate::models::{Day, DayId, RawDay, days_from_raw};
use crate::source::RemoteDays;
use crate::state::AppState;
use crate::ui::{Notice, days_page_path, render_days_page, render_login_page};
use crate::view::{DayListModel, DayListView};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct DaysQuery {
    #[serde(default)]
    pub q: String,
    pub notice: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiDaysQuery {
    #[serde(default)]
    pub q: String,
    pub locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub token: String,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub days: Vec<RawDay>,
    #[serde(default)]
    pub query: String,
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DayListResponse {
    #[serde(flatten)]
    pub model: DayListModel,
    pub notice: Option<&'static str>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn login_page(
    Path(locale): Path<String>,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let locale = Locale::from_segment(&locale);
    Html(render_login_page(locale, safe_next(query.next.as_deref()), None))
}

pub async fn login_submit(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let locale = Locale::from_segment(&locale);
    let next = safe_next(form.next.as_deref());
    let token = form.token.trim();

    let accepted = if token.is_empty() {
        false
    } else {
        match state.api.verify_token(token).await {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(%err, "token verification failed during sign-in");
                false
            }
        }
    };

    if !accepted {
        let page = render_login_page(locale, next, Some(Notice::error(MessageId::InvalidToken)));
        return Html(page).into_response();
    }

    info!(locale = locale.as_str(), "dashboard user signed in");
    let jar = jar.add(session_cookie(token.to_string()));
    match next {
        Some(target) => (jar, Redirect::to(target)).into_response(),
        None => {
            let page = render_login_page(locale, None, Some(Notice::success(MessageId::SignedIn)));
            (jar, Html(page)).into_response()
        }
    }
}

pub async fn subscription_days(
    State(state): State<AppState>,
    Path((locale, client_id)): Path<(String, String)>,
    Query(query): Query<DaysQuery>,
    AuthSession(session): AuthSession,
) -> Html<String> {
    let locale = Locale::from_segment(&locale);
    let (days, failed) = load_client_days(&state, session, &client_id).await;

    let notice = if failed {
        Some(Notice::error(MessageId::FetchFailed))
    } else if query.notice.as_deref() == Some("edit") {
        Some(Notice::success(MessageId::EditClicked))
    } else {
        None
    };

    let view = DayListView::new(&days, locale, |_: &DayId| {}).with_query(query.q);
    Html(render_days_page(&view.model(), &client_id, notice))
}

pub async fn edit_day(
    State(state): State<AppState>,
    Path((locale, client_id, day_id)): Path<(String, String, String)>,
    Query(query): Query<EditQuery>,
    AuthSession(session): AuthSession,
) -> Result<Redirect, AppError> {
    let locale = Locale::from_segment(&locale);
    let (days, _) = load_client_days(&state, session, &client_id).await;

    let view = DayListView::new(&days, locale, |id: &DayId| {
        info!(client_id = %client_id, day_id = %id, "editing plan day");
    })
    .with_query(query.q);

    if !view.edit(&DayId::new(day_id.clone())) {
        return Err(AppError::not_found(format!("no plan day {day_id}")));
    }

    let mut target = format!("{}?notice=edit", days_page_path(locale, &client_id));
    if !view.query().is_empty() {
        target.push_str("&q=");
        target.push_str(&urlencoding::encode(view.query()));
    }
    Ok(Redirect::to(&target))
}

pub async fn client_days_api(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Query(query): Query<ApiDaysQuery>,
    ApiSession(session): ApiSession,
) -> Json<DayListResponse> {
    let locale = Locale::from_segment(query.locale.as_deref().unwrap_or_default());
    let (days, failed) = load_client_days(&state, session, &client_id).await;
    let notice = failed.then(|| message(locale, MessageId::FetchFailed));
    Json(to_response(&days, locale, query.q, notice))
}

pub async fn view_days(Json(request): Json<ViewRequest>) -> Json<DayListResponse> {
    let locale = Locale::from_segment(request.locale.as_deref().unwrap_or_default());
    let days = days_from_raw(request.days);
    Json(to_response(&days, locale, request.query, None))
}

async fn load_client_days(state: &AppState, session: Session, client_id: &str) -> (Vec<Day>, bool) {
    let source = RemoteDays::new(state.api.clone(), session, client_id);
    let refreshed = state.plan_days.refresh(&source).await;
    (refreshed.days, refreshed.error.is_some())
}

fn to_response(
    days: &[Day],
    locale: Locale,
    query: String,
    notice: Option<&'static str>,
) -> DayListResponse {
    let view = DayListView::new(days, locale, |_: &DayId| {}).with_query(query);
    DayListResponse {
        model: view.model(),
        notice,
    }
}
