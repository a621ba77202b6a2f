use crate::api::Session;
use crate::errors::AppError;
use crate::i18n::Locale;
use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use tracing::{debug, warn};

pub const TOKEN_COOKIE: &str = "token";

/// Verified session for page routes; unauthenticated requests are sent to the
/// login page of the locale in the request path.
pub struct AuthSession(pub Session);

/// Verified session for JSON routes; unauthenticated requests get a 401.
pub struct ApiSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match verified_session(parts, state).await {
            Some(session) => Ok(Self(session)),
            None => {
                let locale = locale_from_path(parts.uri.path());
                let next = parts
                    .uri
                    .path_and_query()
                    .map(|value| value.as_str())
                    .unwrap_or("/");
                Err(Redirect::to(&login_location(locale, Some(next))))
            }
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ApiSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        verified_session(parts, state)
            .await
            .map(Self)
            .ok_or_else(AppError::unauthorized)
    }
}

async fn verified_session(parts: &Parts, state: &AppState) -> Option<Session> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(TOKEN_COOKIE)?.value().trim().to_string();
    if token.is_empty() {
        return None;
    }

    match state.api.verify_token(&token).await {
        Ok(true) => Some(Session::new(token)),
        Ok(false) => {
            debug!("token rejected by COACH API");
            None
        }
        Err(err) => {
            warn!(%err, "token verification failed");
            None
        }
    }
}

pub fn locale_from_path(path: &str) -> Locale {
    let segment = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    Locale::from_segment(segment)
}

/// Keeps only same-origin paths. Browsers treat `\` like `/`, so `/\host` is
/// protocol-relative too.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|target| {
        target.starts_with('/')
            && !matches!(target.as_bytes().get(1), Some(b'/' | b'\\'))
            && !target.chars().any(char::is_control)
    })
}

pub fn login_location(locale: Locale, next: Option<&str>) -> String {
    match safe_next(next) {
        Some(target) => format!(
            "/{}/login?next={}",
            locale.as_str(),
            urlencoding::encode(target)
        ),
        None => format!("/{}/login", locale.as_str()),
    }
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
