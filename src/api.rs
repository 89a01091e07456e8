use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::storage;
use crate::types::{AuthSession, AuthUser};

const API_URL: &str = "https://api.forjaestudio.com/v1";
const AUTH_SESSION_KEY: &str = "forja_auth_session";

#[derive(Deserialize, Debug)]
struct ApiAuthResponse {
    access_token: String,
    user: ApiUser,
}

#[derive(Deserialize, Debug)]
struct ApiUser {
    id: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    member_since: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    error: Option<String>,
    message: Option<String>,
}

/// Register a new client account.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<AuthSession, String> {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": password
    })
    .to_string();
    request_session("/auth/register", &body).await
}

/// Exchange credentials for a session token.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthSession, String> {
    let body = serde_json::json!({
        "email": email,
        "password": password
    })
    .to_string();
    request_session("/auth/login", &body).await
}

async fn request_session(path: &str, body: &str) -> Result<AuthSession, String> {
    let window = web_sys::window().ok_or("no window")?;

    let headers = Headers::new().map_err(|_| "Failed to create headers")?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "Failed to set content-type")?;

    let opts = create_request_init("POST", Some(body), &headers);

    let url = format!("{}{}", API_URL, path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| "Failed to create request")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            web_sys::console::log_1(&format!("API request failed: {:?}", e).into());
            "Sin conexión con el servidor".to_string()
        })?;
    let resp: Response = resp_value.dyn_into().map_err(|_| "Invalid response")?;

    let json = JsFuture::from(resp.json().map_err(|_| "No JSON")?)
        .await
        .map_err(|_| "JSON parse failed")?;

    if !resp.ok() {
        let err: ApiError = serde_wasm_bindgen::from_value(json).unwrap_or(ApiError {
            error: Some("Unknown error".into()),
            message: None,
        });
        return Err(err
            .message
            .or(err.error)
            .unwrap_or_else(|| "Error de autenticación".into()));
    }

    let auth_resp: ApiAuthResponse =
        serde_wasm_bindgen::from_value(json).map_err(|_| "Invalid auth response")?;

    // Older accounts predate the member_since column.
    let member_since = auth_resp
        .user
        .member_since
        .unwrap_or_else(|| js_sys::Date::now() as i64 / 1000);

    let session = AuthSession {
        access_token: auth_resp.access_token,
        user: AuthUser {
            id: auth_resp.user.id,
            email: auth_resp.user.email,
            name: auth_resp.user.name.unwrap_or_default(),
            member_since,
        },
    };

    save_auth_session(&session);
    Ok(session)
}

fn create_request_init(method: &str, body: Option<&str>, headers: &Headers) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(b) = body {
        opts.set_body(&JsValue::from_str(b));
    }
    opts.set_headers(&JsValue::from(headers));
    opts
}

pub fn sign_out() {
    if let Some(storage) = storage::get_local_storage() {
        let _ = storage.remove_item(AUTH_SESSION_KEY);
    }
}

/// Save auth session to localStorage.
pub fn save_auth_session(session: &AuthSession) {
    if let Some(storage) = storage::get_local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(AUTH_SESSION_KEY, &json);
        }
    }
}

/// Load auth session from localStorage.
pub fn load_auth_session() -> Option<AuthSession> {
    let storage = storage::get_local_storage()?;
    let json = storage.get_item(AUTH_SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}
