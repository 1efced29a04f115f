//! Record Store Client
//!
//! HTTP bindings to the remote record store, the counterpart of a command
//! layer: every operation is an async `Result<_, String>`. The two REST
//! dialects share one request primitive; verb and URL mapping lives in the
//! endpoint constructors so it stays testable without a browser.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::{Backend, BoardConfig};
use crate::models::{Note, NoteDraft, NotePatch, WireNote};

/// Fixed page size for the module-records list call
const LIST_LIMIT: u32 = 100;

/// A fully resolved request target
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: &'static str,
    pub url: String,
    /// Headers beyond the shared JSON/auth set
    pub headers: Vec<(&'static str, String)>,
}

/// Join base and path, tolerating stray slashes on either side.
fn build_url(base: &str, path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if query.is_empty() {
        format!("{base}/{path}")
    } else {
        format!("{base}/{path}?{query}")
    }
}

// ========================
// Endpoint Constructors
// ========================

pub fn list_endpoint(config: &BoardConfig) -> Endpoint {
    match &config.backend {
        Backend::ModuleRecords { module } => Endpoint {
            method: "GET",
            url: build_url(
                &config.base_url,
                &format!("{module}/records"),
                &format!("offset=0&limit={LIST_LIMIT}"),
            ),
            headers: Vec::new(),
        },
        Backend::Postgrest { table, api_key } => Endpoint {
            method: "GET",
            url: build_url(&config.base_url, table, "select=*"),
            headers: vec![("apikey", api_key.clone())],
        },
    }
}

pub fn create_endpoint(config: &BoardConfig) -> Endpoint {
    match &config.backend {
        Backend::ModuleRecords { module } => Endpoint {
            method: "PUT",
            url: build_url(&config.base_url, &format!("{module}/records"), ""),
            headers: Vec::new(),
        },
        Backend::Postgrest { table, api_key } => Endpoint {
            method: "POST",
            url: build_url(&config.base_url, table, ""),
            headers: vec![
                ("apikey", api_key.clone()),
                ("Prefer", "return=representation".to_string()),
            ],
        },
    }
}

pub fn update_endpoint(config: &BoardConfig, id: &str) -> Endpoint {
    match &config.backend {
        Backend::ModuleRecords { module } => Endpoint {
            method: "PUT",
            url: build_url(&config.base_url, &format!("{module}/records/{id}"), ""),
            headers: Vec::new(),
        },
        Backend::Postgrest { table, api_key } => Endpoint {
            method: "PATCH",
            url: build_url(&config.base_url, table, &format!("id=eq.{id}")),
            headers: vec![
                ("apikey", api_key.clone()),
                ("Prefer", "return=representation".to_string()),
            ],
        },
    }
}

pub fn delete_endpoint(config: &BoardConfig, id: &str) -> Endpoint {
    match &config.backend {
        Backend::ModuleRecords { module } => Endpoint {
            method: "DELETE",
            url: build_url(&config.base_url, &format!("{module}/records/{id}"), ""),
            headers: Vec::new(),
        },
        Backend::Postgrest { table, api_key } => Endpoint {
            method: "DELETE",
            url: build_url(&config.base_url, table, &format!("id=eq.{id}")),
            headers: vec![("apikey", api_key.clone())],
        },
    }
}

// ========================
// Request Primitive
// ========================

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Issue a request with the shared JSON/auth headers. Non-2xx statuses
/// become `Err` carrying the response body; a 204 or empty body yields
/// `None` instead of a JSON value.
async fn request(
    config: &BoardConfig,
    endpoint: Endpoint,
    body: Option<String>,
) -> Result<Option<serde_json::Value>, String> {
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    if !config.token.is_empty() {
        headers
            .set("Authorization", &format!("Bearer {}", config.token))
            .map_err(js_err)?;
    }
    for (name, value) in &endpoint.headers {
        headers.set(name, value).map_err(js_err)?;
    }

    let init = RequestInit::new();
    init.set_method(endpoint.method);
    init.set_headers(&headers);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&endpoint.url, &init).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if !response.ok() {
        if text.is_empty() {
            return Err(format!("request failed with status {}", response.status()));
        }
        return Err(text);
    }
    if response.status() == 204 || text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|err| err.to_string())
}

// ========================
// Note Operations
// ========================

/// Fetch all notes, normalized to defaults.
pub async fn list_notes(config: &BoardConfig) -> Result<Vec<Note>, String> {
    let value = request(config, list_endpoint(config), None).await?;
    Ok(notes_from_list(value.unwrap_or(serde_json::Value::Null)))
}

/// Create a note. The result is `Some` only when the backend returned a
/// representation carrying the server-assigned identifier.
pub async fn create_note(config: &BoardConfig, draft: &NoteDraft) -> Result<Option<Note>, String> {
    let body = serde_json::to_string(draft).map_err(|err| err.to_string())?;
    let value = request(config, create_endpoint(config), Some(body)).await?;
    Ok(value.and_then(note_from_response))
}

/// Update a note. A returned patch holds the fields of the server's
/// representation; `None` means the backend sent nothing usable back and
/// the caller should fall back to its local patch.
pub async fn update_note(
    config: &BoardConfig,
    id: &str,
    patch: &NotePatch,
) -> Result<Option<NotePatch>, String> {
    let body = serde_json::to_string(patch).map_err(|err| err.to_string())?;
    let value = request(config, update_endpoint(config, id), Some(body)).await?;
    Ok(value.and_then(patch_from_response))
}

pub async fn delete_note(config: &BoardConfig, id: &str) -> Result<(), String> {
    request(config, delete_endpoint(config, id), None).await?;
    Ok(())
}

// ========================
// Response Normalization
// ========================

/// A list response is either a bare array or `{ "items": [...] }`.
pub fn notes_from_list(value: serde_json::Value) -> Vec<Note> {
    let records = match value {
        serde_json::Value::Array(records) => records,
        serde_json::Value::Object(mut map) => match map.remove("items") {
            Some(serde_json::Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    records.into_iter().filter_map(Note::from_value).collect()
}

/// A single-record response is an object or a one-element array (PostgREST
/// representation); records without an identifier are rejected.
fn single_record(value: serde_json::Value) -> Option<WireNote> {
    let record = match value {
        serde_json::Value::Array(mut rows) => {
            if rows.is_empty() {
                return None;
            }
            rows.remove(0)
        }
        other => other,
    };
    let wire: WireNote = serde_json::from_value(record).ok()?;
    wire.server_id().is_some().then_some(wire)
}

pub fn note_from_response(value: serde_json::Value) -> Option<Note> {
    single_record(value).and_then(Note::from_wire)
}

pub fn patch_from_response(value: serde_json::Value) -> Option<NotePatch> {
    single_record(value).map(WireNote::into_patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn module_config() -> BoardConfig {
        BoardConfig {
            base_url: "https://records.example/api/v1/".to_string(),
            token: "secret".to_string(),
            backend: Backend::ModuleRecords {
                module: "sticky_notes".to_string(),
            },
        }
    }

    fn postgrest_config() -> BoardConfig {
        BoardConfig {
            base_url: "https://db.example/rest/v1".to_string(),
            token: "jwt".to_string(),
            backend: Backend::Postgrest {
                table: "notes".to_string(),
                api_key: "anon".to_string(),
            },
        }
    }

    #[test]
    fn build_url_tolerates_stray_slashes() {
        assert_eq!(
            build_url("https://records.example/", "/sticky_notes/records", ""),
            "https://records.example/sticky_notes/records"
        );
        assert_eq!(
            build_url("https://records.example", "notes", "select=*"),
            "https://records.example/notes?select=*"
        );
    }

    #[test]
    fn module_records_endpoints() {
        let config = module_config();
        let list = list_endpoint(&config);
        assert_eq!(list.method, "GET");
        assert_eq!(
            list.url,
            "https://records.example/api/v1/sticky_notes/records?offset=0&limit=100"
        );
        assert!(list.headers.is_empty());

        let create = create_endpoint(&config);
        assert_eq!(create.method, "PUT");
        assert_eq!(create.url, "https://records.example/api/v1/sticky_notes/records");

        let update = update_endpoint(&config, "abc");
        assert_eq!(update.method, "PUT");
        assert_eq!(
            update.url,
            "https://records.example/api/v1/sticky_notes/records/abc"
        );

        let delete = delete_endpoint(&config, "abc");
        assert_eq!(delete.method, "DELETE");
        assert_eq!(
            delete.url,
            "https://records.example/api/v1/sticky_notes/records/abc"
        );
    }

    #[test]
    fn postgrest_endpoints() {
        let config = postgrest_config();
        let list = list_endpoint(&config);
        assert_eq!(list.method, "GET");
        assert_eq!(list.url, "https://db.example/rest/v1/notes?select=*");
        assert_eq!(list.headers, vec![("apikey", "anon".to_string())]);

        let create = create_endpoint(&config);
        assert_eq!(create.method, "POST");
        assert_eq!(create.url, "https://db.example/rest/v1/notes");
        assert!(create
            .headers
            .contains(&("Prefer", "return=representation".to_string())));

        let update = update_endpoint(&config, "7");
        assert_eq!(update.method, "PATCH");
        assert_eq!(update.url, "https://db.example/rest/v1/notes?id=eq.7");
        assert!(update
            .headers
            .contains(&("Prefer", "return=representation".to_string())));

        let delete = delete_endpoint(&config, "7");
        assert_eq!(delete.method, "DELETE");
        assert_eq!(delete.url, "https://db.example/rest/v1/notes?id=eq.7");
        assert_eq!(delete.headers, vec![("apikey", "anon".to_string())]);
    }

    #[test]
    fn list_accepts_bare_arrays_and_items_objects() {
        let bare = notes_from_list(json!([{"id": "a"}, {"id": "b"}]));
        assert_eq!(bare.len(), 2);

        let wrapped = notes_from_list(json!({"items": [{"_id": "c"}], "total": 1}));
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].id, "c");

        assert!(notes_from_list(json!(null)).is_empty());
        assert!(notes_from_list(json!({"total": 0})).is_empty());
    }

    #[test]
    fn list_drops_records_without_identifiers() {
        let notes = notes_from_list(json!([{"id": "a"}, {"title": "orphan"}]));
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn single_record_unwraps_representation_arrays() {
        let note = note_from_response(json!([{"id": 9, "title": "row"}])).unwrap();
        assert_eq!(note.id, "9");
        assert_eq!(note.title, "row");

        assert!(note_from_response(json!([])).is_none());
        assert!(note_from_response(json!({"title": "no id"})).is_none());
    }

    #[test]
    fn update_response_becomes_a_partial_patch() {
        let patch = patch_from_response(json!({"_id": "n1", "x": 11.0, "y": 22.0})).unwrap();
        assert_eq!(patch.x, Some(11.0));
        assert_eq!(patch.y, Some(22.0));
        assert!(patch.title.is_none());
    }
}
