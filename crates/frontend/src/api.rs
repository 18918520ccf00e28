//! Thin client for the RAG backend's HTTP surface.
//!
//! `check_health` and `upload_document` collapse every failure kind
//! (transport, timeout, non-success status) to `false`; only `ask_question`
//! returns an error, so the chat flow can tell a failed request apart from
//! an empty answer.

use crate::shared::api_utils::{api_url, TUNNEL_SKIP_HEADER};
use contracts::api::{AskRequest, AskResponse};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Probe the liveness endpoint. Best-effort: never raises, the body is
/// ignored and any failure is logged and reported as offline.
pub async fn check_health() -> bool {
    let result = async {
        let opts = RequestInit::new();
        let request = build_request("GET", "/health", &opts)?;
        run_fetch(request).await
    }
    .await;

    match result {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::debug!("health probe failed: {e}");
            false
        }
    }
}

/// Send a document to the ingestion endpoint as multipart form data
/// (field `file`). True iff the backend acknowledged it. No retry.
pub async fn upload_document(file: &web_sys::File) -> bool {
    let result = async {
        let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
        form_data
            .append_with_blob("file", file)
            .map_err(|e| format!("{e:?}"))?;

        let opts = RequestInit::new();
        opts.set_body(&form_data);
        let request = build_request("POST", "/upload", &opts)?;
        run_fetch(request).await
    }
    .await;

    match result {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::warn!("upload failed: {e}");
            false
        }
    }
}

/// Submit a question to the query endpoint. The one call whose failure
/// propagates to the caller; a successful response is reduced to the answer
/// text via [`AskResponse::into_answer`].
pub async fn ask_question(question: &str) -> Result<String, String> {
    let body = serde_json::to_string(&AskRequest {
        question: question.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_body(&JsValue::from_str(&body));
    let request = build_request("POST", "/ask", &opts)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {e:?}"))?;

    let response = run_fetch(request).await?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {e:?}"))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {e:?}"))?;

    let parsed: AskResponse = serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    Ok(parsed.into_answer())
}

fn build_request(method: &str, path: &str, opts: &RequestInit) -> Result<Request, String> {
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&api_url(path), opts)
        .map_err(|e| format!("Failed to create request: {e:?}"))?;
    request
        .headers()
        .set(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
        .map_err(|e| format!("Failed to set header: {e:?}"))?;

    Ok(request)
}

async fn run_fetch(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window object")?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {e:?}"))?;

    response_value
        .dyn_into()
        .map_err(|_| "Not a Response".to_string())
}
