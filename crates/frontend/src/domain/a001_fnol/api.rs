use contracts::domain::a001_fnol::{FnolDetail, StatusSnapshot};
use contracts::system::info::AppInfo;
use contracts::usecases::u501_submit_fnol::{
    IdempotencyKey, SubmissionResult, SubmitFnolRequest, IDEMPOTENCY_HEADER,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, ApiError};

/// Decode a 2xx body, or turn anything else into an [`ApiError`]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn fnol_path(fnol_id: &str, suffix: &str) -> String {
    format!("/fnol/{}{}", urlencoding::encode(fnol_id.trim()), suffix)
}

/// Submit a claim; the key lets the backend recognise a repeated attempt
pub async fn submit_fnol(
    request: &SubmitFnolRequest,
    key: IdempotencyKey,
) -> Result<SubmissionResult, ApiError> {
    let url = api_url("/fnol");
    log::debug!("POST {} key={}", url, key);

    let response = Request::post(&url)
        .header(IDEMPOTENCY_HEADER, &key.to_string())
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("submit_fnol: request failed: {}", e);
            ApiError::from(e)
        })?;

    let result = read_json::<SubmissionResult>(response).await;
    match &result {
        Ok(ack) => log::info!(
            "claim accepted: {} (duplicate: {})",
            ack.fnol_id,
            ack.is_duplicate
        ),
        Err(e) => log::warn!("submit_fnol: {}", e),
    }
    result
}

pub async fn fetch_status(fnol_id: &str) -> Result<StatusSnapshot, ApiError> {
    let url = api_url(&fnol_path(fnol_id, "/status"));
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await?;
    let result = read_json::<StatusSnapshot>(response).await;
    match &result {
        Ok(s) => log::info!("status of {}: {}", s.fnol_id, s.status),
        Err(e) => log::warn!("fetch_status({}): {}", fnol_id, e),
    }
    result
}

/// Full claim record; not shown by any page yet
pub async fn fetch_detail(fnol_id: &str) -> Result<FnolDetail, ApiError> {
    let url = api_url(&fnol_path(fnol_id, ""));
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await?;
    read_json::<FnolDetail>(response).await
}

pub async fn fetch_app_info() -> Result<AppInfo, ApiError> {
    let response = Request::get(&api_url("/info")).send().await?;
    read_json::<AppInfo>(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnol_id_is_encoded_in_path() {
        assert_eq!(
            fnol_path(" FNOL-UAE/2025 01", "/status"),
            "/fnol/FNOL-UAE%2F2025%2001/status"
        );
        assert_eq!(fnol_path("FNOL-UAE-2025-000001", ""), "/fnol/FNOL-UAE-2025-000001");
    }
}
