use axum::Json;
use axum::response::IntoResponse;

use crate::domain::sample::{age_statistics, sample_people};
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::SampleDemoResponse;

pub async fn sample_demo() -> Result<impl IntoResponse, ApiError> {
    let sample_data = sample_people();
    let statistics = age_statistics(&sample_data)
        .ok_or_else(|| ApiError::internal("Sample dataset is empty"))?;

    Ok(Json(SampleDemoResponse {
        sample_data,
        statistics,
    }))
}
