use axum::{extract::Query, Extension, Json};
use serde::{Deserialize, Serialize};
use slyzah_search::{
    list_regions as regions_of, resolve_with_source, Province, RawGeoAddress, ResolutionSource,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RegionsQuery {
    pub province: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ProvinceRegions {
    pub province: &'static str,
    pub regions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(super) struct ResolvedLocationItem {
    pub province: String,
    pub region: String,
    pub source: ResolutionSource,
}

pub(super) async fn list_regions(
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RegionsQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceRegions>>>, ApiError> {
    let provinces = match params.province.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let province = Province::from_loose(raw).ok_or_else(|| {
                ApiError::new(
                    req_id.0.clone(),
                    "validation_error",
                    format!("unknown province '{raw}'"),
                )
            })?;
            vec![province]
        }
        _ => Province::ALL.to_vec(),
    };

    let data = provinces
        .into_iter()
        .map(|p| ProvinceRegions {
            province: p.name(),
            regions: regions_of(p),
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn resolve_location(
    Extension(req_id): Extension<RequestId>,
    Json(address): Json<RawGeoAddress>,
) -> Json<ApiResponse<ResolvedLocationItem>> {
    let (location, source) = resolve_with_source(&address);
    tracing::debug!(
        province = %location.province,
        region = %location.region,
        source = ?source,
        "resolved location"
    );

    Json(ApiResponse {
        data: ResolvedLocationItem {
            province: location.province,
            region: location.region,
            source,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
