use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use slyzah_core::VendorRecord;
use slyzah_search::{featured_for, search, ResolvedLocation, SearchStatus};

use crate::middleware::RequestId;

use super::{map_search_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub category: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationQuery {
    pub province: Option<String>,
    pub region: Option<String>,
}

fn location_of(province: Option<String>, region: Option<String>) -> ResolvedLocation {
    ResolvedLocation::new(province.unwrap_or_default(), region.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub(super) struct RankedVendorItem {
    #[serde(flatten)]
    pub vendor: VendorRecord,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchPage {
    pub category: String,
    pub location: ResolvedLocation,
    pub status: SearchStatus,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub results: Vec<RankedVendorItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct FeaturedList {
    pub location: ResolvedLocation,
    pub vendors: Vec<VendorRecord>,
}

pub(super) async fn search_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchPage>>, ApiError> {
    let category = params.category.unwrap_or_default();
    let snapshot = state
        .catalog
        .get()
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let location = location_of(params.province, params.region);
    let offset = params.offset.unwrap_or(0);
    let limit = normalize_limit(params.limit, state.page_size);

    let outcome = search(&category, &location, &snapshot, &mut rand::rng())
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;
    let results = outcome
        .page(offset, limit)
        .iter()
        .map(|scored| RankedVendorItem {
            vendor: scored.vendor.clone(),
            score: scored.score,
        })
        .collect();

    Ok(Json(ApiResponse {
        data: SearchPage {
            category,
            location,
            status: outcome.status,
            total: outcome.len(),
            offset,
            limit,
            results,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_featured(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<ApiResponse<FeaturedList>>, ApiError> {
    let snapshot = state
        .catalog
        .get()
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    let location = location_of(params.province, params.region);
    let vendors = featured_for(snapshot.iter(), &location)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApiResponse {
        data: FeaturedList { location, vendors },
        meta: ResponseMeta::new(req_id.0),
    }))
}
