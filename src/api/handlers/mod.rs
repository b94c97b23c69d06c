use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::CompositionError;
use crate::models::*;
use crate::outline;
use crate::portal::{PageQuery, Portal};

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Map a composition error to a response.
///
/// Validation errors carry the caller's mistake and are returned verbatim.
/// Anything else is logged and replaced by a generic message.
fn error_response(e: CompositionError) -> (StatusCode, String) {
    match e {
        CompositionError::PageNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        e if e.is_validation() => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        e => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn page_id(site_type: &str, site_name: String, page_name: String) -> ApiResult<PageId> {
    let site_type = SiteType::from_str(site_type)
        .ok_or_else(|| error_response(CompositionError::InvalidSiteType(site_type.to_string())))?;
    Ok(PageId::new(SiteId::new(site_type, site_name), page_name))
}

fn find_page(portal: &Portal, id: &PageId) -> ApiResult<Page> {
    portal
        .get_page(id)
        .map_err(error_response)?
        .ok_or_else(|| error_response(CompositionError::PageNotFound(id.to_string())))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

pub async fn list_pages(
    State(portal): State<Portal>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Vec<Page>>> {
    portal.find_pages(&query).map(Json).map_err(error_response)
}

/// Build a page from a draft and save it. Responds 201 for a new page and
/// 200 when an existing page was replaced.
pub async fn create_page(
    State(portal): State<Portal>,
    Json(draft): Json<PageDraft>,
) -> ApiResult<(StatusCode, Json<Page>)> {
    let page = draft.into_page().map_err(error_response)?;
    let replaced = portal.save_page(page.clone()).map_err(error_response)?;
    let status = if replaced {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(page)))
}

pub async fn get_page(
    State(portal): State<Portal>,
    Path((site_type, site_name, page_name)): Path<(String, String, String)>,
) -> ApiResult<Json<Page>> {
    let id = page_id(&site_type, site_name, page_name)?;
    find_page(&portal, &id).map(Json)
}

pub async fn get_page_outline(
    State(portal): State<Portal>,
    Path((site_type, site_name, page_name)): Path<(String, String, String)>,
) -> ApiResult<String> {
    let id = page_id(&site_type, site_name, page_name)?;
    let page = find_page(&portal, &id)?;
    Ok(outline::render_page(&page))
}

pub async fn delete_page(
    State(portal): State<Portal>,
    Path((site_type, site_name, page_name)): Path<(String, String, String)>,
) -> ApiResult<StatusCode> {
    let id = page_id(&site_type, site_name, page_name)?;
    if portal.remove_page(&id).map_err(error_response)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(error_response(CompositionError::PageNotFound(id.to_string())))
    }
}
