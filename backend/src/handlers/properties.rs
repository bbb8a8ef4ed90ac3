use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

use crate::models::property::{PaginationMeta, PropertyListQuery, PropertyListResponse};
use crate::state::AppState;

/// Public listing: filters and pagination parsed permissively from the
/// query string, active properties only, newest first, media attached.
pub async fn list_properties(
    query: web::Query<PropertyListQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let filters = query.filters();
    let pagination = query.pagination();

    match state.repos.properties().search(&filters, &pagination).await {
        Ok(result) => {
            let pagination = PaginationMeta::from_result(&result);
            Ok(HttpResponse::Ok().json(PropertyListResponse {
                properties: result.items,
                pagination,
            }))
        }
        Err(e) => {
            log::error!("Property search failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch properties"
            })))
        }
    }
}

/// Public detail view: 404 for unknown or inactive listings.
pub async fn get_property(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let property = match state.repos.properties().find_by_id(&id).await {
        Ok(property) => property,
        Err(e) => {
            log::error!("Property lookup failed: {:#}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch property"
            })));
        }
    };

    let Some(property) = property else {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": "Property not found"
        })));
    };

    let facilities = match state.repos.facilities().list_for_property(&id).await {
        Ok(facilities) => facilities,
        Err(e) => {
            log::error!("Facility lookup failed: {:#}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch property"
            })));
        }
    };

    Ok(HttpResponse::Ok().json(json!({
        "property": property,
        "nearbyFacilities": facilities
    })))
}
