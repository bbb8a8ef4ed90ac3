use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::state::AppState;
use estate_database::models::{CreateFacilityInput, FACILITY_TYPES};
use estate_database::utils::resolve_distance;

pub async fn add_facility(
    path: web::Path<Uuid>,
    request: web::Json<CreateFacilityInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let property_id = path.into_inner();
    let input = request.into_inner();

    if input.name.trim().is_empty() {
        return Err(ServiceError::BadRequest(
            "Facility name is required".to_string(),
        ));
    }
    if !FACILITY_TYPES.contains(&input.facility_type.as_str()) {
        return Err(ServiceError::BadRequest(format!(
            "Facility type must be one of: {}",
            FACILITY_TYPES.join(", ")
        )));
    }

    let property = state
        .repos
        .properties()
        .find_by_id_admin(&property_id)
        .await
        .map_err(|e| {
            log::error!("Property lookup failed: {:#}", e);
            ServiceError::InternalServerError
        })?
        .ok_or(ServiceError::NotFound)?;

    let property_coords = property.latitude.zip(property.longitude);
    let facility_coords = input.latitude.zip(input.longitude);
    let distance_m = resolve_distance(
        input.distance_m,
        input.distance_text.as_deref(),
        facility_coords,
        property_coords,
    )
    .ok_or_else(|| {
        ServiceError::BadRequest(
            "Provide a distance value, a distance string, or coordinates for both the facility and the property"
                .to_string(),
        )
    })?;

    let facility = state
        .repos
        .facilities()
        .create(&property_id, &input, distance_m)
        .await
        .map_err(|e| {
            log::error!("Facility creation failed: {:#}", e);
            ServiceError::InternalServerError
        })?;

    Ok(HttpResponse::Created().json(facility))
}

pub async fn delete_facility(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = state
        .repos
        .facilities()
        .delete(&path.into_inner())
        .await
        .map_err(|e| {
            log::error!("Facility deletion failed: {:#}", e);
            ServiceError::InternalServerError
        })?;

    if !deleted {
        return Err(ServiceError::NotFound);
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}
