use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::state::AppState;
use estate_database::models::{CreateMediaInput, MediaOrderUpdate, MEDIA_TYPES};

pub async fn add_media(
    path: web::Path<Uuid>,
    request: web::Json<CreateMediaInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let property_id = path.into_inner();
    let input = request.into_inner();

    if input.url.trim().is_empty() {
        return Err(ServiceError::BadRequest("Media URL is required".to_string()));
    }
    if !MEDIA_TYPES.contains(&input.media_type.as_str()) {
        return Err(ServiceError::BadRequest(
            "Media type must be one of: image, video".to_string(),
        ));
    }

    // Look up the property first so an unknown id is a 404 rather than a
    // foreign-key error.
    state
        .repos
        .properties()
        .find_by_id_admin(&property_id)
        .await
        .map_err(|e| {
            log::error!("Property lookup failed: {:#}", e);
            ServiceError::InternalServerError
        })?
        .ok_or(ServiceError::NotFound)?;

    let media = state
        .repos
        .media()
        .create(&property_id, &input)
        .await
        .map_err(|e| {
            log::error!("Media creation failed: {:#}", e);
            ServiceError::InternalServerError
        })?;

    Ok(HttpResponse::Created().json(media))
}

pub async fn feature_media(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let media = state
        .repos
        .media()
        .set_featured(&path.into_inner())
        .await
        .map_err(|e| {
            log::error!("Media feature update failed: {:#}", e);
            ServiceError::InternalServerError
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(HttpResponse::Ok().json(media))
}

pub async fn reorder_media(
    request: web::Json<Vec<MediaOrderUpdate>>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let updates = request.into_inner();
    if updates.is_empty() {
        return Err(ServiceError::BadRequest(
            "Reorder request must not be empty".to_string(),
        ));
    }

    state.repos.media().reorder(&updates).await.map_err(|e| {
        log::error!("Media reorder failed: {:#}", e);
        ServiceError::InternalServerError
    })?;

    Ok(HttpResponse::Ok().json(json!({ "updated": updates.len() })))
}

pub async fn delete_media(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = state
        .repos
        .media()
        .delete(&path.into_inner())
        .await
        .map_err(|e| {
            log::error!("Media deletion failed: {:#}", e);
            ServiceError::InternalServerError
        })?;

    if !deleted {
        return Err(ServiceError::NotFound);
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}
