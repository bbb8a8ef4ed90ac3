use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::models::property::{PageQuery, PaginationMeta};
use crate::state::AppState;
use estate_database::models::{
    Category, CreatePropertyInput, Facing, FurnishedStatus, ListingStatus, Parking,
    PropertyType, SubType, UpdatePropertyInput,
};

/// The write path is strict where the read path is lenient: a bad
/// categorical value on create/update is a 400, not a silently dropped
/// field.
fn categorical_error(
    status: Option<&str>,
    category: Option<&str>,
    property_type: Option<&str>,
    sub_type: Option<&str>,
    furnished_status: Option<&str>,
    parking: Option<&str>,
    facing: Option<&str>,
) -> Option<String> {
    if let Some(v) = status {
        if ListingStatus::parse(v).is_none() {
            return Some(format!("Invalid status '{}'", v));
        }
    }
    if let Some(v) = category {
        if Category::parse(v).is_none() {
            return Some(format!("Invalid category '{}'", v));
        }
    }
    if let Some(v) = property_type {
        if PropertyType::parse(v).is_none() {
            return Some(format!("Invalid property type '{}'", v));
        }
    }
    if let Some(v) = sub_type {
        if SubType::parse(v).is_none() {
            return Some(format!("Invalid sub type '{}'", v));
        }
    }
    if let Some(v) = furnished_status {
        if FurnishedStatus::parse(v).is_none() {
            return Some(format!("Invalid furnished status '{}'", v));
        }
    }
    if let Some(v) = parking {
        if Parking::parse(v).is_none() {
            return Some(format!("Invalid parking '{}'", v));
        }
    }
    if let Some(v) = facing {
        if Facing::parse(v).is_none() {
            return Some(format!("Invalid facing '{}'", v));
        }
    }
    None
}

pub async fn list_properties(
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.repos.properties().list_admin(&query.pagination()).await {
        Ok(result) => {
            let pagination = PaginationMeta::from_result(&result);
            Ok(HttpResponse::Ok().json(json!({
                "properties": result.items,
                "pagination": pagination
            })))
        }
        Err(e) => {
            log::error!("Admin property listing failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch properties"
            })))
        }
    }
}

pub async fn create_property(
    request: web::Json<CreatePropertyInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let input = request.into_inner();

    if input.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Title is required"
        })));
    }
    if let Some(message) = categorical_error(
        Some(&input.status),
        Some(&input.category),
        Some(&input.property_type),
        input.sub_type.as_deref(),
        input.furnished_status.as_deref(),
        input.parking.as_deref(),
        input.facing.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": message })));
    }
    if input.price < 0 || input.area < 0 || input.bedrooms < 0 || input.bathrooms < 0 {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Numeric attributes must be non-negative"
        })));
    }

    match state.repos.properties().create(&input).await {
        Ok(property) => Ok(HttpResponse::Created().json(property)),
        Err(e) => {
            log::error!("Property creation failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create property"
            })))
        }
    }
}

pub async fn update_property(
    path: web::Path<Uuid>,
    request: web::Json<UpdatePropertyInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let input = request.into_inner();

    if let Some(message) = categorical_error(
        input.status.as_deref(),
        input.category.as_deref(),
        input.property_type.as_deref(),
        input.sub_type.as_deref(),
        input.furnished_status.as_deref(),
        input.parking.as_deref(),
        input.facing.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": message })));
    }

    match state
        .repos
        .properties()
        .update(&path.into_inner(), &input)
        .await
    {
        Ok(Some(property)) => Ok(HttpResponse::Ok().json(property)),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Property not found"
        }))),
        Err(e) => {
            log::error!("Property update failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update property"
            })))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

pub async fn set_property_active(
    path: web::Path<Uuid>,
    request: web::Json<SetActiveRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state
        .repos
        .properties()
        .set_active(&path.into_inner(), request.is_active)
        .await
    {
        Ok(Some(property)) => Ok(HttpResponse::Ok().json(property)),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Property not found"
        }))),
        Err(e) => {
            log::error!("Property active-flag update failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update property"
            })))
        }
    }
}

pub async fn delete_property(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.repos.properties().delete(&path.into_inner()).await {
        Ok(true) => Ok(HttpResponse::Ok().json(json!({ "deleted": true }))),
        Ok(false) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Property not found"
        }))),
        Err(e) => {
            log::error!("Property deletion failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete property"
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::categorical_error;

    #[test]
    fn valid_values_pass() {
        assert_eq!(
            categorical_error(
                Some("sale"),
                Some("residential"),
                Some("apartment"),
                Some("penthouse"),
                Some("furnished"),
                Some("covered"),
                Some("north-east"),
            ),
            None
        );
        assert_eq!(categorical_error(None, None, None, None, None, None, None), None);
    }

    #[test]
    fn first_invalid_value_is_reported() {
        let err = categorical_error(
            Some("lease"),
            Some("residential"),
            Some("apartment"),
            None,
            None,
            None,
            None,
        );
        assert_eq!(err.as_deref(), Some("Invalid status 'lease'"));

        let err = categorical_error(
            Some("sale"),
            Some("residential"),
            Some("castle"),
            None,
            None,
            None,
            None,
        );
        assert_eq!(err.as_deref(), Some("Invalid property type 'castle'"));
    }
}
