use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::models::inquiry::{CreateInquiryRequest, InquiryListQuery, UpdateInquiryStatusRequest};
use crate::models::property::PaginationMeta;
use crate::state::AppState;
use estate_database::models::{CreateInquiryInput, InquiryStatus, Pagination};

/// Public inquiry submission.
pub async fn create_inquiry(
    request: web::Json<CreateInquiryRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(validation_errors) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Validation failed",
            "details": validation_errors
        })));
    }

    let input = CreateInquiryInput::from(request.into_inner());
    match state.repos.inquiries().create(&input).await {
        Ok(inquiry) => Ok(HttpResponse::Created().json(inquiry)),
        Err(e) => {
            log::error!("Inquiry creation failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to submit inquiry"
            })))
        }
    }
}

/// Admin inquiry listing, newest first, optionally narrowed by status.
pub async fn list_inquiries(
    query: web::Query<InquiryListQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let status = query.status.as_deref().and_then(InquiryStatus::parse);
    let pagination = Pagination::from_page(
        query.page.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0),
        query.limit.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0),
    );

    match state.repos.inquiries().list(status, &pagination).await {
        Ok(result) => {
            let pagination = PaginationMeta::from_result(&result);
            Ok(HttpResponse::Ok().json(json!({
                "inquiries": result.items,
                "pagination": pagination
            })))
        }
        Err(e) => {
            log::error!("Inquiry listing failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch inquiries"
            })))
        }
    }
}

pub async fn update_inquiry_status(
    path: web::Path<Uuid>,
    request: web::Json<UpdateInquiryStatusRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(status) = InquiryStatus::parse(&request.status) else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Status must be one of: new, read, resolved"
        })));
    };

    match state
        .repos
        .inquiries()
        .set_status(&path.into_inner(), status)
        .await
    {
        Ok(Some(inquiry)) => Ok(HttpResponse::Ok().json(inquiry)),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Inquiry not found"
        }))),
        Err(e) => {
            log::error!("Inquiry status update failed: {:#}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update inquiry"
            })))
        }
    }
}
