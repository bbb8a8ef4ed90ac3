use estate_database::models::CreateInquiryInput;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInquiryRequest {
    pub property_id: Option<Uuid>,
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "Message must not be empty"))]
    pub message: String,
}

impl From<CreateInquiryRequest> for CreateInquiryInput {
    fn from(request: CreateInquiryRequest) -> Self {
        Self {
            property_id: request.property_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
        }
    }
}

/// Admin inquiry listing parameters; an unknown status value is ignored,
/// consistent with the listing filter policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatusRequest {
    pub status: String,
}
