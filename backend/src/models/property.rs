use serde::{Deserialize, Serialize};

use estate_database::models::{
    Category, Facing, FurnishedStatus, ListingStatus, PaginatedResult, Pagination, Parking,
    PropertyFilters, PropertyType, PropertyWithMedia, SubType,
};

/// Raw query-string parameters of the public listing endpoint.
///
/// Everything arrives as an optional string; parsing is permissive per the
/// listing policy: a malformed number or an unknown enum value behaves as
/// an absent filter, never as a request error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub property_type: Option<String>,
    pub sub_type: Option<String>,
    pub furnished_status: Option<String>,
    pub parking: Option<String>,
    pub facing: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub search: Option<String>,
}

fn parse_num<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
    value.as_deref().and_then(|s| s.trim().parse().ok())
}

impl PropertyListQuery {
    pub fn filters(&self) -> PropertyFilters {
        PropertyFilters {
            status: self.status.as_deref().and_then(ListingStatus::parse),
            category: self.category.as_deref().and_then(Category::parse),
            property_type: self.property_type.as_deref().and_then(PropertyType::parse),
            sub_type: self.sub_type.as_deref().and_then(SubType::parse),
            furnished_status: self
                .furnished_status
                .as_deref()
                .and_then(FurnishedStatus::parse),
            parking: self.parking.as_deref().and_then(Parking::parse),
            facing: self.facing.as_deref().and_then(Facing::parse),
            min_price: parse_num(&self.min_price),
            max_price: parse_num(&self.max_price),
            min_area: parse_num(&self.min_area),
            max_area: parse_num(&self.max_area),
            bedrooms: parse_num(&self.bedrooms),
            bathrooms: parse_num(&self.bathrooms),
            search: self.search.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_page(
            parse_num(&self.page).unwrap_or(0),
            parse_num(&self.limit).unwrap_or(0),
        )
    }
}

/// Plain page/limit query for admin listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_page(
            parse_num(&self.page).unwrap_or(0),
            parse_num(&self.limit).unwrap_or(0),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn from_result<T>(result: &PaginatedResult<T>) -> Self {
        Self {
            page: result.page(),
            limit: result.limit,
            total: result.total,
            total_pages: result.total_pages(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyWithMedia>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_database::models::DEFAULT_PAGE_SIZE;

    #[test]
    fn empty_query_yields_no_filters_and_default_pagination() {
        let query = PropertyListQuery::default();
        let filters = query.filters();
        assert!(filters.status.is_none());
        assert!(filters.min_price.is_none());
        assert!(filters.search.is_none());

        let pagination = query.pagination();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let query = PropertyListQuery {
            page: Some("abc".to_string()),
            limit: Some("-2".to_string()),
            min_price: Some("cheap".to_string()),
            ..Default::default()
        };
        let pagination = query.pagination();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
        assert!(query.filters().min_price.is_none());
    }

    #[test]
    fn all_and_unknown_enum_values_are_dropped() {
        let query = PropertyListQuery {
            status: Some("all".to_string()),
            category: Some("industrial".to_string()),
            property_type: Some("apartment".to_string()),
            ..Default::default()
        };
        let filters = query.filters();
        assert!(filters.status.is_none());
        assert!(filters.category.is_none());
        assert_eq!(filters.property_type, Some(PropertyType::Apartment));
    }

    #[test]
    fn valid_numbers_are_parsed() {
        let query = PropertyListQuery {
            page: Some("3".to_string()),
            limit: Some("12".to_string()),
            min_price: Some("1000000".to_string()),
            bedrooms: Some("2".to_string()),
            ..Default::default()
        };
        let pagination = query.pagination();
        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.limit, 12);
        assert_eq!(pagination.offset, 24);

        let filters = query.filters();
        assert_eq!(filters.min_price, Some(1_000_000));
        assert_eq!(filters.bedrooms, Some(2));
    }

    #[test]
    fn pagination_meta_computes_total_pages() {
        let pagination = Pagination::from_page(2, 9);
        let result: PaginatedResult<()> = PaginatedResult::new(vec![], 19, &pagination);
        let meta = PaginationMeta::from_result(&result);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 9);
        assert_eq!(meta.total, 19);
        assert_eq!(meta.total_pages, 3);
    }
}
