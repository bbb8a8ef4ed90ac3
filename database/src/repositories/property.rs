use anyhow::{Context, Result};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::{
    CreatePropertyInput, Media, PaginatedResult, Pagination, Property, PropertyFilters,
    PropertyWithMedia, UpdatePropertyInput,
};

pub struct PropertyRepository {
    pool: PgPool,
}

/// Append the conjunctive predicate list for a public property search.
///
/// The mandatory `is_active = TRUE` condition always comes first; every
/// optional filter contributes a condition only when present and usable
/// (an absent or non-positive bound never narrows the result set). Both
/// the count query and the page query are driven through this single
/// function so the two always agree on the predicate set.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &PropertyFilters) {
    qb.push(" WHERE is_active = TRUE");

    if let Some(status) = filters.status {
        qb.push(" AND status = ");
        qb.push_bind(status.as_str());
    }
    if let Some(category) = filters.category {
        qb.push(" AND category = ");
        qb.push_bind(category.as_str());
    }
    if let Some(property_type) = filters.property_type {
        qb.push(" AND property_type = ");
        qb.push_bind(property_type.as_str());
    }
    if let Some(sub_type) = filters.sub_type {
        qb.push(" AND sub_type = ");
        qb.push_bind(sub_type.as_str());
    }
    if let Some(furnished_status) = filters.furnished_status {
        qb.push(" AND furnished_status = ");
        qb.push_bind(furnished_status.as_str());
    }
    if let Some(parking) = filters.parking {
        qb.push(" AND parking = ");
        qb.push_bind(parking.as_str());
    }
    if let Some(facing) = filters.facing {
        qb.push(" AND facing = ");
        qb.push_bind(facing.as_str());
    }

    if let Some(min_price) = filters.min_price.filter(|v| *v > 0) {
        qb.push(" AND price >= ");
        qb.push_bind(min_price);
    }
    if let Some(max_price) = filters.max_price.filter(|v| *v > 0) {
        qb.push(" AND price <= ");
        qb.push_bind(max_price);
    }
    if let Some(min_area) = filters.min_area.filter(|v| *v > 0) {
        qb.push(" AND area >= ");
        qb.push_bind(min_area);
    }
    if let Some(max_area) = filters.max_area.filter(|v| *v > 0) {
        qb.push(" AND area <= ");
        qb.push_bind(max_area);
    }

    if let Some(bedrooms) = filters.bedrooms.filter(|v| *v > 0) {
        qb.push(" AND bedrooms = ");
        qb.push_bind(bedrooms);
    }
    if let Some(bathrooms) = filters.bathrooms.filter(|v| *v > 0) {
        qb.push(" AND bathrooms = ");
        qb.push_bind(bathrooms);
    }

    if let Some(term) = filters.search_term() {
        let pattern = format!("%{}%", term);
        qb.push(" AND (title ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR description ILIKE ");
        qb.push_bind(pattern);
        qb.push(")");
    }
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Public listing search: one page of active properties matching the
    /// filters, newest first, media attached, plus the unpaginated total
    /// for the same predicate set.
    pub async fn search(
        &self,
        filters: &PropertyFilters,
        pagination: &Pagination,
    ) -> Result<PaginatedResult<PropertyWithMedia>> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM properties");
        push_filters(&mut count_qb, filters);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .context("Failed to count properties")?;

        let mut page_qb = QueryBuilder::new("SELECT * FROM properties");
        push_filters(&mut page_qb, filters);
        page_qb.push(" ORDER BY created_at DESC LIMIT ");
        page_qb.push_bind(pagination.limit);
        page_qb.push(" OFFSET ");
        page_qb.push_bind(pagination.offset);

        let rows: Vec<Property> = page_qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch property page")?;

        let mut items = Vec::with_capacity(rows.len());
        for property in rows {
            let media = self.media_for(&property.id).await?;
            items.push(PropertyWithMedia { property, media });
        }

        tracing::debug!(total, returned = items.len(), "property search executed");

        Ok(PaginatedResult::new(items, total, pagination))
    }

    async fn media_for(&self, property_id: &Uuid) -> Result<Vec<Media>> {
        sqlx::query_as::<_, Media>(
            "SELECT * FROM property_media WHERE property_id = $1 ORDER BY order_index ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch property media")
    }

    /// Public detail view; inactive listings are invisible here.
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<PropertyWithMedia>> {
        let property = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find property")?;

        match property {
            Some(property) => {
                let media = self.media_for(&property.id).await?;
                Ok(Some(PropertyWithMedia { property, media }))
            }
            None => Ok(None),
        }
    }

    /// Admin lookup, active or not.
    pub async fn find_by_id_admin(&self, id: &Uuid) -> Result<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to find property")
    }

    /// Admin listing: all properties regardless of active flag.
    pub async fn list_admin(&self, pagination: &Pagination) -> Result<PaginatedResult<Property>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count properties")?;

        let items = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list properties")?;

        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn create(&self, input: &CreatePropertyInput) -> Result<Property> {
        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                title, description, status, category, property_type, sub_type,
                furnished_status, parking, facing, price, area, bedrooms, bathrooms,
                address, city, locality, latitude, longitude
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.status)
        .bind(&input.category)
        .bind(&input.property_type)
        .bind(&input.sub_type)
        .bind(&input.furnished_status)
        .bind(&input.parking)
        .bind(&input.facing)
        .bind(input.price)
        .bind(input.area)
        .bind(input.bedrooms)
        .bind(input.bathrooms)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.locality)
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create property")
    }

    pub async fn update(&self, id: &Uuid, input: &UpdatePropertyInput) -> Result<Option<Property>> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                status = COALESCE($3, status),
                category = COALESCE($4, category),
                property_type = COALESCE($5, property_type),
                sub_type = COALESCE($6, sub_type),
                furnished_status = COALESCE($7, furnished_status),
                parking = COALESCE($8, parking),
                facing = COALESCE($9, facing),
                price = COALESCE($10, price),
                area = COALESCE($11, area),
                bedrooms = COALESCE($12, bedrooms),
                bathrooms = COALESCE($13, bathrooms),
                address = COALESCE($14, address),
                city = COALESCE($15, city),
                locality = COALESCE($16, locality),
                latitude = COALESCE($17, latitude),
                longitude = COALESCE($18, longitude),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $19
            RETURNING *
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.status)
        .bind(&input.category)
        .bind(&input.property_type)
        .bind(&input.sub_type)
        .bind(&input.furnished_status)
        .bind(&input.parking)
        .bind(&input.facing)
        .bind(input.price)
        .bind(input.area)
        .bind(input.bedrooms)
        .bind(input.bathrooms)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.locality)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update property")
    }

    pub async fn set_active(&self, id: &Uuid, is_active: bool) -> Result<Option<Property>> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET is_active = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update property active flag")
    }

    pub async fn delete(&self, id: &Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete property")?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Facing, ListingStatus, PropertyType};

    fn where_clause(filters: &PropertyFilters) -> String {
        let mut qb = QueryBuilder::new("");
        push_filters(&mut qb, filters);
        qb.sql().to_string()
    }

    #[test]
    fn no_filters_yields_only_the_active_predicate() {
        let sql = where_clause(&PropertyFilters::default());
        assert_eq!(sql, " WHERE is_active = TRUE");
    }

    #[test]
    fn each_present_filter_contributes_one_condition() {
        let filters = PropertyFilters {
            status: Some(ListingStatus::Sale),
            category: Some(Category::Residential),
            property_type: Some(PropertyType::Apartment),
            facing: Some(Facing::North),
            ..Default::default()
        };
        let sql = where_clause(&filters);
        assert!(sql.starts_with(" WHERE is_active = TRUE"));
        assert!(sql.contains("status = $1"));
        assert!(sql.contains("category = $2"));
        assert!(sql.contains("property_type = $3"));
        assert!(sql.contains("facing = $4"));
        assert!(!sql.contains("price"));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn non_positive_bounds_are_ignored() {
        let filters = PropertyFilters {
            min_price: Some(0),
            max_price: Some(-1),
            min_area: Some(0),
            bedrooms: Some(0),
            ..Default::default()
        };
        assert_eq!(where_clause(&filters), " WHERE is_active = TRUE");
    }

    #[test]
    fn positive_bounds_become_range_predicates() {
        let filters = PropertyFilters {
            min_price: Some(1_000_000),
            max_price: Some(9_000_000),
            min_area: Some(500),
            max_area: Some(2000),
            ..Default::default()
        };
        let sql = where_clause(&filters);
        assert!(sql.contains("price >= $1"));
        assert!(sql.contains("price <= $2"));
        assert!(sql.contains("area >= $3"));
        assert!(sql.contains("area <= $4"));
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let filters = PropertyFilters {
            search: Some("  kailash ".to_string()),
            ..Default::default()
        };
        let sql = where_clause(&filters);
        assert!(sql.contains("(title ILIKE $1 OR description ILIKE $2)"));
    }

    #[test]
    fn blank_search_contributes_nothing() {
        let filters = PropertyFilters {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(where_clause(&filters), " WHERE is_active = TRUE");
    }

    #[test]
    fn count_and_page_queries_share_the_predicate_set() {
        let filters = PropertyFilters {
            status: Some(ListingStatus::Rent),
            min_price: Some(10_000),
            bedrooms: Some(2),
            search: Some("villa".to_string()),
            ..Default::default()
        };

        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM properties");
        push_filters(&mut count_qb, &filters);
        let mut page_qb = QueryBuilder::new("SELECT * FROM properties");
        push_filters(&mut page_qb, &filters);

        let count_where = count_qb
            .sql()
            .strip_prefix("SELECT COUNT(*) FROM properties")
            .unwrap()
            .to_string();
        let page_where = page_qb
            .sql()
            .strip_prefix("SELECT * FROM properties")
            .unwrap()
            .to_string();
        assert_eq!(count_where, page_where);
    }
}
