use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Property;

pub struct NewProperty<'a> {
    pub owner_id: Uuid,
    pub rent: i64,
    pub contact: &'a str,
    pub area: &'a str,
    pub place: &'a str,
    pub amenities: &'a [String],
}

pub struct PropertyChanges<'a> {
    pub rent: Option<i64>,
    pub contact: Option<&'a str>,
    pub area: Option<&'a str>,
    pub place: Option<&'a str>,
    pub amenities: Option<&'a [String]>,
    pub status: Option<&'a str>,
}

pub async fn create(pool: &PgPool, new: NewProperty<'_>) -> Result<Property, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "INSERT INTO properties (owner_id, rent, contact, area, place, amenities)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(new.owner_id)
    .bind(new.rent)
    .bind(new.contact)
    .bind(new.area)
    .bind(new.place)
    .bind(new.amenities)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id_and_owner(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_first_by_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at LIMIT 1",
    )
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "SELECT * FROM properties WHERE owner_id = $1 ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    changes: PropertyChanges<'_>,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "UPDATE properties SET
            rent = COALESCE($2, rent),
            contact = COALESCE($3, contact),
            area = COALESCE($4, area),
            place = COALESCE($5, place),
            amenities = COALESCE($6, amenities),
            status = COALESCE($7, status)
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(changes.rent)
    .bind(changes.contact)
    .bind(changes.area)
    .bind(changes.place)
    .bind(changes.amenities)
    .bind(changes.status)
    .fetch_optional(pool)
    .await
}

pub async fn update_for_owner(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    changes: PropertyChanges<'_>,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "UPDATE properties SET
            rent = COALESCE($3, rent),
            contact = COALESCE($4, contact),
            area = COALESCE($5, area),
            place = COALESCE($6, place),
            amenities = COALESCE($7, amenities),
            status = COALESCE($8, status)
         WHERE id = $1 AND owner_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(owner_id)
    .bind(changes.rent)
    .bind(changes.contact)
    .bind(changes.area)
    .bind(changes.place)
    .bind(changes.amenities)
    .bind(changes.status)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>("DELETE FROM properties WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_for_owner(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Property>, sqlx::Error> {
    sqlx::query_as::<_, Property>(
        "DELETE FROM properties WHERE id = $1 AND owner_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}
