use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Owner;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Owner, sqlx::Error> {
    sqlx::query_as::<_, Owner>(
        "INSERT INTO owners (name, email, password_hash)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>("SELECT * FROM owners ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<Option<Owner>, sqlx::Error> {
    sqlx::query_as::<_, Owner>(
        "UPDATE owners SET name = COALESCE($2, name), email = COALESCE($3, email)
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn set_contact_request(
    pool: &PgPool,
    id: Uuid,
    tenant_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE owners SET contact_requested_by = $2 WHERE id = $1")
        .bind(id)
        .bind(tenant_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn clear_contact_request(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE owners SET contact_requested_by = NULL WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
