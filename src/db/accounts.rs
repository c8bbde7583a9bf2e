use crate::models::Account;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    username: &str,
    password_hash: &str,
    role: &str,
) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "INSERT INTO accounts (username, password_hash, role)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .fetch_one(executor)
    .await
}

pub async fn find_by_username_and_role<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    username: &str,
    role: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE username = $1 AND role = $2")
        .bind(username)
        .bind(role)
        .fetch_optional(executor)
        .await
}
