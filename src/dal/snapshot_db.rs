use sqlx::{postgres::PgQueryResult, PgPool};

pub async fn get_value(pool: &PgPool, profile: &str, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r"
        select
            value
        from
            profile_snapshot
        where
            profile = $1 and key = $2
        ",
    )
    .bind(profile)
    .bind(key)
    .fetch_optional(pool)
    .await
}

pub async fn set_value(
    pool: &PgPool,
    profile: &str,
    key: &str,
    value: &str,
) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r"
        insert into profile_snapshot
            (profile, key, value)
        values
            ($1, $2, $3)
        on conflict(profile, key) do update set
            value = $3,
            updated_at = now()
        ",
    )
    .bind(profile)
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
}
