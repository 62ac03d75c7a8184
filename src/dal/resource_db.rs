use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::resource::{NewResource, ResourceRecord};

pub async fn insert_resource(
    pool: &PgPool,
    resource: NewResource,
) -> Result<ResourceRecord, sqlx::Error> {
    sqlx::query_as::<_, ResourceRecord>(
        r"
        insert into resource
            (id, name, description, eco_friendly, category, address, website, hours_of_operation, image_url)
        values
            ($1, $2, $3, true, $4, $5, $6, $7, $8)
        returning
            id, name, description, eco_friendly, category, address,
            website, hours_of_operation, image_url, created_at
        ",
    )
    .bind(Uuid::new_v4())
    .bind(resource.name)
    .bind(resource.description)
    .bind(resource.category.as_str())
    .bind(resource.address)
    .bind(resource.website)
    .bind(resource.hours_of_operation)
    .bind(resource.image_url)
    .fetch_one(pool)
    .await
}

pub async fn get_resources(pool: &PgPool) -> Result<Vec<ResourceRecord>, sqlx::Error> {
    sqlx::query_as::<_, ResourceRecord>(
        r"
        select
            id, name, description, eco_friendly, category, address,
            website, hours_of_operation, image_url, created_at
        from
            resource
        order by created_at, id
        ",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_resources_by_names(
    pool: &PgPool,
    names: &[String],
) -> Result<Vec<ResourceRecord>, sqlx::Error> {
    sqlx::query_as::<_, ResourceRecord>(
        r"
        select
            id, name, description, eco_friendly, category, address,
            website, hours_of_operation, image_url, created_at
        from
            resource
        where
            name = any($1)
        order by created_at, id
        ",
    )
    .bind(names)
    .fetch_all(pool)
    .await
}
