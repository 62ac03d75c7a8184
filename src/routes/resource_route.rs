use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::{
    dal::resource_db,
    domain::resource::{NewResource, NewResourceBody},
};

use super::{auth::Authenticated, error::ApiError};

#[post("/resources")]
async fn add_resource(
    _: Authenticated,
    pool: web::Data<PgPool>,
    body: web::Json<NewResourceBody>,
) -> Result<HttpResponse, ApiError> {
    log::info!("Request body received: {:?}", body);

    let resource = NewResource::parse(body.into_inner())?;
    let resource = resource_db::insert_resource(&pool, resource).await?;
    log::info!("Resource saved successfully: {}", resource.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "resource added successfully",
        "resource": resource,
    })))
}

#[get("/resources")]
async fn get_resources(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let resources = resource_db::get_resources(&pool).await?;

    Ok(HttpResponse::Ok().json(resources))
}

#[derive(Deserialize)]
struct ResourceDetailsQuery {
    names: Option<String>,
}

#[get("/resource-details")]
async fn get_resource_details(
    pool: web::Data<PgPool>,
    query: web::Query<ResourceDetailsQuery>,
) -> Result<HttpResponse, ApiError> {
    let names = split_names(query.names.as_deref());
    if names.is_empty() {
        return Err(ApiError::MissingNames);
    }

    let resources = resource_db::get_resources_by_names(&pool, &names).await?;

    Ok(HttpResponse::Ok().json(resources))
}

fn split_names(names: Option<&str>) -> Vec<String> {
    names
        .unwrap_or_default()
        .split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}
