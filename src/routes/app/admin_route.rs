use actix_web::{get, web, HttpResponse};
use askama::Template;
use sqlx::PgPool;

use crate::{
    dal::resource_db,
    domain::{category::ResourceCategory, resource::ResourceRecord},
    routes::error::ApiError,
};

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    resources: Vec<ResourceRecord>,
    categories: Vec<&'static str>,
}

#[get("/admin")]
async fn admin(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let resources = resource_db::get_resources(&pool).await.unwrap_or_else(|e| {
        log::error!("Error fetching resources for admin table: {:?}", e);
        vec![]
    });

    let page = AdminTemplate {
        resources,
        categories: ResourceCategory::labels(),
    }
    .render()?;

    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
}
