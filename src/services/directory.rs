use sqlx::PgPool;

use crate::{dal::resource_db, domain::resource::ResourceRecord};

/// Where the recommendation pipeline reads resource records from.
#[allow(async_fn_in_trait)]
pub trait ResourceDirectory {
    /// Every record in the directory.
    async fn all_resources(&self) -> Result<Vec<ResourceRecord>, sqlx::Error>;

    /// Records whose name is one of `names`.
    async fn resources_named(&self, names: &[String]) -> Result<Vec<ResourceRecord>, sqlx::Error>;
}

impl ResourceDirectory for PgPool {
    async fn all_resources(&self) -> Result<Vec<ResourceRecord>, sqlx::Error> {
        resource_db::get_resources(self).await
    }

    async fn resources_named(&self, names: &[String]) -> Result<Vec<ResourceRecord>, sqlx::Error> {
        resource_db::get_resources_by_names(self, names).await
    }
}
