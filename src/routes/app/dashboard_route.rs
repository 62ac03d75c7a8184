use actix_web::{get, web, HttpResponse};
use askama::Template;
use sqlx::PgPool;

use crate::{
    domain::{footprint::FootprintComparison, resource::ResourceRecord},
    routes::{error::ApiError, profile_route::load_dashboard},
    services::SnapshotStore,
};

const FOOTPRINT: &str = "👣";

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    profile: String,
    footprint: FootprintComparison,
    quiz_completed: bool,
    from_cache: bool,
    matched: Vec<(String, Vec<ResourceRecord>)>,
    additional: Vec<(String, Vec<ResourceRecord>)>,
}

impl DashboardTemplate {
    fn user_footprints(&self) -> String {
        FOOTPRINT.repeat(self.footprint.user_footprints as usize)
    }

    fn us_footprints(&self) -> String {
        FOOTPRINT.repeat(self.footprint.average_us_footprints as usize)
    }

    fn global_footprints(&self) -> String {
        FOOTPRINT.repeat(self.footprint.average_global_footprints as usize)
    }
}

#[get("/dashboard/{profile}")]
async fn dashboard(
    profile: web::Path<String>,
    pool: web::Data<PgPool>,
    snapshots: web::Data<SnapshotStore>,
) -> Result<HttpResponse, ApiError> {
    let data = load_dashboard(&pool, &snapshots, &profile).await?;

    let page = DashboardTemplate {
        profile: profile.into_inner(),
        footprint: data.footprint,
        quiz_completed: data.quiz_completed,
        from_cache: data.recommendations.from_cache,
        matched: data.recommendations.matched.into_iter().collect(),
        additional: data.recommendations.additional.into_iter().collect(),
    }
    .render()?;

    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
}

#[cfg(test)]
mod tests {
    use askama::Template;
    use chrono::Utc;
    use uuid::Uuid;

    use super::DashboardTemplate;
    use crate::domain::{footprint::FootprintComparison, resource::ResourceRecord};

    fn westborn() -> ResourceRecord {
        ResourceRecord {
            id: Uuid::new_v4(),
            name: "Westborn Market".to_string(),
            description: "Local produce".to_string(),
            eco_friendly: true,
            category: "Grocery Store".to_string(),
            address: "21755 Michigan Ave, Dearborn, MI 48124".to_string(),
            website: None,
            hours_of_operation: Some("8 AM - 9 PM".to_string()),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn template(quiz_completed: bool) -> DashboardTemplate {
        DashboardTemplate {
            profile: "alice".to_string(),
            footprint: FootprintComparison::new(Some(3.4)),
            quiz_completed,
            from_cache: false,
            matched: vec![
                ("Grocery Store".to_string(), vec![westborn()]),
                ("Clothes Market".to_string(), vec![]),
            ],
            additional: vec![],
        }
    }

    #[test]
    fn renders_score_and_matches() {
        let page = template(true).render().unwrap();

        assert!(page.contains("<strong>3.40</strong>"));
        assert!(page.contains(r#"<div class="image-container">👣👣👣</div>"#));
        assert!(page.contains("Westborn Market"));
        assert!(page.contains("8 AM - 9 PM"));
        assert!(page.contains("No matching resources found yet."));
    }

    #[test]
    fn asks_for_quiz_first() {
        let page = template(false).render().unwrap();

        assert!(page.contains("Please complete the calculator quiz"));
        assert!(!page.contains("Westborn Market"));
    }
}
