use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    domain::{
        footprint::{FootprintComparison, MAX_TOTAL_EMISSIONS},
        recommendation::extract_recommendations,
    },
    services::{
        build_recommendation_prompt, build_recommendations, OpenaiClient, QuizAnswer,
        Recommendations, SnapshotStore,
    },
};

use super::error::ApiError;

#[derive(Deserialize)]
struct QuizSubmission {
    total_emissions: f64,
    #[serde(default)]
    answers: Vec<QuizAnswer>,
}

#[derive(Serialize)]
struct QuizResult {
    total_emissions: f64,
    quiz_completed: bool,
    recommendations_generated: bool,
}

#[post("/profiles/{profile}/quiz")]
async fn submit_quiz(
    profile: web::Path<String>,
    body: web::Json<QuizSubmission>,
    snapshots: web::Data<SnapshotStore>,
    openai_client: web::Data<OpenaiClient>,
) -> Result<HttpResponse, ApiError> {
    let total = body.total_emissions;
    if !total.is_finite() || !(0.0..=MAX_TOTAL_EMISSIONS).contains(&total) {
        return Err(ApiError::InvalidScore(total));
    }

    let snapshot = snapshots.profile(&profile);
    snapshot.set_total_emissions(total).await?;
    snapshot.set_quiz_completed(true).await?;

    let prompt = build_recommendation_prompt(total, &body.answers);
    let recommendations_generated = match openai_client.generate_recommendations(&prompt).await {
        Ok(text) => {
            snapshot.set_recommendations(&text).await?;
            true
        }
        Err(e) => {
            log::error!("Error generating recommendations for {}: {:?}", profile, e);
            false
        }
    };

    Ok(HttpResponse::Ok().json(QuizResult {
        total_emissions: total,
        quiz_completed: true,
        recommendations_generated,
    }))
}

#[derive(Deserialize)]
struct RecommendationText {
    text: String,
}

#[derive(Serialize)]
struct SavedRecommendations {
    extracted: usize,
}

#[post("/profiles/{profile}/recommendations")]
async fn save_recommendations(
    profile: web::Path<String>,
    body: web::Json<RecommendationText>,
    snapshots: web::Data<SnapshotStore>,
) -> Result<HttpResponse, ApiError> {
    snapshots
        .profile(&profile)
        .set_recommendations(&body.text)
        .await?;

    Ok(HttpResponse::Ok().json(SavedRecommendations {
        extracted: extract_recommendations(Some(&body.text)).len(),
    }))
}

#[derive(Serialize)]
pub struct DashboardData {
    pub footprint: FootprintComparison,
    pub quiz_completed: bool,
    #[serde(flatten)]
    pub recommendations: Recommendations,
}

pub async fn load_dashboard(
    pool: &PgPool,
    snapshots: &SnapshotStore,
    profile: &str,
) -> Result<DashboardData, ApiError> {
    let snapshot = snapshots.profile(profile);

    Ok(DashboardData {
        footprint: FootprintComparison::new(snapshot.total_emissions().await?),
        quiz_completed: snapshot.quiz_completed().await?,
        recommendations: build_recommendations(pool, &snapshot).await,
    })
}

#[get("/profiles/{profile}/dashboard")]
async fn dashboard(
    profile: web::Path<String>,
    pool: web::Data<PgPool>,
    snapshots: web::Data<SnapshotStore>,
) -> Result<HttpResponse, ApiError> {
    let data = load_dashboard(&pool, &snapshots, &profile).await?;

    Ok(HttpResponse::Ok().json(data))
}
