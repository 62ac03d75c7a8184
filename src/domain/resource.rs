use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::{category::ResourceCategory, grouping::Categorized};

/// A directory entry for a local eco-friendly business, service or trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResourceRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub eco_friendly: bool,
    pub category: String,
    pub address: String,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Categorized for ResourceRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Create request as it arrives over the wire, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct NewResourceBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub eco_friendly: Option<Value>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
}

/// A validated resource ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub name: String,
    pub description: String,
    pub category: ResourceCategory,
    pub address: String,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub image_url: Option<String>,
}

impl NewResource {
    pub fn parse(body: NewResourceBody) -> Result<Self, ValidationError> {
        let name = required(body.name);
        let description = required(body.description);
        let category = required(body.category);
        let address = required(body.address);
        let eco_friendly = body.eco_friendly.as_ref().map(is_truthy).unwrap_or(false);

        let mut missing = vec![];
        if name.is_none() {
            missing.push("name");
        }
        if description.is_none() {
            missing.push("description");
        }
        if !eco_friendly {
            missing.push("eco_friendly");
        }
        if category.is_none() {
            missing.push("category");
        }
        if address.is_none() {
            missing.push("address");
        }

        let (Some(name), Some(description), Some(category), Some(address), true) =
            (name, description, category, address, missing.is_empty())
        else {
            return Err(ValidationError::MissingFields(missing));
        };

        let category = category
            .parse::<ResourceCategory>()
            .map_err(|e| ValidationError::UnknownCategory(e.0))?;

        Ok(NewResource {
            name,
            description,
            category,
            address,
            website: optional_url("website", body.website)?,
            hours_of_operation: required(body.hours_of_operation),
            image_url: optional_url("image_url", body.image_url)?,
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match required(value) {
        Some(v) => match Url::parse(&v) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(v)),
            _ => Err(ValidationError::InvalidUrl { field, value: v }),
        },
        None => Ok(None),
    }
}

/// Admin forms send "Yes"/"No" strings as often as real booleans.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        ),
        _ => false,
    }
}
