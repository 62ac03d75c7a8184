use anyhow::{anyhow, Context};
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use itertools::Itertools;
use serde::Deserialize;

use crate::domain::category::ResourceCategory;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswer {
    pub question: String,
    pub answer: String,
}

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl Default for OpenaiClient {
    fn default() -> Self {
        OpenaiClient {
            client: Client::new(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl OpenaiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
            model,
        }
    }

    pub async fn generate_recommendations(&self, prompt: &str) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(1000_u32)
            .build()?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("OpenAI chat completion failed")?;
        log::info!("Response: {:?}", response);

        response
            .choices
            .first()
            .ok_or_else(|| anyhow!("No choices in Openai response"))?
            .message
            .content
            .clone()
            .ok_or_else(|| anyhow!("No content"))
    }
}

/// Asks for local resources written as `Name (Category)` so the answer can be
/// extracted and matched against the directory.
pub fn build_recommendation_prompt(total_emissions: f64, answers: &[QuizAnswer]) -> String {
    let categories = ResourceCategory::labels().join(", ");
    let answers = answers
        .iter()
        .map(|a| format!("- {}: {}", a.question.trim(), a.answer.trim()))
        .join("\n");

    format!(
        r#"A user finished a carbon footprint quiz with a total of {:.2} tons of CO2 per year.
Their answers were:
{}

Recommend local eco-friendly resources that would help them lower their footprint.
Only use these categories: {}.
Write every resource as its name followed by its category in parentheses, for example "Westborn Market (Grocery Store)".
Give each resource on a new line."#,
        total_emissions, answers, categories
    )
}

#[cfg(test)]
mod tests {
    use super::{build_recommendation_prompt, QuizAnswer};

    #[test]
    fn prompt_lists_answers_and_categories() {
        let answers = vec![
            QuizAnswer {
                question: "How do you commute?".to_string(),
                answer: " Car ".to_string(),
            },
            QuizAnswer {
                question: "How often do you buy new clothes?".to_string(),
                answer: "Monthly".to_string(),
            },
        ];

        let prompt = build_recommendation_prompt(18.256, &answers);

        assert!(prompt.contains("18.26 tons"));
        assert!(prompt.contains("- How do you commute?: Car\n- How often do you buy new clothes?: Monthly"));
        assert!(prompt.contains(
            "Bike/Walk Trail, Public Transportation, Clothes Market, Grocery Store"
        ));
        assert!(!prompt.contains("Biking Trail"));
    }
}
