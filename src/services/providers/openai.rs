/// OpenAI chat-completions provider
///
/// Asks the model for three destinations as a JSON object and maps the reply into
/// `Destination` values. Any failure (credentials, quota, network, timeout, a reply
/// that does not parse) comes back as `AppError::ExternalApi` or
/// `AppError::HttpClient` so the orchestrator can fall back.
use reqwest::{Client as HttpClient, Url};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Destination, TravelPreferences},
    services::{providers::DestinationProvider, selector::RECOMMENDATION_COUNT},
};

const SYSTEM_PROMPT: &str = "You are an expert travel advisor with deep knowledge of destinations worldwide. You provide personalized, practical, and inspiring travel recommendations.";
const IMAGE_SEARCH_URL: &str = "https://source.unsplash.com/800x600/";
const ACTIVITY_COUNT: usize = 4;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeneratedRecommendations {
    destinations: Vec<GeneratedDestination>,
}

/// Destination as the model returns it, before image enrichment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedDestination {
    name: String,
    country: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    activities: Vec<String>,
    estimated_cost: f64,
    #[serde(default)]
    best_time: String,
}

#[derive(Clone)]
pub struct OpenAiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        temperature: f32,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
            temperature,
        })
    }

    /// Builds the provider when an API key is configured
    pub fn from_config(config: &Config) -> AppResult<Option<Self>> {
        let Some(api_key) = config.openai_api_key.clone() else {
            return Ok(None);
        };

        Self::new(
            api_key,
            config.openai_api_url.clone(),
            config.openai_model.clone(),
            config.openai_temperature,
            Duration::from_secs(config.generation_timeout_secs),
        )
        .map(Some)
    }

    fn chat_url(&self) -> String {
        let trimmed = self.api_url.trim_end_matches('/');
        if trimmed.ends_with("/chat/completions") {
            trimmed.to_string()
        } else {
            format!("{}/chat/completions", trimmed)
        }
    }

    fn request_body(&self, preferences: &TravelPreferences) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(preferences) },
            ],
            "temperature": self.temperature,
            "response_format": { "type": "json_object" },
        })
    }
}

/// User prompt describing the trip
pub fn build_prompt(preferences: &TravelPreferences) -> String {
    let mut lines = vec![
        format!(
            "You are a travel expert AI assistant. Based on the following travel preferences, recommend exactly {} unique travel destinations that would be perfect for this traveler.",
            RECOMMENDATION_COUNT
        ),
        String::new(),
        "Preferences:".to_string(),
        format!(
            "- Budget: {} {} (total trip cost)",
            preferences.budget, preferences.currency
        ),
        format!("- Duration: {} days", preferences.duration),
        format!("- Travel Month: {}", preferences.month),
        format!("- Mood: {}", preferences.mood),
    ];

    if let Some(origin) = preferences
        .user_location
        .as_deref()
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
    {
        lines.push(format!("- Traveling from: {}", origin));
    }

    if let Some(country) = preferences.country_filter() {
        lines.push(format!(
            "- Destination country: {} (only recommend places in this country)",
            country
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "For each destination, provide the name (city or region), the country, a catchy one-line subtitle, a compelling 2-3 sentence summary, exactly {} specific activities or attractions, the estimated total trip cost in {} as a number, and the best time to visit (e.g. \"Mar - May\").",
        ACTIVITY_COUNT, preferences.currency
    ));
    lines.push(String::new());
    lines.push(
        r#"Return a JSON object of the form {"destinations": [{"name": "", "country": "", "subtitle": "", "summary": "", "activities": ["", "", "", ""], "estimatedCost": 0, "bestTime": ""}]}."#
            .to_string(),
    );
    lines.push(
        "Ensure the destinations are diverse, realistic for the budget, and well-suited for the specified mood and travel month."
            .to_string(),
    );

    lines.join("\n")
}

/// Unsplash search URL for a destination
pub fn image_url(name: &str, country: &str) -> AppResult<String> {
    let mut url = Url::parse(IMAGE_SEARCH_URL)
        .map_err(|e| AppError::Internal(format!("Invalid image search URL: {}", e)))?;
    url.set_query(Some(&format!("{} {} travel", name, country)));
    Ok(url.to_string())
}

/// Extracts destinations from a raw chat-completion reply
fn parse_completion(response: ChatCompletionResponse) -> AppResult<Vec<Destination>> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| AppError::ExternalApi("No content in model response".to_string()))?;

    let generated: GeneratedRecommendations = serde_json::from_str(&content)
        .map_err(|e| AppError::ExternalApi(format!("Malformed model response: {}", e)))?;

    let mut seen = HashSet::new();
    let mut destinations = Vec::new();

    for item in generated.destinations {
        let name = item.name.trim();
        let country = item.country.trim();
        if name.is_empty() || country.is_empty() || !item.estimated_cost.is_finite() {
            continue;
        }
        if !seen.insert((name.to_lowercase(), country.to_lowercase())) {
            continue;
        }

        destinations.push(Destination {
            name: name.to_string(),
            country: country.to_string(),
            subtitle: item.subtitle,
            summary: item.summary,
            activities: item.activities.into_iter().take(ACTIVITY_COUNT).collect(),
            estimated_cost: item.estimated_cost.max(0.0).round(),
            best_time: item.best_time,
            image_url: image_url(name, country)?,
        });

        if destinations.len() == RECOMMENDATION_COUNT {
            break;
        }
    }

    if destinations.is_empty() {
        return Err(AppError::ExternalApi(
            "Model returned no usable destinations".to_string(),
        ));
    }

    Ok(destinations)
}

#[async_trait::async_trait]
impl DestinationProvider for OpenAiProvider {
    async fn recommend(&self, preferences: &TravelPreferences) -> AppResult<Vec<Destination>> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::ExternalApi(
                "OpenAI API key is not configured".to_string(),
            ));
        }

        let response = self
            .http_client
            .post(self.chat_url())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(preferences))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let destinations = parse_completion(completion)?;

        tracing::info!(
            results = destinations.len(),
            model = %self.model,
            provider = "openai",
            "Destinations generated"
        );

        Ok(destinations)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
