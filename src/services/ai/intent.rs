use serde::Deserialize;

use crate::models::{Preference, TravelIntent};
use crate::services::ai::{LlmProvider, Message, SamplingParams};
use crate::services::parser;

const SYSTEM_PROMPT: &str = r#"You are a travel query parser. Extract source, destination, and intent from user messages.

Return ONLY a JSON object with this exact structure:
{
  "source": "extracted source location or null",
  "destination": "extracted destination location or null",
  "intent": "cheapest|fastest|comfortable|unknown"
}

Intent detection rules:
- "cheapest": keywords like cheap, budget, affordable, low cost, save money
- "fastest": keywords like fast, quick, urgent, hurry, time
- "comfortable": keywords like comfort, comfortable, luxury, premium, relaxed
- "unknown": if no clear intent is detected

Examples:
- "I want to go from KPR College to Gandhipuram cheaply" -> {"source": "KPR College", "destination": "Gandhipuram", "intent": "cheapest"}
- "Fast route to airport from my location" -> {"source": null, "destination": "airport", "intent": "fastest"}
- "Comfortable ride to Brookefields Mall" -> {"source": null, "destination": "Brookefields Mall", "intent": "comfortable"}"#;

const EXTRACTION_PARAMS: SamplingParams = SamplingParams {
    temperature: 0.1,
    max_tokens: 200,
};

/// Raw reply shape expected from the model. `Preference`'s `#[serde(other)]`
/// arm coerces any out-of-set intent value to `unknown`.
#[derive(Debug, Deserialize)]
struct ExtractionReply {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    destination: Option<String>,
    #[serde(default)]
    intent: Preference,
}

/// Extract a structured intent from a free-text message.
///
/// Uses the remote provider when one is configured; any provider error or
/// unparsable reply falls back to the local parser. Never fails: the worst
/// case is an intent with both endpoints absent and preference `unknown`.
pub async fn extract_intent(llm: Option<&dyn LlmProvider>, message: &str) -> TravelIntent {
    if let Some(llm) = llm {
        match extract_remote(llm, message).await {
            Ok(intent) => return intent,
            Err(e) => {
                tracing::warn!(error = %e, "remote extraction failed, falling back to local parser");
            }
        }
    }
    parser::parse_message(message)
}

async fn extract_remote(llm: &dyn LlmProvider, message: &str) -> anyhow::Result<TravelIntent> {
    let messages = [Message {
        role: "user".to_string(),
        content: message.to_string(),
    }];

    let reply = llm.chat(SYSTEM_PROMPT, &messages, EXTRACTION_PARAMS).await?;

    parse_extraction_reply(&reply)
}

fn parse_extraction_reply(reply: &str) -> anyhow::Result<TravelIntent> {
    if let Ok(parsed) = serde_json::from_str::<ExtractionReply>(reply) {
        return Ok(into_intent(parsed));
    }

    // Strip markdown code fences
    let cleaned = reply
        .trim()
        .strip_prefix("```json")
        .or_else(|| reply.trim().strip_prefix("```"))
        .unwrap_or(reply.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(parsed) = serde_json::from_str::<ExtractionReply>(cleaned) {
        return Ok(into_intent(parsed));
    }

    // Try to find a JSON object inside surrounding prose
    if let Some(start) = cleaned.find('{') {
        if let Some(end) = cleaned.rfind('}') {
            let json_str = &cleaned[start..=end];
            if let Ok(parsed) = serde_json::from_str::<ExtractionReply>(json_str) {
                return Ok(into_intent(parsed));
            }
        }
    }

    anyhow::bail!("model reply is not valid intent JSON")
}

fn into_intent(reply: ExtractionReply) -> TravelIntent {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    TravelIntent::new(
        non_empty(reply.source),
        non_empty(reply.destination),
        reply.intent,
    )
}
