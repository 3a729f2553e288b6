use std::sync::Arc;

use crate::models::itinerary::{ItineraryRequest, ItineraryResponse};
use crate::prompts;
use crate::services::gemini_service::{ContentGenerator, GeminiError};

/// One-shot itinerary generation: a single model call returning the full
/// day-by-day plan. Unlike batch destination processing this runs on the
/// request path; only a generation failure is an error, a malformed model
/// response degrades to an empty day plan.
pub async fn generate_itinerary(
    generator: &Arc<dyn ContentGenerator>,
    request: &ItineraryRequest,
) -> Result<ItineraryResponse, GeminiError> {
    let prompt = format!(
        "{}\n\n{}",
        prompts::itinerary_system_prompt(),
        prompts::itinerary_user_prompt(
            &request.home_city,
            &request.destination_city,
            request.num_days,
            &request.interests,
        )
    );

    let text = generator.generate(&prompt).await?;
    Ok(parse_itinerary_response(&text, request))
}

/// Parse the model output into a day plan. The response often arrives
/// wrapped in markdown fences or prose, so the scan narrows to the
/// outermost brace window before deserializing. The request fields are
/// echoed back authoritatively regardless of what the model returned.
pub fn parse_itinerary_response(
    response_text: &str,
    request: &ItineraryRequest,
) -> ItineraryResponse {
    let parsed = extract_json_object(response_text)
        .and_then(|json| serde_json::from_str::<ItineraryResponse>(json).ok());

    match parsed {
        Some(mut response) => {
            response.home_city = request.home_city.clone();
            response.destination_city = request.destination_city.clone();
            response.num_days = request.num_days;
            response
        }
        None => {
            eprintln!(
                "Could not parse itinerary response for {}; returning empty plan",
                request.destination_city
            );
            ItineraryResponse::empty(request)
        }
    }
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
