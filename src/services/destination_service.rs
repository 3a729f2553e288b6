use futures::try_join;
use regex::Regex;
use std::sync::Arc;

use crate::models::travel::DestinationRequest;
use crate::prompts;
use crate::services::gemini_service::ContentGenerator;
use crate::services::task_service::{DestinationOutcome, TaskStore};

const MIN_FALLBACK_LINE_LEN: usize = 10;

/// Extract the named JSON array from a model response. The model is asked
/// for a bare JSON object, but responses arrive wrapped in markdown fences
/// or prose often enough that a tolerant regex scan beats strict parsing.
pub fn parse_generated_list(response_text: &str, key: &str) -> Vec<String> {
    let cleaned = response_text.trim();

    let array_pattern = format!(r#"(?s)"{}"\s*:\s*\[(.*?)\]"#, regex::escape(key));
    if let Ok(array_re) = Regex::new(&array_pattern) {
        if let Some(captures) = array_re.captures(cleaned) {
            let array_content = &captures[1];
            let item_re = Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("item regex is valid");
            let items: Vec<String> = item_re
                .captures_iter(array_content)
                .map(|c| unescape_json_string(&c[1]))
                .collect();
            if !items.is_empty() {
                return items;
            }
        }
    }

    // No array found: fall back to line splitting, dropping short fragments.
    fallback_lines(cleaned)
}

// The capture is the raw content of a JSON string literal; re-quoting it
// lets serde handle every escape form (\n, \\, \/, \uXXXX), not just \".
fn unescape_json_string(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}

fn fallback_lines(cleaned: &str) -> Vec<String> {
    cleaned
        .lines()
        .map(|line| line.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|line| line.len() > MIN_FALLBACK_LINE_LEN)
        .collect()
}

/// Background job for a single destination. Issues the three generation
/// calls concurrently, then writes the outcome into the destination's slot.
/// All-or-nothing: one failed call fails the whole destination and partial
/// payloads are dropped. Errors never escape the job.
pub async fn process_destination(
    store: TaskStore,
    generator: Arc<dyn ContentGenerator>,
    task_id: String,
    index: usize,
    request: DestinationRequest,
) {
    let activities_prompt = prompts::activities_prompt(
        &request.place,
        request.days,
        request.budget,
        &request.custom_instructions,
    );
    let restaurants_prompt =
        prompts::restaurants_prompt(&request.place, request.budget, &request.custom_instructions);
    let accommodation_prompt = prompts::accommodation_prompt(
        &request.place,
        request.days,
        request.budget,
        &request.custom_instructions,
    );

    let outcome = match try_join!(
        generator.generate(&activities_prompt),
        generator.generate(&restaurants_prompt),
        generator.generate(&accommodation_prompt),
    ) {
        Ok((activities_text, restaurants_text, accommodation_text)) => {
            DestinationOutcome::Success {
                activities: parse_generated_list(&activities_text, "activities"),
                restaurants: parse_generated_list(&restaurants_text, "restaurants"),
                accommodation: parse_generated_list(&accommodation_text, "accommodation"),
            }
        }
        Err(err) => {
            eprintln!("Generation failed for {}: {}", request.place, err);
            DestinationOutcome::Failure(err.to_string())
        }
    };

    store.complete_destination(&task_id, index, outcome).await;
}

/// Launch one independent job per destination. Jobs do not coordinate and
/// there is no cancellation; each runs to a terminal status.
pub fn spawn_destination_jobs(
    store: TaskStore,
    generator: Arc<dyn ContentGenerator>,
    task_id: String,
    requests: Vec<DestinationRequest>,
) {
    for (index, request) in requests.into_iter().enumerate() {
        tokio::spawn(process_destination(
            store.clone(),
            generator.clone(),
            task_id.clone(),
            index,
            request,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_named_array() {
        let response = r#"{
  "activities": [
    "Visit Amber Fort and explore the ramparts",
    "Walk through Hawa Mahal at sunrise"
  ]
}"#;

        let items = parse_generated_list(response, "activities");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], "Visit Amber Fort and explore the ramparts");
    }

    #[test]
    fn test_parse_ignores_other_arrays() {
        let response = r#"{"restaurants": ["Try the thali at Spice Court"], "activities": ["Visit the City Palace museum"]}"#;

        let items = parse_generated_list(response, "restaurants");
        assert_eq!(items, vec!["Try the thali at Spice Court".to_string()]);
    }

    #[test]
    fn test_parse_handles_markdown_fenced_response() {
        let response = "```json\n{\"accommodation\": [\"Stay at Hotel Pearl Palace near Hathroi Fort\"]}\n```";

        let items = parse_generated_list(response, "accommodation");
        assert_eq!(
            items,
            vec!["Stay at Hotel Pearl Palace near Hathroi Fort".to_string()]
        );
    }

    #[test]
    fn test_parse_falls_back_to_lines_without_json() {
        let response = "Here are some ideas:\nVisit the Gateway of India at dawn\nok\nTake the ferry to Elephanta Caves";

        let items = parse_generated_list(response, "activities");
        assert_eq!(items.len(), 3);
        assert!(items.contains(&"Visit the Gateway of India at dawn".to_string()));
        // Short fragments are dropped.
        assert!(!items.contains(&"ok".to_string()));
    }

    #[test]
    fn test_parse_unescapes_quoted_text() {
        let response = r#"{"activities": ["See the \"Pink City\" walls"]}"#;

        let items = parse_generated_list(response, "activities");
        assert_eq!(items, vec!["See the \"Pink City\" walls".to_string()]);
    }

    #[test]
    fn test_parse_unescapes_all_json_escape_forms() {
        let response =
            r#"{"activities": ["Walk the C:\\ramparts", "Browse shops \/ stalls", "Dawn\nclimb", "Caf\u00e9 crawl in the old town"]}"#;

        let items = parse_generated_list(response, "activities");
        assert_eq!(items[0], "Walk the C:\\ramparts");
        assert_eq!(items[1], "Browse shops / stalls");
        assert_eq!(items[2], "Dawn\nclimb");
        assert_eq!(items[3], "Café crawl in the old town");
    }
}
