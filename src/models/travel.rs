use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    #[serde(rename = "processing")]
    Processing,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
}

impl ProcessingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingStatus::Completed | ProcessingStatus::Failed)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationRequest {
    pub place: String,
    pub days: u32,
    pub budget: f64,
    #[serde(default)]
    pub custom_instructions: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationResult {
    pub place: String,
    pub days: u32,
    pub budget: f64,
    pub custom_instructions: String,
    pub processing_status: ProcessingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DestinationResult {
    pub fn pending(request: &DestinationRequest) -> Self {
        Self {
            place: request.place.clone(),
            days: request.days,
            budget: request.budget,
            custom_instructions: request.custom_instructions.clone(),
            processing_status: ProcessingStatus::Processing,
            activities: None,
            restaurants: None,
            accommodation: None,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TaskRecord {
    pub task_id: String,
    pub status: ProcessingStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub destinations: Vec<DestinationResult>,
}

impl TaskRecord {
    /// Build a fresh record for a batch submission. Every destination starts
    /// out `processing`; the background jobs flip them to a terminal state.
    pub fn new(requests: &[DestinationRequest]) -> Self {
        Self {
            task_id: Uuid::new_v4().to_string(),
            status: ProcessingStatus::Processing,
            message: format!(
                "Started processing {} destinations in background",
                requests.len()
            ),
            created_at: Utc::now(),
            destinations: requests.iter().map(DestinationResult::pending).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(place: &str) -> DestinationRequest {
        DestinationRequest {
            place: place.to_string(),
            days: 3,
            budget: 25000.0,
            custom_instructions: "vegetarian food".to_string(),
        }
    }

    #[test]
    fn test_new_task_record_marks_all_destinations_processing() {
        let record = TaskRecord::new(&[request("Jaipur"), request("Udaipur")]);

        assert_eq!(record.status, ProcessingStatus::Processing);
        assert_eq!(record.destinations.len(), 2);
        for dest in &record.destinations {
            assert_eq!(dest.processing_status, ProcessingStatus::Processing);
            assert!(dest.activities.is_none());
            assert!(dest.error.is_none());
        }
    }

    #[test]
    fn test_pending_copies_request_fields() {
        let dest = DestinationResult::pending(&request("Goa"));

        assert_eq!(dest.place, "Goa");
        assert_eq!(dest.days, 3);
        assert_eq!(dest.budget, 25000.0);
        assert_eq!(dest.custom_instructions, "vegetarian food");
    }

    #[test]
    fn test_serialized_status_uses_lowercase_names() {
        let json = serde_json::to_string(&ProcessingStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_empty_payloads_are_omitted_from_json() {
        let dest = DestinationResult::pending(&request("Goa"));
        let value = serde_json::to_value(&dest).unwrap();

        assert!(value.get("activities").is_none());
        assert!(value.get("error").is_none());
        assert_eq!(value["processing_status"], "processing");
    }
}
