use serde::{Deserialize, Serialize};

fn default_num_days() -> u32 {
    4
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    pub home_city: String,
    pub destination_city: String,
    #[serde(default = "default_num_days")]
    pub num_days: u32,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryPlace {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryEntity {
    pub name: String,
    pub speciality: String,
    pub places_to_visit: Vec<ItineraryPlace>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDay {
    pub day: u32,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_info: Option<String>,
    pub entities: Vec<ItineraryEntity>,
}

/// The request fields are echoed back authoritatively; only `days` and
/// `overall_tips` come from the model, so they default when the model
/// response omits them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryResponse {
    #[serde(default)]
    pub home_city: String,
    #[serde(default)]
    pub destination_city: String,
    #[serde(default)]
    pub num_days: u32,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
    #[serde(default)]
    pub overall_tips: Vec<String>,
}

impl ItineraryResponse {
    /// Minimal well-formed response used when the model output cannot be
    /// parsed into a day plan.
    pub fn empty(request: &ItineraryRequest) -> Self {
        Self {
            home_city: request.home_city.clone(),
            destination_city: request.destination_city.clone(),
            num_days: request.num_days,
            days: Vec::new(),
            overall_tips: Vec::new(),
        }
    }
}
