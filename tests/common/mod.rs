use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

use tripforge_api::routes;
use tripforge_api::services::gemini_service::{ContentGenerator, GeminiError};
use tripforge_api::services::task_service::TaskStore;

/// Canned generator: no network, no API key. Responds with a small valid
/// payload for whichever array the prompt asks for, optionally after a
/// delay, and fails any prompt containing `fail_on`.
pub struct StubGenerator {
    pub delay: Option<Duration>,
    pub fail_on: Option<String>,
}

impl StubGenerator {
    pub fn instant() -> Self {
        Self {
            delay: None,
            fail_on: None,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            fail_on: None,
        }
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            delay: None,
            fail_on: Some(marker.to_string()),
        }
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        if let Some(marker) = &self.fail_on {
            if prompt.contains(marker.as_str()) {
                return Err(GeminiError::ApiError("stubbed quota failure".to_string()));
            }
        }

        if prompt.contains("end-to-end itinerary") {
            return Ok(r#"{
                "days": [{
                    "day": 1,
                    "summary": "Stubbed day in the old town",
                    "entities": [{
                        "name": "Old Town",
                        "speciality": "Historic core of lanes and squares",
                        "places_to_visit": [
                            {"name": "Clock Tower", "description": "Landmark on the main square"}
                        ]
                    }]
                }],
                "overall_tips": ["Carry water and small change"]
            }"#
            .to_string());
        }

        let key = if prompt.contains("\"restaurants\"") {
            "restaurants"
        } else if prompt.contains("\"accommodation\"") {
            "accommodation"
        } else {
            "activities"
        };

        Ok(format!(
            "{{\"{}\": [\"Stubbed recommendation one\", \"Stubbed recommendation two\"]}}",
            key
        ))
    }
}

pub struct TestApp {
    pub store: TaskStore,
    pub generator: Arc<dyn ContentGenerator>,
}

impl TestApp {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            store: TaskStore::new(),
            generator,
        }
    }

    pub fn with_stub() -> Self {
        Self::new(Arc::new(StubGenerator::instant()))
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.generator.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/travel")
                    .route("", web::get().to(routes::travel::travel_info))
                    .route(
                        "/process-destinations",
                        web::post().to(routes::travel::process_destinations),
                    )
                    .route(
                        "/task-status/{task_id}",
                        web::get().to(routes::travel::task_status),
                    )
                    .route(
                        "/itinerary",
                        web::post().to(routes::travel::generate_itinerary),
                    )
                    .route("/test-gemini", web::get().to(routes::travel::test_gemini)),
            )
    }
}
