use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::models::itinerary::ItineraryRequest;
use crate::models::travel::{DestinationRequest, TaskRecord};
use crate::services::destination_service;
use crate::services::gemini_service::ContentGenerator;
use crate::services::itinerary_service;
use crate::services::task_service::TaskStore;

const MAX_ITINERARY_DAYS: u32 = 14;

/*
    POST /travel/process-destinations
*/
pub async fn process_destinations(
    store: web::Data<TaskStore>,
    generator: web::Data<Arc<dyn ContentGenerator>>,
    input: web::Json<Vec<DestinationRequest>>,
) -> impl Responder {
    let requests = input.into_inner();

    // Validate before touching the store; nothing is scheduled on a bad batch.
    if requests.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "No destinations provided"}));
    }
    for request in &requests {
        if request.place.trim().is_empty() {
            return HttpResponse::BadRequest().json(json!({"error": "place must not be empty"}));
        }
        if request.days == 0 {
            return HttpResponse::BadRequest().json(json!({"error": "days must be positive"}));
        }
        if request.budget <= 0.0 {
            return HttpResponse::BadRequest().json(json!({"error": "budget must be positive"}));
        }
    }

    let record = TaskRecord::new(&requests);
    println!(
        "Task {} created for {} destinations",
        record.task_id,
        requests.len()
    );
    store.insert(record.clone()).await;

    destination_service::spawn_destination_jobs(
        store.get_ref().clone(),
        generator.get_ref().clone(),
        record.task_id.clone(),
        requests,
    );

    // Immediate ack; clients poll /travel/task-status/{task_id}.
    HttpResponse::Accepted().json(record)
}

/*
    GET /travel/task-status/{task_id}
*/
pub async fn task_status(path: web::Path<String>, store: web::Data<TaskStore>) -> impl Responder {
    let task_id = path.into_inner();

    match store.get(&task_id).await {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(json!({"error": "Task not found"})),
    }
}

/*
    POST /travel/itinerary
*/
pub async fn generate_itinerary(
    generator: web::Data<Arc<dyn ContentGenerator>>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();

    if request.home_city.trim().is_empty() || request.destination_city.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({"error": "home_city and destination_city must not be empty"}));
    }
    if request.num_days == 0 || request.num_days > MAX_ITINERARY_DAYS {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("num_days must be between 1 and {}", MAX_ITINERARY_DAYS)
        }));
    }

    match itinerary_service::generate_itinerary(generator.get_ref(), &request).await {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            eprintln!("Itinerary generation failed: {}", err);
            HttpResponse::InternalServerError().json(json!({"error": err.to_string()}))
        }
    }
}

/*
    GET /travel
*/
pub async fn travel_info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Travel planning API with background processing",
        "endpoints": {
            "process_destinations": "/travel/process-destinations",
            "task_status": "/travel/task-status/{task_id}",
            "itinerary": "/travel/itinerary",
            "test_gemini": "/travel/test-gemini"
        }
    }))
}

/*
    GET /travel/test-gemini (connectivity diagnostic)
*/
pub async fn test_gemini(generator: web::Data<Arc<dyn ContentGenerator>>) -> impl Responder {
    match generator.generate("Reply with exactly: OK").await {
        Ok(text) => HttpResponse::Ok().json(json!({"status": "ok", "response": text})),
        Err(err) => {
            eprintln!("Gemini connectivity check failed: {}", err);
            HttpResponse::ServiceUnavailable()
                .json(json!({"status": "error", "detail": err.to_string()}))
        }
    }
}
