use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::task_service::TaskStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(store: web::Data<TaskStore>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check Gemini credential presence (no live call on the liveness path)
    let gemini_result = check_gemini_config();
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    // Report task store occupancy
    let store_result = check_task_store(&store).await;
    health
        .services
        .insert("task_store".to_string(), store_result.clone());

    if gemini_result.status != "ok" || store_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_gemini_config() -> ServiceStatus {
    match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Gemini API key configured ({})", mask_key(&key))),
        },
        _ => ServiceStatus {
            status: "error".to_string(),
            details: Some("GEMINI_API_KEY not configured".to_string()),
        },
    }
}

// Counts chars rather than bytes so a multi-byte key cannot split a
// character boundary.
fn mask_key(key: &str) -> String {
    let char_count = key.chars().count();
    if char_count > 8 {
        let head: String = key.chars().take(4).collect();
        let tail: String = key.chars().skip(char_count - 4).collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

async fn check_task_store(store: &web::Data<TaskStore>) -> ServiceStatus {
    // Tasks are never evicted, so this count only grows.
    let count = store.len().await;

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!("{} tasks in memory", count)),
    }
}
