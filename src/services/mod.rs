pub mod destination_service;
pub mod gemini_service;
pub mod itinerary_service;
pub mod task_service;
