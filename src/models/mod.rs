pub mod itinerary;
pub mod travel;
