pub mod health;
pub mod travel;
