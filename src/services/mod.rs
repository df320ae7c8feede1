pub mod champion_service;
pub mod lenient;
