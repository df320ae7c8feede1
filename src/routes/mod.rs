pub mod champion_route;
pub mod index;
