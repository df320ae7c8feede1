pub mod champion_struct;
pub mod routes_struct;
