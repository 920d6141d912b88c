pub mod country_routes;
pub mod system_routes;
