mod health;
mod pages;
mod robots;

pub use health::health_routes;
pub use pages::page_routes;
pub use robots::robots_routes;
