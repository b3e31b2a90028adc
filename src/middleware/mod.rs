pub mod cors;

pub use cors::CorsHeaders;
