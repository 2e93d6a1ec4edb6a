pub mod htmx;
pub mod jwt;
