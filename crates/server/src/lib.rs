pub mod routes;
pub mod startup;
pub mod countries;
pub mod errors;
pub mod openapi;

pub use startup::run;
