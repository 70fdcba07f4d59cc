//! Concrete `CountryRepository` implementations.

pub mod memory;
pub mod seaorm;

pub use memory::InMemoryCountryRepository;
pub use seaorm::SeaOrmCountryRepository;
