
/// CRUD operations against the `countries` table
pub mod crud_tests;

/// Field validation rules
pub mod validation_tests;

/// DB-backed tests run only when a database is configured.
pub(crate) fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}
