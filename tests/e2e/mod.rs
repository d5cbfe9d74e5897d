// End-to-end integration tests for Voteboard Backend API
//
// These tests use a shared testcontainers PostgreSQL instance with a database
// pool for test isolation. Each test leases its own database from the pool;
// the database schema is dropped and rebuilt from the migrations before every
// lease, so a test always starts against empty tables.
//
// Architecture:
// - One shared PostgreSQL container for the entire test suite
// - Database pool creates/manages isolated databases (<base>_test_<uuid>)
// - Each test builds the app router around its leased database pool
// - Leased databases return to the pool on drop, even when a test panics
//
// Tests are marked #[serial]: fixtures assume one test owns the database at
// a time, and isolation comes from the schema reset rather than rollback.

mod test_auth;
mod test_fixtures;
mod test_health;
