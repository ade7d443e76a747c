// Employee web API module.
// Provides the HTTP client and wire types for the employee list endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::EmployeeApiClient;
pub use endpoints::{EMPLOYEES_ENDPOINT, EmployeeSource};
pub use types::*;
