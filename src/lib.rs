// employee-store library.
// State container for the employee list served by the employee web API.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;

pub use api::{Employee, EmployeeApiClient, EmployeeListResponse, EmployeeSource, RawEmployee};
pub use config::Config;
pub use error::{Result, StoreError};
pub use session::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::{EmployeeStore, StoreState};
