// Store module.
// The employee state container and the state it owns.

pub mod employee_store;
pub mod state;

pub use employee_store::EmployeeStore;
pub use state::StoreState;
