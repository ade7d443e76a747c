// Employee store.
// Fetches through an injected source, commits into StoreState, and persists the login flag.

use crate::api::{Employee, EmployeeListResponse, EmployeeSource};
use crate::error::Result;
use crate::session::{self, PersistedState, SessionStorage};

use super::state::StoreState;

/// State container for the employee list and login flag.
///
/// Built once at startup with its collaborators. Mutation only happens through
/// the methods below; readers get shared borrows.
pub struct EmployeeStore<S, P> {
    source: S,
    storage: P,
    state: StoreState,
}

impl<S, P> EmployeeStore<S, P>
where
    S: EmployeeSource,
    P: SessionStorage,
{
    /// Create a store, restoring the login flag from session storage.
    pub fn new(source: S, storage: P) -> Self {
        let mut state = StoreState::new();

        match session::restore(&storage) {
            Ok(Some(persisted)) => state.token = persisted.token,
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "ignoring unreadable persisted session state"),
        }

        Self {
            source,
            storage,
            state,
        }
    }

    /// Fetch the employee list and commit it.
    /// On any failure the state is left unchanged.
    pub async fn fetch_employees(&mut self) -> Result<()> {
        let payload = self.source.fetch_employee_list().await?;
        tracing::info!(
            total_employee_count = payload.total_employee_count,
            received = payload.employees.len(),
            "fetched employee list"
        );
        self.apply_employee_list(payload)
    }

    /// Replace the employee list with a decoded payload.
    pub(crate) fn apply_employee_list(&mut self, payload: EmployeeListResponse) -> Result<()> {
        self.state.apply_employee_list(payload)
    }

    pub fn set_logged_in(&mut self) {
        self.set_token(true);
    }

    pub fn set_logged_out(&mut self) {
        self.set_token(false);
    }

    fn set_token(&mut self, token: bool) {
        self.state.token = token;

        if let Err(err) = session::persist(&self.storage, PersistedState { token }) {
            tracing::warn!(%err, token, "failed to persist login state");
        }
    }
}

impl<S, P> EmployeeStore<S, P> {
    /// Server-reported employee count.
    pub fn all_employee_count(&self) -> u64 {
        self.state.total_employee_count
    }

    /// All employees, most recently hired first.
    pub fn all_employees(&self) -> &[Employee] {
        self.state.employees()
    }

    pub fn employee_by_id(&self, id: i64) -> Option<&Employee> {
        self.state.employee_by_id(id)
    }

    /// Employees whose name contains `text` (case-sensitive).
    pub fn employees_by_name_substring(&self, text: &str) -> Vec<&Employee> {
        self.state.employees_by_name_substring(text)
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.token
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }
}
