// Employee API endpoint functions.
// Typed methods for the employee web API and the source trait the store fetches through.

use std::future::Future;

use crate::error::Result;

use super::client::EmployeeApiClient;
use super::types::EmployeeListResponse;

/// Path of the employee list endpoint, relative to the base URL.
pub const EMPLOYEES_ENDPOINT: &str = "/employee/employees";

/// Anything the store can load the employee list from.
pub trait EmployeeSource {
    /// Fetch the full employee collection.
    fn fetch_employee_list(&self) -> impl Future<Output = Result<EmployeeListResponse>> + Send;
}

impl EmployeeApiClient {
    /// Get the full employee list. No pagination or filtering parameters are sent.
    pub async fn get_employees(&self) -> Result<EmployeeListResponse> {
        let response = self.get(EMPLOYEES_ENDPOINT).await?;
        let body = response.text().await?;
        tracing::trace!(%body, "employee list response");
        let list: EmployeeListResponse = serde_json::from_str(&body)?;
        Ok(list)
    }
}

impl EmployeeSource for EmployeeApiClient {
    fn fetch_employee_list(&self) -> impl Future<Output = Result<EmployeeListResponse>> + Send {
        self.get_employees()
    }
}
