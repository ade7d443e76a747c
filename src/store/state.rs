// Store state and its mutations.
// Holds the employee list, the server-reported count, and the login flag.

use crate::api::{Employee, EmployeeListResponse};
use crate::error::Result;

/// Complete in-memory state of the employee store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// Count reported by the server, which may differ from `employees.len()`.
    pub total_employee_count: u64,
    /// Employees sorted by hire date, most recent first.
    employees: Vec<Employee>,
    /// Login flag.
    pub token: bool,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the count and the employee list from a fetched payload.
    ///
    /// Every record is decoded before anything is assigned, so a bad record
    /// leaves the state exactly as it was. The previous list is discarded,
    /// never merged.
    pub fn apply_employee_list(&mut self, payload: EmployeeListResponse) -> Result<()> {
        let mut employees = payload
            .employees
            .into_iter()
            .map(Employee::try_from)
            .collect::<Result<Vec<_>>>()?;

        // Stable: equal hire dates keep response order.
        employees.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));

        self.total_employee_count = payload.total_employee_count;
        self.employees = employees;
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// First employee with the given id.
    pub fn employee_by_id(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Employees whose name contains `text`. Case-sensitive.
    pub fn employees_by_name_substring(&self, text: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.name.contains(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RawEmployee;
    use crate::error::StoreError;

    fn raw(id: i64, name: &str, hire_date: &str) -> RawEmployee {
        RawEmployee {
            id,
            name: name.to_string(),
            image: format!("e{}.png", id),
            gender: "男性".to_string(),
            hire_date: hire_date.to_string(),
            mail_address: format!("e{}@example.com", id),
            zip_code: "222-2222".to_string(),
            address: "Osaka".to_string(),
            telephone: "06-0000-0000".to_string(),
            salary: 280_000,
            characteristics: String::new(),
            dependents_count: 0,
        }
    }

    fn payload(total: u64, employees: Vec<RawEmployee>) -> EmployeeListResponse {
        EmployeeListResponse {
            total_employee_count: total,
            employees,
        }
    }

    fn names(state: &StoreState) -> Vec<&str> {
        state.employees().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = StoreState::new();
        assert_eq!(state.total_employee_count, 0);
        assert!(state.employees().is_empty());
        assert!(!state.token);
    }

    #[test]
    fn test_apply_sorts_by_hire_date_descending() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(
                3,
                vec![
                    raw(1, "Ann", "2020-01-01"),
                    raw(2, "Bob", "2022-05-05"),
                    raw(3, "Cid", "2021-03-03"),
                ],
            ))
            .unwrap();

        assert_eq!(state.total_employee_count, 3);
        assert_eq!(names(&state), vec!["Bob", "Cid", "Ann"]);
    }

    #[test]
    fn test_equal_hire_dates_keep_response_order() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(
                3,
                vec![
                    raw(1, "First", "2021-04-01"),
                    raw(2, "Second", "2021-04-01"),
                    raw(3, "Newest", "2023-04-01"),
                ],
            ))
            .unwrap();

        assert_eq!(names(&state), vec!["Newest", "First", "Second"]);
    }

    #[test]
    fn test_apply_replaces_instead_of_merging() {
        let mut state = StoreState::new();
        let employees = vec![raw(1, "Ann", "2020-01-01"), raw(2, "Bob", "2022-05-05")];

        state.apply_employee_list(payload(2, employees.clone())).unwrap();
        state.apply_employee_list(payload(2, employees)).unwrap();
        assert_eq!(state.employees().len(), 2);

        state
            .apply_employee_list(payload(1, vec![raw(3, "Cid", "2019-01-01")]))
            .unwrap();
        assert_eq!(names(&state), vec!["Cid"]);
        assert_eq!(state.total_employee_count, 1);
    }

    #[test]
    fn test_count_is_taken_verbatim() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(40, vec![raw(1, "Ann", "2020-01-01")]))
            .unwrap();

        assert_eq!(state.total_employee_count, 40);
        assert_eq!(state.employees().len(), 1);
    }

    #[test]
    fn test_bad_record_leaves_state_untouched() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(1, vec![raw(1, "Ann", "2020-01-01")]))
            .unwrap();
        let before = state.clone();

        let err = state
            .apply_employee_list(payload(
                2,
                vec![raw(2, "Bob", "2022-05-05"), raw(3, "Cid", "someday")],
            ))
            .unwrap_err();

        assert!(matches!(err, StoreError::Decode { id: 3, .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_employee_by_id() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(
                2,
                vec![raw(1, "Ann", "2020-01-01"), raw(2, "Bob", "2022-05-05")],
            ))
            .unwrap();

        assert_eq!(state.employee_by_id(1).map(|e| e.name.as_str()), Some("Ann"));
        assert!(state.employee_by_id(999).is_none());
    }

    #[test]
    fn test_name_search_is_case_sensitive() {
        let mut state = StoreState::new();
        state
            .apply_employee_list(payload(
                3,
                vec![
                    raw(1, "Ann", "2020-01-01"),
                    raw(2, "Joanna", "2022-05-05"),
                    raw(3, "Bob", "2021-01-01"),
                ],
            ))
            .unwrap();

        let lower: Vec<_> = state
            .employees_by_name_substring("an")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(lower, vec!["Joanna"]);

        let upper: Vec<_> = state
            .employees_by_name_substring("An")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(upper, vec!["Ann"]);

        assert!(state.employees_by_name_substring("zz").is_empty());
        assert_eq!(state.employees_by_name_substring("").len(), 3);
    }
}
