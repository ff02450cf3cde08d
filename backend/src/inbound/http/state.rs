//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::EmployeeService;
use crate::domain::ports::{EmployeeCommand, EmployeeQuery, EmployeeRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        employees: Arc<dyn EmployeeCommand>,
        employees_query: Arc<dyn EmployeeQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// Wire both ports to a single [`EmployeeService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employees::inbound::http::state::HttpState;
    /// use employees::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::default()));
    /// let _query = state.employees_query.clone();
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: EmployeeRepository + 'static,
    {
        let service = Arc::new(EmployeeService::new(repository));
        Self {
            employees: service.clone(),
            employees_query: service,
        }
    }
}
