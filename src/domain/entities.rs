//! Domain entities: employee data carried by each org chart node

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Yearly salary. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(f64);

impl Salary {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidSalary(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Data payload for org chart nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Display name, not required to be unique
    pub name: String,
    /// Position title
    pub title: Option<String>,
    /// None when no salary is on record
    pub salary: Option<Salary>,
}

impl Employee {
    /// Employee with a salary on record.
    ///
    /// Fails with [`DomainError::InvalidSalary`] for negative or non-finite amounts.
    pub fn new(name: impl Into<String>, title: impl Into<String>, salary: f64) -> DomainResult<Self> {
        Ok(Self {
            name: name.into(),
            title: Some(title.into()),
            salary: Some(Salary::new(salary)?),
        })
    }

    /// Employee without a salary on record.
    pub fn unsalaried(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: Some(title.into()),
            salary: None,
        }
    }

    /// Strictly greater than `threshold`. Unsalaried employees never qualify.
    pub fn earns_over(&self, threshold: f64) -> bool {
        self.salary.is_some_and(|s| s.amount() > threshold)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} ({})", self.name, title),
            None => write!(f, "{}", self.name),
        }
    }
}
