//! Core types: employee records, calendar helpers and error types.

pub mod employee;
pub mod error;
pub mod time;

pub use employee::{EducationLevel, EmployeeRecord, EmploymentStatus, Sex};
pub use error::{ReferenceDataError, Result, SamplerError, StorageError, WorkforceError};
