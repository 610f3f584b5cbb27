//! Core domain concepts shared across all subdomains.
//!
//! - [`role::UserRole`] — who is asking (Advocate, Student, Public)
//! - [`error::DomainError`] — domain-level errors
//! - [`string::truncate`] — UTF-8 safe truncation for log previews

pub mod error;
pub mod role;
pub mod string;
