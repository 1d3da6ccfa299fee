//! Inspection backend data models
//!
//! Request and response types for the auth endpoints and the resource
//! collections. Models are organized by resource type.

mod auth;
mod establishment;
mod report;
mod teacher;

pub use auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageBody, RegisterRequest,
    ResetPasswordRequest,
};
pub use establishment::Establishment;
pub use report::Report;
pub use teacher::Teacher;
