//! Contract review portal core logic
//!
//! This crate holds everything the front-ends share:
//! - the API client, talking to a remote review API or resolving against
//!   the built-in sample dataset after an artificial delay
//! - the auth context gating the pages
//! - filtering, selection, bulk updates, summary counts and exports
//! - view models for the login, dashboard and contract review pages
//!
//! Nothing here renders; a front-end reads the page state and the component
//! view models and draws them however it likes.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod mock_data;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod selection;
pub mod summary;

pub use api::{ApiClient, HttpBackend, MockBackend, MockDelays};
pub use auth::{AuthContext, Credentials, LOGIN_FAILED_MESSAGE};
pub use config::ApiConfig;
pub use error::{ReviewError, Result};
pub use export::{ExportBlob, ExportFile};
pub use filter::StatusFilter;
pub use mock_data::MockDataset;
pub use notify::{Toast, ToastVariant, Toasts};
pub use pages::{DashboardPage, LoginPage, ReviewLoad, ReviewPage};
pub use routes::{Resolved, Route};
pub use selection::Selection;
pub use summary::DashboardStats;

pub use review_types as types;
