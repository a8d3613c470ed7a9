pub mod adapter;
pub mod handlers;
pub mod router;
pub mod service;

pub use crate::domain::model::ProxyRequest;
pub use crate::domain::ports::{ConfigProvider, Upstream};
pub use crate::utils::error::Result;
