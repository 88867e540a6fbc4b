use std::sync::Arc;

use wayfarer_core::domain::{common::services::Service, guide::ports::GenerativeModel};

use crate::args::Args;

/// Shared handler state, cheap to clone per request. Generic over the model
/// client so tests can run the full router against a stub.
pub struct AppState<M>
where
    M: GenerativeModel,
{
    pub args: Arc<Args>,
    pub service: Arc<Service<M>>,
}

impl<M> AppState<M>
where
    M: GenerativeModel,
{
    pub fn new(args: Arc<Args>, service: Service<M>) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}

impl<M> Clone for AppState<M>
where
    M: GenerativeModel,
{
    fn clone(&self) -> Self {
        Self {
            args: self.args.clone(),
            service: self.service.clone(),
        }
    }
}
