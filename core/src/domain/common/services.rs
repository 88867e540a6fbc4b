use crate::domain::guide::ports::GenerativeModel;

/// Aggregate service the API layer talks to. Generic over the generative
/// model client so tests can swap in a fake implementation.
#[derive(Debug, Clone)]
pub struct Service<M>
where
    M: GenerativeModel,
{
    pub(crate) generative_model: M,
}

impl<M> Service<M>
where
    M: GenerativeModel,
{
    pub fn new(generative_model: M) -> Self {
        Self { generative_model }
    }
}
