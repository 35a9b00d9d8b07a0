use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    NotFound,
    Forbidden,
    PaymentRequired,
    Unauthorized,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "No result for this search"),
            KernelError::Forbidden => write!(f, "You do not have access rights to the content"),
            KernelError::PaymentRequired => write!(
                f,
                "The requested content is not available until you make a payment"
            ),
            KernelError::Unauthorized => write!(f, "You must be signed in to continue"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
