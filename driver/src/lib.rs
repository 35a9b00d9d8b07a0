use crate::error::ConvertError;
use kernel::KernelError;

pub mod database;
mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .convert_error()
        .map_err(|report| report.attach_printable(format!("Failed to read {key}")))
}

/// Reads `key`, falling back to `default` when it is unset.
pub fn env_or<T>(key: &str, default: T) -> error_stack::Result<T, KernelError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    use error_stack::ResultExt;
    match dotenvy::var(key) {
        Ok(value) => value
            .parse::<T>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Invalid value for {key}: {value}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default),
        Err(error) => Err(error).convert_error(),
    }
}
