//! Error macros for medrec

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MedrecError::invalid_value($context, $value))
    };
}

/// Macro for creating malformed artifact errors
#[macro_export]
macro_rules! bail_artifact {
    ($path:expr, $($reason:tt)+) => {
        return Err($crate::error::MedrecError::invalid_artifact(
            $path,
            format!($($reason)+),
        ))
    };
}
