// Error conversion helpers and wrapping macro for Snafu-based errors
use crate::error::Error;

/// Convert different error types into our unified Error type.
pub trait IntoVcloudError {
    fn into_error(self) -> Error;
}

impl IntoVcloudError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoVcloudError for reqwest::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl IntoVcloudError for serde_json::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Macro to wrap a Result-producing expression into a Snafu variant with `source: Box<Error>`.
/// Example:
/// wrap_err!(api.get(id).await, GetObjectStorageFailed {})?
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error =
                $crate::object_storage::utils::error::IntoVcloudError::into_error(e);
            $crate::error::Error::$variant { $($field: $value,)* source: Box::new(src) }
        })
    }};
}
