/// A generic boxed error type.
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result alias returning `AnyError`.
///
/// Used across the engine boundary, where the concrete error type belongs
/// to the external engine implementation.
pub type AnyResult<T> = std::result::Result<T, AnyError>;
