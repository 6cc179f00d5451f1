use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. This backs the panicking counterparts of checked methods, such as `get` for
    /// `try_get`, so both report misuse with the same message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
