//! Asynchronous command callbacks.
//!
//! A callback is any async function (or closure returning a future) taking
//! exactly one payload argument:
//!
//! ```rust,ignore
//! use discommands_core::{Interaction, ReplyTarget, Thread};
//!
//! // No return value
//! async fn ping(interaction: Interaction) {
//!     println!("invoked by {}", interaction.user.name);
//! }
//!
//! // Fallible - the error is surfaced as `CommandError::Callback`
//! async fn pin(target: ReplyTarget) -> anyhow::Result<()> {
//!     println!("pinning {}", target.id());
//!     Ok(())
//! }
//! ```
//!
//! Synchronous functions, functions of the wrong arity and functions taking
//! the wrong payload type do not implement [`Callback`] and are rejected at
//! compile time.

use std::sync::Arc;

use futures::future::BoxFuture;

/// Boxed error returned by fallible callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// CallbackOutput - Normalise callback return values
// ============================================================================

/// A trait for types that can be returned from callbacks.
pub trait CallbackOutput: Send + 'static {
    /// Converts the value into the callback's outcome.
    fn into_result(self) -> Result<(), BoxError>;
}

/// Implementation for `()` - always succeeds.
impl CallbackOutput for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Implementation for `Result<(), E>` - the error is boxed.
impl<E> CallbackOutput for Result<(), E>
where
    E: Into<BoxError> + Send + 'static,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

// ============================================================================
// Callback Trait
// ============================================================================

/// An asynchronous single-argument function receiving payload `P`.
///
/// Automatically implemented for every `Fn(P) -> impl Future` whose output
/// implements [`CallbackOutput`].
pub trait Callback<P>: Send + Sync + 'static {
    /// Invokes the callback with `payload`.
    fn invoke(&self, payload: P) -> BoxFuture<'static, Result<(), BoxError>>;
}

impl<P, F, Fut, R> Callback<P> for F
where
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: CallbackOutput,
{
    fn invoke(&self, payload: P) -> BoxFuture<'static, Result<(), BoxError>> {
        let fut = self(payload);
        Box::pin(async move { fut.await.into_result() })
    }
}

/// A type-erased callback that can be stored in a command object.
pub type BoxedCallback<P> = Arc<dyn Callback<P>>;

/// Convert a callback into a boxed callback.
pub fn into_callback<P, F>(f: F) -> BoxedCallback<P>
where
    F: Callback<P>,
{
    Arc::new(f)
}

// ============================================================================
// Callback names
// ============================================================================

/// Returns the identifier of the function type `F`.
///
/// For a named function item such as `async fn ping(..)` this is `"ping"`.
/// Closures, function pointers and other anonymous callables have no usable
/// identifier and yield `None`.
pub fn callback_name<F>() -> Option<&'static str> {
    let full = std::any::type_name::<F>();
    let path = full.split('<').next().unwrap_or(full);
    let name = path.rsplit("::").next().unwrap_or(path);

    let is_identifier = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    async fn status(_payload: u32) {}

    async fn failing(_payload: u32) -> Result<(), Boom> {
        Err(Boom)
    }

    #[test]
    fn test_unit_callback_succeeds() {
        let cb = into_callback(status);
        assert!(tokio_test::block_on(cb.invoke(1)).is_ok());
    }

    #[test]
    fn test_result_callback_error_is_boxed() {
        let cb = into_callback(failing);
        let err = tokio_test::block_on(cb.invoke(1)).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_closure_callback() {
        let cb = into_callback(|n: u32| async move {
            if n == 0 {
                Err::<(), BoxError>("zero".into())
            } else {
                Ok(())
            }
        });
        assert!(tokio_test::block_on(cb.invoke(1)).is_ok());
        assert!(tokio_test::block_on(cb.invoke(0)).is_err());
    }

    fn name_of<F>(_f: &F) -> Option<&'static str> {
        callback_name::<F>()
    }

    #[test]
    fn test_callback_name_of_function_item() {
        assert_eq!(name_of(&status), Some("status"));
        assert_eq!(name_of(&failing), Some("failing"));
    }

    #[test]
    fn test_callback_name_of_closure_is_none() {
        let closure = |_: u32| async {};
        assert_eq!(name_of(&closure), None);
        assert_eq!(callback_name::<fn(u32)>(), None);
    }
}
