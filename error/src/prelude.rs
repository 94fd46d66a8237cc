//! Re-exports and macros shared by the crates which define their own error enums.

pub use thiserror::Error;

/// Defines an error type from a kind enum, with the reason stored as an [`AnyError`].
///
/// [`AnyError`]: ../struct.AnyError.html
#[macro_export]
macro_rules! def_error_base_on_kind {
    ($error:ident, $error_kind:ty, $comment_error:expr) => {
        #[doc = $comment_error]
        #[derive(Debug, Clone)]
        pub struct $error {
            kind: $error_kind,
            inner: $crate::AnyError,
        }

        impl ::std::fmt::Display for $error {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                if self.inner.is::<$crate::SilentError>() {
                    write!(f, "{}", self.kind)
                } else if f.alternate() {
                    write!(f, "{}: {}", self.kind, self.inner)
                } else {
                    write!(f, "{}({})", self.kind, self.inner)
                }
            }
        }

        impl ::std::error::Error for $error {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                let inner: &(dyn ::std::error::Error + Send + Sync + 'static) = &***self.inner;
                Some(inner)
            }
        }

        impl From<$error_kind> for $error {
            fn from(kind: $error_kind) -> Self {
                kind.because($crate::SilentError)
            }
        }

        impl $error_kind {
            #[doc = "Creates a new error with this kind and the reason."]
            pub fn because<E>(self, reason: E) -> $error
            where
                E: ::std::error::Error + Send + Sync + 'static,
            {
                $error {
                    kind: self,
                    inner: reason.into(),
                }
            }

            #[doc = "Creates a new error with this kind and a plain message as the reason."]
            pub fn other<T>(self, reason: T) -> $error
            where
                T: ::std::fmt::Display + ::std::fmt::Debug + Send + Sync + 'static,
            {
                $error {
                    kind: self,
                    inner: $crate::OtherError::new(reason).into(),
                }
            }
        }

        impl $error {
            #[doc = "Returns the kind of the error."]
            pub fn kind(&self) -> $error_kind {
                self.kind
            }

            #[doc = "Looks for an error of type `T` along the chain of reasons."]
            pub fn downcast_ref<T>(&self) -> Option<&T>
            where
                T: ::std::error::Error + 'static,
            {
                self.inner.chain().find_map(|err| err.downcast_ref::<T>())
            }

            #[doc = "The lowest level reason of the error."]
            pub fn root_cause(&self) -> &(dyn ::std::error::Error + 'static) {
                self.inner.root_cause()
            }
        }
    };
}

/// Implements `From<$source> for $target` through the given kind.
#[macro_export]
macro_rules! impl_error_conversion_with_kind {
    ($source:ty, $kind:expr, $target:ty) => {
        impl ::std::convert::From<$source> for $target {
            fn from(error: $source) -> Self {
                $kind.because(error)
            }
        }
    };
}

/// Implements `From<$source> for $target` with a kind chosen by the source value.
#[macro_export]
macro_rules! impl_error_conversion_with_adaptor {
    ($source:ty, $target:ty, |$err:ident| $kind:expr) => {
        impl ::std::convert::From<$source> for $target {
            fn from($err: $source) -> Self {
                let kind = $kind;
                kind.because($err)
            }
        }
    };
}
