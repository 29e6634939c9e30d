// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the record types.

/// `Display` for a fieldless enum, one string literal per variant.
///
/// ```ignore
/// crate::simple_display! {
///     Kind {
///         Complete => "complete",
///         Failed => "failed",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident => $text:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let text = match self {
                    $( Self::$variant => $text, )+
                };
                f.write_str(text)
            }
        }
    };
}

/// Test-only builder for a plain record struct.
///
/// Fields in `into` get `impl Into<T>` setters and have their default
/// converted with `.into()`; fields in `set` take `T` as-is. Every field of
/// the target must be listed. Expands to nothing outside tests unless the
/// `test-support` feature is on.
///
/// ```ignore
/// crate::builder! {
///     pub struct RecordBuilder => Record {
///         into { name: String = "job-1" }
///         set { retries: u32 = 0 }
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            into { $( $into:ident : $into_ty:ty = $into_default:expr ),* $(,)? }
            set { $( $set:ident : $set_ty:ty = $set_default:expr ),* $(,)? }
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            record: $target,
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                let record = $target {
                    $( $into: $into_default.into(), )*
                    $( $set: $set_default, )*
                };
                Self { record }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $(
                pub fn $into(mut self, v: impl Into<$into_ty>) -> Self {
                    self.record.$into = v.into();
                    self
                }
            )*
            $(
                pub fn $set(mut self, v: $set_ty) -> Self {
                    self.record.$set = v;
                    self
                }
            )*

            pub fn build(self) -> $target {
                self.record
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}
