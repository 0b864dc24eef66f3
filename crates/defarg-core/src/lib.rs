//! Overload generation for emulating default arguments in Java.
//!
//! Java has no default parameter values. Given a method and its ordered
//! arguments, some of which carry a default literal, this crate generates one
//! overload for every subset of the defaulted arguments. Each overload declares
//! the remaining parameters and forwards to the full method with the default
//! literals filled in.
//!
//! # Example
//!
//! ```
//! use defarg_core::{MethodWrapper, Visibility};
//!
//! let mut wrapper = MethodWrapper::new(Visibility::Package, "void", "foo")?;
//! wrapper.required("int", "a")?.defaulted("String", "b", "\"x\"")?;
//!
//! assert_eq!(
//!     wrapper.render_all()?,
//!     "void foo(int a, String b){\n\tfoo(a, b);\n}\n\n\
//!      void foo(int a){\n\tfoo(a, \"x\");\n}\n\n"
//! );
//! # Ok::<(), defarg_core::OverloadError>(())
//! ```

mod argument;
mod engine;
mod error;
mod ident;
mod render;
mod signature;
mod sink;
mod types;
mod visibility;
mod wrapper;

pub use argument::{ArgumentSpec, EMPTY_STRING_LITERAL};
pub use engine::CombinationEngine;
pub use error::{IdentifierFault, OverloadError, Result};
pub use ident::{is_reserved, validate_identifier, JAVA_KEYWORDS};
pub use signature::{call_prefix, SignatureBuilder, VOID};
pub use sink::{FileSink, Limited, OverloadSink, StringSink, WriterSink};
pub use types::{JavaType, TypeLabel};
pub use visibility::{ParseVisibilityError, Visibility};
pub use wrapper::{MethodWrapper, MethodWrapperBuilder, MAX_DEFAULTED_ARGUMENTS};
