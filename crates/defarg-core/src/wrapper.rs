//! The method descriptor overloads are generated from.

use crate::argument::ArgumentSpec;
use crate::engine::CombinationEngine;
use crate::error::{OverloadError, Result};
use crate::ident::validate_identifier;
use crate::signature::{call_prefix, SignatureBuilder, VOID};
use crate::sink::{FileSink, OverloadSink, StringSink, WriterSink};
use crate::types::TypeLabel;
use crate::visibility::Visibility;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Ceiling on defaulted arguments per method. Reaching it is rejected, so at
/// most 21 are accepted.
pub const MAX_DEFAULTED_ARGUMENTS: usize = 22;

/// A target method plus the ordered arguments its overloads forward to.
#[derive(Debug, Clone)]
pub struct MethodWrapper {
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    return_type: SmolStr,
    name: SmolStr,
    call_prefix: String,
    arguments: IndexMap<SmolStr, ArgumentSpec, FxBuildHasher>,
    defaulted: usize,
}

impl MethodWrapper {
    /// Describe a non-static, non-final method.
    pub fn new(visibility: Visibility, return_type: &str, name: &str) -> Result<Self> {
        MethodWrapperBuilder::new()
            .visibility(visibility)
            .return_type(return_type)
            .name(name)
            .build()
    }

    pub fn builder() -> MethodWrapperBuilder {
        MethodWrapperBuilder::new()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in insertion order.
    pub fn arguments(&self) -> impl ExactSizeIterator<Item = &ArgumentSpec> + '_ {
        self.arguments.values()
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.get(name)
    }

    pub fn defaulted_count(&self) -> usize {
        self.defaulted
    }

    /// Number of overloads [`generate`](Self::generate) will emit.
    pub fn overload_count(&self) -> u64 {
        if self.arguments.is_empty() {
            0
        } else {
            1u64 << self.defaulted
        }
    }

    /// Append an argument; `default` makes it omittable.
    ///
    /// Nothing is changed when an error is returned.
    pub fn add_argument(
        &mut self,
        ty: impl TypeLabel,
        name: &str,
        default: Option<&str>,
    ) -> Result<&mut Self> {
        let name = validate_identifier(name)?;
        let ty = ty.type_label();
        let ty = ty.trim();
        if ty.is_empty() {
            return Err(OverloadError::MissingField { field: "argument type" });
        }
        if self.arguments.contains_key(name) {
            return Err(OverloadError::DuplicateIdentifier {
                identifier: name.to_string(),
            });
        }
        if default.is_some() && self.defaulted + 1 >= MAX_DEFAULTED_ARGUMENTS {
            return Err(OverloadError::TooManyDefaults {
                limit: MAX_DEFAULTED_ARGUMENTS,
            });
        }

        let arg = ArgumentSpec::new(ty, name, default);
        if arg.is_defaulted() {
            self.defaulted += 1;
        }
        debug!(
            method = %self.name,
            argument = name,
            ty,
            default = ?arg.default_literal(),
            "added argument"
        );
        self.arguments.insert(SmolStr::new(name), arg);
        Ok(self)
    }

    /// Append an argument every overload declares.
    pub fn required(&mut self, ty: impl TypeLabel, name: &str) -> Result<&mut Self> {
        self.add_argument(ty, name, None)
    }

    /// Append an argument with a default literal.
    pub fn defaulted(&mut self, ty: impl TypeLabel, name: &str, default: &str) -> Result<&mut Self> {
        self.add_argument(ty, name, Some(default))
    }

    /// The declaration prefix shared by every overload.
    pub fn signature_head(&self) -> String {
        SignatureBuilder {
            visibility: self.visibility,
            is_static: self.is_static,
            is_final: self.is_final,
            return_type: &self.return_type,
            name: &self.name,
        }
        .head()
    }

    pub(crate) fn call_prefix(&self) -> &str {
        &self.call_prefix
    }

    /// Push every overload into `sink`, baseline first. Returns how many
    /// overloads were emitted.
    pub fn generate<S: OverloadSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        CombinationEngine::new(self)?.run(sink)
    }

    /// All overloads concatenated into one string.
    pub fn render_all(&self) -> Result<String> {
        let mut sink = StringSink::new();
        self.generate(&mut sink)?;
        Ok(sink.into_string())
    }

    /// Stream all overloads into `writer`, flush it, and hand it back.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W> {
        let mut sink = WriterSink::new(writer);
        self.generate(&mut sink)?;
        sink.finish()
    }

    /// Stream all overloads to standard output.
    pub fn write_stdout(&self) -> Result<()> {
        let stdout = self.write_to(io::stdout().lock())?;
        drop(stdout);
        Ok(())
    }

    /// Stream all overloads into a newly created file at `path`.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut sink = FileSink::create(path)?;
        self.generate(&mut sink)?;
        sink.finish()?;
        Ok(())
    }
}

/// Builder for [`MethodWrapper`]. A missing return type or name is reported by
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct MethodWrapperBuilder {
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    return_type: Option<String>,
    name: Option<String>,
}

impl MethodWrapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn set_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn set_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn return_type(mut self, return_type: impl TypeLabel) -> Self {
        self.return_type = Some(return_type.type_label().into_owned());
        self
    }

    /// Shorthand for a `void` return type.
    pub fn returns_void(self) -> Self {
        self.return_type(VOID)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<MethodWrapper> {
        // An absent name is validated like an empty one.
        let name = self.name.unwrap_or_default();
        let name = validate_identifier(&name)?;

        let return_type = self
            .return_type
            .as_deref()
            .map(str::trim)
            .filter(|ty| !ty.is_empty())
            .ok_or(OverloadError::MissingField { field: "return type" })?;

        debug!(
            visibility = %self.visibility,
            is_static = self.is_static,
            is_final = self.is_final,
            return_type,
            name,
            "created method wrapper"
        );

        Ok(MethodWrapper {
            visibility: self.visibility,
            is_static: self.is_static,
            is_final: self.is_final,
            call_prefix: call_prefix(return_type, name),
            return_type: SmolStr::new(return_type),
            name: SmolStr::new(name),
            arguments: IndexMap::default(),
            defaulted: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierFault;
    use crate::types::JavaType;

    fn foo() -> MethodWrapper {
        MethodWrapper::new(Visibility::Package, "void", "foo").unwrap()
    }

    fn names(wrapper: &MethodWrapper) -> Vec<&str> {
        wrapper.arguments().map(|a| a.name()).collect()
    }

    #[test]
    fn test_new_validates_name() {
        let err = MethodWrapper::new(Visibility::Public, "int", "class").unwrap_err();
        assert!(matches!(
            err,
            OverloadError::InvalidIdentifier {
                fault: IdentifierFault::ReservedWord,
                ..
            }
        ));
    }

    #[test]
    fn test_builder_requires_return_type() {
        let err = MethodWrapper::builder().name("foo").build().unwrap_err();
        assert!(matches!(err, OverloadError::MissingField { field: "return type" }));

        let err = MethodWrapper::builder().name("foo").return_type("  ").build().unwrap_err();
        assert!(matches!(err, OverloadError::MissingField { field: "return type" }));
    }

    #[test]
    fn test_builder_requires_name() {
        let err = MethodWrapper::builder().returns_void().build().unwrap_err();
        assert!(matches!(
            err,
            OverloadError::InvalidIdentifier {
                fault: IdentifierFault::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_builder_modifiers() {
        let wrapper = MethodWrapper::builder()
            .visibility(Visibility::Protected)
            .set_static(true)
            .set_final(true)
            .return_type(JavaType::array_of(JavaType::Int))
            .name(" values ")
            .build()
            .unwrap();

        assert_eq!(wrapper.name(), "values");
        assert_eq!(wrapper.return_type(), "int[]");
        assert_eq!(wrapper.signature_head(), "protected static final int[] values(");
        assert_eq!(wrapper.call_prefix(), "){\n\treturn values(");
    }

    #[test]
    fn test_add_argument_chains() {
        let mut wrapper = foo();
        wrapper
            .required("int", "a")
            .unwrap()
            .defaulted(JavaType::String, "b", "\"x\"")
            .unwrap();

        assert_eq!(names(&wrapper), ["a", "b"]);
        assert_eq!(wrapper.defaulted_count(), 1);
        assert_eq!(wrapper.argument("b").unwrap().ty(), "String");
        assert_eq!(wrapper.overload_count(), 2);
    }

    #[test]
    fn test_duplicate_leaves_state_unchanged() {
        let mut wrapper = foo();
        wrapper.defaulted("int", "a", "1").unwrap();

        let err = wrapper.defaulted("long", "a", "2").unwrap_err();
        assert!(matches!(err, OverloadError::DuplicateIdentifier { ref identifier } if identifier == "a"));
        assert_eq!(names(&wrapper), ["a"]);
        assert_eq!(wrapper.defaulted_count(), 1);
        assert_eq!(wrapper.argument("a").unwrap().ty(), "int");
    }

    #[test]
    fn test_duplicate_detected_after_trimming() {
        let mut wrapper = foo();
        wrapper.required("int", "a").unwrap();
        let err = wrapper.required("int", " a ").unwrap_err();
        assert!(matches!(err, OverloadError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn test_invalid_name_leaves_state_unchanged() {
        let mut wrapper = foo();
        wrapper.required("int", "a").unwrap();

        let err = wrapper.defaulted("int", "9lives", "9").unwrap_err();
        assert!(matches!(err, OverloadError::InvalidIdentifier { .. }));
        assert_eq!(names(&wrapper), ["a"]);
        assert_eq!(wrapper.defaulted_count(), 0);
    }

    #[test]
    fn test_blank_type_is_missing_field() {
        let mut wrapper = foo();
        let err = wrapper.required("", "a").unwrap_err();
        assert!(matches!(err, OverloadError::MissingField { field: "argument type" }));
        assert_eq!(wrapper.arguments().len(), 0);
    }

    #[test]
    fn test_defaulted_ceiling_boundary() {
        let mut wrapper = foo();
        for i in 0..MAX_DEFAULTED_ARGUMENTS - 1 {
            wrapper.defaulted("int", &format!("a{i}"), "0").unwrap();
        }
        assert_eq!(wrapper.defaulted_count(), 21);

        let err = wrapper.defaulted("int", "last", "0").unwrap_err();
        assert!(matches!(err, OverloadError::TooManyDefaults { limit: 22 }));
        assert_eq!(wrapper.defaulted_count(), 21);
        assert_eq!(wrapper.arguments().len(), 21);

        // Required arguments are not limited.
        wrapper.required("int", "last").unwrap();
        assert_eq!(wrapper.arguments().len(), 22);
    }

    #[test]
    fn test_write_to_matches_render_all() {
        let mut wrapper = foo();
        wrapper.required("int", "a").unwrap().defaulted("String", "b", "\"x\"").unwrap();

        let bytes = wrapper.write_to(Vec::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), wrapper.render_all().unwrap());
    }

    #[test]
    fn test_write_to_without_arguments_writes_nothing() {
        let err = foo().write_to(Vec::new()).unwrap_err();
        assert!(matches!(err, OverloadError::NoArguments { .. }));
    }

    #[test]
    fn test_overload_count_without_arguments() {
        assert_eq!(foo().overload_count(), 0);
    }
}
