//! Mapping from type descriptors to the plain labels used in generated code.
//!
//! The generator itself treats a parameter type as an opaque label. This
//! module lets callers describe types structurally instead of spelling the
//! label by hand.

use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;

/// Anything that can name a Java type in a declaration.
pub trait TypeLabel {
    fn type_label(&self) -> Cow<'_, str>;
}

impl TypeLabel for str {
    fn type_label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TypeLabel for String {
    fn type_label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TypeLabel for SmolStr {
    fn type_label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: TypeLabel + ?Sized> TypeLabel for &T {
    fn type_label(&self) -> Cow<'_, str> {
        (**self).type_label()
    }
}

/// A structural description of a Java type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    /// A reference type given by its simple name (`List`, `Socket`, ...).
    Named(SmolStr),
    /// `T[]`
    Array(Box<JavaType>),
    /// `Base<A, B>`
    Generic(SmolStr, Vec<JavaType>),
}

impl JavaType {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        JavaType::Named(name.into())
    }

    pub fn array_of(elem: JavaType) -> Self {
        JavaType::Array(Box::new(elem))
    }

    pub fn generic(base: impl Into<SmolStr>, args: Vec<JavaType>) -> Self {
        JavaType::Generic(base.into(), args)
    }

    /// Check if this is one of the eight primitive types.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            JavaType::Boolean
                | JavaType::Byte
                | JavaType::Char
                | JavaType::Short
                | JavaType::Int
                | JavaType::Long
                | JavaType::Float
                | JavaType::Double
        )
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Boolean => f.write_str("boolean"),
            JavaType::Byte => f.write_str("byte"),
            JavaType::Char => f.write_str("char"),
            JavaType::Short => f.write_str("short"),
            JavaType::Int => f.write_str("int"),
            JavaType::Long => f.write_str("long"),
            JavaType::Float => f.write_str("float"),
            JavaType::Double => f.write_str("double"),
            JavaType::String => f.write_str("String"),
            JavaType::Named(name) => f.write_str(name),
            JavaType::Array(elem) => write!(f, "{}[]", elem),
            JavaType::Generic(base, args) => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}

impl TypeLabel for JavaType {
    fn type_label(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_labels() {
        assert_eq!(JavaType::Int.type_label(), "int");
        assert_eq!(JavaType::Boolean.type_label(), "boolean");
        assert!(JavaType::Double.is_primitive());
        assert!(!JavaType::String.is_primitive());
    }

    #[test]
    fn test_composite_labels() {
        let map = JavaType::generic(
            "Map",
            vec![JavaType::String, JavaType::generic("List", vec![JavaType::named("Integer")])],
        );
        assert_eq!(map.to_string(), "Map<String, List<Integer>>");
        assert_eq!(JavaType::array_of(JavaType::array_of(JavaType::Byte)).to_string(), "byte[][]");
    }

    #[test]
    fn test_string_labels_borrow() {
        let label = "Socket".type_label();
        assert!(matches!(label, Cow::Borrowed("Socket")));
    }
}
