use smol_str::SmolStr;

/// Literal substituted for an empty default value.
pub const EMPTY_STRING_LITERAL: &str = "\"\"";

/// One parameter of the target method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentSpec {
    ty: SmolStr,
    name: SmolStr,
    default: Option<SmolStr>,
}

impl ArgumentSpec {
    /// Create an argument. An empty default literal becomes `""`.
    pub(crate) fn new(ty: impl Into<SmolStr>, name: impl Into<SmolStr>, default: Option<&str>) -> Self {
        let default = default.map(|literal| {
            if literal.is_empty() {
                SmolStr::new_static(EMPTY_STRING_LITERAL)
            } else {
                SmolStr::new(literal)
            }
        });
        Self {
            ty: ty.into(),
            name: name.into(),
            default,
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_literal(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether this argument may be omitted from an overload.
    pub fn is_defaulted(&self) -> bool {
        self.default.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_argument() {
        let arg = ArgumentSpec::new("int", "a", None);
        assert_eq!(arg.ty(), "int");
        assert_eq!(arg.name(), "a");
        assert!(!arg.is_defaulted());
        assert_eq!(arg.default_literal(), None);
    }

    #[test]
    fn test_empty_default_is_normalized() {
        let arg = ArgumentSpec::new("String", "s", Some(""));
        assert!(arg.is_defaulted());
        assert_eq!(arg.default_literal(), Some("\"\""));
    }

    #[test]
    fn test_default_kept_verbatim() {
        let arg = ArgumentSpec::new("String", "s", Some(" \"x\" "));
        assert_eq!(arg.default_literal(), Some(" \"x\" "));
    }
}
