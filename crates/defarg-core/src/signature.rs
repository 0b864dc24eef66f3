//! Fixed parts of every generated overload.

use crate::visibility::Visibility;

/// Return type that makes the forwarding call a bare statement.
pub const VOID: &str = "void";

/// Renders the declaration prefix shared by all overloads of one method.
#[derive(Debug, Clone, Copy)]
pub struct SignatureBuilder<'a> {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub return_type: &'a str,
    pub name: &'a str,
}

impl SignatureBuilder<'_> {
    /// `<visibility> [static] [final] <returnType> <name>(`
    ///
    /// Package visibility contributes no token, so there is no leading space.
    pub fn head(&self) -> String {
        let modifiers = [
            self.visibility.keyword(),
            if self.is_static { "static" } else { "" },
            if self.is_final { "final" } else { "" },
            self.return_type,
            self.name,
        ];

        let mut head = String::with_capacity(modifiers.iter().map(|m| m.len() + 1).sum::<usize>() + 1);
        for token in modifiers.iter().filter(|m| !m.is_empty()) {
            if !head.is_empty() {
                head.push(' ');
            }
            head.push_str(token);
        }
        head.push('(');
        head
    }
}

/// Opening of the forwarding call: closes the parameter list, opens the body
/// and starts the call to `name`.
pub fn call_prefix(return_type: &str, name: &str) -> String {
    if return_type == VOID {
        format!("){{\n\t{}(", name)
    } else {
        format!("){{\n\treturn {}(", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder<'a>(visibility: Visibility, return_type: &'a str, name: &'a str) -> SignatureBuilder<'a> {
        SignatureBuilder {
            visibility,
            is_static: false,
            is_final: false,
            return_type,
            name,
        }
    }

    #[test]
    fn test_package_head() {
        assert_eq!(builder(Visibility::Package, "void", "foo").head(), "void foo(");
    }

    #[test]
    fn test_all_modifiers() {
        let sig = SignatureBuilder {
            is_static: true,
            is_final: true,
            ..builder(Visibility::Public, "int", "sum")
        };
        assert_eq!(sig.head(), "public static final int sum(");
    }

    #[test]
    fn test_package_static() {
        let sig = SignatureBuilder {
            is_static: true,
            ..builder(Visibility::Package, "String", "name")
        };
        assert_eq!(sig.head(), "static String name(");
    }

    #[test]
    fn test_call_prefix() {
        assert_eq!(call_prefix("void", "foo"), "){\n\tfoo(");
        assert_eq!(call_prefix("int", "foo"), "){\n\treturn foo(");
        assert_eq!(call_prefix("Void", "foo"), "){\n\treturn foo(");
    }
}
