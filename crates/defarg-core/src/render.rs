use crate::argument::ArgumentSpec;

const SEPARATOR: &str = ", ";
const CLOSING: &str = ");\n}\n\n";

/// Renders single overloads into buffers reused for the whole generation pass.
#[derive(Debug)]
pub(crate) struct MethodBodyRenderer<'a> {
    head: &'a str,
    call_prefix: &'a str,
    text: String,
    call: String,
}

impl<'a> MethodBodyRenderer<'a> {
    pub(crate) fn new(head: &'a str, call_prefix: &'a str) -> Self {
        Self {
            head,
            call_prefix,
            text: String::new(),
            call: String::new(),
        }
    }

    /// Render one overload. Each item pairs an argument with whether it is
    /// declared as a parameter (`true`) or replaced by its default literal.
    ///
    /// The returned text is only valid until the next call.
    pub(crate) fn render<'b, I>(&mut self, arguments: I) -> &str
    where
        I: IntoIterator<Item = (&'b ArgumentSpec, bool)>,
    {
        self.text.clear();
        self.text.push_str(self.head);
        self.call.clear();
        self.call.push_str(self.call_prefix);

        let mut first_param = true;
        let mut first_value = true;
        for (arg, declared) in arguments {
            if !first_value {
                self.call.push_str(SEPARATOR);
            }
            first_value = false;

            match arg.default_literal() {
                Some(literal) if !declared => self.call.push_str(literal),
                _ => {
                    if !first_param {
                        self.text.push_str(SEPARATOR);
                    }
                    first_param = false;
                    self.text.push_str(arg.ty());
                    self.text.push(' ');
                    self.text.push_str(arg.name());
                    self.call.push_str(arg.name());
                }
            }
        }

        self.text.push_str(&self.call);
        self.text.push_str(CLOSING);
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_declared() {
        let a = ArgumentSpec::new("int", "a", None);
        let b = ArgumentSpec::new("String", "b", Some("\"x\""));
        let mut renderer = MethodBodyRenderer::new("void foo(", "){\n\tfoo(");

        let text = renderer.render([(&a, true), (&b, true)]);
        assert_eq!(text, "void foo(int a, String b){\n\tfoo(a, b);\n}\n\n");
    }

    #[test]
    fn test_render_substituted() {
        let a = ArgumentSpec::new("int", "a", None);
        let b = ArgumentSpec::new("String", "b", Some("\"x\""));
        let mut renderer = MethodBodyRenderer::new("void foo(", "){\n\tfoo(");

        let text = renderer.render([(&a, true), (&b, false)]);
        assert_eq!(text, "void foo(int a){\n\tfoo(a, \"x\");\n}\n\n");
    }

    #[test]
    fn test_render_no_declared_parameters() {
        let a = ArgumentSpec::new("int", "a", Some("1"));
        let b = ArgumentSpec::new("int", "b", Some("2"));
        let mut renderer = MethodBodyRenderer::new("int sum(", "){\n\treturn sum(");

        let text = renderer.render([(&a, false), (&b, false)]);
        assert_eq!(text, "int sum(){\n\treturn sum(1, 2);\n}\n\n");
    }

    #[test]
    fn test_required_argument_is_always_declared() {
        let a = ArgumentSpec::new("int", "a", None);
        let mut renderer = MethodBodyRenderer::new("void f(", "){\n\tf(");

        assert_eq!(renderer.render([(&a, false)]), "void f(int a){\n\tf(a);\n}\n\n");
    }

    #[test]
    fn test_buffers_are_reset_between_renders() {
        let a = ArgumentSpec::new("long", "n", Some("0L"));
        let mut renderer = MethodBodyRenderer::new("void f(", "){\n\tf(");

        let first = renderer.render([(&a, true)]).to_string();
        let second = renderer.render([(&a, false)]).to_string();
        assert_eq!(first, "void f(long n){\n\tf(n);\n}\n\n");
        assert_eq!(second, "void f(){\n\tf(0L);\n}\n\n");
    }
}
