use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Access modifier of the target method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Public,
    Private,
    Protected,
    /// Package-private: no modifier keyword at all.
    #[default]
    Package,
}

impl Visibility {
    /// The modifier as written in Java source (empty for package-private).
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Package => "",
        }
    }

    /// The name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Visibility::Package => "package",
            other => other.keyword(),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("visibility should be one of [package, public, private, protected] (found '{0}')")]
pub struct ParseVisibilityError(pub String);

impl FromStr for Visibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "protected" => Ok(Visibility::Protected),
            "package" | "" => Ok(Visibility::Package),
            other => Err(ParseVisibilityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_has_no_keyword() {
        assert_eq!(Visibility::Package.keyword(), "");
        assert_eq!(Visibility::Package.to_string(), "package");
        assert_eq!(Visibility::default(), Visibility::Package);
    }

    #[test]
    fn test_parse() {
        assert_eq!("public".parse::<Visibility>(), Ok(Visibility::Public));
        assert_eq!("protected".parse::<Visibility>(), Ok(Visibility::Protected));
        assert_eq!("".parse::<Visibility>(), Ok(Visibility::Package));
        assert!("PUBLIC".parse::<Visibility>().is_err());
        assert!("internal".parse::<Visibility>().is_err());
    }
}
