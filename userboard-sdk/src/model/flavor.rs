use std::fmt::{Display, Formatter};

use yew::AttrValue;

/// flavor the page mounts when none is given in the url
pub const DEFAULT_FLAVOR: &str = "go";

/// Tailwind class names for one backend flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub button: &'static str,
}

pub const DEFAULT_THEME: Theme = Theme {
    background: "bg-gray-800",
    button: "bg-gray-700 hover:bg-gray-600",
};

const GO_THEME: Theme = Theme {
    background: "bg-gray-800",
    button: "bg-gray-700 hover:bg-gray-600",
};

/// Names the backend implementation behind `/api/{flavor}`. Free-form; only
/// the theme lookup knows specific values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor(AttrValue);

impl Flavor {
    pub fn new(name: impl Into<AttrValue>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn theme(&self) -> Theme {
        match self.as_str() {
            "go" => GO_THEME,
            _ => DEFAULT_THEME,
        }
    }

    pub fn logo(&self) -> String {
        format!("/{}logo.svg", self.0)
    }

    /// First character upper-cased: `go` -> `Go`.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AttrValue> for Flavor {
    fn from(value: AttrValue) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn go_flavor_derives_presentation() {
        let flavor = Flavor::new("go");
        assert_eq!(flavor.theme(), GO_THEME);
        assert_eq!(flavor.logo(), "/gologo.svg");
        assert_eq!(flavor.label(), "Go");
    }

    #[test]
    fn unknown_flavor_uses_default_theme() {
        let flavor = Flavor::new("cobol");
        assert_eq!(flavor.theme(), DEFAULT_THEME);
        assert_eq!(flavor.label(), "Cobol");
    }

    #[test]
    fn empty_flavor_has_empty_label() {
        let flavor = Flavor::new("");
        assert_eq!(flavor.label(), "");
        assert_eq!(flavor.theme(), DEFAULT_THEME);
    }
}
