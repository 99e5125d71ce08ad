//! ANSI styling and the role-to-color mapping.
//!
//! Display attributes for roles live here, on the presentation side; the
//! simulator never sees them.

use workflow_scenario::Role;

/// Styling switchboard. With `color` off every helper returns its input
/// unchanged, which also keeps rendering tests byte-stable.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn wrap(self, text: &str, prefix: &str, suffix: &str) -> String {
        if self.color {
            format!("{prefix}{text}{suffix}")
        } else {
            text.to_string()
        }
    }

    pub fn bold(self, text: &str) -> String {
        self.wrap(text, "\x1b[1m", "\x1b[22m")
    }

    pub fn dim(self, text: &str) -> String {
        self.wrap(text, "\x1b[2m", "\x1b[22m")
    }

    pub fn blue(self, text: &str) -> String {
        self.wrap(text, "\x1b[34m", "\x1b[39m")
    }

    pub fn magenta(self, text: &str) -> String {
        self.wrap(text, "\x1b[35m", "\x1b[39m")
    }

    pub fn green(self, text: &str) -> String {
        self.wrap(text, "\x1b[32m", "\x1b[39m")
    }

    pub fn yellow(self, text: &str) -> String {
        self.wrap(text, "\x1b[33m", "\x1b[39m")
    }

    pub fn role_paint(self, role: Role, text: &str) -> String {
        match role {
            Role::Product => self.blue(text),
            Role::Design => self.magenta(text),
            Role::Engineering => self.green(text),
        }
    }
}

#[must_use]
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Product => "Product",
        Role::Design => "Design",
        Role::Engineering => "Engineering",
    }
}
