//! Message templates.

use std::fmt::{self, Write};

use crate::level::Level;

/// One entry in the message catalogue: a stable code, a level, and text with
/// numbered `{0}`, `{1}`, ... placeholders for arguments.
///
/// The catalogue lives in [`crate::messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticMessage {
    code: u32,
    level: Level,
    template: &'static str,
}

impl DiagnosticMessage {
    pub const fn new(code: u32, level: Level, template: &'static str) -> Self {
        DiagnosticMessage {
            code,
            level,
            template,
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The message text with each `{n}` replaced by `args[n]`.
    ///
    /// Placeholders with no matching argument are left as they are.
    pub fn format(&self, args: &[&dyn fmt::Display]) -> String {
        let mut text = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            text.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let argument = after.find('}').and_then(|close| {
                let index = after[..close].parse::<usize>().ok()?;
                Some((args.get(index)?, close))
            });

            match argument {
                Some((arg, close)) => {
                    // Writing to a `String` can't fail.
                    let _ = write!(text, "{arg}");
                    rest = &after[close + 1..];
                }
                None => {
                    text.push('{');
                    rest = after;
                }
            }
        }

        text.push_str(rest);
        text
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.template)
    }
}
