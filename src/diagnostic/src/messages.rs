//! The message catalogue.
//!
//! Every diagnostic the front end can produce is one of these. Codes are
//! shown to users with a `GM` prefix and must not be reused.

use crate::level::Level;
use crate::message::DiagnosticMessage;

/// `{0}` is a token or a «category», as rendered by `token_to_string`.
pub const EXPECTED: DiagnosticMessage =
    DiagnosticMessage::new(1000, Level::Error, "{0} expected");

pub const UNEXPECTED_TOKEN: DiagnosticMessage =
    DiagnosticMessage::new(1001, Level::Error, "Unexpected token {0}");

pub const INVALID_CHARACTER: DiagnosticMessage =
    DiagnosticMessage::new(1002, Level::Error, "Invalid character");

pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
    DiagnosticMessage::new(1003, Level::Error, "Unterminated string literal");

pub const UNTERMINATED_TERMINAL_LITERAL: DiagnosticMessage =
    DiagnosticMessage::new(1004, Level::Error, "Unterminated terminal literal");

pub const UNTERMINATED_IDENTIFIER_LITERAL: DiagnosticMessage =
    DiagnosticMessage::new(
        1005,
        Level::Error,
        "Unterminated identifier literal",
    );

pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage =
    DiagnosticMessage::new(1006, Level::Error, "Invalid escape sequence");

pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage =
    DiagnosticMessage::new(1007, Level::Error, "Hexadecimal digit expected");

pub const UNICODE_ESCAPE_OUT_OF_RANGE: DiagnosticMessage =
    DiagnosticMessage::new(
        1008,
        Level::Error,
        "An extended Unicode escape value must be between 0x0 and 0x10FFFF \
         inclusive",
    );

pub const UNTERMINATED_COMMENT: DiagnosticMessage =
    DiagnosticMessage::new(1009, Level::Error, "Unterminated comment");
