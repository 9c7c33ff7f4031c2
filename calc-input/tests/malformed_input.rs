//! Tests for malformed keystroke scripts
//!
//! Tests error handling for various invalid inputs.

use calc_input::{parse_script, InputError};

// ============================================================================
// Unknown Words
// ============================================================================

#[test]
fn test_unknown_word() {
    let result = parse_script("FF XORR 0F");
    assert_eq!(result, Err(InputError::UnknownWord("XORR".to_string())));
}

#[test]
fn test_prefixed_literal_rejected() {
    assert!(parse_script("0x1F").is_err());
}

#[test]
fn test_empty_and_comment_only() {
    assert_eq!(parse_script(""), Ok(vec![]));
    assert_eq!(parse_script("  # nothing here\n\n"), Ok(vec![]));
}

// ============================================================================
// Unexpected Characters
// ============================================================================

#[test]
fn test_unexpected_character_position() {
    let result = parse_script("1 + 2\n  3 & 4");
    if let Err(InputError::UnexpectedCharacter { line, column, text }) = result {
        assert_eq!(line, 2);
        assert_eq!(column, 5);
        assert_eq!(text, "&");
    } else {
        panic!("Expected UnexpectedCharacter error");
    }
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_unknown_command() {
    assert_eq!(
        parse_script(":radix 16"),
        Err(InputError::InvalidCommand("radix".to_string()))
    );
}

#[test]
fn test_command_missing_argument() {
    assert_eq!(
        parse_script("1 :bits"),
        Err(InputError::MissingArgument("bits".to_string()))
    );
    assert_eq!(
        parse_script(":base +"),
        Err(InputError::MissingArgument("base".to_string()))
    );
}

#[test]
fn test_command_invalid_argument() {
    for source in [":bits 7", ":bits many", ":base sixteen", ":mode science", ":toggle -1"] {
        assert!(
            matches!(parse_script(source), Err(InputError::InvalidArgument { .. })
                | Err(InputError::MissingArgument(_))),
            "{source} should be rejected"
        );
    }
}
