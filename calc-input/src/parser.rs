//! Keystroke script parser

use calc_spec::{Base, BitWidth, Input, InputKind, Mode, Operator, UnaryOp};
use logos::Logos;

use crate::error::{InputError, Result};
use crate::lexer::{position, Token};

/// Parse a keystroke script into inputs
///
/// Digits are not checked against a base here; the calculator ignores the
/// ones the active base rejects.
pub fn parse_script(source: &str) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    let mut lex = Token::lexer(source);

    while let Some(token) = lex.next() {
        let token = token.map_err(|()| {
            let (line, column) = position(source, lex.span().start);
            InputError::UnexpectedCharacter {
                line,
                column,
                text: lex.slice().to_string(),
            }
        })?;

        match token {
            Token::Word(word) => parse_word(&word, &mut inputs)?,
            Token::Command(command) => {
                let argument = match lex.next() {
                    Some(Ok(Token::Word(arg))) => arg,
                    _ => return Err(InputError::MissingArgument(command)),
                };
                inputs.push(parse_command(&command, &argument)?);
            }
            Token::Plus => inputs.push(Input::Operator(Operator::Add)),
            Token::Minus => inputs.push(Input::Operator(Operator::Sub)),
            Token::Star => inputs.push(Input::Operator(Operator::Mul)),
            Token::Slash => inputs.push(Input::Operator(Operator::Div)),
            Token::ShiftLeft => inputs.push(Input::Operator(Operator::Lsh)),
            Token::ShiftRight => inputs.push(Input::Operator(Operator::Rsh)),
            Token::Percent => inputs.push(Input::Unary(UnaryOp::Percent)),
            Token::PlusMinus => inputs.push(Input::Unary(UnaryOp::Negate)),
            Token::Tilde => inputs.push(Input::Unary(UnaryOp::Not)),
            Token::Equals => inputs.push(Input::Equals),
        }
    }

    Ok(inputs)
}

/// Parse a single word: action, operator keyword, or digit run
fn parse_word(word: &str, inputs: &mut Vec<Input>) -> Result<()> {
    if let Some(input) = parse_keyword(word) {
        inputs.push(input);
        return Ok(());
    }

    if !word.chars().all(is_digit_char) {
        return Err(InputError::UnknownWord(word.to_string()));
    }
    inputs.extend(word.chars().map(|c| Input::Digit(c.to_ascii_uppercase())));
    Ok(())
}

/// Action and operator keywords; these win over hex digit runs
pub fn parse_keyword(word: &str) -> Option<Input> {
    match word.to_ascii_uppercase().as_str() {
        "AC" | "CLEAR" => Some(Input::Clear),
        "DEL" => Some(Input::Delete),
        "=" => Some(Input::Equals),
        _ => Operator::from_token(word)
            .map(Input::Operator)
            .or_else(|| UnaryOp::from_token(word).map(Input::Unary)),
    }
}

fn is_digit_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '.'
}

/// Parse a selector command and its argument
pub fn parse_command(command: &str, argument: &str) -> Result<Input> {
    let invalid = || InputError::InvalidArgument {
        command: command.to_string(),
        value: argument.to_string(),
    };

    match command {
        "mode" => argument.parse::<Mode>().map(Input::SetMode).map_err(|_| invalid()),
        "base" => argument.parse::<Base>().map(Input::SetBase).map_err(|_| invalid()),
        "bits" | "width" => argument
            .parse::<u32>()
            .ok()
            .and_then(BitWidth::from_bits)
            .map(Input::SetBitWidth)
            .ok_or_else(invalid),
        "toggle" => argument
            .parse::<u32>()
            .map(Input::ToggleBit)
            .map_err(|_| invalid()),
        other => Err(InputError::InvalidCommand(other.to_string())),
    }
}

/// Parse a raw keypad token carrying its button category
pub fn parse_tagged(token: &str, kind: InputKind) -> Result<Input> {
    let mismatch = || InputError::KindMismatch {
        token: token.to_string(),
        kind,
    };
    let token = token.trim();
    let mut chars = token.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    };

    match kind {
        InputKind::Number => match single {
            Some(c) if c.is_ascii_digit() || c == '.' => Ok(Input::Digit(c)),
            _ => Err(mismatch()),
        },
        InputKind::Hex => match single {
            Some(c @ 'A'..='F') => Ok(Input::Digit(c)),
            _ => Err(mismatch()),
        },
        InputKind::Operator => match Operator::from_token(token) {
            Some(op) if op.is_arithmetic() => Ok(Input::Operator(op)),
            _ => match UnaryOp::from_token(token) {
                Some(op @ (UnaryOp::Negate | UnaryOp::Percent)) => Ok(Input::Unary(op)),
                _ => Err(mismatch()),
            },
        },
        InputKind::Bitwise => match Operator::from_token(token) {
            Some(op) if !op.is_arithmetic() => Ok(Input::Operator(op)),
            _ => match UnaryOp::from_token(token) {
                Some(UnaryOp::Not) => Ok(Input::Unary(UnaryOp::Not)),
                _ => Err(mismatch()),
            },
        },
        InputKind::Action => match token.to_ascii_uppercase().as_str() {
            "AC" => Ok(Input::Clear),
            "DEL" => Ok(Input::Delete),
            "=" => Ok(Input::Equals),
            _ => Err(mismatch()),
        },
    }
}
