//! # Lexer for keystroke scripts

use logos::Logos;

/// Tokens for keystroke scripts
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n,]+")] // Skip whitespace and separators
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Keyword or digit run (`XOR`, `AC`, `FF`, `3.25`)
    #[regex(r"[0-9A-Za-z_.]+", |lex| lex.slice().to_string())]
    Word(String),

    /// Selector command (`:mode`, `:base`, `:bits`, `:toggle`)
    #[regex(r":[A-Za-z]+", |lex| lex.slice()[1..].to_ascii_lowercase())]
    Command(String),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    #[token("×")]
    Star,

    #[token("/")]
    #[token("÷")]
    Slash,

    #[token("%")]
    Percent,

    #[token("+/-")]
    #[token("±")]
    PlusMinus,

    #[token("~")]
    Tilde,

    #[token("<<")]
    ShiftLeft,

    #[token(">>")]
    ShiftRight,

    #[token("=")]
    Equals,
}

/// Line and column (1-based) of a byte offset
pub fn position(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_words() {
        let mut lex = Token::lexer("FF xor 0F");
        assert_eq!(lex.next(), Some(Ok(Token::Word("FF".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("xor".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("0F".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_symbols() {
        let mut lex = Token::lexer("+ - * / % +/- = << >> ~");
        assert_eq!(lex.next(), Some(Ok(Token::Plus)));
        assert_eq!(lex.next(), Some(Ok(Token::Minus)));
        assert_eq!(lex.next(), Some(Ok(Token::Star)));
        assert_eq!(lex.next(), Some(Ok(Token::Slash)));
        assert_eq!(lex.next(), Some(Ok(Token::Percent)));
        assert_eq!(lex.next(), Some(Ok(Token::PlusMinus)));
        assert_eq!(lex.next(), Some(Ok(Token::Equals)));
        assert_eq!(lex.next(), Some(Ok(Token::ShiftLeft)));
        assert_eq!(lex.next(), Some(Ok(Token::ShiftRight)));
        assert_eq!(lex.next(), Some(Ok(Token::Tilde)));
    }

    #[test]
    fn test_lexer_commands_and_comments() {
        let mut lex = Token::lexer(":BITS 8 # word size\n:base hex");
        assert_eq!(lex.next(), Some(Ok(Token::Command("bits".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("8".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Command("base".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Word("hex".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_rejects_unknown() {
        let mut lex = Token::lexer("1 @ 2");
        assert_eq!(lex.next(), Some(Ok(Token::Word("1".to_string()))));
        assert_eq!(lex.next(), Some(Err(())));
    }

    #[test]
    fn test_position() {
        let source = "1 +\n  @";
        assert_eq!(position(source, 0), (1, 1));
        assert_eq!(position(source, 2), (1, 3));
        assert_eq!(position(source, 6), (2, 3));
    }
}
