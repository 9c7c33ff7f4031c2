//! Calculator input layer
//!
//! Turn keystroke scripts and physical key names into calculator inputs.
//!
//! ## Example
//!
//! ```rust
//! use calc_input::parse_script;
//!
//! let source = r#"
//!     :base hex :bits 8
//!     FF XOR 0F =   # F0
//! "#;
//!
//! let inputs = parse_script(source).unwrap();
//! assert_eq!(inputs.len(), 8);
//! ```

pub mod error;
pub mod keyboard;
pub mod lexer;
pub mod parser;

pub use error::{InputError, Result};
pub use keyboard::map_key;
pub use parser::{parse_command, parse_keyword, parse_script, parse_tagged};
