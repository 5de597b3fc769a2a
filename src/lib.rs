//! prettify - line layout and syntax highlighting for source snippets
//!
//! A solution string goes through four stages:
//! - [`prepare`]: split into lines, expand tabs, drop the shared margin
//! - [`syntax`]: classify each line into spans, carrying block comments forward
//! - [`layout`]: infer a nesting depth per line from bracket balance
//! - [`markup`]: wrap each span for display
//!
//! [`Prettifier`] runs the whole pipeline; [`render`] turns the result
//! into HTML, terminal, JSON or text output.
//!
//! ```
//! let result = prettify::prettify("function f() {\n  return 1;\n}");
//! let depths: Vec<usize> = result.lines.iter().map(|line| line.depth).collect();
//! assert_eq!(depths, vec![0, 1, 0]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod logging;
pub mod markup;
pub mod prepare;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use engine::{prettify, Highlight, LineEvent, Prettifier, PrettifyResult};
pub use error::{PrettifyError, Result};
pub use layout::Line;
pub use prepare::RawLine;
pub use render::RenderOptions;
pub use syntax::{LanguageDefinition, ScanState, Span, SyntaxManager, TokenType};
