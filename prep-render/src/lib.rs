//! Markdown rendering for interview preparation content
//!
//!     This crate turns the restricted markdown dialect used by question write-ups and chat
//!     replies into single-line, styled markup that a page can inject as-is. It also carries
//!     the data that content lives in: question records (with their upload-form validation)
//!     and chat sessions.
//!
//!     This is a pure lib: it powers the prep cli but supposes no shell environment, so no code
//!     here prints, reads env vars, or exits.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── options.rs              # RenderOptions shared by every stage
//!     ├── pipeline.rs             # Ordered stage list, run / run_through
//!     ├── protect.rs              # Sentinel substitution for protected spans
//!     ├── stages                  # One module per rewrite (escape, code_blocks, ...)
//!     ├── formats
//!     │   ├── html                # Full transformer + standalone document wrapping
//!     │   └── inline.rs           # Chat formatter
//!     ├── question.rs             # Question records and upload drafts
//!     └── chat                    # Chat session state and topic tracking
//!
//! Core Algorithm
//!
//!     There is no parse tree. Rendering is a fixed sequence of whole-text rewrites (see
//!     ./pipeline.rs for the order and what each stage may assume). Two techniques keep that
//!     honest:
//!
//!     - Span protection: code bodies and link targets have their markdown-significant
//!       characters swapped for sentinels (./protect.rs) as soon as they are recognized, so no
//!       later stage can rewrite them. The last stage swaps them back.
//!     - Line ownership: every block stage emits exactly one line per block, starting with its
//!       opening tag. Later line-oriented stages skip lines that already start with markup.
//!
//!     Rendering is total: any input, however malformed, produces some markup, and no stage
//!     returns an error.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── pipeline                # End to end properties of the transformer
//!     └── records                 # Question and chat round trips through JSON
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod chat;
pub mod error;
pub mod format;
pub mod formats;
pub mod options;
pub mod pipeline;
pub mod protect;
pub mod question;
pub mod registry;
pub mod stages;

pub use chat::{ChatError, ChatSession};
pub use error::FormatError;
pub use format::Format;
pub use formats::{get_default_css, HtmlFormat, HtmlOptions, InlineFormat};
pub use options::RenderOptions;
pub use pipeline::{Pipeline, Stage, STAGE_NAMES};
pub use question::{Question, QuestionDraft, ValidationErrors};
pub use registry::FormatRegistry;

/// Render markdown with the default options.
///
/// Total: never fails, never panics. Empty input yields an empty string.
pub fn render(source: &str) -> String {
    Pipeline::default().run(source)
}
