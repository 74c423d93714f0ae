//! Ordered stage pipeline
//!
//!     Rendering is a fixed sequence of pure text rewrites. Each stage sees the output of the
//!     previous one, so the order is load bearing: later patterns would misfire on raw syntax
//!     an earlier stage has not consumed yet, or on markup an earlier stage already injected.
//!
//!     | #  | Stage         | Text it may assume                                              |
//!     |----|---------------|-----------------------------------------------------------------|
//!     | 1  | escape        | raw input                                                       |
//!     | 2  | code-blocks   | no raw `&`, `<`, `>`; no sentinels                              |
//!     | 3  | inline-code   | fenced bodies folded into single protected lines                |
//!     | 4  | headers       | every code span protected                                       |
//!     | 5  | emphasis      | headers are markup lines                                        |
//!     | 6  | links         | emphasis delimiters consumed                                    |
//!     | 7  | blockquotes   | inline spans are markup                                         |
//!     | 8  | lists         | quoted lines merged into one markup line per quote              |
//!     | 9  | tables        | list runs merged into one markup line per list                  |
//!     | 10 | rules         | pipe rows merged into one markup line per table                 |
//!     | 11 | paragraphs    | every recognized block starts its line with a tag               |
//!     | 12 | whitespace    | only paragraph-wrapped or block lines remain                    |
//!     | 13 | restore       | single-line markup with sentinels still in code bodies          |
//!
//!     Stages 2 and 3 must precede the structural passes so code content is never read as
//!     markdown; stage 12 must follow everything that depends on line boundaries and precede
//!     stage 13 so the only newlines left in the output are the protected ones inside code.

use crate::options::RenderOptions;
use crate::stages;

/// A named pure rewrite of the whole text.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: fn(&str, &RenderOptions) -> String,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The standard stage order.
pub const STANDARD_STAGES: [Stage; 13] = [
    Stage { name: "escape", apply: stages::escape::apply },
    Stage { name: "code-blocks", apply: stages::code_blocks::apply },
    Stage { name: "inline-code", apply: stages::inline::inline_code },
    Stage { name: "headers", apply: stages::headers::apply },
    Stage { name: "emphasis", apply: stages::inline::emphasis },
    Stage { name: "links", apply: stages::inline::links },
    Stage { name: "blockquotes", apply: stages::blockquotes::apply },
    Stage { name: "lists", apply: stages::lists::apply },
    Stage { name: "tables", apply: stages::tables::apply },
    Stage { name: "rules", apply: stages::rules::apply },
    Stage { name: "paragraphs", apply: stages::paragraphs::apply },
    Stage { name: "whitespace", apply: stages::whitespace::normalize },
    Stage { name: "restore", apply: stages::whitespace::restore },
];

/// Names of the standard stages, in order.
pub const STAGE_NAMES: [&str; 13] = names_of(&STANDARD_STAGES);

const fn names_of<const N: usize>(stages: &[Stage; N]) -> [&'static str; N] {
    let mut names = [""; N];
    let mut i = 0;
    while i < N {
        names[i] = stages[i].name;
        i += 1;
    }
    names
}

/// Markdown to markup transformer.
///
/// # Examples
///
/// ```ignore
/// let pipeline = Pipeline::default();
/// let html = pipeline.run("# Title\n\nSome **bold** text");
/// assert!(html.starts_with("<h1"));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
    options: RenderOptions,
}

impl Pipeline {
    /// Standard stages with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            stages: STANDARD_STAGES.to_vec(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }

    /// Render `source` through every stage.
    pub fn run(&self, source: &str) -> String {
        self.run_stages(source, self.stages.len())
    }

    /// Render `source` up to and including the stage called `stage_name`.
    ///
    /// Returns `None` if no stage has that name.
    pub fn run_through(&self, source: &str, stage_name: &str) -> Option<String> {
        let position = self
            .stages
            .iter()
            .position(|stage| stage.name == stage_name)?;
        Some(self.run_stages(source, position + 1))
    }

    fn run_stages(&self, source: &str, count: usize) -> String {
        let mut text = source.to_string();
        for stage in self.stages.iter().take(count) {
            text = (stage.apply)(&text, &self.options);
            tracing::trace!(stage = stage.name, len = text.len(), "stage applied");
        }
        text
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
