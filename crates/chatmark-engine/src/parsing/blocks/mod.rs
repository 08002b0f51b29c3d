//! # Block Parsing
//!
//! Two-phase block parsing over the lines of a markdown run.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched against
//!    `BLOCK_START_PREDICATES` in priority order and becomes a `LineClass`
//!    carrying only local facts (kind and remaining text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds classified
//!    lines into open list/paragraph groups and emits `Block`s as groups close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `CodeBlock`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, ThematicBreak, BlockQuote, ListMarker, CodeFence)
//! - **`classify`**: `classify` and the ordered predicate table
//! - **`builder`**: `BlockBuilder` state machine for greedy grouping
//!
//! ## Key Invariants
//!
//! - Grouping is greedy and first-match: no backtracking
//! - Unordered list grouping ignores which bullet character a line uses
//! - Code blocks arrive pre-extracted and are never classified

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{BLOCK_START_PREDICATES, LineClass, LinePredicate, classify};
pub use types::{Block, CodeBlock};
