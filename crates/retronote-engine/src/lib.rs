pub mod editing;
pub mod metrics;
pub mod model;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{Cmd, EditError, TemplateDoc};
pub use metrics::{MetricsHandle, Sample};
pub use model::{Block, BlockId, BlockLevel, Preset};
pub use parsing::{TemplateSyntax, parse, parse_with};
pub use render::{FormatOptions, GuideCatalog, serialize, to_editable_markdown};
