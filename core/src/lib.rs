use serde::Deserialize;

pub mod color;
pub mod node;
pub mod system;
pub mod tokens;

pub use node::{DocumentNode, NodeType};
pub use system::{walk, ExtractedNode, MAX_DEPTH};
pub use tokens::DesignTokens;

/// Ids the design tool gives the main frame, in both of the spellings exports use.
pub const ROOT_FRAME_IDS: [&str; 2] = ["1:2", "1-2"];
/// A frame matches if its id is one of [`ROOT_FRAME_IDS`] or its name contains this.
pub const ROOT_FRAME_NAME: &str = "Frame";

/// A full document export: `{ "document": { "children": [pages...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub document: DocumentNode,
}
impl FigmaFile {
    /// Top-level frames of every page, page-major.
    pub fn frames(&self) -> impl Iterator<Item = &DocumentNode> {
        self.document
            .children()
            .iter()
            .flat_map(|page| page.children())
    }

    /// The first frame matching a root id or containing [`ROOT_FRAME_NAME`].
    pub fn root_frame(&self) -> Option<&DocumentNode> {
        self.frames().find(|frame| {
            let id = frame.id.as_deref().unwrap_or("");
            ROOT_FRAME_IDS.contains(&id) || frame.name().contains(ROOT_FRAME_NAME)
        })
    }

    /// Tree extraction of the root frame, or `None` if nothing matched.
    pub fn design_system(&self) -> Option<ExtractedNode> {
        let root = self.root_frame()?;
        log::info!(
            "extracting design system from {:?} ({})",
            root.name(),
            root.id.as_deref().unwrap_or("no id")
        );
        Some(walk(root, "", 0))
    }
}
