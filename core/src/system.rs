use itertools::Itertools;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::{
    color::{solid_fills, SolidColor},
    node::{or_blank, or_zero, DocumentNode, NodeType},
};

/// Nodes deeper than this keep their own data but lose their children.
pub const MAX_DEPTH: usize = 10;

/// The tree-shaped design system: one entry per visited node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedNode {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: NodeType,
    pub path: String,
    pub colors: Vec<ColorInfo>,
    pub fonts: Fonts,
    pub layout: Layout,
    pub children: Vec<ExtractedNode>,
}
impl ExtractedNode {
    /// Every hex color in the subtree, deduplicated and sorted.
    pub fn unique_colors(&self) -> Vec<&str> {
        let mut hexes = Vec::new();
        self.collect_colors(&mut hexes);
        hexes.into_iter().unique().sorted().collect()
    }
    fn collect_colors<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend(self.colors.iter().map(|color| color.hex.as_str()));
        for child in &self.children {
            child.collect_colors(out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgba: String,
    pub opacity: Number,
}
impl From<SolidColor> for ColorInfo {
    fn from(color: SolidColor) -> Self {
        ColorInfo {
            hex: color.to_hex(),
            rgba: color.to_rgba(),
            opacity: color.a,
        }
    }
}

/// Serializes as `{}` when the node has no typography.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fonts {
    Style(FontInfo),
    Empty {},
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub font_family: Value,
    pub font_size: Value,
    pub font_weight: Value,
    pub letter_spacing: Value,
    pub line_height: Value,
    pub text_align: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub x: Value,
    pub y: Value,
    pub width: Value,
    pub height: Value,
    pub corner_radius: Value,
    pub padding_left: Value,
    pub padding_right: Value,
    pub padding_top: Value,
    pub padding_bottom: Value,
    pub layout_mode: Value,
    pub layout_grow: Value,
    pub layout_align: Value,
    pub gap: Value,
}

fn fonts(node: &DocumentNode) -> Fonts {
    match &node.style {
        Some(style) if style.font_family.is_some() => Fonts::Style(FontInfo {
            font_family: or_blank(&style.font_family),
            font_size: or_blank(&style.font_size),
            font_weight: or_blank(&style.font_weight),
            letter_spacing: style
                .letter_spacing
                .clone()
                .unwrap_or_else(|| Value::Object(Default::default())),
            line_height: or_blank(&style.line_height_px),
            text_align: or_blank(&style.text_align),
        }),
        _ => Fonts::Empty {},
    }
}

fn layout(node: &DocumentNode) -> Layout {
    let bbox = node.bounding_box();
    Layout {
        x: or_zero(&bbox.x),
        y: or_zero(&bbox.y),
        width: or_zero(&bbox.width),
        height: or_zero(&bbox.height),
        corner_radius: or_zero(&node.corner_radius),
        padding_left: or_zero(&node.padding_left),
        padding_right: or_zero(&node.padding_right),
        padding_top: or_zero(&node.padding_top),
        padding_bottom: or_zero(&node.padding_bottom),
        layout_mode: or_blank(&node.layout_mode),
        layout_grow: or_zero(&node.layout_grow),
        layout_align: or_blank(&node.layout_align),
        gap: or_zero(&node.item_spacing),
    }
}

/// Extracts `node` and its descendants down to [`MAX_DEPTH`].
pub fn walk(node: &DocumentNode, path: &str, depth: usize) -> ExtractedNode {
    let children = match &node.children {
        Some(children) if depth < MAX_DEPTH => {
            let child_path = node.child_path(path);
            children
                .iter()
                .map(|child| walk(child, &child_path, depth + 1))
                .collect()
        }
        Some(children) => {
            if !children.is_empty() {
                log::debug!(
                    "depth limit reached at {:?}, dropping {} children",
                    node.child_path(path),
                    children.len()
                );
            }
            Vec::new()
        }
        None => Vec::new(),
    };
    ExtractedNode {
        name: node.name().to_string(),
        type_: node.type_.clone(),
        path: path.to_string(),
        colors: solid_fills(node).into_iter().map(ColorInfo::from).collect(),
        fonts: fonts(node),
        layout: layout(node),
        children,
    }
}
