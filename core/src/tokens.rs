use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::{
    color::solid_fills,
    node::{or_blank, or_zero, DocumentNode, NodeType},
    FigmaFile,
};

/// Flat token lists. Unlike [`crate::system::walk`] these traversals have no
/// depth limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DesignTokens {
    pub colors: Vec<ColorToken>,
    pub fonts: Vec<FontToken>,
    /// Never filled; kept so the output always has the slot.
    pub spacing: Vec<Value>,
    pub components: Vec<ComponentToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorToken {
    pub name: String,
    pub path: String,
    pub hex: String,
    pub rgba: String,
    pub rgb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontToken {
    pub name: String,
    pub font_family: Value,
    pub font_size: Value,
    pub font_weight: Value,
    pub letter_spacing: Value,
    pub line_height: Value,
}

/// Only the left padding is recorded here, the tree output has all four sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentToken {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: NodeType,
    pub path: String,
    pub width: Value,
    pub height: Value,
    pub x: Value,
    pub y: Value,
    pub padding: Value,
    pub corner_radius: Value,
    pub layout_mode: Value,
    pub layout_grow: Value,
    pub layout_align: Value,
}

fn token_name(node: &DocumentNode) -> String {
    node.name.clone().unwrap_or_else(|| "Unknown".to_string())
}

impl DesignTokens {
    /// Runs the three extractors over every top-level frame of every page.
    pub fn from_file(file: &FigmaFile) -> Self {
        let mut tokens = DesignTokens::default();
        for frame in file.frames() {
            tokens.extract_colors(frame, "");
            tokens.extract_fonts(frame);
            tokens.extract_layout(frame, "");
        }
        tokens
    }

    pub fn extract_colors(&mut self, root: &DocumentNode, path: &str) {
        for (node, path) in root.descendants(path) {
            for color in solid_fills(node) {
                self.colors.push(ColorToken {
                    name: token_name(node),
                    path: path.clone(),
                    hex: color.to_hex(),
                    rgba: color.to_rgba(),
                    rgb: color.to_rgb(),
                });
            }
        }
    }

    pub fn extract_fonts(&mut self, root: &DocumentNode) {
        for (node, _) in root.descendants("") {
            let Some(style) = &node.style else { continue };
            if style.font_family.is_some() || style.font_size.is_some() {
                self.fonts.push(FontToken {
                    name: token_name(node),
                    font_family: or_blank(&style.font_family),
                    font_size: or_blank(&style.font_size),
                    font_weight: or_blank(&style.font_weight),
                    letter_spacing: or_blank(&style.letter_spacing),
                    line_height: or_blank(&style.line_height_px),
                });
            }
        }
    }

    pub fn extract_layout(&mut self, root: &DocumentNode, path: &str) {
        for (node, path) in root.descendants(path) {
            if !node.type_.is_container() {
                continue;
            }
            let bbox = node.bounding_box();
            self.components.push(ComponentToken {
                name: token_name(node),
                type_: node.type_.clone(),
                path,
                width: or_zero(&bbox.width),
                height: or_zero(&bbox.height),
                x: or_zero(&bbox.x),
                y: or_zero(&bbox.y),
                padding: or_zero(&node.padding_left),
                corner_radius: or_zero(&node.corner_radius),
                layout_mode: or_blank(&node.layout_mode),
                layout_grow: or_zero(&node.layout_grow),
                layout_align: or_blank(&node.layout_align),
            });
        }
    }

    /// First token seen for each hex value, in extraction order.
    pub fn key_colors(&self) -> IndexMap<&str, &ColorToken> {
        let mut seen = IndexMap::new();
        for color in &self.colors {
            seen.entry(color.hex.as_str()).or_insert(color);
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(value: Value) -> DocumentNode {
        serde_json::from_value(value).unwrap()
    }

    fn solid(r: f64, g: f64, b: f64) -> Value {
        json!({ "type": "SOLID", "color": { "r": r, "g": g, "b": b } })
    }

    #[test]
    fn colors_carry_name_and_path() {
        let root = node(json!({
            "name": "Frame",
            "fills": [solid(1.0, 1.0, 1.0)],
            "children": [{
                "name": "Card",
                "children": [{ "fills": [solid(0.5, 0.0, 0.0), solid(0.0, 0.0, 0.0)] }]
            }]
        }));
        let mut tokens = DesignTokens::default();
        tokens.extract_colors(&root, "");
        assert_eq!(
            serde_json::to_value(&tokens.colors).unwrap(),
            json!([
                { "name": "Frame", "path": "", "hex": "#ffffff", "rgba": "rgba(255, 255, 255, 1.0)", "rgb": "rgb(255, 255, 255)" },
                { "name": "Unknown", "path": "Frame/Card", "hex": "#7f0000", "rgba": "rgba(127, 0, 0, 1.0)", "rgb": "rgb(127, 0, 0)" },
                { "name": "Unknown", "path": "Frame/Card", "hex": "#000000", "rgba": "rgba(0, 0, 0, 1.0)", "rgb": "rgb(0, 0, 0)" }
            ])
        );
    }

    #[test]
    fn fonts_need_family_or_size() {
        let root = node(json!({
            "name": "Stack",
            "children": [
                { "name": "Title", "style": { "fontFamily": "Inter", "fontWeight": 700 } },
                { "name": "Caption", "style": { "fontSize": 11 } },
                { "name": "Plain", "style": { "textAlign": "LEFT" } }
            ]
        }));
        let mut tokens = DesignTokens::default();
        tokens.extract_fonts(&root);
        assert_eq!(
            serde_json::to_value(&tokens.fonts).unwrap(),
            json!([
                { "name": "Title", "fontFamily": "Inter", "fontSize": "", "fontWeight": 700, "letterSpacing": "", "lineHeight": "" },
                { "name": "Caption", "fontFamily": "", "fontSize": 11, "fontWeight": "", "letterSpacing": "", "lineHeight": "" }
            ])
        );
    }

    #[test]
    fn layout_only_for_containers() {
        let root = node(json!({
            "name": "Page Frame",
            "type": "FRAME",
            "absoluteBoundingBox": { "x": 0, "y": 0, "width": 375, "height": 812 },
            "paddingLeft": 24,
            "paddingRight": 8,
            "children": [
                { "name": "Heading", "type": "TEXT" },
                { "name": "Row", "type": "INSTANCE", "layoutMode": "HORIZONTAL", "layoutGrow": 1 },
                { "name": "Blob", "type": "VECTOR" }
            ]
        }));
        let mut tokens = DesignTokens::default();
        tokens.extract_layout(&root, "");
        assert_eq!(
            serde_json::to_value(&tokens.components).unwrap(),
            json!([
                {
                    "name": "Page Frame", "type": "FRAME", "path": "",
                    "width": 375, "height": 812, "x": 0, "y": 0,
                    "padding": 24, "cornerRadius": 0,
                    "layoutMode": "", "layoutGrow": 0, "layoutAlign": ""
                },
                {
                    "name": "Row", "type": "INSTANCE", "path": "Page Frame",
                    "width": 0, "height": 0, "x": 0, "y": 0,
                    "padding": 0, "cornerRadius": 0,
                    "layoutMode": "HORIZONTAL", "layoutGrow": 1, "layoutAlign": ""
                }
            ])
        );
    }

    #[test]
    fn no_depth_limit() {
        let mut value = json!({ "name": "leaf", "type": "GROUP" });
        for level in 0..20 {
            value = json!({ "name": format!("g{level}"), "type": "GROUP", "children": [value] });
        }
        let mut tokens = DesignTokens::default();
        tokens.extract_layout(&node(value), "");
        assert_eq!(tokens.components.len(), 21);
        assert_eq!(tokens.components.last().unwrap().name, "leaf");
    }

    #[test]
    fn present_nulls_pass_through() {
        let root = node(json!({
            "name": "Box",
            "type": "FRAME",
            "cornerRadius": null,
            "layoutAlign": null,
            "absoluteBoundingBox": { "width": null }
        }));
        let mut tokens = DesignTokens::default();
        tokens.extract_layout(&root, "");
        let out = serde_json::to_value(&tokens.components[0]).unwrap();
        let out = out.as_object().unwrap();
        assert_eq!(out["cornerRadius"], Value::Null);
        assert_eq!(out["layoutAlign"], Value::Null);
        assert_eq!(out["width"], Value::Null);
        assert_eq!(out["height"], json!(0));
        assert_eq!(out["layoutMode"], json!(""));
    }

    #[test]
    fn key_colors_keep_first_seen() {
        let root = node(json!({
            "name": "Root",
            "children": [
                { "name": "A", "fills": [solid(1.0, 0.0, 0.0)] },
                { "name": "B", "fills": [solid(0.0, 0.0, 1.0)] },
                { "name": "C", "fills": [solid(1.0, 0.0, 0.0)] }
            ]
        }));
        let mut tokens = DesignTokens::default();
        tokens.extract_colors(&root, "");
        let keys: Vec<_> = tokens
            .key_colors()
            .into_iter()
            .map(|(hex, token)| (hex, token.name.as_str()))
            .collect();
        assert_eq!(keys, vec![("#ff0000", "A"), ("#0000ff", "B")]);
    }

    #[test]
    fn from_file_walks_every_frame() {
        let file: FigmaFile = serde_json::from_value(json!({
            "document": {
                "children": [
                    { "name": "Page 1", "children": [
                        { "name": "Hero", "type": "FRAME", "fills": [solid(0.0, 0.0, 0.0)] }
                    ]},
                    { "name": "Page 2", "children": [
                        { "name": "Footer", "type": "FRAME", "style": { "fontFamily": "Inter" } }
                    ]}
                ]
            }
        }))
        .unwrap();
        let tokens = DesignTokens::from_file(&file);
        assert_eq!(tokens.colors.len(), 1);
        assert_eq!(tokens.fonts.len(), 1);
        assert_eq!(tokens.components.len(), 2);
        assert!(tokens.spacing.is_empty());
        assert_eq!(tokens.components[1].path, "");
    }
}
