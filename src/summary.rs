//! Console summaries printed after each pipeline has written its file.

use std::io::{self, Write};

use figma_tokens_core::{DesignTokens, ExtractedNode};

use crate::{SYSTEM_FILE, TOKENS_FILE};

pub fn design_system(out: &mut impl Write, system: Option<&ExtractedNode>) -> io::Result<()> {
    let (name, type_) = match system {
        Some(root) => (root.name.as_str(), root.type_.as_str()),
        None => ("Unknown", "Unknown"),
    };
    let colors = system.map(ExtractedNode::unique_colors).unwrap_or_default();

    writeln!(out, "=== Design System Summary ===")?;
    writeln!(out, "\nComponent: {name}")?;
    writeln!(out, "Type: {type_}")?;
    writeln!(out, "\nUnique Colors Found: {}", colors.len())?;
    for color in colors {
        writeln!(out, "  {color}")?;
    }
    writeln!(out, "\nDesign system saved to {SYSTEM_FILE}")
}

pub fn design_tokens(out: &mut impl Write, tokens: &DesignTokens) -> io::Result<()> {
    writeln!(out, "Extracted {} colors", tokens.colors.len())?;
    writeln!(out, "Extracted {} font styles", tokens.fonts.len())?;
    writeln!(out, "Extracted {} components", tokens.components.len())?;
    writeln!(out, "\nDesign tokens saved to {TOKENS_FILE}")?;

    writeln!(out, "\n=== Key Colors ===")?;
    for (hex, color) in tokens.key_colors() {
        writeln!(out, "{}: {hex} ({})", color.name, color.rgb)?;
    }
    Ok(())
}
