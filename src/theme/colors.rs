//! Color palette for the Verdant page.

// === LEAF (Brand, Actions) ===
pub const LEAF: &str = "#2f6b3f";
pub const LEAF_DARK: &str = "#1f4a2b";
pub const LEAF_LIGHT: &str = "#e6f0e4";

// === SOIL (Backgrounds) ===
pub const CREAM: &str = "#faf7f0";
pub const SAND: &str = "#f1ebdd";

// === TEXT ===
pub const INK: &str = "#1e2a22";
pub const INK_MUTED: &str = "#5c6b60";

// === SEMANTIC ===
pub const DANGER: &str = "#b3261e";
pub const TERRACOTTA: &str = "#c8643b";

/// CSS custom property name and value for every palette entry
pub const PALETTE: [(&str, &str); 9] = [
    ("--leaf", LEAF),
    ("--leaf-dark", LEAF_DARK),
    ("--leaf-light", LEAF_LIGHT),
    ("--cream", CREAM),
    ("--sand", SAND),
    ("--ink", INK),
    ("--ink-muted", INK_MUTED),
    ("--danger", DANGER),
    ("--terracotta", TERRACOTTA),
];
