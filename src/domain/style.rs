//! Static design-style catalog.

/// One entry in the fixed design-style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    pub name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

/// The six styles offered by the wizard. Static configuration data, not a
/// dynamic schema.
pub const STYLE_CATALOG: [StyleOption; 6] = [
    StyleOption {
        name: "Minimalist",
        description: "Clean, simple, and timeless design",
        features: ["Simple lines", "Plenty of white space", "Classic typography"],
    },
    StyleOption {
        name: "Futuristic",
        description: "High-tech and cutting-edge aesthetics",
        features: ["Digital elements", "Modern shapes", "Tech-inspired"],
    },
    StyleOption {
        name: "Geometric",
        description: "Bold shapes and mathematical precision",
        features: ["Sharp angles", "Structured forms", "Bold contrasts"],
    },
    StyleOption {
        name: "Playful",
        description: "Fun, creative, and approachable",
        features: ["Rounded shapes", "Vibrant colors", "Friendly appeal"],
    },
    StyleOption {
        name: "Elegant",
        description: "Sophisticated and refined luxury",
        features: ["Graceful curves", "Premium feel", "Refined details"],
    },
    StyleOption {
        name: "Tech-inspired",
        description: "Circuit patterns and digital innovation",
        features: ["Circuit motifs", "Digital patterns", "Innovation-focused"],
    },
];

/// Look up a catalog entry by name.
pub fn find_style(name: &str) -> Option<&'static StyleOption> {
    STYLE_CATALOG.iter().find(|style| style.name == name)
}
