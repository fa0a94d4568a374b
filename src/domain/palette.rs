//! Static preset color palette.

/// A named preset color with its display hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The twelve preset colors offered by the wizard. Free-text custom names
/// are allowed alongside these.
pub const PRESET_COLORS: [PresetColor; 12] = [
    PresetColor { name: "Blue", hex: "#3B82F6" },
    PresetColor { name: "Lilac", hex: "#C084FC" },
    PresetColor { name: "White", hex: "#FFFFFF" },
    PresetColor { name: "Purple", hex: "#8B5CF6" },
    PresetColor { name: "Teal", hex: "#14B8A6" },
    PresetColor { name: "Rose", hex: "#F43F5E" },
    PresetColor { name: "Amber", hex: "#F59E0B" },
    PresetColor { name: "Emerald", hex: "#10B981" },
    PresetColor { name: "Indigo", hex: "#6366F1" },
    PresetColor { name: "Pink", hex: "#EC4899" },
    PresetColor { name: "Orange", hex: "#F97316" },
    PresetColor { name: "Cyan", hex: "#06B6D4" },
];

/// Look up a preset by name.
pub fn find_preset(name: &str) -> Option<&'static PresetColor> {
    PRESET_COLORS.iter().find(|color| color.name == name)
}
