//! Brand profile domain model.

/// Brand parameters collected by the wizard and fed to the prompt builder.
///
/// `colors` is an ordered, duplicate-free list: prompt output joins it in
/// selection order, so edits preserve the order the user chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProfile {
    /// Brand name.
    pub name: String,
    /// Free-text brand vision.
    pub vision: String,
    /// Design style name, chosen from the style catalog.
    pub style: String,
    /// Selected color names, in selection order.
    pub colors: Vec<String>,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            name: "enter brand name".to_string(),
            vision: "Enter your Brand vision".to_string(),
            style: "Minimalist".to_string(),
            colors: vec!["Blue".to_string(), "Lilac".to_string(), "White".to_string()],
        }
    }
}

impl BrandProfile {
    /// Whether `name` is currently in the selection.
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|color| color == name)
    }

    /// Add `name` if absent, remove it if present.
    pub fn toggle_color(&mut self, name: &str) {
        if self.has_color(name) {
            self.remove_color(name);
        } else {
            self.colors.push(name.to_string());
        }
    }

    /// Add a user-supplied color name. Blank and duplicate names are rejected.
    pub fn add_custom_color(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.has_color(trimmed) {
            return false;
        }
        self.colors.push(trimmed.to_string());
        true
    }

    /// Remove `name` from the selection, if present.
    pub fn remove_color(&mut self, name: &str) {
        self.colors.retain(|color| color != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_carries_placeholders() {
        let profile = BrandProfile::default();
        assert_eq!(profile.name, "enter brand name");
        assert_eq!(profile.style, "Minimalist");
        assert_eq!(profile.colors, vec!["Blue", "Lilac", "White"]);
    }

    #[test]
    fn toggle_color_preserves_selection_order() {
        let mut profile = BrandProfile { colors: Vec::new(), ..BrandProfile::default() };
        profile.toggle_color("Teal");
        profile.toggle_color("Rose");
        profile.toggle_color("Blue");
        assert_eq!(profile.colors, vec!["Teal", "Rose", "Blue"]);

        profile.toggle_color("Rose");
        assert_eq!(profile.colors, vec!["Teal", "Blue"]);
    }

    #[test]
    fn add_custom_color_rejects_blank_and_duplicates() {
        let mut profile = BrandProfile::default();
        assert!(!profile.add_custom_color("   "));
        assert!(!profile.add_custom_color("Blue"));
        assert!(profile.add_custom_color("  Navy "));
        assert!(profile.has_color("Navy"));
    }
}
