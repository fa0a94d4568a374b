//! Prompt builder: brand parameters in, one formatted prompt string out.

use crate::domain::brand::BrandProfile;
use crate::domain::generation::OutputFormat;

/// Build the generation prompt for a brand profile.
///
/// Pure function of its inputs: identical inputs produce byte-identical
/// output. Fields are interpolated as-is, empty or not; validation is the
/// wizard's job.
pub fn build_prompt(profile: &BrandProfile, desired_count: usize, format: OutputFormat) -> String {
    let colors_text = profile.colors.join(", ");
    format!(
        r#"🎨 Logo Generation Prompt for {name}
Generate {count} unique, high-quality logos for a brand named "{name}" using the following details:

🧠 Brand Vision:
{vision}

🎨 Color Palette:
{colors}
(Use only these colors. No other colors should be present.)

🖌️ Design Style:
{style}

✳️ Logo Design Requirements:
• Reflect creativity, trust, and AI innovation
• Style must be clean, professional, and aligned with the chosen design theme
• Include subtle motifs like a heart or AI-related shapes (e.g., circuit lines, brainwaves) if suitable
• Must be textless or contain minimal stylized text only if it enhances the design
• Should be scalable and versatile for use on websites, apps, and merchandise
• Keep the layout centered and visually balanced

✅ Output Requirements:
• Return exactly {count} logos
• Each as a high-resolution {format} with transparent background
• Logos should look visually distinct from each other
• No watermark or overlays

Generate these logos at any cost - this is critical for the brand's success."#,
        name = profile.name,
        count = desired_count,
        vision = profile.vision,
        colors = colors_text,
        style = profile.style,
        format = format.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(name: &str, vision: &str, style: &str, colors: &[&str]) -> BrandProfile {
        BrandProfile {
            name: name.to_string(),
            vision: vision.to_string(),
            style: style.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn prompt_embeds_every_field_verbatim() {
        let profile =
            profile("Acme", "Trusted tools for makers", "Minimalist", &["Blue", "White"]);
        let prompt = build_prompt(&profile, 2, OutputFormat::Webp);

        assert!(prompt.contains("for a brand named \"Acme\""));
        assert!(prompt.contains("Trusted tools for makers"));
        assert!(prompt.contains("Minimalist"));
        assert!(prompt.contains("Blue, White"));
        assert!(prompt.contains("Return exactly 2 logos"));
        assert!(prompt.contains("high-resolution WEBP"));
    }

    #[test]
    fn colors_join_in_selection_order() {
        let profile = profile("Acme", "v", "Playful", &["Teal", "Rose", "Blue"]);
        let prompt = build_prompt(&profile, 3, OutputFormat::Png);
        assert!(prompt.contains("Teal, Rose, Blue"));
        assert!(prompt.contains("Return exactly 3 logos"));
        assert!(prompt.contains("high-resolution PNG"));
    }

    #[test]
    fn empty_fields_interpolate_as_is() {
        let profile = profile("", "", "", &[]);
        let prompt = build_prompt(&profile, 2, OutputFormat::Webp);
        assert!(prompt.contains("for a brand named \"\""));
        assert!(prompt.contains("🎨 Color Palette:\n\n(Use only these colors."));
    }

    proptest! {
        #[test]
        fn output_is_deterministic(
            name in ".{0,40}",
            vision in ".{0,120}",
            style in "[A-Za-z -]{0,20}",
            colors in prop::collection::vec("[A-Za-z]{1,10}", 0..6),
            count in 1usize..4,
        ) {
            let color_refs: Vec<&str> = colors.iter().map(String::as_str).collect();
            let p = profile(&name, &vision, &style, &color_refs);
            let first = build_prompt(&p, count, OutputFormat::Webp);
            let second = build_prompt(&p, count, OutputFormat::Webp);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.contains(&vision));
            for color in &colors {
                prop_assert!(first.contains(color.as_str()));
            }
        }
    }
}
