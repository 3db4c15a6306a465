//! Font configuration for the measurement label.

/// Font used for the measurement label text.
///
/// Describes which installed font the label renders with. Passed through the
/// rendering pipeline so the label looks identical every frame.
#[derive(Debug, Clone)]
pub struct LabelFont {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,

    /// Font size in points
    pub size: f64,
}

impl LabelFont {
    /// Creates a new label font with the specified parameters.
    pub fn new(family: String, weight: String, style: String, size: f64) -> Self {
        Self {
            family,
            weight,
            style,
            size,
        }
    }

    /// Converts this font to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 16" or "Monospace Italic 14"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "bold".to_string(),
            style: "normal".to_string(),
            size: 16.0,
        }
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_default() {
        let font = LabelFont::default();
        assert_eq!(font.to_pango_string(), "Sans Bold 16");
    }

    #[test]
    fn pango_string_italic() {
        let font = LabelFont::new(
            "Monospace".to_string(),
            "normal".to_string(),
            "italic".to_string(),
            14.0,
        );
        assert_eq!(font.to_pango_string(), "Monospace Italic 14");
    }

    #[test]
    fn pango_string_rounds_size() {
        let font = LabelFont::new(
            "Sans".to_string(),
            "light".to_string(),
            "normal".to_string(),
            15.6,
        );
        assert_eq!(font.to_pango_string(), "Sans Light 16");
    }
}
