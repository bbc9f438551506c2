/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            top: 20.0,
            bottom: 20.0,
            left: 15.0,
            right: 15.0,
        }
    }
}

impl Margin {
    /// CSS shorthand order: top right bottom left.
    pub fn to_css(&self) -> String {
        format!(
            "{}mm {}mm {}mm {}mm",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Print settings applied on top of every rendered document. Pages are
/// always A4 portrait.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfConfig {
    pub margin: Margin,
}

impl PdfConfig {
    pub const PAGE_SIZE: &'static str = "A4";

    pub fn to_css(&self) -> String {
        format!(
            "@page {{ size: {}; margin: {}; }}",
            Self::PAGE_SIZE,
            self.margin.to_css()
        )
    }
}
