use serde::{Deserialize, Serialize};

/// Palette id used when a settings document predates the `colorTemplate`
/// field. Applied on decode only; never written back until the user saves
/// settings themselves.
pub const DEFAULT_COLOR_TEMPLATE: &str = "purple";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub next_invoice_number: u32,
    pub tax_rate: f64,
    pub currency: String,
    #[serde(default = "default_color_template")]
    pub color_template: String,
}

fn default_color_template() -> String {
    DEFAULT_COLOR_TEMPLATE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            next_invoice_number: 1,
            tax_rate: 0.0,
            currency: "USD".to_string(),
            color_template: default_color_template(),
        }
    }
}
