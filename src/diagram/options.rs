//! Diagram rendering configuration.

use serde::{Deserialize, Serialize};

/// Options shared by the diagram backends.
#[derive(Debug, Clone)]
pub struct DiagramOptions {
    /// Margin added around the netlist drawing's bounding box
    pub netlist_margin: f64,

    /// Maximum display height of netlist drawings, in pixels
    pub netlist_max_height: u32,

    /// Maximum display height of embedded SVG, in pixels
    pub svg_max_height: u32,

    /// Font family forced on embedded SVG
    pub svg_font_family: String,

    /// Maximum display height of image references, in pixels
    pub image_max_height: u32,

    /// Alternative text for image references
    pub image_alt: String,

    /// Characters of an error message shown in an error box
    pub error_message_limit: usize,

    /// Chemical structure drawing options
    pub smiles: SmilesOptions,
}

impl DiagramOptions {
    /// Create new diagram options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the netlist bounding-box margin.
    pub fn with_netlist_margin(mut self, margin: f64) -> Self {
        self.netlist_margin = margin;
        self
    }

    /// Set the maximum netlist display height.
    pub fn with_netlist_max_height(mut self, px: u32) -> Self {
        self.netlist_max_height = px;
        self
    }

    /// Set the maximum SVG display height.
    pub fn with_svg_max_height(mut self, px: u32) -> Self {
        self.svg_max_height = px;
        self
    }

    /// Set the font family forced on embedded SVG.
    pub fn with_svg_font(mut self, family: impl Into<String>) -> Self {
        self.svg_font_family = family.into();
        self
    }

    /// Set the maximum image display height.
    pub fn with_image_max_height(mut self, px: u32) -> Self {
        self.image_max_height = px;
        self
    }

    /// Set the image alternative text.
    pub fn with_image_alt(mut self, alt: impl Into<String>) -> Self {
        self.image_alt = alt.into();
        self
    }

    /// Set the error message length limit.
    pub fn with_error_message_limit(mut self, limit: usize) -> Self {
        self.error_message_limit = limit;
        self
    }

    /// Set the chemical structure options.
    pub fn with_smiles(mut self, smiles: SmilesOptions) -> Self {
        self.smiles = smiles;
        self
    }
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            netlist_margin: 10.0,
            netlist_max_height: 300,
            svg_max_height: 350,
            svg_font_family: "Inter, sans-serif".to_string(),
            image_max_height: 300,
            image_alt: "Diagram".to_string(),
            error_message_limit: 160,
            smiles: SmilesOptions::default(),
        }
    }
}

/// Color theme for structure drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark atoms and bonds on a light background
    #[default]
    Light,
    /// Light atoms and bonds on a dark background
    Dark,
}

/// Options handed to the structure drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmilesOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Padding around the molecule
    pub padding: f64,
    /// Bond line thickness
    pub bond_thickness: f64,
    /// Font size of element labels
    pub font_size_large: u32,
    /// Font size of charges, isotopes and hydrogen counts
    pub font_size_small: u32,
    /// Draw carbon labels at chain ends
    pub terminal_carbons: bool,
    /// Draw hydrogens explicitly
    pub explicit_hydrogens: bool,
    /// Color theme
    pub theme: Theme,
    /// Maximum display height in pixels
    pub max_height: u32,
}

impl Default for SmilesOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            padding: 20.0,
            bond_thickness: 2.0,
            font_size_large: 20,
            font_size_small: 14,
            terminal_carbons: true,
            explicit_hydrogens: true,
            theme: Theme::Light,
            max_height: 300,
        }
    }
}
