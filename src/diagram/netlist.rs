//! Gate-level netlist payloads.
//!
//! The JSON layout is the one produced by common synthesis tools: a map of
//! modules, each with named ports and cells whose connections reference
//! numbered nets or constant drivers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::capability::{isolate, NetlistRenderer};
use crate::error::{Error, Result};
use crate::render::{Fragment, Layout, RenderResult, ViewBox};

use super::DiagramOptions;

/// A parsed netlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Netlist {
    /// Tool that produced the netlist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Modules by name
    pub modules: BTreeMap<String, NetlistModule>,
}

impl Netlist {
    /// Parse netlist JSON.
    ///
    /// Malformed JSON is a [`Error::Parse`]; well-formed JSON of the wrong
    /// shape, or without modules, is an [`Error::InvalidPayload`].
    pub fn from_json(data: &str) -> Result<Self> {
        let netlist: Netlist = serde_json::from_str(data)?;
        if netlist.modules.is_empty() {
            return Err(Error::InvalidPayload("netlist has no modules".into()));
        }
        Ok(netlist)
    }

    /// Total number of cells across modules.
    pub fn cell_count(&self) -> usize {
        self.modules.values().map(|m| m.cells.len()).sum()
    }

    /// Total number of ports across modules.
    pub fn port_count(&self) -> usize {
        self.modules.values().map(|m| m.ports.len()).sum()
    }
}

/// One module of a netlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetlistModule {
    /// Ports by name
    #[serde(default)]
    pub ports: BTreeMap<String, Port>,

    /// Cells by instance name
    #[serde(default)]
    pub cells: BTreeMap<String, NetCell>,
}

/// A module port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Signal direction
    pub direction: PortDirection,
    /// Nets carried by the port, one per bit
    pub bits: Vec<Signal>,
}

/// Direction of a port or cell pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Input
    Input,
    /// Output
    Output,
    /// Bidirectional
    Inout,
}

/// A cell instance (gate, flip-flop, submodule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetCell {
    /// Cell type, e.g. `$and`
    #[serde(rename = "type")]
    pub kind: String,

    /// Pin directions by pin name
    #[serde(default)]
    pub port_directions: BTreeMap<String, PortDirection>,

    /// Pin connections by pin name
    #[serde(default)]
    pub connections: BTreeMap<String, Vec<Signal>>,
}

/// One bit of a connection: a net number or a constant driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signal {
    /// Numbered net
    Net(u64),
    /// Constant such as `"0"`, `"1"`, `"x"` or `"z"`
    Constant(String),
}

/// Render a NETLIST payload.
pub(crate) fn render(
    backend: Option<&dyn NetlistRenderer>,
    data: &str,
    options: &DiagramOptions,
) -> RenderResult {
    let Some(backend) = backend else {
        return RenderResult::failure(Error::CapabilityUnavailable("netlist".into()));
    };

    let netlist = match Netlist::from_json(data) {
        Ok(netlist) => netlist,
        Err(err) => return RenderResult::failure(err),
    };
    log::debug!(
        "netlist: {} modules, {} cells",
        netlist.modules.len(),
        netlist.cell_count()
    );

    let circuit = match isolate("netlist", || backend.render(&netlist)) {
        Ok(circuit) => circuit,
        Err(err) => return RenderResult::failure(err),
    };

    let mut layout = Layout::fill().with_max_height(options.netlist_max_height);
    let mut markup = circuit.svg;
    if circuit.bbox.width > 0.0 {
        let bbox = circuit.bbox.expand(options.netlist_margin);
        let view_box = ViewBox {
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
        };
        markup =
            super::svg::set_root_attribute(&markup, "viewBox", &view_box.to_attribute());
        layout = layout.with_view_box(view_box);
    }
    markup = super::svg::apply_root_style(&markup, &layout);

    RenderResult::Success(Fragment::Svg { markup, layout })
}
