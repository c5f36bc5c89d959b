/// The injected line the user has to find in the core dump
pub const BUG_MARKER: &str = "### Injecting: XENOS_ALPHA_CORE- a*UYm#&@JF&*NNELe?K(*NFKW*@ ###";

/// What the marker is replaced with once removed
pub const REMOVED_MARKER: &str = "// FRAGMENT REMOVED //";

const LISTING_TEMPLATE: &str = r#"
// AURA Core Logic - Fragment 734b
// Grid Stability Simulation Module (v3.1) - DO NOT MODIFY

function calculateFluxDistribution(gridData, cmeParams) {
    let nodes = gridData.nodes;
    let stabilityFactor = computeStability(cmeParams.intensity);
    nodes.forEach(node => {
        if (node.vulnerability > 0.8 && stabilityFactor < 0.1) {
            log("Critical node: " + node.id);
            /* ERROR: Protocol conflict - External Override Detected */
            {marker} triggerCascadeFailure(node.id); // Injected Malicious Code
        } else {
            node.flux = baseFlux * stabilityFactor / node.resistance;
        }
    });
    return nodes;
}

// Memory Integrity Checksum: 4a5c... CORRUPTED ...d1e
// Recovery Vector Pointer: 0xFFFFFFFF (NULL) - FATAL
// XENOS Signature: AE-35 unit responding...
"#;

/// The scrambled core-dump listing shown in developer mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevListing {
    text: String,
}

impl Default for DevListing {
    fn default() -> Self {
        Self::new()
    }
}

impl DevListing {
    pub fn new() -> Self {
        Self {
            text: LISTING_TEMPLATE.replace("{marker}", BUG_MARKER),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragment_present(&self) -> bool {
        self.text.contains(BUG_MARKER)
    }

    /// Swaps the marker for the removal comment; returns whether anything changed
    pub fn remove_fragment(&mut self) -> bool {
        if !self.fragment_present() {
            return false;
        }
        self.text = self.text.replacen(BUG_MARKER, REMOVED_MARKER, 1);
        true
    }
}

/// Whether a text selection covers the whole marker
pub fn contains_bug_marker(selection: &str) -> bool {
    selection.contains(BUG_MARKER)
}
