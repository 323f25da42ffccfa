// Known cluster segments and their plain-language explanations

/// The five sales-behaviour segments the clustering step assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    StableRetail,
    WarehouseLean,
    MixedChannel,
    BulkInstitutional,
    HighPerformingCore,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::StableRetail,
        Segment::WarehouseLean,
        Segment::MixedChannel,
        Segment::BulkInstitutional,
        Segment::HighPerformingCore,
    ];

    /// Label exactly as written in the `Clusters` column (note the en dash).
    pub fn label(self) -> &'static str {
        match self {
            Self::StableRetail => "Low Volume – Stable Retail",
            Self::WarehouseLean => "Low Volume – Warehouse Lean",
            Self::MixedChannel => "Low Volume – Mixed Channel",
            Self::BulkInstitutional => "Bulk / Institutional High Volume",
            Self::HighPerformingCore => "High Performing Core Products",
        }
    }

    /// Compact name for chart keys, unique across segments.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::StableRetail => "Stable Retail",
            Self::WarehouseLean => "Warehouse Lean",
            Self::MixedChannel => "Mixed Channel",
            Self::BulkInstitutional => "Bulk / Institutional",
            Self::HighPerformingCore => "High Performing Core",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn explanation(self) -> &'static [&'static str] {
        match self {
            Self::StableRetail => &[
                "These items sell slowly and in small quantities.",
                "Orders are infrequent and low value.",
                "Mainly kept to complete the product range.",
            ],
            Self::WarehouseLean => &[
                "These items sell in slightly bigger batches, but still not often.",
                "Orders come less frequently.",
                "When they come, they are more warehouse-driven.",
                "Often used by specific customers.",
            ],
            Self::MixedChannel => &[
                "These items sell regularly, but in small amounts.",
                "Sales are balanced between retail and warehouse.",
                "Demand is predictable but limited.",
            ],
            Self::BulkInstitutional => &[
                "These are bulk products sold in very large quantities.",
                "Sales are mainly warehouse-based.",
                "A knowing few items generate extremely high volume.",
                "Commonly purchased by institutional or bulk buyers.",
            ],
            Self::HighPerformingCore => &[
                "These items sell frequently and in high volume.",
                "They generate a large share of total revenue.",
                "Critical products that should never go out of stock.",
            ],
        }
    }
}

/// Short display name for a raw cluster label; unknown labels pass through.
pub fn short_label_for(label: &str) -> &str {
    Segment::from_label(label)
        .map(Segment::short_label)
        .unwrap_or(label)
}

/// Explanation lines for a raw cluster label; empty for unknown labels.
pub fn explanation_for(label: &str) -> &'static [&'static str] {
    Segment::from_label(label)
        .map(Segment::explanation)
        .unwrap_or(&[])
}
