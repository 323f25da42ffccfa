// Focus management for the dashboard sidebar and panels

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    ClusterFilter,
    ItemTypeFilter,
    MetricSelect,
    ItemCodeInput,
    Interpretation,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::ClusterFilter => Self::ItemTypeFilter,
            Self::ItemTypeFilter => Self::MetricSelect,
            Self::MetricSelect => Self::ItemCodeInput,
            Self::ItemCodeInput => Self::Interpretation,
            Self::Interpretation => Self::ClusterFilter,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::ClusterFilter => Self::Interpretation,
            Self::ItemTypeFilter => Self::ClusterFilter,
            Self::MetricSelect => Self::ItemTypeFilter,
            Self::ItemCodeInput => Self::MetricSelect,
            Self::Interpretation => Self::ItemCodeInput,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ClusterFilter => "Select Cluster(s)",
            Self::ItemTypeFilter => "Select Item Type(s)",
            Self::MetricSelect => "Select Sales Type",
            Self::ItemCodeInput => "Enter Item Code",
            Self::Interpretation => "Lookup & Interpretation",
        }
    }
}
