use entity::ship::Column;

/// Column a ship listing is sorted by, always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    CrewSize,
    Rating,
    ProductionDate,
}

impl ShipOrder {
    pub fn column(self) -> Column {
        match self {
            Self::Id => Column::Id,
            Self::Speed => Column::Speed,
            Self::CrewSize => Column::CrewSize,
            Self::Rating => Column::Rating,
            Self::ProductionDate => Column::ProductionDate,
        }
    }
}

/// A zero-based page of a ship listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipPage {
    pub number: u64,
    pub size: u64,
}

impl ShipPage {
    /// Number of rows preceding this page.
    pub fn offset(&self) -> u64 {
        self.number.saturating_mul(self.size)
    }
}
