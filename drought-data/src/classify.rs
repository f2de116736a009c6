//! Z-score classification.
//!
//! A Z-score falls into one of seven ordered severity bands. Bands use
//! inclusive upper bounds at -2, -1, -0.5, 0.5, 1 and 2; anything above 2 is
//! `MuchWetter`. Color and status label are looked up per band.
//!
//! The badge class is a coarser three-way split whose boundary differs from the
//! bands: exact ties at +/-0.5 are `Normal`.

/// Severity band for a precipitation anomaly, driest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    MuchDrier,
    Drier,
    SlightlyDrier,
    NearNormal,
    SlightlyWetter,
    Wetter,
    MuchWetter,
}

/// Inclusive upper bound of each band except the open-ended top one.
const BREAKPOINTS: [(f64, Severity); 6] = [
    (-2.0, Severity::MuchDrier),
    (-1.0, Severity::Drier),
    (-0.5, Severity::SlightlyDrier),
    (0.5, Severity::NearNormal),
    (1.0, Severity::SlightlyWetter),
    (2.0, Severity::Wetter),
];

impl Severity {
    /// All bands in ascending order.
    pub const ALL: [Severity; 7] = [
        Severity::MuchDrier,
        Severity::Drier,
        Severity::SlightlyDrier,
        Severity::NearNormal,
        Severity::SlightlyWetter,
        Severity::Wetter,
        Severity::MuchWetter,
    ];

    /// Classify a Z-score into its band.
    pub fn from_z_score(z_score: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(upper, _)| z_score <= *upper)
            .map(|(_, band)| *band)
            .unwrap_or(Severity::MuchWetter)
    }

    /// Fill color used for markers and the legend.
    pub fn color(self) -> &'static str {
        match self {
            Severity::MuchDrier => "#ef8a62",
            Severity::Drier => "#f6b894",
            Severity::SlightlyDrier => "#fad7c4",
            Severity::NearNormal => "#f5f5f5",
            Severity::SlightlyWetter => "#c4dce8",
            Severity::Wetter => "#8bc3dc",
            Severity::MuchWetter => "#67a9cf",
        }
    }

    /// Human-readable status phrase.
    pub fn status(self) -> &'static str {
        match self {
            Severity::MuchDrier => "Much Drier than Normal",
            Severity::Drier => "Drier than Normal",
            Severity::SlightlyDrier => "Slightly Drier",
            Severity::NearNormal => "Near Normal",
            Severity::SlightlyWetter => "Slightly Wetter",
            Severity::Wetter => "Wetter than Normal",
            Severity::MuchWetter => "Much Wetter than Normal",
        }
    }
}

/// Coarse badge shown next to the raw Z-score in popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Dry,
    Normal,
    Wet,
}

impl Badge {
    pub fn from_z_score(z_score: f64) -> Self {
        if z_score < -0.5 {
            Badge::Dry
        } else if z_score > 0.5 {
            Badge::Wet
        } else {
            Badge::Normal
        }
    }

    /// CSS class name.
    pub fn class(self) -> &'static str {
        match self {
            Badge::Dry => "dry",
            Badge::Normal => "normal",
            Badge::Wet => "wet",
        }
    }
}

/// Marker fill color for a Z-score.
pub fn color(z_score: f64) -> &'static str {
    Severity::from_z_score(z_score).color()
}

/// Status phrase for a Z-score.
pub fn status(z_score: f64) -> &'static str {
    Severity::from_z_score(z_score).status()
}

/// Badge CSS class for a Z-score.
pub fn badge_class(z_score: f64) -> &'static str {
    Badge::from_z_score(z_score).class()
}
