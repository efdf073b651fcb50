//! Boundary behavior for topology generators.

/// How a generated lattice treats its outer boundary.
///
/// This is the "boundary adjustment" flag of every generator: `Absorb`
/// leaves edge cells with fewer neighbours, `Wrap` connects opposite
/// edges so the lattice becomes periodic (a ring in 1D, a torus in 2D).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range neighbours are omitted (bounded lattice).
    #[default]
    Absorb,
    /// Out-of-range neighbours wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// `true` for [`EdgeBehavior::Wrap`].
    pub fn is_wrap(self) -> bool {
        self == Self::Wrap
    }
}

impl From<bool> for EdgeBehavior {
    /// `true` means boundary adjustment is requested.
    fn from(wrap: bool) -> Self {
        if wrap {
            Self::Wrap
        } else {
            Self::Absorb
        }
    }
}
