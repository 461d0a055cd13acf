/// The state of one cell on a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CellStatus {
    /// The cell may be walked through.
    #[default]
    Free,
    /// The cell may never appear on a path.
    Blocked,
}

impl CellStatus {
    pub(crate) fn is_free(&self) -> bool {
        *self == Self::Free
    }

    /// Interpret one character of the board text format.
    ///
    /// `L` and `G` are the light-gray and green cells of saved board configurations, `P` marks a cell of a previously saved path.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | 'L' | 'G' | 'P' => Some(Self::Free),
            '#' | 'R' | 'X' => Some(Self::Blocked),
            _ => None,
        }
    }

    pub(crate) fn display(&self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
        }
    }
}

/// Cells, frozen for output or printing alongside a path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum FrozenCell {
    #[default]
    Free,
    Blocked,
    PathStart,
    PathInterior,
    PathEnd,
}

impl FrozenCell {
    pub(crate) fn display(&self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
            Self::PathStart => 'S',
            Self::PathInterior => '*',
            Self::PathEnd => 'E',
        }
    }
}

impl From<CellStatus> for FrozenCell {
    fn from(value: CellStatus) -> Self {
        match value {
            CellStatus::Free => Self::Free,
            CellStatus::Blocked => Self::Blocked,
        }
    }
}
