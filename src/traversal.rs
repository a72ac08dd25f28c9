/// How many levels below the current one a deep operation may reach.
///
/// `Levels(0)` restricts an operation to the level it was called on,
/// `Levels(n)` allows `n` additional levels, and `Unbounded` follows every
/// subtree to its bottom.
///
/// # Examples
///
/// ```
/// use deep_tree::Depth;
///
/// assert_eq!(Depth::from(-1), Depth::Unbounded);
/// assert_eq!(Depth::from(2), Depth::Levels(2));
/// assert_eq!(Depth::Levels(2).descend(), Some(Depth::Levels(1)));
/// assert_eq!(Depth::CURRENT.descend(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Depth {
    /// No limit on the number of nested levels.
    #[default]
    Unbounded,
    /// At most this many levels below the current one.
    Levels(usize),
}

impl Depth {
    /// Only the level the operation is invoked on.
    pub const CURRENT: Depth = Depth::Levels(0);

    /// Returns the bound that applies one level further down, or `None` if the
    /// bound is exhausted.
    #[must_use]
    pub const fn descend(self) -> Option<Depth> {
        match self {
            Depth::Unbounded => Some(Depth::Unbounded),
            Depth::Levels(0) => None,
            Depth::Levels(n) => Some(Depth::Levels(n - 1)),
        }
    }
}

/// Negative values mean unbounded, anything else is a level count.
impl From<isize> for Depth {
    fn from(depth: isize) -> Self {
        usize::try_from(depth).map_or(Depth::Unbounded, Depth::Levels)
    }
}

/// A boundary of a level's iteration order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum End {
    /// The first position.
    Front,
    /// The last position.
    Back,
}

impl End {
    /// Maps a "last" flag onto a boundary: `true` is [`End::Back`].
    #[must_use]
    pub const fn from_last(last: bool) -> Self {
        if last { End::Back } else { End::Front }
    }
}
