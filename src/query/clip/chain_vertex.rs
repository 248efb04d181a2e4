/// A vertex of the boundary chain of one side of a clipped 2D cell.
///
/// Chains interleave original cell vertices with the interface vertices created where
/// the boundary crosses the cutting line, in boundary order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChainVertex {
    /// The original cell vertex with this index.
    Original(u32),
    /// The interface vertex with this index, in the order they were created.
    Interface(u32),
}

impl ChainVertex {
    /// Encodes this vertex as a signed integer: original vertices keep their index, and the
    /// `k`-th interface vertex becomes `-(k + 1)`.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "dim2")] {
    /// use plic2d::query::ChainVertex;
    ///
    /// assert_eq!(ChainVertex::Original(3).to_sentinel(), 3);
    /// assert_eq!(ChainVertex::Interface(0).to_sentinel(), -1);
    /// assert_eq!(ChainVertex::from_sentinel(-2), Some(ChainVertex::Interface(1)));
    /// # }
    /// ```
    #[inline]
    pub fn to_sentinel(self) -> i64 {
        match self {
            ChainVertex::Original(i) => i as i64,
            ChainVertex::Interface(k) => -(k as i64) - 1,
        }
    }

    /// Decodes a vertex encoded by [`ChainVertex::to_sentinel`].
    ///
    /// Returns `None` if the index does not fit in a `u32`, i.e. if `sentinel` is outside of
    /// `[-2³², 2³² - 1]`.
    #[inline]
    pub fn from_sentinel(sentinel: i64) -> Option<Self> {
        if sentinel < 0 {
            // `sentinel + 1` is non-positive, so its negation does not overflow.
            u32::try_from(-(sentinel + 1))
                .ok()
                .map(ChainVertex::Interface)
        } else {
            u32::try_from(sentinel).ok().map(ChainVertex::Original)
        }
    }
}
