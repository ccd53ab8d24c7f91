//! Errors reported by the tree and by the array generator.

/// Errors from queries that have to locate a value before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The tree does not contain the requested value. An empty tree never contains anything.
    #[error("tree does not contain the given value")]
    ValueNotFound,
}

/// Errors from [`ArrayGen`][crate::array_gen::ArrayGen].
#[cfg(feature = "array-gen")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// There are fewer than `count` distinct values in `0..upper_bound`.
    #[error("cannot draw {count} distinct values below {upper_bound}")]
    RangeTooSmall {
        /// How many values were requested.
        count: usize,
        /// The exclusive upper bound values are drawn from.
        upper_bound: u32,
    },
}
