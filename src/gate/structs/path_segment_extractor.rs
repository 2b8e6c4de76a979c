/// Takes the `segment`-th `/`-delimited piece of the path, counting the empty
/// piece before the leading `/` as segment 0. The path must have exactly
/// `segment + 1` pieces; `/announce/alice` with `segment = 2` yields `alice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegmentExtractor {
    pub segment: usize,
}
