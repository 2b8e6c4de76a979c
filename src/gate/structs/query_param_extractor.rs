#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParamExtractor {
    pub param: String,
}
