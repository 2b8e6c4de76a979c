use serde::{Deserialize, Serialize};

/// Where the user token of an announce is read from.
///
/// - `path_segment` - a `/`-delimited segment of the request path
/// - `query_param` - a named query string parameter
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub enum UserTokenSource {
    #[default]
    path_segment,
    query_param,
}
