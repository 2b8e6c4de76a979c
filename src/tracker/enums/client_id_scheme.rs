use serde::{Deserialize, Serialize};

/// Convention used to derive a [`ClientId`](crate::tracker::structs::client_id::ClientId)
/// from a peer id.
///
/// - `azureus` - `-XXnnnn-` style ids use bytes 1..7, everything else bytes 0..6
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub enum ClientIdScheme {
    #[default]
    azureus,
}
