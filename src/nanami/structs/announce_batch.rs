use serde::{Deserialize, Serialize};
use crate::nanami::structs::single_user_announce::SingleUserAnnounce;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnnounceBatch(pub Vec<SingleUserAnnounce>);
