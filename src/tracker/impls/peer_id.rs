use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::tracker::enums::client_id_scheme::ClientIdScheme;
use crate::tracker::structs::client_id::ClientId;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Derives the client tag this peer id announces itself with.
    pub fn client_id(&self, scheme: ClientIdScheme) -> ClientId {
        let mut client_id = ClientId::default();
        match scheme {
            ClientIdScheme::azureus => {
                if self.0[0] == b'-' {
                    client_id.0.copy_from_slice(&self.0[1..7]);
                } else {
                    client_id.0.copy_from_slice(&self.0[0..6]);
                }
            }
        }
        client_id
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = binascii::ConvertError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| binascii::ConvertError::InvalidInputLength)?;
        Ok(PeerId(bytes))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
