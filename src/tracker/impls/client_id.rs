use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::client_id::ClientId;

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());
        write!(f, "{}", String::from_utf8_lossy(&self.0[..end]))
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        let mut client_id = ClientId::default();
        let bytes = value.as_bytes();
        let len = bytes.len().min(client_id.0.len());
        client_id.0[..len].copy_from_slice(&bytes[..len]);
        client_id
    }
}

impl From<[u8; 6]> for ClientId {
    fn from(data: [u8; 6]) -> Self {
        ClientId(data)
    }
}
