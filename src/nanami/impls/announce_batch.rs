use crate::nanami::structs::announce_batch::AnnounceBatch;
use crate::nanami::structs::single_user_announce::SingleUserAnnounce;

impl AnnounceBatch {
    pub fn with_capacity(capacity: usize) -> AnnounceBatch {
        AnnounceBatch(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, announce: SingleUserAnnounce) {
        self.0.push(announce);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Closes the current batch, leaving an empty one with the same capacity behind.
    pub fn take(&mut self) -> AnnounceBatch {
        let capacity = self.0.capacity();
        std::mem::replace(self, AnnounceBatch::with_capacity(capacity))
    }
}
