use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueError {
    #[error("announce queue is full")]
    QueueFull,

    #[error("announce queue is closed")]
    Closed,
}
