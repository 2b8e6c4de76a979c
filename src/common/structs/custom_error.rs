#[derive(Debug, Clone)]
pub struct CustomError {
    pub(crate) message: String,
}
