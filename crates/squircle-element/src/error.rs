pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host environment cannot observe element resizes (e.g. a
    /// non-interactive render context). Raised at subscription time; an
    /// element whose subscription failed keeps rendering with its last-known
    /// dimensions.
    #[error("resize observation is not supported by this host environment")]
    ResizeUnsupported,
}
