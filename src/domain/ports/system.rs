/// System control interface
pub trait SystemController: Sync + Send {
    /// Reset the chip
    fn restart(&self) -> !;
}
