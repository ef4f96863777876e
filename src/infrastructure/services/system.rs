use crate::domain::ports::SystemController;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemService;

impl SystemController for SystemService {
    fn restart(&self) -> ! {
        esp_hal::system::software_reset()
    }
}
