use crate::ErrorBox;

#[derive(Default)]
pub struct Listener {}

impl super::LumaListener for Listener {
    fn update(&self, luma: f64) -> Result<(), ErrorBox> {
        log::debug!("Average luminosity: {}", luma);
        Ok(())
    }
}
