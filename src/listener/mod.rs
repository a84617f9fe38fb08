use crate::ErrorBox;
#[cfg(test)]
use mockall::automock;

pub mod console;

/// Receives one luminosity value per analyzed frame. Registered with the
/// analyzer at construction and never swapped afterwards.
#[cfg_attr(test, automock)]
pub trait LumaListener {
    fn update(&self, luma: f64) -> Result<(), ErrorBox>;
}
