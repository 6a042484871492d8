use super::constants::CONTACT_RESET_MS;

/// Local contact form. Submitting only flips a flag for `CONTACT_RESET_MS`;
/// nothing is sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitted_at: Option<f64>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field by its form `name` attribute. Unknown names are ignored
    /// and reported with `false`.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "message" => &mut self.message,
            _ => return false,
        };
        slot.clear();
        slot.push_str(value);
        true
    }

    /// Mark the form as submitted at `now_ms`. A repeat submit restarts the window.
    pub fn submit(&mut self, now_ms: f64) {
        self.submitted_at = Some(now_ms);
    }

    pub fn is_submitted(&self, now_ms: f64) -> bool {
        match self.submitted_at {
            Some(t) => now_ms - t < CONTACT_RESET_MS,
            None => false,
        }
    }

    /// Clear an expired submission. Returns `true` when the flag just dropped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.submitted_at {
            Some(t) if now_ms - t >= CONTACT_RESET_MS => {
                self.submitted_at = None;
                true
            }
            _ => false,
        }
    }
}
