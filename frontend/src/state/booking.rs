use serde::Serialize;

/// Fields captured by the booking form. Nothing is submitted anywhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub participants: Option<u8>,
    pub experience: Option<String>,
    pub date: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Participants,
    Experience,
    Date,
    Message,
}

impl BookingForm {
    /// Applies raw input text to `field`. Empty selections clear the field.
    pub fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::Name => self.name = value,
            BookingField::Email => self.email = value,
            BookingField::Phone => self.phone = value,
            BookingField::Participants => self.participants = value.parse().ok(),
            BookingField::Experience => {
                self.experience = if value.is_empty() { None } else { Some(value) }
            }
            BookingField::Date => self.date = value,
            BookingField::Message => self.message = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_update_independently() {
        let mut form = BookingForm::default();
        form.set(BookingField::Name, "Ada".to_string());
        form.set(BookingField::Participants, "3".to_string());
        form.set(BookingField::Experience, "sunrise".to_string());
        assert_eq!(form.name, "Ada");
        assert_eq!(form.participants, Some(3));
        assert_eq!(form.experience.as_deref(), Some("sunrise"));

        form.set(BookingField::Participants, "".to_string());
        form.set(BookingField::Experience, "".to_string());
        assert_eq!(form.participants, None);
        assert_eq!(form.experience, None);
    }

    #[test]
    fn form_serializes_for_debug_logging() {
        let mut form = BookingForm::default();
        form.set(BookingField::Email, "ada@example.com".to_string());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert!(json["participants"].is_null());
    }
}
