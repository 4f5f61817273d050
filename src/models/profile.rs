use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

impl EmailEntry {
    pub fn new(address: String) -> Self {
        Self {
            address,
            label: None,
            is_primary: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

impl PhoneEntry {
    pub fn new(number: String) -> Self {
        Self {
            number,
            label: None,
            is_primary: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl PostalAddress {
    pub fn city_state(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(c), Some(s)) => Some(format!("{}, {}", c, s)),
            (Some(c), None) => Some(c.clone()),
            (None, Some(s)) => Some(s.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
    Text,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Text => "text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Richer contact details a capture record may carry beyond its scalar
/// email field. Every field is optional; records arrive from four
/// independently-evolved intake forms with different required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactProfile {
    #[serde(default)]
    pub emails: Vec<EmailEntry>,
    #[serde(default)]
    pub phones: Vec<PhoneEntry>,
    pub address: Option<PostalAddress>,
    pub tags: Option<String>,
    pub preferred_contact: Option<PreferredContact>,
    pub timezone: Option<String>,
    pub notes: Option<String>,
}

// Invariant for both entry lists: a non-empty list has exactly one
// primary entry. Every mutation below re-establishes it.
impl ContactProfile {
    /// The address used to identify this record: the primary entry,
    /// else the first entry.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.is_primary)
            .or_else(|| self.emails.first())
            .map(|e| e.address.as_str())
    }

    pub fn primary_phone(&self) -> Option<&str> {
        self.phones
            .iter()
            .find(|p| p.is_primary)
            .or_else(|| self.phones.first())
            .map(|p| p.number.as_str())
    }

    /// Add an email entry. The first entry always becomes primary; a new
    /// entry flagged primary demotes the current one. Returns false if the
    /// address is already present.
    pub fn add_email(&mut self, mut entry: EmailEntry) -> bool {
        if self.emails.iter().any(|e| e.address == entry.address) {
            return false;
        }
        if entry.is_primary {
            for e in &mut self.emails {
                e.is_primary = false;
            }
        } else if !self.emails.iter().any(|e| e.is_primary) {
            entry.is_primary = true;
        }
        self.emails.push(entry);
        true
    }

    /// Edit an entry in place. The primary flag is untouched; use
    /// `set_primary_email` to move it. Returns false if no entry matches
    /// or the new address collides with another entry.
    pub fn update_email(
        &mut self,
        address: &str,
        new_address: Option<String>,
        new_label: Option<String>,
    ) -> bool {
        if let Some(ref new) = new_address {
            if new != address && self.emails.iter().any(|e| &e.address == new) {
                return false;
            }
        }
        let Some(entry) = self.emails.iter_mut().find(|e| e.address == address) else {
            return false;
        };
        if let Some(new) = new_address {
            entry.address = new;
        }
        if let Some(label) = new_label {
            entry.label = Some(label);
        }
        true
    }

    /// Remove an entry. Removing the primary promotes the first remaining
    /// entry so a populated list never ends up with zero primaries.
    pub fn remove_email(&mut self, address: &str) -> bool {
        let Some(pos) = self.emails.iter().position(|e| e.address == address) else {
            return false;
        };
        let removed = self.emails.remove(pos);
        if removed.is_primary {
            if let Some(first) = self.emails.first_mut() {
                first.is_primary = true;
            }
        }
        true
    }

    pub fn set_primary_email(&mut self, address: &str) -> bool {
        if !self.emails.iter().any(|e| e.address == address) {
            return false;
        }
        for e in &mut self.emails {
            e.is_primary = e.address == address;
        }
        true
    }

    pub fn add_phone(&mut self, mut entry: PhoneEntry) -> bool {
        if self.phones.iter().any(|p| p.number == entry.number) {
            return false;
        }
        if entry.is_primary {
            for p in &mut self.phones {
                p.is_primary = false;
            }
        } else if !self.phones.iter().any(|p| p.is_primary) {
            entry.is_primary = true;
        }
        self.phones.push(entry);
        true
    }

    pub fn update_phone(
        &mut self,
        number: &str,
        new_number: Option<String>,
        new_label: Option<String>,
    ) -> bool {
        if let Some(ref new) = new_number {
            if new != number && self.phones.iter().any(|p| &p.number == new) {
                return false;
            }
        }
        let Some(entry) = self.phones.iter_mut().find(|p| p.number == number) else {
            return false;
        };
        if let Some(new) = new_number {
            entry.number = new;
        }
        if let Some(label) = new_label {
            entry.label = Some(label);
        }
        true
    }

    pub fn remove_phone(&mut self, number: &str) -> bool {
        let Some(pos) = self.phones.iter().position(|p| p.number == number) else {
            return false;
        };
        let removed = self.phones.remove(pos);
        if removed.is_primary {
            if let Some(first) = self.phones.first_mut() {
                first.is_primary = true;
            }
        }
        true
    }

    pub fn set_primary_phone(&mut self, number: &str) -> bool {
        if !self.phones.iter().any(|p| p.number == number) {
            return false;
        }
        for p in &mut self.phones {
            p.is_primary = p.number == number;
        }
        true
    }
}
