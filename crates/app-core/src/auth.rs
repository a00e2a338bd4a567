//! Login, registration and business verification flows
//!
//! Every backend interaction here is mocked: sending an OTP always succeeds
//! and any six-character code verifies. Input checks that fail simply leave
//! the form where it was; no error is surfaced to the user.

use serde::{Deserialize, Serialize};

/// Required OTP length
pub const OTP_LENGTH: usize = 6;

/// Minimum phone number length before an OTP can be requested
pub const MIN_PHONE_LENGTH: usize = 10;

/// How the user logs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    /// Email or phone plus password
    #[default]
    Password,
    /// Phone plus one-time code
    Otp,
}

impl LoginMethod {
    /// Placeholder of the identifier field
    pub fn identifier_placeholder(&self) -> &'static str {
        match self {
            LoginMethod::Password => "Email or Phone",
            LoginMethod::Otp => "Phone Number",
        }
    }
}

/// Login screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    method: LoginMethod,
    /// Email or phone
    pub identifier: String,
    /// Password (password method)
    pub password: String,
    /// One-time code (OTP method)
    pub otp: String,
    otp_sent: bool,
}

impl LoginForm {
    /// Create an empty form in password mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Current method
    pub fn method(&self) -> LoginMethod {
        self.method
    }

    /// Whether an OTP has been sent
    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    /// Switch method; always forgets a previously sent OTP
    pub fn select_method(&mut self, method: LoginMethod) {
        self.method = method;
        self.otp_sent = false;
    }

    /// Request (or re-request) an OTP
    pub fn send_otp(&mut self) {
        tracing::debug!("mock OTP sent for login");
        self.otp_sent = true;
    }

    /// Whether the login button is shown
    pub fn can_login(&self) -> bool {
        self.method == LoginMethod::Password || self.otp_sent
    }

    /// Attempt to log in; `false` leaves the screen unchanged
    pub fn login(&self) -> bool {
        self.can_login()
    }
}

/// Registration fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetails {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
}

/// Registration screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    details: RegistrationDetails,
    /// Code typed by the user
    pub otp: String,
    otp_sent: bool,
    otp_verified: bool,
}

impl RegisterForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Entered details
    pub fn details(&self) -> &RegistrationDetails {
        &self.details
    }

    /// Whether an OTP has been sent
    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    /// Whether the phone number is verified
    pub fn otp_verified(&self) -> bool {
        self.otp_verified
    }

    /// Update the name
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.details.full_name = value.into();
    }

    /// Update the email
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.details.email = value.into();
    }

    /// Update the phone; locked once verified
    pub fn set_phone(&mut self, value: impl Into<String>) -> bool {
        if self.otp_verified {
            return false;
        }
        self.details.phone = value.into();
        true
    }

    /// Update the password
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.details.password = value.into();
    }

    /// Update the confirmation
    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.details.confirm_password = value.into();
    }

    /// Update the OTP, keeping at most [`OTP_LENGTH`] characters like the input field
    pub fn set_otp(&mut self, value: &str) {
        self.otp = value.chars().take(OTP_LENGTH).collect();
    }

    /// Whether the "Send OTP" button is shown
    pub fn shows_send_otp(&self) -> bool {
        !self.otp_sent && !self.details.phone.is_empty()
    }

    /// Request an OTP; ignored while the phone is shorter than [`MIN_PHONE_LENGTH`]
    pub fn send_otp(&mut self) -> bool {
        if self.details.phone.chars().count() >= MIN_PHONE_LENGTH {
            tracing::debug!("mock OTP sent for registration");
            self.otp_sent = true;
        }
        self.otp_sent
    }

    /// Verify the OTP; ignored unless exactly [`OTP_LENGTH`] characters were entered
    pub fn verify_otp(&mut self) -> bool {
        if self.otp_sent && self.otp.chars().count() == OTP_LENGTH {
            self.otp_verified = true;
        }
        self.otp_verified
    }

    /// Whether "Continue" is available
    pub fn can_continue(&self) -> bool {
        self.otp_verified
    }
}

/// Business verification screen state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstVerificationForm {
    /// Business has a GST registration
    pub has_gst: bool,
    /// GST number (with GST)
    pub gst_number: String,
    /// PAN number (without GST)
    pub pan_number: String,
    /// Aadhaar number (without GST)
    pub aadhar_number: String,
}

impl Default for GstVerificationForm {
    fn default() -> Self {
        Self {
            has_gst: true,
            gst_number: String::new(),
            pan_number: String::new(),
            aadhar_number: String::new(),
        }
    }
}

/// A document the verification screen asks to upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationDocument {
    /// GST certificate
    Gst,
    /// PAN card
    Pan,
    /// Aadhaar card
    Aadhar,
}

impl VerificationDocument {
    /// Placeholder of the number field
    pub fn placeholder(&self) -> &'static str {
        match self {
            VerificationDocument::Gst => "GST Number",
            VerificationDocument::Pan => "PAN Number",
            VerificationDocument::Aadhar => "AADHAR Number",
        }
    }
}

impl GstVerificationForm {
    /// Documents requested for the current choice
    pub fn required_documents(&self) -> Vec<VerificationDocument> {
        if self.has_gst {
            vec![VerificationDocument::Gst]
        } else {
            vec![VerificationDocument::Pan, VerificationDocument::Aadhar]
        }
    }

    /// Number entered for a document
    pub fn number(&self, document: VerificationDocument) -> &str {
        match document {
            VerificationDocument::Gst => &self.gst_number,
            VerificationDocument::Pan => &self.pan_number,
            VerificationDocument::Aadhar => &self.aadhar_number,
        }
    }

    /// Verification is mocked and always lets the user continue
    pub fn verify(&self) -> bool {
        tracing::debug!(documents = ?self.required_documents(), "mock business verification");
        true
    }
}
