use derive_getters::Getters;
use derive_new::new;

/// Sender, recipients and subject shared by every report email.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct EmailEnvelope {
    from_email: String,
    to: Vec<String>,
    subject: String,
}
