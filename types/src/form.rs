use std::fmt;

use serde::{Deserialize, Serialize};

/// Which storefront form a submission came from.
///
/// Both forms share one relay endpoint; the subject line is the only
/// discriminator the relay sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Demo-track submission from the label section.
    Demo,
    /// Mailing-list signup from the contact section.
    Subscribe,
}

impl FormKind {
    /// Subject line forwarded to the relay as the `_subject` field.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            FormKind::Demo => "Demo submission",
            FormKind::Subscribe => "Subscribe",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject())
    }
}

/// Fields of the demo-submission form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSubmission {
    pub artist: String,
    pub email: String,
    /// Link to the track (YouTube, Audiomack, ...).
    pub link: String,
}

/// Fields of the mailing-list subscribe form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
}

/// A completed form ready to be forwarded to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Demo(DemoSubmission),
    Subscribe(Subscription),
}

impl FormPayload {
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        match self {
            FormPayload::Demo(_) => FormKind::Demo,
            FormPayload::Subscribe(_) => FormKind::Subscribe,
        }
    }

    /// Renders the relay wire body: the flattened form fields plus the
    /// `_subject` discriminator.
    #[must_use]
    pub fn relay_body(&self) -> serde_json::Value {
        let mut body = match self {
            FormPayload::Demo(form) => serde_json::to_value(form),
            FormPayload::Subscribe(form) => serde_json::to_value(form),
        }
        .unwrap_or_else(|_| serde_json::json!({}));

        if let serde_json::Value::Object(fields) = &mut body {
            fields.insert(
                "_subject".to_string(),
                serde_json::Value::String(self.kind().subject().to_string()),
            );
        }
        body
    }
}
