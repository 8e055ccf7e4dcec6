//! Purchase search links for recommended items
//!
//! Link construction is a caller-side concern; the recommender itself only
//! returns names.

use crate::bail_invalid;
use crate::error::Result;

/// Placeholder replaced by the encoded item name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// URL pattern with a `{name}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(NAME_PLACEHOLDER) {
            bail_invalid!(
                "link_template",
                format!("'{}' has no {} placeholder", template, NAME_PLACEHOLDER)
            );
        }
        Ok(LinkTemplate { template })
    }

    /// Substitute the form-encoded `name` into the template
    pub fn render(&self, name: &str) -> String {
        self.template.replace(NAME_PLACEHOLDER, &form_encode(name))
    }
}

/// `application/x-www-form-urlencoded` encoding of a query value
fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
