//! Outbound and mail link hygiene.

use tracing::debug;

use super::dom::{Document, Selector};
use super::smooth_scroll::ClickOutcome;

/// Prefix identifying outbound web links.
pub const WEB_PREFIX: &str = "http";
/// Prefix identifying mail links.
pub const MAIL_PREFIX: &str = "mailto:";

/// Open every outbound link in a new browsing context without opener or referrer.
///
/// Safe to run repeatedly. Returns the number of links touched.
pub fn harden_external_links<D: Document>(doc: &D) -> usize {
    let links = doc.query_all(&Selector::HrefPrefix(WEB_PREFIX));
    for link in &links {
        doc.set_attribute(link, "target", "_blank");
        doc.set_attribute(link, "rel", "noopener noreferrer");
    }
    debug!(count = links.len(), "external links hardened");
    links.len()
}

/// Mail links on the page.
pub fn mail_links<D: Document>(doc: &D) -> Vec<D::Element> {
    doc.query_all(&Selector::HrefPrefix(MAIL_PREFIX))
}

/// Mail links are left to the user's mail client.
#[must_use]
pub const fn handle_mail_link() -> ClickOutcome {
    ClickOutcome::Default
}
