//! Filing notifications.
//!
//! Turns a docket entry into a post and hands it to a publisher. Entries
//! with a stored document use the `post` template (with PDF and docket
//! links); entries without one are minute entries and use `minute`.

use crate::docket::{Docket, DocketEntry, Links};
use crate::error::Result;
use crate::publish::{PostId, Publisher};
use crate::template::{FormatValues, MINUTE, POST, TemplateRegistry, values};

/// A post ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPost {
    /// Registry name of the template used.
    pub template: &'static str,
    pub message: String,
}

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub post: ComposedPost,
    pub post_id: PostId,
}

/// Placeholder values for an entry, and the template they are meant for.
pub fn entry_values(
    docket: &Docket,
    entry: &DocketEntry,
    links: &Links,
) -> (&'static str, FormatValues) {
    match links.pdf_url(entry) {
        Some(pdf_link) => (
            POST,
            values([
                ("docket", docket.display_name()),
                ("doc_num", entry.display_number()),
                ("description", entry.text().to_string()),
                ("pdf_link", pdf_link),
                ("docket_link", links.docket_url(docket)),
            ]),
        ),
        None => (
            MINUTE,
            values([
                ("docket", docket.display_name()),
                ("description", entry.text().to_string()),
            ]),
        ),
    }
}

/// Build the post for an entry.
pub fn compose(
    docket: &Docket,
    entry: &DocketEntry,
    links: &Links,
    templates: &TemplateRegistry,
) -> Result<ComposedPost> {
    let (name, vals) = entry_values(docket, entry, links);
    let message = templates.get(name)?.format(&vals)?;

    Ok(ComposedPost {
        template: name,
        message,
    })
}

/// Compose and publish the post for an entry.
pub fn notify<P: Publisher + ?Sized>(
    publisher: &mut P,
    docket: &Docket,
    entry: &DocketEntry,
    links: &Links,
    templates: &TemplateRegistry,
) -> Result<Notification> {
    let post = compose(docket, entry, links, templates)?;
    let post_id = publisher.publish(&post.message, None)?;

    Ok(Notification { post, post_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocketPostError;
    use crate::publish::DryRunPublisher;
    use crate::test_support::{sample_docket, sample_entry};

    #[test]
    fn entry_with_document_uses_post_template() {
        let post = compose(
            &sample_docket(),
            &sample_entry(),
            &Links::default(),
            &TemplateRegistry::builtin(),
        )
        .unwrap();

        assert_eq!(post.template, "post");
        assert_eq!(
            post.message,
            "New filing in Doe v. Roe (1:23-cv-00001)\n\
             Doc #12: MOTION to Dismiss for Lack of Jurisdiction\n\
             \n\
             PDF: https://storage.courtlistener.com/recap/gov.uscourts.nysd.590000/\
             gov.uscourts.nysd.590000.12.0.pdf\n\
             Docket: https://www.courtlistener.com/docket/65748821/"
        );
    }

    #[test]
    fn entry_without_document_uses_minute_template() {
        let mut entry = sample_entry();
        entry.filepath_local = None;
        entry.description = "Minute Entry for proceedings held before Judge Roe".to_string();

        let post = compose(
            &sample_docket(),
            &entry,
            &Links::default(),
            &TemplateRegistry::builtin(),
        )
        .unwrap();

        assert_eq!(post.template, "minute");
        assert_eq!(
            post.message,
            "New minute entry in Doe v. Roe (1:23-cv-00001): \
             Minute Entry for proceedings held before Judge Roe"
        );
    }

    #[test]
    fn long_descriptions_fit_the_budget_despite_long_links() {
        let mut entry = sample_entry();
        entry.description = "EXHIBIT ".repeat(200);

        let post = compose(
            &sample_docket(),
            &entry,
            &Links::default(),
            &TemplateRegistry::builtin(),
        )
        .unwrap();

        let links_len = Links::default().pdf_url(&entry).unwrap().chars().count()
            + Links::default().docket_url(&sample_docket()).chars().count();
        let budgeted = post.message.chars().count() - links_len + 2 * 23;
        assert_eq!(budgeted, 500);
        assert!(post.message.contains("…\n\nPDF: "));
    }

    #[test]
    fn notify_publishes_composed_message() {
        let mut publisher = DryRunPublisher::new();

        let notification = notify(
            &mut publisher,
            &sample_docket(),
            &sample_entry(),
            &Links::default(),
            &TemplateRegistry::builtin(),
        )
        .unwrap();

        assert_eq!(notification.post_id.to_string(), "dry-run-1");
        assert_eq!(publisher.posts(), [notification.post.message.as_str()]);
    }

    #[test]
    fn notify_surfaces_publisher_failure() {
        struct Failing;
        impl Publisher for Failing {
            fn publish(&mut self, _: &str, _: Option<&[u8]>) -> Result<PostId> {
                Err(DocketPostError::PublishError("rate limited".to_string()))
            }
        }

        let err = notify(
            &mut Failing,
            &sample_docket(),
            &sample_entry(),
            &Links::default(),
            &TemplateRegistry::builtin(),
        )
        .unwrap_err();

        assert!(matches!(err, DocketPostError::PublishError(_)));
    }

    #[test]
    fn missing_template_is_template_error() {
        let err = compose(
            &sample_docket(),
            &sample_entry(),
            &Links::default(),
            &TemplateRegistry::default(),
        )
        .unwrap_err();

        assert!(matches!(err, DocketPostError::Template(_)));
    }
}
