//! Implementation of the `docketpost notify` command.
//!
//! Composes the post for one docket entry and publishes it through the
//! configured publisher command. With `--dry-run` the post is printed and
//! nothing is published or logged.

use super::{load_config, load_docket};
use crate::cli::NotifyArgs;
use crate::context::AppContext;
use crate::docket::{Docket, DocketEntry, Links, read_json_file};
use crate::error::{DocketPostError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::notify::{Notification, compose, notify};
use crate::publish::Publisher;
use crate::template::TemplateRegistry;
use serde_json::json;

/// Execute the `docketpost notify` command.
pub fn cmd_notify(ctx: &AppContext, args: NotifyArgs) -> Result<()> {
    let config = load_config(ctx)?;
    let templates = config.template_registry()?;
    let links = config.links();

    let docket = load_docket(ctx, &args.docket)?;
    let entry: DocketEntry = read_json_file(&args.entry)?;

    if args.dry_run {
        let post = compose(&docket, &entry, &links, &templates)?;
        println!("{}", post.message);
        return Ok(());
    }

    let mut publisher = config.command_publisher().ok_or_else(|| {
        DocketPostError::UserError(
            "no publisher configured.\n\n\
             Set `publisher_command` in config.yaml, or use --dry-run to print the post."
                .to_string(),
        )
    })?;

    let Notification { post, post_id } =
        publish_logged(ctx, &mut publisher, &docket, &entry, &links, &templates)?;

    println!(
        "Published doc #{} as {} ({} template)",
        entry.display_number(),
        post_id,
        post.template
    );
    Ok(())
}

/// Publish and record the outcome in the event log.
///
/// A failed publish is logged before the error is returned.
fn publish_logged<P: Publisher + ?Sized>(
    ctx: &AppContext,
    publisher: &mut P,
    docket: &Docket,
    entry: &DocketEntry,
    links: &Links,
    templates: &TemplateRegistry,
) -> Result<Notification> {
    let event_for = |action| {
        let event = Event::new(action).with_details(json!({
            "docket_id": docket.id,
            "document_number": entry.display_number(),
        }));
        match &docket.pacer_case_id {
            Some(case) => event.with_case(case.as_str()),
            None => event,
        }
    };

    match notify(publisher, docket, entry, links, templates) {
        Ok(notification) => {
            let mut event = event_for(EventAction::Publish);
            event.details["post_id"] = json!(notification.post_id.0);
            event.details["template"] = json!(notification.post.template);
            append_event(ctx, &event)?;
            Ok(notification)
        }
        Err(err @ DocketPostError::PublishError(_)) => {
            let mut event = event_for(EventAction::PublishFailed);
            event.details["error"] = json!(err.to_string());
            append_event(ctx, &event)?;
            Err(err)
        }
        Err(err) => Err(err),
    }
}
