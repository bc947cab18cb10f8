//! Implementation of the `subscribe` and `subscriptions` commands.

use super::{load_docket, open_store};
use crate::cli::SubscribeArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::subscription::{Subscribed, Subscription, SubscriptionStore, subscribe};
use serde_json::json;

/// Execute the `docketpost subscribe` command.
///
/// Subscribing to an already tracked case is not an error; the existing
/// subscription is reported instead.
pub fn cmd_subscribe(ctx: &AppContext, args: SubscribeArgs) -> Result<()> {
    let docket = load_docket(ctx, &args.docket)?;
    let mut store = open_store(ctx);

    let Subscribed {
        subscription,
        created,
    } = subscribe(&mut store, &docket)?;

    append_event(
        ctx,
        &Event::new(EventAction::Subscribe)
            .with_case(subscription.pacer_case_id.as_str())
            .with_details(json!({
                "subscription_id": subscription.id,
                "docket_id": docket.id,
                "created": created,
            })),
    )?;

    if created {
        println!("Subscribed to {}", summary_line(&subscription));
    } else {
        println!("Already subscribed to {}", summary_line(&subscription));
    }
    if let Some(note) = co_defendant_note(&subscription) {
        println!("{}", note);
    }

    Ok(())
}

/// Execute the `docketpost subscriptions` command.
pub fn cmd_subscriptions(ctx: &AppContext) -> Result<()> {
    let subscriptions = open_store(ctx).list()?;

    if subscriptions.is_empty() {
        println!("No subscriptions.");
        println!();
        println!("Use `docketpost subscribe <docket>` to track a case.");
        return Ok(());
    }

    for subscription in &subscriptions {
        println!("{}", summary_line(subscription));
    }

    Ok(())
}

fn co_defendant_note(subscription: &Subscription) -> Option<String> {
    subscription.shared_case_number().map(|shared| {
        format!(
            "Note: this docket covers one defendant of case {}. \
             Co-defendants have their own dockets; subscribe to each one to follow them.",
            shared
        )
    })
}

fn summary_line(subscription: &Subscription) -> String {
    let mut line = format!(
        "#{} {} [{}/{}]",
        subscription.id,
        subscription.docket_name,
        subscription.pacer_court_id,
        subscription.pacer_case_id
    );
    if !subscription.docket_number.is_empty() {
        line.push_str(&format!(" {}", subscription.docket_number));
    }
    line
}
