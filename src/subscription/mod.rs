//! Case subscriptions.
//!
//! One subscription exists per tracked case, keyed by the PACER case id.
//! Subscribing to a docket that is already tracked returns the existing
//! record instead of creating a second one.

mod store;

pub use store::{FileStore, MemoryStore};

use crate::docket::{Docket, DocketNumber};
use crate::error::{DocketPostError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,

    /// The moment the record was created.
    pub date_created: DateTime<Utc>,

    /// The last moment the record was modified.
    pub date_modified: DateTime<Utc>,

    pub docket_name: String,

    #[serde(default)]
    pub docket_number: String,

    #[serde(default)]
    pub court_name: String,

    /// A few words describing the case for social media.
    #[serde(default)]
    pub case_summary: String,

    /// CourtListener docket id.
    #[serde(default)]
    pub cl_docket_id: Option<u64>,

    /// CourtListener court id; sometimes differs from PACER's.
    pub cl_court_id: String,

    /// Court id used in PACER's subdomain.
    pub pacer_court_id: String,

    pub pacer_case_id: String,
}

/// Fields of a subscription before the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub docket_name: String,
    pub docket_number: String,
    pub court_name: String,
    pub case_summary: String,
    pub cl_docket_id: Option<u64>,
    pub cl_court_id: String,
    pub pacer_court_id: String,
    pub pacer_case_id: String,
}

impl NewSubscription {
    /// Build a subscription for a CourtListener docket.
    ///
    /// Fails when the docket has no PACER case id, since that id is the key.
    pub fn from_docket(docket: &Docket) -> Result<Self> {
        let pacer_case_id = docket
            .pacer_case_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                DocketPostError::UserError(format!(
                    "docket {} ('{}') has no PACER case id and cannot be tracked",
                    docket.id, docket.case_name
                ))
            })?;

        Ok(Self {
            docket_name: docket.case_name.clone(),
            docket_number: canonical_docket_number(&docket.docket_number),
            court_name: String::new(),
            case_summary: String::new(),
            cl_docket_id: Some(docket.id),
            cl_court_id: docket.court_id.clone(),
            pacer_court_id: docket.pacer_court_id().to_string(),
            pacer_case_id,
        })
    }

    pub(crate) fn into_subscription(self, id: u64, now: DateTime<Utc>) -> Subscription {
        Subscription {
            id,
            date_created: now,
            date_modified: now,
            docket_name: self.docket_name,
            docket_number: self.docket_number,
            court_name: self.court_name,
            case_summary: self.case_summary,
            cl_docket_id: self.cl_docket_id,
            cl_court_id: self.cl_court_id,
            pacer_court_id: self.pacer_court_id,
            pacer_case_id: self.pacer_case_id,
        }
    }
}

impl Subscription {
    /// For one defendant's docket in a multi-defendant case, the number the
    /// co-defendants' dockets share.
    pub fn shared_case_number(&self) -> Option<DocketNumber> {
        DocketNumber::parse(&self.docket_number)
            .ok()
            .filter(|number| number.defendant.is_some())
            .map(|number| number.without_defendant())
    }
}

/// Docket numbers are stored in canonical form (`1:09-cr-00466-4`, without
/// judge initials). Numbers that do not parse are kept as given.
fn canonical_docket_number(raw: &str) -> String {
    match DocketNumber::parse(raw) {
        Ok(number) => number.to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

/// Persists subscriptions keyed by PACER case id.
pub trait SubscriptionStore {
    fn get_by_case_id(&self, pacer_case_id: &str) -> Result<Option<Subscription>>;

    /// Store a new subscription. Fails if the case id is already tracked.
    fn insert(&mut self, subscription: NewSubscription) -> Result<Subscription>;

    fn list(&self) -> Result<Vec<Subscription>>;
}

/// Result of [`subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscribed {
    pub subscription: Subscription,
    /// False when the case was already tracked.
    pub created: bool,
}

/// Track the case behind `docket`, reusing an existing subscription.
pub fn subscribe<S: SubscriptionStore + ?Sized>(
    store: &mut S,
    docket: &Docket,
) -> Result<Subscribed> {
    let new = NewSubscription::from_docket(docket)?;

    if let Some(existing) = store.get_by_case_id(&new.pacer_case_id)? {
        return Ok(Subscribed {
            subscription: existing,
            created: false,
        });
    }

    Ok(Subscribed {
        subscription: store.insert(new)?,
        created: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_docket;

    #[test]
    fn new_subscription_from_docket() {
        let mut docket = sample_docket();
        docket.court_id = "arb".to_string();

        let new = NewSubscription::from_docket(&docket).unwrap();

        assert_eq!(new.docket_name, "Doe v. Roe");
        assert_eq!(new.docket_number, "1:23-cv-00001");
        assert_eq!(new.cl_docket_id, Some(65748821));
        assert_eq!(new.cl_court_id, "arb");
        assert_eq!(new.pacer_court_id, "azb");
        assert_eq!(new.pacer_case_id, "590000");
    }

    #[test]
    fn docket_number_is_canonicalized() {
        let mut docket = sample_docket();
        docket.docket_number = "1:09-CR-00466-4-NGG".to_string();
        let new = NewSubscription::from_docket(&docket).unwrap();
        assert_eq!(new.docket_number, "1:09-cr-00466-4");

        docket.docket_number = " BK 12-345 ".to_string();
        let new = NewSubscription::from_docket(&docket).unwrap();
        assert_eq!(new.docket_number, "BK 12-345");
    }

    #[test]
    fn shared_case_number_only_for_defendant_dockets() {
        let mut store = MemoryStore::default();
        let mut docket = sample_docket();
        docket.docket_number = "1:09-cr-00466-4".to_string();

        let defendant = subscribe(&mut store, &docket).unwrap().subscription;
        assert_eq!(
            defendant.shared_case_number().unwrap().to_string(),
            "1:09-cr-00466"
        );

        let mut civil = sample_docket();
        civil.pacer_case_id = Some("590001".to_string());
        let civil = subscribe(&mut store, &civil).unwrap().subscription;
        assert_eq!(civil.shared_case_number(), None);
    }

    #[test]
    fn docket_without_pacer_case_id_is_rejected() {
        let mut docket = sample_docket();
        docket.pacer_case_id = None;
        assert!(NewSubscription::from_docket(&docket).is_err());

        docket.pacer_case_id = Some("  ".to_string());
        assert!(NewSubscription::from_docket(&docket).is_err());
    }

    #[test]
    fn subscribe_is_idempotent() {
        let mut store = MemoryStore::default();
        let docket = sample_docket();

        let first = subscribe(&mut store, &docket).unwrap();
        let second = subscribe(&mut store, &docket).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.subscription, second.subscription);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn subscribe_distinct_cases() {
        let mut store = MemoryStore::default();
        let first = sample_docket();
        let mut second = sample_docket();
        second.id += 1;
        second.pacer_case_id = Some("590001".to_string());

        subscribe(&mut store, &first).unwrap();
        let outcome = subscribe(&mut store, &second).unwrap();

        assert!(outcome.created);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn subscribe_through_trait_object() {
        let mut store: Box<dyn SubscriptionStore> = Box::new(MemoryStore::default());
        let outcome = subscribe(store.as_mut(), &sample_docket()).unwrap();
        assert!(outcome.created);
    }
}
