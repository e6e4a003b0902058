//! Data sent to the backend and the status the page shows for it.
//!
//! Tier names travel over the wire exactly as they appear on the pricing
//! cards (`"Starter"`, `"Standard VIP"`, `"Premium VVIP"`).

use std::fmt;

use serde::Serialize;

/// One of the three product tiers on the pricing section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Entry level guide and scripts
    Starter,
    /// The highlighted "POPULAR" tier
    StandardVip,
    /// Masterclass, community and a strategy audit
    PremiumVvip,
}

impl Tier {
    /// All tiers in pricing-card order.
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::StandardVip, Tier::PremiumVvip];

    /// Canonical name, as sent in an order.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::StandardVip => "Standard VIP",
            Tier::PremiumVvip => "Premium VVIP",
        }
    }

    /// Price in GHS.
    pub fn price(&self) -> u32 {
        match self {
            Tier::Starter => 50,
            Tier::StandardVip => 150,
            Tier::PremiumVvip => 500,
        }
    }

    /// Look a tier up by its canonical name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.name() == name)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An email captured by the free-checklist form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    /// Address the checklist goes to
    pub email: String,
}

impl LeadSubmission {
    /// Returns `None` for an empty field. Anything else is sent verbatim.
    ///
    /// No format check happens here; the input field's `type="email"` is the
    /// only client-side validation.
    pub fn new(email: &str) -> Option<Self> {
        (!email.is_empty()).then(|| Self {
            email: email.to_string(),
        })
    }
}

/// A mock purchase, sent once per button click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Tier name as clicked
    pub tier: String,
    /// Price of the tier, `0` when the name is not a known tier
    pub amount: u32,
}

impl OrderRequest {
    /// Price the order from the tier name. Unknown names are not rejected.
    pub fn for_tier(tier: &str) -> Self {
        Self {
            tier: tier.to_string(),
            amount: Tier::from_name(tier).map_or(0, |tier| tier.price()),
        }
    }
}

/// Where a single submission action currently is.
///
/// `Idle -> Pending -> {Succeeded, Failed} -> Idle`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    /// Nothing in flight, the control is usable
    #[default]
    Idle,
    /// Request in flight, the control is disabled
    Pending,
    /// Terminal: the backend accepted the request
    Succeeded,
    /// Terminal: transport failure or non-2xx response
    Failed,
}

impl SubmissionStatus {
    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}
