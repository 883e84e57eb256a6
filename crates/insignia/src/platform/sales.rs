use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{CustomField, ProjectType, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Website,
    Referral,
    SocialMedia,
    ColdCall,
    Event,
    Broker,
}

impl LeadSource {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Website,
            Self::Referral,
            Self::SocialMedia,
            Self::ColdCall,
            Self::Event,
            Self::Broker,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::SocialMedia => "Social Media",
            Self::ColdCall => "Cold Call",
            Self::Event => "Event",
            Self::Broker => "Broker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    ProposalSent,
    Negotiation,
    ClosedWon,
    ClosedLost,
    OnHold,
}

impl LeadStatus {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::New,
            Self::Contacted,
            Self::Qualified,
            Self::ProposalSent,
            Self::Negotiation,
            Self::ClosedWon,
            Self::ClosedLost,
            Self::OnHold,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::ProposalSent => "Proposal Sent",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed - Won",
            Self::ClosedLost => "Closed - Lost",
            Self::OnHold => "On Hold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    Email,
    Phone,
    WhatsApp,
}

impl ContactMethod {
    pub const fn ordered() -> [Self; 3] {
        [Self::Email, Self::Phone, Self::WhatsApp]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Call,
    Email,
    Meeting,
    SiteVisit,
    Sms,
    Chat,
}

impl InteractionType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Call,
            Self::Email,
            Self::Meeting,
            Self::SiteVisit,
            Self::Sms,
            Self::Chat,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Meeting => "Meeting",
            Self::SiteVisit => "Site Visit",
            Self::Sms => "SMS",
            Self::Chat => "Chat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInteraction {
    pub date: NaiveDate,
    pub interaction_type: InteractionType,
    pub agent: String,
    pub summary: String,
    pub next_action: Option<String>,
    pub next_action_date: Option<NaiveDate>,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub assigned_agent: String,
    pub last_contact_date: NaiveDate,
    pub project_interest: String,
    pub notes: String,
    pub lead_score: Option<u32>,
    pub preferred_contact_method: Option<ContactMethod>,
    pub detailed_needs: Option<String>,
    pub budget_range: Option<BudgetRange>,
    pub interaction_history: Vec<LeadInteraction>,
    pub custom_fields: Vec<CustomField>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Reserved,
    BookingConfirmed,
    Sold,
    Cancelled,
}

impl ReservationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reserved => "Reserved",
            Self::BookingConfirmed => "Booking Confirmed",
            Self::Sold => "Sold",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReservation {
    pub unit_id: UnitId,
    pub unit_number: String,
    pub project_name: String,
    pub status: ReservationStatus,
    pub client_name: String,
    pub reservation_date: NaiveDate,
    pub booking_date: Option<NaiveDate>,
    pub linked_payment_plan: String,
    pub sale_price: Option<u64>,
    pub agent_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewingOutcome {
    Interested,
    NotInterested,
    FollowUpRequired,
    OfferMade,
}

impl ViewingOutcome {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Interested,
            Self::NotInterested,
            Self::FollowUpRequired,
            Self::OfferMade,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interested => "Interested",
            Self::NotInterested => "Not Interested",
            Self::FollowUpRequired => "Follow-up Required",
            Self::OfferMade => "Offer Made",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitViewing {
    pub id: String,
    pub date: NaiveDate,
    pub lead_id: String,
    pub lead_name: String,
    pub agent: String,
    pub unit_id: UnitId,
    pub unit_number: String,
    pub project_name: String,
    /// 1 (poor) to 5 (excellent).
    pub feedback_score: Option<u8>,
    pub positive_notes: Option<String>,
    pub negative_notes: Option<String>,
    pub outcome: Option<ViewingOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrokerStatus {
    Active,
    Inactive,
    Probation,
}

impl BrokerStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::Probation]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Probation => "Probation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broker {
    pub id: String,
    pub name: String,
    pub agency: String,
    pub clients_registered: u32,
    pub deals_closed: u32,
    pub commission_earned: u64,
    pub status: BrokerStatus,
    pub leads_generated: Option<u32>,
    pub lead_to_viewing_rate: Option<f64>,
    pub viewing_to_offer_rate: Option<f64>,
    pub average_deal_closure_time_days: Option<u32>,
    pub specialization: Vec<ProjectType>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationType {
    PaymentReminder,
    ConstructionUpdate,
    HandoverNotification,
    GeneralAnnouncement,
    NewOffer,
    ViewingConfirmation,
}

impl CommunicationType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PaymentReminder,
            Self::ConstructionUpdate,
            Self::HandoverNotification,
            Self::GeneralAnnouncement,
            Self::NewOffer,
            Self::ViewingConfirmation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentReminder => "Payment Reminder",
            Self::ConstructionUpdate => "Construction Update",
            Self::HandoverNotification => "Handover Notification",
            Self::GeneralAnnouncement => "General Announcement",
            Self::NewOffer => "New Offer",
            Self::ViewingConfirmation => "Viewing Confirmation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationChannel {
    Email,
    Sms,
    AppNotification,
    WhatsApp,
}

impl CommunicationChannel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Email, Self::Sms, Self::AppNotification, Self::WhatsApp]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::AppNotification => "App Notification",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Opened,
    Clicked,
    Failed,
    Bounced,
}

impl DeliveryStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Sent,
            Self::Opened,
            Self::Clicked,
            Self::Failed,
            Self::Bounced,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Opened => "Opened",
            Self::Clicked => "Clicked",
            Self::Failed => "Failed",
            Self::Bounced => "Bounced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatedCommunicationLog {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub communication_type: CommunicationType,
    pub channel: CommunicationChannel,
    pub sent_date: NaiveDate,
    pub status: DeliveryStatus,
    pub content_snippet: String,
}
