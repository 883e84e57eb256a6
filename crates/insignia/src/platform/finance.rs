use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{ProjectType, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentMilestone {
    Booking,
    TwentyPercentConstruction,
    FortyPercentConstruction,
    SlabCompletion,
    StructureComplete,
    Handover,
    OneYearPostHandover,
}

impl InstallmentMilestone {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Booking,
            Self::TwentyPercentConstruction,
            Self::FortyPercentConstruction,
            Self::SlabCompletion,
            Self::StructureComplete,
            Self::Handover,
            Self::OneYearPostHandover,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Booking => "Booking",
            Self::TwentyPercentConstruction => "20% Construction",
            Self::FortyPercentConstruction => "40% Construction",
            Self::SlabCompletion => "Slab Completion",
            Self::StructureComplete => "Structure Complete",
            Self::Handover => "Handover",
            Self::OneYearPostHandover => "1 Year Post-Handover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlanInstallment {
    pub percentage: u32,
    pub milestone: InstallmentMilestone,
    pub due_date: Option<NaiveDate>,
    pub invoice_id: Option<String>,
}

/// Ordered installments whose percentages add up to exactly 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlanStructure {
    pub plan_name: String,
    pub installments: Vec<PaymentPlanInstallment>,
}

impl PaymentPlanStructure {
    pub fn total_percentage(&self) -> u32 {
        self.installments
            .iter()
            .map(|installment| installment.percentage)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSubCategory {
    pub name: String,
    pub estimated_percentage: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCostCategory {
    pub category_name: String,
    pub sub_categories: Vec<CostSubCategory>,
    /// Sum of the retained sub-category percentages.
    pub total_estimated_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBlueprintTemplate {
    pub project_type: ProjectType,
    pub default_cost_categories: Vec<DefaultCostCategory>,
    pub revenue_streams: Vec<String>,
    pub payment_plan_structures: Vec<PaymentPlanStructure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Draft,
            Self::Sent,
            Self::Paid,
            Self::Overdue,
            Self::Cancelled,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Issued but not settled.
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Draft | Self::Sent | Self::Overdue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    Cheque,
    Crypto,
}

impl PaymentMethod {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::BankTransfer,
            Self::CreditCard,
            Self::Cheque,
            Self::Crypto,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::CreditCard => "Credit Card",
            Self::Cheque => "Cheque",
            Self::Crypto => "Crypto",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub unit_id: UnitId,
    pub buyer_name: String,
    pub installment_milestone: InstallmentMilestone,
    pub amount_due: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub transaction_id: Option<String>,
    pub payment_attempts: Option<u32>,
    pub late_fee_applied: Option<u64>,
    pub notes: Option<String>,
    pub linked_payment_plan_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowDataPoint {
    /// Month label such as `Jan 2023`.
    pub period: String,
    pub projected_inflow: u64,
    pub actual_inflow: u64,
    pub projected_outflow: u64,
    pub actual_outflow: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    HardCosts,
    SoftCosts,
    MarketingAndSales,
    Overheads,
    FinancingCosts,
}

impl ExpenseCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HardCosts,
            Self::SoftCosts,
            Self::MarketingAndSales,
            Self::Overheads,
            Self::FinancingCosts,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HardCosts => "Hard Costs",
            Self::SoftCosts => "Soft Costs",
            Self::MarketingAndSales => "Marketing & Sales",
            Self::Overheads => "Overheads",
            Self::FinancingCosts => "Financing Costs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpensePaymentStatus {
    Pending,
    Paid,
    Disputed,
    Scheduled,
}

impl ExpensePaymentStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::Paid, Self::Disputed, Self::Scheduled]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Disputed => "Disputed",
            Self::Scheduled => "Scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub category: ExpenseCategory,
    pub budget_item: String,
    pub budgeted_amount: u64,
    pub actual_amount: f64,
    pub variance: f64,
    pub invoice_reference: Option<String>,
    pub supplier_name: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub payment_status: ExpensePaymentStatus,
}
