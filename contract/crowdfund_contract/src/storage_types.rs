use soroban_sdk::{contracttype, Address, BytesN, String};

// Storage keys for factory configuration (instance storage)
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    Templates,
    Paused,
    Tax,
    AccumulatedFees,
    NextInstanceId,
}

// Storage keys for per-instance records (persistent storage)
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaigns,
    Registry(InstanceId),
    Authorized(Address),
    Blacklisted(Address),
    Rejected(InstanceId),
    Campaign(InstanceId),
    Investors(InstanceId),
    Contribution(InstanceId, Address),
    Request(InstanceId, RequestIndex),
    Approval(InstanceId, RequestIndex, Address),
    Pool(InstanceId),
    Share(InstanceId, Address),
    Claimed(InstanceId, Address),
    Ledger(InstanceId),
    Receipt(InstanceId, Address),
}

/// Identity of a provisioned campaign, receipt ledger or pool.
///
/// All three kinds share one counter, so ids never collide across kinds.
pub type InstanceId = u64;
pub type RequestIndex = u32;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Templates {
    pub campaign: Address,
    pub ledger: Address,
    pub pool: Address,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum InstanceKind {
    Campaign,
    Ledger,
    Pool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct FactoryStatus {
    pub owner: Address,
    pub token: Address,
    pub is_paused: bool,
    pub tax: i128,
    pub accumulated_fees: i128,
    pub campaigns_count: u32,
    pub campaign_template: Address,
    pub ledger_template: Address,
    pub pool_template: Address,
}

// Registry entry kept by the factory for every campaign it created
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignStatus {
    pub campaign: InstanceId,
    pub ledger: InstanceId,
    pub creator: Address,
    pub created_at: u64,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: InstanceId,
    pub template: Address,
    pub owner: Address,
    pub factory: Address,
    pub ledger: InstanceId,
    pub pool_template: Address,
    pub name: BytesN<32>,
    pub description: String,
    pub banner: String,
    pub minimum_contribution: i128,
    pub contribution_deadline: u64,
    pub manager: Address,
    pub investors_count: u32,
    pub total_contribution: i128,
    pub available_balance: i128,
    pub is_closed: bool,
    pub is_rejected_by_owner: bool,
    pub requests_count: u32,
    pub refund_pool: Option<InstanceId>,
}

// Parameters handed to a freshly allocated campaign record
#[derive(Clone)]
pub struct CampaignInit {
    pub template: Address,
    pub owner: Address,
    pub factory: Address,
    pub ledger: InstanceId,
    pub pool_template: Address,
    pub name: BytesN<32>,
    pub description: String,
    pub banner: String,
    pub minimum_contribution: i128,
    pub contribution_period: u64,
    pub manager: Address,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Request {
    pub description: String,
    pub value: i128,
    pub recipient: Address,
    pub created_at: u64,
    pub approvers_count: u32,
    pub is_complete: bool,
    pub is_cancel: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Pool {
    pub id: InstanceId,
    pub template: Address,
    pub campaign: InstanceId,
    pub owner: Address,
    pub investors_count: u32,
    pub claimed_count: u32,
    pub balance: i128,
    pub is_closed: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ReceiptLedger {
    pub id: InstanceId,
    pub template: Address,
    pub campaign: InstanceId,
    pub total_supply: i128,
}

// Constants
pub const APPROVAL_WINDOW: u64 = 2_592_000; // 30 days
pub const RECEIPT_RATE: i128 = 100; // receipt units per monetary unit
pub const MAX_DESCRIPTION_LEN: u32 = 256;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
