use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

use crate::storage_types::{InstanceId, InstanceKind, RequestIndex};

pub const MSG_CAMPAIGN_CREATED: &str = "successfully created";
pub const MSG_FUNDS_POOLED: &str = "funds pooled";
pub const MSG_EMPTY_CAMPAIGN: &str = "empty campaign";

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionEvent {
    pub campaign: InstanceId,
    pub investor: Address,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestCreatedEvent {
    pub campaign: InstanceId,
    pub index: RequestIndex,
    pub value: i128,
    pub description: String,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestApprovedEvent {
    pub campaign: InstanceId,
    pub index: RequestIndex,
    pub approver: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestFinalizedEvent {
    pub campaign: InstanceId,
    pub index: RequestIndex,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RequestCancelledEvent {
    pub campaign: InstanceId,
    pub index: RequestIndex,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRejectedEvent {
    pub message: String,
    pub rejected: InstanceId,
    pub pool: InstanceId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool: InstanceId,
    pub campaign: InstanceId,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ShareTakenEvent {
    pub pool: InstanceId,
    pub investor: Address,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PoolClosedEvent {
    pub campaign: InstanceId,
    pub pool: InstanceId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptMintedEvent {
    pub ledger: InstanceId,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CloneCreatedEvent {
    pub kind: InstanceKind,
    pub template: Address,
    pub instance: InstanceId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CloneInitializedEvent {
    pub kind: InstanceKind,
    pub instance: InstanceId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub status: String,
    pub campaign: InstanceId,
    pub ledger: InstanceId,
    pub campaigns_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FactoryRejectedEvent {
    pub rejected: InstanceId,
    pub pool: InstanceId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

// Campaign

pub fn emit_contribution(env: &Env, event: ContributionEvent) {
    env.events().publish(
        (symbol_short!("campaign"), Symbol::new(env, "contribution")),
        event,
    );
}

pub fn emit_request_created(env: &Env, event: RequestCreatedEvent) {
    env.events().publish(
        (symbol_short!("request"), symbol_short!("created")),
        event,
    );
}

pub fn emit_request_approved(env: &Env, event: RequestApprovedEvent) {
    env.events().publish(
        (symbol_short!("request"), symbol_short!("approved")),
        event,
    );
}

pub fn emit_request_finalized(env: &Env, event: RequestFinalizedEvent) {
    env.events().publish(
        (symbol_short!("request"), symbol_short!("finalized")),
        event,
    );
}

pub fn emit_request_cancelled(env: &Env, event: RequestCancelledEvent) {
    env.events().publish(
        (symbol_short!("request"), symbol_short!("cancelled")),
        event,
    );
}

pub fn emit_campaign_rejected(env: &Env, event: CampaignRejectedEvent) {
    env.events().publish(
        (symbol_short!("campaign"), symbol_short!("rejected")),
        event,
    );
}

// Pool

pub fn emit_pool_created(env: &Env, event: PoolCreatedEvent) {
    env.events().publish(
        (symbol_short!("pool"), symbol_short!("created")),
        event,
    );
}

pub fn emit_share_taken(env: &Env, event: ShareTakenEvent) {
    env.events().publish(
        (symbol_short!("pool"), Symbol::new(env, "share_taken")),
        event,
    );
}

pub fn emit_pool_closed(env: &Env, event: PoolClosedEvent) {
    env.events().publish(
        (symbol_short!("pool"), symbol_short!("closed")),
        event,
    );
}

// Receipt ledger

pub fn emit_receipt_minted(env: &Env, event: ReceiptMintedEvent) {
    env.events().publish(
        (symbol_short!("receipt"), symbol_short!("mint")),
        event,
    );
}

// Factory

pub fn emit_paused(env: &Env) {
    env.events()
        .publish((symbol_short!("factory"), symbol_short!("paused")), ());
}

pub fn emit_unpaused(env: &Env) {
    env.events()
        .publish((symbol_short!("factory"), symbol_short!("unpaused")), ());
}

pub fn emit_tax_set(env: &Env, amount: i128) {
    env.events()
        .publish((symbol_short!("factory"), symbol_short!("tax_set")), amount);
}

pub fn emit_authorized(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "authorized")),
        account,
    );
}

pub fn emit_blacklisted(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "blacklisted")),
        account,
    );
}

pub fn emit_clone_created(env: &Env, event: CloneCreatedEvent) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "clone_created")),
        event,
    );
}

pub fn emit_clone_initialized(env: &Env, event: CloneInitializedEvent) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "clone_initialized")),
        event,
    );
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "campaign_created")),
        event,
    );
}

pub fn emit_factory_rejected(env: &Env, event: FactoryRejectedEvent) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "campaign_rejected")),
        event,
    );
}

pub fn emit_fees_withdrawn(env: &Env, event: FeesWithdrawnEvent) {
    env.events().publish(
        (symbol_short!("factory"), Symbol::new(env, "fees_withdrawn")),
        event,
    );
}

pub fn emit_upgraded(env: &Env, wasm_hash: BytesN<32>) {
    env.events()
        .publish((symbol_short!("factory"), symbol_short!("upgraded")), wasm_hash);
}
