#![no_std]

mod campaign;
mod error;
mod events;
mod factory;
mod pool;
mod receipt;
mod storage_types;
mod utils;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use error::{Error, ErrorKind};
pub use storage_types::{
    Campaign, CampaignStatus, FactoryStatus, InstanceId, InstanceKind, Pool, ReceiptLedger,
    Request, RequestIndex, Templates, APPROVAL_WINDOW, MAX_DESCRIPTION_LEN, RECEIPT_RATE,
};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the factory with its owner, payment token and the three
    /// templates campaigns, receipt ledgers and refund pools are provisioned from.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        campaign_template: Address,
        ledger_template: Address,
        pool_template: Address,
    ) -> Result<(), Error> {
        owner.require_auth();
        factory::initialize(
            &env,
            owner,
            token,
            Templates {
                campaign: campaign_template,
                ledger: ledger_template,
                pool: pool_template,
            },
        )
    }

    // Factory administration

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        factory::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        factory::unpause(&env, &caller)
    }

    pub fn set_tax(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        factory::set_tax(&env, &caller, amount)
    }

    pub fn authorize(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        caller.require_auth();
        factory::authorize(&env, &caller, account)
    }

    pub fn blacklist(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        caller.require_auth();
        factory::blacklist(&env, &caller, account)
    }

    /// Create a campaign with its receipt ledger. `paid_fee` must equal the current tax.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: BytesN<32>,
        description: String,
        banner: String,
        minimum_contribution: i128,
        contribution_period: u64,
        paid_fee: i128,
    ) -> Result<InstanceId, Error> {
        caller.require_auth();
        factory::create_campaign(
            &env,
            &caller,
            name,
            description,
            banner,
            minimum_contribution,
            contribution_period,
            paid_fee,
        )
    }

    /// Reject a campaign through the factory. Fails if it was already rejected this way.
    pub fn reject_campaign(env: Env, caller: Address, campaign: InstanceId) -> Result<InstanceId, Error> {
        caller.require_auth();
        factory::reject_campaign(&env, &caller, campaign)
    }

    pub fn withdraw_tax_fees(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        factory::withdraw_tax_fees(&env, &caller)
    }

    pub fn upgrade(env: Env, caller: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        caller.require_auth();
        factory::upgrade(&env, &caller, wasm_hash)
    }

    // Campaign

    /// Contribute `amount` to a campaign; returns the investor's cumulative contribution.
    pub fn contribute(env: Env, campaign: InstanceId, investor: Address, amount: i128) -> Result<i128, Error> {
        investor.require_auth();
        campaign::contribute(&env, campaign, &investor, amount)
    }

    pub fn create_request(
        env: Env,
        campaign: InstanceId,
        caller: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> Result<RequestIndex, Error> {
        caller.require_auth();
        campaign::create_request(&env, campaign, &caller, description, value, recipient)
    }

    pub fn approve_request(env: Env, campaign: InstanceId, caller: Address, index: RequestIndex) -> Result<(), Error> {
        caller.require_auth();
        campaign::approve_request(&env, campaign, &caller, index)
    }

    pub fn finalize_request(env: Env, campaign: InstanceId, caller: Address, index: RequestIndex) -> Result<(), Error> {
        caller.require_auth();
        campaign::finalize_request(&env, campaign, &caller, index)
    }

    pub fn cancel_request(env: Env, campaign: InstanceId, caller: Address, index: RequestIndex) -> Result<(), Error> {
        caller.require_auth();
        campaign::cancel_request(&env, campaign, &caller, index)
    }

    /// Reject a campaign directly as its owner. Returns the refund pool id, or the
    /// campaign's own id when there was nothing to refund.
    pub fn reject_by_owner(env: Env, campaign: InstanceId, caller: Address) -> Result<InstanceId, Error> {
        caller.require_auth();
        campaign::reject(&env, campaign, &caller)
    }

    // Pool

    /// Withdraw the caller's refund; returns the amount paid.
    pub fn take_share_back(env: Env, pool: InstanceId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        pool::take_share_back(&env, pool, &caller)
    }

    // View functions

    pub fn factory_status(env: Env) -> Result<FactoryStatus, Error> {
        factory::status(&env)
    }

    pub fn campaign_status(env: Env, campaign: InstanceId) -> Result<CampaignStatus, Error> {
        factory::campaign_status(&env, campaign)
    }

    pub fn get_campaigns(env: Env) -> Vec<InstanceId> {
        factory::get_campaigns(&env)
    }

    pub fn is_authorized(env: Env, account: Address) -> bool {
        factory::is_authorized(&env, &account)
    }

    pub fn is_blacklisted(env: Env, account: Address) -> bool {
        factory::is_blacklisted(&env, &account)
    }

    pub fn is_rejected(env: Env, campaign: InstanceId) -> bool {
        factory::is_rejected(&env, campaign)
    }

    pub fn contract_balance(env: Env) -> Result<i128, Error> {
        factory::contract_balance(&env)
    }

    pub fn get_campaign(env: Env, campaign: InstanceId) -> Result<Campaign, Error> {
        campaign::get_campaign(&env, campaign)
    }

    pub fn get_request(env: Env, campaign: InstanceId, index: RequestIndex) -> Result<Request, Error> {
        campaign::get_request(&env, campaign, index)
    }

    pub fn requests_count(env: Env, campaign: InstanceId) -> Result<u32, Error> {
        Ok(campaign::get_campaign(&env, campaign)?.requests_count)
    }

    pub fn get_investors(env: Env, campaign: InstanceId) -> Vec<Address> {
        campaign::get_investors(&env, campaign)
    }

    pub fn contribution_of(env: Env, campaign: InstanceId, investor: Address) -> i128 {
        campaign::contribution_of(&env, campaign, &investor)
    }

    pub fn is_investor(env: Env, campaign: InstanceId, investor: Address) -> bool {
        campaign::is_investor(&env, campaign, &investor)
    }

    pub fn has_approved(env: Env, campaign: InstanceId, index: RequestIndex, investor: Address) -> bool {
        campaign::has_approved(&env, campaign, index, &investor)
    }

    pub fn get_pool(env: Env, pool: InstanceId) -> Result<Pool, Error> {
        pool::get_pool(&env, pool)
    }

    pub fn get_pool_balance(env: Env, pool: InstanceId) -> Result<i128, Error> {
        Ok(pool::get_pool(&env, pool)?.balance)
    }

    pub fn investor_contribution_amount(env: Env, pool: InstanceId, investor: Address) -> Result<i128, Error> {
        pool::get_pool(&env, pool)?;
        Ok(pool::share_of(&env, pool, &investor).unwrap_or(0))
    }

    pub fn has_claimed(env: Env, pool: InstanceId, investor: Address) -> bool {
        pool::has_claimed(&env, pool, &investor)
    }

    pub fn get_ledger(env: Env, ledger: InstanceId) -> Result<ReceiptLedger, Error> {
        receipt::get_ledger(&env, ledger)
    }

    pub fn receipt_balance(env: Env, ledger: InstanceId, holder: Address) -> i128 {
        receipt::balance(&env, ledger, &holder)
    }

    pub fn receipt_supply(env: Env, ledger: InstanceId) -> Result<i128, Error> {
        Ok(receipt::get_ledger(&env, ledger)?.total_supply)
    }
}
