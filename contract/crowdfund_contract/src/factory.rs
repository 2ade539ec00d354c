use soroban_sdk::{log, Address, BytesN, Env, String, Vec};

use crate::campaign;
use crate::error::Error;
use crate::events;
use crate::receipt;
use crate::storage_types::*;
use crate::utils::{self, extend_instance, extend_persistent, require_owner};

pub fn initialize(
    env: &Env,
    owner: Address,
    token: Address,
    templates: Templates,
) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Owner) {
        return Err(Error::AlreadyInitialized);
    }

    env.storage().instance().set(&DataKey::Owner, &owner);
    env.storage().instance().set(&DataKey::Token, &token);
    env.storage().instance().set(&DataKey::Templates, &templates);
    env.storage().instance().set(&DataKey::Paused, &false);
    env.storage().instance().set(&DataKey::Tax, &0i128);
    env.storage().instance().set(&DataKey::AccumulatedFees, &0i128);
    env.storage().instance().set(&DataKey::NextInstanceId, &1u64);
    env.storage()
        .persistent()
        .set(&PersistentKey::Campaigns, &Vec::<InstanceId>::new(env));

    extend_instance(env);
    extend_persistent(env, &PersistentKey::Campaigns);
    Ok(())
}

fn get_templates(env: &Env) -> Result<Templates, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Templates)
        .ok_or(Error::NotInitialized)
}

fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

fn get_tax(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Tax).unwrap_or(0)
}

fn get_accumulated_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AccumulatedFees)
        .unwrap_or(0)
}

pub fn get_campaigns(env: &Env) -> Vec<InstanceId> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaigns)
        .unwrap_or(Vec::new(env))
}

pub fn is_authorized(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Authorized(account.clone()))
}

pub fn is_blacklisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Blacklisted(account.clone()))
}

pub fn is_rejected(env: &Env, campaign: InstanceId) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Rejected(campaign))
}

pub fn status(env: &Env) -> Result<FactoryStatus, Error> {
    let templates = get_templates(env)?;
    let token: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)?;

    Ok(FactoryStatus {
        owner: utils::get_owner(env)?,
        token,
        is_paused: is_paused(env),
        tax: get_tax(env),
        accumulated_fees: get_accumulated_fees(env),
        campaigns_count: get_campaigns(env).len(),
        campaign_template: templates.campaign,
        ledger_template: templates.ledger,
        pool_template: templates.pool,
    })
}

pub fn campaign_status(env: &Env, campaign: InstanceId) -> Result<CampaignStatus, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Registry(campaign))
        .ok_or(Error::CampaignNotFound)
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if is_paused(env) {
        return Err(Error::AlreadyPaused);
    }
    env.storage().instance().set(&DataKey::Paused, &true);
    extend_instance(env);
    events::emit_paused(env);
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if !is_paused(env) {
        return Err(Error::AlreadyUnpaused);
    }
    env.storage().instance().set(&DataKey::Paused, &false);
    extend_instance(env);
    events::emit_unpaused(env);
    Ok(())
}

pub fn set_tax(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
    require_owner(env, caller)?;
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    env.storage().instance().set(&DataKey::Tax, &amount);
    extend_instance(env);
    events::emit_tax_set(env, amount);
    Ok(())
}

pub fn authorize(env: &Env, caller: &Address, account: Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    let key = PersistentKey::Authorized(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    events::emit_authorized(env, account);
    Ok(())
}

pub fn blacklist(env: &Env, caller: &Address, account: Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    let key = PersistentKey::Blacklisted(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    events::emit_blacklisted(env, account);
    Ok(())
}

/// Provision a campaign and its receipt ledger from the registered templates.
///
/// The creator becomes owner and manager of the campaign, the factory its
/// co-administrator. The creation fee is pulled from the creator last.
#[allow(clippy::too_many_arguments)]
pub fn create_campaign(
    env: &Env,
    caller: &Address,
    name: BytesN<32>,
    description: String,
    banner: String,
    minimum_contribution: i128,
    contribution_period: u64,
    paid_fee: i128,
) -> Result<InstanceId, Error> {
    if is_paused(env) {
        return Err(Error::FactoryPaused);
    }
    if !is_authorized(env, caller) {
        return Err(Error::NotAuthorized);
    }
    if is_blacklisted(env, caller) {
        return Err(Error::Blacklisted);
    }
    if paid_fee != get_tax(env) {
        return Err(Error::TaxMismatch);
    }
    utils::validate_description(&description)?;
    if minimum_contribution < 0 || contribution_period == 0 {
        return Err(Error::InvalidAmount);
    }

    let templates = get_templates(env)?;

    let campaign_id = utils::allocate_instance(env)?;
    events::emit_clone_created(
        env,
        events::CloneCreatedEvent {
            kind: InstanceKind::Campaign,
            template: templates.campaign.clone(),
            instance: campaign_id,
        },
    );
    let ledger_id = utils::allocate_instance(env)?;
    events::emit_clone_created(
        env,
        events::CloneCreatedEvent {
            kind: InstanceKind::Ledger,
            template: templates.ledger.clone(),
            instance: ledger_id,
        },
    );

    receipt::initialize(env, ledger_id, templates.ledger.clone(), campaign_id)?;
    events::emit_clone_initialized(
        env,
        events::CloneInitializedEvent {
            kind: InstanceKind::Ledger,
            instance: ledger_id,
        },
    );

    campaign::initialize(
        env,
        campaign_id,
        CampaignInit {
            template: templates.campaign,
            owner: caller.clone(),
            factory: env.current_contract_address(),
            ledger: ledger_id,
            pool_template: templates.pool,
            name,
            description,
            banner,
            minimum_contribution,
            contribution_period,
            manager: caller.clone(),
        },
    )?;
    events::emit_clone_initialized(
        env,
        events::CloneInitializedEvent {
            kind: InstanceKind::Campaign,
            instance: campaign_id,
        },
    );

    let mut campaigns = get_campaigns(env);
    campaigns.push_back(campaign_id);
    env.storage()
        .persistent()
        .set(&PersistentKey::Campaigns, &campaigns);
    extend_persistent(env, &PersistentKey::Campaigns);

    let registry_key = PersistentKey::Registry(campaign_id);
    env.storage().persistent().set(
        &registry_key,
        &CampaignStatus {
            campaign: campaign_id,
            ledger: ledger_id,
            creator: caller.clone(),
            created_at: utils::now(env),
        },
    );
    extend_persistent(env, &registry_key);

    let fees = get_accumulated_fees(env)
        .checked_add(paid_fee)
        .ok_or(Error::ArithmeticError)?;
    env.storage().instance().set(&DataKey::AccumulatedFees, &fees);
    extend_instance(env);

    log!(env, "campaign provisioned", campaign_id, ledger_id);
    events::emit_campaign_created(
        env,
        events::CampaignCreatedEvent {
            status: String::from_str(env, events::MSG_CAMPAIGN_CREATED),
            campaign: campaign_id,
            ledger: ledger_id,
            campaigns_count: campaigns.len(),
        },
    );

    utils::receive_funds(env, caller, paid_fee)?;

    Ok(campaign_id)
}

/// Reject a campaign on its owner's behalf. Each campaign can be rejected through
/// the factory only once. Reports the campaign's refund pool if it has one,
/// otherwise the campaign id.
pub fn reject_campaign(
    env: &Env,
    caller: &Address,
    campaign_id: InstanceId,
) -> Result<InstanceId, Error> {
    require_owner(env, caller)?;
    if is_rejected(env, campaign_id) {
        return Err(Error::AlreadyRejected);
    }

    let key = PersistentKey::Rejected(campaign_id);
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);

    let reported = campaign::reject(env, campaign_id, &env.current_contract_address())?;
    // an earlier owner rejection may already have moved the funds into a pool
    let pool = campaign::get_campaign(env, campaign_id)?
        .refund_pool
        .unwrap_or(reported);

    events::emit_factory_rejected(
        env,
        events::FactoryRejectedEvent {
            rejected: campaign_id,
            pool,
        },
    );
    Ok(pool)
}

pub fn withdraw_tax_fees(env: &Env, caller: &Address) -> Result<i128, Error> {
    require_owner(env, caller)?;

    let amount = get_accumulated_fees(env);
    env.storage().instance().set(&DataKey::AccumulatedFees, &0i128);
    extend_instance(env);

    events::emit_fees_withdrawn(
        env,
        events::FeesWithdrawnEvent {
            owner: caller.clone(),
            amount,
        },
    );

    utils::send_funds(env, caller, amount)?;
    Ok(amount)
}

/// Swap the contract code; every stored record survives.
pub fn upgrade(env: &Env, caller: &Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
    require_owner(env, caller)?;
    events::emit_upgraded(env, wasm_hash.clone());
    env.deployer().update_current_contract_wasm(wasm_hash);
    Ok(())
}

/// Tokens held by the contract across campaigns, pools, fees and unsolicited transfers.
pub fn contract_balance(env: &Env) -> Result<i128, Error> {
    Ok(utils::token_client(env)?.balance(&env.current_contract_address()))
}
