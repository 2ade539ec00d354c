use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::Error;
use crate::events;
use crate::pool;
use crate::receipt;
use crate::storage_types::*;
use crate::utils::{self, extend_persistent};

/// Bind a freshly allocated instance id to a campaign record.
///
/// The contribution window opens now and stays open for `contribution_period` seconds.
pub fn initialize(env: &Env, id: InstanceId, init: CampaignInit) -> Result<Campaign, Error> {
    let key = PersistentKey::Campaign(id);
    if env.storage().persistent().has(&key) {
        return Err(Error::AlreadyInitialized);
    }

    let contribution_deadline = utils::now(env)
        .checked_add(init.contribution_period)
        .ok_or(Error::ArithmeticError)?;

    let campaign = Campaign {
        id,
        template: init.template,
        owner: init.owner,
        factory: init.factory,
        ledger: init.ledger,
        pool_template: init.pool_template,
        name: init.name,
        description: init.description,
        banner: init.banner,
        minimum_contribution: init.minimum_contribution,
        contribution_deadline,
        manager: init.manager,
        investors_count: 0,
        total_contribution: 0,
        available_balance: 0,
        is_closed: false,
        is_rejected_by_owner: false,
        requests_count: 0,
        refund_pool: None,
    };

    env.storage().persistent().set(&key, &campaign);
    env.storage()
        .persistent()
        .set(&PersistentKey::Investors(id), &Vec::<Address>::new(env));
    extend_persistent(env, &key);
    extend_persistent(env, &PersistentKey::Investors(id));

    Ok(campaign)
}

pub fn get_campaign(env: &Env, id: InstanceId) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id))
        .ok_or(Error::CampaignNotFound)
}

fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn get_request(env: &Env, id: InstanceId, index: RequestIndex) -> Result<Request, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Request(id, index))
        .ok_or(Error::RequestNotFound)
}

fn save_request(env: &Env, id: InstanceId, index: RequestIndex, request: &Request) {
    let key = PersistentKey::Request(id, index);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn get_investors(env: &Env, id: InstanceId) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Investors(id))
        .unwrap_or(Vec::new(env))
}

pub fn contribution_of(env: &Env, id: InstanceId, investor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(id, investor.clone()))
        .unwrap_or(0)
}

pub fn is_investor(env: &Env, id: InstanceId, investor: &Address) -> bool {
    contribution_of(env, id, investor) > 0
}

pub fn has_approved(env: &Env, id: InstanceId, index: RequestIndex, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Approval(id, index, investor.clone()))
}

pub fn contribute(
    env: &Env,
    id: InstanceId,
    investor: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let mut campaign = get_campaign(env, id)?;

    if amount <= campaign.minimum_contribution {
        return Err(Error::BelowMinimum);
    }
    if utils::now(env) >= campaign.contribution_deadline {
        return Err(Error::ContributionClosed);
    }
    if campaign.is_closed {
        return Err(Error::CampaignClosed);
    }

    let previous = contribution_of(env, id, investor);
    let updated = previous.checked_add(amount).ok_or(Error::ArithmeticError)?;
    let receipts = amount
        .checked_mul(RECEIPT_RATE)
        .ok_or(Error::ArithmeticError)?;

    campaign.total_contribution = campaign
        .total_contribution
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;
    campaign.available_balance = campaign
        .available_balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticError)?;

    if previous == 0 {
        campaign.investors_count += 1;
        let mut investors = get_investors(env, id);
        investors.push_back(investor.clone());
        env.storage()
            .persistent()
            .set(&PersistentKey::Investors(id), &investors);
        extend_persistent(env, &PersistentKey::Investors(id));
    }

    let contribution_key = PersistentKey::Contribution(id, investor.clone());
    env.storage().persistent().set(&contribution_key, &updated);
    extend_persistent(env, &contribution_key);
    save_campaign(env, &campaign);

    receipt::mint(env, campaign.ledger, id, investor, receipts)?;

    events::emit_contribution(
        env,
        events::ContributionEvent {
            campaign: id,
            investor: investor.clone(),
            value: amount,
        },
    );

    utils::receive_funds(env, investor, amount)?;

    Ok(updated)
}

pub fn create_request(
    env: &Env,
    id: InstanceId,
    caller: &Address,
    description: String,
    value: i128,
    recipient: Address,
) -> Result<RequestIndex, Error> {
    let mut campaign = get_campaign(env, id)?;

    if *caller != campaign.manager {
        return Err(Error::NotManager);
    }
    if campaign.is_closed {
        return Err(Error::CampaignClosed);
    }
    let now = utils::now(env);
    if now < campaign.contribution_deadline {
        return Err(Error::ContributionStillOpen);
    }
    utils::validate_description(&description)?;
    if value <= 0 {
        return Err(Error::InvalidAmount);
    }
    if value > campaign.available_balance {
        return Err(Error::InsufficientFunds);
    }

    let index = campaign.requests_count;
    let request = Request {
        description: description.clone(),
        value,
        recipient: recipient.clone(),
        created_at: now,
        approvers_count: 0,
        is_complete: false,
        is_cancel: false,
    };

    campaign.requests_count = index.checked_add(1).ok_or(Error::ArithmeticError)?;
    save_request(env, id, index, &request);
    save_campaign(env, &campaign);

    events::emit_request_created(
        env,
        events::RequestCreatedEvent {
            campaign: id,
            index,
            value,
            description,
            recipient,
        },
    );

    Ok(index)
}

pub fn approve_request(
    env: &Env,
    id: InstanceId,
    caller: &Address,
    index: RequestIndex,
) -> Result<(), Error> {
    get_campaign(env, id)?;

    if !is_investor(env, id, caller) {
        return Err(Error::NotInvestor);
    }
    let mut request = get_request(env, id, index)?;
    if request.is_cancel {
        return Err(Error::RequestCancelled);
    }
    if request.is_complete {
        return Err(Error::RequestComplete);
    }
    if has_approved(env, id, index, caller) {
        return Err(Error::AlreadyApproved);
    }
    let approval_deadline = request
        .created_at
        .checked_add(APPROVAL_WINDOW)
        .ok_or(Error::ArithmeticError)?;
    if utils::now(env) >= approval_deadline {
        return Err(Error::ApprovalWindowClosed);
    }

    request.approvers_count += 1;

    let approval_key = PersistentKey::Approval(id, index, caller.clone());
    env.storage().persistent().set(&approval_key, &true);
    extend_persistent(env, &approval_key);
    save_request(env, id, index, &request);

    events::emit_request_approved(
        env,
        events::RequestApprovedEvent {
            campaign: id,
            index,
            approver: caller.clone(),
        },
    );

    Ok(())
}

/// At least half of the distinct investors must have approved.
pub fn quorum_reached(approvers_count: u32, investors_count: u32) -> bool {
    (approvers_count as u64) * 2 >= investors_count as u64
}

pub fn finalize_request(
    env: &Env,
    id: InstanceId,
    caller: &Address,
    index: RequestIndex,
) -> Result<(), Error> {
    let mut campaign = get_campaign(env, id)?;

    if *caller != campaign.manager {
        return Err(Error::NotManager);
    }
    let mut request = get_request(env, id, index)?;
    if request.is_cancel {
        return Err(Error::RequestCancelled);
    }
    if request.is_complete {
        return Err(Error::AlreadyComplete);
    }
    if campaign.is_closed {
        return Err(Error::CampaignClosed);
    }
    if !quorum_reached(request.approvers_count, campaign.investors_count) {
        return Err(Error::QuorumNotMet);
    }
    if request.value > campaign.available_balance {
        return Err(Error::InsufficientFunds);
    }

    campaign.available_balance -= request.value;
    request.is_complete = true;
    save_request(env, id, index, &request);
    save_campaign(env, &campaign);

    events::emit_request_finalized(
        env,
        events::RequestFinalizedEvent {
            campaign: id,
            index,
            recipient: request.recipient.clone(),
        },
    );

    utils::send_funds(env, &request.recipient, request.value)
}

pub fn cancel_request(
    env: &Env,
    id: InstanceId,
    caller: &Address,
    index: RequestIndex,
) -> Result<(), Error> {
    let campaign = get_campaign(env, id)?;

    if *caller != campaign.manager {
        return Err(Error::NotManager);
    }
    let mut request = get_request(env, id, index)?;
    if request.is_cancel {
        return Err(Error::AlreadyCancelled);
    }
    if request.is_complete {
        return Err(Error::AlreadyComplete);
    }

    request.is_cancel = true;
    save_request(env, id, index, &request);

    events::emit_request_cancelled(env, events::RequestCancelledEvent { campaign: id, index });

    Ok(())
}

/// Close the campaign for good.
///
/// A funded campaign hands its whole available balance to a new refund pool and
/// reports that pool; an empty one reports its own id in the pool field.
/// Repeat calls are not rejected here.
pub fn reject(env: &Env, id: InstanceId, caller: &Address) -> Result<InstanceId, Error> {
    let mut campaign = get_campaign(env, id)?;

    if *caller != campaign.owner && *caller != campaign.factory {
        return Err(Error::NotOwnerOrFactory);
    }

    let (reported_pool, message) = if campaign.available_balance > 0 {
        let amount = campaign.available_balance;
        let investors = get_investors(env, id);
        let pool_id = pool::create(env, &campaign, &investors, amount)?;
        campaign.available_balance = 0;
        campaign.refund_pool = Some(pool_id);
        (pool_id, events::MSG_FUNDS_POOLED)
    } else {
        (id, events::MSG_EMPTY_CAMPAIGN)
    };

    campaign.is_rejected_by_owner = true;
    campaign.is_closed = true;
    save_campaign(env, &campaign);

    log!(env, "campaign rejected", id, reported_pool);
    events::emit_campaign_rejected(
        env,
        events::CampaignRejectedEvent {
            message: String::from_str(env, message),
            rejected: id,
            pool: reported_pool,
        },
    );

    Ok(reported_pool)
}
