use soroban_sdk::{log, Address, Env, Vec};

use crate::campaign;
use crate::error::Error;
use crate::events;
use crate::storage_types::*;
use crate::utils::{self, extend_persistent};

/// Provision a refund pool from the campaign's pool template and snapshot every
/// investor's share of `amount`.
///
/// Shares are each investor's contribution scaled by `amount / total_contribution`;
/// when nothing was spent this is the contribution itself. The rounding remainder
/// goes to the last recorded investor so the shares always sum to `amount`.
pub fn create(
    env: &Env,
    source: &Campaign,
    investors: &Vec<Address>,
    amount: i128,
) -> Result<InstanceId, Error> {
    let id = utils::allocate_instance(env)?;
    events::emit_clone_created(
        env,
        events::CloneCreatedEvent {
            kind: InstanceKind::Pool,
            template: source.pool_template.clone(),
            instance: id,
        },
    );

    let count = investors.len();
    let mut remaining = amount;
    for (position, investor) in investors.iter().enumerate() {
        let share = if position as u32 + 1 == count {
            remaining
        } else {
            let contributed = campaign::contribution_of(env, source.id, &investor);
            if amount == source.total_contribution {
                contributed
            } else {
                contributed
                    .checked_mul(amount)
                    .ok_or(Error::ArithmeticError)?
                    / source.total_contribution
            }
        };
        remaining -= share;

        let key = PersistentKey::Share(id, investor.clone());
        env.storage().persistent().set(&key, &share);
        extend_persistent(env, &key);
    }

    let pool = Pool {
        id,
        template: source.pool_template.clone(),
        campaign: source.id,
        owner: source.owner.clone(),
        investors_count: count,
        claimed_count: 0,
        balance: amount,
        is_closed: false,
    };
    let key = PersistentKey::Pool(id);
    env.storage().persistent().set(&key, &pool);
    extend_persistent(env, &key);

    events::emit_pool_created(
        env,
        events::PoolCreatedEvent {
            pool: id,
            campaign: source.id,
            balance: amount,
        },
    );

    Ok(id)
}

pub fn get_pool(env: &Env, id: InstanceId) -> Result<Pool, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Pool(id))
        .ok_or(Error::PoolNotFound)
}

pub fn share_of(env: &Env, id: InstanceId, investor: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Share(id, investor.clone()))
}

pub fn has_claimed(env: &Env, id: InstanceId, investor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Claimed(id, investor.clone()))
}

/// Pay `caller` their snapshotted share, once. The last claim closes the pool.
pub fn take_share_back(env: &Env, id: InstanceId, caller: &Address) -> Result<i128, Error> {
    let mut pool = get_pool(env, id)?;

    if pool.is_closed {
        return Err(Error::PoolClosed);
    }
    let share = share_of(env, id, caller).ok_or(Error::NotInvestor)?;
    if has_claimed(env, id, caller) {
        return Err(Error::AlreadyClaimed);
    }

    pool.claimed_count += 1;
    pool.balance = pool
        .balance
        .checked_sub(share)
        .ok_or(Error::ArithmeticError)?;
    if pool.claimed_count == pool.investors_count {
        pool.is_closed = true;
    }

    let claimed_key = PersistentKey::Claimed(id, caller.clone());
    env.storage().persistent().set(&claimed_key, &true);
    extend_persistent(env, &claimed_key);
    env.storage().persistent().set(&PersistentKey::Pool(id), &pool);
    extend_persistent(env, &PersistentKey::Pool(id));

    events::emit_share_taken(
        env,
        events::ShareTakenEvent {
            pool: id,
            investor: caller.clone(),
            value: share,
        },
    );
    if pool.is_closed {
        log!(env, "refund pool closed", pool.campaign, id);
        events::emit_pool_closed(
            env,
            events::PoolClosedEvent {
                campaign: pool.campaign,
                pool: id,
            },
        );
    }

    utils::send_funds(env, caller, share)?;

    Ok(share)
}
