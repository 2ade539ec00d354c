use soroban_sdk::{token, Address, Env, String};

use crate::error::Error;
use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Current ledger time; read once per operation.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(())
}

pub fn token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token_address: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token_address))
}

/// Pull `amount` from `from` into the contract's custody.
///
/// An underfunded payer is reported as `InsufficientFunds` rather than
/// surfacing the token contract's own error code.
pub fn receive_funds(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        let token = token_client(env)?;
        if token.balance(from) < amount {
            return Err(Error::InsufficientFunds);
        }
        token.transfer(from, &env.current_contract_address(), &amount);
    }
    Ok(())
}

/// Pay `amount` out of the contract's custody.
pub fn send_funds(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        token_client(env)?.transfer(&env.current_contract_address(), to, &amount);
    }
    Ok(())
}

/// Reserve a fresh instance id. Campaigns, ledgers and pools draw from the same sequence.
pub fn allocate_instance(env: &Env) -> Result<InstanceId, Error> {
    let id: InstanceId = env
        .storage()
        .instance()
        .get(&DataKey::NextInstanceId)
        .ok_or(Error::NotInitialized)?;
    let next = id.checked_add(1).ok_or(Error::ArithmeticError)?;
    env.storage().instance().set(&DataKey::NextInstanceId, &next);
    extend_instance(env);
    Ok(id)
}

pub fn validate_description(description: &String) -> Result<(), Error> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::DescriptionTooLong);
    }
    Ok(())
}
