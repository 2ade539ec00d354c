#![cfg(test)]


use crate::{CrowdfundContract, CrowdfundContractClient, InstanceId};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token, Address, BytesN, Env, IntoVal, String, Symbol, TryFromVal, Val, Vec,
};

pub const MIN05: i128 = 100_000;
pub const MIN: i128 = 200_000;
pub const MIN2: i128 = 400_000;
pub const PERIOD: u64 = 10_000;

pub struct Setup<'a> {
    pub env: Env,
    pub client: CrowdfundContractClient<'a>,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub owner: Address,
    pub creator: Address,
    pub campaign_template: Address,
    pub ledger_template: Address,
    pub pool_template: Address,
}

impl<'a> Setup<'a> {
    /// Initialized factory with one authorized creator and a zero tax.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let creator = Address::generate(&env);
        let campaign_template = Address::generate(&env);
        let ledger_template = Address::generate(&env);
        let pool_template = Address::generate(&env);

        let asset_admin = Address::generate(&env);
        let token_address = env
            .register_stellar_asset_contract_v2(asset_admin)
            .address();
        let token = token::Client::new(&env, &token_address);
        let token_admin = token::StellarAssetClient::new(&env, &token_address);

        let client = CrowdfundContractClient::new(&env, &env.register(CrowdfundContract, ()));
        client.initialize(
            &owner,
            &token_address,
            &campaign_template,
            &ledger_template,
            &pool_template,
        );
        client.authorize(&owner, &creator);

        Setup {
            env,
            client,
            token,
            token_admin,
            owner,
            creator,
            campaign_template,
            ledger_template,
            pool_template,
        }
    }

    pub fn create_campaign(&self, minimum: i128, period: u64) -> InstanceId {
        self.client.create_campaign(
            &self.creator,
            &self.label("camp"),
            &String::from_str(&self.env, "desc"),
            &String::from_str(&self.env, "banner"),
            &minimum,
            &period,
            &0,
        )
    }

    /// A fresh account holding `amount` tokens.
    pub fn funded_account(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        self.token_admin.mint(&account, &amount);
        account
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    /// A fixed-size campaign label, zero padded.
    pub fn label(&self, value: &str) -> BytesN<32> {
        let mut bytes = [0u8; 32];
        bytes[..value.len()].copy_from_slice(value.as_bytes());
        BytesN::from_array(&self.env, &bytes)
    }

    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// A description of `len` ASCII characters.
    pub fn description_of_len(&self, len: usize) -> String {
        let bytes = [b'a'; 300];
        String::from_bytes(&self.env, &bytes[..len])
    }

    /// Events published by the crowdfunding contract, oldest first. Token
    /// contract events are left out.
    pub fn contract_events(&self) -> Vec<(Vec<Val>, Val)> {
        let mut events = Vec::new(&self.env);
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract == self.client.address {
                events.push_back((topics, data));
            }
        }
        events
    }

    pub fn topics(&self, component: &str, action: &str) -> Vec<Val> {
        (
            Symbol::new(&self.env, component),
            Symbol::new(&self.env, action),
        )
            .into_val(&self.env)
    }

    /// Payloads of every `(component, action)` event, oldest first.
    pub fn events_of<T>(&self, component: &str, action: &str) -> Vec<T>
    where
        T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
    {
        let wanted = self.topics(component, action);
        let mut payloads = Vec::new(&self.env);
        for (topics, data) in self.contract_events().iter() {
            if topics == wanted {
                payloads.push_back(T::try_from_val(&self.env, &data).unwrap());
            }
        }
        payloads
    }
}
