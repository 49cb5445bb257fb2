#![cfg(test)]

mod ownership;

use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

use crate::{PolicyWallet, PolicyWalletClient};

pub(crate) struct Fixture<'a> {
    pub env: Env,
    pub client: PolicyWalletClient<'a>,
    pub owner: Address,
    pub admin1: Address,
    pub admin2: Address,
    pub trader1: Address,
    pub trader2: Address,
    pub trader3: Address,
}

pub(crate) fn register_wallet<'a>(env: &Env) -> PolicyWalletClient<'a> {
    let contract_id = env.register(PolicyWallet, (false,));
    PolicyWalletClient::new(env, &contract_id)
}

/// Initialized wallet with no admins and only the global group.
pub(crate) fn setup_wallet<'a>() -> (Env, PolicyWalletClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let client = register_wallet(&env);
    let owner = Address::generate(&env);
    client.initialize(&owner);

    (env, client, owner)
}

/// Two admins, policies 1 and 2. trader1 trades for 1, trader2 for 2 and
/// trader3 for both.
pub(crate) fn setup_with_groups<'a>() -> Fixture<'a> {
    let (env, client, owner) = setup_wallet();

    let admin1 = Address::generate(&env);
    let admin2 = Address::generate(&env);
    let trader1 = Address::generate(&env);
    let trader2 = Address::generate(&env);
    let trader3 = Address::generate(&env);

    client.add_admin(&owner, &admin1);
    client.add_admin(&owner, &admin2);

    client.create_policy(&owner);
    client.create_policy(&owner);

    client.add_trader(&owner, &1, &trader1);
    client.add_trader(&owner, &2, &trader2);
    client.add_trader(&owner, &1, &trader3);
    client.add_trader(&owner, &2, &trader3);

    Fixture {
        env,
        client,
        owner,
        admin1,
        admin2,
        trader1,
        trader2,
        trader3,
    }
}

pub(crate) fn payload(env: &Env, bytes: &[u8]) -> Bytes {
    Bytes::from_slice(env, bytes)
}
