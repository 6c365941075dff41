use multiversx_sc::proxy_imports::*;

use crate::types::MinterConfig;

pub struct MinterProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MinterProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MinterProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MinterProxyMethods { wrapped_tx: tx }
    }
}

pub struct MinterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> MinterProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// Deploy with `.code_metadata(CodeMetadata::UPGRADEABLE)`: the Minter
    /// must never carry the payable flags.
    pub fn init<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        authorized_keys: Arg0,
        dao: Arg1,
        registry: Arg2,
        cstk_token: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&authorized_keys)
            .argument(&dao)
            .argument(&registry)
            .argument(&cstk_token)
            .original_result()
    }
}

impl<Env, From, To, Gas> MinterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: attach the EGLD with `.egld(..)`.
    pub fn pay<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        beneficiary: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("pay")
            .argument(&beneficiary)
            .original_result()
    }

    pub fn set_ratio<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        numerator: Arg0,
        denominator: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRatio")
            .argument(&numerator)
            .argument(&denominator)
            .original_result()
    }

    pub fn change_collector<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_collector: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeCollector")
            .argument(&new_collector)
            .original_result()
    }

    pub fn change_dao_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_dao: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeDAOContract")
            .argument(&new_dao)
            .original_result()
    }

    pub fn change_cstk_token_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeCSTKTokenContract")
            .argument(&new_token)
            .original_result()
    }

    pub fn change_registry<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_registry: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("changeRegistry")
            .argument(&new_registry)
            .original_result()
    }

    pub fn transfer_ownership<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferOwnership")
            .argument(&new_owner)
            .original_result()
    }

    pub fn ratio(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ratio")
            .original_result()
    }

    pub fn get_minted_amount<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        value: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMintedAmount")
            .argument(&value)
            .original_result()
    }

    pub fn get_minter_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MinterConfig<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinterConfig")
            .original_result()
    }

    pub fn dao(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("dao")
            .original_result()
    }

    pub fn cstk_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cstkToken")
            .original_result()
    }

    pub fn registry(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registry")
            .original_result()
    }

    pub fn collector(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("collector")
            .original_result()
    }

    pub fn numerator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("numerator")
            .original_result()
    }

    pub fn denominator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("denominator")
            .original_result()
    }

    pub fn is_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn get_admins(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmins")
            .original_result()
    }

    pub fn owner(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("owner")
            .original_result()
    }
}
