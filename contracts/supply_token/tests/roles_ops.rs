#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::TestEnv;
use soroban_sdk::vec;
use supply_token::{LedgerError, LedgerEvent};

#[test]
fn test_second_initialize_fails_for_any_caller() {
    let t = TestEnv::new();
    let stranger = t.create_user();

    let res = t.client.try_initialize(&t.owner);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::AlreadyInitialized);

    let res = t.client.try_initialize(&stranger);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::AlreadyInitialized);

    // Papéis intactos
    assert_eq!(t.client.owner(), Some(t.owner.clone()));
    assert_eq!(t.client.supply_controller(), Some(t.owner.clone()));
}

#[test]
fn test_roles_unset_before_initialize() {
    let t = TestEnv::undeployed();
    t.client.deploy(&t.admin, &1);

    assert_eq!(t.client.owner(), None);
    assert_eq!(t.client.supply_controller(), None);

    let res = t.client.try_increase_supply(&t.owner, &1);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);
}

#[test]
fn test_set_supply_controller_hands_over_authority() {
    let t = TestEnv::new();
    let controller = t.create_user();

    let events = t.client.set_supply_controller(&t.owner, &controller);
    assert_eq!(
        events,
        vec![
            &t.env,
            LedgerEvent::SupplyControllerSet(t.owner.clone(), controller.clone()),
        ]
    );
    assert_eq!(t.client.supply_controller(), Some(controller.clone()));

    // O controller anterior perde mint e burn na hora
    let res = t.client.try_increase_supply(&t.owner, &10);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);
    let res = t.client.try_decrease_supply(&t.owner, &0);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);

    t.client.increase_supply(&controller, &10);
    t.client.decrease_supply(&controller, &4);
    assert_eq!(t.client.balance_of(&controller), 6);
    assert_eq!(t.client.total_supply(), 6);
}

#[test]
fn test_set_supply_controller_reports_old_and_new() {
    let t = TestEnv::new();
    let first = t.create_user();
    let second = t.create_user();

    t.client.set_supply_controller(&t.owner, &first);
    let events = t.client.set_supply_controller(&t.owner, &second);

    assert_eq!(events.len(), 1);
    assert_eq!(
        events.get(0).unwrap(),
        LedgerEvent::SupplyControllerSet(first, second)
    );
}

#[test]
fn test_set_supply_controller_by_non_owner_fails() {
    let t = TestEnv::new();
    let controller = t.create_user();
    let other = t.create_user();
    t.client.set_supply_controller(&t.owner, &controller);

    // Nem o próprio supply controller pode se substituir
    let res = t.client.try_set_supply_controller(&controller, &other);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);

    let res = t.client.try_set_supply_controller(&other, &other);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);

    assert_eq!(t.client.supply_controller(), Some(controller));
}

#[test]
fn test_transfer_ownership() {
    let t = TestEnv::new();
    let new_owner = t.create_user();
    let controller = t.create_user();

    let events = t.client.transfer_ownership(&t.owner, &new_owner);
    assert_eq!(
        events,
        vec![
            &t.env,
            LedgerEvent::OwnershipTransferred(t.owner.clone(), new_owner.clone()),
        ]
    );
    assert_eq!(t.client.owner(), Some(new_owner.clone()));

    // Owner antigo não manda mais; o supply controller não muda sozinho
    let res = t.client.try_set_supply_controller(&t.owner, &controller);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);
    assert_eq!(t.client.supply_controller(), Some(t.owner.clone()));

    t.client.set_supply_controller(&new_owner, &controller);
    assert_eq!(t.client.supply_controller(), Some(controller));
}

#[test]
fn test_transfer_ownership_by_non_owner_fails() {
    let t = TestEnv::new();
    let hacker = t.create_user();

    let res = t.client.try_transfer_ownership(&hacker, &hacker);
    assert_eq!(res.unwrap_err().unwrap(), LedgerError::Unauthorized);
    assert_eq!(t.client.owner(), Some(t.owner.clone()));
}
