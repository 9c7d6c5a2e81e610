use semreg_core::address::Address;
use semreg_core::bundle::RoleBundle;
use semreg_core::registry::Registry;
use semreg_core::role::Role;
use semreg_core::targets::TargetVersionSpec;
use semreg_core::version_set::VersionSet;
use semreg_resolver::{resolve_bundle, resolve_registry};
use semreg_util::errors::RegistryError;

fn addr(last: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = last;
    Address::new(bytes)
}

/// A global bundle where every role has 1.0.0 and 2.0.0 deployed.
fn global() -> RoleBundle {
    Role::ALL.into_iter().fold(RoleBundle::new(), |bundle, role| {
        bundle.with(
            role,
            VersionSet::from([("1.0.0", addr(0x10)), ("v2.0.0", addr(0x20))]),
        )
    })
}

fn failing_role(err: RegistryError) -> (String, RegistryError) {
    match err {
        RegistryError::RoleResolutionFailed { role, source } => (role, *source),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn global_only_resolution() {
    let targets = TargetVersionSpec::uniform("1.0.0");
    let resolved = resolve_bundle(&global(), None, &targets).unwrap();
    for (_, entry) in resolved.iter() {
        assert_eq!(entry.version, "v1.0.0");
        assert_eq!(entry.address, addr(0x10));
    }
}

#[test]
fn network_overrides_global_on_conflict() {
    let network = RoleBundle::new().with(
        Role::OptimismPortal,
        VersionSet::from([("1.0.0", addr(0x99))]),
    );
    let targets = TargetVersionSpec::uniform("1.0.0");

    let resolved = resolve_bundle(&global(), Some(&network), &targets).unwrap();

    assert_eq!(resolved.get(Role::OptimismPortal).address, addr(0x99));
    assert_eq!(resolved.get(Role::SystemConfig).address, addr(0x10));
}

#[test]
fn network_extends_global_with_new_versions() {
    let network = RoleBundle::new().with(
        Role::L2OutputOracle,
        VersionSet::from([("3.0.0", addr(0x30))]),
    );
    let targets = TargetVersionSpec::uniform("2.5.0");

    let resolved = resolve_bundle(&global(), Some(&network), &targets);
    let (role, cause) = failing_role(resolved.unwrap_err());
    // Only L2OutputOracle gained a version above 2.5.0; the first role fails.
    assert_eq!(role, "L1CrossDomainMessenger");
    assert!(matches!(cause, RegistryError::Unresolvable { .. }));

    let targets = TargetVersionSpec::uniform("1.5.0");
    let resolved = resolve_bundle(&global(), Some(&network), &targets).unwrap();
    assert_eq!(resolved.get(Role::L2OutputOracle).version, "v3.0.0");
    assert_eq!(resolved.get(Role::L1StandardBridge).version, "v2.0.0");
}

#[test]
fn resolution_does_not_mutate_inputs() {
    let global = global();
    let network = RoleBundle::new().with(
        Role::SystemConfig,
        VersionSet::from([("1.0.0", addr(0x77))]),
    );
    let before = global.clone();

    resolve_bundle(&global, Some(&network), &TargetVersionSpec::uniform("1.0.0")).unwrap();

    assert_eq!(global, before);
}

#[test]
fn first_failing_role_in_order_is_reported() {
    let bundle = global()
        .with(Role::L2OutputOracle, VersionSet::from([("0.1.0", addr(1))]))
        .with(Role::OptimismPortal, VersionSet::from([("0.1.0", addr(2))]));
    let targets = TargetVersionSpec::uniform("1.0.0");

    let err = resolve_bundle(&bundle, None, &targets).unwrap_err();
    assert_eq!(err.to_string(), "L2OutputOracle: cannot resolve semver v1.0.0");
    let (role, cause) = failing_role(err);
    assert_eq!(role, "L2OutputOracle");
    assert!(matches!(cause, RegistryError::Unresolvable { .. }));
}

#[test]
fn empty_role_fails_with_empty_set() {
    let bundle = global().with(Role::L1Erc721Bridge, VersionSet::new());
    let err = resolve_bundle(&bundle, None, &TargetVersionSpec::uniform("1.0.0")).unwrap_err();
    let (role, cause) = failing_role(err);
    assert_eq!(role, "L1ERC721Bridge");
    assert!(matches!(cause, RegistryError::EmptySet));
}

#[test]
fn per_role_targets_are_honoured() {
    let targets = TargetVersionSpec::uniform("1.0.0").with(Role::SystemConfig, "v1.5.0");
    let resolved = resolve_bundle(&global(), None, &targets).unwrap();
    assert_eq!(resolved.get(Role::SystemConfig).version, "v2.0.0");
    assert_eq!(resolved.get(Role::OptimismPortal).version, "v1.0.0");
}

#[test]
fn json_output_is_keyed_by_contract_name() {
    let resolved = resolve_bundle(&global(), None, &TargetVersionSpec::uniform("2.0.0")).unwrap();
    let value = serde_json::to_value(&resolved).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), Role::COUNT);
    assert_eq!(
        value["OptimismMintableERC20Factory"]["version"],
        serde_json::json!("v2.0.0")
    );
    assert_eq!(
        value["L1ERC721Bridge"]["address"],
        serde_json::json!("0x0000000000000000000000000000000000000020")
    );
}

#[test]
fn resolve_registry_by_network_name() {
    let registry = Registry::from_str(
        r#"
[versions]
l1_cross_domain_messenger = "1.0.0"
l1_erc721_bridge = "1.0.0"
l1_standard_bridge = "1.0.0"
l2_output_oracle = "1.0.0"
optimism_mintable_erc20_factory = "1.0.0"
optimism_portal = "1.0.0"
system_config = "1.0.0"

[implementations]
l1_cross_domain_messenger = { "1.0.0" = "0x0000000000000000000000000000000000000001" }
l1_erc721_bridge = { "1.0.0" = "0x0000000000000000000000000000000000000001" }
l1_standard_bridge = { "1.0.0" = "0x0000000000000000000000000000000000000001" }
l2_output_oracle = { "1.0.0" = "0x0000000000000000000000000000000000000001" }
optimism_mintable_erc20_factory = { "1.0.0" = "0x0000000000000000000000000000000000000001" }
optimism_portal = { "1.0.0" = "0x0000000000000000000000000000000000000001" }

[networks.sepolia.system_config]
"1.0.0" = "0x0000000000000000000000000000000000000002"
"#,
    )
    .unwrap();

    let err = resolve_registry(&registry, None).unwrap_err();
    assert_eq!(err.to_string(), "SystemConfig: no implementations found");

    let resolved = resolve_registry(&registry, Some("sepolia")).unwrap();
    assert_eq!(
        resolved.get(Role::SystemConfig).address.to_string(),
        "0x0000000000000000000000000000000000000002"
    );

    let err = resolve_registry(&registry, Some("mainnet")).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownNetwork { .. }));
}

#[test]
fn network_override_with_other_prefix_form_does_not_replace_global() {
    // Keys are merged as written, so "v1.0.0" is stored next to "1.0.0" and
    // lookups prefer the unprefixed spelling.
    let global = global();
    let network = RoleBundle::new().with(
        Role::OptimismPortal,
        VersionSet::from([("v1.0.0", addr(0x0b))]),
    );
    let targets = TargetVersionSpec::uniform("1.0.0");

    let resolved = resolve_bundle(&global, Some(&network), &targets).unwrap();
    assert_eq!(resolved.get(Role::OptimismPortal).version, "v1.0.0");
    assert_eq!(resolved.get(Role::OptimismPortal).address, addr(0x10));

    let same_form = RoleBundle::new().with(
        Role::OptimismPortal,
        VersionSet::from([("1.0.0", addr(0x0b))]),
    );
    let resolved = resolve_bundle(&global, Some(&same_form), &targets).unwrap();
    assert_eq!(resolved.get(Role::OptimismPortal).address, addr(0x0b));
}
