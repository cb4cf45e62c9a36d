//! Integration tests for schema providers
//!
//! Tests reference parsing, in-memory lookup, and caching across threads.

use std::sync::Arc;
use std::thread;

use quarry_foundation::ErrorKind;
use quarry_types::{
    CachingTypeProvider, InMemoryTypeProvider, ResourceScope, ResourceTypeProvider,
    ResourceTypeReference, TypeSymbol,
};

const VNET: &str = "Microsoft.Network/virtualNetworks/subnets@2020-11-01";

#[test]
fn reference_parts() {
    let reference: ResourceTypeReference = VNET.parse().unwrap();
    assert_eq!(reference.namespace(), "Microsoft.Network");
    assert_eq!(reference.full_name(), "Microsoft.Network/virtualNetworks/subnets");
    assert!(reference.is_child());
    assert_eq!(reference.to_string(), VNET);
}

#[test]
fn invalid_reference_is_an_error() {
    let err = "virtualNetworks@2020-11-01".parse::<ResourceTypeReference>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidTypeReference(_)));
}

#[test]
fn registered_type_resolves_at_every_scope() {
    let provider = InMemoryTypeProvider::new().with_type(VNET.parse().unwrap(), TypeSymbol::any_object());
    let reference: ResourceTypeReference = VNET.parse().unwrap();
    for scope in ResourceScope::ALL {
        let resolved = provider.get_type(scope, &reference).unwrap();
        assert_eq!(resolved.body.as_ref(), &TypeSymbol::any_object());
    }
    assert_eq!(provider.len(), 1);
}

#[test]
fn caching_provider_is_shareable_across_threads() {
    let inner = InMemoryTypeProvider::new().with_type(VNET.parse().unwrap(), TypeSymbol::any_object());
    let provider = Arc::new(CachingTypeProvider::new(inner));
    let reference: ResourceTypeReference = VNET.parse().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = Arc::clone(&provider);
            let reference = reference.clone();
            thread::spawn(move || provider.get_type(ResourceScope::ResourceGroup, &reference).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(provider.cached_len(), 1);
}

#[test]
fn arc_provider_is_a_provider() {
    let provider: Arc<dyn ResourceTypeProvider> =
        Arc::new(InMemoryTypeProvider::new().with_type(VNET.parse().unwrap(), TypeSymbol::any_object()));
    let reference: ResourceTypeReference = VNET.parse().unwrap();
    assert!(provider.get_type(ResourceScope::Subscription, &reference).is_ok());
}
