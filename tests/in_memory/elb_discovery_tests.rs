//! Load balancer discovery through the registry against the in-memory client.

use super::helpers::{TestSession, elb_type, lb, registry, seed, seed_numbered, session};
use cloudsweep::elb::{
    adapters::memory::{ElbCall, ElbOperation},
    domain::{ElbDiscoveryConfig, MissingTagPolicy},
    install_with_config,
    ports::ElbClientError,
};
use cloudsweep::resource::{
    ports::Resource,
    services::{RegistryError, ResourceRegistry},
};
use rstest::rstest;
use std::num::NonZeroUsize;

fn labels(resources: &[Box<dyn Resource>]) -> Vec<String> {
    resources.iter().map(ToString::to_string).collect()
}

fn registry_with(config: ElbDiscoveryConfig) -> ResourceRegistry<TestSession> {
    let mut registry = ResourceRegistry::new();
    install_with_config(&mut registry, config);
    registry
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_load_balancers_yield_two_handles_in_order(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed(
        &session,
        &[("lb-a", &[("Env", "prod")]), ("lb-b", &[("Env", "dev")])],
    );

    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert_eq!(labels(&resources), vec!["lb-a", "lb-b"]);
    let envs: Vec<Option<String>> = resources
        .iter()
        .map(|resource| resource.properties().get_tag("Env").map(str::to_owned))
        .collect();
    assert_eq!(envs, vec![Some("prod".to_owned()), Some("dev".to_owned())]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_load_balancers_means_one_call_and_no_tag_lookup(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert!(resources.is_empty());
    assert_eq!(
        session.calls().expect("calls"),
        vec![ElbCall::DescribeLoadBalancers { marker: None }]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tag_lookup_is_never_issued_with_an_empty_list(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed(&session, &[("lb-a", &[])]);

    registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    let calls = session.calls().expect("calls");
    assert!(calls.iter().all(|call| match call {
        ElbCall::DescribeTags { names } => !names.is_empty(),
        _ => true,
    }));
    assert_eq!(
        session
            .call_count(ElbOperation::DescribeTags)
            .expect("count"),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_balancer_missing_from_tag_response_is_excluded_by_default(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed(&session, &[("lb-a", &[]), ("lb-b", &[])]);
    session.hide_tags(lb("lb-b")).expect("hide tags");

    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert_eq!(labels(&resources), vec!["lb-a"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn untagged_policy_keeps_load_balancer_missing_from_tag_response(session: TestSession) {
    seed(&session, &[("lb-a", &[("Env", "prod")]), ("lb-b", &[("Env", "dev")])]);
    session.hide_tags(lb("lb-a")).expect("hide tags");
    let registry =
        registry_with(ElbDiscoveryConfig::default().with_missing_tags(MissingTagPolicy::Untagged));

    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert_eq!(labels(&resources), vec!["lb-b", "lb-a"]);
    let untagged = resources.last().expect("two entries");
    assert!(untagged.properties().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn all_enumeration_pages_are_listed(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed_numbered(&session, 5);
    session
        .set_page_size(NonZeroUsize::new(2).expect("non-zero"))
        .expect("configure page size");

    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert_eq!(
        labels(&resources),
        vec!["lb-0", "lb-1", "lb-2", "lb-3", "lb-4"]
    );
    assert_eq!(
        session
            .call_count(ElbOperation::DescribeLoadBalancers)
            .expect("count"),
        3
    );
    assert_eq!(
        session
            .call_count(ElbOperation::DescribeTags)
            .expect("count"),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn aws_limits_split_tag_lookups_at_twenty_names(session: TestSession) {
    seed_numbered(&session, 25);
    session
        .set_tag_batch_limit(NonZeroUsize::new(20).expect("non-zero"))
        .expect("configure limit");
    let registry = registry_with(ElbDiscoveryConfig::aws_limits());

    let resources = registry
        .list(&elb_type(), &session)
        .await
        .expect("listing should succeed");

    assert_eq!(resources.len(), 25);
    assert_eq!(
        resources.last().map(ToString::to_string).as_deref(),
        Some("lb-24")
    );
    let batch_sizes: Vec<usize> = session
        .calls()
        .expect("calls")
        .iter()
        .filter_map(|call| match call {
            ElbCall::DescribeTags { names } => Some(names.len()),
            _ => None,
        })
        .collect();
    assert_eq!(batch_sizes, vec![20, 5]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_tag_lookup_over_provider_limit_fails_whole_listing(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed_numbered(&session, 21);
    session
        .set_tag_batch_limit(NonZeroUsize::new(20).expect("non-zero"))
        .expect("configure limit");

    let result = registry.list(&elb_type(), &session).await;

    match result {
        Err(RegistryError::Listing { source, .. }) => assert!(matches!(
            source.downcast_ref::<ElbClientError>(),
            Some(ElbClientError::InvalidRequest(_))
        )),
        other => panic!("expected listing error, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enumeration_failure_surfaces_the_same_error(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed(&session, &[("lb-a", &[])]);
    session
        .fail_with(
            ElbOperation::DescribeLoadBalancers,
            ElbClientError::AccessDenied("elb:DescribeLoadBalancers".to_owned()),
        )
        .expect("inject failure");

    let result = registry.list(&elb_type(), &session).await;

    match result {
        Err(RegistryError::Listing {
            resource_type,
            source,
        }) => {
            assert_eq!(resource_type, elb_type());
            assert_eq!(source.to_string(), "access denied: elb:DescribeLoadBalancers");
            assert!(matches!(
                source.downcast_ref::<ElbClientError>(),
                Some(ElbClientError::AccessDenied(_))
            ));
        }
        other => panic!("expected listing error, got {other:?}"),
    }
    assert_eq!(
        session
            .call_count(ElbOperation::DescribeTags)
            .expect("count"),
        0
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tag_lookup_failure_surfaces_the_same_error(
    session: TestSession,
    registry: ResourceRegistry<TestSession>,
) {
    seed(&session, &[("lb-a", &[])]);
    session
        .fail_with(
            ElbOperation::DescribeTags,
            ElbClientError::throttled("DescribeTags"),
        )
        .expect("inject failure");

    let result = registry.list(&elb_type(), &session).await;

    match result {
        Err(RegistryError::Listing { source, .. }) => {
            assert_eq!(source.to_string(), "request throttled: DescribeTags");
        }
        other => panic!("expected listing error, got {other:?}"),
    }
}
