//! Tests for the hero lookup service.

use std::sync::Arc;

use mockall::predicate::eq;
use tokio_util::sync::CancellationToken;

use super::*;
use crate::domain::ports::{HeroNotFound, MockSuperHeroRepository, SuperHeroByNameQuery};
use crate::test_support::{RecordingSuperHeroRepository, hero_name, sample_repository};

fn make_service(repo: MockSuperHeroRepository) -> SuperHeroLookupService<MockSuperHeroRepository> {
    SuperHeroLookupService::new(Arc::new(repo))
}

fn iron_man() -> SuperHero {
    SuperHero::new(
        hero_name("Iron Man"),
        "https://img.example/iron-man.jpg",
        true,
        "Genius engineer in powered armour.",
    )
}

#[tokio::test]
async fn delivers_the_hero_when_the_name_is_present() {
    let mut repo = MockSuperHeroRepository::new();
    repo.expect_get_by_name()
        .with(eq(hero_name("Iron Man")))
        .times(1)
        .return_once(|_| Ok(iron_man()));

    let service = make_service(repo);
    let hero = service
        .get(&hero_name("Iron Man"), &CancellationToken::new())
        .await
        .expect("lookup succeeds");

    assert_eq!(hero.name(), &hero_name("Iron Man"));
    assert!(hero.is_avenger());
}

#[tokio::test]
async fn reports_not_found_for_an_absent_name() {
    let mut repo = MockSuperHeroRepository::new();
    repo.expect_get_by_name()
        .times(1)
        .return_once(|name| Err(HeroNotFound { name: name.clone() }));

    let service = make_service(repo);
    let error = service
        .get(&hero_name("Fatman"), &CancellationToken::new())
        .await
        .expect_err("lookup fails");

    assert_eq!(
        error,
        HeroLoadError::NotFound {
            name: hero_name("Fatman")
        }
    );
}

#[tokio::test]
async fn a_pre_cancelled_token_skips_the_repository() {
    // No expectations: any repository call would fail the test.
    let service = make_service(MockSuperHeroRepository::new());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = service
        .get(&hero_name("Iron Man"), &cancel)
        .await
        .expect_err("lookup is cancelled");

    assert_eq!(error, HeroLoadError::Cancelled);
}

#[tokio::test]
async fn cancellation_during_the_lookup_drops_the_outcome() {
    let cancel = CancellationToken::new();
    let seen = cancel.clone();
    let mut repo = MockSuperHeroRepository::new();
    repo.expect_get_by_name().times(1).return_once(move |_| {
        seen.cancel();
        Ok(iron_man())
    });

    let service = make_service(repo);
    let error = service
        .get(&hero_name("Iron Man"), &cancel)
        .await
        .expect_err("lookup is cancelled");

    assert_eq!(error, HeroLoadError::Cancelled);
}

#[tokio::test]
async fn the_lookup_runs_off_the_calling_thread() {
    let repository = Arc::new(RecordingSuperHeroRepository::new(sample_repository()));
    let service = SuperHeroLookupService::new(Arc::clone(&repository));

    // The default test runtime is single-threaded, so the calling task runs
    // on this very thread; the repository must still see a different one.
    let hero = service
        .get(&hero_name("Iron Man"), &CancellationToken::new())
        .await
        .expect("lookup succeeds");
    assert_eq!(hero.name(), &hero_name("Iron Man"));

    let threads = repository.lookup_threads();
    assert_eq!(threads.len(), 1);
    assert_ne!(threads.first(), Some(&std::thread::current().id()));
}

#[tokio::test]
#[should_panic(expected = "repository wiring broken")]
async fn a_repository_panic_reaches_the_caller() {
    let mut repo = MockSuperHeroRepository::new();
    repo.expect_get_by_name()
        .return_once(|_| panic!("repository wiring broken"));

    let service = make_service(repo);
    let _ = service
        .get(&hero_name("Iron Man"), &CancellationToken::new())
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_lookups_resolve_independently() {
    let service = SuperHeroLookupService::new(Arc::new(sample_repository()));
    let cancel = CancellationToken::new();

    let iron_man_name = hero_name("Iron Man");
    let thor_name = hero_name("Thor");
    let (first, second) = tokio::join!(
        service.get(&iron_man_name, &cancel),
        service.get(&thor_name, &cancel),
    );

    assert_eq!(
        first.expect("iron man loads").name(),
        &hero_name("Iron Man")
    );
    assert_eq!(second.expect("thor loads").name(), &hero_name("Thor"));
}
