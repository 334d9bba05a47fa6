use chrono::{Duration, TimeZone, Utc};
use flash_core::{CardDraft, Clock, CoreError, FixedClock, GroupPath, MemoryRepo, Repository};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()))
}

fn g(s: &str) -> GroupPath {
    GroupPath::parse(s)
}

async fn seeded(clock: Arc<FixedClock>) -> MemoryRepo {
    let repo = MemoryRepo::with_clock(clock);
    for (group, title, desc) in [
        ("", "Subject1", "Value1"),
        ("", "Subject2", "Value2"),
        ("Group", "Subject1", "Value1"),
        ("Group", "Subject2", "Value2"),
        ("Group.SubGroup", "Subject1", "Value1"),
        ("Group.SubGroup", "Subject2", "Value2"),
    ] {
        repo.add_card(&g(group), &CardDraft::new(title, desc)).await.unwrap();
    }
    repo
}

fn paths(repo: &MemoryRepo) -> Vec<String> {
    repo.snapshot().iter().map(|c| c.path.to_string()).collect()
}

#[tokio::test]
async fn add_stamps_both_timestamps() {
    let clock = clock();
    let repo = MemoryRepo::with_clock(clock.clone());
    repo.add_card(&g("Group"), &CardDraft::new("Subject1", "Value1")).await.unwrap();

    let cards = repo.get_cards(&g("Group")).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].path.to_string(), "Group.Subject1");
    assert_eq!(cards[0].description, "Value1");
    assert_eq!(cards[0].created_at, clock.now());
    assert_eq!(cards[0].created_at, cards[0].updated_at);
}

#[tokio::test]
async fn add_keeps_empty_description_and_root_group() {
    let repo = MemoryRepo::with_clock(clock());
    repo.add_card(&GroupPath::root(), &CardDraft::new("Subject1", "")).await.unwrap();
    assert_eq!(paths(&repo), vec!["Subject1"]);
    assert_eq!(repo.snapshot()[0].description, "");
}

#[tokio::test]
async fn duplicate_add_is_rejected_without_change() {
    let repo = MemoryRepo::with_clock(clock());
    repo.add_card(&g("Group"), &CardDraft::new("Subject1", "Value1")).await.unwrap();

    let err = repo
        .add_card(&g("Group"), &CardDraft::new("Subject1", "Value2"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::CardAlreadyExists(p) if p == "Group.Subject1"));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.snapshot()[0].description, "Value1");
}

#[tokio::test]
async fn dotted_title_collides_with_grouped_title() {
    let repo = MemoryRepo::with_clock(clock());
    repo.add_card(&g("Group"), &CardDraft::new("Subject1", "a")).await.unwrap();
    let err = repo
        .add_card(&GroupPath::root(), &CardDraft::new("Group.Subject1", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::CardAlreadyExists(_)));
}

#[tokio::test]
async fn delete_preserves_order_of_the_rest() {
    let repo = seeded(clock()).await;
    repo.delete_card(&g("Group"), "Subject1").await.unwrap();
    assert_eq!(
        paths(&repo),
        vec![
            "Subject1",
            "Subject2",
            "Group.Subject2",
            "Group.SubGroup.Subject1",
            "Group.SubGroup.Subject2",
        ]
    );

    repo.delete_card(&GroupPath::root(), "Subject1").await.unwrap();
    assert_eq!(paths(&repo)[0], "Subject2");
}

#[tokio::test]
async fn delete_missing_card_leaves_store_alone() {
    let repo = seeded(clock()).await;
    let before = repo.snapshot();

    let err = repo.delete_card(&g("Group"), "Subject3").await.unwrap_err();
    assert!(matches!(err, CoreError::CardNotFound(p) if p == "Group.Subject3"));

    let err = repo.delete_card(&g("Nowhere"), "Subject1").await.unwrap_err();
    assert!(matches!(err, CoreError::CardNotFound(_)));

    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn get_cards_lists_direct_children_only() {
    let repo = seeded(clock()).await;

    let group: Vec<String> = repo
        .get_cards(&g("Group"))
        .await
        .unwrap()
        .iter()
        .map(|c| c.path.to_string())
        .collect();
    assert_eq!(group, vec!["Group.Subject1", "Group.Subject2"]);

    let root: Vec<String> = repo
        .get_cards(&GroupPath::root())
        .await
        .unwrap()
        .iter()
        .map(|c| c.path.to_string())
        .collect();
    assert_eq!(root, vec!["Subject1", "Subject2"]);
}

#[tokio::test]
async fn get_all_cards_lists_descendants_in_insertion_order() {
    let repo = seeded(clock()).await;

    let all = repo.get_all_cards(&GroupPath::root()).await.unwrap();
    assert_eq!(all, repo.snapshot());

    let group: Vec<String> = repo
        .get_all_cards(&g("Group"))
        .await
        .unwrap()
        .iter()
        .map(|c| c.path.to_string())
        .collect();
    assert_eq!(
        group,
        vec![
            "Group.Subject1",
            "Group.Subject2",
            "Group.SubGroup.Subject1",
            "Group.SubGroup.Subject2",
        ]
    );
}

#[tokio::test]
async fn group_prefix_does_not_match_partial_segment() {
    let repo = MemoryRepo::with_clock(clock());
    repo.add_card(&g("GroupX"), &CardDraft::new("Subject1", "v")).await.unwrap();
    let err = repo.get_all_cards(&g("Group")).await.unwrap_err();
    assert!(matches!(err, CoreError::GroupNotFound(p) if p == "Group"));
}

#[tokio::test]
async fn empty_listing_is_group_not_found() {
    let repo = MemoryRepo::with_clock(clock());
    assert!(matches!(
        repo.get_all_cards(&GroupPath::root()).await,
        Err(CoreError::GroupNotFound(_))
    ));

    let repo = seeded(clock()).await;
    assert!(matches!(
        repo.get_cards(&g("Group.Missing")).await,
        Err(CoreError::GroupNotFound(_))
    ));
}

#[tokio::test]
async fn nested_scenario_splits_direct_and_descendant_listings() {
    let repo = MemoryRepo::with_clock(clock());
    repo.add_card(&g("Group"), &CardDraft::new("Subject1", "Value1")).await.unwrap();
    repo.add_card(&g("Group.SubGroup"), &CardDraft::new("Subject1", "Value1")).await.unwrap();

    let all = repo.get_all_cards(&g("Group")).await.unwrap();
    assert_eq!(all.len(), 2);
    let sub = repo.get_all_cards(&g("Group.SubGroup")).await.unwrap();
    assert_eq!(sub.len(), 1);
    assert_eq!(sub[0].path.to_string(), "Group.SubGroup.Subject1");
    let direct = repo.get_cards(&g("Group")).await.unwrap();
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].path.to_string(), "Group.Subject1");
}

#[tokio::test]
async fn update_touches_description_and_updated_at_only() {
    let clock = clock();
    let repo = seeded(clock.clone()).await;
    let created = repo.snapshot()[2].created_at;

    clock.advance(Duration::minutes(5));
    repo.update_card(&g("Group"), &CardDraft::new("Subject1", "")).await.unwrap();

    let card = repo.snapshot()[2].clone();
    assert_eq!(card.path.to_string(), "Group.Subject1");
    assert_eq!(card.description, "");
    assert_eq!(card.created_at, created);
    assert_eq!(card.updated_at, created + Duration::minutes(5));
}

#[tokio::test]
async fn update_nested_card() {
    let repo = seeded(clock()).await;
    repo.update_card(&g("Group.SubGroup"), &CardDraft::new("Subject2", "Changed"))
        .await
        .unwrap();
    let sub = repo.get_cards(&g("Group.SubGroup")).await.unwrap();
    assert_eq!(sub[1].description, "Changed");
    assert_eq!(sub[0].description, "Value1");
}

#[tokio::test]
async fn update_missing_card_leaves_store_alone() {
    let repo = seeded(clock()).await;
    let before = repo.snapshot();
    let err = repo
        .update_card(&g("Group"), &CardDraft::new("Subject3", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::CardNotFound(p) if p == "Group.Subject3"));
    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn empty_bare_title_is_never_stored() {
    let repo = seeded(clock()).await;
    let before = repo.snapshot();
    for title in ["Sub.", "."] {
        let err = repo
            .add_card(&g("Group"), &CardDraft::new(title, "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyTitle));
    }
    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn slashes_in_names_are_rejected() {
    let repo = MemoryRepo::with_clock(clock());
    assert!(matches!(
        repo.add_card(&g("a/b"), &CardDraft::new("X", "")).await,
        Err(CoreError::InvalidName(p)) if p == "a/b.X"
    ));
    assert!(matches!(
        repo.add_card(&g("a"), &CardDraft::new("b\\c", "")).await,
        Err(CoreError::InvalidName(_))
    ));
    assert!(matches!(
        repo.get_all_cards(&g("a/b")).await,
        Err(CoreError::InvalidName(_))
    ));
    assert!(repo.is_empty());
}
