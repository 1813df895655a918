use chrono::{Duration, Utc};
use equiptrack::database::models::{EquipmentInput, PersonnelInput};
use pretty_assertions::assert_eq;

mod common;

#[tokio::test]
async fn unfiltered_listing_caps_at_35_newest_first() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let base = Utc::now().naive_utc();
    for i in 0..40 {
        common::seed_record(
            &ctx.records,
            &format!("User {}", i),
            &format!("PC-{:02}", i),
            "Ana",
            Some(base - Duration::minutes(i)),
        )
        .await;
    }

    let listed = ctx.records.list(None, None).await.unwrap();
    assert_eq!(listed.len(), 35);

    // Newest checkout first
    assert_eq!(listed[0].equipment_name, "PC-00");
    for window in listed.windows(2) {
        assert!(window[0].checkout_time >= window[1].checkout_time);
    }
}

#[tokio::test]
async fn responsible_filter_is_case_insensitive_and_uncapped() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let base = Utc::now().naive_utc();
    for i in 0..38 {
        common::seed_record(
            &ctx.records,
            "Juan",
            &format!("PC-{:02}", i),
            "Ana García",
            Some(base - Duration::minutes(i)),
        )
        .await;
    }
    common::seed_record(&ctx.records, "Juan", "PC-99", "Oscar", Some(base)).await;

    let listed = ctx.records.list(Some("ana"), None).await.unwrap();
    assert_eq!(listed.len(), 38);
    assert!(listed.iter().all(|r| r.checked_out_by == "Ana García"));
}

#[tokio::test]
async fn responsible_filter_matches_checkout_or_return_side() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let checked_out = common::seed_record(&ctx.records, "Juan", "PC-01", "Ana", None).await;
    let returned = common::seed_record(&ctx.records, "Maria", "PC-02", "Oscar", None).await;
    common::seed_record(&ctx.records, "Pedro", "PC-03", "Oscar", None).await;

    ctx.records
        .mark_returned(&returned.id, "Anabel")
        .await
        .unwrap();

    let listed = ctx.records.list(Some("ANA"), None).await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(listed.len(), 2);
    assert!(ids.contains(&checked_out.id.as_str()));
    assert!(ids.contains(&returned.id.as_str()));
}

#[tokio::test]
async fn filters_combine_with_logical_and() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    common::seed_record(&ctx.records, "Juan", "Laptop-01", "Ana", None).await;
    common::seed_record(&ctx.records, "Juan", "Projector", "Ana", None).await;
    common::seed_record(&ctx.records, "Juan", "Laptop-02", "Oscar", None).await;

    let listed = ctx.records.list(Some("ana"), Some("laptop")).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].equipment_name, "Laptop-01");

    let listed = ctx.records.list(None, Some("laptop")).await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn deleting_reference_rows_leaves_records_untouched() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let person = ctx
        .personnel
        .create(PersonnelInput {
            name: "Ana".to_string(),
            email: None,
        })
        .await
        .unwrap();
    let equipment = ctx
        .equipment
        .create(EquipmentInput {
            name: "Laptop-01".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let record = common::seed_record(&ctx.records, "Juan", "Laptop-01", "Ana", None).await;

    assert!(ctx.personnel.delete(person.id).await.unwrap());
    assert!(ctx.equipment.delete(equipment.id).await.unwrap());

    // The ledger keeps its text snapshots
    let stored = ctx.records.find_by_id(&record.id).await.unwrap().unwrap();
    assert_eq!(stored.equipment_name, "Laptop-01");
    assert_eq!(stored.checked_out_by, "Ana");
}
