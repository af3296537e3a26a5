use signwall_catalog::types::{Asset, MIMETYPE_IMAGE, display_window};
use signwall_db::*;

fn test_asset(asset_id: &str, play_order: i64) -> Asset {
    let (start_date, end_date) = display_window();
    Asset {
        asset_id: asset_id.to_string(),
        name: "holiday.jpg".to_string(),
        uri: format!("/home/pi/signwall_assets/{}", asset_id),
        md5: None,
        start_date,
        end_date,
        duration: "10".to_string(),
        mimetype: MIMETYPE_IMAGE.to_string(),
        is_enabled: true,
        nocache: false,
        play_order,
    }
}

#[test]
fn insert_and_get_round_trip() {
    let conn = open_memory().unwrap();
    let asset = test_asset("aaaa1111", 1);
    insert_asset(&conn, &asset).unwrap();

    let found = get_asset(&conn, "aaaa1111").unwrap().unwrap();
    assert_eq!(found, asset);
}

#[test]
fn insert_commits_durably() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let conn = open_database(&path).unwrap();
    insert_asset(&conn, &test_asset("aaaa1111", 1)).unwrap();
    drop(conn);

    let conn = open_database(&path).unwrap();
    assert_eq!(count_assets(&conn).unwrap(), 1);
}

#[test]
fn duplicate_insert_is_rejected() {
    let conn = open_memory().unwrap();
    insert_asset(&conn, &test_asset("aaaa1111", 1)).unwrap();

    let err = insert_asset(&conn, &test_asset("aaaa1111", 2)).unwrap_err();
    assert!(matches!(
        err,
        OperationError::DuplicateId { ref id } if id == "aaaa1111"
    ));

    // The original row is untouched.
    let found = get_asset(&conn, "aaaa1111").unwrap().unwrap();
    assert_eq!(found.play_order, 1);
}

#[test]
fn update_play_order_changes_only_order() {
    let conn = open_memory().unwrap();
    let asset = test_asset("aaaa1111", 1);
    insert_asset(&conn, &asset).unwrap();

    update_play_order(&conn, "aaaa1111", 7).unwrap();

    let found = get_asset(&conn, "aaaa1111").unwrap().unwrap();
    assert_eq!(found.play_order, 7);
    assert_eq!(found.name, asset.name);
    assert_eq!(found.uri, asset.uri);
    assert_eq!(found.duration, asset.duration);
}

#[test]
fn update_play_order_missing_id() {
    let conn = open_memory().unwrap();
    let err = update_play_order(&conn, "missing", 0).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound { ref id } if id == "missing"
    ));
}
