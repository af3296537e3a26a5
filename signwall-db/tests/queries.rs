use signwall_catalog::types::{Asset, MIMETYPE_IMAGE, display_window};
use signwall_db::*;

fn test_asset(asset_id: &str, play_order: i64) -> Asset {
    let (start_date, end_date) = display_window();
    Asset {
        asset_id: asset_id.to_string(),
        name: format!("{}.jpg", asset_id),
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
fn list_play_orders_returns_all_pairs() {
    let conn = open_memory().unwrap();
    for (i, id) in ["aaaa", "bbbb", "cccc"].iter().enumerate() {
        insert_asset(&conn, &test_asset(id, i as i64 + 1)).unwrap();
    }

    let mut rows = list_play_orders(&conn).unwrap();
    assert_eq!(rows.len(), 3);

    rows.sort_by(|a, b| a.asset_id.cmp(&b.asset_id));
    assert_eq!(rows[0].asset_id, "aaaa");
    assert_eq!(rows[0].play_order, 1);
    assert_eq!(rows[2].asset_id, "cccc");
    assert_eq!(rows[2].play_order, 3);
}

#[test]
fn list_play_orders_empty_catalog() {
    let conn = open_memory().unwrap();
    assert!(list_play_orders(&conn).unwrap().is_empty());
}

#[test]
fn get_asset_missing_returns_none() {
    let conn = open_memory().unwrap();
    assert!(get_asset(&conn, "missing").unwrap().is_none());
}

#[test]
fn count_assets_tracks_inserts() {
    let conn = open_memory().unwrap();
    assert_eq!(count_assets(&conn).unwrap(), 0);

    insert_asset(&conn, &test_asset("aaaa", 1)).unwrap();
    insert_asset(&conn, &test_asset("bbbb", 2)).unwrap();
    assert_eq!(count_assets(&conn).unwrap(), 2);
}
