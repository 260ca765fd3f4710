//! Mino catalog tests

use tetris_stage::core::{asset_path, asset_path_for_index, kind_for_asset_path};
use tetris_stage::types::{MinoKind, StageError};

#[test]
fn test_asset_path_literals() {
    assert_eq!(asset_path(MinoKind::I), "Assets/spriteData/mino/I.dds");
    assert_eq!(asset_path(MinoKind::O), "Assets/spriteData/mino/O.dds");
    assert_eq!(asset_path(MinoKind::J), "Assets/spriteData/mino/J.dds");
    assert_eq!(asset_path(MinoKind::L), "Assets/spriteData/mino/L.dds");
    assert_eq!(asset_path(MinoKind::S), "Assets/spriteData/mino/S.dds");
    assert_eq!(asset_path(MinoKind::Z), "Assets/spriteData/mino/Z.dds");
    assert_eq!(asset_path(MinoKind::T), "Assets/spriteData/mino/T.dds");
}

#[test]
fn test_raw_index_lookup_follows_table_order() {
    let expected = ["I", "O", "J", "L", "S", "Z", "T"];
    for (i, letter) in expected.iter().enumerate() {
        assert_eq!(
            asset_path_for_index(i as i32).unwrap(),
            format!("Assets/spriteData/mino/{}.dds", letter)
        );
    }
}

#[test]
fn test_none_sentinel_is_rejected() {
    assert_eq!(
        asset_path_for_index(MinoKind::NONE_INDEX).unwrap_err(),
        StageError::UnknownMino(-1)
    );
    assert_eq!(
        asset_path_for_index(MinoKind::COUNT as i32).unwrap_err(),
        StageError::UnknownMino(7)
    );
}

#[test]
fn test_paths_map_back_to_kinds() {
    for kind in MinoKind::ALL {
        assert_eq!(kind_for_asset_path(asset_path(kind)), Some(kind));
    }
}
