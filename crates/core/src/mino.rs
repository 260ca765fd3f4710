//! Mino catalog - asset path per mino kind
//!
//! A fixed table of texture paths, one per kind, indexed in `MinoKind` order.
//! There is no lifecycle: the table is a `static` and never changes.

use crate::types::{MinoKind, StageError};

/// Texture path per kind, in `MinoKind::ALL` order
static MINO_ASSET_PATHS: [&str; MinoKind::COUNT] = [
    "Assets/spriteData/mino/I.dds",
    "Assets/spriteData/mino/O.dds",
    "Assets/spriteData/mino/J.dds",
    "Assets/spriteData/mino/L.dds",
    "Assets/spriteData/mino/S.dds",
    "Assets/spriteData/mino/Z.dds",
    "Assets/spriteData/mino/T.dds",
];

/// Asset path for a mino kind
///
/// # Examples
///
/// ```
/// use tetris_stage_core::mino::asset_path;
/// use tetris_stage_core::types::MinoKind;
///
/// assert_eq!(asset_path(MinoKind::I), "Assets/spriteData/mino/I.dds");
/// assert_eq!(asset_path(MinoKind::T), "Assets/spriteData/mino/T.dds");
/// ```
pub fn asset_path(kind: MinoKind) -> &'static str {
    MINO_ASSET_PATHS[kind.index()]
}

/// Asset path for a raw mino index
///
/// The sentinel (`-1`) and any index outside the table are reported as
/// [`StageError::UnknownMino`].
pub fn asset_path_for_index(raw: i32) -> Result<&'static str, StageError> {
    MinoKind::from_index(raw)
        .map(asset_path)
        .ok_or(StageError::UnknownMino(raw))
}

/// Reverse lookup: which kind does an asset path belong to
///
/// Accepts exactly the catalog paths; anything else (other directories,
/// other extensions, lowercase letters) yields `None`. Runs once per drawn
/// sprite, so it compares against the table instead of building strings.
pub fn kind_for_asset_path(path: &str) -> Option<MinoKind> {
    MinoKind::ALL
        .into_iter()
        .find(|kind| MINO_ASSET_PATHS[kind.index()] == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MINO_ASSET_DIR;

    #[test]
    fn every_kind_has_a_path_under_the_asset_dir() {
        for kind in MinoKind::ALL {
            let path = asset_path(kind);
            assert!(path.starts_with(MINO_ASSET_DIR));
            assert!(path.ends_with(&format!("{}.dds", kind.letter())));
        }
    }

    #[test]
    fn sentinel_index_is_a_precondition_violation() {
        assert_eq!(
            asset_path_for_index(MinoKind::NONE_INDEX),
            Err(StageError::UnknownMino(-1))
        );
        assert_eq!(asset_path_for_index(7), Err(StageError::UnknownMino(7)));
        assert_eq!(
            asset_path_for_index(2),
            Ok("Assets/spriteData/mino/J.dds")
        );
    }

    #[test]
    fn reverse_lookup_matches_catalog() {
        for kind in MinoKind::ALL {
            assert_eq!(kind_for_asset_path(asset_path(kind)), Some(kind));
        }
        assert_eq!(kind_for_asset_path("Assets/spriteData/mino/i.dds"), None);
        assert_eq!(kind_for_asset_path("Assets/spriteData/mino/I.png"), None);
        assert_eq!(kind_for_asset_path("Assets/other/I.dds"), None);
        assert_eq!(kind_for_asset_path("Assets/spriteData/mino/II.dds"), None);
    }
}
