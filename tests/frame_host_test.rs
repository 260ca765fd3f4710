//! End-to-end frame tests: game entry + stage manager under one host

use std::rc::Rc;

use tetris_stage::core::{DrawCommand, SpriteRender};
use tetris_stage::engine::{read_stage_json, FrameHost, FrameObject, Game, StageManagerObject};
use tetris_stage::types::{Vec3, STAGE_CELL_COUNT};

fn sample_host() -> FrameHost {
    let mut host = FrameHost::new();
    host.spawn(Box::new(Game::new()));
    host.spawn(Box::new(StageManagerObject::new()));
    host
}

#[test]
fn test_first_frame_starts_everything() {
    let mut host = sample_host();
    let rc = host.step();

    assert_eq!(rc.frame(), 1);
    assert_eq!(rc.sprite_count(), 4);
    assert_eq!(rc.commands().len(), 4 + STAGE_CELL_COUNT);
}

#[test]
fn test_game_sprites_form_a_row_of_i_blocks() {
    let mut host = sample_host();
    let rc = host.step();

    let sprites: Vec<_> = rc
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Sprite {
                asset,
                position,
                width,
                height,
            } => Some((asset.to_string(), *position, *width, *height)),
            DrawCommand::Guide { .. } => None,
        })
        .collect();

    assert_eq!(sprites.len(), 4);
    for (i, (asset, position, width, height)) in sprites.into_iter().enumerate() {
        assert_eq!(asset, "Assets/spriteData/mino/I.dds");
        assert_eq!(position, Vec3::new(i as f32 * 30.0, 0.0, 0.0));
        assert_eq!((width, height), (30.0, 30.0));
    }
}

#[test]
fn test_draw_list_is_stable_across_frames() {
    let mut host = sample_host();
    let first = host.step().commands().to_vec();
    for frame in 2..=10 {
        let rc = host.step();
        assert_eq!(rc.frame(), frame);
        assert_eq!(rc.commands(), first.as_slice());
    }
}

#[test]
fn test_blocked_cell_draws_its_sprite_while_it_lives() {
    let mut stage = StageManagerObject::new();
    assert!(stage.start());

    let mut block = SpriteRender::new();
    block.init("Assets/spriteData/mino/T.dds", 30.0, 30.0);
    let block = Rc::new(block);
    {
        let grid = stage.manager_mut().unwrap().grid_mut();
        grid.set_blocked(3, 0, true).unwrap();
        grid.attach_sprite(3, 0, &block).unwrap();
    }

    let mut host = FrameHost::new();
    host.spawn(Box::new(stage));

    let rc = host.step();
    assert_eq!(rc.sprite_count(), 1);
    assert_eq!(rc.commands().len(), STAGE_CELL_COUNT);

    // The cell only refers to the sprite; once it is gone nothing is drawn.
    drop(block);
    let rc = host.step();
    assert_eq!(rc.sprite_count(), 0);
    assert_eq!(rc.commands().len(), STAGE_CELL_COUNT - 1);
}

#[test]
fn test_stage_is_dumped_when_the_object_is_dropped() {
    let path = std::env::temp_dir().join(format!(
        "tetris-stage-host-dump-{}.json",
        std::process::id()
    ));

    let mut stage = StageManagerObject::new().with_dump_path(&path);
    assert!(stage.start());
    stage
        .manager_mut()
        .unwrap()
        .grid_mut()
        .set_blocked(9, 21, true)
        .unwrap();

    let mut host = FrameHost::new();
    host.spawn(Box::new(stage));
    for _ in 0..5 {
        host.step();
    }
    drop(host);

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["width"], 10);
    assert_eq!(json["height"], 22);
    assert_eq!(json["frames"], 5);
    assert_eq!(json["blocked"][21][9], true);

    let snapshot = read_stage_json(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(snapshot.occupied_count(), 1);
    assert_eq!(snapshot.origin, [-45.0, 50.0, 0.0]);
}

#[test]
fn test_released_stage_keeps_the_host_running() {
    let mut stage = StageManagerObject::new();
    stage.slot_mut().delete_instance();

    let mut host = FrameHost::new();
    let game = host.spawn(Box::new(Game::new()));
    let stage = host.spawn(Box::new(stage));

    for _ in 0..3 {
        let rc = host.step();
        assert_eq!(rc.commands().len(), 4);
    }
    assert!(host.is_started(game));
    assert!(!host.is_started(stage));
}
