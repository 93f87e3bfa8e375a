//! Schedule-level tests for the walk systems: advance, wrap, and sprite sync
//! run against a plain world, no window or frame loop involved.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use spritewalk::components::screenposition::ScreenPosition;
use spritewalk::components::sprite::Sprite;
use spritewalk::components::walkcycle::WalkCycle;
use spritewalk::resources::input::InputState;
use spritewalk::resources::sheetstore::SheetStore;
use spritewalk::sheet::SheetLayout;
use spritewalk::systems::animation::{advance_walk, sync_sprite_frame, wrap_walk};

const SHEET_KEY: &str = "walker";

fn layout() -> SheetLayout {
    SheetLayout::new(70, 70, 3).unwrap()
}

fn make_world() -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(InputState::default());

    let mut sheets = SheetStore::default();
    sheets.insert(SHEET_KEY, layout());
    world.insert_resource(sheets);

    let entity = world
        .spawn((
            Sprite::new(SHEET_KEY, layout().tile_rect(0)),
            ScreenPosition::default(),
            WalkCycle::new(3, 10).with_substitutions(vec![(1, 2)]),
        ))
        .id();
    (world, entity)
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(advance_walk);
    schedule.add_systems(wrap_walk.after(advance_walk));
    schedule.add_systems(sync_sprite_frame.after(wrap_walk));
    schedule
}

fn press_advance(world: &mut World) {
    let mut input = world.resource_mut::<InputState>();
    input.begin_tick();
    input.note_key_down(KeyboardKey::KEY_DOWN);
}

fn release_all(world: &mut World) {
    world.resource_mut::<InputState>().begin_tick();
}

#[test]
fn advance_press_updates_sprite_in_same_tick() {
    let (mut world, entity) = make_world();
    let mut schedule = make_schedule();

    press_advance(&mut world);
    schedule.run(&mut world);

    let walk = world.get::<WalkCycle>(entity).unwrap();
    assert_eq!(walk.frame_index(), 1);

    // The drawn rect is already the substituted tile, never the raw frame.
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.src, layout().tile_rect(2));
    let pos = world.get::<ScreenPosition>(entity).unwrap();
    assert_eq!(pos.y, 10);
}

#[test]
fn idle_ticks_leave_state_but_keep_sprite_synced() {
    let (mut world, entity) = make_world();
    let mut schedule = make_schedule();

    release_all(&mut world);
    for _ in 0..5 {
        schedule.run(&mut world);
    }

    let walk = world.get::<WalkCycle>(entity).unwrap();
    assert_eq!(walk.frame_index(), 0);
    assert_eq!(walk.scroll_offset(), 0);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.src, layout().tile_rect(0));
}

#[test]
fn full_cycle_returns_to_first_tile_with_scroll_kept() {
    let (mut world, entity) = make_world();
    let mut schedule = make_schedule();

    for _ in 0..3 {
        press_advance(&mut world);
        schedule.run(&mut world);
    }

    let walk = world.get::<WalkCycle>(entity).unwrap();
    assert_eq!(walk.frame_index(), 0);
    assert_eq!(walk.scroll_offset(), 30);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.src, layout().tile_rect(0));
    let pos = world.get::<ScreenPosition>(entity).unwrap();
    assert_eq!(pos.y, 30);
}

#[test]
fn huge_scroll_offset_saturates_screen_position() {
    let (mut world, _entity) = make_world();
    let giant = world
        .spawn((
            Sprite::new(SHEET_KEY, layout().tile_rect(0)),
            ScreenPosition::default(),
            WalkCycle::new(3, i64::from(i32::MAX) + 1),
        ))
        .id();
    let mut schedule = make_schedule();

    press_advance(&mut world);
    schedule.run(&mut world);

    assert_eq!(world.get::<ScreenPosition>(giant).unwrap().y, i32::MAX);
}

#[test]
fn missing_sheet_key_leaves_sprite_untouched() {
    let (mut world, entity) = make_world();
    let mut schedule = make_schedule();

    world.get_mut::<Sprite>(entity).unwrap().sheet_key = "missing".to_string();
    let before = world.get::<Sprite>(entity).unwrap().src;

    press_advance(&mut world);
    schedule.run(&mut world);

    // The walk still advanced; only the sprite sync was skipped.
    assert_eq!(world.get::<WalkCycle>(entity).unwrap().frame_index(), 1);
    assert_eq!(world.get::<Sprite>(entity).unwrap().src, before);
}
