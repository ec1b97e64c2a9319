//! Game flow integration tests: firing, contacts, win/loss transitions and
//! monster spawning, run on a headless ECS world.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use monsterlane::components::boxcollider::BoxCollider;
use monsterlane::components::category::CollisionFilter;
use monsterlane::components::mapposition::MapPosition;
use monsterlane::components::monster::Monster;
use monsterlane::components::moveto::MoveTo;
use monsterlane::components::player::Player;
use monsterlane::components::projectile::Projectile;
use monsterlane::events::arrival::{ArrivalEvent, observe_arrival};
use monsterlane::events::audio::AudioCmd;
use monsterlane::events::contact::{ContactEvent, observe_contact};
use monsterlane::events::input::FireEvent;
use monsterlane::resources::gameconfig::GameConfig;
use monsterlane::resources::gamestate::{
    GameState, GameStates, NextGameState, NextGameStates,
};
use monsterlane::resources::rng::GameRng;
use monsterlane::resources::score::Score;
use monsterlane::resources::screensize::ScreenSize;
use monsterlane::resources::spawner::MonsterSpawner;
use monsterlane::resources::worldtime::WorldTime;
use monsterlane::systems::collision::collision_detector;
use monsterlane::systems::firing::fire_projectile_observer;
use monsterlane::systems::movement::move_to_system;
use monsterlane::systems::spawn::spawn_monsters;
use monsterlane::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World with all gameplay resources and observers, already in `Playing`.
fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 0.0,
        time_scale: 1.0,
    });
    world.insert_resource(ScreenSize { w: 960, h: 540 });
    world.insert_resource(GameConfig::new());
    world.insert_resource(Score::default());
    world.insert_resource(MonsterSpawner::new(1.0));
    world.insert_resource(GameRng::with_seed(42));
    world.insert_resource(NextGameState::new());
    world.init_resource::<Messages<AudioCmd>>();

    let mut state = GameState::new();
    state.set(GameStates::Playing);
    world.insert_resource(state);

    world.spawn(Observer::new(observe_contact));
    world.spawn(Observer::new(observe_arrival));
    world.spawn(Observer::new(fire_projectile_observer));
    world.flush();
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world.spawn((Player, MapPosition::new(x, y))).id()
}

fn spawn_monster(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Monster,
            MapPosition::new(x, y),
            BoxCollider::centered(44.0, 36.0),
            CollisionFilter::monster(),
        ))
        .id()
}

fn spawn_projectile(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Projectile,
            MapPosition::new(x, y),
            BoxCollider::centered(12.0, 12.0),
            CollisionFilter::projectile(),
        ))
        .id()
}

fn count_projectiles(world: &mut World) -> usize {
    world.query::<&Projectile>().iter(world).count()
}

fn count_monsters(world: &mut World) -> usize {
    world.query::<&Monster>().iter(world).count()
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(move_to_system);
    schedule.run(world);
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn tick_spawner(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_monsters);
    schedule.run(world);
}

// --------------- Firing ---------------

#[test]
fn fire_spawns_projectile_toward_tap() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);

    world.trigger(FireEvent {
        at: Vector2 { x: 200.0, y: 150.0 },
    });
    world.flush();

    assert_eq!(count_projectiles(&mut world), 1);

    let mut q = world.query::<(&MoveTo, &MapPosition, &Projectile)>();
    let (tween, pos, _) = q.single(&world).unwrap();

    // Projectile starts at the player.
    assert!(approx_eq(pos.pos.x, 100.0));
    assert!(approx_eq(pos.pos.y, 100.0));

    // Offset (100, 50) normalizes to (2/sqrt(5), 1/sqrt(5)); the
    // destination is 1000 units along that direction.
    let inv_len = 1.0 / (100.0f32 * 100.0 + 50.0 * 50.0).sqrt();
    let expected = Vector2 {
        x: 100.0 + 100.0 * inv_len * 1000.0,
        y: 100.0 + 50.0 * inv_len * 1000.0,
    };
    assert!(approx_eq(tween.to.x, expected.x));
    assert!(approx_eq(tween.to.y, expected.y));
    assert!(approx_eq(tween.duration, 2.0));
}

#[test]
fn fire_behind_player_is_refused() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);

    world.trigger(FireEvent {
        at: Vector2 { x: 50.0, y: 300.0 },
    });
    world.flush();

    assert_eq!(count_projectiles(&mut world), 0);
}

#[test]
fn fire_on_player_position_is_refused() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);

    world.trigger(FireEvent {
        at: Vector2 { x: 100.0, y: 100.0 },
    });
    world.flush();

    assert_eq!(count_projectiles(&mut world), 0);
}

#[test]
fn fire_straight_up_is_allowed() {
    // offset.x == 0 is not "behind".
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);

    world.trigger(FireEvent {
        at: Vector2 { x: 100.0, y: 10.0 },
    });
    world.flush();

    assert_eq!(count_projectiles(&mut world), 1);
}

#[test]
fn fire_ignored_outside_playing() {
    let mut world = make_world();
    spawn_player(&mut world, 100.0, 100.0);
    world
        .resource_mut::<GameState>()
        .set(GameStates::GameOver { won: false });

    world.trigger(FireEvent {
        at: Vector2 { x: 500.0, y: 100.0 },
    });
    world.flush();

    assert_eq!(count_projectiles(&mut world), 0);
}

// --------------- Contacts ---------------

#[test]
fn contact_despawns_both_and_scores() {
    let mut world = make_world();
    let monster = spawn_monster(&mut world, 400.0, 200.0);
    let projectile = spawn_projectile(&mut world, 400.0, 200.0);

    world.trigger(ContactEvent {
        a: projectile,
        b: monster,
    });
    world.flush();

    assert_eq!(count_monsters(&mut world), 0);
    assert_eq!(count_projectiles(&mut world), 0);
    assert_eq!(world.resource::<Score>().destroyed(), 1);
    assert!(world.resource::<NextGameState>().is_unchanged());
}

#[test]
fn repeated_contact_for_same_pair_scores_once() {
    let mut world = make_world();
    let monster = spawn_monster(&mut world, 400.0, 200.0);
    let projectile = spawn_projectile(&mut world, 400.0, 200.0);

    let contact = ContactEvent {
        a: monster,
        b: projectile,
    };
    world.trigger(contact);
    world.flush();
    world.trigger(contact);
    world.flush();

    assert_eq!(world.resource::<Score>().destroyed(), 1);
}

#[test]
fn contact_between_two_monsters_is_ignored() {
    let mut world = make_world();
    let a = spawn_monster(&mut world, 400.0, 200.0);
    let b = spawn_monster(&mut world, 410.0, 200.0);

    world.trigger(ContactEvent { a, b });
    world.flush();

    assert_eq!(count_monsters(&mut world), 2);
    assert_eq!(world.resource::<Score>().destroyed(), 0);
}

#[test]
fn win_requested_when_count_passes_threshold() {
    let mut world = make_world();
    let threshold = world.resource::<GameConfig>().win_threshold;

    for i in 0..=threshold {
        let monster = spawn_monster(&mut world, 400.0, 200.0);
        let projectile = spawn_projectile(&mut world, 400.0, 200.0);
        world.trigger(ContactEvent {
            a: monster,
            b: projectile,
        });
        world.flush();

        if i < threshold {
            assert!(
                world.resource::<NextGameState>().is_unchanged(),
                "no transition before the threshold is passed"
            );
        }
    }

    assert_eq!(world.resource::<Score>().destroyed(), threshold + 1);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::GameOver { won: true })
    );
}

#[test]
fn no_scoring_after_game_over() {
    let mut world = make_world();
    world
        .resource_mut::<GameState>()
        .set(GameStates::GameOver { won: false });

    let monster = spawn_monster(&mut world, 400.0, 200.0);
    let projectile = spawn_projectile(&mut world, 400.0, 200.0);
    world.trigger(ContactEvent {
        a: monster,
        b: projectile,
    });
    world.flush();

    // Straggler contacts still remove the entities but never score.
    assert_eq!(count_monsters(&mut world), 0);
    assert_eq!(world.resource::<Score>().destroyed(), 0);
    assert!(world.resource::<NextGameState>().is_unchanged());
}

// --------------- Collision detection ---------------

#[test]
fn overlapping_pair_is_detected_and_resolved() {
    let mut world = make_world();
    spawn_monster(&mut world, 400.0, 200.0);
    spawn_projectile(&mut world, 405.0, 203.0);

    tick_collision_detector(&mut world);

    assert_eq!(count_monsters(&mut world), 0);
    assert_eq!(count_projectiles(&mut world), 0);
    assert_eq!(world.resource::<Score>().destroyed(), 1);
}

#[test]
fn separated_pair_is_not_detected() {
    let mut world = make_world();
    spawn_monster(&mut world, 400.0, 200.0);
    spawn_projectile(&mut world, 600.0, 200.0);

    tick_collision_detector(&mut world);

    assert_eq!(count_monsters(&mut world), 1);
    assert_eq!(count_projectiles(&mut world), 1);
    assert_eq!(world.resource::<Score>().destroyed(), 0);
}

// --------------- Traversal and arrivals ---------------

#[test]
fn monster_arrival_requests_loss() {
    let mut world = make_world();
    let start = Vector2 { x: 982.0, y: 200.0 };
    let end = Vector2 { x: -22.0, y: 200.0 };
    world.spawn((
        Monster,
        MapPosition { pos: start },
        MoveTo::new(start, end, 3.0),
    ));

    for _ in 0..3 {
        update_world_time(&mut world, 1.0);
        tick_movement(&mut world);
    }

    assert_eq!(count_monsters(&mut world), 0);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        &NextGameStates::Pending(GameStates::GameOver { won: false })
    );
}

#[test]
fn projectile_arrival_is_just_removed() {
    let mut world = make_world();
    let start = Vector2 { x: 96.0, y: 270.0 };
    let end = Vector2 { x: 1096.0, y: 270.0 };
    world.spawn((
        Projectile,
        MapPosition { pos: start },
        MoveTo::new(start, end, 2.0),
    ));

    update_world_time(&mut world, 2.5);
    tick_movement(&mut world);

    assert_eq!(count_projectiles(&mut world), 0);
    assert!(world.resource::<NextGameState>().is_unchanged());
}

#[test]
fn traversal_interpolates_position() {
    let mut world = make_world();
    let start = Vector2 { x: 0.0, y: 100.0 };
    let end = Vector2 { x: 100.0, y: 100.0 };
    let entity = world
        .spawn((Monster, MapPosition { pos: start }, MoveTo::new(start, end, 4.0)))
        .id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 25.0));
    assert!(approx_eq(pos.pos.y, 100.0));
}

#[test]
fn arrival_after_contact_is_a_no_op() {
    // A kill and a traversal completion can land on the same frame; the
    // contact wins and the stale arrival must not despawn anything twice
    // nor request a loss.
    let mut world = make_world();
    let monster = spawn_monster(&mut world, 400.0, 200.0);
    let projectile = spawn_projectile(&mut world, 400.0, 200.0);

    world.trigger(ContactEvent {
        a: monster,
        b: projectile,
    });
    world.flush();
    world.trigger(ArrivalEvent { entity: monster });
    world.flush();

    assert_eq!(world.resource::<Score>().destroyed(), 1);
    assert!(world.resource::<NextGameState>().is_unchanged());
}

// --------------- Spawning ---------------

#[test]
fn spawner_emits_one_monster_per_interval() {
    let mut world = make_world();

    update_world_time(&mut world, 0.5);
    tick_spawner(&mut world);
    assert_eq!(count_monsters(&mut world), 0);

    update_world_time(&mut world, 0.6);
    tick_spawner(&mut world);
    assert_eq!(count_monsters(&mut world), 1);
}

#[test]
fn spawner_catches_up_after_long_frame() {
    let mut world = make_world();

    update_world_time(&mut world, 2.5);
    tick_spawner(&mut world);
    assert_eq!(count_monsters(&mut world), 2);
}

#[test]
fn spawned_monsters_start_off_screen_within_vertical_band() {
    let mut world = make_world();
    let screen = *world.resource::<ScreenSize>();
    let config = world.resource::<GameConfig>().clone();

    update_world_time(&mut world, 5.0);
    tick_spawner(&mut world);

    let mut q = world.query::<(&MapPosition, &MoveTo, &Monster)>();
    let mut seen = 0;
    for (pos, tween, _) in q.iter(&world) {
        seen += 1;
        assert!(pos.pos.x > screen.width());
        assert!(pos.pos.y >= 18.0 && pos.pos.y <= screen.height() - 18.0);
        assert!(tween.to.x < 0.0);
        assert!(approx_eq(tween.to.y, pos.pos.y));
        assert!(
            tween.duration >= config.traversal_min && tween.duration <= config.traversal_max
        );
    }
    assert_eq!(seen, 5);
}
