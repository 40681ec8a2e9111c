use pry_core::action::Direction;
use pry_core::{GameLoop, GameLoopResult, GameRng, GameState};
use strum::IntoEnumIterator;

fn new_game(seed: u64) -> GameLoop {
    GameLoop::new(GameState::new(GameRng::new(seed)))
}

/// All item names in the world plus the inventory, sorted
fn item_multiset(state: &GameState) -> Vec<String> {
    let mut items: Vec<String> = state
        .world
        .rooms()
        .flat_map(|r| r.items.iter().cloned())
        .chain(state.inventory.items().iter().cloned())
        .collect();
    items.sort();
    items
}

#[test]
fn take_key_at_home() {
    let mut game = new_game(1);
    game.execute_line("take ключ");

    let state = game.state();
    assert!(state.inventory.contains("ключ"));
    assert!(!state.world.room("home").unwrap().items.contains(&"ключ".to_string()));
}

#[test]
fn go_north_twice() {
    let mut game = new_game(1);
    game.execute_line("go north");
    assert_eq!(game.state().world.current_id(), "street");
    game.state_mut().take_messages();

    game.execute_line("go north");
    assert_eq!(game.state().world.current_id(), "street");
    assert_eq!(game.state_mut().take_messages(), ["Туди не пройти."]);
}

#[test]
fn every_direction_from_every_room() {
    let room_ids: Vec<String> = new_game(1)
        .state()
        .world
        .room_ids()
        .into_iter()
        .map(String::from)
        .collect();

    for id in &room_ids {
        for dir in Direction::iter() {
            let mut game = new_game(1);
            game.state_mut().world.set_current(id).unwrap();
            let expected = game
                .state()
                .world
                .current_room()
                .exit(dir.name())
                .map(String::from);

            game.execute_line(&format!("go {}", dir));
            let messages = game.state_mut().take_messages();

            match expected {
                Some(target) => {
                    assert_eq!(game.state().world.current_id(), target);
                    let name = &game.state().world.current_room().name;
                    assert_eq!(messages[0], format!("\n[{}]", name));
                }
                None => {
                    assert_eq!(game.state().world.current_id(), id);
                    assert_eq!(messages, ["Туди не пройти."]);
                }
            }
        }
    }
}

#[test]
fn take_then_drop_preserves_items() {
    let mut game = new_game(1);
    let before = item_multiset(game.state());

    game.execute_line("take КЛЮЧ");
    game.execute_line("n");
    game.execute_line("drop ключ");
    game.execute_line("take монета");
    game.execute_line("drop монета");

    assert_eq!(item_multiset(game.state()), before);
}

#[test]
fn give_apple_to_marko() {
    for seed in 0..10 {
        let mut game = new_game(seed);
        for line in ["n", "e", "take яблуко"] {
            game.execute_line(line);
        }
        game.state_mut().player.hp = 15;
        game.state_mut()
            .world
            .current_room_mut()
            .npc_mut("Марко")
            .unwrap()
            .hostile = true;

        game.execute_line("give яблуко Марко");

        let state = game.state();
        assert!(!state.inventory.contains("яблуко"));
        assert!(!state.world.current_room().find_npc("Марко").unwrap().hostile);
        let healed = state.player.hp == 18;
        let flashlight = state.inventory.contains(pry_core::GIFT_REWARD_ITEM);
        assert!(healed ^ flashlight);
    }
}

#[test]
fn give_disliked_item_is_a_sink() {
    let mut game = new_game(1);
    game.execute_line("take ключ");
    let before = item_multiset(game.state()).len();

    game.execute_line("give ключ Карл");

    assert_eq!(item_multiset(game.state()).len(), before - 1);
    assert!(game.state().inventory.is_empty());
}

#[test]
fn quoted_npc_name() {
    let mut game = new_game(1);
    game.execute_line("talk \"карл\"");
    assert_eq!(
        game.state_mut().take_messages(),
        ["Карл: \"Привіт! Якщо знайдеш монету — покажи.\""]
    );
}

#[test]
fn fighting_until_death_ends_the_game() {
    let mut game = new_game(3);
    game.execute_line("n");
    game.state_mut().player.hp = 1;
    game.state_mut()
        .world
        .current_room_mut()
        .npc_mut("Гоблін")
        .unwrap()
        .hp = 100;

    let result = game.execute_line("attack Гоблін");
    assert_eq!(
        result,
        GameLoopResult::PlayerDied(pry_core::LOSS_MESSAGE.to_string())
    );
    assert!(game.state().player.is_dead());
}

#[test]
fn same_seed_same_fight() {
    let fight = |seed| {
        let mut game = new_game(seed);
        for line in ["n", "attack Гоблін", "attack Гоблін", "attack Гоблін"] {
            game.execute_line(line);
        }
        game.into_state().messages
    };
    assert_eq!(fight(77), fight(77));
}
