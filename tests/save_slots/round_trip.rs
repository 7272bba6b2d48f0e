//! Save then load through each slot.

use crate::common::*;
use questsave::prelude::*;

#[test]
fn unequipped_hero_loads_identical() {
    let (_temp, slots) = temp_slots();
    let hero = hero();

    slots.save_player(&hero).unwrap();
    let loaded = slots.load_player().unwrap().expect("record");

    assert_eq!(loaded, hero);
    assert_eq!(loaded.weapon(), UNEQUIPPED);
    assert_eq!(loaded.armor(), UNEQUIPPED);
}

#[test]
fn player_file_layout_on_disk() {
    let (_temp, slots) = temp_slots();
    let mut hero = hero();
    hero.set_armor(Some("革の防具"));

    slots.save_player(&hero).unwrap();
    let raw = std::fs::read_to_string(slots.path_of(Slot::Player)).unwrap();
    assert_eq!(raw, "勇者\n80\n100\n5\n\n革の防具\n");
}

#[test]
fn saving_twice_is_byte_identical() {
    let (_temp, slots) = temp_slots();
    let mut hero = hero();
    hero.set_weapon(Some("鉄の剣"));

    slots.save_player(&hero).unwrap();
    let first = std::fs::read(slots.path_of(Slot::Player)).unwrap();
    slots.save_player(&hero).unwrap();
    let second = std::fs::read(slots.path_of(Slot::Player)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn later_save_replaces_earlier() {
    let (_temp, slots) = temp_slots();
    let mut hero = hero();
    hero.set_weapon(Some("鉄の剣"));
    slots.save_player(&hero).unwrap();

    hero.unequip_weapon();
    hero.set_hp(12);
    slots.save_player(&hero).unwrap();

    let loaded = slots.load_player().unwrap().unwrap();
    assert_eq!(loaded.hp(), 12);
    assert!(!loaded.is_weapon_equipped());
}

#[test]
fn status_round_trip() {
    let (_temp, slots) = temp_slots();
    slots.save_status(100, 50, 5).unwrap();

    assert_eq!(slots.load_status(), Some(StatusTriple::new(100, 50, 5)));
    let raw = std::fs::read_to_string(slots.path_of(Slot::Status)).unwrap();
    assert_eq!(raw, "100,50,5");
}

#[test]
fn name_round_trip() {
    let (_temp, slots) = temp_slots();
    slots.save_name("勇者アレン").unwrap();

    assert_eq!(slots.load_name().as_deref(), Some("勇者アレン"));
}

#[test]
fn slots_do_not_interfere() {
    let (_temp, slots) = temp_slots();
    slots.save_name("勇者アレン").unwrap();
    slots.save_status(1, 2, 3).unwrap();
    slots.save_player(&hero()).unwrap();

    assert_eq!(slots.load_name().as_deref(), Some("勇者アレン"));
    assert_eq!(slots.load_status(), Some(StatusTriple::new(1, 2, 3)));
    assert_eq!(slots.load_player().unwrap(), Some(hero()));
}

#[test]
fn codecs_work_on_arbitrary_paths() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("save.txt");

    line_record::encode(&hero(), &path).unwrap();
    assert_eq!(line_record::decode(&path).unwrap(), Some(hero()));
}
