//! Failure handling per codec.

use crate::common::*;
use questsave::prelude::*;

#[test]
fn missing_files_load_as_nothing() {
    let (_temp, slots) = temp_slots();

    assert!(slots.load_player().unwrap().is_none());
    assert!(slots.load_status().is_none());
    assert!(slots.load_name().is_none());
}

#[test]
fn four_line_player_file_is_unequipped() {
    let (_temp, slots) = temp_slots();
    write_raw(&slots, Slot::Player, "勇者\n80\n100\n5\n");

    let loaded = slots.load_player().unwrap().unwrap();
    assert_eq!(loaded, hero());
}

#[test]
fn malformed_player_number_is_an_error() {
    let (_temp, slots) = temp_slots();
    write_raw(&slots, Slot::Player, "勇者\n80\nfull\n5\n\n\n");

    let err = slots.load_player().unwrap_err();
    assert!(err.is_invalid_number());
    assert!(matches!(
        err,
        Error::Codec(CodecError::InvalidNumber { field: "max_hp", .. })
    ));
}

#[test]
fn unified_player_decode_reports_io() {
    let (_temp, slots) = temp_slots();
    let err = line_record::try_decode(slots.path_of(Slot::Player)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn status_failure_kinds() {
    let (_temp, slots) = temp_slots();
    let path = slots.path_of(Slot::Status);

    write_raw(&slots, Slot::Status, "100,abc,5");
    assert!(slots.load_status().is_none());
    assert_eq!(csv_triple::try_decode(&path).unwrap_err().kind(), ErrorKind::InvalidNumber);

    write_raw(&slots, Slot::Status, "100,50");
    assert!(slots.load_status().is_none());
    assert_eq!(csv_triple::try_decode(&path).unwrap_err().kind(), ErrorKind::Shape);

    std::fs::remove_file(&path).unwrap();
    assert_eq!(csv_triple::try_decode(&path).unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn empty_name_file_loads_as_nothing() {
    let (_temp, slots) = temp_slots();
    slots.save_name("").unwrap();
    assert!(slots.load_name().is_none());
}

#[test]
fn save_into_removed_directory_fails() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("slot");
    let slots = SaveSlots::open(&dir).unwrap();
    std::fs::remove_dir(&dir).unwrap();

    let err = slots.save_player(&hero()).unwrap_err();
    assert!(err.is_io());
    assert!(slots.save_status(1, 2, 3).unwrap_err().is_io());
    assert!(slots.save_name("勇者").unwrap_err().is_io());
}
