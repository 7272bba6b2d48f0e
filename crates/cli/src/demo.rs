//! Walkthrough of all three save formats.
//!
//! Saves sample data into a save directory, loads it back, and prints what
//! came out. Returns a process exit code: 0 when every step loaded what it
//! saved.

use questsave::{PlayerRecord, SaveSlots, StatusTriple};
use std::path::Path;

const SAMPLE_NAME: &str = "勇者アレン";
const SAMPLE_STATUS: StatusTriple = StatusTriple {
    hp: 100,
    mp: 50,
    level: 5,
};

fn sample_player() -> PlayerRecord {
    let mut player = PlayerRecord::new("勇者", 100, 5);
    player.set_hp(80);
    player.set_weapon(Some("鉄の剣"));
    player.set_armor(Some("革の防具"));
    player
}

/// Run the walkthrough in `dir`.
pub fn run_demo(dir: &Path) -> i32 {
    let slots = match SaveSlots::open(dir) {
        Ok(slots) => slots,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    let results = [name_demo(&slots), status_demo(&slots), player_demo(&slots)];
    if results.iter().all(|ok| *ok) {
        0
    } else {
        1
    }
}

fn name_demo(slots: &SaveSlots) -> bool {
    println!("========== 名前保存テスト ==========");
    if slots.save_name(SAMPLE_NAME).is_err() {
        return report(false);
    }
    match slots.load_name() {
        Some(name) => {
            println!("プレイヤー名: {}", name);
            report(name == SAMPLE_NAME)
        }
        None => report(false),
    }
}

fn status_demo(slots: &SaveSlots) -> bool {
    println!("========== ステータス保存テスト ==========");
    if slots
        .save_status(SAMPLE_STATUS.hp, SAMPLE_STATUS.mp, SAMPLE_STATUS.level)
        .is_err()
    {
        return report(false);
    }
    match slots.load_status() {
        Some(status) => {
            println!("HP: {} (体力)", status.hp);
            println!("MP: {} (魔法力)", status.mp);
            println!("Level: {} (レベル)", status.level);
            report(status == SAMPLE_STATUS)
        }
        None => report(false),
    }
}

fn player_demo(slots: &SaveSlots) -> bool {
    println!("========== セーブデータテスト ==========");
    let player = sample_player();
    if slots.save_player(&player).is_err() {
        return report(false);
    }
    match slots.load_player() {
        Ok(Some(loaded)) => {
            println!("{}", loaded);
            report(loaded == player)
        }
        Ok(None) => report(false),
        Err(e) => {
            eprintln!("(error) {}", e);
            report(false)
        }
    }
}

fn report(ok: bool) -> bool {
    if ok {
        println!("テスト成功！\n");
    } else {
        println!("テスト失敗\n");
    }
    ok
}
