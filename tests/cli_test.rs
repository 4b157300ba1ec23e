use std::process::Command;

use stratego::{simulate, GameConfig, SimReport};

#[test]
fn test_sim_is_reproducible() {
    let config = GameConfig::classic();
    let a = simulate(&config, 1234, 2000).unwrap();
    let b = simulate(&config, 1234, 2000).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed, 1234);
    assert!(a.moves <= 2000);
    assert_eq!(a.capped, a.winner.is_none());
}

#[test]
fn test_sim_respects_move_cap() {
    let report = simulate(&GameConfig::classic(), 77, 3).unwrap();
    assert!(report.moves <= 3);
}

#[test]
fn test_sim_command_prints_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_stratego"))
        .args(["sim", "--seed", "7", "--max-moves", "500"])
        .output()
        .expect("failed to run stratego");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: SimReport = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report.seed, 7);
    assert!(report.moves <= 500);
    assert_eq!(report, simulate(&GameConfig::classic(), 7, 500).unwrap());
}
