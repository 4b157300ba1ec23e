use stratego::{
    BitBoardError, ConfigError, Coord, GameConfig, HomeRows, RankCounts, Side,
};

/// Flag plus two Scouts.
const TINY_QUOTA: RankCounts = RankCounts::new([1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]);

fn tiny(
    rows: u8,
    cols: u8,
    lakes: &[(u8, u8)],
    red: (u8, u8),
    blue: (u8, u8),
) -> Result<GameConfig, ConfigError> {
    tiny_with_quota(rows, cols, lakes, red, blue, TINY_QUOTA)
}

fn tiny_with_quota(
    rows: u8,
    cols: u8,
    lakes: &[(u8, u8)],
    red: (u8, u8),
    blue: (u8, u8),
    quota: RankCounts,
) -> Result<GameConfig, ConfigError> {
    GameConfig::new(
        rows,
        cols,
        lakes.iter().map(|&(r, c)| Coord::new(r, c)).collect(),
        HomeRows::new(red.0, red.1),
        HomeRows::new(blue.0, blue.1),
        quota,
    )
}

#[test]
fn test_classic_is_valid() {
    let config = GameConfig::classic();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(GameConfig::default(), config);
    assert_eq!(config.lakes().len(), 8);
    assert!(config.is_lake(Coord::new(5, 7)));
    assert!(!config.is_lake(Coord::new(5, 8)));
}

#[test]
fn test_small_board_is_valid() {
    let config = tiny(4, 3, &[], (3, 3), (0, 0)).unwrap();
    assert_eq!(config.pieces_per_side(), 3);
    assert_eq!(config.back_row(Side::Red), 3);
    assert_eq!(config.back_row(Side::Blue), 0);
}

#[test]
fn test_board_dimension_errors() {
    assert_eq!(tiny(0, 3, &[], (3, 3), (0, 0)), Err(ConfigError::EmptyBoard));
    assert_eq!(tiny(4, 0, &[], (3, 3), (0, 0)), Err(ConfigError::EmptyBoard));
    assert_eq!(
        tiny(12, 12, &[], (11, 11), (0, 0)),
        Err(ConfigError::TooManyCells(BitBoardError::SizeTooLarge {
            cells: 144,
            capacity: 128
        }))
    );
}

#[test]
fn test_lake_errors() {
    assert_eq!(
        tiny(4, 3, &[(5, 0)], (3, 3), (0, 0)),
        Err(ConfigError::LakeOutOfBounds(Coord::new(5, 0)))
    );
    assert_eq!(
        tiny(4, 3, &[(1, 1), (1, 1)], (3, 3), (0, 0)),
        Err(ConfigError::DuplicateLake(Coord::new(1, 1)))
    );
}

#[test]
fn test_home_row_errors() {
    assert_eq!(
        tiny(4, 3, &[], (3, 4), (0, 0)),
        Err(ConfigError::HomeRowsOutOfBounds(Side::Red))
    );
    assert_eq!(
        tiny(4, 3, &[], (3, 3), (1, 0)),
        Err(ConfigError::HomeRowsOutOfBounds(Side::Blue))
    );
    assert_eq!(
        tiny(4, 3, &[], (1, 3), (0, 1)),
        Err(ConfigError::HomeZonesOverlap)
    );
}

#[test]
fn test_quota_errors() {
    let no_flag = RankCounts::new([0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        tiny_with_quota(4, 3, &[], (3, 3), (0, 0), no_flag),
        Err(ConfigError::FlagCount(0))
    );

    let crowded = RankCounts::new([1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        tiny_with_quota(4, 3, &[], (3, 3), (0, 0), crowded),
        Err(ConfigError::ZoneTooSmall {
            side: Side::Red,
            capacity: 3,
            pieces: 4
        })
    );

    // a lake inside a home zone takes a cell away
    assert_eq!(
        tiny(4, 3, &[(0, 1)], (3, 3), (0, 0)),
        Err(ConfigError::ZoneTooSmall {
            side: Side::Blue,
            capacity: 2,
            pieces: 3
        })
    );
}

#[test]
fn test_config_json_roundtrip() {
    let config = tiny(4, 3, &[(1, 1)], (3, 3), (0, 0)).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let restored: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let mut value = serde_json::to_value(GameConfig::classic()).unwrap();
    value["home_rows"][1] = value["home_rows"][0].clone();
    let err = serde_json::from_value::<GameConfig>(value).unwrap_err();
    assert!(err.to_string().contains("Home zones overlap"));

    let mut value = serde_json::to_value(GameConfig::classic()).unwrap();
    value["rows"] = serde_json::json!(0);
    assert!(serde_json::from_value::<GameConfig>(value).is_err());
}
