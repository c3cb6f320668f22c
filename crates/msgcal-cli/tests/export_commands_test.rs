use msgcal_testing::TestWorld;

fn package() -> TestWorld {
    TestWorld::new()
        .with_server_channel("1", "Crab Club", "general", "GUILD_TEXT")
        .with_server_channel("2", "Crab Club", "hangout", "GUILD_VOICE")
        .with_server_channel("3", "Crab Club", "rules", "GUILD_CATEGORY")
        .with_server_channel("4", "Crab Club", "bug-42", "PUBLIC_THREAD")
        .with_server_channel("5", "Other Place", "lobby", "GUILD_TEXT")
        .with_direct_message("10", "amy")
        .with_group("11", "book club")
        .with_index_entry("12", Some("None"))
        .with_index_entry("13", None)
        .with_messages("1", &["2023-03-01 09:00:00", "2023-03-01 18:30:00"])
        .with_messages("2", &["2023-03-02T12:00:00"])
        .with_messages("4", &["2023-03-05 08:00:00+02:00"])
        .with_messages("10", &["2023-03-01 07:00:00", "2023-03-03 07:00:00"])
        .with_messages("11", &["2023-03-04 21:00:00.123"])
}

#[test]
fn test_index_counts() {
    let result = package().run(&["index"]).unwrap();
    assert!(result.success(), "index failed: {}", result.stderr());

    assert_eq!(
        result.stdout(),
        "Loaded the index\n    Servers              2\n    Channels             5\n    Direct Messages      2\n"
    );
}

#[test]
fn test_index_json() {
    let result = package().run(&["--format", "json", "index"]).unwrap();
    let json = result.json().unwrap();

    assert_eq!(json["servers"]["Crab Club"].as_array().unwrap().len(), 4);
    assert_eq!(json["direct_messages"][0]["username"], "amy");
    assert!(json["direct_messages"][1]["username"].is_null());
}

#[test]
fn test_missing_export_is_reported() {
    let world = package();
    std::fs::remove_dir_all(world.export_dir().join("Messages")).unwrap();

    let result = world.run(&["index"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Cannot find"), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("Messages"));
}

#[test]
fn test_channels_lists_servers_and_dms() {
    let result = package().run(&["channels"]).unwrap();
    assert!(result.success(), "channels failed: {}", result.stderr());

    let out = result.stdout();
    assert!(out.contains("    Crab Club            4 channels\n"));
    assert!(out.contains("    Other Place          1 channels\n"));
    assert!(out.contains("    amy\n"));
    assert!(out.contains("    book club (group)\n"));
}

#[test]
fn test_channels_of_server_grouped_by_kind() {
    let result = package().run(&["channels", "--server", "Crab Club"]).unwrap();
    assert!(result.success(), "channels failed: {}", result.stderr());

    insta::assert_snapshot!(result.stdout(), @r"
Loaded the server Crab Club
    Channels (Total)     3
        Text Channels        1
        Voice Channels       1
        Public Threads       1

Text Channels
    general

Voice Channels
    hangout

Public Threads
    bug-42
");
}

#[test]
fn test_unknown_server() {
    let result = package().run(&["channels", "--server", "Nowhere"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Unknown server 'Nowhere'"));
}

#[test]
fn test_stats_for_server_skips_unlisted_kinds() {
    let result = package()
        .run(&["--format", "json", "stats", "--server", "Crab Club"])
        .unwrap();
    assert!(result.success(), "stats failed: {}", result.stderr());

    let stats = result.json().unwrap();
    assert_eq!(stats["total_count"], 4);
    assert_eq!(stats["active_days"], 3);
    assert_eq!(stats["max_count"], 2);
    assert_eq!(stats["first_day"], "2023-03-01");
    assert_eq!(stats["last_day"], "2023-03-05");
}

#[test]
fn test_stats_for_one_channel_and_dms() {
    let result = package()
        .run(&[
            "--format",
            "json",
            "stats",
            "--server",
            "Crab Club",
            "--channel",
            "general",
            "--all-dms",
        ])
        .unwrap();
    assert!(result.success(), "stats failed: {}", result.stderr());

    let stats = result.json().unwrap();
    // 2023-03-01: 2 (general) + 1 (amy)
    assert_eq!(stats["max_count"], 3);
    assert_eq!(stats["total_count"], 5);
    assert_eq!(stats["active_days"], 3);
    assert_eq!(stats["median_count"], 1.0);
    assert_eq!(stats["first_seen"], "2023-03-01T07:00:00");
    assert_eq!(stats["last_seen"], "2023-03-04T21:00:00.123");
}

#[test]
fn test_stats_plain_panel() {
    let result = package().run(&["stats", "--dm", "amy"]).unwrap();
    assert!(result.success(), "stats failed: {}", result.stderr());

    let out = result.stdout();
    assert!(out.starts_with("Statistics\n"));
    assert!(out.contains("    Channels             1\n"));
    assert!(out.contains("    Mean per day         1.00\n"));
}

#[test]
fn test_bad_timestamp_names_the_file() {
    let world = package().with_messages("5", &["yesterday"]);

    let result = world.run(&["stats", "--server", "Other Place"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("yesterday"), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("c5"));
}

#[test]
fn test_guidance_without_command() {
    let result = package().run(&[]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Export found at"));
    assert!(result.stdout().contains("msgcal --help"));
}
