use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use video_catalogue::catalog::{load_catalog, CatalogError};
use video_catalogue::model::PlaylistStore;
use video_catalogue::player::RandomPicker;
use video_catalogue::{PlayerConfig, Shell, VideoPlayer};

const GREETING: &str = "Hello and welcome to YouTube, what would you like to do?\n\
                        Enter HELP for list of available commands or EXIT to terminate.\n";

const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!\n";

fn run_session(config: &PlayerConfig, script: &str) -> String {
    let library = config.load_library().expect("Failed to load library");
    let player = VideoPlayer::new(library, PlaylistStore::new(), config.picker(), Vec::new());
    let mut shell = Shell::new(player, config.prompt.clone());

    shell.run(&mut Cursor::new(script)).expect("Session failed");
    shell.player_mut().take_output()
}

#[test]
fn test_session_with_bundled_catalog() {
    let config = PlayerConfig::new().with_prompt("> ");
    let output = run_session(
        &config,
        "number_of_videos\n\
         PLAY amazing_cats_video_id\n\
         CREATE_PLAYLIST Favs\n\
         ADD_TO_PLAYLIST favs amazing_cats_video_id\n\
         EXIT\n\
         NUMBER_OF_VIDEOS\n",
    );

    assert_eq!(
        output,
        format!(
            "{}> 5 videos in the library\n\
             > Playing video: Amazing Cats\n\
             > Successfully created new playlist: Favs\n\
             > Added video to favs: Amazing Cats\n\
             > {}",
            GREETING, FAREWELL
        )
    );
}

#[test]
fn test_invalid_and_blank_lines() {
    let config = PlayerConfig::new().with_prompt("> ");
    let output = run_session(&config, "\nREWIND\nPLAY\n");

    assert_eq!(
        output,
        format!(
            "{}> > Please enter a valid command, type HELP for a list of available commands.\n\
             > Please enter a valid command, type HELP for a list of available commands.\n\
             > {}",
            GREETING, FAREWELL
        )
    );
}

#[test]
fn test_extra_arguments_are_invalid() {
    let config = PlayerConfig::new().with_prompt("> ");
    let output = run_session(
        &config,
        "CREATE_PLAYLIST my list
SEARCH_VIDEOS about nothing
SHOW_ALL_PLAYLISTS
",
    );

    assert_eq!(
        output,
        format!(
            "{}> Please enter a valid command, type HELP for a list of available commands.
             > Please enter a valid command, type HELP for a list of available commands.
             > No playlists exist yet
             > {}",
            GREETING, FAREWELL
        )
    );
}

#[test]
fn test_search_reads_follow_up_from_same_input() {
    let config = PlayerConfig::new().with_prompt("> ");
    let output = run_session(&config, "SEARCH_VIDEOS_WITH_TAG #google\n1\nSHOW_PLAYING\nEXIT\n");

    assert!(output.contains("1) Life at Google (life_at_google_video_id) [#google #career]\n"));
    assert!(output.contains("Playing video: Life at Google\n"));
    assert!(output
        .contains("Currently playing: Life at Google (life_at_google_video_id) [#google #career]\n"));
}

#[test]
fn test_help_lists_commands() {
    let config = PlayerConfig::new();
    let output = run_session(&config, "HELP\nEXIT\n");
    assert!(output.contains("Available commands:"));
    assert!(output.contains("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
}

#[test]
fn test_seeded_random_play_is_reproducible() {
    let config = PlayerConfig::new().with_seed(1234);
    let script = "PLAY_RANDOM\nPLAY_RANDOM\nPLAY_RANDOM\nEXIT\n";
    assert_eq!(run_session(&config, script), run_session(&config, script));
}

#[test]
fn test_load_catalog_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(
        &path,
        "// test catalogue\n\
         Rust Intro | rust_intro_id | #rust , #programming\n\
         Ferris Talk | ferris_id |\n",
    )
    .unwrap();

    let library = load_catalog(&path).unwrap();
    assert_eq!(library.video_count(), 2);
    assert_eq!(
        library.get_video("rust_intro_id").unwrap().tags,
        vec!["#rust", "#programming"]
    );

    let config = PlayerConfig::new().with_catalog(path).with_prompt("");
    let output = run_session(&config, "SHOW_ALL_VIDEOS\n");
    assert!(output.contains(
        "Here's a list of all available videos:\n\
         Ferris Talk (ferris_id) []\n\
         Rust Intro (rust_intro_id) [#rust #programming]\n"
    ));
}

#[test]
fn test_load_catalog_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let missing = load_catalog(&temp_dir.path().join("missing.txt"));
    assert!(missing.is_err());

    let path = temp_dir.path().join("bad.txt");
    fs::write(&path, "Good | good_id\nno separator here\n").unwrap();
    let err = load_catalog(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CatalogError>(),
        Some(&CatalogError::MalformedLine {
            line: 2,
            content: "no separator here".to_string()
        })
    );
}

#[test]
fn test_random_picker_type_in_session() {
    let library = PlayerConfig::new().load_library().unwrap();
    let mut player = VideoPlayer::new(
        library,
        PlaylistStore::new(),
        RandomPicker::seeded(7),
        Vec::new(),
    );
    player.play_random_video().unwrap();
    assert!(player.take_output().starts_with("Playing video: "));
    assert!(player.now_playing().is_some());
}
