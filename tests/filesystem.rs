// OsFileSystem against real directory trees, and the app on top of it

use ctag::filesystem::{EntryKind, FileSystem, OsFileSystem};
use ctag::tags::Id3TagReader;
use ctag::ui::input::InputEvent;
use ctag::ui::App;
use std::ffi::OsStr;
use std::fs;

fn sorted_names(fs: &OsFileSystem) -> Vec<String> {
    let mut names: Vec<String> = fs
        .list_directory()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    names.sort();
    names
}

#[test]
fn test_listing_hides_dotfiles_and_classifies() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("albums")).unwrap();
    fs::write(dir.path().join("song.mp3"), b"").unwrap();
    fs::write(dir.path().join(".hidden"), b"").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    let lister = OsFileSystem::at(dir.path()).unwrap();
    assert_eq!(sorted_names(&lister), vec!["albums", "song.mp3"]);
    assert_eq!(lister.stat(OsStr::new("albums")).unwrap(), EntryKind::Directory);
    assert_eq!(lister.stat(OsStr::new("song.mp3")).unwrap(), EntryKind::File);
    assert!(lister.stat(OsStr::new("missing")).is_err());
}

#[cfg(unix)]
#[test]
fn test_symlinks_classified_by_target() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
    symlink(dir.path().join("nowhere"), dir.path().join("dangling")).unwrap();

    let lister = OsFileSystem::at(dir.path()).unwrap();
    let entries = lister.list_directory().unwrap();
    let kind_of = |name: &str| entries.iter().find(|e| e.name == name).map(|e| e.kind);

    assert_eq!(kind_of("link"), Some(EntryKind::Directory));
    assert_eq!(kind_of("dangling"), Some(EntryKind::Other));
}

#[test]
fn test_app_walks_real_tree() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("rock/live")).unwrap();
    fs::write(dir.path().join("rock/b.mp3"), b"").unwrap();
    fs::write(dir.path().join("rock/a.mp3"), b"").unwrap();
    fs::write(dir.path().join("intro.mp3"), b"").unwrap();

    let lister = OsFileSystem::at(dir.path()).unwrap();
    let root = lister.current_dir().to_path_buf();
    let mut app = App::new(lister, Id3TagReader, 24, 80);

    // .., intro.mp3, rock
    app.handle_event(InputEvent::Down);
    app.handle_event(InputEvent::Down);
    app.handle_event(InputEvent::Enter);

    assert_eq!(app.current_dir(), root.join("rock"));
    assert_eq!(app.list.selected(), 0);
    let names: Vec<&str> = app.list.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["..", "a.mp3", "b.mp3", "live"]);

    // Back up through `..`
    app.handle_event(InputEvent::Enter);
    assert_eq!(app.current_dir(), root);
}

#[cfg(target_os = "linux")]
#[test]
fn test_enter_directory_with_non_utf8_name() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let raw = OsStr::from_bytes(b"caf\xe9");
    fs::create_dir(dir.path().join(raw)).unwrap();
    fs::write(dir.path().join(raw).join("song.mp3"), b"").unwrap();

    let lister = OsFileSystem::at(dir.path()).unwrap();
    let root = lister.current_dir().to_path_buf();
    let mut app = App::new(lister, Id3TagReader, 24, 80);

    app.handle_event(InputEvent::Down);
    assert_eq!(app.list.selected_entry().map(|e| e.name.as_str()), Some("caf\u{FFFD}"));
    app.handle_event(InputEvent::Enter);

    assert_eq!(app.current_dir(), root.join(raw));
    let names: Vec<&str> = app.list.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["..", "song.mp3"]);

    // The file inside opens with its full raw path
    app.handle_event(InputEvent::Down);
    app.handle_event(InputEvent::Enter);
    assert_eq!(app.editor.path(), Some(root.join(raw).join("song.mp3").as_path()));
}
