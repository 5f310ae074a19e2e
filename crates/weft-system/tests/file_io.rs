//! File layer against a real temporary directory.

use tempfile::tempdir;

use weft_arena::Arena;
use weft_system::file;
use weft_system::{host, FileError, SeekOrigin};

#[test]
fn open_read_seek_close_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"weft weaves text").unwrap();

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);

    let mut file = file::open_to_read(&platform, path.to_str().unwrap().as_bytes(), &mut arena)
        .unwrap();

    let mut buffer = [0u8; 4];
    assert_eq!(file::read(&platform, &mut file, &mut buffer).unwrap(), 4);
    assert_eq!(&buffer, b"weft");

    assert_eq!(
        file::seek(&platform, &mut file, 5, SeekOrigin::Begin).unwrap(),
        5
    );
    assert_eq!(file::read(&platform, &mut file, &mut buffer).unwrap(), 4);
    assert_eq!(&buffer, b"weav");

    // Relative and end-anchored seeks.
    assert_eq!(
        file::seek(&platform, &mut file, -4, SeekOrigin::Cursor).unwrap(),
        5
    );
    assert_eq!(
        file::seek(&platform, &mut file, -4, SeekOrigin::End).unwrap(),
        12
    );
    assert_eq!(file::read(&platform, &mut file, &mut buffer).unwrap(), 4);
    assert_eq!(&buffer, b"text");

    file::close(&platform, file);
}

#[test]
fn path_scratch_never_outlives_the_call() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scratch.txt");
    std::fs::write(&path, b"x").unwrap();

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);

    let marker = arena.mark();
    let file = file::open_to_read(&platform, path.to_str().unwrap().as_bytes(), &mut arena)
        .unwrap();
    assert_eq!(arena.mark(), marker);
    assert_eq!(arena.used(), 0);
    file::close(&platform, file);

    // Failure paths restore the arena too.
    let missing = dir.path().join("missing.txt");
    let result = file::open_to_read(&platform, missing.to_str().unwrap().as_bytes(), &mut arena);
    assert_eq!(result.err(), Some(FileError::NotFound));
    assert_eq!(arena.used(), 0);
}

#[test]
fn create_if_new_refuses_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("once.txt");

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);
    let path_bytes = path.to_str().unwrap().as_bytes();

    let file = file::create_if_new(&platform, path_bytes, &mut arena).unwrap();
    file::close(&platform, file);
    assert!(path.exists());

    let again = file::create_if_new(&platform, path_bytes, &mut arena);
    assert_eq!(again.err(), Some(FileError::AlreadyExists));
}

#[test]
fn create_always_truncates_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trunc.txt");
    std::fs::write(&path, b"previous content").unwrap();

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);

    let file = file::create_always(&platform, path.to_str().unwrap().as_bytes(), &mut arena)
        .unwrap();
    file::close(&platform, file);

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn wide_path_survives_non_ascii_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("café-😀.txt");
    std::fs::write(&path, b"bonjour").unwrap();

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);

    let mut file = file::open_to_read(&platform, path.to_str().unwrap().as_bytes(), &mut arena)
        .unwrap();
    let mut buffer = [0u8; 7];
    assert_eq!(file::read(&platform, &mut file, &mut buffer).unwrap(), 7);
    assert_eq!(&buffer, b"bonjour");
    file::close(&platform, file);
}

#[test]
fn open_missing_file_fails_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.txt");

    let platform = host();
    let mut backing = vec![0u8; 4096];
    let mut arena = Arena::new(&mut backing);

    let result = file::open_to_read(&platform, path.to_str().unwrap().as_bytes(), &mut arena);
    assert_eq!(result.err(), Some(FileError::NotFound));
}
